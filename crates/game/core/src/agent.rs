//! Controlled agents.
//!
//! A [`Buster`] pairs its spatial state ([`Body`]) with its activation stack.
//! The stack never points back at the agent; hooks receive the body through a
//! [`Blackboard`] built for the duration of each call.

use stack_fsm::{StackError, Step};

use crate::behavior::{Blackboard, BusterFsm, StateId};
use crate::command::Command;
use crate::geometry::Vector;
use crate::path::Path;
use crate::report::AgentStatus;
use crate::world::{Arena, EntityId};

/// Spatial and bookkeeping state of one agent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Body {
    pub id: EntityId,
    pub position: Vector,
    /// Where move commands steer.
    pub target: Vector,
    /// Ghost being tracked or captured, or rival being stunned.
    pub focus: Option<EntityId>,
    /// Turns until stunning is allowed again.
    pub stun_cooldown: u32,
    /// Patrol route followed while exploring; empty for free roamers.
    pub patrol: Path,
}

impl Body {
    pub fn new(id: EntityId, patrol: Path) -> Self {
        Self {
            id,
            position: Vector::ORIGIN,
            target: Vector::ORIGIN,
            focus: None,
            stun_cooldown: 0,
            patrol,
        }
    }
}

/// One controlled agent and its behavior stack.
#[derive(Debug)]
pub struct Buster {
    body: Body,
    fsm: BusterFsm,
}

impl Buster {
    /// Creates an agent exploring from the origin.
    pub fn new(id: EntityId, patrol: Path, arena: &mut Arena) -> Self {
        let mut body = Body::new(id, patrol);
        let fsm = BusterFsm::new(StateId::Explore, &mut Blackboard::new(&mut body, arena));
        Self { body, fsm }
    }

    #[inline]
    pub fn id(&self) -> EntityId {
        self.body.id
    }

    #[inline]
    pub fn position(&self) -> Vector {
        self.body.position
    }

    pub fn set_position(&mut self, position: Vector) {
        self.body.position = position;
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Id of the active behavior.
    #[inline]
    pub fn state(&self) -> StateId {
        self.fsm.state()
    }

    pub fn fsm(&self) -> &BusterFsm {
        &self.fsm
    }

    /// Activation ids from root to top, for diagnostics.
    pub fn stack(&self) -> Vec<StateId> {
        self.fsm.ids().collect()
    }

    /// Counts one turn off the stun cooldown.
    pub fn cool_down(&mut self) {
        self.body.stun_cooldown = self.body.stun_cooldown.saturating_sub(1);
    }

    /// True if the cooldown has elapsed and the agent is not stunned.
    pub fn can_stun(&self) -> bool {
        self.body.stun_cooldown == 0 && self.state() != StateId::Stunned
    }

    /// Starts tracking `ghost` if the agent is idle or exploring.
    ///
    /// Returns `Ok(false)` and leaves the agent untouched when it is busy or
    /// the ghost has no record.
    pub fn track(&mut self, ghost: EntityId, arena: &mut Arena) -> Result<bool, StackError> {
        if !matches!(self.state(), StateId::Idle | StateId::Explore) {
            return Ok(false);
        }
        let Some(position) = arena.ghost(ghost).map(|record| record.position) else {
            return Ok(false);
        };

        self.body.focus = Some(ghost);
        self.body.target = position;
        self.drive(arena, |fsm, bb| fsm.push(StateId::Track, bb))?;

        tracing::debug!(agent = %self.body.id, %ghost, "Tracking ghost");
        Ok(true)
    }

    /// Starts stunning `rival`. Eligibility is the caller's concern.
    pub fn stun(&mut self, rival: EntityId, arena: &mut Arena) -> Result<(), StackError> {
        self.body.focus = Some(rival);
        self.drive(arena, |fsm, bb| fsm.push(StateId::Stun, bb))?;

        tracing::debug!(agent = %self.body.id, %rival, "Stunning rival");
        Ok(())
    }

    /// Switches to Return when the agent newly reports carrying a ghost.
    ///
    /// The current top is replaced, so whatever led to the capture is
    /// discarded and Explore stays underneath. A lone root is kept and
    /// Return is pushed over it instead.
    pub fn has_ghost(&mut self, carrying: bool, arena: &mut Arena) -> Result<(), StackError> {
        if !carrying || self.fsm.contains(StateId::Return) {
            return Ok(());
        }

        tracing::debug!(agent = %self.body.id, from = %self.state(), "Carrying ghost home");
        self.drive(arena, |fsm, bb| {
            if fsm.depth() > 1 {
                fsm.replace(StateId::Return, bb);
                Ok(())
            } else {
                fsm.push(StateId::Return, bb)
            }
        })
    }

    /// Reconciles the stack with the status the referee reported.
    ///
    /// Order matters: carrying first, then stun entry and exit, then loss of
    /// the carried ghost.
    pub fn sync_status(&mut self, status: AgentStatus, arena: &mut Arena) -> Result<(), StackError> {
        self.has_ghost(status == AgentStatus::Carrying, arena)?;

        let stunned = status == AgentStatus::Stunned;
        if stunned && self.state() != StateId::Stunned {
            self.drive(arena, |fsm, bb| fsm.push(StateId::Stunned, bb))?;
        }
        if !stunned && self.state() == StateId::Stunned {
            self.drive(arena, |fsm, bb| fsm.pop(bb))?;
        }

        if self.state() == StateId::Return && status != AgentStatus::Carrying {
            self.leave(arena)?;
        }

        Ok(())
    }

    /// Runs one update of the active behavior.
    pub fn update(&mut self, arena: &mut Arena) -> Result<Step<StateId>, StackError> {
        let step = self.drive(arena, |fsm, bb| fsm.update(bb))?;

        if step.is_transition() {
            tracing::debug!(agent = %self.body.id, ?step, "Behavior transition");
        }
        tracing::trace!(agent = %self.body.id, stack = ?self.stack(), "Stack after update");
        Ok(step)
    }

    /// Command for the active behavior.
    pub fn command(&self) -> Command {
        let state = self.state();
        let stay = Command::move_to(self.body.position, state);

        match state {
            StateId::Idle | StateId::Stunned => stay,
            StateId::Explore | StateId::Track | StateId::Return => {
                Command::move_to(self.body.target, state)
            }
            StateId::Capture => self.body.focus.map_or(stay, Command::Bust),
            StateId::Stun => self.body.focus.map_or(stay, Command::Stun),
            StateId::Release => Command::Release,
        }
    }

    /// Drops the active behavior; a root behavior is replaced by Explore.
    fn leave(&mut self, arena: &mut Arena) -> Result<(), StackError> {
        self.drive(arena, |fsm, bb| {
            if fsm.depth() > 1 {
                fsm.pop(bb).map(|_| ())
            } else {
                fsm.replace(StateId::Explore, bb);
                Ok(())
            }
        })
    }

    fn drive<R>(
        &mut self,
        arena: &mut Arena,
        f: impl FnOnce(&mut BusterFsm, &mut Blackboard<'_>) -> R,
    ) -> R {
        let mut bb = Blackboard::new(&mut self.body, arena);
        f(&mut self.fsm, &mut bb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BusterConfig;
    use crate::world::{Rival, Team};

    fn arena() -> Arena {
        Arena::new(Team::Left, 4, vec![Rival::new(EntityId(4))], 1)
    }

    fn buster(arena: &mut Arena) -> Buster {
        Buster::new(EntityId(0), Path::new(), arena)
    }

    #[test]
    fn starts_exploring_towards_a_point_in_the_arena() {
        let mut arena = arena();
        let agent = buster(&mut arena);

        assert_eq!(agent.stack(), vec![StateId::Explore]);
        assert!(matches!(agent.command(), Command::Move { label: StateId::Explore, .. }));
    }

    #[test]
    fn track_only_redirects_idle_or_exploring_agents() {
        let mut arena = arena();
        arena.ghost_mut(EntityId(1)).unwrap().sighted(Vector::new(3000, 0));
        let mut agent = buster(&mut arena);

        assert_eq!(agent.track(EntityId(1), &mut arena), Ok(true));
        assert_eq!(agent.stack(), vec![StateId::Explore, StateId::Track]);
        assert_eq!(agent.body().target, Vector::new(3000, 0));

        // Already tracking: refused, nothing changes
        assert_eq!(agent.track(EntityId(2), &mut arena), Ok(false));
        assert_eq!(agent.body().focus, Some(EntityId(1)));
        assert_eq!(agent.fsm().depth(), 2);
    }

    #[test]
    fn track_refuses_unknown_ghost() {
        let mut arena = arena();
        let mut agent = buster(&mut arena);

        assert_eq!(agent.track(EntityId(99), &mut arena), Ok(false));
        assert_eq!(agent.state(), StateId::Explore);
    }

    #[test]
    fn carrying_replaces_capture_with_return() {
        let mut arena = arena();
        arena.ghost_mut(EntityId(0)).unwrap().sighted(Vector::new(1000, 0));
        let mut agent = buster(&mut arena);
        agent.track(EntityId(0), &mut arena).unwrap();
        agent.update(&mut arena).unwrap();
        assert_eq!(agent.state(), StateId::Capture);
        assert_eq!(agent.command(), Command::Bust(EntityId(0)));

        agent.sync_status(AgentStatus::Carrying, &mut arena).unwrap();
        assert_eq!(agent.stack(), vec![StateId::Explore, StateId::Return]);

        // Still carrying next turn: no second Return
        agent.sync_status(AgentStatus::Carrying, &mut arena).unwrap();
        assert_eq!(agent.fsm().depth(), 2);
    }

    #[test]
    fn carrying_on_bare_root_pushes_return() {
        let mut arena = arena();
        let mut agent = buster(&mut arena);

        agent.has_ghost(true, &mut arena).unwrap();

        assert_eq!(agent.stack(), vec![StateId::Explore, StateId::Return]);
        assert_eq!(agent.body().target, BusterConfig::LEFT_BASE);
    }

    #[test]
    fn losing_the_ghost_leaves_return() {
        let mut arena = arena();
        let mut agent = buster(&mut arena);
        agent.has_ghost(true, &mut arena).unwrap();

        agent.sync_status(AgentStatus::Idle, &mut arena).unwrap();

        assert_eq!(agent.stack(), vec![StateId::Explore]);
    }

    #[test]
    fn stunned_status_pushes_and_clears_stunned() {
        let mut arena = arena();
        let mut agent = buster(&mut arena);

        agent.sync_status(AgentStatus::Stunned, &mut arena).unwrap();
        assert_eq!(agent.state(), StateId::Stunned);
        assert!(!agent.can_stun());
        assert_eq!(
            agent.command(),
            Command::move_to(agent.position(), StateId::Stunned)
        );

        agent.sync_status(AgentStatus::Stunned, &mut arena).unwrap();
        assert_eq!(agent.fsm().depth(), 2);

        agent.sync_status(AgentStatus::Idle, &mut arena).unwrap();
        assert_eq!(agent.stack(), vec![StateId::Explore]);
    }

    #[test]
    fn stunned_countdown_pops_after_exactly_ten_updates() {
        let mut arena = arena();
        let mut agent = buster(&mut arena);
        agent.sync_status(AgentStatus::Stunned, &mut arena).unwrap();

        for _ in 1..BusterConfig::STUNNED_TURNS {
            agent.update(&mut arena).unwrap();
            assert_eq!(agent.state(), StateId::Stunned);
        }
        agent.update(&mut arena).unwrap();
        assert_eq!(agent.state(), StateId::Explore);
    }

    #[test]
    fn stun_exit_starts_twenty_turn_cooldown() {
        let mut arena = arena();
        let rival = EntityId(4);
        let mut agent = buster(&mut arena);
        arena
            .rival_mut(rival)
            .unwrap()
            .sighted(Vector::new(500, 0), AgentStatus::Carrying);

        agent.stun(rival, &mut arena).unwrap();
        agent.update(&mut arena).unwrap();
        assert_eq!(agent.state(), StateId::Stun);
        assert_eq!(agent.command(), Command::Stun(rival));

        // Target escapes out of view
        arena.forget_rivals();
        agent.update(&mut arena).unwrap();
        assert_eq!(agent.state(), StateId::Explore);
        assert_eq!(agent.body().stun_cooldown, BusterConfig::STUN_COOLDOWN);

        for _ in 1..BusterConfig::STUN_COOLDOWN {
            agent.cool_down();
            assert!(!agent.can_stun());
        }
        agent.cool_down();
        assert!(agent.can_stun());
    }

    #[test]
    fn release_pops_back_to_explore_and_counts_once() {
        let mut arena = arena();
        let mut agent = buster(&mut arena);
        agent.has_ghost(true, &mut arena).unwrap();
        agent.set_position(Vector::new(1000, 1000));

        agent.update(&mut arena).unwrap();
        assert_eq!(agent.state(), StateId::Release);
        assert_eq!(agent.command(), Command::Release);
        assert_eq!(arena.captured(), 0);

        agent.update(&mut arena).unwrap();
        assert_eq!(agent.stack(), vec![StateId::Explore]);
        assert_eq!(arena.captured(), 1);
        assert_eq!(agent.body().focus, None);
    }
}
