//! Turn controller.
//!
//! [`Match`] owns the squad and the arena for a whole session and runs the
//! fixed per-turn pipeline:
//!
//! 1. [`Match::begin_turn`] ages ghost records and clears per-turn visibility
//! 2. [`Match::observe`] ingests each report in order
//! 3. targeting heuristics assign ghosts and stun targets
//! 4. each agent's active behavior runs one update and yields one command
//!
//! [`Match::play_turn`] does all four and returns the commands in squad order.

use stack_fsm::StackError;

use crate::agent::Buster;
use crate::command::Command;
use crate::config::BusterConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::geometry::Vector;
use crate::path::Path;
use crate::report::{AgentStatus, Report};
use crate::targeting;
use crate::world::{Arena, EntityId, Perception, Rival, Team};

/// Route of the first squad slot.
const OUTER_PATROL: [Vector; 3] = [
    Vector::new(13801, 2200),
    Vector::new(13801, 6801),
    Vector::new(2200, 6801),
];

/// Route of the last squad slot.
const INNER_PATROL: [Vector; 3] = [
    Vector::new(2200, 6801),
    Vector::new(13801, 6801),
    Vector::new(8000, 4500),
];

/// Session parameters read once before the first turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchSetup {
    pub busters_per_player: u32,
    pub ghost_count: u32,
    pub team: Team,
}

impl MatchSetup {
    /// Ids of the agents fielded by `team`, in slot order.
    pub fn squad_ids(&self, team: Team) -> impl Iterator<Item = EntityId> {
        let first = team.index() * self.busters_per_player;
        (first..first + self.busters_per_player).map(EntityId)
    }
}

/// Patrol route for a squad slot.
///
/// The first slot sweeps the outer loop and the last slot the inner one. A
/// single agent takes the outer loop; middle slots roam freely.
pub fn patrol_route(slot: u32, busters_per_player: u32) -> Path {
    if slot == 0 {
        Path::cyclic(&OUTER_PATROL, BusterConfig::PATROL_RADIUS)
    } else if slot + 1 == busters_per_player {
        Path::cyclic(&INNER_PATROL, BusterConfig::PATROL_RADIUS)
    } else {
        Path::new()
    }
}

/// Errors raised while playing a turn.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("report for unknown ghost {id} (ghost count {count})")]
    UnknownGhost { id: EntityId, count: usize },

    #[error("report for unknown agent {id}")]
    UnknownAgent { id: EntityId },

    #[error("behavior stack of agent {agent} failed: {source}")]
    Stack {
        agent: EntityId,
        #[source]
        source: StackError,
    },
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownGhost { .. } | Self::UnknownAgent { .. } => ErrorSeverity::Validation,
            Self::Stack { source, .. } => source.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownGhost { .. } => "TURN_UNKNOWN_GHOST",
            Self::UnknownAgent { .. } => "TURN_UNKNOWN_AGENT",
            Self::Stack { source, .. } => source.error_code(),
        }
    }
}

/// Decision engine for one side of one session.
#[derive(Debug)]
pub struct Match {
    setup: MatchSetup,
    squad: Vec<Buster>,
    arena: Arena,
    perception: Perception,
    turn: u32,
}

impl Match {
    pub fn new(setup: MatchSetup, config: &BusterConfig) -> Self {
        let rivals = setup
            .squad_ids(setup.team.opponent())
            .map(Rival::new)
            .collect();
        let mut arena = Arena::new(
            setup.team,
            setup.ghost_count as usize,
            rivals,
            config.rng_seed,
        );

        let squad = setup
            .squad_ids(setup.team)
            .zip(0..)
            .map(|(id, slot)| {
                Buster::new(id, patrol_route(slot, setup.busters_per_player), &mut arena)
            })
            .collect();

        tracing::info!(
            team = %setup.team,
            busters = setup.busters_per_player,
            ghosts = setup.ghost_count,
            "Match ready"
        );

        Self {
            setup,
            squad,
            arena,
            perception: Perception::default(),
            turn: 0,
        }
    }

    pub fn setup(&self) -> &MatchSetup {
        &self.setup
    }

    /// Turns started so far.
    #[inline]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn squad(&self) -> &[Buster] {
        &self.squad
    }

    pub fn agent(&self, id: EntityId) -> Option<&Buster> {
        self.squad.iter().find(|agent| agent.id() == id)
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn perception(&self) -> &Perception {
        &self.perception
    }

    /// Ghosts released at home so far.
    pub fn captured(&self) -> u32 {
        self.arena.captured()
    }

    /// Opens a new turn: ghosts age and nothing counts as seen yet.
    pub fn begin_turn(&mut self) {
        self.turn += 1;
        self.arena.age_ghosts();
        self.arena.forget_rivals();
        self.perception.clear();
    }

    /// Ingests one report of the current turn.
    pub fn observe(&mut self, report: Report) -> Result<(), TurnError> {
        match report {
            Report::Ghost { id, position } => {
                let count = self.arena.ghosts().len();
                let ghost = self
                    .arena
                    .ghost_mut(id)
                    .ok_or(TurnError::UnknownGhost { id, count })?;
                ghost.sighted(position);
                self.perception.ghosts.push(id);
            }
            Report::Agent {
                id,
                position,
                team,
                status,
                carried,
            } => {
                if let Some(ghost) = carried.and_then(|ghost| self.arena.ghost_mut(ghost)) {
                    ghost.captured = true;
                }

                if team == self.arena.team() {
                    self.observe_own(id, position, status)?;
                } else {
                    let rival = self
                        .arena
                        .rival_mut(id)
                        .ok_or(TurnError::UnknownAgent { id })?;
                    rival.sighted(position, status);
                    self.perception.rivals.push(id);
                }
            }
        }
        Ok(())
    }

    /// Runs the ghost and stun heuristics over the squad.
    pub fn assign_targets(&mut self) -> Result<(), TurnError> {
        targeting::assign_ghosts(&mut self.squad, &mut self.arena, &self.perception)?;
        targeting::assign_stuns(&mut self.squad, &mut self.arena, &self.perception)
    }

    /// Updates every agent once and collects their commands in squad order.
    pub fn act(&mut self) -> Result<Vec<Command>, TurnError> {
        self.squad
            .iter_mut()
            .map(|agent| {
                agent
                    .update(&mut self.arena)
                    .map_err(|source| TurnError::Stack { agent: agent.id(), source })?;
                Ok(agent.command())
            })
            .collect()
    }

    /// Plays a full turn over `reports`.
    ///
    /// Reports that fail validation are logged and skipped; stack failures
    /// abort the turn.
    pub fn play_turn(&mut self, reports: &[Report]) -> Result<Vec<Command>, TurnError> {
        self.begin_turn();

        for &report in reports {
            if let Err(err) = self.observe(report) {
                if !err.severity().is_recoverable() {
                    return Err(err);
                }
                tracing::warn!(turn = self.turn, code = err.error_code(), "Skipping report: {err}");
            }
        }

        self.assign_targets()?;
        let commands = self.act()?;

        tracing::debug!(
            turn = self.turn,
            ghosts = self.perception.ghosts.len(),
            rivals = self.perception.rivals.len(),
            captured = self.captured(),
            "Turn played"
        );
        Ok(commands)
    }

    fn observe_own(
        &mut self,
        id: EntityId,
        position: Vector,
        status: AgentStatus,
    ) -> Result<(), TurnError> {
        let agent = self
            .squad
            .iter_mut()
            .find(|agent| agent.id() == id)
            .ok_or(TurnError::UnknownAgent { id })?;

        agent.set_position(position);
        agent
            .sync_status(status, &mut self.arena)
            .map_err(|source| TurnError::Stack { agent: id, source })?;
        agent.cool_down();
        Ok(())
    }
}
