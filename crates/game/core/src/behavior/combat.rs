//! Agent-versus-agent behaviors: Stun and Stunned.

use stack_fsm::Transition;

use super::{Blackboard, StateId};
use crate::config::BusterConfig;
use crate::world::EntityId;

/// Keeps stunning a rival until it goes down or out of view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stun {
    rival: Option<EntityId>,
}

impl Stun {
    pub fn enter(&mut self, bb: &mut Blackboard<'_>) {
        bb.bind_focus(&mut self.rival);
    }

    pub fn rival(&self) -> Option<EntityId> {
        self.rival
    }

    pub fn update(&mut self, bb: &mut Blackboard<'_>) -> Transition<StateId> {
        let target = self.rival.and_then(|id| bb.arena.rival(id));

        match target {
            Some(rival) if rival.seen && rival.posture != StateId::Stunned => Transition::Stay,
            _ => Transition::Pop,
        }
    }

    pub fn exit(&mut self, bb: &mut Blackboard<'_>) {
        bb.body.stun_cooldown = BusterConfig::STUN_COOLDOWN;
    }
}

/// Waits out a stun.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stunned {
    turns_left: u32,
}

impl Stunned {
    pub fn enter(&mut self, _bb: &mut Blackboard<'_>) {
        self.turns_left = BusterConfig::STUNNED_TURNS;
    }

    pub fn update(&mut self, _bb: &mut Blackboard<'_>) -> Transition<StateId> {
        self.turns_left = self.turns_left.saturating_sub(1);
        if self.turns_left == 0 {
            Transition::Pop
        } else {
            Transition::Stay
        }
    }

    pub fn turns_left(&self) -> u32 {
        self.turns_left
    }
}
