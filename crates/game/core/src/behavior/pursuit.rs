//! Ghost pursuit: Track and Capture.

use stack_fsm::Transition;

use super::{Blackboard, StateId};
use crate::config::BusterConfig;
use crate::world::{EntityId, Ghost};

/// Returns true if a ghost at this squared distance can be trapped.
///
/// The band is closed below and open above. Ghosts closer than the lower
/// bound never qualify, so an agent sitting on top of its ghost keeps
/// tracking until the ghost drifts into the band.
#[inline]
pub fn in_capture_band(distance_sqr: i64) -> bool {
    (BusterConfig::CAPTURE_MIN_SQR..BusterConfig::CAPTURE_MAX_SQR).contains(&distance_sqr)
}

fn ghost_record(bb: &Blackboard<'_>, id: Option<EntityId>) -> Option<Ghost> {
    id.and_then(|id| bb.arena.ghost(id)).copied()
}

/// Closes in on a ghost.
///
/// The ghost is fixed when the activation is pushed and survives any detour
/// suspending it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Track {
    ghost: Option<EntityId>,
}

impl Track {
    pub fn enter(&mut self, bb: &mut Blackboard<'_>) {
        bb.bind_focus(&mut self.ghost);
    }

    pub fn ghost(&self) -> Option<EntityId> {
        self.ghost
    }

    pub fn update(&mut self, bb: &mut Blackboard<'_>) -> Transition<StateId> {
        let Some(ghost) = ghost_record(bb, self.ghost) else {
            return Transition::Pop;
        };

        bb.body.target = ghost.position;
        let distance = bb.body.position.distance_sqr(ghost.position);

        if in_capture_band(distance) {
            tracing::debug!(agent = %bb.body.id, distance, "Ghost in capture band");
            return Transition::Goto(StateId::Capture);
        }

        // Lost sight of it: let targeting pick again next turn
        if !ghost.is_fresh() {
            return Transition::Pop;
        }

        Transition::Stay
    }
}

/// Holds position and traps the ghost handed over by [`Track`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capture {
    ghost: Option<EntityId>,
}

impl Capture {
    pub fn enter(&mut self, bb: &mut Blackboard<'_>) {
        bb.bind_focus(&mut self.ghost);
    }

    pub fn ghost(&self) -> Option<EntityId> {
        self.ghost
    }

    pub fn update(&mut self, bb: &mut Blackboard<'_>) -> Transition<StateId> {
        match ghost_record(bb, self.ghost) {
            Some(ghost) if ghost.is_fresh() => Transition::Stay,
            _ => Transition::Pop,
        }
    }
}
