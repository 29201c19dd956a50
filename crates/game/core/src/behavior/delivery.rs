//! Ghost delivery: Return and Release.

use stack_fsm::Transition;

use super::{Blackboard, StateId};
use crate::config::BusterConfig;
use crate::path::Path;

/// Carries a captured ghost back to the home base.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Return {
    path: Path,
}

impl Return {
    pub fn enter(&mut self, bb: &mut Blackboard<'_>) {
        let home = bb.arena.team().home_base();
        bb.body.target = home;

        self.path = Path::new();
        self.path.push_waypoint(home, BusterConfig::RETURN_RADIUS);
    }

    pub fn update(&mut self, bb: &mut Blackboard<'_>) -> Transition<StateId> {
        self.path.update(bb.body.position);

        if self.path.is_done() {
            return Transition::Goto(StateId::Release);
        }
        if let Some(waypoint) = self.path.next_waypoint() {
            bb.body.target = waypoint.point;
        }

        Transition::Stay
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// One-shot drop of the carried ghost.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Release;

impl Release {
    pub fn update(&mut self, bb: &mut Blackboard<'_>) -> Transition<StateId> {
        bb.body.focus = None;
        Transition::Pop
    }

    pub fn exit(&mut self, bb: &mut Blackboard<'_>) {
        bb.arena.record_capture();
        tracing::info!(
            agent = %bb.body.id,
            captured = bb.arena.captured(),
            "Ghost released at base"
        );
    }
}
