//! Agent behaviors driven by the activation stack.
//!
//! Each behavior is a small type with `enter` / `update` / `exit` hooks that
//! read and mutate its agent through a [`Blackboard`]. [`Behavior`] is the
//! activation record stored on the stack: one variant per [`StateId`], each
//! carrying whatever that activation needs (its ghost or rival, the homing
//! path, the stun countdown). Targets are fixed on the first entry and put
//! back in focus when the activation resumes; other data is re-initialized
//! on every entry.
//!
//! | State | Suspends | Finishes with |
//! |---|---|---|
//! | Idle | - | Explore |
//! | Explore | - | never |
//! | Track | Explore | Capture, or Pop when the ghost is lost |
//! | Capture | Explore | Pop when the ghost leaves view |
//! | Return | Explore | Release when home |
//! | Release | Explore | Pop |
//! | Stun | anything | Pop when the target is down or gone |
//! | Stunned | anything | Pop after a fixed countdown |

mod blackboard;
mod combat;
mod delivery;
mod explore;
mod pursuit;

pub use blackboard::Blackboard;
pub use combat::{Stun, Stunned};
pub use delivery::{Release, Return};
pub use explore::{Explore, Idle};
pub use pursuit::{Capture, Track, in_capture_band};

use stack_fsm::{Activation, StackMachine, State, Transition};

use crate::config::BusterConfig;

/// Stable identifier of each behavior.
///
/// The string form doubles as the label attached to move commands.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum StateId {
    Idle,
    Explore,
    Track,
    Capture,
    Return,
    Release,
    Stun,
    Stunned,
}

/// One activation on an agent's stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Behavior {
    Idle(Idle),
    Explore(Explore),
    Track(Track),
    Capture(Capture),
    Return(Return),
    Release(Release),
    Stun(Stun),
    Stunned(Stunned),
}

/// Activation stack of a single agent.
pub type BusterFsm = StackMachine<Behavior, { BusterConfig::STACK_CAPACITY }>;

impl Activation for Behavior {
    type Id = StateId;

    fn activate(id: StateId) -> Self {
        match id {
            StateId::Idle => Self::Idle(Idle),
            StateId::Explore => Self::Explore(Explore),
            StateId::Track => Self::Track(Track::default()),
            StateId::Capture => Self::Capture(Capture::default()),
            StateId::Return => Self::Return(Return::default()),
            StateId::Release => Self::Release(Release),
            StateId::Stun => Self::Stun(Stun::default()),
            StateId::Stunned => Self::Stunned(Stunned::default()),
        }
    }

    fn id(&self) -> StateId {
        match self {
            Self::Idle(_) => StateId::Idle,
            Self::Explore(_) => StateId::Explore,
            Self::Track(_) => StateId::Track,
            Self::Capture(_) => StateId::Capture,
            Self::Return(_) => StateId::Return,
            Self::Release(_) => StateId::Release,
            Self::Stun(_) => StateId::Stun,
            Self::Stunned(_) => StateId::Stunned,
        }
    }
}

impl<'a> State<Blackboard<'a>> for Behavior {
    fn enter(&mut self, bb: &mut Blackboard<'a>) {
        match self {
            Self::Explore(state) => state.enter(bb),
            Self::Track(state) => state.enter(bb),
            Self::Capture(state) => state.enter(bb),
            Self::Return(state) => state.enter(bb),
            Self::Stun(state) => state.enter(bb),
            Self::Stunned(state) => state.enter(bb),
            Self::Idle(_) | Self::Release(_) => {}
        }
    }

    fn update(&mut self, bb: &mut Blackboard<'a>) -> Transition<StateId> {
        match self {
            Self::Idle(state) => state.update(bb),
            Self::Explore(state) => state.update(bb),
            Self::Track(state) => state.update(bb),
            Self::Capture(state) => state.update(bb),
            Self::Return(state) => state.update(bb),
            Self::Release(state) => state.update(bb),
            Self::Stun(state) => state.update(bb),
            Self::Stunned(state) => state.update(bb),
        }
    }

    fn exit(&mut self, bb: &mut Blackboard<'a>) {
        match self {
            Self::Release(state) => state.exit(bb),
            Self::Stun(state) => state.exit(bb),
            Self::Idle(_)
            | Self::Explore(_)
            | Self::Track(_)
            | Self::Capture(_)
            | Self::Return(_)
            | Self::Stunned(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn every_id_activates_its_own_variant() {
        assert_eq!(StateId::COUNT, 8);
        for id in StateId::iter() {
            assert_eq!(Behavior::activate(id).id(), id);
        }
    }

    #[test]
    fn ids_render_as_command_labels() {
        assert_eq!(StateId::Explore.as_ref(), "EXPLORE");
        assert_eq!(StateId::Stunned.to_string(), "STUNNED");
    }
}
