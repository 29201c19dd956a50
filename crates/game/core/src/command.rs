//! Per-turn agent commands.

use std::fmt;

use crate::behavior::StateId;
use crate::geometry::Vector;
use crate::world::EntityId;

/// The single action an agent takes this turn.
///
/// `Display` renders the referee's text form, one line without the newline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move towards a point. The label is echoed as the on-screen message.
    Move { to: Vector, label: StateId },
    /// Try to trap a ghost.
    Bust(EntityId),
    /// Drop the carried ghost.
    Release,
    /// Stun an opposing agent.
    Stun(EntityId),
}

impl Command {
    pub const fn move_to(to: Vector, label: StateId) -> Self {
        Self::Move { to, label }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move { to, label } => write!(f, "MOVE {} {} {}", to.x, to.y, label),
            Self::Bust(ghost) => write!(f, "BUST {}", ghost.0),
            Self::Release => f.write_str("RELEASE"),
            Self::Stun(rival) => write!(f, "STUN {}", rival.0),
        }
    }
}
