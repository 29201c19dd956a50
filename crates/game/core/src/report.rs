//! Per-turn sighting reports.
//!
//! A [`Report`] is one visible entity as the referee describes it, already
//! classified into ghost or agent. Turning text into reports is the client's
//! job; turning reports into world updates is [`crate::Match::observe`].

use crate::behavior::StateId;
use crate::geometry::Vector;
use crate::world::{EntityId, Team};

/// Coarse status code reported for an agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum AgentStatus {
    /// Code 0: moving or idle, hands empty.
    Idle,
    /// Code 1: carrying a ghost.
    Carrying,
    /// Code 2: stunned.
    Stunned,
    /// Code 3: busy trapping a ghost.
    Busting,
}

impl AgentStatus {
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Idle),
            1 => Some(Self::Carrying),
            2 => Some(Self::Stunned),
            3 => Some(Self::Busting),
            _ => None,
        }
    }

    /// Behavior an opponent is assumed to be in when reporting this status.
    pub const fn inferred_state(self) -> StateId {
        match self {
            Self::Idle => StateId::Explore,
            Self::Carrying => StateId::Return,
            Self::Stunned => StateId::Stunned,
            Self::Busting => StateId::Capture,
        }
    }
}

/// One entity visible this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Report {
    Ghost {
        id: EntityId,
        position: Vector,
    },
    Agent {
        id: EntityId,
        position: Vector,
        team: Team,
        status: AgentStatus,
        /// Ghost being carried, if any.
        carried: Option<EntityId>,
    },
}

impl Report {
    pub fn id(&self) -> EntityId {
        match *self {
            Report::Ghost { id, .. } | Report::Agent { id, .. } => id,
        }
    }
}
