//! Per-turn decision engine for a squad of ghost-busting agents.
//!
//! `buster-core` turns the referee's sighting reports into one command per
//! controlled agent. Each agent runs its own activation stack of behaviors
//! (see [`behavior`]); a few squad-wide heuristics (see [`targeting`]) push
//! work onto those stacks between ingestion and update. Everything outside
//! text I/O lives here, and [`Match`] is the entry point.
pub mod agent;
pub mod behavior;
pub mod command;
pub mod config;
pub mod error;
pub mod geometry;
pub mod path;
pub mod report;
pub mod targeting;
pub mod turn;
pub mod world;

pub use agent::{Body, Buster};
pub use behavior::{Behavior, Blackboard, BusterFsm, StateId, in_capture_band};
pub use command::Command;
pub use config::BusterConfig;
pub use error::{ErrorSeverity, GameError};
pub use geometry::Vector;
pub use path::{Path, Waypoint};
pub use report::{AgentStatus, Report};
pub use targeting::{FreshestStaleGhost, NearestFreshGhost, ReturningRival, TargetingStrategy};
pub use turn::{Match, MatchSetup, TurnError, patrol_route};
pub use world::{Arena, EntityId, Ghost, Perception, Rival, Team};
