//! Targeting strategy trait.

use crate::agent::Buster;
use crate::world::{Arena, EntityId, Perception};

/// Strategy for picking the entity an agent should react to this turn.
///
/// Implementations must be deterministic: equal inputs give equal picks, and
/// ties resolve to the earliest candidate in report (or id) order.
pub trait TargetingStrategy {
    /// Selects a target for `agent`, or `None` if nothing qualifies.
    fn select(&self, agent: &Buster, arena: &Arena, perception: &Perception) -> Option<EntityId>;

    /// Returns the strategy name for debugging and logging.
    fn name(&self) -> &'static str;
}
