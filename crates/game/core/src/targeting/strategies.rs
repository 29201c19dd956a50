//! Built-in targeting strategies.

use super::TargetingStrategy;
use crate::agent::Buster;
use crate::behavior::StateId;
use crate::config::BusterConfig;
use crate::world::{Arena, EntityId, Perception};

/// Closest ghost among those reported this turn.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestFreshGhost;

impl TargetingStrategy for NearestFreshGhost {
    fn select(&self, agent: &Buster, arena: &Arena, perception: &Perception) -> Option<EntityId> {
        let origin = agent.position();

        perception
            .ghosts
            .iter()
            .filter_map(|&id| arena.ghost(id).map(|ghost| (id, ghost.position)))
            .min_by_key(|&(_, position)| origin.distance_sqr(position))
            .map(|(id, _)| id)
    }

    fn name(&self) -> &'static str {
        "NearestFreshGhost"
    }
}

/// Most recently seen ghost that is not yet stale.
///
/// Ignores the agent: every agent gets the same pick. Ghosts never seen or
/// currently being carried are not candidates.
#[derive(Debug, Clone, Copy, Default)]
pub struct FreshestStaleGhost;

impl TargetingStrategy for FreshestStaleGhost {
    fn select(&self, _agent: &Buster, arena: &Arena, _perception: &Perception) -> Option<EntityId> {
        arena
            .ghosts()
            .iter()
            .enumerate()
            .filter(|(_, ghost)| !ghost.captured)
            .filter_map(|(index, ghost)| Some((index, ghost.last_seen?)))
            .filter(|&(_, age)| age < BusterConfig::STALE_GHOST_TURNS)
            .min_by_key(|&(_, age)| age)
            .map(|(index, _)| EntityId(index as u32))
    }

    fn name(&self) -> &'static str {
        "FreshestStaleGhost"
    }
}

/// First rival in report order that is in stun reach and carrying a ghost home.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReturningRival;

impl TargetingStrategy for ReturningRival {
    fn select(&self, agent: &Buster, arena: &Arena, perception: &Perception) -> Option<EntityId> {
        let origin = agent.position();

        perception
            .rivals
            .iter()
            .filter_map(|&id| arena.rival(id))
            .find(|rival| {
                origin.distance_sqr(rival.position) <= BusterConfig::STUN_RANGE_SQR
                    && rival.posture != StateId::Stunned
                    && rival.posture == StateId::Return
            })
            .map(|rival| rival.id)
    }

    fn name(&self) -> &'static str {
        "ReturningRival"
    }
}
