//! Per-turn assignment heuristics.
//!
//! Heuristics run after all reports of a turn are ingested and before any
//! behavior updates. Picks are delegated to [`TargetingStrategy`]
//! implementations; this module only decides which agents get to act on them.

mod strategies;
mod strategy;

pub use strategies::{FreshestStaleGhost, NearestFreshGhost, ReturningRival};
pub use strategy::TargetingStrategy;

use crate::agent::Buster;
use crate::behavior::StateId;
use crate::turn::TurnError;
use crate::world::{Arena, Perception};

/// Sends every agent that is not stunned after a ghost.
///
/// With ghosts in view each agent tracks its nearest one. Otherwise every
/// agent falls back to the same recently seen ghost, picked once per turn.
/// Agents that are busy ignore the assignment.
pub fn assign_ghosts(
    squad: &mut [Buster],
    arena: &mut Arena,
    perception: &Perception,
) -> Result<(), TurnError> {
    let fallback = match squad.first() {
        Some(agent) if perception.ghosts.is_empty() => {
            FreshestStaleGhost.select(agent, arena, perception)
        }
        _ => None,
    };

    for agent in squad.iter_mut() {
        if agent.state() == StateId::Stunned {
            continue;
        }

        let pick = if perception.ghosts.is_empty() {
            fallback
        } else {
            NearestFreshGhost.select(agent, arena, perception)
        };

        if let Some(ghost) = pick {
            agent
                .track(ghost, arena)
                .map_err(|source| TurnError::Stack { agent: agent.id(), source })?;
        }
    }

    Ok(())
}

/// Orders each agent able to stun at the first returning rival in reach.
///
/// Agents already stunning somebody are left alone.
pub fn assign_stuns(
    squad: &mut [Buster],
    arena: &mut Arena,
    perception: &Perception,
) -> Result<(), TurnError> {
    for agent in squad.iter_mut() {
        // No second Stun over an active one: re-pushing every turn would fill the stack
        if !agent.can_stun() || agent.state() == StateId::Stun {
            continue;
        }

        if let Some(rival) = ReturningRival.select(agent, arena, perception) {
            agent
                .stun(rival, arena)
                .map_err(|source| TurnError::Stack { agent: agent.id(), source })?;
        }
    }

    Ok(())
}
