//! Wandering behaviors: Idle and Explore.

use stack_fsm::Transition;

use super::{Blackboard, StateId};
use crate::config::BusterConfig;

/// Placeholder root that immediately hands over to [`Explore`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Idle;

impl Idle {
    pub fn update(&mut self, _bb: &mut Blackboard<'_>) -> Transition<StateId> {
        Transition::Goto(StateId::Explore)
    }
}

/// Roams the arena looking for ghosts.
///
/// Agents with a patrol route follow it; the route lives on the agent, so its
/// progress survives every detour that suspends Explore. Agents without one
/// head for a random point and draw a new one on arrival.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Explore;

impl Explore {
    pub fn enter(&mut self, bb: &mut Blackboard<'_>) {
        let body = &mut *bb.body;
        body.patrol.update(body.position);

        body.target = match body.patrol.next_waypoint() {
            Some(waypoint) => waypoint.point,
            None => bb.arena.random_point(),
        };
        tracing::debug!(agent = %body.id, target = %body.target, "Explore entered");
    }

    pub fn update(&mut self, bb: &mut Blackboard<'_>) -> Transition<StateId> {
        let body = &mut *bb.body;
        body.patrol.update(body.position);

        if let Some(waypoint) = body.patrol.next_waypoint() {
            body.target = waypoint.point;
        } else if body.position.distance_sqr(body.target) < BusterConfig::EXPLORE_ARRIVAL_SQR {
            body.target = bb.arena.random_point();
            tracing::debug!(agent = %body.id, target = %body.target, "New explore target");
        }

        Transition::Stay
    }
}
