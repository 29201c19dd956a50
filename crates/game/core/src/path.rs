//! Waypoint paths for patrol and homing.
//!
//! A [`Path`] is an ordered list of [`Waypoint`]s plus a cursor. Each call to
//! [`Path::update`] checks whether the agent has arrived inside the current
//! waypoint's radius and, if so, advances the cursor. Arrival is radius based
//! so an agent never has to land on an exact coordinate.

use crate::geometry::Vector;

/// A navigation point with an arrival radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Waypoint {
    pub point: Vector,
    pub radius: i32,
}

impl Waypoint {
    pub const fn new(point: Vector, radius: i32) -> Self {
        Self { point, radius }
    }

    /// Returns true if `position` is inside the arrival radius.
    #[inline]
    pub fn is_reached_from(&self, position: Vector) -> bool {
        self.point.is_within(position, self.radius)
    }
}

/// Ordered, optionally cyclic sequence of waypoints.
///
/// # Invariants
///
/// - `index <= count()`
/// - `done` implies `index == count()` and `!repeat`
/// - a non-empty one-shot path with `index == count()` is `done`
/// - a repeating path keeps `index < count()` once it has waypoints
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path {
    waypoints: Vec<Waypoint>,
    index: usize,
    done: bool,
    repeat: bool,
}

impl Path {
    /// Creates an empty, one-shot path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repeating path through `points`, all with the same radius.
    pub fn cyclic(points: &[Vector], radius: i32) -> Self {
        let mut path = Self::new();
        path.repeat = true;
        for &point in points {
            path.push_waypoint(point, radius);
        }
        path
    }

    /// Appends a waypoint and clears `done`.
    pub fn push_waypoint(&mut self, point: Vector, radius: i32) {
        self.waypoints.push(Waypoint::new(point, radius));
        self.done = false;
    }

    /// Removes and returns the last waypoint, or `None` if the path is empty.
    ///
    /// A one-shot path whose cursor ends up past every remaining waypoint is
    /// marked done.
    pub fn pop_waypoint(&mut self) -> Option<Waypoint> {
        let waypoint = self.waypoints.pop()?;
        if self.index >= self.waypoints.len() {
            self.index = if self.repeat { 0 } else { self.waypoints.len() };
        }
        self.done =
            !self.repeat && !self.waypoints.is_empty() && self.index == self.waypoints.len();
        Some(waypoint)
    }

    /// Returns the waypoint under the cursor.
    ///
    /// `None` when the path is empty or a one-shot path has been completed.
    pub fn next_waypoint(&self) -> Option<&Waypoint> {
        self.waypoints.get(self.index)
    }

    /// Advances the cursor if `position` is inside the current waypoint's radius.
    ///
    /// Reaching the end wraps to the first waypoint on a repeating path and
    /// marks a one-shot path as done. No-op on an empty or finished path.
    /// Returns true if the cursor moved.
    pub fn update(&mut self, position: Vector) -> bool {
        let Some(waypoint) = self.next_waypoint() else {
            return false;
        };

        if !waypoint.is_reached_from(position) {
            return false;
        }

        self.index += 1;
        if self.index == self.waypoints.len() {
            if self.repeat {
                self.index = 0;
            } else {
                self.done = true;
            }
        }

        tracing::debug!(
            "Path advanced to {}/{} (done={})",
            self.index,
            self.waypoints.len(),
            self.done
        );
        true
    }

    /// Number of waypoints.
    #[inline]
    pub fn count(&self) -> usize {
        self.waypoints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Cursor position.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }

    #[inline]
    pub fn repeats(&self) -> bool {
        self.repeat
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }
}
