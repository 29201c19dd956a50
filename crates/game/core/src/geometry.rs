//! Integer plane geometry.
//!
//! Distances are only ever compared, never displayed, so everything works on
//! squared values and stays in exact integer arithmetic.

use std::fmt;

/// Point (or displacement) in arena coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Vector {
    pub x: i32,
    pub y: i32,
}

impl Vector {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to `other`.
    #[inline]
    pub fn distance_sqr(self, other: Vector) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx * dx + dy * dy
    }

    /// Returns true if `other` lies within `radius` of this point (boundary included).
    #[inline]
    pub fn is_within(self, other: Vector, radius: i32) -> bool {
        self.distance_sqr(other) <= squared(radius)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// Squares a radius for comparison against [`Vector::distance_sqr`].
#[inline]
pub const fn squared(radius: i32) -> i64 {
    (radius as i64) * (radius as i64)
}
