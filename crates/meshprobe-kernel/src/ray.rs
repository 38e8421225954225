//! Ray representation.

use meshprobe_math::{Point3, Vec3};

/// A half-line in 3D space defined by an origin and a direction.
///
/// The direction is kept as given, not normalized. Hit parameters reported
/// against a ray are in units of `direction`, so `at(t)` recovers the hit
/// point regardless of the direction's magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Direction of the ray (any non-zero length).
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray from origin and direction.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction
    }

    /// The same origin with the direction negated.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            origin: self.origin,
            direction: -self.direction,
        }
    }
}
