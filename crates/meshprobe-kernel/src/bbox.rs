//! Axis-aligned bounding boxes.
//!
//! The fast containment test uses a triangle's box as a per-triangle
//! reject filter against a `+X` ray: the triangle can only be crossed if
//! its box reaches the query point along X and strictly straddles the
//! point on Y and Z.

use meshprobe_math::{Point3, Vec3};

/// Axis-aligned bounding box in 3D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb3 {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

impl Aabb3 {
    /// Create an AABB from min and max corners.
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Create an empty (inverted) AABB suitable for expansion.
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Smallest box containing all `points`. Empty if there are none.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point3>) -> Self {
        let mut aabb = Self::empty();
        for p in points {
            aabb.include_point(p);
        }
        aabb
    }

    /// Expand this AABB to include a point.
    pub fn include_point(&mut self, p: &Point3) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.min.z = self.min.z.min(p.z);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
        self.max.z = self.max.z.max(p.z);
    }

    /// True if no point has been included yet.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Center of the box.
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Edge lengths along each axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Every corner lies strictly at `x` less than the given value.
    #[inline]
    pub fn ends_before_x(&self, x: f64) -> bool {
        self.max.x < x
    }

    /// Some extent lies strictly above and some strictly below `y`.
    #[inline]
    pub fn straddles_y(&self, y: f64) -> bool {
        self.min.y < y && self.max.y > y
    }

    /// Some extent lies strictly above and some strictly below `z`.
    #[inline]
    pub fn straddles_z(&self, z: f64) -> bool {
        self.min.z < z && self.max.z > z
    }
}
