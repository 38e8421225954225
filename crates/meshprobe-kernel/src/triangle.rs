//! Triangles as three explicit vertices.

use meshprobe_math::{Point3, Transform, Vec3};

use crate::bbox::Aabb3;

/// A triangle given by its three vertices.
///
/// Vertex order defines the winding and therefore the sign of [`normal`](Self::normal).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First vertex.
    pub v0: Point3,
    /// Second vertex.
    pub v1: Point3,
    /// Third vertex.
    pub v2: Point3,
}

impl Triangle {
    /// Create a triangle from its vertices.
    pub fn new(v0: Point3, v1: Point3, v2: Point3) -> Self {
        Self { v0, v1, v2 }
    }

    /// Geometric normal `(v1 - v0) × (v2 - v0)`, not normalized.
    ///
    /// Its length is twice the triangle's area.
    #[inline]
    pub fn normal(&self) -> Vec3 {
        (self.v1 - self.v0).cross(&(self.v2 - self.v0))
    }

    /// Triangle area.
    pub fn area(&self) -> f64 {
        0.5 * self.normal().norm()
    }

    /// Average of the three vertices.
    pub fn centroid(&self) -> Point3 {
        Point3::from((self.v0.coords + self.v1.coords + self.v2.coords) / 3.0)
    }

    /// Bounding box of the three vertices.
    #[inline]
    pub fn aabb(&self) -> Aabb3 {
        Aabb3::from_points([&self.v0, &self.v1, &self.v2])
    }

    /// Apply `transform` to each vertex.
    #[inline]
    pub fn transformed(&self, transform: &Transform) -> Self {
        Self {
            v0: transform.apply_point(&self.v0),
            v1: transform.apply_point(&self.v1),
            v2: transform.apply_point(&self.v2),
        }
    }
}
