//! Ray-triangle intersection (Möller–Trumbore).
//!
//! Every query in this crate is built on this one primitive: containment
//! counts its hits along a fixed ray, closest-point search fires it along
//! each triangle's own normal.

use meshprobe_math::Tolerance;

use crate::{Ray, Triangle};

/// Intersect a ray with a triangle using the default determinant tolerance.
///
/// Returns `Some(t)` with `ray.at(t)` on the triangle, or `None` on a miss.
/// See [`Triangle::intersect_ray`].
#[inline]
pub fn intersect_ray_triangle(ray: &Ray, tri: &Triangle) -> Option<f64> {
    tri.intersect_ray(ray, Tolerance::DEFAULT.determinant)
}

impl Triangle {
    /// Intersect a ray with this triangle.
    ///
    /// - `|det| < epsilon` is a miss: the ray is parallel to the triangle's
    ///   plane or the triangle is degenerate.
    /// - Both windings are hit; the sign of `det` cancels through `1 / det`.
    /// - Edges and vertices are inclusive (`u, v >= 0`, `u + v <= 1`).
    /// - Only `t > 0` is a hit. An origin lying on the triangle (`t == 0`)
    ///   is a miss.
    ///
    /// `t` is measured in units of `ray.direction`, which need not be unit length.
    pub fn intersect_ray(&self, ray: &Ray, epsilon: f64) -> Option<f64> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let p = ray.direction.cross(&edge2);
        let det = edge1.dot(&p);
        if det.abs() < epsilon {
            return None;
        }
        let inv_det = 1.0 / det;

        let s = ray.origin - self.v0;
        let u = s.dot(&p) * inv_det;
        // Also rejects a NaN `u`, so non-finite input never counts as a hit.
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(&edge1);
        let v = ray.direction.dot(&q) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = edge2.dot(&q) * inv_det;
        (t > 0.0).then_some(t)
    }
}
