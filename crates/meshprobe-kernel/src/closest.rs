//! Closest surface point from an interior point.
//!
//! For every triangle a ray is fired from the query point along the
//! triangle's own geometric normal, and the nearest hit wins. A hit along
//! a triangle's normal is the perpendicular foot on that triangle, so this
//! finds the nearest face by plane distance; it is not a general
//! point-to-mesh distance and only makes sense for points inside the mesh.
//!
//! Front-only casting misses any patch whose normal faces away from the
//! query point. Casting both ways removes that bias at twice the cost.

use meshprobe_math::{Dir3, Point3, Transform};
use serde::{Deserialize, Serialize};

use crate::{MeshQuery, Ray, Triangle, TriangleMesh};

/// Which way to cast along each triangle's normal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CastSides {
    /// Along the normal only.
    #[default]
    Front,
    /// Along the normal and its negation.
    Both,
}

/// A point on the mesh surface found by a closest-point query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePoint {
    /// The surface point.
    pub point: Point3,
    /// Unit geometric normal of the triangle that was hit (follows its winding).
    pub normal: Dir3,
    /// Euclidean distance from the query point.
    pub distance: f64,
}

/// Closest surface point casting along each triangle's front normal only.
pub fn closest_point_on_mesh(
    mesh: &TriangleMesh,
    transform: &Transform,
    point: &Point3,
) -> Option<SurfacePoint> {
    MeshQuery::default().closest_point(mesh, transform, point)
}

/// Closest surface point casting along each triangle's normal and its negation.
pub fn closest_point_on_mesh_both(
    mesh: &TriangleMesh,
    transform: &Transform,
    point: &Point3,
) -> Option<SurfacePoint> {
    MeshQuery::default().closest_point_both(mesh, transform, point)
}

/// Nearest hit over all triangles. Ties keep the first hit found.
pub(crate) fn find_closest<I>(
    triangles: I,
    point: &Point3,
    sides: CastSides,
    epsilon: f64,
) -> Option<SurfacePoint>
where
    I: IntoIterator<Item = Triangle>,
{
    let mut best: Option<SurfacePoint> = None;

    for tri in triangles {
        // Unit direction, so det scales with the triangle's area as in containment.
        // Zero-area triangles have no normal to cast along.
        let Some(normal) = tri.normal().try_normalize(0.0) else {
            continue;
        };
        let front = Ray::new(*point, normal);
        let back = match sides {
            CastSides::Front => None,
            CastSides::Both => Some(front.reversed()),
        };

        for ray in std::iter::once(front).chain(back) {
            let Some(t) = tri.intersect_ray(&ray, epsilon) else {
                continue;
            };
            let hit = ray.at(t);
            let distance = (hit - point).norm();
            if best.map_or(true, |b| distance < b.distance) {
                best = Some(SurfacePoint {
                    point: hit,
                    normal: Dir3::new_unchecked(normal),
                    distance,
                });
            }
        }
    }

    best
}
