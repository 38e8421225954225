//! Parity ray-casting containment.
//!
//! A ray is fired from the query point and the triangles it crosses are
//! counted; an odd count means the point is inside. This is only correct
//! for watertight meshes and for rays that do not graze an edge, vertex or
//! coplanar triangle. Neither condition is checked.
//!
//! Two variants:
//! - reference: skewed ray along [`REFERENCE_DIRECTION`](crate::REFERENCE_DIRECTION),
//!   every triangle tested, vertices transformed per triangle.
//! - fast: `+X` ray, vertices transformed once, each triangle first
//!   screened by its bounding box. Roughly twice as fast; a hierarchy
//!   over the triangles would go further.

use meshprobe_math::{Point3, Transform, Vec3};

use crate::{MeshQuery, Ray, Triangle, TriangleMesh};

/// Test containment with the reference (unfiltered, skewed ray) variant.
pub fn point_in_mesh(mesh: &TriangleMesh, transform: &Transform, point: &Point3) -> bool {
    MeshQuery::default().is_inside(mesh, transform, point)
}

/// Test containment with the fast (pre-transformed, box-filtered `+X` ray) variant.
pub fn point_in_mesh_fast(mesh: &TriangleMesh, transform: &Transform, point: &Point3) -> bool {
    MeshQuery::default().is_inside_fast(mesh, transform, point)
}

/// Number of triangles hit by `ray`.
pub(crate) fn count_crossings<I>(triangles: I, ray: &Ray, epsilon: f64) -> usize
where
    I: IntoIterator<Item = Triangle>,
{
    triangles
        .into_iter()
        .filter(|tri| tri.intersect_ray(ray, epsilon).is_some())
        .count()
}

/// Number of triangles hit by the `+X` ray from `point`, skipping the
/// intersection test for triangles whose box rules a crossing out.
pub(crate) fn count_crossings_filtered<I>(triangles: I, point: &Point3, epsilon: f64) -> usize
where
    I: IntoIterator<Item = Triangle>,
{
    let ray = Ray::new(*point, Vec3::x());
    triangles
        .into_iter()
        .filter(|tri| may_cross_x_ray(tri, point))
        .filter(|tri| tri.intersect_ray(&ray, epsilon).is_some())
        .count()
}

/// Reject triangles entirely behind `point` along X, or not strictly
/// spanning `point` on Z and then Y.
#[inline]
fn may_cross_x_ray(tri: &Triangle, point: &Point3) -> bool {
    let aabb = tri.aabb();
    !aabb.ends_before_x(point.x) && aabb.straddles_z(point.z) && aabb.straddles_y(point.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{make_box, make_cube, make_octahedron, make_uv_sphere};
    use meshprobe_math::Dir3;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn identity() -> Transform {
        Transform::identity()
    }

    fn random_points(seed: u64, n: usize, half_extent: f64) -> Vec<Point3> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n)
            .map(|_| {
                Point3::new(
                    rng.gen_range(-half_extent..half_extent),
                    rng.gen_range(-half_extent..half_extent),
                    rng.gen_range(-half_extent..half_extent),
                )
            })
            .collect()
    }

    #[test]
    fn test_cube_reference() {
        let cube = make_cube(2.0);
        let t = identity();
        assert!(point_in_mesh(&cube, &t, &Point3::origin()));
        assert!(!point_in_mesh(&cube, &t, &Point3::new(3.0, 0.0, 0.0)));
        assert!(!point_in_mesh(&cube, &t, &Point3::new(1.0001, 0.0, 0.0)));
        assert!(point_in_mesh(&cube, &t, &Point3::new(0.9999, 0.0, 0.0)));
        assert!(!point_in_mesh(&cube, &t, &Point3::new(-1.0001, 0.0, 0.0)));
        assert!(!point_in_mesh(&cube, &t, &Point3::new(0.0, 0.0, 5.0)));
    }

    #[test]
    fn test_cube_fast() {
        let cube = make_cube(2.0);
        let t = identity();
        assert!(point_in_mesh_fast(&cube, &t, &Point3::new(0.0, 0.2, -0.5)));
        assert!(point_in_mesh_fast(&cube, &t, &Point3::new(0.9999, 0.2, -0.3)));
        assert!(point_in_mesh_fast(&cube, &t, &Point3::new(-0.9999, 0.2, -0.3)));
        assert!(!point_in_mesh_fast(&cube, &t, &Point3::new(1.0001, 0.2, -0.3)));
        assert!(!point_in_mesh_fast(&cube, &t, &Point3::new(-1.0001, 0.2, -0.3)));
        assert!(!point_in_mesh_fast(&cube, &t, &Point3::new(3.0, 0.0, 0.0)));
    }

    #[test]
    fn test_fast_axis_ray_through_shared_edge_double_counts() {
        // The +X ray from the centre runs through the diagonal shared by the
        // two triangles of the +X face; both report a hit, so parity flips.
        let cube = make_cube(2.0);
        let world = cube.to_world(&identity());
        let crossings = count_crossings_filtered(world.triangles(), &Point3::origin(), f64::EPSILON);
        assert_eq!(crossings, 2);
        assert!(!point_in_mesh_fast(&cube, &identity(), &Point3::origin()));
        assert!(point_in_mesh(&cube, &identity(), &Point3::origin()));
    }

    #[test]
    fn test_empty_mesh_is_outside() {
        let mesh = TriangleMesh::default();
        assert!(!point_in_mesh(&mesh, &identity(), &Point3::origin()));
        assert!(!point_in_mesh_fast(&mesh, &identity(), &Point3::origin()));
    }

    #[test]
    fn test_counts_both_crossings_from_outside() {
        let cube = make_cube(2.0);
        let origin = Point3::new(-3.0, 0.1, 0.2);
        let toward = Ray::new(origin, Vec3::x());
        assert_eq!(count_crossings(cube.triangles(), &toward, f64::EPSILON), 2);
        assert_eq!(count_crossings(cube.triangles(), &toward.reversed(), f64::EPSILON), 0);
        assert_eq!(count_crossings_filtered(cube.triangles(), &origin, f64::EPSILON), 2);
    }

    #[test]
    fn test_filter_rejects_triangles_behind_and_beside() {
        let tri = Triangle::new(
            Point3::new(1.0, -1.0, -1.0),
            Point3::new(1.0, 1.0, -1.0),
            Point3::new(1.0, 1.0, 1.0),
        );
        assert!(may_cross_x_ray(&tri, &Point3::new(0.0, 0.5, 0.0)));
        // Behind along X
        assert!(!may_cross_x_ray(&tri, &Point3::new(1.5, 0.5, 0.0)));
        // Touching the Z extent is not straddling it
        assert!(!may_cross_x_ray(&tri, &Point3::new(0.0, 0.5, 1.0)));
        // Outside the Y extent
        assert!(!may_cross_x_ray(&tri, &Point3::new(0.0, 2.0, 0.0)));
    }

    #[test]
    fn test_translated_and_scaled_mesh() {
        let cube = make_cube(2.0);
        let t = Transform::translation(10.0, 0.0, 0.0).then(&Transform::scale(2.0, 1.0, 1.0));
        // World cube spans x in [8, 12]
        let inside = Point3::new(11.5, 0.2, -0.3);
        let outside = Point3::new(0.5, 0.2, -0.3);
        assert!(point_in_mesh(&cube, &t, &inside));
        assert!(point_in_mesh_fast(&cube, &t, &inside));
        assert!(!point_in_mesh(&cube, &t, &outside));
        assert!(!point_in_mesh_fast(&cube, &t, &outside));
    }

    #[test]
    fn test_non_convex_union_of_boxes() {
        let mut mesh = make_box(2.0, 2.0, 2.0);
        let other = make_box(1.0, 1.0, 1.0)
            .to_world(&Transform::translation(4.0, 0.0, 0.0))
            .vertices()
            .to_vec();
        let shifted = TriangleMesh::new(other, make_box(1.0, 1.0, 1.0).indices().to_vec()).unwrap();
        mesh.merge(&shifted).unwrap();

        let t = identity();
        let between = Point3::new(2.5, 0.13, 0.07);
        let in_first = Point3::new(-0.5, 0.13, 0.07);
        let in_second = Point3::new(3.8, 0.13, 0.07);
        for (p, expected) in [(between, false), (in_first, true), (in_second, true)] {
            assert_eq!(point_in_mesh(&mesh, &t, &p), expected, "{p:?}");
            assert_eq!(point_in_mesh_fast(&mesh, &t, &p), expected, "{p:?}");
        }
    }

    #[test]
    fn test_variants_agree_on_random_points() {
        let t = identity();
        for mesh in [make_cube(2.0), make_octahedron(1.5), make_uv_sphere(1.2, 10, 20)] {
            let mut inside = 0;
            for p in random_points(7, 100, 2.0) {
                let reference = point_in_mesh(&mesh, &t, &p);
                assert_eq!(reference, point_in_mesh_fast(&mesh, &t, &p), "{p:?}");
                inside += usize::from(reference);
            }
            // Both outcomes are exercised
            assert!(inside > 0 && inside < 100, "inside {inside}");
        }
    }

    #[test]
    fn test_cube_agrees_with_analytic_containment() {
        let cube = make_cube(2.0);
        let t = identity();
        for p in random_points(11, 100, 2.0) {
            let expected = p.x.abs() < 1.0 && p.y.abs() < 1.0 && p.z.abs() < 1.0;
            assert_eq!(point_in_mesh(&cube, &t, &p), expected, "{p:?}");
        }
    }

    #[test]
    fn test_invariant_under_rigid_transform() {
        let mesh = make_uv_sphere(1.0, 8, 16);
        let axis = Dir3::new_normalize(Vec3::new(1.0, 2.0, 3.0));
        let rigid = Transform::translation(3.0, -2.0, 5.0)
            .then(&Transform::rotation_about_axis(&axis, 0.7));
        for p in random_points(3, 100, 1.5) {
            let moved = rigid.apply_point(&p);
            let local = point_in_mesh(&mesh, &identity(), &p);
            assert_eq!(point_in_mesh(&mesh, &rigid, &moved), local, "{p:?}");
            assert_eq!(point_in_mesh_fast(&mesh, &rigid, &moved), local, "{p:?}");
        }
    }
}
