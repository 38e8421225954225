//! Query entry points with configurable numeric parameters.

use meshprobe_math::{Point3, Transform};
use tracing::debug;

use crate::closest::{find_closest, CastSides, SurfacePoint};
use crate::error::ParamsError;
use crate::inside::{count_crossings, count_crossings_filtered};
use crate::{QueryParams, Ray, Triangle, TriangleMesh, WorldMesh};

/// Runs mesh queries with a fixed set of [`QueryParams`].
///
/// `MeshQuery::default()` matches the free functions
/// ([`point_in_mesh`](crate::point_in_mesh) and friends).
///
/// ```
/// use meshprobe_kernel::{primitives::make_cube, MeshQuery, QueryParams};
/// use meshprobe_math::{Point3, Transform};
///
/// let query = MeshQuery::new(QueryParams { epsilon: 1e-12, ..Default::default() }).unwrap();
/// let cube = make_cube(2.0);
/// assert!(query.is_inside(&cube, &Transform::identity(), &Point3::new(0.1, 0.2, 0.3)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeshQuery {
    params: QueryParams,
}

impl MeshQuery {
    /// Create a query runner after validating `params`.
    pub fn new(params: QueryParams) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// The parameters in use.
    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    /// Ray-triangle intersection using this runner's tolerance.
    pub fn intersect(&self, ray: &Ray, triangle: &Triangle) -> Option<f64> {
        triangle.intersect_ray(ray, self.params.epsilon)
    }

    /// Reference containment: skewed ray, every triangle transformed and tested.
    pub fn is_inside(&self, mesh: &TriangleMesh, transform: &Transform, point: &Point3) -> bool {
        let ray = Ray::new(*point, self.params.reference_ray_direction());
        let crossings = count_crossings(
            mesh.triangles().map(|tri| tri.transformed(transform)),
            &ray,
            self.params.epsilon,
        );
        debug!(
            triangles = mesh.num_triangles(),
            crossings, "reference containment"
        );
        crossings % 2 == 1
    }

    /// Fast containment: vertices transformed once, box-filtered `+X` ray.
    pub fn is_inside_fast(&self, mesh: &TriangleMesh, transform: &Transform, point: &Point3) -> bool {
        self.is_inside_world_fast(&mesh.to_world(transform), point)
    }

    /// Reference containment against an already transformed mesh.
    pub fn is_inside_world(&self, world: &WorldMesh<'_>, point: &Point3) -> bool {
        let ray = Ray::new(*point, self.params.reference_ray_direction());
        let crossings = count_crossings(world.triangles(), &ray, self.params.epsilon);
        debug!(
            triangles = world.num_triangles(),
            crossings, "reference containment (world)"
        );
        crossings % 2 == 1
    }

    /// Fast containment against an already transformed mesh.
    pub fn is_inside_world_fast(&self, world: &WorldMesh<'_>, point: &Point3) -> bool {
        let crossings = count_crossings_filtered(world.triangles(), point, self.params.epsilon);
        debug!(
            triangles = world.num_triangles(),
            crossings, "fast containment"
        );
        crossings % 2 == 1
    }

    /// Closest surface point casting along each front normal only.
    pub fn closest_point(
        &self,
        mesh: &TriangleMesh,
        transform: &Transform,
        point: &Point3,
    ) -> Option<SurfacePoint> {
        self.closest_point_world(&mesh.to_world(transform), point, CastSides::Front)
    }

    /// Closest surface point casting along each normal and its negation.
    pub fn closest_point_both(
        &self,
        mesh: &TriangleMesh,
        transform: &Transform,
        point: &Point3,
    ) -> Option<SurfacePoint> {
        self.closest_point_world(&mesh.to_world(transform), point, CastSides::Both)
    }

    /// Closest surface point against an already transformed mesh.
    pub fn closest_point_world(
        &self,
        world: &WorldMesh<'_>,
        point: &Point3,
        sides: CastSides,
    ) -> Option<SurfacePoint> {
        let found = find_closest(world.triangles(), point, sides, self.params.epsilon);
        match &found {
            Some(hit) => debug!(
                triangles = world.num_triangles(),
                ?sides,
                distance = hit.distance,
                "closest point"
            ),
            None => debug!(
                triangles = world.num_triangles(),
                ?sides,
                "closest point: no triangle hit"
            ),
        }
        found
    }
}
