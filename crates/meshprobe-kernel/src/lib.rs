#![warn(missing_docs)]

//! Point queries against transformed triangle meshes.
//!
//! - [`intersect_ray_triangle`]: Möller–Trumbore ray-triangle intersection.
//! - [`point_in_mesh`] / [`point_in_mesh_fast`]: parity ray-casting containment.
//! - [`closest_point_on_mesh`] / [`closest_point_on_mesh_both`]: nearest
//!   surface point from an interior point, found by casting along face normals.
//!
//! Meshes are [`TriangleMesh`] values in local space paired with a
//! local-to-world [`Transform`](meshprobe_math::Transform); query points
//! are in world space. The free functions use default parameters; use
//! [`MeshQuery`] to change the tolerance or the reference ray direction,
//! or to run many queries against one [`WorldMesh`].
//!
//! # Example
//!
//! ```
//! use meshprobe_kernel::{closest_point_on_mesh, point_in_mesh, primitives::make_cube};
//! use meshprobe_math::{Point3, Transform};
//!
//! let cube = make_cube(2.0);
//! let t = Transform::translation(5.0, 0.0, 0.0);
//! assert!(point_in_mesh(&cube, &t, &Point3::new(5.0, 0.0, 0.0)));
//! assert!(!point_in_mesh(&cube, &t, &Point3::origin()));
//!
//! let hit = closest_point_on_mesh(&cube, &t, &Point3::new(5.5, 0.25, 0.125)).unwrap();
//! assert!((hit.distance - 0.5).abs() < 1e-12);
//! ```

pub use meshprobe_math;

mod bbox;
mod closest;
mod error;
mod inside;
mod intersect;
mod mesh;
mod params;
pub mod primitives;
mod query;
mod ray;
mod transform;
mod triangle;

pub use bbox::Aabb3;
pub use closest::{closest_point_on_mesh, closest_point_on_mesh_both, CastSides, SurfacePoint};
pub use error::{MeshError, ParamsError, Result};
pub use inside::{point_in_mesh, point_in_mesh_fast};
pub use intersect::intersect_ray_triangle;
pub use mesh::{TriangleMesh, WorldMesh};
pub use params::{QueryParams, REFERENCE_DIRECTION};
pub use query::MeshQuery;
pub use ray::Ray;
pub use transform::transform_vertices;
pub use triangle::Triangle;
