//! Local-to-world vertex transformation.

use meshprobe_math::{Point3, Tolerance, Transform};
use tracing::warn;

/// Map every vertex through `transform`.
///
/// The output has the same length and order as `vertices`; the input is
/// only read. The matrix is treated as affine: a projective bottom row is
/// ignored (no divide by `w`), with a warning.
pub fn transform_vertices(vertices: &[Point3], transform: &Transform) -> Vec<Point3> {
    if !transform.is_affine(&Tolerance::DEFAULT) {
        warn!(
            vertices = vertices.len(),
            "transform is not affine; bottom row ignored"
        );
    }
    vertices.iter().map(|v| transform.apply_point(v)).collect()
}
