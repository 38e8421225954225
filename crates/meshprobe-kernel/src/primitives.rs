//! Closed primitive meshes, centred at the origin with outward winding.

use std::f64::consts::PI;

use meshprobe_math::Point3;
use tracing::warn;

use crate::TriangleMesh;

/// Build a box with dimensions `(sx, sy, sz)` centred at the origin.
///
/// 8 vertices, 12 triangles, outward normals. Vertex layout:
/// ```text
///     v7----v6
///    /|    /|
///   v4----v5|    z
///   | v3--|-v2   | y
///   |/    |/     |/
///   v0----v1     +---x
/// ```
pub fn make_box(sx: f64, sy: f64, sz: f64) -> TriangleMesh {
    let (x, y, z) = (sx / 2.0, sy / 2.0, sz / 2.0);
    let vertices = vec![
        Point3::new(-x, -y, -z),
        Point3::new(x, -y, -z),
        Point3::new(x, y, -z),
        Point3::new(-x, y, -z),
        Point3::new(-x, -y, z),
        Point3::new(x, -y, z),
        Point3::new(x, y, z),
        Point3::new(-x, y, z),
    ];

    // Each face as a CCW quad viewed from outside, split along its first diagonal
    let faces: [[u32; 4]; 6] = [
        [0, 3, 2, 1], // -Z
        [4, 5, 6, 7], // +Z
        [0, 1, 5, 4], // -Y
        [3, 7, 6, 2], // +Y
        [0, 4, 7, 3], // -X
        [1, 2, 6, 5], // +X
    ];
    let indices = faces
        .iter()
        .flat_map(|&[a, b, c, d]| [a, b, c, a, c, d])
        .collect();

    from_parts(vertices, indices)
}

/// Build a cube with edge length `side` centred at the origin.
pub fn make_cube(side: f64) -> TriangleMesh {
    make_box(side, side, side)
}

/// Build a regular octahedron with vertices at distance `radius` on each axis.
pub fn make_octahedron(radius: f64) -> TriangleMesh {
    let r = radius;
    let vertices = vec![
        Point3::new(r, 0.0, 0.0),
        Point3::new(-r, 0.0, 0.0),
        Point3::new(0.0, r, 0.0),
        Point3::new(0.0, -r, 0.0),
        Point3::new(0.0, 0.0, r),
        Point3::new(0.0, 0.0, -r),
    ];
    // One face per octant; (x, y, z) order is outward when the octant's
    // sign product is positive, otherwise y and z are swapped.
    let indices = vec![
        0, 2, 4, //
        1, 4, 2, //
        0, 4, 3, //
        1, 3, 4, //
        0, 5, 2, //
        1, 2, 5, //
        0, 3, 5, //
        1, 5, 3,
    ];
    from_parts(vertices, indices)
}

/// Build a closed UV sphere.
///
/// `stacks` latitude bands (at least 2) and `slices` longitude segments
/// (at least 3); smaller values are clamped. Poles lie on the Z axis.
pub fn make_uv_sphere(radius: f64, stacks: u32, slices: u32) -> TriangleMesh {
    let stacks = stacks.max(2);
    let slices = slices.max(3);

    let mut vertices = Vec::with_capacity(((stacks - 1) * slices + 2) as usize);
    vertices.push(Point3::new(0.0, 0.0, radius));
    for i in 1..stacks {
        let phi = PI * f64::from(i) / f64::from(stacks);
        let (sin_phi, cos_phi) = phi.sin_cos();
        for j in 0..slices {
            let theta = 2.0 * PI * f64::from(j) / f64::from(slices);
            let (sin_theta, cos_theta) = theta.sin_cos();
            vertices.push(Point3::new(
                radius * sin_phi * cos_theta,
                radius * sin_phi * sin_theta,
                radius * cos_phi,
            ));
        }
    }
    let south = vertices.len() as u32;
    vertices.push(Point3::new(0.0, 0.0, -radius));

    let ring = |i: u32, j: u32| 1 + (i - 1) * slices + j % slices;
    let mut indices = Vec::with_capacity((6 * slices * (stacks - 1)) as usize);

    for j in 0..slices {
        indices.extend([0, ring(1, j), ring(1, j + 1)]);
    }
    for i in 1..stacks - 1 {
        for j in 0..slices {
            let a = ring(i, j);
            let b = ring(i, j + 1);
            let c = ring(i + 1, j);
            let d = ring(i + 1, j + 1);
            indices.extend([a, c, d, a, d, b]);
        }
    }
    for j in 0..slices {
        indices.extend([ring(stacks - 1, j), south, ring(stacks - 1, j + 1)]);
    }

    from_parts(vertices, indices)
}

// Primitive connectivity is valid by construction; only non-finite
// dimensions can fail validation, and those give an empty mesh.
fn from_parts(vertices: Vec<Point3>, indices: Vec<u32>) -> TriangleMesh {
    TriangleMesh::new(vertices, indices).unwrap_or_else(|err| {
        warn!(%err, "primitive dimensions rejected; returning an empty mesh");
        TriangleMesh::default()
    })
}
