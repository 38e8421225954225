//! Indexed triangle meshes.
//!
//! [`TriangleMesh`] owns local-space vertices and a validated index buffer.
//! [`WorldMesh`] is the same connectivity with vertices already mapped
//! through a local-to-world transform, so repeated queries against a
//! static mesh can skip the per-call transform.

use meshprobe_math::{Point3, Transform};

use crate::bbox::Aabb3;
use crate::error::{MeshError, Result};
use crate::transform::transform_vertices;
use crate::Triangle;

/// Triangle mesh in local space.
///
/// Invariants checked on construction: the index count is a multiple of 3,
/// every index is in range, every coordinate is finite. Closedness is not
/// checked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    vertices: Vec<Point3>,
    indices: Vec<u32>,
}

impl TriangleMesh {
    /// Build a mesh from vertex positions and triangle index triples.
    pub fn new(vertices: Vec<Point3>, indices: Vec<u32>) -> Result<Self> {
        validate(&vertices, &indices)?;
        Ok(Self { vertices, indices })
    }

    /// Build a mesh from flat buffers: `[x0, y0, z0, x1, ...]` and `[i0, i1, i2, ...]`.
    pub fn from_flat(positions: &[f64], indices: &[u32]) -> Result<Self> {
        if positions.len() % 3 != 0 {
            return Err(MeshError::PositionCount(positions.len()));
        }
        let vertices = positions
            .chunks_exact(3)
            .map(|c| Point3::new(c[0], c[1], c[2]))
            .collect();
        Self::new(vertices, indices.to_vec())
    }

    /// Local-space vertex positions.
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Flat triangle index buffer.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// True if the mesh has no triangles.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Local-space triangle `i`. Panics if `i >= num_triangles()`.
    pub fn triangle(&self, i: usize) -> Triangle {
        triangle_at(&self.vertices, &self.indices, i)
    }

    /// Local-space triangles in index order.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        triangles_of(&self.vertices, &self.indices)
    }

    /// Local-space bounding box. Empty for a mesh without vertices.
    pub fn bounds(&self) -> Aabb3 {
        Aabb3::from_points(&self.vertices)
    }

    /// Append another mesh, offsetting its indices past this mesh's vertices.
    ///
    /// Fails, leaving `self` unchanged, if the combined vertex count would
    /// not be addressable by `u32` indices.
    pub fn merge(&mut self, other: &TriangleMesh) -> Result<()> {
        let offset = index_offset(self.vertices.len(), other.vertices.len())?;
        self.vertices.extend_from_slice(&other.vertices);
        // Both inputs are valid, so every shifted index stays below the new vertex count.
        self.indices
            .extend(other.indices.iter().map(|&i| i + offset));
        Ok(())
    }

    /// Transform every vertex once, borrowing the index buffer.
    pub fn to_world(&self, transform: &Transform) -> WorldMesh<'_> {
        WorldMesh {
            vertices: transform_vertices(&self.vertices, transform),
            indices: &self.indices,
        }
    }
}

/// A [`TriangleMesh`] with its vertices mapped into query space.
#[derive(Debug, Clone)]
pub struct WorldMesh<'a> {
    vertices: Vec<Point3>,
    indices: &'a [u32],
}

impl WorldMesh<'_> {
    /// World-space vertex positions.
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// World-space triangle `i`. Panics if `i >= num_triangles()`.
    pub fn triangle(&self, i: usize) -> Triangle {
        triangle_at(&self.vertices, self.indices, i)
    }

    /// World-space triangles in index order.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        triangles_of(&self.vertices, self.indices)
    }

    /// World-space bounding box.
    pub fn bounds(&self) -> Aabb3 {
        Aabb3::from_points(&self.vertices)
    }
}

fn validate(vertices: &[Point3], indices: &[u32]) -> Result<()> {
    if indices.len() % 3 != 0 {
        return Err(MeshError::IndexCount(indices.len()));
    }
    if let Some(i) = vertices
        .iter()
        .position(|v| !(v.x.is_finite() && v.y.is_finite() && v.z.is_finite()))
    {
        return Err(MeshError::NonFiniteVertex(i));
    }
    let vertex_count = vertices.len();
    for (triangle, tri) in indices.chunks_exact(3).enumerate() {
        if let Some(&index) = tri.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(MeshError::IndexOutOfRange {
                triangle,
                index,
                vertex_count,
            });
        }
    }
    Ok(())
}

/// Offset for indices appended after `existing` vertices, provided all
/// `existing + added` vertices remain addressable.
fn index_offset(existing: usize, added: usize) -> Result<u32> {
    let total = existing.saturating_add(added);
    if u32::try_from(total).is_err() {
        return Err(MeshError::TooManyVertices(total));
    }
    u32::try_from(existing).map_err(|_| MeshError::TooManyVertices(total))
}

#[inline]
fn triangle_at(vertices: &[Point3], indices: &[u32], i: usize) -> Triangle {
    let tri = &indices[i * 3..i * 3 + 3];
    Triangle::new(
        vertices[tri[0] as usize],
        vertices[tri[1] as usize],
        vertices[tri[2] as usize],
    )
}

fn triangles_of<'a>(
    vertices: &'a [Point3],
    indices: &'a [u32],
) -> impl Iterator<Item = Triangle> + 'a {
    (0..indices.len() / 3).map(move |i| triangle_at(vertices, indices, i))
}
