//! Error types for mesh construction and query parameters.

use thiserror::Error;

/// Errors raised while building a [`TriangleMesh`](crate::TriangleMesh).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// Index buffer does not describe whole triangles.
    #[error("index count {0} is not a multiple of 3")]
    IndexCount(usize),

    /// Flat position buffer does not describe whole vertices.
    #[error("position count {0} is not a multiple of 3")]
    PositionCount(usize),

    /// A triangle references a vertex that does not exist.
    #[error("triangle {triangle} references vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        /// Triangle number (index triple position).
        triangle: usize,
        /// Offending vertex index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// Vertex count does not fit a `u32` index.
    #[error("{0} vertices exceed the u32 index range")]
    TooManyVertices(usize),

    /// A vertex has a NaN or infinite coordinate.
    #[error("vertex {0} has a non-finite coordinate")]
    NonFiniteVertex(usize),
}

/// Errors raised by [`QueryParams::validate`](crate::QueryParams::validate).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamsError {
    /// Determinant tolerance is not a finite positive number.
    #[error("epsilon must be finite and positive, got {0}")]
    InvalidEpsilon(f64),

    /// Reference ray direction is zero or not finite.
    #[error("reference direction must be finite and non-zero, got {0:?}")]
    DegenerateDirection([f64; 3]),
}

/// Result type for mesh construction.
pub type Result<T> = std::result::Result<T, MeshError>;
