//! Minimal Wavefront OBJ reader.
//!
//! Reads `v x y z` and `f ...` records; everything else is ignored. Face
//! tokens may carry texture/normal references (`7/2/5`, `7//5`), of which
//! only the vertex index is used. Indices are 1-based, negative indices
//! count back from the most recent vertex, and polygons are fan-triangulated.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use meshprobe_kernel::{MeshError, TriangleMesh};
use meshprobe_math::Point3;
use thiserror::Error;
use tracing::debug;

/// Errors from reading an OBJ file.
#[derive(Error, Debug)]
pub enum ObjError {
    /// The file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A record could not be parsed.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// The parsed data does not form a valid mesh.
    #[error("invalid mesh: {0}")]
    Mesh(#[from] MeshError),
}

fn parse_error(line: usize, message: impl Into<String>) -> ObjError {
    ObjError::Parse {
        line,
        message: message.into(),
    }
}

/// Read an OBJ file from disk.
pub fn load_obj(path: &Path) -> Result<TriangleMesh, ObjError> {
    let file = File::open(path)?;
    let mesh = read_obj(BufReader::new(file))?;
    debug!(
        path = %path.display(),
        vertices = mesh.num_vertices(),
        triangles = mesh.num_triangles(),
        "loaded OBJ"
    );
    Ok(mesh)
}

/// Read OBJ records from `reader`.
pub fn read_obj<R: BufRead>(reader: R) -> Result<TriangleMesh, ObjError> {
    let mut vertices: Vec<Point3> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = n + 1;
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("v") => {
                let mut coords = [0.0; 3];
                for c in &mut coords {
                    let token = parts
                        .next()
                        .ok_or_else(|| parse_error(line_no, "vertex needs 3 coordinates"))?;
                    *c = token
                        .parse()
                        .map_err(|_| parse_error(line_no, format!("bad coordinate `{token}`")))?;
                }
                vertices.push(Point3::from(coords));
            }
            Some("f") => {
                let face = parts
                    .map(|token| resolve_index(token, vertices.len(), line_no))
                    .collect::<Result<Vec<u32>, _>>()?;
                if face.len() < 3 {
                    return Err(parse_error(line_no, "face needs at least 3 vertices"));
                }
                for k in 1..face.len() - 1 {
                    indices.extend([face[0], face[k], face[k + 1]]);
                }
            }
            _ => {}
        }
    }

    Ok(TriangleMesh::new(vertices, indices)?)
}

/// Zero-based vertex index for one face token.
fn resolve_index(token: &str, vertex_count: usize, line: usize) -> Result<u32, ObjError> {
    let head = token.split('/').next().unwrap_or(token);
    let index: i64 = head
        .parse()
        .map_err(|_| parse_error(line, format!("bad face index `{token}`")))?;
    let resolved = match index {
        0 => return Err(parse_error(line, "face index 0 is not valid")),
        i if i > 0 => i - 1,
        i => vertex_count as i64 + i,
    };
    u32::try_from(resolved)
        .map_err(|_| parse_error(line, format!("face index `{token}` is out of range")))
}
