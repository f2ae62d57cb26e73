/// Errors raised while loading or assembling a mesh
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, MeshError>;

#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    #[error("unable to access mesh file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("line {line}: face references vertex {index}, but the file only declares {vertex_count} vertices")]
    FaceReferenceOutOfRange {
        line: usize,
        index: i64,
        vertex_count: usize,
    },

    #[error("face {face} references vertex {index}, but the mesh only has {vertex_count} vertices")]
    FaceIndexOutOfRange {
        face: usize,
        index: i64,
        vertex_count: usize,
    },

    #[error("mesh has no vertices or no faces")]
    Empty,
}
