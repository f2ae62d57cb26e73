/// Geometry primitives for 3D rendering
use nalgebra::Point3;

use crate::error::{MeshError, Result};

/// A mesh vertex position. Also used as a direction where context calls for one.
pub type Vertex = Point3<f32>;

/// A triangle face as three 0-based indices into the mesh vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    pub indices: [usize; 3],
}

impl Face {
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { indices: [a, b, c] }
    }
}

/// An indexed triangle mesh. Every face index is guaranteed to be in range.
#[derive(Debug, Clone)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    faces: Vec<Face>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vertex>, faces: Vec<Face>) -> Result<Self> {
        let vertex_count = vertices.len();
        for (face_idx, face) in faces.iter().enumerate() {
            if let Some(&index) = face.indices.iter().find(|&&i| i >= vertex_count) {
                return Err(MeshError::FaceIndexOutOfRange {
                    face: face_idx,
                    index: index as i64,
                    vertex_count,
                });
            }
        }

        Ok(Self { vertices, faces })
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Corner positions of a face
    pub fn triangle(&self, face: &Face) -> [Vertex; 3] {
        face.indices.map(|i| self.vertices[i])
    }

    /// Create a cube mesh centered at the origin with outward winding
    pub fn cube(size: f32) -> Self {
        let half = size / 2.0;
        let vertices = vec![
            Point3::new(-half, -half, -half),
            Point3::new(half, -half, -half),
            Point3::new(half, half, -half),
            Point3::new(-half, half, -half),
            Point3::new(-half, -half, half),
            Point3::new(half, -half, half),
            Point3::new(half, half, half),
            Point3::new(-half, half, half),
        ];

        let faces = vec![
            // Front (+z)
            Face::new(4, 5, 6),
            Face::new(4, 6, 7),
            // Back (-z)
            Face::new(0, 3, 2),
            Face::new(0, 2, 1),
            // Top (+y)
            Face::new(3, 7, 6),
            Face::new(3, 6, 2),
            // Bottom (-y)
            Face::new(0, 1, 5),
            Face::new(0, 5, 4),
            // Right (+x)
            Face::new(1, 2, 6),
            Face::new(1, 6, 5),
            // Left (-x)
            Face::new(0, 4, 7),
            Face::new(0, 7, 3),
        ];

        Self { vertices, faces }
    }
}
