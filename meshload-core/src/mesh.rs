//! Mesh data structures and functionality

use crate::point::*;
use serde::{Deserialize, Serialize};

/// A polygon mesh with vertices and faces
///
/// Faces are stored as they appear in the source file: each face is a list of
/// 0-based indices into `vertices` with three or more entries. A quad-faced
/// model keeps its quads rather than being split into triangles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mesh {
    pub vertices: Vec<Point3f>,
    pub faces: Vec<Vec<usize>>,
    pub normals: Option<Vec<Vector3f>>,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
            normals: None,
        }
    }

    /// Create a mesh from vertices and faces
    pub fn from_vertices_and_faces(vertices: Vec<Point3f>, faces: Vec<Vec<usize>>) -> Self {
        Self {
            vertices,
            faces,
            normals: None,
        }
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh is empty
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Set vertex normals
    ///
    /// Ignored unless there is exactly one normal per vertex.
    pub fn set_normals(&mut self, normals: Vec<Vector3f>) {
        if normals.len() == self.vertices.len() {
            self.normals = Some(normals);
        }
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}
