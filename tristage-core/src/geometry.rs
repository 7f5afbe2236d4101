//! Indexed triangle meshes.
use nalgebra::Point3;

use crate::error::{Error, Result};

/// A triangle as three indices into a mesh's vertex list, in winding order.
pub type Face = [usize; 3];

/// An immutable indexed triangle mesh.
///
/// Holds the reference vertices only; rotated and projected positions are
/// derived per frame and never written back.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Point3<f64>>,
    faces: Vec<Face>,
}

impl Mesh {
    /// Build a mesh, rejecting faces that index past the vertex list.
    pub fn new(vertices: Vec<Point3<f64>>, faces: Vec<Face>) -> Result<Self> {
        let vertex_count = vertices.len();
        for (face, indices) in faces.iter().enumerate() {
            if let Some(&index) = indices.iter().find(|&&i| i >= vertex_count) {
                return Err(Error::InvalidFaceIndex {
                    face,
                    index,
                    vertex_count,
                });
            }
        }

        Ok(Self { vertices, faces })
    }

    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Four-sided pyramid: apex above a triangular base.
    pub fn pyramid() -> Self {
        Self {
            vertices: vec![
                Point3::new(0.0, 1.2, 0.0),
                Point3::new(-1.0, -0.8, 1.0),
                Point3::new(1.0, -0.8, 1.0),
                Point3::new(0.0, -0.8, -1.0),
            ],
            faces: vec![[0, 1, 2], [0, 2, 3], [0, 3, 1], [1, 2, 3]],
        }
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::pyramid()
    }
}
