//! Mesh buffers: interleaved input, de-interleaved output, normal overlays

mod deinterleave;
mod descriptor;
mod normals;

use serde::{Deserialize, Serialize};

use crate::constants::{INDEX_STRIDE, VERTEX_STRIDE};

pub use deinterleave::{DeinterleaveOptions, Deinterleaved, deinterleave};
pub use descriptor::{MeshDescriptor, MeshEntry};
pub use normals::{
    NormalSegment, build_normal_segments, calculate_face_normals, face_normal,
    segment_line_list, triangle_centroid,
};

/// A mesh as delivered by a descriptor or a primitive generator:
/// a flat stride-8 vertex buffer plus a flat stride-3 index buffer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterleavedMesh {
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl InterleavedMesh {
    pub fn new(vertices: Vec<f32>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Number of complete vertex records
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / VERTEX_STRIDE
    }

    /// Number of complete triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / INDEX_STRIDE
    }
}

/// De-interleaved mesh data ready to hand to a renderer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    /// Vertex positions, index-aligned with `normals`
    pub positions: Vec<[f32; 3]>,
    /// Per-vertex normals from the source buffer
    pub normals: Vec<[f32; 3]>,
    /// Texture coordinates, present when UV extraction is enabled
    pub uvs: Option<Vec<[f32; 2]>>,
    /// Triangle indices (3 per triangle)
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// De-interleave a mesh and check that every index references a vertex
    pub fn from_interleaved(
        mesh: &InterleavedMesh,
        options: &DeinterleaveOptions,
    ) -> Result<Self, MeshError> {
        let Deinterleaved {
            positions,
            normals,
            uvs,
        } = deinterleave(&mesh.vertices, options);

        if positions.is_empty() {
            return Err(MeshError::EmptyMesh);
        }

        validate_indices(&mesh.indices, positions.len())?;

        let whole = mesh.indices.len() - mesh.indices.len() % INDEX_STRIDE;
        if whole != mesh.indices.len() {
            tracing::warn!(
                "Index buffer length {} is not a multiple of {}, ignoring trailing indices",
                mesh.indices.len(),
                INDEX_STRIDE
            );
        }

        Ok(Self {
            positions,
            normals,
            uvs,
            indices: mesh.indices[..whole].to_vec(),
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / INDEX_STRIDE
    }

    /// Axis-aligned bounds of the positions, zero for an empty mesh
    pub fn bounding_box(&self) -> ([f32; 3], [f32; 3]) {
        if self.positions.is_empty() {
            return ([0.0; 3], [0.0; 3]);
        }

        let mut min = [f32::MAX; 3];
        let mut max = [f32::MIN; 3];

        for p in &self.positions {
            for i in 0..3 {
                min[i] = min[i].min(p[i]);
                max[i] = max[i].max(p[i]);
            }
        }

        (min, max)
    }
}

/// Check that every index is below `vertex_count`
pub fn validate_indices(indices: &[u32], vertex_count: usize) -> Result<(), MeshError> {
    match indices.iter().find(|&&i| i as usize >= vertex_count) {
        Some(&index) => Err(MeshError::IndexOutOfRange {
            index,
            vertex_count,
        }),
        None => Ok(()),
    }
}

/// Mesh-related errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Empty mesh: no geometry found")]
    EmptyMesh,
    #[error("Index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },
    #[error("Invalid normal scale: {0}")]
    InvalidScale(f32),
    #[error("Unknown mesh: {0}")]
    UnknownMesh(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_mesh() -> InterleavedMesh {
        InterleavedMesh::new(
            vec![
                0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, //
                1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0,
            ],
            vec![0, 1, 2],
        )
    }

    #[test]
    fn test_from_interleaved() {
        let buffers =
            MeshBuffers::from_interleaved(&triangle_mesh(), &DeinterleaveOptions::default())
                .unwrap();
        assert_eq!(buffers.vertex_count(), 3);
        assert_eq!(buffers.triangle_count(), 1);
        assert_eq!(
            buffers.positions,
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]
        );
        assert_eq!(buffers.uvs.as_ref().map(Vec::len), Some(3));
    }

    #[test]
    fn test_from_interleaved_drops_partial_triangle() {
        let mut mesh = triangle_mesh();
        mesh.indices = vec![0, 1, 2, 0];
        let buffers =
            MeshBuffers::from_interleaved(&mesh, &DeinterleaveOptions::default()).unwrap();
        assert_eq!(buffers.indices, vec![0, 1, 2]);
        assert_eq!(buffers.triangle_count(), 1);
    }

    #[test]
    fn test_from_interleaved_rejects_bad_index() {
        let mut mesh = triangle_mesh();
        mesh.indices = vec![0, 1, 3];
        let err = MeshBuffers::from_interleaved(&mesh, &DeinterleaveOptions::default())
            .unwrap_err();
        assert_eq!(
            err,
            MeshError::IndexOutOfRange {
                index: 3,
                vertex_count: 3
            }
        );
    }

    #[test]
    fn test_from_interleaved_empty() {
        let mesh = InterleavedMesh::default();
        assert_eq!(
            MeshBuffers::from_interleaved(&mesh, &DeinterleaveOptions::default()),
            Err(MeshError::EmptyMesh)
        );
    }

    #[test]
    fn test_bounding_box() {
        let buffers =
            MeshBuffers::from_interleaved(&triangle_mesh(), &DeinterleaveOptions::default())
                .unwrap();
        let (min, max) = buffers.bounding_box();
        assert_eq!(min, [0.0, 0.0, 0.0]);
        assert_eq!(max, [1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_counts() {
        let mesh = triangle_mesh();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
    }
}
