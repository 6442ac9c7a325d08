//! JSON mesh descriptors
//!
//! Reads the Babylon-style export used by the bundled resources:
//! `{ "meshes": [ { "vertices": [...], "indices": [...] } ] }`.
//! Only the first mesh is displayed; unknown fields are ignored.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{InterleavedMesh, MeshError};

/// A single mesh entry inside a descriptor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshEntry {
    #[serde(default)]
    pub name: Option<String>,
    /// Stride-8 interleaved vertex data
    #[serde(default)]
    pub vertices: Vec<f32>,
    /// Stride-3 triangle indices
    #[serde(default)]
    pub indices: Vec<u32>,
}

/// Top-level mesh descriptor file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshDescriptor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub meshes: Vec<MeshEntry>,
}

impl MeshDescriptor {
    /// Parse a descriptor from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, MeshError> {
        serde_json::from_str(json).map_err(|e| MeshError::Parse(e.to_string()))
    }

    /// Parse a descriptor from raw bytes (fetched resources, embedded tables)
    pub fn from_bytes(data: &[u8]) -> Result<Self, MeshError> {
        serde_json::from_slice(data).map_err(|e| MeshError::Parse(e.to_string()))
    }

    /// Load a descriptor from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MeshError> {
        let path = path.as_ref();
        let content = std::fs::read(path).map_err(|e| MeshError::Io(e.to_string()))?;
        let descriptor = Self::from_bytes(&content)?;
        tracing::info!(
            "Loaded mesh descriptor {} ({} meshes)",
            path.display(),
            descriptor.meshes.len()
        );
        Ok(descriptor)
    }

    /// Take the first mesh as interleaved buffers
    pub fn first_mesh(&self) -> Result<InterleavedMesh, MeshError> {
        let entry = self.meshes.first().ok_or(MeshError::EmptyMesh)?;
        Ok(InterleavedMesh::new(
            entry.vertices.clone(),
            entry.indices.clone(),
        ))
    }

    /// Serialize to JSON bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, MeshError> {
        serde_json::to_vec(self).map_err(|e| MeshError::Parse(e.to_string()))
    }
}

impl From<InterleavedMesh> for MeshDescriptor {
    fn from(mesh: InterleavedMesh) -> Self {
        Self {
            name: None,
            meshes: vec![MeshEntry {
                name: None,
                vertices: mesh.vertices,
                indices: mesh.indices,
            }],
        }
    }
}
