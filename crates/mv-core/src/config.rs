//! Viewer configuration structures
//!
//! Settings for mesh loading, the normal overlay, material, camera, light and
//! rotation. Serialized as RON; every section falls back to its defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::MeshKind;
use crate::constants::{DEFAULT_NORMAL_SCALE, DEFAULT_ROTATION_STEP};
use crate::mesh::DeinterleaveOptions;

/// How the mesh surface is shaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShadingMode {
    /// Triangle edges only, faceted normals
    Wireframe,
    /// One normal per triangle
    #[default]
    Flat,
    /// Per-vertex normals from the mesh data
    Smooth,
}

impl ShadingMode {
    pub const ALL: [ShadingMode; 3] = [
        ShadingMode::Wireframe,
        ShadingMode::Flat,
        ShadingMode::Smooth,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ShadingMode::Wireframe => "Wireframe",
            ShadingMode::Flat => "Flat Shading",
            ShadingMode::Smooth => "Smooth Shading",
        }
    }
}

/// Mesh loading configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MeshConfig {
    /// Extract texture coordinates when de-interleaving
    pub include_uvs: bool,
    /// Directory holding the JSON mesh resources; `None` serves built-ins only
    pub resource_dir: Option<String>,
    /// Mesh shown at startup
    pub initial_mesh: MeshKind,
    /// Shading mode at startup
    pub initial_shading: ShadingMode,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            include_uvs: true,
            resource_dir: Some("resources".to_string()),
            initial_mesh: MeshKind::Suzanne,
            initial_shading: ShadingMode::Flat,
        }
    }
}

impl MeshConfig {
    pub fn deinterleave_options(&self) -> DeinterleaveOptions {
        DeinterleaveOptions {
            include_uvs: self.include_uvs,
        }
    }
}

/// Normal overlay configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NormalOverlayConfig {
    /// Divisor applied to the unit normal (segment length is `1 / scale`)
    pub scale: f32,
    /// Line color (RGB)
    pub color: [f32; 3],
}

impl Default for NormalOverlayConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_NORMAL_SCALE,
            color: [1.0, 1.0, 1.0],
        }
    }
}

/// Surface material configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MaterialConfig {
    /// Diffuse color (RGB)
    pub diffuse_color: [f32; 3],
    /// Specular color (RGB)
    pub specular_color: [f32; 3],
}

impl Default for MaterialConfig {
    fn default() -> Self {
        Self {
            diffuse_color: [0.0, 1.0, 1.0],
            specular_color: [0.6, 0.6, 0.87],
        }
    }
}

/// Camera placement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Camera position
    pub position: [f32; 3],
    /// Point the camera looks at
    pub target: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.5, -4.0],
            target: [0.0, 0.0, 0.0],
        }
    }
}

/// Hemispheric light configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LightConfig {
    /// Direction of the sky side of the light
    pub direction: [f32; 3],
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            direction: [0.0, 1.0, 0.0],
        }
    }
}

/// Continuous rotation configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RotationConfig {
    /// Whether the mesh rotates at startup
    pub enabled: bool,
    /// Radians added to each Euler angle per frame
    pub step: f32,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            step: DEFAULT_ROTATION_STEP,
        }
    }
}

/// Complete viewer configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ViewerConfig {
    #[serde(default)]
    pub mesh: MeshConfig,
    #[serde(default)]
    pub normals: NormalOverlayConfig,
    #[serde(default)]
    pub material: MaterialConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub light: LightConfig,
    #[serde(default)]
    pub rotation: RotationConfig,
}

impl ViewerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = self.to_bytes()?;
        std::fs::write(path.as_ref(), content).map_err(|e| ConfigError::Io(e.to_string()))?;
        Ok(())
    }

    /// Serialize configuration to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;
        Ok(content.into_bytes())
    }

    /// Load configuration from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        ron::from_str(&content).map_err(|e| ConfigError::Deserialize(e.to_string()))
    }

    /// Load configuration from bytes
    pub fn load_from_bytes(data: &[u8]) -> Result<Self, ConfigError> {
        let content =
            std::str::from_utf8(data).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        ron::from_str(content).map_err(|e| ConfigError::Deserialize(e.to_string()))
    }
}

/// Configuration-related errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}
