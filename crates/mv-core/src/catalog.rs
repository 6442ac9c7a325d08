//! Selectable meshes and the sources they are fetched from

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::mesh::{InterleavedMesh, MeshDescriptor, MeshError};
use crate::primitive;

/// The meshes offered by the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MeshKind {
    Cone,
    Cube,
    Cylinder,
    IcoSphere,
    #[default]
    Suzanne,
    Torus,
    UvSphere,
}

impl MeshKind {
    /// All meshes in menu order
    pub const ALL: [MeshKind; 7] = [
        MeshKind::Cone,
        MeshKind::Cube,
        MeshKind::Cylinder,
        MeshKind::IcoSphere,
        MeshKind::Suzanne,
        MeshKind::Torus,
        MeshKind::UvSphere,
    ];

    /// Display name
    pub fn label(&self) -> &'static str {
        match self {
            MeshKind::Cone => "Cone",
            MeshKind::Cube => "Cube",
            MeshKind::Cylinder => "Cylinder",
            MeshKind::IcoSphere => "ICO Sphere",
            MeshKind::Suzanne => "Suzanne",
            MeshKind::Torus => "Torus",
            MeshKind::UvSphere => "UV Sphere",
        }
    }

    /// File name of the JSON resource for this mesh
    pub fn resource_name(&self) -> &'static str {
        match self {
            MeshKind::Cone => "Cone.json",
            MeshKind::Cube => "Cube.json",
            MeshKind::Cylinder => "Cylinder.json",
            MeshKind::IcoSphere => "ICOSphere.json",
            MeshKind::Suzanne => "Suzanne.json",
            MeshKind::Torus => "torus.json",
            MeshKind::UvSphere => "UVSphere.json",
        }
    }

    /// Look up a mesh by resource file name (case-insensitive)
    pub fn from_resource_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.resource_name().eq_ignore_ascii_case(name))
    }

    /// Generate the built-in version of this mesh, if there is one
    pub fn builtin(&self) -> Option<InterleavedMesh> {
        match self {
            MeshKind::Cone => Some(primitive::generate_cone(1.0, 2.0)),
            MeshKind::Cube => Some(primitive::generate_cube(2.0)),
            MeshKind::Cylinder => Some(primitive::generate_cylinder(1.0, 2.0)),
            MeshKind::IcoSphere => Some(primitive::generate_icosphere(
                1.0,
                crate::constants::ICOSPHERE_SUBDIVISIONS,
            )),
            MeshKind::Torus => Some(primitive::generate_torus(1.0, 0.25)),
            MeshKind::UvSphere => Some(primitive::generate_uv_sphere(1.0)),
            MeshKind::Suzanne => None,
        }
    }
}

impl std::fmt::Display for MeshKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A source of interleaved mesh data
pub trait MeshProvider {
    /// Fetch the mesh for `kind`
    fn fetch(&self, kind: MeshKind) -> Result<InterleavedMesh, MeshError>;
}

/// Serves the generated primitives
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinProvider;

impl MeshProvider for BuiltinProvider {
    fn fetch(&self, kind: MeshKind) -> Result<InterleavedMesh, MeshError> {
        kind.builtin()
            .ok_or_else(|| MeshError::UnknownMesh(kind.label().to_string()))
    }
}

/// Reads `<root>/<resource name>` JSON descriptors
#[derive(Debug, Clone)]
pub struct ResourceDirProvider {
    root: PathBuf,
}

impl ResourceDirProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the resource file for `kind`
    pub fn path_for(&self, kind: MeshKind) -> PathBuf {
        self.root.join(kind.resource_name())
    }
}

impl MeshProvider for ResourceDirProvider {
    fn fetch(&self, kind: MeshKind) -> Result<InterleavedMesh, MeshError> {
        MeshDescriptor::load(self.path_for(kind))?.first_mesh()
    }
}

/// Tries `primary`, then `fallback`
#[derive(Debug, Clone)]
pub struct FallbackProvider<A, B> {
    primary: A,
    fallback: B,
}

impl<A: MeshProvider, B: MeshProvider> FallbackProvider<A, B> {
    pub fn new(primary: A, fallback: B) -> Self {
        Self { primary, fallback }
    }
}

impl<A: MeshProvider, B: MeshProvider> MeshProvider for FallbackProvider<A, B> {
    fn fetch(&self, kind: MeshKind) -> Result<InterleavedMesh, MeshError> {
        match self.primary.fetch(kind) {
            Ok(mesh) => Ok(mesh),
            Err(e) => {
                tracing::warn!("Primary source failed for {}: {}, using fallback", kind, e);
                self.fallback.fetch(kind)
            }
        }
    }
}

/// Resource directory when configured, built-in primitives otherwise
pub fn default_provider(resource_dir: Option<&Path>) -> Box<dyn MeshProvider> {
    match resource_dir {
        Some(dir) => Box::new(FallbackProvider::new(
            ResourceDirProvider::new(dir),
            BuiltinProvider,
        )),
        None => Box::new(BuiltinProvider),
    }
}
