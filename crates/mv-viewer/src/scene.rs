//! Scene preparation
//!
//! Turns de-interleaved mesh buffers into the GPU-ready vertex and line lists
//! for one shading mode. A new [`SceneData`] is built for every mesh or
//! shading change; nothing is patched in place.

use glam::Vec3;
use mv_core::{
    MeshBuffers, MeshError, NormalSegment, ShadingMode, ViewerConfig, build_normal_segments,
    calculate_face_normals, segment_line_list,
};

use crate::vertex::{LineVertex, MeshVertex};

/// Surface material derived from the configuration and shading mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Diffuse color (RGB).
    pub diffuse_color: [f32; 3],
    /// Specular color (RGB).
    pub specular_color: [f32; 3],
    /// Draw triangle edges instead of filled faces.
    pub wireframe: bool,
}

/// Camera placement for the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSetup {
    /// Camera position.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
}

/// Hemispheric light for the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSetup {
    /// Direction of the sky side of the light.
    pub direction: Vec3,
}

/// Everything a renderer needs to draw one mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneData {
    /// Name of the displayed mesh.
    pub name: String,
    /// Shading mode the vertices were prepared for.
    pub shading: ShadingMode,
    /// Surface vertices.
    pub vertices: Vec<MeshVertex>,
    /// Triangle indices into `vertices`.
    pub indices: Vec<u32>,
    /// Surface material.
    pub material: Material,
    /// One centroid-to-normal segment per source triangle.
    pub normal_segments: Vec<NormalSegment>,
    /// `normal_segments` as a line list.
    pub normal_lines: Vec<LineVertex>,
    /// Camera placement.
    pub camera: CameraSetup,
    /// Light setup.
    pub light: LightSetup,
}

impl SceneData {
    /// Build the scene for `buffers` in the given shading mode.
    pub fn build(
        name: impl Into<String>,
        buffers: &MeshBuffers,
        shading: ShadingMode,
        config: &ViewerConfig,
    ) -> Result<Self, MeshError> {
        let normal_segments =
            build_normal_segments(&buffers.positions, &buffers.indices, config.normals.scale)?;

        let color = config.normals.color;
        let normal_lines = segment_line_list(&normal_segments)
            .into_iter()
            .map(|position| LineVertex { position, color })
            .collect();

        let (vertices, indices) = match shading {
            ShadingMode::Smooth => smooth_vertices(buffers),
            ShadingMode::Flat | ShadingMode::Wireframe => faceted_vertices(buffers),
        };

        Ok(Self {
            name: name.into(),
            shading,
            vertices,
            indices,
            material: Material {
                diffuse_color: config.material.diffuse_color,
                specular_color: config.material.specular_color,
                wireframe: shading == ShadingMode::Wireframe,
            },
            normal_segments,
            normal_lines,
            camera: CameraSetup {
                position: Vec3::from(config.camera.position),
                target: Vec3::from(config.camera.target),
            },
            light: LightSetup {
                direction: Vec3::from(config.light.direction),
            },
        })
    }

    /// Number of triangles in the surface.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Line-list indices covering the three edges of every triangle.
    ///
    /// For renderers that cannot switch polygon mode to draw `material.wireframe`.
    pub fn wireframe_edges(&self) -> Vec<u32> {
        self.indices
            .chunks_exact(3)
            .flat_map(|t| [t[0], t[1], t[1], t[2], t[2], t[0]])
            .collect()
    }
}

fn uv_at(buffers: &MeshBuffers, index: usize) -> [f32; 2] {
    buffers
        .uvs
        .as_ref()
        .and_then(|uvs| uvs.get(index).copied())
        .unwrap_or([0.0, 0.0])
}

/// Shared vertices carrying the source normals
fn smooth_vertices(buffers: &MeshBuffers) -> (Vec<MeshVertex>, Vec<u32>) {
    let vertices = buffers
        .positions
        .iter()
        .zip(&buffers.normals)
        .enumerate()
        .map(|(i, (position, normal))| MeshVertex {
            position: *position,
            normal: *normal,
            uv: uv_at(buffers, i),
        })
        .collect();
    (vertices, buffers.indices.clone())
}

/// Unshared vertices, each corner carrying its triangle's face normal
fn faceted_vertices(buffers: &MeshBuffers) -> (Vec<MeshVertex>, Vec<u32>) {
    let face_normals = calculate_face_normals(&buffers.positions, &buffers.indices);
    let mut vertices = Vec::with_capacity(face_normals.len() * 3);

    for (tri, normal) in buffers.indices.chunks_exact(3).zip(face_normals) {
        for &index in tri {
            let index = index as usize;
            vertices.push(MeshVertex {
                position: buffers.positions[index],
                normal,
                uv: uv_at(buffers, index),
            });
        }
    }

    let indices = (0..vertices.len() as u32).collect();
    (vertices, indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mv_core::{DeinterleaveOptions, InterleavedMesh, primitive};

    fn quad() -> MeshBuffers {
        let mesh = InterleavedMesh::new(
            vec![
                0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, //
                1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, //
                1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, //
                0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0,
            ],
            vec![0, 1, 2, 0, 2, 3],
        );
        MeshBuffers::from_interleaved(&mesh, &DeinterleaveOptions::default()).unwrap()
    }

    #[test]
    fn test_smooth_keeps_shared_vertices() {
        let scene =
            SceneData::build("quad", &quad(), ShadingMode::Smooth, &ViewerConfig::default())
                .unwrap();
        assert_eq!(scene.vertices.len(), 4);
        assert_eq!(scene.indices, vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(scene.vertices[2].normal, [0.0, 0.0, 1.0]);
        assert_eq!(scene.vertices[2].uv, [1.0, 1.0]);
        assert!(!scene.material.wireframe);
    }

    #[test]
    fn test_flat_unshares_vertices() {
        let scene =
            SceneData::build("quad", &quad(), ShadingMode::Flat, &ViewerConfig::default()).unwrap();
        assert_eq!(scene.vertices.len(), 6);
        assert_eq!(scene.indices, (0..6).collect::<Vec<u32>>());
        for v in &scene.vertices {
            assert_relative_eq!(v.normal[2].abs(), 1.0);
        }
        // All corners of one triangle share its normal
        assert_eq!(scene.vertices[0].normal, scene.vertices[2].normal);
    }

    #[test]
    fn test_wireframe_material() {
        let scene = SceneData::build(
            "quad",
            &quad(),
            ShadingMode::Wireframe,
            &ViewerConfig::default(),
        )
        .unwrap();
        assert!(scene.material.wireframe);
        assert_eq!(scene.wireframe_edges().len(), scene.triangle_count() * 6);
    }

    #[test]
    fn test_normal_lines() {
        let config = ViewerConfig::default();
        let scene = SceneData::build("quad", &quad(), ShadingMode::Flat, &config).unwrap();
        assert_eq!(scene.normal_segments.len(), 2);
        assert_eq!(scene.normal_lines.len(), 4);
        assert_eq!(scene.normal_lines[0].color, config.normals.color);
        assert_relative_eq!(
            scene.normal_segments[0].length(),
            1.0 / config.normals.scale,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_partial_triangle_dropped_in_every_mode() {
        let mesh = InterleavedMesh::new(
            vec![
                0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, //
                1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, //
                0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0,
            ],
            vec![0, 1, 2, 0],
        );
        let buffers =
            MeshBuffers::from_interleaved(&mesh, &DeinterleaveOptions::default()).unwrap();
        let config = ViewerConfig::default();

        for shading in ShadingMode::ALL {
            let scene = SceneData::build("tri", &buffers, shading, &config).unwrap();
            assert_eq!(scene.indices.len() % 3, 0);
            assert_eq!(scene.triangle_count(), 1);
            assert_eq!(scene.normal_segments.len(), 1);
        }
    }

    #[test]
    fn test_missing_uvs_default_to_zero() {
        let mesh = primitive::generate_cube(1.0);
        let buffers =
            MeshBuffers::from_interleaved(&mesh, &DeinterleaveOptions { include_uvs: false })
                .unwrap();
        let scene =
            SceneData::build("cube", &buffers, ShadingMode::Smooth, &ViewerConfig::default())
                .unwrap();
        assert!(scene.vertices.iter().all(|v| v.uv == [0.0, 0.0]));
    }

    #[test]
    fn test_invalid_overlay_scale() {
        let mut config = ViewerConfig::default();
        config.normals.scale = -1.0;
        let result = SceneData::build("quad", &quad(), ShadingMode::Flat, &config);
        assert_eq!(result, Err(MeshError::InvalidScale(-1.0)));
    }

    #[test]
    fn test_camera_and_light_from_config() {
        let scene =
            SceneData::build("quad", &quad(), ShadingMode::Flat, &ViewerConfig::default()).unwrap();
        assert_eq!(scene.camera.position, Vec3::new(0.0, 0.5, -4.0));
        assert_eq!(scene.light.direction, Vec3::Y);
    }
}
