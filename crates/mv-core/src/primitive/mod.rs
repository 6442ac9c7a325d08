//! Built-in primitive meshes
//!
//! Generates stride-8 interleaved buffers (position, normal, uv) for:
//! - Cube
//! - Cylinder and cone (with end caps)
//! - UV sphere and icosphere
//! - Torus
//!
//! Generators describe triangles counter-clockwise seen from outside; the
//! builder stores them so that [`crate::mesh::face_normal`] points outward.

mod box_mesh;
mod cylinder;
mod sphere;
mod torus;

pub use box_mesh::generate_cube;
pub use cylinder::{generate_cone, generate_cylinder, generate_cylinder_with_segments};
pub use sphere::{generate_icosphere, generate_uv_sphere, generate_uv_sphere_with_segments};
pub use torus::{generate_torus, generate_torus_with_segments};

use crate::mesh::InterleavedMesh;
use crate::vertex::VertexRecord;

/// Accumulates vertex records and triangles for a primitive
#[derive(Debug, Default)]
pub(crate) struct PrimitiveBuilder {
    vertices: Vec<f32>,
    count: u32,
    indices: Vec<u32>,
}

impl PrimitiveBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex and return its index
    pub fn vertex(&mut self, position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> u32 {
        VertexRecord::new(position, normal, uv).write_to(&mut self.vertices);
        let index = self.count;
        self.count += 1;
        index
    }

    pub fn vertex_count(&self) -> u32 {
        self.count
    }

    /// Add a triangle given counter-clockwise from outside
    pub fn triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, c, b]);
    }

    pub fn finish(self) -> InterleavedMesh {
        InterleavedMesh::new(self.vertices, self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{DeinterleaveOptions, MeshBuffers, face_normal, triangle_centroid};
    use glam::Vec3;

    fn buffers(mesh: &InterleavedMesh) -> MeshBuffers {
        MeshBuffers::from_interleaved(mesh, &DeinterleaveOptions::default()).unwrap()
    }

    /// Every non-degenerate face normal points away from the origin
    fn assert_outward(mesh: &InterleavedMesh) {
        let b = buffers(mesh);
        for tri in b.indices.chunks_exact(3) {
            let p1 = Vec3::from(b.positions[tri[0] as usize]);
            let p2 = Vec3::from(b.positions[tri[1] as usize]);
            let p3 = Vec3::from(b.positions[tri[2] as usize]);
            let n = face_normal(p1, p2, p3);
            let c = triangle_centroid(p1, p2, p3);
            assert!(n.dot(c) >= -1e-4, "inward face at {c:?}");
        }
    }

    #[test]
    fn test_cube() {
        let mesh = generate_cube(1.0);
        assert_eq!(mesh.vertex_count(), 24); // 6 faces * 4 vertices
        assert_eq!(mesh.triangle_count(), 12);
        assert_outward(&mesh);
    }

    #[test]
    fn test_cylinder() {
        let mesh = generate_cylinder(0.5, 1.0);
        assert!(mesh.vertex_count() > 0);
        assert_eq!(mesh.indices.len() % 3, 0);
        assert_outward(&mesh);
    }

    #[test]
    fn test_cone() {
        let mesh = generate_cone(0.5, 1.0);
        assert!(mesh.triangle_count() > 0);
        assert_outward(&mesh);
    }

    #[test]
    fn test_uv_sphere() {
        let mesh = generate_uv_sphere(1.0);
        assert!(mesh.vertex_count() > 0);
        assert_outward(&mesh);
    }

    #[test]
    fn test_icosphere() {
        let base = generate_icosphere(1.0, 0);
        assert_eq!(base.vertex_count(), 12);
        assert_eq!(base.triangle_count(), 20);
        assert_outward(&base);

        let subdivided = generate_icosphere(1.0, 2);
        assert_eq!(subdivided.triangle_count(), 20 * 16);
        // Shared midpoints: V = 10 * 4^n + 2
        assert_eq!(subdivided.vertex_count(), 162);
        assert_outward(&subdivided);
    }

    #[test]
    fn test_icosphere_radius() {
        let b = buffers(&generate_icosphere(2.0, 1));
        for p in &b.positions {
            assert!((Vec3::from(*p).length() - 2.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_torus() {
        let mesh = generate_torus(1.0, 0.25);
        let b = buffers(&mesh);
        assert!(b.triangle_count() > 0);
        // Outward relative to the tube center circle
        for tri in b.indices.chunks_exact(3) {
            let p1 = Vec3::from(b.positions[tri[0] as usize]);
            let p2 = Vec3::from(b.positions[tri[1] as usize]);
            let p3 = Vec3::from(b.positions[tri[2] as usize]);
            let c = triangle_centroid(p1, p2, p3);
            let ring = Vec3::new(c.x, c.y, 0.0).normalize_or_zero();
            assert!(face_normal(p1, p2, p3).dot(c - ring) >= -1e-4);
        }
    }

    #[test]
    fn test_zero_segments_clamped() {
        let meshes = [
            generate_cylinder_with_segments(1.0, 2.0, 0),
            generate_uv_sphere_with_segments(1.0, 0, 0),
            generate_torus_with_segments(2.0, 0.5, 0, 0),
        ];
        for mesh in &meshes {
            assert!(mesh.triangle_count() > 0);
            assert!(mesh.vertices.iter().all(|v| v.is_finite()));
        }
        assert_eq!(
            generate_torus_with_segments(2.0, 0.5, 0, 1),
            generate_torus_with_segments(2.0, 0.5, 3, 3)
        );
    }

    #[test]
    fn test_cube_dimensions() {
        let (min, max) = buffers(&generate_cube(2.0)).bounding_box();
        for i in 0..3 {
            assert!((max[i] - min[i] - 2.0).abs() < 0.001);
        }
    }
}
