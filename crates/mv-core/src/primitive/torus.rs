//! Torus mesh generation

use std::f32::consts::PI;

use super::PrimitiveBuilder;
use crate::constants::{MIN_RING_SEGMENTS, RADIAL_SEGMENTS, TORUS_TUBE_SEGMENTS};
use crate::mesh::InterleavedMesh;

/// Generate a torus around the Z axis
pub fn generate_torus(major_radius: f32, minor_radius: f32) -> InterleavedMesh {
    generate_torus_with_segments(
        major_radius,
        minor_radius,
        RADIAL_SEGMENTS,
        TORUS_TUBE_SEGMENTS,
    )
}

/// Generate a torus with custom resolution
///
/// # Arguments
/// * `major_radius` - Distance from the axis to the tube center
/// * `minor_radius` - Tube radius
/// * `segments` - Segments around the axis (minimum: 3)
/// * `tube_segments` - Segments around the tube (minimum: 3)
pub fn generate_torus_with_segments(
    major_radius: f32,
    minor_radius: f32,
    segments: u32,
    tube_segments: u32,
) -> InterleavedMesh {
    let segments = segments.max(MIN_RING_SEGMENTS);
    let tube_segments = tube_segments.max(MIN_RING_SEGMENTS);
    let mut builder = PrimitiveBuilder::new();

    for i in 0..=segments {
        let u = i as f32 / segments as f32;
        let (sin_u, cos_u) = (u * 2.0 * PI).sin_cos();

        for j in 0..=tube_segments {
            let v = j as f32 / tube_segments as f32;
            let (sin_v, cos_v) = (v * 2.0 * PI).sin_cos();

            let normal = [cos_v * cos_u, cos_v * sin_u, sin_v];
            let position = [
                major_radius * cos_u + minor_radius * normal[0],
                major_radius * sin_u + minor_radius * normal[1],
                minor_radius * normal[2],
            ];
            builder.vertex(position, normal, [u, v]);
        }
    }

    let row = tube_segments + 1;
    for i in 0..segments {
        for j in 0..tube_segments {
            let a = i * row + j;
            let b = a + row;
            builder.triangle(a, b, a + 1);
            builder.triangle(a + 1, b, b + 1);
        }
    }

    builder.finish()
}
