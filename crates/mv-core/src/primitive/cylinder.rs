//! Cylinder and cone mesh generation (with end caps)

use std::f32::consts::PI;

use super::PrimitiveBuilder;
use crate::constants::{MIN_RING_SEGMENTS, RADIAL_SEGMENTS};
use crate::mesh::InterleavedMesh;

/// Generate a cylinder along the Z axis
pub fn generate_cylinder(radius: f32, length: f32) -> InterleavedMesh {
    generate_cylinder_with_segments(radius, length, RADIAL_SEGMENTS)
}

/// Generate a cylinder with custom segment count (at least 3)
pub fn generate_cylinder_with_segments(
    radius: f32,
    length: f32,
    segments: u32,
) -> InterleavedMesh {
    let segments = segments.max(MIN_RING_SEGMENTS);
    let half_length = length / 2.0;
    let mut builder = PrimitiveBuilder::new();

    // Side: bottom/top vertex pairs around the rim
    let side_start = builder.vertex_count();
    for i in 0..=segments {
        let u = i as f32 / segments as f32;
        let (sin, cos) = (u * 2.0 * PI).sin_cos();
        let normal = [cos, sin, 0.0];
        builder.vertex([radius * cos, radius * sin, -half_length], normal, [u, 0.0]);
        builder.vertex([radius * cos, radius * sin, half_length], normal, [u, 1.0]);
    }

    for i in 0..segments {
        let base = side_start + i * 2;
        builder.triangle(base, base + 2, base + 1);
        builder.triangle(base + 1, base + 2, base + 3);
    }

    add_cap(&mut builder, radius, half_length, segments, true);
    add_cap(&mut builder, radius, -half_length, segments, false);

    builder.finish()
}

/// Generate a cone along the Z axis with its apex at `+length / 2`
pub fn generate_cone(radius: f32, length: f32) -> InterleavedMesh {
    let segments = RADIAL_SEGMENTS;
    let half_length = length / 2.0;
    let mut builder = PrimitiveBuilder::new();

    // Slanted side normal: (cos * length, sin * length, radius), normalized
    let slant = (length * length + radius * radius).sqrt();
    let (nr, nz) = if slant > 0.0 {
        (length / slant, radius / slant)
    } else {
        (0.0, 1.0)
    };

    // One apex vertex per segment so each slice keeps its own normal
    let side_start = builder.vertex_count();
    for i in 0..=segments {
        let u = i as f32 / segments as f32;
        let (sin, cos) = (u * 2.0 * PI).sin_cos();
        let normal = [cos * nr, sin * nr, nz];
        builder.vertex([radius * cos, radius * sin, -half_length], normal, [u, 0.0]);
        builder.vertex([0.0, 0.0, half_length], normal, [u, 1.0]);
    }

    for i in 0..segments {
        let base = side_start + i * 2;
        builder.triangle(base, base + 2, base + 1);
    }

    add_cap(&mut builder, radius, -half_length, segments, false);

    builder.finish()
}

/// Add a flat disc at height `z` facing +Z (`top`) or -Z
fn add_cap(builder: &mut PrimitiveBuilder, radius: f32, z: f32, segments: u32, top: bool) {
    let normal = if top { [0.0, 0.0, 1.0] } else { [0.0, 0.0, -1.0] };

    let center = builder.vertex([0.0, 0.0, z], normal, [0.5, 0.5]);
    let rim_start = builder.vertex_count();
    for i in 0..=segments {
        let (sin, cos) = (i as f32 / segments as f32 * 2.0 * PI).sin_cos();
        builder.vertex(
            [radius * cos, radius * sin, z],
            normal,
            [0.5 + 0.5 * cos, 0.5 + 0.5 * sin],
        );
    }

    for i in 0..segments {
        if top {
            builder.triangle(center, rim_start + i, rim_start + i + 1);
        } else {
            builder.triangle(center, rim_start + i + 1, rim_start + i);
        }
    }
}
