//! Sphere mesh generation (UV sphere and icosphere)

use std::collections::HashMap;
use std::f32::consts::PI;

use glam::Vec3;

use super::PrimitiveBuilder;
use crate::constants::{
    MIN_LAT_SEGMENTS, MIN_RING_SEGMENTS, SPHERE_LAT_SEGMENTS, SPHERE_LON_SEGMENTS,
};
use crate::mesh::InterleavedMesh;

/// Generate a UV sphere mesh
pub fn generate_uv_sphere(radius: f32) -> InterleavedMesh {
    generate_uv_sphere_with_segments(radius, SPHERE_LAT_SEGMENTS, SPHERE_LON_SEGMENTS)
}

/// Generate a UV sphere mesh with custom resolution
///
/// # Arguments
/// * `radius` - Sphere radius
/// * `lat_segments` - Number of latitude bands (default: 16, minimum: 2)
/// * `lon_segments` - Number of longitude segments (default: 32, minimum: 3)
pub fn generate_uv_sphere_with_segments(
    radius: f32,
    lat_segments: u32,
    lon_segments: u32,
) -> InterleavedMesh {
    let lat_segments = lat_segments.max(MIN_LAT_SEGMENTS);
    let lon_segments = lon_segments.max(MIN_RING_SEGMENTS);
    let mut builder = PrimitiveBuilder::new();

    for lat in 0..=lat_segments {
        let v = lat as f32 / lat_segments as f32;
        // Poles are pinned so their rings collapse to a single point
        let (sin_theta, cos_theta) = match lat {
            0 => (0.0, 1.0),
            l if l == lat_segments => (0.0, -1.0),
            _ => (v * PI).sin_cos(), // 0 to PI
        };

        for lon in 0..=lon_segments {
            let u = lon as f32 / lon_segments as f32;
            let (sin_phi, cos_phi) = (u * 2.0 * PI).sin_cos(); // 0 to 2*PI

            let x = sin_theta * cos_phi;
            let y = sin_theta * sin_phi;
            let z = cos_theta;

            builder.vertex([radius * x, radius * y, radius * z], [x, y, z], [u, v]);
        }
    }

    for lat in 0..lat_segments {
        for lon in 0..lon_segments {
            let current = lat * (lon_segments + 1) + lon;
            let next = current + lon_segments + 1;

            builder.triangle(current, next, current + 1);
            builder.triangle(current + 1, next, next + 1);
        }
    }

    builder.finish()
}

/// Golden-ratio icosahedron, faces counter-clockwise from outside
const ICOSAHEDRON_FACES: [[u32; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

fn icosahedron_vertices() -> Vec<Vec3> {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    [
        [-1.0, t, 0.0],
        [1.0, t, 0.0],
        [-1.0, -t, 0.0],
        [1.0, -t, 0.0],
        [0.0, -1.0, t],
        [0.0, 1.0, t],
        [0.0, -1.0, -t],
        [0.0, 1.0, -t],
        [t, 0.0, -1.0],
        [t, 0.0, 1.0],
        [-t, 0.0, -1.0],
        [-t, 0.0, 1.0],
    ]
    .into_iter()
    .map(|p| Vec3::from(p).normalize())
    .collect()
}

/// Generate an icosphere by repeatedly splitting each face into four
pub fn generate_icosphere(radius: f32, subdivisions: u32) -> InterleavedMesh {
    let mut points = icosahedron_vertices();
    let mut faces = ICOSAHEDRON_FACES.to_vec();

    for _ in 0..subdivisions {
        let mut midpoints: HashMap<(u32, u32), u32> = HashMap::new();
        let mut midpoint = |a: u32, b: u32, points: &mut Vec<Vec3>| -> u32 {
            let key = if a < b { (a, b) } else { (b, a) };
            *midpoints.entry(key).or_insert_with(|| {
                let mid = (points[a as usize] + points[b as usize]).normalize();
                points.push(mid);
                (points.len() - 1) as u32
            })
        };

        let mut next = Vec::with_capacity(faces.len() * 4);
        for [a, b, c] in faces {
            let ab = midpoint(a, b, &mut points);
            let bc = midpoint(b, c, &mut points);
            let ca = midpoint(c, a, &mut points);
            next.push([a, ab, ca]);
            next.push([b, bc, ab]);
            next.push([c, ca, bc]);
            next.push([ab, bc, ca]);
        }
        faces = next;
    }

    let mut builder = PrimitiveBuilder::new();
    for p in &points {
        let u = 0.5 + p.z.atan2(p.x) / (2.0 * PI);
        let v = 0.5 - p.y.clamp(-1.0, 1.0).asin() / PI;
        builder.vertex((*p * radius).to_array(), p.to_array(), [u, v]);
    }
    for [a, b, c] in faces {
        builder.triangle(a, b, c);
    }

    builder.finish()
}
