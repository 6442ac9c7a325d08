//! Face normals and the per-triangle normal overlay

use glam::Vec3;

use super::{MeshError, validate_indices};
use crate::constants::INDEX_STRIDE;

/// A line from a triangle's centroid along its face normal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalSegment {
    pub start: Vec3,
    pub end: Vec3,
}

impl NormalSegment {
    pub fn direction(&self) -> Vec3 {
        self.end - self.start
    }

    pub fn length(&self) -> f32 {
        self.direction().length()
    }
}

/// Arithmetic mean of the three corners
pub fn triangle_centroid(p1: Vec3, p2: Vec3, p3: Vec3) -> Vec3 {
    (p1 + p2 + p3) / 3.0
}

/// Unit face normal `normalize((p3 - p1) x (p2 - p1))`.
///
/// The operand order (second edge crossed with the first) fixes the outward
/// sign for the meshes this viewer loads. Zero-area triangles yield `Vec3::ZERO`.
pub fn face_normal(p1: Vec3, p2: Vec3, p3: Vec3) -> Vec3 {
    let e1 = p2 - p1;
    let e2 = p3 - p1;
    e2.cross(e1).normalize_or_zero()
}

/// Build one overlay segment per triangle, in index order.
///
/// Each segment runs from the centroid to `centroid + normal / scale`.
/// Degenerate triangles produce a zero-length segment.
pub fn build_normal_segments(
    positions: &[[f32; 3]],
    indices: &[u32],
    scale: f32,
) -> Result<Vec<NormalSegment>, MeshError> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(MeshError::InvalidScale(scale));
    }
    validate_indices(indices, positions.len())?;

    if indices.len() % INDEX_STRIDE != 0 {
        tracing::warn!(
            "Index buffer length {} is not a multiple of {}, ignoring trailing indices",
            indices.len(),
            INDEX_STRIDE
        );
    }

    let segments = indices
        .chunks_exact(INDEX_STRIDE)
        .map(|tri| {
            let p1 = Vec3::from(positions[tri[0] as usize]);
            let p2 = Vec3::from(positions[tri[1] as usize]);
            let p3 = Vec3::from(positions[tri[2] as usize]);

            let start = triangle_centroid(p1, p2, p3);
            let end = start + face_normal(p1, p2, p3) / scale;
            NormalSegment { start, end }
        })
        .collect();

    Ok(segments)
}

/// Flatten segments into a 2-point-per-line list for overlay geometry
pub fn segment_line_list(segments: &[NormalSegment]) -> Vec<[f32; 3]> {
    segments
        .iter()
        .flat_map(|s| [s.start.to_array(), s.end.to_array()])
        .collect()
}

/// Calculate one face normal per triangle.
///
/// Indices are assumed valid (see [`validate_indices`]); out-of-range
/// triangles get a zero normal.
pub fn calculate_face_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    indices
        .chunks_exact(INDEX_STRIDE)
        .map(|tri| {
            let corner = |i: u32| positions.get(i as usize).copied().map(Vec3::from);
            match (corner(tri[0]), corner(tri[1]), corner(tri[2])) {
                (Some(p1), Some(p2), Some(p3)) => face_normal(p1, p2, p3).to_array(),
                _ => [0.0; 3],
            }
        })
        .collect()
}
