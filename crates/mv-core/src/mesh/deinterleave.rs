//! Splitting stride-8 vertex buffers into parallel attribute lists

use crate::constants::VERTEX_STRIDE;
use crate::vertex::records;

/// Controls which attributes are extracted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeinterleaveOptions {
    /// Extract texture coordinates into `Deinterleaved::uvs`
    pub include_uvs: bool,
}

impl Default for DeinterleaveOptions {
    fn default() -> Self {
        Self { include_uvs: true }
    }
}

/// Parallel attribute lists extracted from an interleaved buffer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Deinterleaved {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Option<Vec<[f32; 2]>>,
}

impl Deinterleaved {
    /// Positions as a flat list (3 floats per vertex)
    pub fn flat_positions(&self) -> Vec<f32> {
        self.positions.iter().flatten().copied().collect()
    }

    /// Normals as a flat list (3 floats per vertex)
    pub fn flat_normals(&self) -> Vec<f32> {
        self.normals.iter().flatten().copied().collect()
    }

    /// UVs as a flat list (2 floats per vertex), empty when not extracted
    pub fn flat_uvs(&self) -> Vec<f32> {
        self.uvs
            .iter()
            .flatten()
            .flatten()
            .copied()
            .collect()
    }
}

/// Split a stride-8 buffer into positions, normals and (optionally) UVs.
///
/// A trailing partial vertex is dropped.
pub fn deinterleave(buffer: &[f32], options: &DeinterleaveOptions) -> Deinterleaved {
    let vertex_count = buffer.len() / VERTEX_STRIDE;
    let remainder = buffer.len() % VERTEX_STRIDE;
    if remainder != 0 {
        tracing::warn!(
            "Vertex buffer length {} is not a multiple of {}, dropping {} trailing floats",
            buffer.len(),
            VERTEX_STRIDE,
            remainder
        );
    }

    let mut positions = Vec::with_capacity(vertex_count);
    let mut normals = Vec::with_capacity(vertex_count);
    let mut uvs = options
        .include_uvs
        .then(|| Vec::with_capacity(vertex_count));

    for record in records(buffer) {
        positions.push(record.position);
        normals.push(record.normal);
        if let Some(uvs) = uvs.as_mut() {
            uvs.push(record.uv);
        }
    }

    Deinterleaved {
        positions,
        normals,
        uvs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_vertices() -> Vec<f32> {
        vec![
            0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0,
        ]
    }

    #[test]
    fn test_lengths() {
        let buffer: Vec<f32> = (0..40).map(|i| i as f32).collect();
        let out = deinterleave(&buffer, &DeinterleaveOptions::default());
        assert_eq!(out.flat_positions().len(), 15);
        assert_eq!(out.flat_normals().len(), 15);
        assert_eq!(out.flat_uvs().len(), 10);
    }

    #[test]
    fn test_offsets() {
        let buffer: Vec<f32> = (0..24).map(|i| i as f32).collect();
        let out = deinterleave(&buffer, &DeinterleaveOptions::default());
        for i in 0..3 {
            let base = (i * 8) as f32;
            assert_eq!(out.positions[i], [base, base + 1.0, base + 2.0]);
            assert_eq!(out.normals[i], [base + 3.0, base + 4.0, base + 5.0]);
            assert_eq!(out.uvs.as_ref().unwrap()[i], [base + 6.0, base + 7.0]);
        }
    }

    #[test]
    fn test_triangle_scenario() {
        let out = deinterleave(&three_vertices(), &DeinterleaveOptions::default());
        assert_eq!(
            out.positions,
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]
        );
        assert!(out.normals.iter().all(|n| *n == [0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_uvs_disabled() {
        let out = deinterleave(
            &three_vertices(),
            &DeinterleaveOptions { include_uvs: false },
        );
        assert!(out.uvs.is_none());
        assert!(out.flat_uvs().is_empty());
        assert_eq!(out.positions.len(), 3);
    }

    #[test]
    fn test_partial_vertex_truncated() {
        let mut buffer = three_vertices();
        buffer.extend_from_slice(&[5.0, 5.0, 5.0]);
        let out = deinterleave(&buffer, &DeinterleaveOptions::default());
        assert_eq!(out.positions.len(), 3);
        assert_eq!(out.normals.len(), 3);
    }

    #[test]
    fn test_empty_buffer() {
        let out = deinterleave(&[], &DeinterleaveOptions::default());
        assert!(out.positions.is_empty());
        assert_eq!(out.uvs, Some(Vec::new()));
    }
}
