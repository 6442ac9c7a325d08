//! Named stride-8 vertex record

use serde::{Deserialize, Serialize};

use crate::constants::VERTEX_STRIDE;

/// One vertex of an interleaved mesh buffer.
///
/// The record maps onto eight consecutive floats in the order
/// `x, y, z, nx, ny, nz, u, v`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VertexRecord {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl VertexRecord {
    /// Offset of the position within a record
    pub const POSITION_OFFSET: usize = 0;
    /// Offset of the normal within a record
    pub const NORMAL_OFFSET: usize = 3;
    /// Offset of the texture coordinate within a record
    pub const UV_OFFSET: usize = 6;

    pub fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }

    /// Read a record from the start of `data`, `None` if fewer than 8 floats remain
    pub fn from_slice(data: &[f32]) -> Option<Self> {
        let record = data.get(..VERTEX_STRIDE)?;
        let p = Self::POSITION_OFFSET;
        let n = Self::NORMAL_OFFSET;
        let t = Self::UV_OFFSET;
        Some(Self {
            position: [record[p], record[p + 1], record[p + 2]],
            normal: [record[n], record[n + 1], record[n + 2]],
            uv: [record[t], record[t + 1]],
        })
    }

    /// Append this record to an interleaved buffer
    pub fn write_to(&self, out: &mut Vec<f32>) {
        out.extend_from_slice(&self.position);
        out.extend_from_slice(&self.normal);
        out.extend_from_slice(&self.uv);
    }
}

/// Iterate over the complete records of an interleaved buffer
pub fn records(buffer: &[f32]) -> impl Iterator<Item = VertexRecord> + '_ {
    buffer
        .chunks_exact(VERTEX_STRIDE)
        .filter_map(VertexRecord::from_slice)
}

/// Pack records into a flat stride-8 buffer
pub fn interleave(records: &[VertexRecord]) -> Vec<f32> {
    let mut out = Vec::with_capacity(records.len() * VERTEX_STRIDE);
    for record in records {
        record.write_to(&mut out);
    }
    out
}
