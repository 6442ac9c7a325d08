//! Global constants for mv-core

/// Number of floats per interleaved vertex (x, y, z, nx, ny, nz, u, v)
pub const VERTEX_STRIDE: usize = 8;

/// Number of indices per triangle
pub const INDEX_STRIDE: usize = 3;

/// Default divisor for normal overlay segments (segment length is `1 / scale`)
pub const DEFAULT_NORMAL_SCALE: f32 = 12.0;

/// Default rotation added to each Euler angle per frame, in radians
pub const DEFAULT_ROTATION_STEP: f32 = 0.005;

/// Default number of segments around cylinders, cones and tori
pub const RADIAL_SEGMENTS: u32 = 32;

/// Smallest segment count around a closed ring; lower counts are raised to it
pub const MIN_RING_SEGMENTS: u32 = 3;

/// Smallest latitude band count for UV spheres
pub const MIN_LAT_SEGMENTS: u32 = 2;

/// Default number of latitude segments for UV spheres
pub const SPHERE_LAT_SEGMENTS: u32 = 16;

/// Default number of longitude segments for UV spheres
pub const SPHERE_LON_SEGMENTS: u32 = 32;

/// Default subdivision level for icospheres
pub const ICOSPHERE_SUBDIVISIONS: u32 = 2;

/// Default number of segments around the tube of a torus
pub const TORUS_TUBE_SEGMENTS: u32 = 16;
