//! Mesh Viewer Core
//!
//! This crate contains the geometry side of the mesh viewer:
//! - VertexRecord: the stride-8 interleaved vertex layout
//! - Mesh buffers: de-interleaving and index validation
//! - Normal overlay: per-triangle centroid to face-normal segments
//! - Catalog: built-in primitives and JSON resources
//! - Config: viewer settings persisted as RON

pub mod catalog;
pub mod config;
pub mod constants;
pub mod mesh;
pub mod primitive;
pub mod vertex;

pub use catalog::*;
pub use config::*;
pub use constants::*;
pub use mesh::*;
pub use vertex::*;
