//! Mesh Viewer
//!
//! Viewer state and scene preparation for displaying a triangle mesh with
//! selectable shading, a normal overlay and continuous rotation.
//!
//! # Architecture
//!
//! - [`state::AppState`] - Selection, shading and rotation state
//! - [`actions::dispatch_action`] - Applies queued UI actions
//! - [`scene::SceneData`] - GPU-ready vertices, material and overlay lines
//! - [`adapter::RenderAdapter`] - Implemented by the host renderer
//! - [`viewer::Viewer`] - Ties state and mesh source together for the host loop
//!
//! ```text
//! mv-viewer/
//! ├── actions.rs   # Action dispatch
//! ├── adapter.rs   # Renderer seam
//! ├── scene.rs     # Scene preparation per shading mode
//! ├── state.rs     # Application state
//! ├── vertex.rs    # Vertex formats and layouts
//! └── viewer.rs    # Host entry point
//! ```

pub mod actions;
pub mod adapter;
pub mod scene;
pub mod state;
pub mod vertex;
pub mod viewer;

#[cfg(test)]
mod testing;

pub use actions::{ActionContext, dispatch_action};
pub use adapter::{NullAdapter, RenderAdapter};
pub use scene::{CameraSetup, LightSetup, Material, SceneData};
pub use state::{AppAction, AppState};
pub use vertex::{LineVertex, MeshVertex};
pub use viewer::Viewer;
