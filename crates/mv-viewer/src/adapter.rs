//! Seam between viewer state and the host renderer

use glam::Vec3;

use crate::scene::SceneData;

/// Implemented by the host's rendering layer (GPU upload, camera, draw loop).
///
/// The viewer calls these from its single-threaded event handling; the
/// renderer only reads what it was last given.
pub trait RenderAdapter {
    /// Replace the displayed mesh, material and overlay geometry.
    fn present_scene(&mut self, scene: &SceneData);

    /// Show or hide the normal overlay.
    fn set_normals_visible(&mut self, visible: bool);

    /// Set the Euler rotation (radians) of the mesh and its overlay.
    fn set_rotation(&mut self, rotation: Vec3);

    /// The drawing surface changed size.
    fn resize(&mut self, width: u32, height: u32);
}

/// Adapter that draws nothing, for headless use.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAdapter;

impl RenderAdapter for NullAdapter {
    fn present_scene(&mut self, _scene: &SceneData) {}
    fn set_normals_visible(&mut self, _visible: bool) {}
    fn set_rotation(&mut self, _rotation: Vec3) {}
    fn resize(&mut self, _width: u32, _height: u32) {}
}
