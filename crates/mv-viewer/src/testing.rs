//! Test doubles

use glam::Vec3;

use crate::adapter::RenderAdapter;
use crate::scene::SceneData;

/// Records every call made by the viewer
#[derive(Debug, Default)]
pub struct RecordingAdapter {
    pub scenes: Vec<SceneData>,
    pub normals_visible: Option<bool>,
    pub rotation: Option<Vec3>,
    pub size: Option<(u32, u32)>,
}

impl RenderAdapter for RecordingAdapter {
    fn present_scene(&mut self, scene: &SceneData) {
        self.scenes.push(scene.clone());
    }

    fn set_normals_visible(&mut self, visible: bool) {
        self.normals_visible = Some(visible);
    }

    fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = Some(rotation);
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.size = Some((width, height));
    }
}
