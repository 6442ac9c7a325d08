//! Application state

use glam::Vec3;
use mv_core::{MeshBuffers, MeshKind, ShadingMode, ViewerConfig};

use crate::scene::SceneData;

/// Actions that can be performed on the app state
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Load and display a catalog mesh
    SelectMesh(MeshKind),
    /// Change the shading mode of the current mesh
    SetShading(ShadingMode),
    /// Show or hide the normal overlay
    ShowNormals(bool),
    /// Start or stop continuous rotation
    SetRotationEnabled(bool),
    /// Display a mesh descriptor supplied as raw JSON bytes
    LoadMeshBytes {
        /// Display name for the mesh
        name: String,
        /// JSON descriptor contents
        data: Vec<u8>,
    },
    /// The drawing surface changed size
    Resize {
        /// New width in pixels
        width: u32,
        /// New height in pixels
        height: u32,
    },
}

/// Application state
///
/// Owns the selection and the buffers derived from it. The renderer only
/// sees what is pushed through [`crate::RenderAdapter`].
#[derive(Debug, Clone)]
pub struct AppState {
    /// Viewer configuration
    pub config: ViewerConfig,
    /// Catalog entry last selected
    pub selected_mesh: MeshKind,
    /// Current shading mode
    pub shading: ShadingMode,
    /// Whether the normal overlay is visible
    pub show_normals: bool,
    /// Whether the mesh rotates every frame
    pub rotation_enabled: bool,
    /// Current Euler rotation of the mesh and overlay, in radians
    pub rotation: Vec3,
    /// Name of the displayed mesh
    pub mesh_name: Option<String>,
    /// De-interleaved buffers of the displayed mesh
    pub buffers: Option<MeshBuffers>,
    /// Prepared scene for the displayed mesh
    pub scene: Option<SceneData>,
    /// Pending actions
    pending_actions: Vec<AppAction>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

impl AppState {
    /// Create a new app state from a configuration
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            selected_mesh: config.mesh.initial_mesh,
            shading: config.mesh.initial_shading,
            show_normals: false,
            rotation_enabled: config.rotation.enabled,
            rotation: Vec3::ZERO,
            mesh_name: None,
            buffers: None,
            scene: None,
            pending_actions: Vec::new(),
            config,
        }
    }

    /// Queue an action
    pub fn queue_action(&mut self, action: AppAction) {
        self.pending_actions.push(action);
    }

    /// Take pending actions
    pub fn take_pending_actions(&mut self) -> Vec<AppAction> {
        std::mem::take(&mut self.pending_actions)
    }

    /// Install freshly built buffers and scene.
    ///
    /// The overlay is hidden and the rotation restarts from zero.
    pub fn replace_mesh(&mut self, name: String, buffers: MeshBuffers, scene: SceneData) {
        self.mesh_name = Some(name);
        self.buffers = Some(buffers);
        self.scene = Some(scene);
        self.show_normals = false;
        self.rotation = Vec3::ZERO;
    }

    /// Advance the rotation by one frame.
    ///
    /// Returns the new rotation when it changed.
    pub fn advance_frame(&mut self) -> Option<Vec3> {
        if !self.rotation_enabled || self.scene.is_none() {
            return None;
        }
        self.rotation += Vec3::splat(self.config.rotation.step);
        Some(self.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mv_core::{DeinterleaveOptions, primitive};

    fn state_with_scene() -> AppState {
        let mut state = AppState::default();
        let buffers = MeshBuffers::from_interleaved(
            &primitive::generate_cube(1.0),
            &DeinterleaveOptions::default(),
        )
        .unwrap();
        let scene = SceneData::build("Cube", &buffers, state.shading, &state.config).unwrap();
        state.replace_mesh("Cube".into(), buffers, scene);
        state
    }

    #[test]
    fn test_initial_state_follows_config() {
        let mut config = ViewerConfig::default();
        config.rotation.enabled = false;
        config.mesh.initial_mesh = MeshKind::Torus;
        config.mesh.initial_shading = ShadingMode::Smooth;

        let state = AppState::new(config);
        assert_eq!(state.selected_mesh, MeshKind::Torus);
        assert_eq!(state.shading, ShadingMode::Smooth);
        assert!(!state.rotation_enabled);
        assert!(!state.show_normals);
        assert!(state.scene.is_none());
    }

    #[test]
    fn test_action_queue() {
        let mut state = AppState::default();
        state.queue_action(AppAction::ShowNormals(true));
        state.queue_action(AppAction::SelectMesh(MeshKind::Cube));
        let actions = state.take_pending_actions();
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0], AppAction::ShowNormals(true));
        assert!(state.take_pending_actions().is_empty());
    }

    #[test]
    fn test_advance_frame_without_scene() {
        let mut state = AppState::default();
        assert_eq!(state.advance_frame(), None);
    }

    #[test]
    fn test_advance_frame_rotates_all_axes() {
        let mut state = state_with_scene();
        let step = state.config.rotation.step;
        state.advance_frame();
        let rotation = state.advance_frame().unwrap();
        assert_eq!(rotation, Vec3::splat(step) + Vec3::splat(step));
    }

    #[test]
    fn test_advance_frame_disabled() {
        let mut state = state_with_scene();
        state.rotation_enabled = false;
        assert_eq!(state.advance_frame(), None);
        assert_eq!(state.rotation, Vec3::ZERO);
    }

    #[test]
    fn test_replace_mesh_resets_overlay_and_rotation() {
        let mut state = state_with_scene();
        state.show_normals = true;
        state.advance_frame();

        let buffers = state.buffers.clone().unwrap();
        let scene = state.scene.clone().unwrap();
        state.replace_mesh("Again".into(), buffers, scene);

        assert!(!state.show_normals);
        assert_eq!(state.rotation, Vec3::ZERO);
        assert_eq!(state.mesh_name.as_deref(), Some("Again"));
    }
}
