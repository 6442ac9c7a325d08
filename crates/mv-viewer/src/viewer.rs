//! Viewer entry point for hosts

use std::path::Path;

use mv_core::{MeshError, MeshProvider, ViewerConfig, default_provider};

use crate::actions::{ActionContext, dispatch_action, select_mesh};
use crate::adapter::RenderAdapter;
use crate::state::{AppAction, AppState};

/// Application state plus the mesh source it loads from.
///
/// The host calls [`Viewer::init`] once, queues actions from its UI events and
/// calls [`Viewer::frame`] from its draw loop.
pub struct Viewer {
    state: AppState,
    provider: Box<dyn MeshProvider>,
}

impl Viewer {
    /// Create a viewer whose mesh source follows `config.mesh.resource_dir`
    pub fn new(config: ViewerConfig) -> Self {
        let provider = default_provider(config.mesh.resource_dir.as_deref().map(Path::new));
        Self::with_provider(config, provider)
    }

    /// Create a viewer with an explicit mesh source
    pub fn with_provider(config: ViewerConfig, provider: Box<dyn MeshProvider>) -> Self {
        Self {
            state: AppState::new(config),
            provider,
        }
    }

    /// Current application state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Queue an action for the next frame
    pub fn queue_action(&mut self, action: AppAction) {
        self.state.queue_action(action);
    }

    /// Load the configured initial mesh and hand it to the renderer
    pub fn init(&mut self, adapter: &mut dyn RenderAdapter) -> Result<(), MeshError> {
        let kind = self.state.selected_mesh;
        tracing::info!(
            "Starting viewer with {} ({})",
            kind,
            self.state.shading.label()
        );
        let mut ctx = ActionContext::new(&mut self.state, self.provider.as_ref(), adapter);
        select_mesh(kind, &mut ctx)
    }

    /// Process queued actions, then advance the rotation by one frame
    pub fn frame(&mut self, adapter: &mut dyn RenderAdapter) {
        let actions = self.state.take_pending_actions();
        {
            let mut ctx = ActionContext::new(&mut self.state, self.provider.as_ref(), adapter);
            for action in actions {
                dispatch_action(action, &mut ctx);
            }
        }

        if let Some(rotation) = self.state.advance_frame() {
            adapter.set_rotation(rotation);
        }
    }
}
