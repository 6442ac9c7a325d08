//! Action handling
//!
//! Actions are queued in [`AppState`] and processed once per frame. Each
//! handler runs to completion; a failure is logged and the previous scene
//! stays on screen.

use mv_core::{MeshBuffers, MeshDescriptor, MeshError, MeshKind, MeshProvider, ShadingMode};

use crate::adapter::RenderAdapter;
use crate::scene::SceneData;
use crate::state::{AppAction, AppState};

/// Context for action handlers
pub struct ActionContext<'a> {
    /// Application state being updated
    pub state: &'a mut AppState,
    /// Where catalog meshes come from
    pub provider: &'a dyn MeshProvider,
    /// Host renderer
    pub adapter: &'a mut dyn RenderAdapter,
}

impl<'a> ActionContext<'a> {
    /// Bundle the pieces an action handler needs
    pub fn new(
        state: &'a mut AppState,
        provider: &'a dyn MeshProvider,
        adapter: &'a mut dyn RenderAdapter,
    ) -> Self {
        Self {
            state,
            provider,
            adapter,
        }
    }
}

/// Dispatch an action to the appropriate handler
pub fn dispatch_action(action: AppAction, ctx: &mut ActionContext) {
    match action {
        AppAction::SelectMesh(kind) => {
            if let Err(e) = select_mesh(kind, ctx) {
                tracing::error!("Failed to load {}: {}", kind, e);
            }
        }
        AppAction::SetShading(shading) => {
            if let Err(e) = set_shading(shading, ctx) {
                tracing::error!("Failed to switch to {}: {}", shading.label(), e);
            }
        }
        AppAction::LoadMeshBytes { name, data } => {
            if let Err(e) = load_mesh_bytes(&name, &data, ctx) {
                tracing::error!("Failed to load mesh '{}': {}", name, e);
            }
        }
        AppAction::ShowNormals(visible) => {
            if ctx.state.scene.is_none() {
                tracing::warn!("No mesh loaded, ignoring normal overlay toggle");
                return;
            }
            ctx.state.show_normals = visible;
            ctx.adapter.set_normals_visible(visible);
        }
        AppAction::SetRotationEnabled(enabled) => {
            ctx.state.rotation_enabled = enabled;
        }
        AppAction::Resize { width, height } => {
            ctx.adapter.resize(width, height);
        }
    }
}

/// Fetch a catalog mesh and display it with the current shading
pub fn select_mesh(kind: MeshKind, ctx: &mut ActionContext) -> Result<(), MeshError> {
    let mesh = ctx.provider.fetch(kind)?;
    let options = ctx.state.config.mesh.deinterleave_options();
    let buffers = MeshBuffers::from_interleaved(&mesh, &options)?;
    tracing::info!(
        "Loaded {} ({} vertices, {} triangles)",
        kind,
        buffers.vertex_count(),
        buffers.triangle_count()
    );

    show_buffers(kind.label().to_string(), buffers, ctx.state.shading, ctx)?;
    ctx.state.selected_mesh = kind;
    Ok(())
}

/// Rebuild the current mesh for a new shading mode
pub fn set_shading(shading: ShadingMode, ctx: &mut ActionContext) -> Result<(), MeshError> {
    let (Some(name), Some(buffers)) = (ctx.state.mesh_name.clone(), ctx.state.buffers.clone())
    else {
        // Nothing displayed yet: remember the mode for the next load
        ctx.state.shading = shading;
        return Ok(());
    };

    show_buffers(name, buffers, shading, ctx)
}

/// Parse a JSON descriptor and display its first mesh
pub fn load_mesh_bytes(name: &str, data: &[u8], ctx: &mut ActionContext) -> Result<(), MeshError> {
    let mesh = MeshDescriptor::from_bytes(data)?.first_mesh()?;
    let options = ctx.state.config.mesh.deinterleave_options();
    let buffers = MeshBuffers::from_interleaved(&mesh, &options)?;
    tracing::info!(
        "Loaded mesh '{}' from bytes ({} vertices, {} triangles)",
        name,
        buffers.vertex_count(),
        buffers.triangle_count()
    );

    show_buffers(name.to_string(), buffers, ctx.state.shading, ctx)
}

/// Build a scene, then swap it in and push it to the renderer
fn show_buffers(
    name: String,
    buffers: MeshBuffers,
    shading: ShadingMode,
    ctx: &mut ActionContext,
) -> Result<(), MeshError> {
    let scene = SceneData::build(name.clone(), &buffers, shading, &ctx.state.config)?;

    ctx.state.shading = shading;
    ctx.state.replace_mesh(name, buffers, scene);

    if let Some(scene) = &ctx.state.scene {
        ctx.adapter.present_scene(scene);
    }
    ctx.adapter.set_rotation(ctx.state.rotation);
    ctx.adapter.set_normals_visible(false);
    Ok(())
}
