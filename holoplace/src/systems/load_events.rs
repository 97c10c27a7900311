use hecs::{Entity, World};
use log::{info, trace};

use crate::{
    config::HologramConfig,
    contexts::{hologram_context::HologramEvent, HologramContext},
    scene::attach_hologram_mesh,
    Engine, HoloplaceError, HoloplaceResult,
};

/// Load events system
/// Applies whatever the hologram player has reported since the last frame:
/// - **Created**: the mesh goes into the scene under the anchor and playback is paused. It starts
///   when the user places the hologram.
/// - **Progress**: recorded, nothing else
/// - **Playable**: audio is muted and the hologram may now be advanced. If this turns up before
///   Created it waits for Created to be applied first.
pub fn load_events_system(engine: &mut Engine) -> HoloplaceResult<()> {
    load_events_system_inner(
        &mut engine.world,
        &mut engine.hologram_context,
        engine.scene.anchor,
        &engine.config.hologram,
    )
}

pub(crate) fn load_events_system_inner(
    world: &mut World,
    hologram_context: &mut HologramContext,
    anchor: Entity,
    config: &HologramConfig,
) -> HoloplaceResult<()> {
    for event in hologram_context.drain_events() {
        match event {
            HologramEvent::Created => {
                if !hologram_context.load_state().mesh_ready() {
                    let mesh = hologram_context
                        .mesh()
                        .ok_or(HoloplaceError::HologramMeshMissing)?;
                    attach_hologram_mesh(world, anchor, &mesh, config);
                    hologram_context.player().pause_hologram();
                    info!("[HOLOPLACE_HOLOGRAM] Hologram created");
                }
                if hologram_context.mark_mesh_ready() && hologram_context.has_pending_playable() {
                    make_playable(hologram_context);
                }
            }
            HologramEvent::Progress(progress) => {
                hologram_context.record_progress(progress);
                trace!(
                    "[HOLOPLACE_HOLOGRAM] Loading.. {:.0}%",
                    hologram_context.load_state().progress() * 100.
                );
            }
            HologramEvent::Playable => make_playable(hologram_context),
        }
    }

    Ok(())
}

fn make_playable(hologram_context: &mut HologramContext) {
    if hologram_context.mark_playable() {
        hologram_context.player().mute();
        info!("[HOLOPLACE_HOLOGRAM] Hologram is playable");
    }
}
