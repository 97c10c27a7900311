use crate::{contexts::HologramContext, Engine};

/// Hologram playback system
/// Advances the hologram by one tick. Until the player has reported Playable there are no decoded
/// frames to advance to, so nothing is called.
pub fn hologram_playback_system(engine: &mut Engine) {
    hologram_playback_system_inner(&mut engine.hologram_context);
}

pub(crate) fn hologram_playback_system_inner(hologram_context: &mut HologramContext) {
    hologram_context.update_hologram();
}
