use crate::{
    contexts::{HologramContext, UiContext},
    Engine,
};

/// Loading indicator system
/// Shows the loading indicator for exactly as long as the hologram isn't playable.
pub fn loading_indicator_system(engine: &mut Engine) {
    loading_indicator_system_inner(&engine.hologram_context, &mut engine.ui_context)
}

pub(crate) fn loading_indicator_system_inner(
    hologram_context: &HologramContext,
    ui_context: &mut UiContext,
) {
    ui_context.set_loading_indicator_visible(!hologram_context.is_playable());
}
