use hecs::{Entity, World};

use crate::{
    components::Material,
    contexts::{HologramContext, UiContext},
    placement::{Audio, PlacementController, PlacementEffects, Playback},
    Engine,
};

/// Placement system
/// Called when the place / pick up button is tapped. Flips the placement state and applies the
/// result to the hologram, the hotspot decal and the button.
pub fn placement_system(engine: &mut Engine) -> PlacementEffects {
    placement_system_inner(
        &mut engine.world,
        &mut engine.placement,
        &mut engine.hologram_context,
        &mut engine.ui_context,
        engine.scene.hotspot,
    )
}

pub(crate) fn placement_system_inner(
    world: &mut World,
    placement: &mut PlacementController,
    hologram_context: &mut HologramContext,
    ui_context: &mut UiContext,
    hotspot: Entity,
) -> PlacementEffects {
    let effects = placement.toggle();

    let player = hologram_context.player();
    match effects.playback {
        Playback::Play => player.play_hologram(true),
        Playback::Pause => player.pause_hologram(),
    }
    match effects.audio {
        Audio::Unmuted => player.unmute(),
        Audio::Muted => player.mute(),
    }

    if let Ok(mut material) = world.get::<&mut Material>(hotspot) {
        material.opacity = effects.hotspot_opacity;
    }
    ui_context.set_place_button_label(&effects.label);

    effects
}
