use log::{info, warn};

use crate::{
    contexts::{TrackingContext, UiContext},
    HoloplaceError, HoloplaceResult,
};

/// Where the session is up to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Waiting on the user to tap through the consent screen
    #[default]
    Splash,
    /// Camera is running and the frame loop is live
    Running,
    /// Startup was refused. Nothing more will happen this session.
    Halted,
}

/// Bail out early if the tracker can't run here, telling the user why.
pub fn run_compatibility_check(
    tracking_context: &TrackingContext,
    ui_context: &mut UiContext,
) -> HoloplaceResult<()> {
    if tracking_context.is_supported() {
        return Ok(());
    }

    warn!("[HOLOPLACE_GATE] Environment is not supported, stopping here");
    ui_context.surface().show_browser_incompatible();
    Err(HoloplaceError::UnsupportedEnvironment)
}

/// The user tapped through the consent screen: ask for the camera and, if we get it, start.
pub fn handle_start_tapped(
    app_state: &mut AppState,
    tracking_context: &mut TrackingContext,
    ui_context: &mut UiContext,
    place_label: &str,
) -> HoloplaceResult<()> {
    if *app_state != AppState::Splash {
        return Ok(());
    }

    if !ui_context.surface().request_camera_permission() {
        warn!("[HOLOPLACE_GATE] Camera permission denied");
        ui_context.surface().show_permission_denied();
        *app_state = AppState::Halted;
        return Err(HoloplaceError::PermissionDenied);
    }

    ui_context.surface().destroy_splash();
    tracking_context.start()?;
    ui_context.set_place_button_label(place_label);
    ui_context.set_place_button_visible(true);
    *app_state = AppState::Running;
    info!("[HOLOPLACE_GATE] Permission granted, frame loop starting");

    Ok(())
}
