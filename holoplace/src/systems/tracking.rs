use crate::{contexts::TrackingContext, Engine, HoloplaceResult};

/// Tracking system
/// Advances the tracker once per frame, whether or not the hologram has been placed. Without this
/// the camera feed freezes and the camera pose goes stale.
pub fn tracking_system(engine: &mut Engine) -> HoloplaceResult<()> {
    tracking_system_inner(&mut engine.tracking_context)
}

pub(crate) fn tracking_system_inner(tracking_context: &mut TrackingContext) -> HoloplaceResult<()> {
    tracking_context.update_frame()
}
