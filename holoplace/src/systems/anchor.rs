use glam::Vec3;
use hecs::{Entity, World};

use crate::{
    components::LocalTransform, contexts::TrackingContext, placement::PlacementController,
    Engine, HoloplaceResult,
};

/// Anchor system
/// While the hologram is unplaced, asks the tracker for an anchor pose at a fixed offset from the
/// camera and writes it to the anchor. Once placed, the anchor is left exactly where it was.
pub fn anchor_system(engine: &mut Engine) -> HoloplaceResult<()> {
    anchor_system_inner(
        &mut engine.world,
        &mut engine.tracking_context,
        &engine.placement,
        engine.scene.anchor,
        engine.config.placement.anchor_offset,
    )
}

pub(crate) fn anchor_system_inner(
    world: &mut World,
    tracking_context: &mut TrackingContext,
    placement: &PlacementController,
    anchor: Entity,
    offset: Vec3,
) -> HoloplaceResult<()> {
    if placement.is_placed() {
        return Ok(());
    }

    let pose = tracking_context.anchor_pose_from_camera_offset(offset)?;
    let mut transform = world
        .get::<&mut LocalTransform>(anchor)
        .map_err(|e| anyhow::anyhow!("Anchor has no transform: {e}"))?;
    transform.update_from_affine(&pose);

    Ok(())
}
