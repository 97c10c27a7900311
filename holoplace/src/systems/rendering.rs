use hecs::World;

use super::update_global_transform::update_global_transform_system;
use crate::{
    contexts::{RenderContext, TrackingContext},
    Engine, HoloplaceResult,
};

/// Rendering system
/// Resolves every entity's global transform, then draws the world from the tracked camera.
pub fn rendering_system(engine: &mut Engine) -> HoloplaceResult<()> {
    rendering_system_inner(
        &mut engine.world,
        &engine.tracking_context,
        &mut engine.render_context,
    )
}

pub(crate) fn rendering_system_inner(
    world: &mut World,
    tracking_context: &TrackingContext,
    render_context: &mut RenderContext,
) -> HoloplaceResult<()> {
    update_global_transform_system(world);
    let camera = tracking_context.camera();
    render_context.render(world, &camera)
}

#[cfg(test)]
mod tests {
    use glam::{Affine3A, Vec3};

    use super::*;
    use crate::{
        components::{GlobalTransform, LocalTransform, Parent},
        testing::{Call, CallLog, FakeRenderer, FakeTracking},
    };

    #[test]
    pub fn test_transforms_are_current_before_draw() {
        let log = CallLog::default();
        let renderer = FakeRenderer::new(log.clone());
        let mut render_context = RenderContext::new(Box::new(renderer.clone()));
        let tracking_context = TrackingContext::new(Box::new(FakeTracking::new(log.clone())));

        let mut world = World::new();
        let anchor = world.spawn((
            LocalTransform::from_translation(Vec3::new(0.0, -1.5, -6.0)),
            GlobalTransform::default(),
        ));
        let child = world.spawn((
            LocalTransform::from_translation(Vec3::Y),
            GlobalTransform::default(),
            Parent(anchor),
        ));

        rendering_system_inner(&mut world, &tracking_context, &mut render_context).unwrap();

        assert_eq!(
            world.get::<&GlobalTransform>(child).unwrap().0,
            Affine3A::from_translation(Vec3::new(0.0, -0.5, -6.0))
        );
        assert_eq!(log.count(|c| matches!(c, Call::Render { .. })), 1);
        assert_eq!(render_context.frames_rendered(), 1);
    }

    #[test]
    pub fn test_render_failure_propagates() {
        let log = CallLog::default();
        let renderer = FakeRenderer::new(log.clone());
        renderer.fail_next_render();
        let mut render_context = RenderContext::new(Box::new(renderer));
        let tracking_context = TrackingContext::new(Box::new(FakeTracking::new(log)));

        let mut world = World::new();
        assert!(rendering_system_inner(&mut world, &tracking_context, &mut render_context).is_err());
        assert_eq!(render_context.frames_rendered(), 0);
    }
}
