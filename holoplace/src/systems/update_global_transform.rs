use hecs::World;

use crate::components::{GlobalTransform, LocalTransform, Parent};

/// Update global transform system
/// Walks through each entity that has a `LocalTransform` and works out where it is in the world,
/// following `Parent` links up to the root of the hierarchy (usually the anchor).
///
/// Only runs as part of rendering, so transforms are always current when drawn.
pub(crate) fn update_global_transform_system(world: &mut World) {
    // Views give cheap random access while we walk up the hierarchy.
    let mut parents = world.query::<&Parent>();
    let parents = parents.view();
    let mut locals = world.query::<&LocalTransform>();
    let locals = locals.view();

    for (entity, global_transform) in world.query::<&mut GlobalTransform>().iter() {
        let Some(local) = locals.get(entity) else {
            continue;
        };

        let mut global_from_local = local.to_affine();
        let mut ancestor = parents.get(entity).map(|p| p.0);
        while let Some(next) = ancestor {
            let Some(ancestor_local) = locals.get(next) else {
                break;
            };
            global_from_local = ancestor_local.to_affine() * global_from_local;
            ancestor = parents.get(next).map(|p| p.0);
        }

        global_transform.0 = global_from_local;
    }
}
