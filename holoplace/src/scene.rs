use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};
use hecs::{Entity, World};
use log::debug;

use crate::{
    components::{
        light::ShadowSettings, Anchor, CameraBackground, GlobalTransform, Hologram, Hotspot,
        Info, Light, LocalTransform, Material, Mesh, Parent, RenderOrder, ShadowCaster,
        ShadowReceiver, Visible,
    },
    config::{HologramConfig, HoloplaceConfig},
    contexts::{hologram_context::HologramMeshData, tracking_context::BackgroundTexture},
};

/// The entities `compose_scene` creates. None of them are ever despawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneEntities {
    /// The tracked anchor everything else hangs off
    pub anchor: Entity,
    /// Shadow-casting light above the anchor
    pub directional_light: Entity,
    /// Fill light
    pub ambient_light: Entity,
    /// Decal showing where the hologram will land
    pub hotspot: Entity,
    /// Ground plane that shows the hologram's shadow
    pub shadow_plane: Entity,
    /// The camera feed
    pub background: Entity,
}

/// Build the static scene: anchor, lights, hotspot decal, shadow plane and camera background.
/// The hologram itself is added later by [`attach_hologram_mesh`].
pub fn compose_scene(
    world: &mut World,
    config: &HoloplaceConfig,
    background: BackgroundTexture,
) -> SceneEntities {
    let anchor = world.spawn((
        Anchor,
        Info::new("Anchor"),
        LocalTransform::default(),
        GlobalTransform::default(),
    ));

    let lighting = &config.lighting;
    let shadow = ShadowSettings {
        bias: lighting.shadow_bias,
        radius: lighting.shadow_radius,
        map_size: lighting.shadow_map_size,
    };
    let directional_light = world.spawn((
        Light::new_directional(
            lighting.color,
            lighting.directional_intensity,
            Some(anchor),
            Some(shadow),
        ),
        Info::new("Directional Light"),
        LocalTransform::from_translation(lighting.directional_position),
        GlobalTransform::default(),
        Parent(anchor),
    ));
    let ambient_light = world.spawn((
        Light::new_ambient(lighting.color, lighting.ambient_intensity),
        Info::new("Ambient Light"),
        LocalTransform::default(),
        GlobalTransform::default(),
        Parent(anchor),
    ));

    // Flat on the floor, drawn after the shadow plane so the two don't z-fight.
    let flat_on_floor = Quat::from_rotation_x(-FRAC_PI_2);
    let hotspot = world.spawn((
        Hotspot,
        Info::new("Hotspot"),
        Mesh::Plane {
            width: 1.0,
            height: 1.0,
        },
        Material {
            texture_url: Some(config.placement.hotspot_image_url.clone()),
            opacity: 1.0,
            alpha_test: 0.5,
            double_sided: true,
            depth_write: true,
        },
        RenderOrder(1),
        LocalTransform {
            rotation: flat_on_floor,
            scale: Vec3::splat(config.placement.hotspot_scale),
            ..Default::default()
        },
        GlobalTransform::default(),
        Parent(anchor),
        Visible {},
    ));

    let [width, height] = config.shadow_plane.size;
    let shadow_plane = world.spawn((
        ShadowReceiver,
        Info::new("Shadow Plane"),
        Mesh::Plane { width, height },
        Material {
            opacity: config.shadow_plane.opacity,
            depth_write: false,
            ..Default::default()
        },
        LocalTransform {
            rotation: flat_on_floor,
            ..Default::default()
        },
        GlobalTransform::default(),
        Parent(anchor),
        Visible {},
    ));

    let background = world.spawn((
        CameraBackground {
            texture: background,
        },
        Info::new("Camera Background"),
        Visible {},
    ));

    debug!("[HOLOPLACE_SCENE] Scene composed");

    SceneEntities {
        anchor,
        directional_light,
        ambient_light,
        hotspot,
        shadow_plane,
        background,
    }
}

/// Add the hologram's mesh under the anchor. Every piece of it casts shadows.
pub fn attach_hologram_mesh(
    world: &mut World,
    anchor: Entity,
    mesh: &HologramMeshData,
    config: &HologramConfig,
) -> Entity {
    let root = world.spawn((
        Hologram { handle: mesh.root },
        Info::new("Hologram"),
        LocalTransform::from_scale_euler(config.mesh_scale, config.mesh_rotation),
        GlobalTransform::default(),
        Parent(anchor),
        Visible {},
    ));

    for sub_mesh in &mesh.sub_meshes {
        world.spawn((
            Mesh::Hologram(sub_mesh.handle),
            ShadowCaster,
            Info::new(sub_mesh.name.clone()),
            LocalTransform::default(),
            GlobalTransform::default(),
            Parent(root),
            Visible {},
        ));
    }

    debug!(
        "[HOLOPLACE_SCENE] Attached hologram with {} sub-meshes",
        mesh.sub_meshes.len()
    );

    root
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::{
        components::light::LightKind,
        contexts::hologram_context::{HologramMeshHandle, HologramSubMesh},
    };

    #[test]
    pub fn test_compose_scene() {
        let mut world = World::new();
        let config = HoloplaceConfig::default();
        let scene = compose_scene(&mut world, &config, BackgroundTexture(7));

        // Exactly one anchor, no hologram yet.
        assert_eq!(world.query_mut::<&Anchor>().into_iter().count(), 1);
        assert_eq!(world.query_mut::<&Hologram>().into_iter().count(), 0);

        // Everything but the background hangs off the anchor.
        for entity in [
            scene.directional_light,
            scene.ambient_light,
            scene.hotspot,
            scene.shadow_plane,
        ] {
            assert_eq!(world.get::<&Parent>(entity).unwrap().0, scene.anchor);
        }
        assert!(world.get::<&Parent>(scene.background).is_err());
        assert_eq!(
            world
                .get::<&CameraBackground>(scene.background)
                .unwrap()
                .texture,
            BackgroundTexture(7)
        );

        // The directional light sits above the anchor, points at it and casts shadows.
        let light = *world.get::<&Light>(scene.directional_light).unwrap();
        assert!(light.casts_shadow());
        assert_eq!(light.intensity, 0.8);
        match light.kind {
            LightKind::Directional {
                target,
                shadow: Some(shadow),
            } => {
                assert_eq!(target, Some(scene.anchor));
                assert_eq!(shadow.map_size, 1024);
            }
            other => panic!("Expected a shadow casting directional light, got {other:?}"),
        }
        assert_eq!(
            world
                .get::<&LocalTransform>(scene.directional_light)
                .unwrap()
                .translation,
            Vec3::new(0.0, 5.0, 0.0)
        );

        let ambient = *world.get::<&Light>(scene.ambient_light).unwrap();
        assert_eq!(ambient.kind, LightKind::Ambient);
        assert!(!ambient.casts_shadow());
    }

    #[test]
    pub fn test_hotspot_and_shadow_plane() {
        let mut world = World::new();
        let config = HoloplaceConfig::default();
        let scene = compose_scene(&mut world, &config, BackgroundTexture(0));

        {
            let material = world.get::<&Material>(scene.hotspot).unwrap();
            assert_eq!(material.opacity, 1.0);
            assert!(material.double_sided);
            assert_eq!(*world.get::<&RenderOrder>(scene.hotspot).unwrap(), RenderOrder(1));
            let transform = world.get::<&LocalTransform>(scene.hotspot).unwrap();
            assert_eq!(transform.scale, Vec3::splat(2.0));
            // A plane facing +Z ends up facing +Y: flat on the floor.
            assert_relative_eq!(transform.rotation * Vec3::Z, Vec3::Y, epsilon = 1e-6);
        }

        let material = world.get::<&Material>(scene.shadow_plane).unwrap();
        assert_eq!(material.opacity, 0.3);
        assert!(!material.depth_write);
        assert!(world.get::<&ShadowReceiver>(scene.shadow_plane).is_ok());
    }

    #[test]
    pub fn test_attach_hologram_mesh() {
        let mut world = World::new();
        let config = HoloplaceConfig::default();
        let scene = compose_scene(&mut world, &config, BackgroundTexture(0));
        let mesh = HologramMeshData {
            root: HologramMeshHandle(1),
            sub_meshes: vec![
                HologramSubMesh {
                    handle: HologramMeshHandle(2),
                    name: "Body".into(),
                },
                HologramSubMesh {
                    handle: HologramMeshHandle(3),
                    name: "Hair".into(),
                },
            ],
        };

        let root = attach_hologram_mesh(&mut world, scene.anchor, &mesh, &config.hologram);

        assert_eq!(world.get::<&Parent>(root).unwrap().0, scene.anchor);
        let transform = *world.get::<&LocalTransform>(root).unwrap();
        assert_eq!(transform.scale, Vec3::splat(2.0));
        assert_relative_eq!(transform.rotation, Quat::from_rotation_y(-1.6), epsilon = 1e-6);

        let casters = world
            .query_mut::<(&Mesh, &Parent)>()
            .with::<&ShadowCaster>()
            .into_iter()
            .map(|(_, (mesh, parent))| (*mesh, parent.0))
            .collect::<Vec<_>>();
        assert_eq!(casters.len(), 2);
        assert!(casters.iter().all(|(_, parent)| *parent == root));
        assert!(casters.contains(&(Mesh::Hologram(HologramMeshHandle(3)), root)));
    }
}
