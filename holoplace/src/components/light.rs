use glam::Vec3;
use hecs::Entity;

/// What sort of light this is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    /// Light travelling from the entity's position towards a target, like the sun
    Directional {
        /// The entity the light points at. `None` points straight down the light's -Z.
        target: Option<Entity>,
        /// Shadow settings, if this light casts shadows
        shadow: Option<ShadowSettings>,
    },
    /// Even light from every direction
    Ambient,
}

/// How a light renders its shadow map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowSettings {
    /// Depth bias, to avoid shadow acne
    pub bias: f32,
    /// Blur radius of the soft shadow filter
    pub radius: f32,
    /// Width and height of the shadow map in texels
    pub map_size: u32,
}

/// A light in the scene. Its position comes from the entity's transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// Directional or ambient
    pub kind: LightKind,
    /// RGB value for the color of the light in linear space.
    pub color: Vec3,
    /// Brightness of the light
    pub intensity: f32,
}

impl Light {
    /// Create a new directional light
    pub fn new_directional(
        color: Vec3,
        intensity: f32,
        target: Option<Entity>,
        shadow: Option<ShadowSettings>,
    ) -> Self {
        Self {
            kind: LightKind::Directional { target, shadow },
            color,
            intensity,
        }
    }

    /// Create a new ambient light
    pub fn new_ambient(color: Vec3, intensity: f32) -> Self {
        Self {
            kind: LightKind::Ambient,
            color,
            intensity,
        }
    }

    /// Does this light cast shadows?
    pub fn casts_shadow(&self) -> bool {
        matches!(
            self.kind,
            LightKind::Directional {
                shadow: Some(_),
                ..
            }
        )
    }
}
