use std::path::Path;

use glam::Vec3;
use serde::Deserialize;

use crate::{contexts::hologram_context::LoopMode, HoloplaceError, HoloplaceResult};

/// Everything that changes between deployments of the same experience.
///
/// Every field has a default matching the reference deployment, so a config file only needs to
/// name what it changes:
///
/// ```
/// use holoplace::HoloplaceConfig;
/// let config = HoloplaceConfig::from_json(r#"{ "placement": { "anchor_offset": [0, -1, -4] } }"#).unwrap();
/// assert_eq!(config.placement.anchor_offset.z, -4.0);
/// assert_eq!(config.hologram.mesh_scale, 2.0);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct HoloplaceConfig {
    /// The hologram asset and how it sits on the anchor
    pub hologram: HologramConfig,
    /// Placement offsets and button labels
    pub placement: PlacementConfig,
    /// The consent screen
    pub splash: SplashOptions,
    /// Scene lighting
    pub lighting: LightingConfig,
    /// The ground plane that receives the hologram's shadow
    pub shadow_plane: ShadowPlaneConfig,
    /// Renderer and display settings
    pub renderer: RendererConfig,
}

/// Hologram asset settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HologramConfig {
    /// URL of the `.sxrweb` hologram file
    pub url: String,
    /// Use this texture instead of the one named in the hologram file
    pub texture_override_url: Option<String>,
    /// How playback repeats
    pub loop_mode: LoopMode,
    /// Uniform scale applied to the hologram mesh
    pub mesh_scale: f32,
    /// Euler rotation (XYZ, radians) applied to the hologram mesh
    pub mesh_rotation: Vec3,
    /// Quality level handed to the player once it is created, if any
    pub quality: Option<u32>,
}

impl Default for HologramConfig {
    fn default() -> Self {
        Self {
            url: "https://stream.senseofspace.io/demos/mov-01/hologram.sxrweb".to_string(),
            texture_override_url: None,
            loop_mode: LoopMode::Loop,
            mesh_scale: 2.0,
            mesh_rotation: Vec3::new(0.0, -1.6, 0.0),
            quality: None,
        }
    }
}

/// Placement settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Where the anchor sits relative to the camera while the hologram is unplaced
    pub anchor_offset: Vec3,
    /// Button label while unplaced
    pub place_label: String,
    /// Button label while placed
    pub pick_up_label: String,
    /// Uniform scale of the placement hotspot decal
    pub hotspot_scale: f32,
    /// Image shown on the hotspot decal
    pub hotspot_image_url: String,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            anchor_offset: Vec3::new(0.0, -1.5, -6.0),
            place_label: "Tap to place".to_string(),
            pick_up_label: "Tap to pick up".to_string(),
            hotspot_scale: 2.0,
            hotspot_image_url: "assets/hotspot.png".to_string(),
        }
    }
}

/// What the consent screen shows.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SplashOptions {
    /// Headline
    pub title: String,
    /// Second line, may contain markup understood by the UI surface
    pub subtitle: String,
    /// Text of the button that starts the experience
    pub button_text: String,
    /// Logo image
    pub logo_url: String,
}

impl Default for SplashOptions {
    fn default() -> Self {
        Self {
            title: "AR Volumetric Video".to_string(),
            subtitle: "Presented by:</br>Zappar & Sense of Space".to_string(),
            button_text: "Tap to Start".to_string(),
            logo_url: "assets/logo.png".to_string(),
        }
    }
}

/// Scene lighting.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    /// Linear RGB colour shared by both lights
    pub color: Vec3,
    /// Intensity of the shadow-casting light above the anchor
    pub directional_intensity: f32,
    /// Position of the directional light relative to the anchor
    pub directional_position: Vec3,
    /// Shadow depth bias
    pub shadow_bias: f32,
    /// Shadow blur radius
    pub shadow_radius: f32,
    /// Shadow map resolution (square)
    pub shadow_map_size: u32,
    /// Intensity of the ambient fill light
    pub ambient_intensity: f32,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            directional_intensity: 0.8,
            directional_position: Vec3::new(0.0, 5.0, 0.0),
            shadow_bias: 0.001,
            shadow_radius: 2.0,
            shadow_map_size: 1024,
            ambient_intensity: 0.2,
        }
    }
}

/// Shadow plane settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShadowPlaneConfig {
    /// How dark the received shadow is, 0 to 1
    pub opacity: f32,
    /// Width and height of the plane
    pub size: [f32; 2],
}

impl Default for ShadowPlaneConfig {
    fn default() -> Self {
        Self {
            opacity: 0.3,
            size: [1920.0, 1080.0],
        }
    }
}

/// Renderer settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Upper bound on the device pixel ratio handed to the renderer
    pub max_pixel_ratio: f32,
    /// Refresh rate the driver paces the frame loop at
    pub target_frame_rate: u32,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            max_pixel_ratio: 2.0,
            target_frame_rate: 60,
        }
    }
}

impl RendererConfig {
    /// The pixel ratio to render at on a display with `device_pixel_ratio`
    pub fn pixel_ratio(&self, device_pixel_ratio: f32) -> f32 {
        device_pixel_ratio.min(self.max_pixel_ratio)
    }
}

impl HoloplaceConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> HoloplaceResult<Self> {
        let config: HoloplaceConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> HoloplaceResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check the values serde can't check for us
    pub fn validate(&self) -> HoloplaceResult<()> {
        let invalid = |message: &str| Err(HoloplaceError::InvalidConfig(message.to_string()));

        if !self.placement.anchor_offset.is_finite() {
            return invalid("placement.anchor_offset must be finite");
        }
        if !self.hologram.mesh_rotation.is_finite() {
            return invalid("hologram.mesh_rotation must be finite");
        }
        if !(self.hologram.mesh_scale.is_finite() && self.hologram.mesh_scale > 0.0) {
            return invalid("hologram.mesh_scale must be greater than zero");
        }
        if !(self.placement.hotspot_scale.is_finite() && self.placement.hotspot_scale > 0.0) {
            return invalid("placement.hotspot_scale must be greater than zero");
        }
        if !(0.0..=1.0).contains(&self.shadow_plane.opacity) {
            return invalid("shadow_plane.opacity must be between 0 and 1");
        }
        if !self
            .shadow_plane
            .size
            .iter()
            .all(|side| side.is_finite() && *side > 0.0)
        {
            return invalid("shadow_plane.size must be greater than zero");
        }
        let lighting = &self.lighting;
        if !(lighting.directional_intensity.is_finite() && lighting.directional_intensity >= 0.0) {
            return invalid("lighting.directional_intensity must not be negative");
        }
        if !(lighting.ambient_intensity.is_finite() && lighting.ambient_intensity >= 0.0) {
            return invalid("lighting.ambient_intensity must not be negative");
        }
        if lighting.shadow_map_size == 0 {
            return invalid("lighting.shadow_map_size must be greater than zero");
        }
        let max_pixel_ratio = self.renderer.max_pixel_ratio;
        if !(max_pixel_ratio.is_finite() && max_pixel_ratio > 0.0) {
            return invalid("renderer.max_pixel_ratio must be greater than zero");
        }
        if self.renderer.target_frame_rate == 0 {
            return invalid("renderer.target_frame_rate must be greater than zero");
        }
        if self.hologram.url.is_empty() {
            return invalid("hologram.url must not be empty");
        }

        Ok(())
    }
}
