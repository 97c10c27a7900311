/// Surface properties the renderer needs beyond the geometry itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Texture to sample, if any
    pub texture_url: Option<String>,
    /// 0 is fully transparent, 1 is fully opaque
    pub opacity: f32,
    /// Fragments with alpha below this are discarded
    pub alpha_test: f32,
    /// Draw both faces
    pub double_sided: bool,
    /// Write to the depth buffer
    pub depth_write: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            texture_url: None,
            opacity: 1.0,
            alpha_test: 0.0,
            double_sided: false,
            depth_write: true,
        }
    }
}

/// Entities with a higher render order are drawn later, on top of coplanar geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct RenderOrder(pub i32);
