use crate::contexts::tracking_context::BackgroundTexture;

/// The camera feed drawn behind the rest of the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraBackground {
    /// Texture owned by the tracking provider
    pub texture: BackgroundTexture,
}
