use hecs::World;
use log::debug;

use super::tracking_context::Camera;
use crate::HoloplaceResult;

/// An immediate mode renderer: draws whatever is in the world, every time it's asked.
pub trait Renderer {
    /// Draw every [`crate::components::Visible`] entity in `world` from `camera`
    fn render(&mut self, world: &World, camera: &Camera) -> HoloplaceResult<()>;

    /// The drawing surface changed size
    fn set_size(&mut self, width: u32, height: u32, pixel_ratio: f32);
}

/// Wrapper around the [`Renderer`]
pub struct RenderContext {
    renderer: Box<dyn Renderer>,
    frames_rendered: u64,
}

impl RenderContext {
    /// Wrap a renderer
    pub fn new(renderer: Box<dyn Renderer>) -> Self {
        Self {
            renderer,
            frames_rendered: 0,
        }
    }

    /// Draw a frame
    pub fn render(&mut self, world: &World, camera: &Camera) -> HoloplaceResult<()> {
        self.renderer.render(world, camera)?;
        self.frames_rendered += 1;
        Ok(())
    }

    /// Resize the drawing surface
    pub fn set_size(&mut self, width: u32, height: u32, pixel_ratio: f32) {
        debug!("[HOLOPLACE_RENDER] Resizing to {width}x{height} @ {pixel_ratio}x");
        self.renderer.set_size(width, height, pixel_ratio);
    }

    /// Number of frames successfully drawn
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}
