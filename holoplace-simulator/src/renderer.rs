use holoplace::{
    components::{GlobalTransform, Hologram, Mesh, Visible},
    contexts::{tracking_context::Camera, Renderer},
    hecs::World,
    HoloplaceResult,
};
use log::{debug, info, trace};

/// What the last frame would have drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameSummary {
    /// Visible meshes of any kind
    pub meshes: usize,
    /// Visible hologram pieces
    pub holograms: usize,
}

/// A renderer that draws nothing and writes down what it would have drawn.
#[derive(Debug, Clone)]
pub struct LogRenderer {
    /// Log a summary every this many frames
    pub log_every: u64,
    frames: u64,
    size: (u32, u32, f32),
    last_frame: FrameSummary,
}

impl Default for LogRenderer {
    fn default() -> Self {
        Self {
            log_every: 120,
            frames: 0,
            size: (0, 0, 1.),
            last_frame: Default::default(),
        }
    }
}

impl LogRenderer {
    /// Frames drawn so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// What the last frame contained
    pub fn last_frame(&self) -> FrameSummary {
        self.last_frame
    }

    /// Width, height and pixel ratio of the drawing surface
    pub fn size(&self) -> (u32, u32, f32) {
        self.size
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, world: &World, camera: &Camera) -> HoloplaceResult<()> {
        let mut summary = FrameSummary::default();
        for (_, (mesh, global_transform)) in world
            .query::<(&Mesh, &GlobalTransform)>()
            .with::<&Visible>()
            .iter()
        {
            summary.meshes += 1;
            if let Mesh::Hologram(handle) = mesh {
                trace!(
                    "[SIM_RENDER] Hologram piece {:?} at {:?}",
                    handle,
                    global_transform.0.translation.to_array()
                );
            }
        }
        summary.holograms = world
            .query::<&Hologram>()
            .with::<&Visible>()
            .iter()
            .count();

        if summary.holograms > 0 && self.last_frame.holograms == 0 {
            info!("[SIM_RENDER] Hologram is now in the scene");
        }

        self.frames += 1;
        self.last_frame = summary;
        if self.frames % self.log_every.max(1) == 0 {
            debug!(
                "[SIM_RENDER] Frame {} - {} meshes, camera at {:?}",
                self.frames,
                summary.meshes,
                camera.global_from_view.translation.to_array()
            );
        }

        Ok(())
    }

    fn set_size(&mut self, width: u32, height: u32, pixel_ratio: f32) {
        info!("[SIM_RENDER] Surface is now {width}x{height} @ {pixel_ratio}x");
        self.size = (width, height, pixel_ratio);
    }
}
