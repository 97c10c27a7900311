use glam::{Affine3A, Vec3};
use log::info;

use crate::{HoloplaceError, HoloplaceResult};

/// Opaque handle to the camera feed texture owned by the tracking provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BackgroundTexture(pub u64);

/// The camera the scene is drawn from, as reported by the tracking provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// The camera's pose in world space
    pub global_from_view: Affine3A,
    /// The live camera feed, drawn behind everything else
    pub background: BackgroundTexture,
}

/// An instant world tracker: camera capture plus a 6-DoF anchor that needs no prior map.
///
/// Implementations wrap whatever tracking SDK the platform offers.
pub trait TrackingProvider {
    /// Can this environment run the tracker at all? Checked once, before anything else.
    fn is_supported(&self) -> bool;

    /// Begin camera capture. Only called after the user has granted camera permission.
    fn start(&mut self) -> HoloplaceResult<()>;

    /// Advance one tick. Must be called exactly once per displayed frame; this is what makes the
    /// background texture and camera pose current.
    fn update_frame(&mut self) -> HoloplaceResult<()>;

    /// Move the anchor to `offset` relative to the live camera transform and return its new pose.
    fn anchor_pose_from_camera_offset(&mut self, offset: Vec3) -> HoloplaceResult<Affine3A>;

    /// The current camera
    fn camera(&self) -> Camera;
}

/// Wrapper around the [`TrackingProvider`].
///
/// Keeps track of whether the camera has been started and how many times the anchor pose has been
/// written, so the pose freeze after placement can be observed.
pub struct TrackingContext {
    provider: Box<dyn TrackingProvider>,
    started: bool,
    anchor_pose_writes: u64,
}

impl TrackingContext {
    /// Wrap a provider
    pub fn new(provider: Box<dyn TrackingProvider>) -> Self {
        Self {
            provider,
            started: false,
            anchor_pose_writes: 0,
        }
    }

    /// Does the environment support tracking?
    pub fn is_supported(&self) -> bool {
        self.provider.is_supported()
    }

    /// Start camera capture
    pub fn start(&mut self) -> HoloplaceResult<()> {
        self.provider.start()?;
        self.started = true;
        info!("[HOLOPLACE_TRACKING] Camera started");
        Ok(())
    }

    /// Has the camera been started?
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Advance the tracker by one frame
    pub fn update_frame(&mut self) -> HoloplaceResult<()> {
        if !self.started {
            return Err(HoloplaceError::TrackingNotStarted);
        }
        self.provider.update_frame()
    }

    /// Request a new anchor pose at `offset` from the camera
    pub fn anchor_pose_from_camera_offset(&mut self, offset: Vec3) -> HoloplaceResult<Affine3A> {
        if !self.started {
            return Err(HoloplaceError::TrackingNotStarted);
        }
        let pose = self.provider.anchor_pose_from_camera_offset(offset)?;
        self.anchor_pose_writes += 1;
        Ok(pose)
    }

    /// How many anchor poses have been requested this session
    pub fn anchor_pose_writes(&self) -> u64 {
        self.anchor_pose_writes
    }

    /// The camera to render with
    pub fn camera(&self) -> Camera {
        self.provider.camera()
    }
}
