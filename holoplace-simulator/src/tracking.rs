use holoplace::{
    contexts::{
        tracking_context::{BackgroundTexture, Camera},
        TrackingProvider,
    },
    glam::{Affine3A, Quat, Vec3},
    HoloplaceError, HoloplaceResult,
};
use log::{debug, info};

/// Height of the simulated phone above the floor
const EYE_HEIGHT: f32 = 1.6;

/// How far the simulated user turns their head either side, in radians
const SWAY_AMPLITUDE: f32 = 0.3;

/// A tracker with no camera. The "user" stands still and slowly looks left and right.
#[derive(Debug, Clone)]
pub struct SimulatedTracking {
    /// Pretend the environment can't track
    pub supported: bool,
    /// How many ticks a full left-right-left sway takes
    pub sway_period: u32,
    started: bool,
    frame: u64,
    global_from_view: Affine3A,
}

impl Default for SimulatedTracking {
    fn default() -> Self {
        Self {
            supported: true,
            sway_period: 600,
            started: false,
            frame: 0,
            global_from_view: Affine3A::from_translation(Vec3::Y * EYE_HEIGHT),
        }
    }
}

impl SimulatedTracking {
    /// A tracker that reports the environment can't run it
    pub fn unsupported() -> Self {
        Self {
            supported: false,
            ..Default::default()
        }
    }

    /// Has the camera been started?
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Number of times `update_frame` has been called
    pub fn frame(&self) -> u64 {
        self.frame
    }

    fn pose_at(&self, frame: u64) -> Affine3A {
        let period = self.sway_period.max(1) as u64;
        let phase = (frame % period) as f32 / period as f32;
        let yaw = (phase * std::f32::consts::TAU).sin() * SWAY_AMPLITUDE;
        Affine3A::from_rotation_translation(Quat::from_rotation_y(yaw), Vec3::Y * EYE_HEIGHT)
    }
}

impl TrackingProvider for SimulatedTracking {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn start(&mut self) -> HoloplaceResult<()> {
        if !self.supported {
            return Err(HoloplaceError::UnsupportedEnvironment);
        }
        info!("[SIM_TRACKING] Camera started");
        self.started = true;
        Ok(())
    }

    fn update_frame(&mut self) -> HoloplaceResult<()> {
        self.frame += 1;
        self.global_from_view = self.pose_at(self.frame);
        Ok(())
    }

    fn anchor_pose_from_camera_offset(&mut self, offset: Vec3) -> HoloplaceResult<Affine3A> {
        let pose = self.global_from_view * Affine3A::from_translation(offset);
        if self.frame % 60 == 0 {
            debug!(
                "[SIM_TRACKING] Anchor at {:?}",
                pose.translation.to_array()
            );
        }
        Ok(pose)
    }

    fn camera(&self) -> Camera {
        Camera {
            global_from_view: self.global_from_view,
            background: BackgroundTexture(0),
        }
    }
}
