/// One step of a frame. Each stage is handled by exactly one system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameStage {
    /// Apply any hologram load events that arrived since the last frame
    ApplyLoadEvents,
    /// Move the anchor in front of the camera, unless the hologram has been placed
    UpdatePoseIfUnplaced,
    /// Advance the tracker so the camera feed and pose are current
    AdvanceTracking,
    /// Show the loading indicator until the hologram is playable
    UpdateLoadingIndicator,
    /// Advance hologram playback by one tick, once it is playable
    AdvanceHologramIfPlayable,
    /// Draw the scene from the tracked camera
    Render,
}

/// The order every frame runs in.
///
/// Load events come first so anything that arrived between frames is visible this frame. The
/// pose request precedes the tracker update, and both the tracker and the hologram must be
/// current before the scene is drawn.
pub const FRAME_PIPELINE: [FrameStage; 6] = [
    FrameStage::ApplyLoadEvents,
    FrameStage::UpdatePoseIfUnplaced,
    FrameStage::AdvanceTracking,
    FrameStage::UpdateLoadingIndicator,
    FrameStage::AdvanceHologramIfPlayable,
    FrameStage::Render,
];
