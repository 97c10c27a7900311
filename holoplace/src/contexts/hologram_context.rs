use std::sync::mpsc;

use log::{debug, info, warn};
use serde::Deserialize;

use crate::{HoloplaceError, HoloplaceResult};

/// How hologram playback repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "i32")]
pub enum LoopMode {
    /// Play once and stop on the last frame
    NoLoop = 0,
    /// Start again from the beginning
    Loop = 1,
    /// Play forwards, then backwards. Only works for clips of 300 frames or fewer.
    PingPong = 2,
}

impl TryFrom<i32> for LoopMode {
    type Error = HoloplaceError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(LoopMode::NoLoop),
            1 => Ok(LoopMode::Loop),
            2 => Ok(LoopMode::PingPong),
            other => Err(HoloplaceError::InvalidLoopMode(other)),
        }
    }
}

impl From<LoopMode> for i32 {
    fn from(mode: LoopMode) -> Self {
        mode as i32
    }
}

/// Everything the player needs to start streaming a hologram.
#[derive(Debug, Clone, PartialEq)]
pub struct HologramRequest {
    /// URL of the hologram file
    pub url: String,
    /// Playback repeat policy
    pub loop_mode: LoopMode,
    /// Use this texture instead of the one the hologram file names
    pub texture_override_url: Option<String>,
}

/// Opaque handle to a node in the player's mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HologramMeshHandle(pub u64);

/// One drawable piece of the hologram
#[derive(Debug, Clone, PartialEq)]
pub struct HologramSubMesh {
    /// Player handle for this piece
    pub handle: HologramMeshHandle,
    /// Name, for debugging
    pub name: String,
}

/// The renderable node returned by the player once it is created.
#[derive(Debug, Clone, PartialEq)]
pub struct HologramMeshData {
    /// Handle of the root node
    pub root: HologramMeshHandle,
    /// The pieces that make up the hologram
    pub sub_meshes: Vec<HologramSubMesh>,
}

/// Opaque handle to the video element backing the hologram's texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VideoElement(pub u64);

/// A streaming volumetric video player.
///
/// Playback control methods never fail from the point of view of holoplace; whatever goes wrong
/// inside the player stays inside the player.
pub trait HologramPlayer {
    /// Start or resume playback. `user_interaction` is true when a user gesture triggered this,
    /// which platforms with autoplay restrictions care about.
    fn play_hologram(&mut self, user_interaction: bool);
    /// Pause playback
    fn pause_hologram(&mut self);
    /// The renderable mesh. Only `Some` once Created has been sent.
    fn mesh(&self) -> Option<HologramMeshData>;
    /// Decode / interpolate to the current presentation time. Only valid once Playable has been sent.
    fn update_hologram(&mut self);
    /// Change the streaming quality level
    fn set_quality(&mut self, quality: u32);
    /// Seek to `seconds`
    fn set_hologram_time(&mut self, seconds: f32);
    /// The video element backing the hologram texture, if there is one
    fn video_element(&self) -> Option<VideoElement>;
    /// Release everything the player has decoded
    fn dispose_data(&mut self);
    /// Silence the hologram's audio
    fn mute(&mut self);
    /// Restore the hologram's audio
    fn unmute(&mut self);
}

/// Creates hologram players.
pub trait HologramSource {
    /// Begin loading `request`. Loading progress is reported through `events`, from whichever
    /// thread the player likes.
    fn create_hologram(
        &mut self,
        request: HologramRequest,
        events: HologramEventSender,
    ) -> HoloplaceResult<Box<dyn HologramPlayer>>;
}

/// Loading milestones reported by the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HologramEvent {
    /// The mesh exists and can be added to the scene
    Created,
    /// Loading progress, 0 to 1
    Progress(f32),
    /// Enough has been decoded to start playback
    Playable,
}

/// Handed to the player in place of callbacks. Cheap to clone and safe to send across threads.
#[derive(Debug, Clone)]
pub struct HologramEventSender {
    sender: mpsc::Sender<HologramEvent>,
}

impl HologramEventSender {
    /// The mesh has been created
    pub fn created(&self) {
        self.send(HologramEvent::Created);
    }

    /// Loading has progressed to `progress`
    pub fn progress(&self, progress: f32) {
        self.send(HologramEvent::Progress(progress));
    }

    /// The hologram can now be played
    pub fn playable(&self) {
        self.send(HologramEvent::Playable);
    }

    fn send(&self, event: HologramEvent) {
        // The engine is gone, so there's nobody left to tell.
        let _ = self.sender.send(event);
    }
}

/// A sender for the player and the receiving end for whoever applies the events
pub fn event_channel() -> (HologramEventSender, mpsc::Receiver<HologramEvent>) {
    let (sender, receiver) = mpsc::channel();
    (HologramEventSender { sender }, receiver)
}

/// Readiness of the hologram. Both flags only ever go from false to true.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HologramLoadState {
    mesh_ready: bool,
    playable: bool,
    progress: f32,
}

impl HologramLoadState {
    /// Has the mesh been added to the scene?
    pub fn mesh_ready(&self) -> bool {
        self.mesh_ready
    }

    /// Can the hologram be advanced?
    pub fn playable(&self) -> bool {
        self.playable
    }

    /// Highest progress reported so far, 0 to 1
    pub fn progress(&self) -> f32 {
        self.progress
    }
}

/// Wrapper around the [`HologramPlayer`] and the channel its load events arrive on.
pub struct HologramContext {
    player: Box<dyn HologramPlayer>,
    receiver: mpsc::Receiver<HologramEvent>,
    load_state: HologramLoadState,
    pending_playable: bool,
    initial_quality: Option<u32>,
}

impl HologramContext {
    /// Ask `source` for a player and start listening for its events
    pub fn new(
        source: &mut dyn HologramSource,
        request: HologramRequest,
        initial_quality: Option<u32>,
    ) -> HoloplaceResult<Self> {
        let (events, receiver) = event_channel();
        info!(
            "[HOLOPLACE_HOLOGRAM] Loading {} with loop mode {:?}",
            request.url, request.loop_mode
        );
        let player = source.create_hologram(request, events)?;

        Ok(Self {
            player,
            receiver,
            load_state: Default::default(),
            pending_playable: false,
            initial_quality,
        })
    }

    /// Every event that has arrived since the last call
    pub fn drain_events(&mut self) -> Vec<HologramEvent> {
        self.receiver.try_iter().collect()
    }

    /// The current load state
    pub fn load_state(&self) -> HologramLoadState {
        self.load_state
    }

    /// Is the hologram playable?
    pub fn is_playable(&self) -> bool {
        self.load_state.playable
    }

    /// Record loading progress. Progress never goes backwards.
    pub fn record_progress(&mut self, progress: f32) {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        self.load_state.progress = self.load_state.progress.max(progress);
    }

    /// Mark the mesh as present in the scene. Returns false if it already was.
    pub fn mark_mesh_ready(&mut self) -> bool {
        if self.load_state.mesh_ready {
            warn!("[HOLOPLACE_HOLOGRAM] Ignoring duplicate Created event");
            return false;
        }
        self.load_state.mesh_ready = true;
        if let Some(quality) = self.initial_quality {
            debug!("[HOLOPLACE_HOLOGRAM] Setting initial quality to {quality}");
            self.player.set_quality(quality);
        }
        true
    }

    /// Mark the hologram playable. Holds the transition back until the mesh is ready, since
    /// playback control needs the mesh to exist. Returns true if the hologram became playable.
    pub fn mark_playable(&mut self) -> bool {
        if self.load_state.playable {
            warn!("[HOLOPLACE_HOLOGRAM] Ignoring duplicate Playable event");
            return false;
        }
        if !self.load_state.mesh_ready {
            debug!("[HOLOPLACE_HOLOGRAM] Playable arrived before Created, deferring");
            self.pending_playable = true;
            return false;
        }
        self.pending_playable = false;
        self.load_state.playable = true;
        true
    }

    /// Is there a Playable event waiting on Created?
    pub fn has_pending_playable(&self) -> bool {
        self.pending_playable
    }

    /// Advance playback by one tick. Does nothing until the hologram is playable.
    pub fn update_hologram(&mut self) -> bool {
        if !self.load_state.playable {
            return false;
        }
        self.player.update_hologram();
        true
    }

    /// The player's mesh, if it has one
    pub fn mesh(&self) -> Option<HologramMeshData> {
        self.player.mesh()
    }

    /// Access the underlying player
    pub fn player(&mut self) -> &mut dyn HologramPlayer {
        self.player.as_mut()
    }
}

impl Drop for HologramContext {
    fn drop(&mut self) {
        debug!("[HOLOPLACE_HOLOGRAM] Disposing hologram data");
        self.player.dispose_data();
    }
}
