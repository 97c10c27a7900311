use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use holoplace::{
    contexts::{
        hologram_context::{
            HologramEventSender, HologramMeshData, HologramMeshHandle, HologramRequest,
            HologramSubMesh, LoopMode, VideoElement,
        },
        HologramPlayer, HologramSource,
    },
    HoloplaceResult,
};
use log::{debug, info, trace};

/// Ping-pong only works on short clips.
const MAX_PING_PONG_FRAMES: u32 = 300;

/// Pretends to stream a hologram: reports progress in chunks from a background thread, with the
/// mesh appearing half way through and playback possible once every chunk has "arrived".
#[derive(Debug, Clone)]
pub struct SimulatedHologramSource {
    /// How many chunks the download is split into
    pub chunk_count: u32,
    /// How long each chunk takes
    pub chunk_delay: Duration,
    /// Length of the clip in frames
    pub clip_frames: u32,
    /// Frame rate the clip was captured at
    pub clip_frame_rate: f32,
}

impl Default for SimulatedHologramSource {
    fn default() -> Self {
        Self {
            chunk_count: 20,
            chunk_delay: Duration::from_millis(100),
            clip_frames: 240,
            clip_frame_rate: 30.0,
        }
    }
}

impl HologramSource for SimulatedHologramSource {
    fn create_hologram(
        &mut self,
        request: HologramRequest,
        events: HologramEventSender,
    ) -> HoloplaceResult<Box<dyn HologramPlayer>> {
        let mesh_ready = Arc::new(AtomicBool::new(false));
        let disposed = Arc::new(AtomicBool::new(false));

        // Ping-pong needs the whole clip in memory, so long clips fall back to a plain loop.
        let loop_mode =
            if request.loop_mode == LoopMode::PingPong && self.clip_frames > MAX_PING_PONG_FRAMES {
                info!(
                    "[SIM_HOLOGRAM] Clip is {} frames, too long for ping-pong. Looping instead.",
                    self.clip_frames
                );
                LoopMode::Loop
            } else {
                request.loop_mode
            };

        spawn_loader(
            self.chunk_count.max(1),
            self.chunk_delay,
            events,
            mesh_ready.clone(),
            disposed.clone(),
        )?;

        Ok(Box::new(SimulatedHologramPlayer {
            mesh_ready,
            disposed,
            loop_mode,
            clip_length: self.clip_frames as f32 / self.clip_frame_rate,
            frame_time: 1.0 / self.clip_frame_rate,
            time: 0.0,
            direction: 1.0,
            playing: false,
            muted: false,
            quality: 0,
        }))
    }
}

fn spawn_loader(
    chunk_count: u32,
    chunk_delay: Duration,
    events: HologramEventSender,
    mesh_ready: Arc<AtomicBool>,
    disposed: Arc<AtomicBool>,
) -> HoloplaceResult<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    std::thread::Builder::new()
        .name("hologram-loader".into())
        .spawn(move || {
            debug!("[SIM_HOLOGRAM] Loader starting..");
            runtime.block_on(async move {
                for chunk in 1..=chunk_count {
                    tokio::time::sleep(chunk_delay).await;
                    if disposed.load(Ordering::Acquire) {
                        debug!("[SIM_HOLOGRAM] Player disposed, abandoning load");
                        return;
                    }
                    events.progress(chunk as f32 / chunk_count as f32);
                    if chunk == (chunk_count + 1) / 2 {
                        mesh_ready.store(true, Ordering::Release);
                        events.created();
                    }
                }
                events.playable();
            });
            debug!("[SIM_HOLOGRAM] ..done!");
        })?;

    Ok(())
}

/// A player with no video, just a clock that honours the loop mode.
#[derive(Debug)]
pub struct SimulatedHologramPlayer {
    mesh_ready: Arc<AtomicBool>,
    disposed: Arc<AtomicBool>,
    loop_mode: LoopMode,
    clip_length: f32,
    frame_time: f32,
    time: f32,
    direction: f32,
    playing: bool,
    muted: bool,
    quality: u32,
}

impl SimulatedHologramPlayer {
    /// Current presentation time in seconds
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Is the clock running?
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Is the audio muted?
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    fn advance(&mut self) {
        let next = self.time + self.frame_time * self.direction;
        self.time = match self.loop_mode {
            LoopMode::NoLoop => {
                if next >= self.clip_length {
                    self.playing = false;
                }
                next.min(self.clip_length)
            }
            LoopMode::Loop => next.rem_euclid(self.clip_length),
            LoopMode::PingPong => {
                if next >= self.clip_length {
                    self.direction = -1.0;
                    2.0 * self.clip_length - next
                } else if next <= 0.0 {
                    self.direction = 1.0;
                    -next
                } else {
                    next
                }
            }
        };
    }
}

impl HologramPlayer for SimulatedHologramPlayer {
    fn play_hologram(&mut self, user_interaction: bool) {
        trace!("[SIM_HOLOGRAM] Play (user interaction: {user_interaction})");
        self.playing = true;
    }

    fn pause_hologram(&mut self) {
        trace!("[SIM_HOLOGRAM] Pause");
        self.playing = false;
    }

    fn mesh(&self) -> Option<HologramMeshData> {
        if !self.mesh_ready.load(Ordering::Acquire) {
            return None;
        }
        Some(HologramMeshData {
            root: HologramMeshHandle(0),
            sub_meshes: vec![HologramSubMesh {
                handle: HologramMeshHandle(1),
                name: "Performer".to_string(),
            }],
        })
    }

    fn update_hologram(&mut self) {
        if self.playing {
            self.advance();
        }
    }

    fn set_quality(&mut self, quality: u32) {
        debug!("[SIM_HOLOGRAM] Quality {} -> {quality}", self.quality);
        self.quality = quality;
    }

    fn set_hologram_time(&mut self, seconds: f32) {
        self.time = seconds.clamp(0.0, self.clip_length);
    }

    fn video_element(&self) -> Option<VideoElement> {
        self.mesh_ready
            .load(Ordering::Acquire)
            .then_some(VideoElement(0))
    }

    fn dispose_data(&mut self) {
        self.disposed.store(true, Ordering::Release);
        self.playing = false;
    }

    fn mute(&mut self) {
        self.muted = true;
    }

    fn unmute(&mut self) {
        self.muted = false;
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use holoplace::contexts::hologram_context::{event_channel, HologramEvent};

    use super::*;

    fn player(loop_mode: LoopMode) -> SimulatedHologramPlayer {
        SimulatedHologramPlayer {
            mesh_ready: Arc::new(AtomicBool::new(true)),
            disposed: Default::default(),
            loop_mode,
            clip_length: 1.0,
            frame_time: 0.25,
            time: 0.0,
            direction: 1.0,
            playing: true,
            muted: false,
            quality: 0,
        }
    }

    fn times(player: &mut SimulatedHologramPlayer, ticks: usize) -> Vec<f32> {
        (0..ticks)
            .map(|_| {
                player.update_hologram();
                player.time()
            })
            .collect()
    }

    #[test]
    pub fn test_no_loop_stops_at_the_end() {
        let mut player = player(LoopMode::NoLoop);
        assert_eq!(times(&mut player, 6), vec![0.25, 0.5, 0.75, 1.0, 1.0, 1.0]);
        assert!(!player.is_playing());
    }

    #[test]
    pub fn test_loop_wraps() {
        let mut player = player(LoopMode::Loop);
        assert_eq!(times(&mut player, 6), vec![0.25, 0.5, 0.75, 0.0, 0.25, 0.5]);
    }

    #[test]
    pub fn test_ping_pong_reverses() {
        let mut player = player(LoopMode::PingPong);
        assert_eq!(
            times(&mut player, 8),
            vec![0.25, 0.5, 0.75, 1.0, 0.75, 0.5, 0.25, 0.0]
        );
        assert_eq!(times(&mut player, 1), vec![0.25]);
    }

    #[test]
    pub fn test_paused_player_does_not_advance() {
        let mut player = player(LoopMode::Loop);
        player.pause_hologram();
        assert_eq!(times(&mut player, 3), vec![0.0, 0.0, 0.0]);
        player.set_hologram_time(5.0);
        assert_relative_eq!(player.time(), 1.0);
    }

    #[test]
    pub fn test_loader_reports_in_order() {
        let (events, receiver) = event_channel();
        let mut source = SimulatedHologramSource {
            chunk_count: 4,
            chunk_delay: Duration::from_millis(1),
            ..Default::default()
        };
        let player = source
            .create_hologram(
                HologramRequest {
                    url: "hologram.sxrweb".into(),
                    loop_mode: LoopMode::Loop,
                    texture_override_url: None,
                },
                events,
            )
            .unwrap();

        let received = receiver.iter().take(6).collect::<Vec<_>>();
        assert_eq!(
            received,
            vec![
                HologramEvent::Progress(0.25),
                HologramEvent::Progress(0.5),
                HologramEvent::Created,
                HologramEvent::Progress(0.75),
                HologramEvent::Progress(1.0),
                HologramEvent::Playable
            ]
        );
        assert!(player.mesh().is_some());
    }
}
