use std::time::Instant;

use log::{debug, info};

use crate::{
    config::HoloplaceConfig,
    contexts::{
        hologram_context::{HologramLoadState, HologramRequest, VideoElement},
        HologramContext, HologramSource, RenderContext, Renderer, TrackingContext,
        TrackingProvider, UiContext, UiEvent, UiSurface,
    },
    frame::{FrameStage, FRAME_PIPELINE},
    gate::{self, AppState},
    placement::{PlacementController, PlacementState},
    scene::{compose_scene, SceneEntities},
    systems::{
        anchor_system, hologram_playback_system, load_events_system, loading_indicator_system,
        placement_system, rendering_system, tracking_system,
    },
    HoloplaceError, HoloplaceResult,
};

/// Builder for `Engine`.
pub struct EngineBuilder {
    config: HoloplaceConfig,
    tracking_provider: Option<Box<dyn TrackingProvider>>,
    hologram_source: Option<Box<dyn HologramSource>>,
    renderer: Option<Box<dyn Renderer>>,
    ui_surface: Option<Box<dyn UiSurface>>,
}

impl EngineBuilder {
    /// Create an `EngineBuilder`
    pub fn new(config: HoloplaceConfig) -> Self {
        Self {
            config,
            tracking_provider: None,
            hologram_source: None,
            renderer: None,
            ui_surface: None,
        }
    }

    /// Set the instant world tracker
    pub fn tracking_provider(mut self, provider: Box<dyn TrackingProvider>) -> Self {
        self.tracking_provider = Some(provider);
        self
    }

    /// Set where holograms come from
    pub fn hologram_source(mut self, source: Box<dyn HologramSource>) -> Self {
        self.hologram_source = Some(source);
        self
    }

    /// Set the renderer
    pub fn renderer(mut self, renderer: Box<dyn Renderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Set the UI surface
    pub fn ui_surface(mut self, surface: Box<dyn UiSurface>) -> Self {
        self.ui_surface = Some(surface);
        self
    }

    /// Build the `Engine`.
    ///
    /// Fails with [`HoloplaceError::UnsupportedEnvironment`] if the tracker can't run here, in
    /// which case the user has already been told and nothing else has been set up.
    pub fn build(self) -> HoloplaceResult<Engine> {
        let config = self.config;
        config.validate()?;

        let tracking_context = TrackingContext::new(
            self.tracking_provider
                .ok_or_else(|| anyhow::anyhow!("No tracking provider was set"))?,
        );
        let mut ui_context = UiContext::new(
            self.ui_surface
                .ok_or_else(|| anyhow::anyhow!("No UI surface was set"))?,
        );
        let renderer = self
            .renderer
            .ok_or_else(|| anyhow::anyhow!("No renderer was set"))?;
        let mut hologram_source = self
            .hologram_source
            .ok_or_else(|| anyhow::anyhow!("No hologram source was set"))?;

        gate::run_compatibility_check(&tracking_context, &mut ui_context)?;

        // Build the scene graph and start streaming the hologram straight away; loading can
        // happen while the user reads the splash screen.
        let mut world = hecs::World::default();
        let scene = compose_scene(&mut world, &config, tracking_context.camera().background);
        let hologram_context = HologramContext::new(
            hologram_source.as_mut(),
            HologramRequest {
                url: config.hologram.url.clone(),
                loop_mode: config.hologram.loop_mode,
                texture_override_url: config.hologram.texture_override_url.clone(),
            },
            config.hologram.quality,
        )?;

        ui_context.surface().show_splash(&config.splash);
        ui_context.set_place_button_visible(false);
        ui_context.set_loading_indicator_visible(true);

        let placement = PlacementController::new(
            config.placement.place_label.clone(),
            config.placement.pick_up_label.clone(),
        );

        info!("[HOLOPLACE_ENGINE] Engine built, waiting on the splash screen");

        Ok(Engine {
            world,
            config,
            tracking_context,
            hologram_context,
            render_context: RenderContext::new(renderer),
            ui_context,
            placement,
            scene,
            app_state: AppState::Splash,
            should_quit: false,
            frame_count: 0,
            performance_timers: Default::default(),
        })
    }
}

/// The result of calling `update()` on Engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickData {
    /// Where the session is up to
    pub app_state: AppState,
    /// Number of frames run so far
    pub frame_count: u64,
}

/// The Holoplace Engine
/// Owns the scene graph and a context for each external collaborator.
/// **IMPORTANT**: call `update` then `tick` once per display refresh
pub struct Engine {
    /// The scene graph
    pub world: hecs::World,
    /// The deployment's configuration
    pub config: HoloplaceConfig,
    /// Tracking context
    pub tracking_context: TrackingContext,
    /// Hologram context
    pub hologram_context: HologramContext,
    /// Render context
    pub render_context: RenderContext,
    /// UI context
    pub ui_context: UiContext,
    /// Place / pick up state
    pub placement: PlacementController,
    /// The entities making up the static scene
    pub scene: SceneEntities,
    app_state: AppState,
    should_quit: bool,
    frame_count: u64,
    performance_timers: PerformanceTimers,
}

impl Engine {
    /// Handle everything the user has done since the last call. Call this before each `tick`.
    ///
    /// Returns [`HoloplaceError::PermissionDenied`] the moment the user refuses camera access,
    /// and [`HoloplaceError::ShuttingDown`] once the session is over.
    pub fn update(&mut self) -> HoloplaceResult<TickData> {
        if self.should_quit || self.app_state == AppState::Halted {
            return Err(HoloplaceError::ShuttingDown);
        }

        for event in self.ui_context.poll_events() {
            self.handle_ui_event(event)?;
        }

        if self.should_quit {
            info!("[HOLOPLACE_ENGINE] Holoplace is now exiting!");
            return Err(HoloplaceError::ShuttingDown);
        }

        Ok(TickData {
            app_state: self.app_state,
            frame_count: self.frame_count,
        })
    }

    /// Apply a single UI event
    pub fn handle_ui_event(&mut self, event: UiEvent) -> HoloplaceResult<()> {
        debug!("[HOLOPLACE_ENGINE] UI event {event:?}");
        match event {
            UiEvent::StartTapped => gate::handle_start_tapped(
                &mut self.app_state,
                &mut self.tracking_context,
                &mut self.ui_context,
                &self.config.placement.place_label,
            )?,
            UiEvent::PlaceTapped => {
                if self.app_state == AppState::Running {
                    placement_system(self);
                }
            }
            UiEvent::Resized {
                width,
                height,
                device_pixel_ratio,
            } => {
                let pixel_ratio = self.config.renderer.pixel_ratio(device_pixel_ratio);
                self.render_context.set_size(width, height, pixel_ratio);
            }
            UiEvent::Quit => self.should_quit = true,
        }

        Ok(())
    }

    /// Run one frame: every stage of [`FRAME_PIPELINE`], in order.
    ///
    /// Returns `Ok(false)` without doing anything until the user has granted camera access.
    /// The first stage to fail ends the frame and its error is returned.
    pub fn tick(&mut self) -> HoloplaceResult<bool> {
        if self.app_state != AppState::Running {
            return Ok(false);
        }

        self.performance_timers.start();
        for stage in FRAME_PIPELINE {
            self.run_stage(stage)?;
        }
        self.performance_timers.end();
        self.frame_count += 1;

        Ok(true)
    }

    fn run_stage(&mut self, stage: FrameStage) -> HoloplaceResult<()> {
        match stage {
            FrameStage::ApplyLoadEvents => load_events_system(self),
            FrameStage::UpdatePoseIfUnplaced => anchor_system(self),
            FrameStage::AdvanceTracking => tracking_system(self),
            FrameStage::UpdateLoadingIndicator => {
                loading_indicator_system(self);
                Ok(())
            }
            FrameStage::AdvanceHologramIfPlayable => {
                hologram_playback_system(self);
                Ok(())
            }
            FrameStage::Render => rendering_system(self),
        }
    }

    /// Where the session is up to
    pub fn app_state(&self) -> AppState {
        self.app_state
    }

    /// Placed or unplaced?
    pub fn placement_state(&self) -> PlacementState {
        self.placement.state()
    }

    /// How far the hologram has loaded
    pub fn load_state(&self) -> HologramLoadState {
        self.hologram_context.load_state()
    }

    /// Number of frames run so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Change the hologram's streaming quality
    pub fn set_hologram_quality(&mut self, quality: u32) {
        self.hologram_context.player().set_quality(quality);
    }

    /// Seek the hologram to `seconds`
    pub fn seek_hologram(&mut self, seconds: f32) {
        self.hologram_context.player().set_hologram_time(seconds);
    }

    /// The video element backing the hologram's texture, if the player has one yet
    pub fn hologram_video_element(&mut self) -> Option<VideoElement> {
        self.hologram_context.player().video_element()
    }
}

/// Keeps an eye on how long ticks take
#[derive(Debug)]
pub struct PerformanceTimers {
    frame_start: Instant,
    timings: Vec<f32>,
    last_update: Instant,
}

impl PerformanceTimers {
    fn start(&mut self) {
        self.frame_start = Instant::now();
    }

    fn end(&mut self) {
        let now = Instant::now();
        let tic_time = now - self.frame_start;
        self.timings.push(tic_time.as_secs_f32() * 1000.);

        if (now - self.last_update).as_secs_f32() >= 1.0 {
            let average = self.timings.iter().sum::<f32>() / self.timings.len() as f32;
            debug!("[HOLOPLACE_PERF] Average tic time: {average:.2}ms");
            self.last_update = now;
            self.timings.clear();
        }
    }
}

impl Default for PerformanceTimers {
    fn default() -> Self {
        Self {
            frame_start: Instant::now(),
            last_update: Instant::now(),
            timings: Default::default(),
        }
    }
}
