//! Runs holoplace on a desktop with no camera, no hologram player and no GPU.
//!
//! Each external SDK is replaced by a stand-in: tracking sways a virtual camera, the hologram
//! "streams" from a background thread, rendering is a log line and the UI is the console.
//!
//! Environment variables:
//! - `HOLOPLACE_CONFIG`: path to a JSON config file
//! - `HOLOPLACE_SIM_AUTO_START`: skip typing `start` on the splash screen
//! - `HOLOPLACE_SIM_DENY_CAMERA`: refuse camera permission
//! - `RUST_LOG`: the usual `env_logger` filter
#![deny(missing_docs)]

/// Hologram loading and playback stand-in
pub mod hologram;
/// Renderer stand-in
pub mod renderer;
/// Tracking stand-in
pub mod tracking;
/// Console and scripted UIs
pub mod ui;

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};

use holoplace::{Engine, EngineBuilder, HoloplaceConfig, HoloplaceError, HoloplaceResult};
use log::{error, info, warn};

use crate::{
    hologram::SimulatedHologramSource, renderer::LogRenderer, tracking::SimulatedTracking,
    ui::ConsoleUi,
};

/// Path to a JSON config file
pub const CONFIG_ENV_VAR: &str = "HOLOPLACE_CONFIG";
/// Tap start automatically
pub const AUTO_START_ENV_VAR: &str = "HOLOPLACE_SIM_AUTO_START";
/// Refuse camera permission
pub const DENY_CAMERA_ENV_VAR: &str = "HOLOPLACE_SIM_DENY_CAMERA";

/// Set up logging, build an engine out of the stand-ins and run it until the user quits.
pub fn real_main() -> HoloplaceResult<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = match std::env::var(CONFIG_ENV_VAR) {
        Ok(path) => {
            info!("[HOLOPLACE_SIMULATOR] Loading config from {path}");
            HoloplaceConfig::load(path)?
        }
        Err(_) => HoloplaceConfig::default(),
    };

    let should_quit = Arc::new(AtomicBool::from(false));
    {
        let should_quit = should_quit.clone();
        ctrlc::set_handler(move || should_quit.store(true, Ordering::Relaxed))
            .map_err(anyhow::Error::from)?;
    }

    let mut ui = ConsoleUi::new(should_quit, std::env::var(AUTO_START_ENV_VAR).is_ok())?;
    ui.grant_permission = std::env::var(DENY_CAMERA_ENV_VAR).is_err();

    let frame_interval = Duration::from_secs_f32(1.0 / config.renderer.target_frame_rate as f32);
    let mut engine = EngineBuilder::new(config)
        .tracking_provider(Box::new(SimulatedTracking::default()))
        .hologram_source(Box::new(SimulatedHologramSource::default()))
        .renderer(Box::new(LogRenderer::default()))
        .ui_surface(Box::new(ui))
        .build()?;

    run(&mut engine, frame_interval)
}

/// Drive `engine` at one frame per `frame_interval` until the session ends.
///
/// A refused camera permission halts the session and is not an error. Any other failure stops
/// the loop and is returned.
pub fn run(engine: &mut Engine, frame_interval: Duration) -> HoloplaceResult<()> {
    loop {
        let frame_start = Instant::now();

        match engine.update() {
            Ok(_) => {}
            Err(HoloplaceError::ShuttingDown) => break,
            Err(HoloplaceError::PermissionDenied) => {
                warn!("[HOLOPLACE_SIMULATOR] Camera permission was refused, halting");
                continue;
            }
            Err(e) => {
                error!("[HOLOPLACE_SIMULATOR] Error handling input: {e:?}");
                return Err(e);
            }
        }

        if let Err(e) = engine.tick() {
            error!(
                "[HOLOPLACE_SIMULATOR] Frame {} failed: {e:?}",
                engine.frame_count()
            );
            return Err(e);
        }

        if let Some(remaining) = frame_interval.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    info!(
        "[HOLOPLACE_SIMULATOR] Finished after {} frames. Goodbye!",
        engine.frame_count()
    );
    Ok(())
}
