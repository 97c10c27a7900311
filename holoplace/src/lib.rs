#![deny(missing_docs)]

//! Holoplace puts a pre-recorded volumetric video "hologram" into your room. 🌐
//!
//! The camera feed and a 6-DoF anchor pose come from an instant world tracker, the hologram
//! itself is decoded and played back by a hologram player, and the result is drawn by a
//! renderer. None of those live here: they are consumed through the traits in [`contexts`].
//! What holoplace owns is the scene graph, the place / pick-up state machine and the per-frame
//! pipeline that forwards state into the external pieces in a fixed order.
//!
//! # Getting started
//! Build an [`Engine`] with an [`EngineBuilder`], then call [`Engine::update`] followed by
//! [`Engine::tick`] once per display refresh. See `holoplace-simulator` for a complete driver.

pub use glam;
pub use hecs;

pub use config::HoloplaceConfig;
pub use engine::{Engine, EngineBuilder, TickData};
pub use frame::{FrameStage, FRAME_PIPELINE};
pub use gate::AppState;
pub use holoplace_error::HoloplaceError;
pub use placement::{PlacementController, PlacementEffects, PlacementState};

/// Components are data attached to entities in the scene graph
pub mod components;
/// Configuration for a deployment: asset URLs, offsets, labels and lighting
pub mod config;
/// Contexts are wrappers around the external collaborators the engine talks to
pub mod contexts;
mod engine;
/// The ordered stages of a single frame
pub mod frame;
/// Startup gating: environment support and camera consent
pub mod gate;
mod holoplace_error;
/// The place / pick-up state machine
pub mod placement;
/// One-time construction of the static scene graph
pub mod scene;
/// Systems are functions called each frame, one per pipeline stage
pub mod systems;
#[cfg(test)]
pub(crate) mod testing;

/// Holoplace result type
pub type HoloplaceResult<T> = std::result::Result<T, HoloplaceError>;
