#![allow(missing_docs)]
pub mod hologram_context;
pub mod render_context;
pub mod tracking_context;
pub mod ui_context;

pub use hologram_context::{HologramContext, HologramPlayer, HologramSource};
pub use render_context::{RenderContext, Renderer};
pub use tracking_context::{Camera, TrackingContext, TrackingProvider};
pub use ui_context::{UiContext, UiEvent, UiSurface};
