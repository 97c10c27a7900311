#![allow(missing_docs)]
pub mod anchor;
pub mod hologram_playback;
pub mod load_events;
pub mod loading_indicator;
pub mod placement;
pub mod rendering;
pub mod tracking;
pub(crate) mod update_global_transform;

pub use anchor::anchor_system;
pub use hologram_playback::hologram_playback_system;
pub use load_events::load_events_system;
pub use loading_indicator::loading_indicator_system;
pub use placement::placement_system;
pub use rendering::rendering_system;
pub use tracking::tracking_system;
