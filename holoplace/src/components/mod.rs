#![allow(missing_docs)]
pub mod anchor;
pub mod background;
pub mod global_transform;
pub mod hologram;
pub mod hotspot;
pub mod info;
pub mod light;
pub mod local_transform;
pub mod material;
pub mod mesh;
pub mod parent;
pub mod shadow;
pub mod visible;

pub use anchor::Anchor;
pub use background::CameraBackground;
pub use global_transform::GlobalTransform;
pub use hologram::Hologram;
pub use hotspot::Hotspot;
pub use info::Info;
pub use light::Light;
pub use local_transform::LocalTransform;
pub use material::{Material, RenderOrder};
pub use mesh::Mesh;
pub use parent::Parent;
pub use shadow::{ShadowCaster, ShadowReceiver};
pub use visible::Visible;
