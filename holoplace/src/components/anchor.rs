/// Marker component for the instant world anchor.
///
/// Everything that should appear fixed in the room (lights, the hotspot, the shadow plane and
/// eventually the hologram) is parented to the single entity carrying this component. Its
/// [`super::LocalTransform`] is the anchor pose: written by `anchor_system` each frame until the
/// hologram is placed, then left alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anchor;
