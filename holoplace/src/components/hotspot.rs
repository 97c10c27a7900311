/// Marker for the decal that shows where the hologram will land.
///
/// Its [`super::Material`] opacity is 1 while the hologram is unplaced and 0 once placed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hotspot;
