use crate::contexts::hologram_context::HologramMeshHandle;

/// The Hologram component marks the root of the mesh handed to us by the hologram player.
///
/// It is only ever spawned by `attach_hologram_mesh`, once the player has reported Created.
///
/// Basic usage:
/// ```ignore
/// use holoplace::components::Hologram;
/// let is_loaded = world.query_mut::<&Hologram>().into_iter().next().is_some();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hologram {
    /// The player's handle for the root node
    pub handle: HologramMeshHandle,
}
