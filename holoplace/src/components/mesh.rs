/// Primitive geometry the renderer knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mesh {
    /// A flat plane in XY, facing +Z
    Plane {
        /// Width along X
        width: f32,
        /// Height along Y
        height: f32,
    },
    /// Geometry owned by the hologram player, identified by its handle
    Hologram(crate::contexts::hologram_context::HologramMeshHandle),
}
