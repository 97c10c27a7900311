use thiserror::Error;

/// Everything that can go wrong in holoplace.
#[derive(Error, Debug)]
pub enum HoloplaceError {
    /// The tracking provider can't run in this environment (eg. no camera access)
    #[error("This environment is not supported by the tracking provider")]
    UnsupportedEnvironment,
    /// The user declined camera access
    #[error("Camera permission was denied")]
    PermissionDenied,
    /// A loop mode outside of 0, 1 and 2 was requested
    #[error("Loop mode {0} is not supported - expected 0 (no loop), 1 (loop) or 2 (ping-pong)")]
    InvalidLoopMode(i32),
    /// The configuration was parsed but failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// The hologram player said it was created but had no mesh to give us
    #[error("The hologram player reported Created but returned no mesh")]
    HologramMeshMissing,
    /// A tracking operation was attempted before the camera was started
    #[error("The tracking provider has not been started")]
    TrackingNotStarted,
    /// The session is over
    #[error("Holoplace is shutting down")]
    ShuttingDown,
    /// The configuration could not be parsed
    #[error(transparent)]
    Config(#[from] serde_json::Error),
    #[allow(missing_docs)]
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[allow(missing_docs)]
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
