/// The entity's geometry casts shadows onto [`ShadowReceiver`]s
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShadowCaster;

/// The entity only exists to show shadows cast onto it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShadowReceiver;
