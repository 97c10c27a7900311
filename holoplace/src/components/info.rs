/// Component that adds some information about the entity
/// Useful for debugging - added to everything `compose_scene` creates
#[derive(Debug, Clone, Eq, PartialEq, Hash, Default)]
pub struct Info {
    /// A helpful name
    pub name: String,
}

impl Info {
    /// Create an `Info` with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
