/// The Visible component determines whether a given entity is drawn.
///
/// Basic usage:
/// ```ignore
/// world.insert_one(entity, Visible {})
/// world.remove_one::<Visible>(entity)
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Visible {}
