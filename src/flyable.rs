//! The capability contract shared by everything that can fly.

use std::any::Any;

/// Anything that can take to the air.
///
/// Implementors are otherwise unrelated: a person, a bird and a toy all qualify
/// as long as they describe how they fly. There is no default body for `fly`,
/// so every implementor writes its own.
pub trait Flyable: Any {
    /// Describes how this entity flies, using its own attributes.
    fn fly(&self) -> String;

    /// Exposes the concrete value for narrowing. Implementors return `self`.
    fn as_any(&self) -> &dyn Any;
}
