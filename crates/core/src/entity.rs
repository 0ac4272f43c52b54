//! Entity trait: identity attached to a value.

/// Entity marker + minimal interface.
///
/// Identity here is descriptive only; nothing in the workspace deduplicates
/// entities by id.
pub trait Entity {
    /// Identifier type.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
