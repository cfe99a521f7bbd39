//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// The key is what collections order and deduplicate entities by; every
/// other field may change without affecting an entity's position.
pub trait Entity {
    /// Natural key identifying the entity (e.g. a stock item's title).
    type Key: Ord + ?Sized + core::fmt::Debug;

    /// Returns the entity key.
    fn key(&self) -> &Self::Key;
}
