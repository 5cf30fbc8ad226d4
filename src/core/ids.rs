//! Item and group identifiers.
//!
//! Puzzle documents address tiles and categories by string ids. Inside the
//! engine those strings are wrapped in cheap-to-clone newtypes so that board
//! orderings, selections, and history entries can share them freely.
//!
//! ## Construction
//!
//! Neither id type has a public constructor. The only way to obtain one is
//! from a validated [`Puzzle`](crate::puzzle::Puzzle), which guarantees that
//! every id handed to the engine actually exists in the puzzle it is played
//! against. Use `Puzzle::item_id` / `Puzzle::group_id` to resolve raw
//! strings coming from a frontend.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

/// Identifier of a single tile, unique within its puzzle.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(Arc<str>);

impl ItemId {
    pub(crate) fn new(raw: &str) -> Self {
        Self(Arc::from(raw))
    }

    /// Get the raw id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Item({})", self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a category group, unique within its puzzle.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct GroupId(Arc<str>);

impl GroupId {
    pub(crate) fn new(raw: &str) -> Self {
        Self(Arc::from(raw))
    }

    /// Get the raw id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for GroupId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Group({})", self.0)
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    #[test]
    fn test_item_id_display_and_debug() {
        let id = ItemId::new("apple");
        assert_eq!(id.as_str(), "apple");
        assert_eq!(format!("{}", id), "apple");
        assert_eq!(format!("{:?}", id), "Item(apple)");
    }

    #[test]
    fn test_group_id_display_and_debug() {
        let id = GroupId::new("fruit");
        assert_eq!(format!("{}", id), "fruit");
        assert_eq!(format!("{:?}", id), "Group(fruit)");
    }

    #[test]
    fn test_lookup_by_str() {
        let mut map = FxHashMap::default();
        map.insert(ItemId::new("a"), 1usize);

        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(map.get("b"), None);
    }

    #[test]
    fn test_clone_shares_storage() {
        let id = ItemId::new("shared");
        let copy = id.clone();
        assert_eq!(id, copy);
        assert!(std::ptr::eq(id.as_str(), copy.as_str()));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&GroupId::new("g1")).unwrap();
        assert_eq!(json, "\"g1\"");
    }
}
