//! Category models.
//!
//! The registry is generic over [`ItemCategory`]: all it needs from a
//! category is a small, ordered tag ("class") to filter and group by.

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// A closed classification of items.
///
/// `Class` is the grouping key used by every category query. For a plain tag
/// it is the tag itself; for a variant carrying data it is the variant's
/// discriminant (see [`crate::domain::ItemKind`]).
pub trait ItemCategory: Clone + fmt::Debug {
    type Class: Copy + Eq + Hash + Ord + fmt::Debug;

    fn class(&self) -> Self::Class;
}

/// Plain item type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemType {
    A,
    B,
    C,
}

impl ItemType {
    pub const ALL: [ItemType; 3] = [ItemType::A, ItemType::B, ItemType::C];

    pub fn label(self) -> &'static str {
        match self {
            ItemType::A => "Type A",
            ItemType::B => "Type B",
            ItemType::C => "Type C",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl ItemCategory for ItemType {
    type Class = ItemType;

    fn class(&self) -> ItemType {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_is_its_own_class() {
        for tag in ItemType::ALL {
            assert_eq!(tag.class(), tag);
        }
    }

    #[test]
    fn displays_label() {
        assert_eq!(ItemType::A.to_string(), "Type A");
        assert_eq!(ItemType::C.to_string(), "Type C");
    }
}
