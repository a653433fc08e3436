//! Catalog entries.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::category::ItemCategory;
use super::item_id::{IdError, ItemId};

/// A uniquely identified catalog entry.
///
/// Identity is the canonical id alone: two items with the same id are equal
/// even if their names or categories differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item<C> {
    id: ItemId,
    name: String,
    category: C,
}

impl<C> Item<C> {
    pub fn new(id: ItemId, category: C, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category,
        }
    }

    /// Validate `raw_id` and build the item.
    pub fn parse(raw_id: &str, category: C, name: impl Into<String>) -> Result<Self, IdError> {
        Ok(Self::new(ItemId::parse(raw_id)?, category, name))
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &C {
        &self.category
    }
}

impl<C: ItemCategory> Item<C> {
    pub fn class(&self) -> C::Class {
        self.category.class()
    }
}

impl<C> PartialEq for Item<C> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<C> Eq for Item<C> {}

impl<C> Hash for Item<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
