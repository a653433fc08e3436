//! Domain model (identifiers, categories, items, actions, errors).
//!
//! Everything here is plain data. The registry in [`crate::registry`] owns
//! the collections; these types only know how to validate and compare
//! themselves.

pub mod action;
pub mod category;
pub mod errors;
pub mod ids;
pub mod item;
pub mod item_id;
pub mod kind;

pub use action::Action;
pub use category::{ItemCategory, ItemType};
pub use errors::{RegistryError, Result};
pub use ids::ActionId;
pub use item::Item;
pub use item_id::{IdError, ItemId, MAX_ITEM_ID_LEN};
pub use kind::{ItemClass, ItemFamily, ItemKind};
