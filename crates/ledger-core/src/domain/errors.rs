//! Registry errors.

use thiserror::Error;

use super::ids::ActionId;
use super::item_id::{IdError, ItemId};

/// Every way a registry operation can be rejected.
///
/// None of these are retried by the registry itself; a failed registration
/// leaves the store untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Carries the id as the caller spelled it; it may not be a valid id.
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Action not found: {0}")]
    ActionNotFound(ActionId),

    #[error("Item ID already registered: {0}")]
    ItemAlreadyRegistered(ItemId),

    #[error(transparent)]
    InvalidIdentifier(#[from] IdError),

    #[error("could not find a free action id after {attempts} attempts")]
    ActionIdExhausted { attempts: u32 },
}

pub type Result<T, E = RegistryError> = std::result::Result<T, E>;
