//! Item identifiers: validation and canonical form.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest accepted item id, in characters.
pub const MAX_ITEM_ID_LEN: usize = 32;

/// Why a raw string was rejected as an item id.
///
/// Checks run in declaration order, so a 40-character id full of spaces is
/// reported as `TooLong`, not `NonAlphanumeric`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IdError {
    #[error("Item ID can't be empty.")]
    Empty,

    #[error("Item ID can't be longer than {max} characters.", max = MAX_ITEM_ID_LEN)]
    TooLong { len: usize },

    #[error("Item ID may only contain alphanumeric characters.")]
    NonAlphanumeric,
}

/// Canonical item id: 1..=32 ASCII alphanumerics, upper-cased.
///
/// Equality is therefore case-insensitive with respect to the raw input:
/// `abc123` and `ABC123` parse to the same `ItemId`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, IdError> {
        let raw = raw.as_ref();
        if raw.trim().is_empty() {
            return Err(IdError::Empty);
        }
        let len = raw.chars().count();
        if len > MAX_ITEM_ID_LEN {
            return Err(IdError::TooLong { len });
        }
        if !raw.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(IdError::NonAlphanumeric);
        }
        Ok(Self(canonicalize(raw)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Canonical lookup key for a raw, unvalidated id.
///
/// A string that would fail [`ItemId::parse`] canonicalizes to a key no
/// stored item can have, so lookups with it simply miss.
pub(crate) fn canonicalize(raw: &str) -> String {
    raw.to_ascii_uppercase()
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Keeps map lookups by `&str` working; the derived Hash matches `str`'s.
impl Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for ItemId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ItemId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for ItemId {
    type Error = IdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0
    }
}
