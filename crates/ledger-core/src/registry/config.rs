//! Registry configuration.

use serde::{Deserialize, Serialize};

/// Tunables for a [`Registry`](super::Registry).
///
/// Deserializable with every field optional, so an empty document yields the
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// How many ids `register_action` may draw before giving up with
    /// `ActionIdExhausted`. Includes the first draw, so 1 means "no retry".
    pub max_action_id_attempts: u32,
}

impl RegistryConfig {
    pub const DEFAULT_MAX_ACTION_ID_ATTEMPTS: u32 = 16;
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_action_id_attempts: Self::DEFAULT_MAX_ACTION_ID_ATTEMPTS,
        }
    }
}
