//! RegistryBuilder - registry の構築とワイヤリング
//!
//! # Fail-fast 設計
//! - 設定の矛盾は build() 時に BuildError として返す
//! - 構築後の Registry は常に有効な設定を持つ

use std::marker::PhantomData;

use super::{Registry, RegistryConfig};
use crate::domain::ItemCategory;
use crate::ports::{IdGenerator, RandomIdGenerator};

/// Builds a [`Registry`].
///
/// # 使用例
/// ```ignore
/// let registry = RegistryBuilder::<ItemType>::new()
///     .max_action_id_attempts(4)
///     .id_generator(UlidGenerator::new(SystemClock))
///     .build()?;
/// ```
pub struct RegistryBuilder<C, G = RandomIdGenerator> {
    config: RegistryConfig,
    id_generator: G,
    _category: PhantomData<fn() -> C>,
}

/// BuildError は registry 構築時のエラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("max_action_id_attempts must be at least 1")]
    ZeroIdAttempts,
}

impl<C: ItemCategory> RegistryBuilder<C> {
    pub fn new() -> Self {
        Self {
            config: RegistryConfig::default(),
            id_generator: RandomIdGenerator,
            _category: PhantomData,
        }
    }
}

impl<C: ItemCategory> Default for RegistryBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ItemCategory, G: IdGenerator> RegistryBuilder<C, G> {
    /// Replace the whole configuration.
    pub fn config(mut self, config: RegistryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn max_action_id_attempts(mut self, attempts: u32) -> Self {
        self.config.max_action_id_attempts = attempts;
        self
    }

    /// Swap the id source (e.g. `UlidGenerator` for time-sortable ids).
    pub fn id_generator<G2: IdGenerator>(self, id_generator: G2) -> RegistryBuilder<C, G2> {
        RegistryBuilder {
            config: self.config,
            id_generator,
            _category: PhantomData,
        }
    }

    pub fn build(self) -> Result<Registry<C, G>, BuildError> {
        if self.config.max_action_id_attempts == 0 {
            return Err(BuildError::ZeroIdAttempts);
        }
        Ok(Registry::from_parts(self.config, self.id_generator))
    }
}
