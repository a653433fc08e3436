//! ledger-core
//!
//! In-memory registry of catalog items and the costed, timestamped actions
//! performed on them, with aggregate queries over the action log.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ItemId, Item, Action, カテゴリ, errors）
//! - **ports**: 抽象化レイヤー（IdGenerator, Clock）
//! - **registry**: Registry 本体（builder, config, registrar, query）
//!
//! # Example
//! ```
//! use chrono::Utc;
//! use ledger_core::{ItemType, Registry};
//!
//! let registry = Registry::new();
//! registry.register_new_item("a123", ItemType::A, "Item A1")?;
//! registry.register_new_item("B456", ItemType::B, "Item B2")?;
//! registry.register_action("A123", "Throw", 5000, Utc::now())?;
//!
//! assert_eq!(registry.total_cost_by_item_id().get("A123"), Some(&5000));
//! assert!(registry.items_with_highest_cost_for_category(ItemType::B).is_none());
//! # Ok::<(), ledger_core::RegistryError>(())
//! ```

pub mod domain;
pub mod ports;
pub mod registry;

mod store;

pub use domain::{
    Action, ActionId, IdError, Item, ItemCategory, ItemClass, ItemFamily, ItemId, ItemKind,
    ItemType, RegistryError, Result,
};
pub use ports::{Clock, FixedClock, IdGenerator, RandomIdGenerator, SystemClock, UlidGenerator};
pub use registry::{BuildError, QueryEngine, Registry, RegistryBuilder, RegistryConfig};
