//! The registry: store, registrar and query engine behind one lock.
//!
//! # 構成
//! - **Store** (`crate::store`): items / actions の正本
//! - **Registrar** (`registrar`): 挿入と action id の採番（衝突時は再生成）
//! - **QueryEngine** (`query`): 読み取り専用の集計ビュー
//!
//! Every public operation takes the single store mutex for its whole
//! duration, so a reader never observes a half-registered action.

mod builder;
mod config;
mod query;
mod registrar;

pub use self::builder::{BuildError, RegistryBuilder};
pub use self::config::RegistryConfig;
pub use self::query::QueryEngine;

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::{Action, ActionId, Item, ItemCategory, ItemId, Result};
use crate::ports::{IdGenerator, RandomIdGenerator};
use crate::store::Store;

/// In-memory registry of items and the actions performed on them.
///
/// `C` is the category model (e.g. `ItemType` or `ItemKind`), `G` the action
/// id source. Everything handed out is an owned copy.
pub struct Registry<C, G = RandomIdGenerator> {
    store: Mutex<Store<C>>,
    id_generator: G,
    config: RegistryConfig,
}

impl<C: ItemCategory> Registry<C> {
    /// Registry with default config and random action ids.
    pub fn new() -> Self {
        Self::from_parts(RegistryConfig::default(), RandomIdGenerator)
    }

    pub fn builder() -> RegistryBuilder<C> {
        RegistryBuilder::new()
    }
}

impl<C: ItemCategory> Default for Registry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ItemCategory, G: IdGenerator> Registry<C, G> {
    pub(crate) fn from_parts(config: RegistryConfig, id_generator: G) -> Self {
        Self {
            store: Mutex::new(Store::new()),
            id_generator,
            config,
        }
    }

    // Each mutation is a single map insert, so a poisoned lock still guards
    // a consistent store.
    fn store(&self) -> MutexGuard<'_, Store<C>> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Store lookups
    // ------------------------------------------------------------------

    /// Find an item by id, in any letter case.
    pub fn lookup_item(&self, id: &str) -> Result<Item<C>> {
        self.store().lookup_item(id).cloned()
    }

    pub fn lookup_action(&self, id: ActionId) -> Result<Action> {
        self.store().lookup_action(id).cloned()
    }

    /// Snapshot of all items in registration order.
    pub fn all_items(&self) -> Vec<Item<C>> {
        self.store().all_items()
    }

    /// Snapshot of all actions in registration order.
    pub fn all_actions(&self) -> Vec<Action> {
        self.store().all_actions()
    }

    pub fn item_count(&self) -> usize {
        self.store().item_count()
    }

    pub fn action_count(&self) -> usize {
        self.store().action_count()
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Run `f` against one consistent view of the store.
    ///
    /// The view is a snapshot copied under the lock, which is released
    /// before `f` runs. `f` may therefore call back into the registry;
    /// writes it makes are not visible through the engine it was given.
    pub fn with_query<R>(&self, f: impl FnOnce(&QueryEngine<'_, C>) -> R) -> R {
        let snapshot = self.store().clone();
        f(&QueryEngine::new(&snapshot))
    }

    // Single-query shortcuts read under the lock without copying; the
    // closures here never re-enter the registry.
    fn query<R>(&self, f: impl FnOnce(&QueryEngine<'_, C>) -> R) -> R {
        let store = self.store();
        f(&QueryEngine::new(&store))
    }

    pub fn item_ids_of_category(&self, class: C::Class) -> BTreeSet<ItemId> {
        self.query(|q| q.item_ids_of_category(class))
    }

    pub fn actions_of_category_sorted_by_time(&self, class: C::Class) -> Vec<Action> {
        self.query(|q| q.actions_of_category_sorted_by_time(class))
    }

    pub fn total_cost_by_item_id(&self) -> HashMap<ItemId, i128> {
        self.query(|q| q.total_cost_by_item_id())
    }

    pub fn total_cost_by_item_id_for_category(&self, class: C::Class) -> HashMap<ItemId, i128> {
        self.query(|q| q.total_cost_by_item_id_for_category(class))
    }

    pub fn items_with_highest_cost_for_category(
        &self,
        class: C::Class,
    ) -> Option<HashMap<Item<C>, i128>> {
        self.query(|q| q.items_with_highest_cost_for_category(class))
    }

    pub fn partition_by_concrete_class(
        &self,
        filter: Option<&[C::Class]>,
    ) -> BTreeMap<C::Class, Vec<Item<C>>> {
        self.query(|q| q.partition_by_concrete_class(filter))
    }

    pub fn action_with_item(&self, id: ActionId) -> Result<(Action, Item<C>)> {
        self.query(|q| q.action_with_item(id))
    }
}
