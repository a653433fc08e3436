//! Read-only derived views over the store.
//!
//! A [`QueryEngine`] borrows the store immutably, so it cannot mutate it by
//! construction. Obtain one through [`Registry::with_query`] to run several
//! queries against one consistent state, or call the per-query shortcuts on
//! `Registry`.
//!
//! [`Registry::with_query`]: super::Registry::with_query

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::domain::{Action, ActionId, Item, ItemCategory, ItemId, Result};
use crate::store::Store;

pub struct QueryEngine<'a, C> {
    store: &'a Store<C>,
}

impl<'a, C: ItemCategory> QueryEngine<'a, C> {
    pub(crate) fn new(store: &'a Store<C>) -> Self {
        Self { store }
    }

    /// Ids of every item whose class is `class`.
    pub fn item_ids_of_category(&self, class: C::Class) -> BTreeSet<ItemId> {
        self.store
            .items()
            .filter(|item| item.class() == class)
            .map(|item| item.id().clone())
            .collect()
    }

    /// Actions on items of `class`, oldest first.
    ///
    /// The sort is stable and the store iterates in registration order, so
    /// actions with equal timestamps come out in the order they were
    /// registered.
    pub fn actions_of_category_sorted_by_time(&self, class: C::Class) -> Vec<Action> {
        let ids = self.item_ids_of_category(class);
        let mut actions: Vec<Action> = self
            .store
            .actions()
            .filter(|action| ids.contains(action.item_id()))
            .cloned()
            .collect();
        actions.sort_by_key(Action::performed_at);
        actions
    }

    /// Sum of action costs per item.
    ///
    /// Only items with at least one action appear; there are no zero
    /// placeholders for untouched items. Totals are `i128` so that summing
    /// any number of `i64` costs cannot overflow.
    pub fn total_cost_by_item_id(&self) -> HashMap<ItemId, i128> {
        let mut totals = HashMap::new();
        for action in self.store.actions() {
            *totals.entry(action.item_id().clone()).or_insert(0) += i128::from(action.cost());
        }
        totals
    }

    /// [`total_cost_by_item_id`](Self::total_cost_by_item_id) restricted to
    /// items of `class`.
    pub fn total_cost_by_item_id_for_category(&self, class: C::Class) -> HashMap<ItemId, i128> {
        let ids = self.item_ids_of_category(class);
        let mut totals = self.total_cost_by_item_id();
        totals.retain(|id, _| ids.contains(id));
        totals
    }

    /// Every item of `class` whose total cost equals the category maximum,
    /// mapped to that maximum.
    ///
    /// Ties are all kept. Returns `None` when no action was ever registered
    /// on an item of `class`; a category whose actions sum to zero still
    /// yields `Some`.
    pub fn items_with_highest_cost_for_category(
        &self,
        class: C::Class,
    ) -> Option<HashMap<Item<C>, i128>> {
        let totals = self.total_cost_by_item_id_for_category(class);
        let max = *totals.values().max()?;
        Some(
            totals
                .into_iter()
                .filter(|&(_, total)| total == max)
                .filter_map(|(id, total)| self.store.item(&id).map(|item| (item.clone(), total)))
                .collect(),
        )
    }

    /// Items grouped by class, each group in registration order.
    ///
    /// With `filter`, only items whose class is listed are considered. Only
    /// populated classes get a bucket: a listed class with no items is left
    /// out rather than mapped to an empty vector, in both the filtered and
    /// unfiltered call.
    pub fn partition_by_concrete_class(
        &self,
        filter: Option<&[C::Class]>,
    ) -> BTreeMap<C::Class, Vec<Item<C>>> {
        let wanted: Option<HashSet<C::Class>> = filter.map(|classes| classes.iter().copied().collect());
        let mut buckets: BTreeMap<C::Class, Vec<Item<C>>> = BTreeMap::new();
        for item in self.store.items() {
            let class = item.class();
            if wanted.as_ref().is_some_and(|wanted| !wanted.contains(&class)) {
                continue;
            }
            buckets.entry(class).or_default().push(item.clone());
        }
        buckets
    }

    /// An action together with the item it was performed on.
    pub fn action_with_item(&self, id: ActionId) -> Result<(Action, Item<C>)> {
        let action = self.store.lookup_action(id)?;
        let item = self.store.lookup_item(action.item_id().as_str())?;
        Ok((action.clone(), item.clone()))
    }
}
