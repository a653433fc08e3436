//! Authoritative collections behind the registry lock.

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::domain::item_id::canonicalize;
use crate::domain::{Action, ActionId, Item, ItemId, RegistryError, Result};

/// Items and actions, both insertion-ordered.
///
/// Design:
/// - This is the single source of truth; everything else derives from it.
/// - Only ever reached through `Registry`, which holds it under one mutex.
/// - Insertion order is kept so snapshots and time-sorted views are
///   deterministic on ties.
#[derive(Clone)]
pub(crate) struct Store<C> {
    items: IndexMap<ItemId, Item<C>>,
    actions: IndexMap<ActionId, Action>,
}

impl<C> Store<C> {
    pub(crate) fn new() -> Self {
        Self {
            items: IndexMap::new(),
            actions: IndexMap::new(),
        }
    }

    /// Lookup by raw id; the argument is canonicalized first.
    pub(crate) fn lookup_item(&self, raw_id: &str) -> Result<&Item<C>> {
        self.items
            .get(canonicalize(raw_id).as_str())
            .ok_or_else(|| RegistryError::ItemNotFound(raw_id.to_string()))
    }

    pub(crate) fn item(&self, id: &ItemId) -> Option<&Item<C>> {
        self.items.get(id)
    }

    pub(crate) fn lookup_action(&self, id: ActionId) -> Result<&Action> {
        self.actions
            .get(&id)
            .ok_or(RegistryError::ActionNotFound(id))
    }

    pub(crate) fn items(&self) -> impl Iterator<Item = &Item<C>> {
        self.items.values()
    }

    pub(crate) fn actions(&self) -> impl Iterator<Item = &Action> {
        self.actions.values()
    }

    pub(crate) fn item_count(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn action_count(&self) -> usize {
        self.actions.len()
    }

    pub(crate) fn insert_item(&mut self, item: Item<C>) -> Result<()> {
        match self.items.entry(item.id().clone()) {
            Entry::Occupied(e) => Err(RegistryError::ItemAlreadyRegistered(e.key().clone())),
            Entry::Vacant(e) => {
                e.insert(item);
                Ok(())
            }
        }
    }

    /// Insert unless the id is taken; a rejected action is handed back
    /// unchanged so the caller can retry it under a new id.
    pub(crate) fn try_insert_action(&mut self, action: Action) -> Result<ActionId, Action> {
        match self.actions.entry(action.id()) {
            Entry::Occupied(_) => Err(action),
            Entry::Vacant(e) => {
                let id = action.id();
                e.insert(action);
                Ok(id)
            }
        }
    }
}

impl<C: Clone> Store<C> {
    pub(crate) fn all_items(&self) -> Vec<Item<C>> {
        self.items.values().cloned().collect()
    }

    pub(crate) fn all_actions(&self) -> Vec<Action> {
        self.actions.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemType;
    use chrono::Utc;
    use ulid::Ulid;

    fn item(raw: &str, category: ItemType) -> Item<ItemType> {
        Item::parse(raw, category, raw).unwrap()
    }

    fn action(id: ActionId, item_id: &str) -> Action {
        Action::new(
            id,
            ItemId::parse(item_id).unwrap(),
            "Lift".to_string(),
            1,
            Utc::now(),
        )
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut store = Store::new();
        store.insert_item(item("abc123", ItemType::A)).unwrap();

        assert_eq!(store.lookup_item("ABC123").unwrap().id().as_str(), "ABC123");
        assert_eq!(store.lookup_item("aBc123").unwrap().name(), "abc123");
    }

    #[test]
    fn lookup_of_missing_or_malformed_id_is_not_found() {
        let store: Store<ItemType> = Store::new();

        assert_eq!(
            store.lookup_item("nope").unwrap_err(),
            RegistryError::ItemNotFound("nope".to_string())
        );
        assert!(matches!(
            store.lookup_item("not an id"),
            Err(RegistryError::ItemNotFound(_))
        ));
    }

    #[test]
    fn duplicate_item_is_rejected_and_first_is_kept() {
        let mut store = Store::new();
        store.insert_item(item("A123", ItemType::A)).unwrap();

        let err = store.insert_item(item("a123", ItemType::B)).unwrap_err();
        assert_eq!(
            err,
            RegistryError::ItemAlreadyRegistered(ItemId::parse("A123").unwrap())
        );
        assert_eq!(store.item_count(), 1);
        assert_eq!(*store.lookup_item("A123").unwrap().category(), ItemType::A);
    }

    #[test]
    fn colliding_action_is_handed_back() {
        let mut store: Store<ItemType> = Store::new();
        let id = ActionId::from_ulid(Ulid::new());

        assert_eq!(store.try_insert_action(action(id, "A1")), Ok(id));

        let rejected = store.try_insert_action(action(id, "B1")).unwrap_err();
        assert_eq!(rejected.item_id().as_str(), "B1");
        assert_eq!(store.action_count(), 1);
        assert_eq!(store.lookup_action(id).unwrap().item_id().as_str(), "A1");
    }

    #[test]
    fn snapshots_are_detached_and_ordered() {
        let mut store = Store::new();
        for raw in ["C1", "A1", "B1"] {
            store.insert_item(item(raw, ItemType::C)).unwrap();
        }

        let mut snapshot = store.all_items();
        snapshot.clear();

        let ids: Vec<_> = store.all_items().iter().map(|i| i.id().to_string()).collect();
        assert_eq!(ids, ["C1", "A1", "B1"]);
    }

    #[test]
    fn missing_action_is_not_found() {
        let store: Store<ItemType> = Store::new();
        assert_eq!(
            store.lookup_action(ActionId::nil()).unwrap_err(),
            RegistryError::ActionNotFound(ActionId::nil())
        );
    }
}
