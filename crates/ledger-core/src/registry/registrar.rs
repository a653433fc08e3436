//! Registrar: the only code path that mutates the store.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::Registry;
use crate::domain::{Action, ActionId, Item, ItemCategory, ItemId, RegistryError, Result};
use crate::ports::IdGenerator;
use crate::store::Store;

impl<C: ItemCategory, G: IdGenerator> Registry<C, G> {
    /// Insert `item`, rejecting a canonical id that is already present.
    pub fn register_item(&self, item: Item<C>) -> Result<()> {
        let id = item.id().clone();
        self.store().insert_item(item)?;
        debug!(item_id = %id, "registered item");
        Ok(())
    }

    /// Build an item from its parts and register it.
    ///
    /// An invalid `raw_id` fails with `InvalidIdentifier` before the store is
    /// touched.
    pub fn register_new_item(
        &self,
        raw_id: &str,
        category: C,
        name: impl Into<String>,
    ) -> Result<ItemId> {
        let item = Item::parse(raw_id, category, name)?;
        let id = item.id().clone();
        self.register_item(item)?;
        Ok(id)
    }

    /// Record an action on an existing item and return its fresh id.
    ///
    /// The existence check, id generation and insert all happen under one
    /// lock acquisition.
    pub fn register_action(
        &self,
        item_id: &str,
        description: impl Into<String>,
        cost: i64,
        performed_at: DateTime<Utc>,
    ) -> Result<ActionId> {
        let mut store = self.store();
        let item_id = store.lookup_item(item_id)?.id().clone();
        let action = Action::new(
            self.id_generator.generate_action_id(),
            item_id,
            description.into(),
            cost,
            performed_at,
        );
        let id = insert_with_fresh_id(
            &mut store,
            &self.id_generator,
            self.config.max_action_id_attempts,
            action,
        )?;
        debug!(action_id = %id, cost, "registered action");
        Ok(id)
    }
}

/// Insert `action`, regenerating its id on collision.
///
/// `max_attempts` counts every insert tried, the first one included. On
/// exhaustion nothing is inserted.
pub(crate) fn insert_with_fresh_id<C, G: IdGenerator>(
    store: &mut Store<C>,
    id_generator: &G,
    max_attempts: u32,
    mut action: Action,
) -> Result<ActionId> {
    let mut attempt = 1;
    loop {
        match store.try_insert_action(action) {
            Ok(id) => return Ok(id),
            Err(rejected) if attempt < max_attempts => {
                warn!(action_id = %rejected.id(), attempt, "action id collision, regenerating");
                attempt += 1;
                action = rejected.with_id(id_generator.generate_action_id());
            }
            Err(_) => {
                return Err(RegistryError::ActionIdExhausted {
                    attempts: max_attempts,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{IdError, ItemType};
    use crate::ports::id_generator::ScriptedIdGenerator;
    use crate::registry::RegistryBuilder;
    use chrono::TimeZone;
    use std::collections::HashSet;
    use ulid::Ulid;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    fn item(raw: &str, category: ItemType) -> Item<ItemType> {
        Item::parse(raw, category, format!("Item {raw}")).unwrap()
    }

    #[test]
    fn register_item_by_value_and_by_parts() {
        let registry = Registry::new();

        registry.register_item(item("A111", ItemType::A)).unwrap();
        let id = registry
            .register_new_item("a123", ItemType::A, "Item A1")
            .unwrap();

        assert_eq!(id.as_str(), "A123");
        let items: HashSet<_> = registry.all_items().into_iter().collect();
        assert_eq!(
            items,
            HashSet::from([item("A111", ItemType::A), item("A123", ItemType::A)])
        );
    }

    #[test]
    fn same_id_in_any_case_is_rejected() {
        let registry = Registry::new();
        registry.register_item(item("A123", ItemType::A)).unwrap();

        for raw in ["A123", "a123"] {
            let err = registry
                .register_new_item(raw, ItemType::B, "Other")
                .unwrap_err();
            assert!(matches!(err, RegistryError::ItemAlreadyRegistered(_)));
            assert!(err.to_string().contains("Item ID already registered"));
        }
        assert_eq!(registry.item_count(), 1);
    }

    #[test]
    fn convenience_constructor_propagates_invalid_identifier() {
        let registry: Registry<ItemType> = Registry::new();

        let err = registry
            .register_new_item("not valid", ItemType::A, "Bad")
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::InvalidIdentifier(IdError::NonAlphanumeric)
        );
        assert_eq!(registry.item_count(), 0);
    }

    #[test]
    fn action_on_unknown_item_leaves_actions_unchanged() {
        let registry = Registry::new();
        registry.register_item(item("C111", ItemType::C)).unwrap();
        registry.register_action("C111", "Change", 9001, t0()).unwrap();
        let before = registry.action_count();

        let err = registry
            .register_action("A123", "Throw", 5000, t0())
            .unwrap_err();

        assert_eq!(err, RegistryError::ItemNotFound("A123".to_string()));
        assert_eq!(registry.action_count(), before);
    }

    #[test]
    fn action_records_canonical_item_id_and_payload() {
        let registry = Registry::new();
        registry.register_item(item("C111", ItemType::C)).unwrap();

        let id = registry.register_action("c111", "Upgrade", 9001, t0()).unwrap();
        let action = registry.lookup_action(id).unwrap();

        assert_eq!(action.id(), id);
        assert_eq!(action.item_id().as_str(), "C111");
        assert_eq!(action.description(), "Upgrade");
        assert_eq!(action.cost(), 9001);
        assert_eq!(action.performed_at(), t0());
    }

    #[test]
    fn action_ids_are_pairwise_distinct() {
        let registry = Registry::new();
        registry.register_item(item("B123", ItemType::B)).unwrap();

        let ids: HashSet<_> = (0..500)
            .map(|i| registry.register_action("B123", "Meet", i, t0()).unwrap())
            .collect();

        assert_eq!(ids.len(), 500);
        assert_eq!(registry.action_count(), 500);
    }

    #[test]
    fn collision_is_retried_with_a_fresh_id() {
        let taken = ActionId::from_ulid(Ulid::from(7u128));
        let fresh = ActionId::from_ulid(Ulid::from(8u128));
        let registry = RegistryBuilder::<ItemType>::new()
            .id_generator(ScriptedIdGenerator::new([taken, taken, taken, fresh]))
            .build()
            .unwrap();
        registry.register_item(item("A123", ItemType::A)).unwrap();

        assert_eq!(registry.register_action("A123", "Throw", 1, t0()), Ok(taken));
        assert_eq!(registry.register_action("A123", "Throw", 2, t0()), Ok(fresh));

        assert_eq!(registry.action_count(), 2);
        assert_eq!(registry.lookup_action(fresh).unwrap().cost(), 2);
    }

    #[test]
    fn exhausted_retries_insert_nothing() {
        let taken = ActionId::from_ulid(Ulid::from(7u128));
        let registry = RegistryBuilder::<ItemType>::new()
            .max_action_id_attempts(3)
            .id_generator(ScriptedIdGenerator::stuck_on(taken))
            .build()
            .unwrap();
        registry.register_item(item("A123", ItemType::A)).unwrap();
        registry.register_action("A123", "Throw", 1, t0()).unwrap();

        let err = registry
            .register_action("A123", "Throw", 2, t0())
            .unwrap_err();

        assert_eq!(err, RegistryError::ActionIdExhausted { attempts: 3 });
        assert_eq!(registry.action_count(), 1);
        assert_eq!(registry.lookup_action(taken).unwrap().cost(), 1);
    }
}
