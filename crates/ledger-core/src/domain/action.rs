//! Actions: timestamped, costed events on an item.

use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::ActionId;
use super::item_id::ItemId;

/// One event performed on one item.
///
/// Actions reference their item by id only. They are built by the registry,
/// which assigns `id`, so there is no public constructor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    id: ActionId,
    item_id: ItemId,
    description: String,
    cost: i64,
    performed_at: DateTime<Utc>,
}

impl Action {
    pub(crate) fn new(
        id: ActionId,
        item_id: ItemId,
        description: String,
        cost: i64,
        performed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            item_id,
            description,
            cost,
            performed_at,
        }
    }

    /// Same action under a freshly generated id (collision retry).
    pub(crate) fn with_id(mut self, id: ActionId) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> ActionId {
        self.id
    }

    pub fn item_id(&self) -> &ItemId {
        &self.item_id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn cost(&self) -> i64 {
        self.cost
    }

    pub fn performed_at(&self) -> DateTime<Utc> {
        self.performed_at
    }
}

impl PartialEq for Action {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Action {}

impl Hash for Action {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ulid::Ulid;

    fn action(id: ActionId, cost: i64) -> Action {
        Action::new(
            id,
            ItemId::parse("A123").unwrap(),
            "Throw".to_string(),
            cost,
            Utc::now(),
        )
    }

    #[test]
    fn equality_is_by_id_only() {
        let id = ActionId::from_ulid(Ulid::new());
        assert_eq!(action(id, 1), action(id, 2));
        assert_ne!(action(id, 1), action(ActionId::from_ulid(Ulid::new()), 1));
    }

    #[test]
    fn with_id_keeps_payload() {
        let original = action(ActionId::nil(), 5000);
        let fresh = ActionId::from_ulid(Ulid::new());
        let moved = original.clone().with_id(fresh);

        assert_eq!(moved.id(), fresh);
        assert_eq!(moved.item_id(), original.item_id());
        assert_eq!(moved.description(), "Throw");
        assert_eq!(moved.cost(), 5000);
        assert_eq!(moved.performed_at(), original.performed_at());
    }
}
