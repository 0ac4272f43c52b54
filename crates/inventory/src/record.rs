use stockbook_core::{Entity, ItemId};

/// One inventory line-item as stored on disk.
///
/// Immutable once built. The registration date is carried as the raw string
/// that was written; it is validated when a record is created through the
/// service, never when one is read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRecord {
    id: ItemId,
    name: String,
    quantity: i64,
    registration_date: String,
}

impl InventoryRecord {
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        quantity: i64,
        registration_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            registration_date: registration_date.into(),
        }
    }

    pub fn item_id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn registration_date(&self) -> &str {
        &self.registration_date
    }
}

impl Entity for InventoryRecord {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
