//! Inventory application service.
//!
//! Composes validation and a [`RecordStore`]:
//!
//! ```text
//! add:  validate date → validate fields → store.append
//! list: store.read_all → stable sort by name
//! ```
//!
//! Nothing is cached between calls; every `list` re-reads storage.

use thiserror::Error;
use tracing::debug;

use stockbook_core::{DomainError, ItemId};
use stockbook_inventory::{DELIMITER, InventoryRecord, date};

use crate::store::{RecordStore, StoreError};

#[derive(Debug, Error)]
pub enum InventoryError {
    /// Input rejected before anything was written.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Storage could not be written or read.
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug)]
pub struct InventoryService<S> {
    store: S,
}

impl<S> InventoryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: RecordStore> InventoryService<S> {
    /// Validate and append a new record.
    ///
    /// Fails with `DomainError::InvalidDate` for a bad registration date and
    /// `DomainError::Validation` when `id` or `name` would break the line
    /// format. In both cases storage is left untouched.
    pub fn add(
        &self,
        id: &str,
        name: &str,
        quantity: i64,
        registration_date: &str,
    ) -> Result<(), InventoryError> {
        date::validate(registration_date)?;
        ensure_single_field("id", id)?;
        ensure_single_field("name", name)?;

        let record = InventoryRecord::new(ItemId::new(id), name, quantity, registration_date);
        self.store.append(&record)?;

        debug!(item_id = %record.item_id(), "item added");
        Ok(())
    }

    /// All records, sorted ascending by name.
    ///
    /// Byte-wise comparison; records with equal names keep storage order.
    pub fn list(&self) -> Result<Vec<InventoryRecord>, InventoryError> {
        let mut records = self.store.read_all()?;
        // `sort_by` is stable.
        records.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(records)
    }
}

fn ensure_single_field(field: &str, value: &str) -> Result<(), DomainError> {
    if value.contains(DELIMITER) {
        return Err(DomainError::validation(format!(
            "{field} must not contain '{DELIMITER}'"
        )));
    }
    if value.contains(['\n', '\r']) {
        return Err(DomainError::validation(format!(
            "{field} must not contain line breaks"
        )));
    }
    Ok(())
}
