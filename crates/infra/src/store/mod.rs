//! Record storage.
//!
//! `RecordStore` is the seam between the service and wherever records live.
//! [`CsvFileStore`] is the production backend; [`InMemoryRecordStore`] backs
//! tests.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use stockbook_inventory::InventoryRecord;

pub mod file;
pub mod in_memory;

pub use file::CsvFileStore;
pub use in_memory::InMemoryRecordStore;

/// Append-only record storage.
pub trait RecordStore {
    /// Persist one record after all previously appended ones.
    fn append(&self, record: &InventoryRecord) -> Result<(), StoreError>;

    /// Every stored record, in append order.
    ///
    /// Storage that does not exist yet reads as empty.
    fn read_all(&self) -> Result<Vec<InventoryRecord>, StoreError>;
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to {op} {}: {source}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("store lock poisoned")]
    Poisoned,
}

impl StoreError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }
}

impl<S: RecordStore + ?Sized> RecordStore for &S {
    fn append(&self, record: &InventoryRecord) -> Result<(), StoreError> {
        (**self).append(record)
    }

    fn read_all(&self) -> Result<Vec<InventoryRecord>, StoreError> {
        (**self).read_all()
    }
}
