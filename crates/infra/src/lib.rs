//! Infrastructure layer: file storage, configuration, application service.

pub mod config;
pub mod service;
pub mod store;

pub use config::StoreConfig;
pub use service::{InventoryError, InventoryService};
pub use store::{CsvFileStore, InMemoryRecordStore, RecordStore, StoreError};
