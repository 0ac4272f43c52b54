//! Inventory domain module.
//!
//! Records, registration date validation and the line codec. Pure logic:
//! no file handles, no console.

pub mod codec;
pub mod date;
pub mod record;

pub use codec::{CodecError, DELIMITER, QUANTITY_FALLBACK};
pub use record::InventoryRecord;
