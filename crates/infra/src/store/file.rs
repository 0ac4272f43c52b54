use std::borrow::Cow;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};

use stockbook_inventory::{InventoryRecord, codec};

use super::{RecordStore, StoreError};
use crate::config::StoreConfig;

/// Flat-file store: one comma-separated record per line.
///
/// The file is opened and closed inside every call; no handle outlives an
/// operation. There is no locking, so a second process appending at the
/// same time can interleave lines.
#[derive(Debug, Clone)]
pub struct CsvFileStore {
    path: PathBuf,
}

impl CsvFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.path.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for CsvFileStore {
    #[instrument(skip(self, record), fields(path = %self.path.display(), item_id = %record.item_id()), err)]
    fn append(&self, record: &InventoryRecord) -> Result<(), StoreError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::io("open for append", &self.path, e))?;

        file.write_all(codec::encode(record).as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| StoreError::io("write", &self.path, e))?;

        debug!("record appended");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()), err)]
    fn read_all(&self) -> Result<Vec<InventoryRecord>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("inventory file not found; treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::io("open for read", &self.path, e)),
        };

        let mut reader = BufReader::new(file);
        let mut buf = Vec::new();
        let mut records = Vec::new();
        let mut line_no = 0usize;
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| StoreError::io("read", &self.path, e))?;
            if read == 0 {
                break;
            }
            line_no += 1;

            let line = String::from_utf8_lossy(&buf);
            if let Cow::Owned(_) = line {
                warn!(line = line_no, "replacing invalid UTF-8 in line");
            }

            match codec::decode(&line) {
                Ok(Some(record)) => records.push(record),
                Ok(None) => {}
                Err(err) => {
                    warn!(line = line_no, %err, "keeping malformed line with empty fields");
                    records.extend(codec::decode_lenient(&line));
                }
            }
        }

        debug!(count = records.len(), "records loaded");
        Ok(records)
    }
}
