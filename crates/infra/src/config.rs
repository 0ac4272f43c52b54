//! Configuration loading and representation.

use std::path::PathBuf;

/// Environment variable naming the inventory file.
pub const FILE_ENV_VAR: &str = "STOCKBOOK_FILE";

/// Inventory file used when nothing else is configured.
pub const DEFAULT_FILE: &str = "inventory.csv";

/// Where the file store keeps its records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read `STOCKBOOK_FILE` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset or blank values fall back to
    /// [`DEFAULT_FILE`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(FILE_ENV_VAR) {
            Some(path) if !path.trim().is_empty() => Self::new(path),
            _ => Self::default(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FILE)
    }
}
