//! Key-value stores backing the ledger
//!
//! The ledger is persisted as a single text value under a fixed key. A store
//! only needs to get and set whole values.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{FinanceError, FinanceResult};

use super::file_io::{read_text, write_text_atomic};

/// A durable string-to-string store
pub trait KeyValueStore {
    /// Read the value at `key`, `None` if absent
    fn get(&self, key: &str) -> FinanceResult<Option<String>>;

    /// Write `value` at `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> FinanceResult<()>;
}

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`
    pub fn path_for(&self, key: &str) -> FinanceResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(FinanceError::Storage(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> FinanceResult<Option<String>> {
        read_text(self.path_for(key)?)
    }

    fn set(&mut self, key: &str, value: &str) -> FinanceResult<()> {
        write_text_atomic(self.path_for(key)?, value)
    }
}

/// In-process store, mainly for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> FinanceResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> FinanceResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path().join("data"));

        assert_eq!(store.get("financeflow_transactions").unwrap(), None);

        store.set("financeflow_transactions", "[]").unwrap();
        assert_eq!(
            store.get("financeflow_transactions").unwrap().as_deref(),
            Some("[]")
        );
        assert!(temp_dir
            .path()
            .join("data")
            .join("financeflow_transactions.json")
            .exists());
    }

    #[test]
    fn test_file_store_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());

        assert!(store.path_for("../escape").is_err());
        assert!(store.path_for("").is_err());
        assert!(store.path_for("a/b").is_err());
        assert!(store.path_for("financeflow_transactions").is_ok());
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(store.get("other").unwrap(), None);
    }
}
