//! Storage layer for FinanceFlow
//!
//! Provides a small key-value abstraction with an atomic-write file backend,
//! and the ledger persistence adapter built on top of it.

pub mod file_io;
pub mod kv;
pub mod transactions;

pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use transactions::{LedgerStore, STORAGE_KEY};

use crate::config::paths::FinancePaths;
use crate::error::FinanceError;

/// Open the file-backed ledger store under the configured data directory
pub fn open_file_store(paths: &FinancePaths) -> Result<LedgerStore<FileStore>, FinanceError> {
    paths.ensure_directories()?;
    Ok(LedgerStore::new(FileStore::new(paths.data_dir())))
}
