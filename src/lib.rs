//! FinanceFlow - personal finance ledger
//!
//! This library records signed monetary transactions, derives running
//! totals, persists the ledger to a local key-value store and exports it as
//! CSV.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths, settings and logging setup
//! - `error`: Custom error types
//! - `models`: Money, transactions and the ledger
//! - `storage`: Key-value stores and the ledger persistence adapter
//! - `services`: Ledger plus write-through persistence
//! - `export`: CSV export
//! - `display`: Currency and table formatting
//! - `cli`: Command handlers for the `financeflow` binary
//!
//! # Example
//!
//! ```rust
//! use financeflow::models::Ledger;
//! use financeflow::storage::{LedgerStore, MemoryStore};
//!
//! let mut ledger = Ledger::new();
//! ledger.add("Salary", 2000.0)?;
//! ledger.add("Rent, April", -1200.0)?;
//! assert_eq!(ledger.totals().balance.to_string(), "$800.00");
//!
//! let mut store = LedgerStore::new(MemoryStore::new());
//! store.save(&ledger);
//! assert_eq!(store.load(), ledger.list());
//! # Ok::<(), financeflow::FinanceError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use display::format_currency;
pub use error::{FinanceError, FinanceResult};
pub use export::to_csv;
