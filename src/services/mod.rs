//! Business logic layer for FinanceFlow
//!
//! Composes the ledger with its persistence adapter.

pub mod ledger;

pub use ledger::LedgerService;
