//! Core data models for FinanceFlow
//!
//! This module contains the ledger domain: money amounts, transaction ids,
//! transactions, and the ledger that owns them.

pub mod ids;
pub mod ledger;
pub mod money;
pub mod transaction;

pub use ids::TransactionId;
pub use ledger::{Ledger, Totals};
pub use money::{parse_amount, Money, MoneyParseError};
pub use transaction::{Transaction, TransactionKind};
