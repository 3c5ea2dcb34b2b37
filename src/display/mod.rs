//! Display formatting for terminal output
//!
//! Currency strings, the transaction table and the totals summary.

pub mod currency;
pub mod transaction;

pub use currency::format_currency;
pub use transaction::{format_totals, format_transaction_list, format_transaction_row};
