//! Transaction CLI commands
//!
//! Add, list, delete and summarize transactions.

use crate::display::{format_totals, format_transaction_list};
use crate::error::FinanceResult;
use crate::models::TransactionId;
use crate::services::LedgerService;
use crate::storage::KeyValueStore;

/// Handle `add`
pub fn handle_add<S: KeyValueStore>(
    service: &mut LedgerService<S>,
    description: &str,
    amount: &str,
) -> FinanceResult<()> {
    let txn = service.add_text(description, amount)?;
    println!(
        "Added {} ({}): {} {}",
        txn.kind(),
        txn.id(),
        txn.description(),
        txn.amount().format_signed()
    );
    Ok(())
}

/// Handle `list`
pub fn handle_list<S: KeyValueStore>(service: &LedgerService<S>) -> FinanceResult<()> {
    print!("{}", format_transaction_list(service.list()));
    Ok(())
}

/// Handle `delete`
pub fn handle_delete<S: KeyValueStore>(
    service: &mut LedgerService<S>,
    id: TransactionId,
) -> FinanceResult<()> {
    match service.remove(id) {
        Some(txn) => println!("Deleted {}: {}", id, txn),
        None => println!("No transaction with id {}; nothing to delete.", id),
    }
    Ok(())
}

/// Handle `summary`
pub fn handle_summary<S: KeyValueStore>(service: &LedgerService<S>) -> FinanceResult<()> {
    print!("{}", format_totals(&service.totals()));
    Ok(())
}
