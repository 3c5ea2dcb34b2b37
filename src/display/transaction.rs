//! Transaction display formatting
//!
//! Formats the transaction list and the balance summary for terminal output.

use crate::models::{Totals, Transaction};

/// Format a single transaction as a list row
pub fn format_transaction_row(txn: &Transaction, description_width: usize) -> String {
    format!(
        "{:>13}  {:<width$}  {:>14}  {}",
        txn.id().to_string(),
        txn.description(),
        txn.amount().format_signed(),
        txn.kind(),
        width = description_width,
    )
}

/// Format the transaction list as a table, in ledger order
pub fn format_transaction_list(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions yet.\n".to_string();
    }

    let description_width = transactions
        .iter()
        .map(|t| t.description().chars().count())
        .max()
        .unwrap_or(11)
        .max(11);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>13}  {:<width$}  {:>14}  {}\n",
        "ID",
        "Description",
        "Amount",
        "Type",
        width = description_width,
    ));
    output.push_str(&format!(
        "{:->13}  {:-<width$}  {:->14}  {:-<7}\n",
        "",
        "",
        "",
        "",
        width = description_width,
    ));

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, description_width));
        output.push('\n');
    }

    output
}

/// Format balance, income and expense
pub fn format_totals(totals: &Totals) -> String {
    format!(
        "Balance:  {:>14}\nIncome:   {:>14}\nExpense:  {:>14}\n",
        totals.balance.to_string(),
        totals.income.to_string(),
        totals.expense.to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ledger;
    use chrono::{TimeZone, Utc};

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        let t0 = Utc.timestamp_millis_opt(1_714_000_000_000).unwrap();
        ledger.add_at("Salary", 2000.0, t0).unwrap();
        ledger.add_at("Rent, April", -1200.0, t0).unwrap();
        ledger
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_transaction_list(&[]), "No transactions yet.\n");
    }

    #[test]
    fn test_list_rows() {
        let output = format_transaction_list(sample_ledger().list());
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Description"));
        assert!(lines[2].contains("1714000000000"));
        assert!(lines[2].contains("+$2,000.00"));
        assert!(lines[2].ends_with("Income"));
        assert!(lines[3].contains("1714000000001"));
        assert!(lines[3].contains("-$1,200.00"));
        assert!(lines[3].ends_with("Expense"));
    }

    #[test]
    fn test_totals() {
        let output = format_totals(&sample_ledger().totals());
        assert!(output.contains("Balance:"));
        assert!(output.contains("$800.00"));
        assert!(output.contains("$2,000.00"));
        assert!(output.contains("$1,200.00"));
    }
}
