//! Ledger model
//!
//! The ledger owns the ordered list of transactions. It is the only place
//! transactions are created or destroyed, and every aggregate is derived from
//! the list on demand.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::ids::TransactionId;
use super::money::{self, Money};
use super::transaction::Transaction;
use crate::error::{FinanceError, FinanceResult};

/// Derived aggregates over the ledger's amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    /// Sum of all amounts
    pub balance: Money,
    /// Sum of all positive amounts
    pub income: Money,
    /// Sum of the absolute values of all negative amounts
    pub expense: Money,
}

/// Ordered collection of transactions, insertion order preserved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from previously stored transactions
    ///
    /// Every transaction must satisfy the ledger invariants and ids must be
    /// unique; otherwise nothing is accepted.
    pub fn from_transactions(transactions: Vec<Transaction>) -> FinanceResult<Self> {
        let mut seen = HashSet::with_capacity(transactions.len());
        for txn in &transactions {
            txn.validate()?;
            if !seen.insert(txn.id()) {
                return Err(FinanceError::Duplicate(txn.id()));
            }
        }
        Ok(Self { transactions })
    }

    /// Parse user-entered amount text, reporting failures against the amount field
    pub fn parse_amount(text: &str) -> FinanceResult<f64> {
        money::parse_amount(text).map_err(|e| FinanceError::invalid_amount(e.to_string()))
    }

    /// Add a transaction created now
    pub fn add(&mut self, description: &str, amount: f64) -> FinanceResult<Transaction> {
        self.add_at(description, amount, Utc::now())
    }

    /// Add a transaction with an explicit creation instant
    ///
    /// The description is trimmed; it must not be empty. The amount must be
    /// finite and non-zero; it is kept exactly as given. On failure the
    /// ledger is untouched.
    pub fn add_at(
        &mut self,
        description: &str,
        amount: f64,
        now: DateTime<Utc>,
    ) -> FinanceResult<Transaction> {
        let description = description.trim();
        if description.is_empty() {
            return Err(FinanceError::invalid_description(
                "Please enter a transaction description",
            ));
        }

        let amount = Money::from_f64(amount)
            .filter(|m| !m.is_zero())
            .ok_or_else(|| {
                FinanceError::invalid_amount("Please enter a valid amount (non-zero number)")
            })?;

        // Stored timestamps have millisecond resolution
        let now = DateTime::<Utc>::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now);

        let txn = Transaction::new(self.next_id(now)?, description, amount, now);
        debug!(id = %txn.id(), amount = %txn.amount(), "transaction added");
        self.transactions.push(txn.clone());
        Ok(txn)
    }

    /// Pick an id for a transaction created at `now`
    ///
    /// Seeded from the clock, but always above every existing id so two
    /// transactions in the same millisecond never collide.
    fn next_id(&self, now: DateTime<Utc>) -> FinanceResult<TransactionId> {
        let candidate = TransactionId::from_timestamp(now);
        match self.transactions.iter().map(Transaction::id).max() {
            Some(last) if candidate <= last => {
                last.next().ok_or(FinanceError::IdsExhausted(last))
            }
            _ => Ok(candidate),
        }
    }

    /// Remove the transaction with the given id
    ///
    /// Returns the removed transaction, or `None` if no transaction had that
    /// id. Removing an absent id is not an error.
    pub fn remove(&mut self, id: TransactionId) -> Option<Transaction> {
        let index = self.transactions.iter().position(|t| t.id() == id)?;
        let removed = self.transactions.remove(index);
        debug!(id = %id, "transaction removed");
        Some(removed)
    }

    /// Transactions in insertion order
    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn into_transactions(self) -> Vec<Transaction> {
        self.transactions
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id() == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Compute balance, income and expense from scratch
    ///
    /// Balance is derived as income minus expense, so the two always agree
    /// even when a sum saturates.
    pub fn totals(&self) -> Totals {
        let income: Money = self
            .transactions
            .iter()
            .map(Transaction::amount)
            .filter(Money::is_positive)
            .sum();

        let expense: Money = self
            .transactions
            .iter()
            .map(Transaction::amount)
            .filter(Money::is_negative)
            .map(|m| m.abs())
            .sum();

        Totals {
            balance: income - expense,
            income,
            expense,
        }
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Field;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.add_at("Salary", 2000.0, at(1_000)).unwrap();
        ledger.add_at("Rent, April", -1200.0, at(2_000)).unwrap();
        ledger.add_at("Coffee", -3.5, at(3_000)).unwrap();
        ledger
    }

    #[test]
    fn test_add_appends_in_order() {
        let ledger = sample_ledger();
        let names: Vec<_> = ledger.list().iter().map(|t| t.description()).collect();
        assert_eq!(names, vec!["Salary", "Rent, April", "Coffee"]);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_add_returns_transaction() {
        let mut ledger = Ledger::new();
        let txn = ledger.add_at("  Groceries  ", -54.25, at(5_000)).unwrap();

        assert_eq!(txn.description(), "Groceries");
        assert_eq!(txn.amount(), Money::from_cents(-5425));
        assert_eq!(txn.id().as_i64(), 5_000);
        assert_eq!(txn.created_at(), at(5_000));
        assert_eq!(ledger.get(txn.id()), Some(&txn));
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let mut ledger = sample_ledger();
        let before = ledger.clone();

        let err = ledger.add("", 10.0).unwrap_err();
        assert_eq!(err.invalid_field(), Some(Field::Description));

        let err = ledger.add("   ", 10.0).unwrap_err();
        assert_eq!(err.invalid_field(), Some(Field::Description));

        let err = ledger.add("coffee", 0.0).unwrap_err();
        assert_eq!(err.invalid_field(), Some(Field::Amount));

        let err = ledger.add("coffee", f64::NAN).unwrap_err();
        assert_eq!(err.invalid_field(), Some(Field::Amount));

        let err = ledger.add("coffee", f64::INFINITY).unwrap_err();
        assert_eq!(err.invalid_field(), Some(Field::Amount));

        let err = ledger.add("coffee", -0.0).unwrap_err();
        assert_eq!(err.invalid_field(), Some(Field::Amount));

        let err = ledger.add("coffee", 1e-40).unwrap_err();
        assert_eq!(err.invalid_field(), Some(Field::Amount));

        assert_eq!(ledger, before);
    }

    #[test]
    fn test_add_keeps_sub_cent_amounts() {
        let mut ledger = Ledger::new();
        let tiny = ledger.add_at("tiny", 0.001, at(1_000)).unwrap();
        ledger.add_at("tinier", -0.004, at(2_000)).unwrap();

        assert!(tiny.is_income());
        assert_eq!(tiny.amount().to_f64(), 0.001);

        let totals = ledger.totals();
        assert_eq!(totals.income, Money::from_f64(0.001).unwrap());
        assert_eq!(totals.expense, Money::from_f64(0.004).unwrap());
        assert_eq!(totals.balance, Money::from_f64(-0.003).unwrap());
        assert_eq!(totals.balance.to_string(), "-$0.00");
    }

    #[test]
    fn test_totals_of_huge_amounts() {
        let mut ledger = Ledger::new();
        ledger.add_at("a", 5.0e16, at(1_000)).unwrap();
        ledger.add_at("b", 5.0e16, at(2_000)).unwrap();
        ledger.add_at("c", -1.0, at(3_000)).unwrap();

        let totals = ledger.totals();
        assert_eq!(totals.income, Money::from_f64(1.0e17).unwrap());
        assert_eq!(totals.expense, Money::from_cents(100));
        assert_eq!(totals.balance.to_string(), "$99,999,999,999,999,999.00");
    }

    #[test]
    fn test_totals_saturate_instead_of_overflowing() {
        let mut ledger = Ledger::new();
        for i in 0..4 {
            ledger.add_at("max", 7.0e28, at(i)).unwrap();
            ledger.add_at("min", -7.0e28, at(100 + i)).unwrap();
        }

        let totals = ledger.totals();
        let ceiling = "$79,228,162,514,264,337,593,543,950,335.00";
        assert_eq!(totals.income.to_string(), ceiling);
        assert_eq!(totals.expense.to_string(), ceiling);
        assert!(totals.balance.is_zero());
    }

    #[test]
    fn test_add_after_highest_possible_id_fails_cleanly() {
        let stored = Transaction::new(
            TransactionId::from_raw(i64::MAX),
            "x",
            Money::from_cents(100),
            at(1_000),
        );
        let mut ledger = Ledger::from_transactions(vec![stored]).unwrap();
        let before = ledger.clone();

        let err = ledger.add("y", 2.0).unwrap_err();
        assert!(matches!(err, FinanceError::IdsExhausted(id) if id.as_i64() == i64::MAX));
        assert_eq!(ledger, before);

        ledger.remove(TransactionId::from_raw(i64::MAX));
        assert!(ledger.add("y", 2.0).is_ok());
    }

    #[test]
    fn test_same_millisecond_ids_do_not_collide() {
        let mut ledger = Ledger::new();
        let a = ledger.add_at("A", 1.0, at(7_000)).unwrap();
        let b = ledger.add_at("B", 2.0, at(7_000)).unwrap();
        let c = ledger.add_at("C", 3.0, at(6_999)).unwrap();

        assert_eq!(a.id().as_i64(), 7_000);
        assert_eq!(b.id().as_i64(), 7_001);
        assert_eq!(c.id().as_i64(), 7_002);
        assert_eq!(b.created_at(), at(7_000));
        assert_eq!(c.created_at(), at(6_999));
    }

    #[test]
    fn test_remove() {
        let mut ledger = sample_ledger();
        let rent_id = ledger.list()[1].id();

        let removed = ledger.remove(rent_id).unwrap();
        assert_eq!(removed.description(), "Rent, April");
        assert_eq!(ledger.len(), 2);
        assert!(ledger.get(rent_id).is_none());
        assert_eq!(ledger.list()[1].description(), "Coffee");
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut ledger = sample_ledger();
        let before = ledger.clone();
        let totals = ledger.totals();

        assert!(ledger.remove(TransactionId::from_raw(42)).is_none());
        assert_eq!(ledger.list(), before.list());
        assert_eq!(ledger.totals(), totals);
    }

    #[test]
    fn test_totals() {
        let totals = sample_ledger().totals();
        assert_eq!(totals.income, Money::from_cents(200000));
        assert_eq!(totals.expense, Money::from_cents(120350));
        assert_eq!(totals.balance, Money::from_cents(79650));
        assert_eq!(Ledger::new().totals(), Totals::default());
    }

    #[test]
    fn test_from_transactions_rejects_duplicates() {
        let ledger = sample_ledger();
        let mut txns = ledger.list().to_vec();
        txns.push(txns[0].clone());

        let err = Ledger::from_transactions(txns).unwrap_err();
        assert!(matches!(err, FinanceError::Duplicate(_)));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(Ledger::parse_amount("-$1,200.50").unwrap(), -1200.5);
        let err = Ledger::parse_amount("twelve").unwrap_err();
        assert_eq!(err.invalid_field(), Some(Field::Amount));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: balance is always income minus expense, and neither
        /// side of the split is ever negative.
        #[test]
        fn totals_are_consistent(
            amounts in prop::collection::vec(
                prop_oneof![
                    -1_000_000i64..1_000_000i64,
                    Just(i64::MAX),
                    Just(i64::MIN),
                ],
                0..40,
            )
        ) {
            let mut ledger = Ledger::new();
            for (i, cents) in amounts.iter().enumerate() {
                let _ = ledger.add_at("entry", *cents as f64 / 100.0, at(i as i64));
            }

            let totals = ledger.totals();
            prop_assert_eq!(totals.balance, totals.income - totals.expense);
            prop_assert!(!totals.income.is_negative());
            prop_assert!(!totals.expense.is_negative());
        }

        /// Property: any finite amount is either rejected or added, and the
        /// totals stay consistent even near the top of the range.
        #[test]
        fn totals_never_overflow(
            amounts in prop::collection::vec(
                prop_oneof![
                    -8.0e28f64..8.0e28f64,
                    prop::num::f64::NORMAL,
                ],
                0..40,
            )
        ) {
            let mut ledger = Ledger::new();
            for (i, amount) in amounts.iter().enumerate() {
                let _ = ledger.add_at("entry", *amount, at(i as i64));
            }

            let totals = ledger.totals();
            prop_assert_eq!(totals.balance, totals.income - totals.expense);
            prop_assert!(!totals.income.is_negative());
            prop_assert!(!totals.expense.is_negative());
        }

        /// Property: removing an id that is not present changes nothing.
        #[test]
        fn removing_absent_id_is_idempotent(
            amounts in prop::collection::vec(1i64..100_000i64, 0..20),
            missing in -1_000i64..1_000i64,
        ) {
            let mut ledger = Ledger::new();
            for (i, cents) in amounts.iter().enumerate() {
                ledger.add_at("entry", *cents as f64 / 100.0, at(10_000 + i as i64)).unwrap();
            }
            let before = ledger.clone();

            prop_assert!(ledger.remove(TransactionId::from_raw(missing)).is_none());
            prop_assert_eq!(ledger.list(), before.list());
            prop_assert_eq!(ledger.totals(), before.totals());
        }
    }
}
