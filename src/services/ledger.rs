//! Ledger service
//!
//! Owns the single in-memory [`Ledger`] and its persistence adapter. The
//! ledger is hydrated once on open, and every successful mutation is written
//! through to the store before the call returns.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone, Utc};
use tracing::info;

use crate::error::FinanceResult;
use crate::export;
use crate::models::{Ledger, Totals, Transaction, TransactionId};
use crate::storage::{KeyValueStore, LedgerStore};

/// Service for transaction management
pub struct LedgerService<S: KeyValueStore> {
    ledger: Ledger,
    store: LedgerStore<S>,
}

impl<S: KeyValueStore> LedgerService<S> {
    /// Open the service, loading whatever the store holds
    pub fn open(store: LedgerStore<S>) -> Self {
        let ledger = store.load_ledger();
        Self { ledger, store }
    }

    /// Read-only access to the ledger
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Add a transaction and persist the ledger
    pub fn add(&mut self, description: &str, amount: f64) -> FinanceResult<Transaction> {
        self.add_at(description, amount, Utc::now())
    }

    /// Add a transaction with an explicit creation instant and persist
    pub fn add_at(
        &mut self,
        description: &str,
        amount: f64,
        now: DateTime<Utc>,
    ) -> FinanceResult<Transaction> {
        let txn = self.ledger.add_at(description, amount, now)?;
        self.store.save(&self.ledger);
        info!(id = %txn.id(), "recorded transaction");
        Ok(txn)
    }

    /// Add a transaction from user-entered amount text
    pub fn add_text(&mut self, description: &str, amount: &str) -> FinanceResult<Transaction> {
        let amount = Ledger::parse_amount(amount)?;
        self.add(description, amount)
    }

    /// Remove a transaction and persist the ledger
    ///
    /// An absent id changes nothing and writes nothing.
    pub fn remove(&mut self, id: TransactionId) -> Option<Transaction> {
        let removed = self.ledger.remove(id)?;
        self.store.save(&self.ledger);
        info!(id = %id, "deleted transaction");
        Some(removed)
    }

    pub fn list(&self) -> &[Transaction] {
        self.ledger.list()
    }

    pub fn totals(&self) -> Totals {
        self.ledger.totals()
    }

    /// Render the ledger as CSV in the given time zone
    pub fn to_csv_in<Tz>(&self, tz: &Tz) -> FinanceResult<String>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        export::to_csv_in(self.ledger.list(), tz)
    }

    /// Write an export file into `dir`, named for the current time
    pub fn export_to_dir<Tz>(&self, dir: &Path, tz: &Tz) -> FinanceResult<PathBuf>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        export::export_to_dir(self.ledger.list(), dir, Utc::now(), tz)
    }

    pub fn store(&self) -> &LedgerStore<S> {
        &self.store
    }
}
