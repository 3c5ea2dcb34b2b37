//! Ledger persistence
//!
//! Saves the whole ordered transaction list as one JSON array under a fixed
//! key, and loads it back. Loading never fails: a missing value is an empty
//! ledger, and a corrupt value is logged and replaced by an empty ledger.

use tracing::{debug, error, warn};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Ledger, Transaction};

use super::kv::KeyValueStore;

/// Key the transaction list is stored under
pub const STORAGE_KEY: &str = "financeflow_transactions";

/// Persistence adapter between a [`Ledger`] and a [`KeyValueStore`]
#[derive(Debug)]
pub struct LedgerStore<S> {
    store: S,
}

impl<S: KeyValueStore> LedgerStore<S> {
    /// Create an adapter storing the ledger under [`STORAGE_KEY`]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Serialize the ledger and overwrite the stored value
    pub fn try_save(&mut self, ledger: &Ledger) -> FinanceResult<()> {
        let json = serde_json::to_string(ledger.list())?;
        self.store.set(STORAGE_KEY, &json)?;
        debug!(key = STORAGE_KEY, count = ledger.len(), "ledger saved");
        Ok(())
    }

    /// Best-effort save; failures are logged, not returned
    pub fn save(&mut self, ledger: &Ledger) {
        if let Err(e) = self.try_save(ledger) {
            error!(key = STORAGE_KEY, error = %e, "failed to save transactions");
        }
    }

    /// Load the stored ledger, reporting malformed data as an error
    ///
    /// A missing value yields an empty ledger. Data that is not a JSON array of
    /// valid transactions with unique ids is rejected as a whole.
    pub fn try_load(&self) -> FinanceResult<Ledger> {
        let Some(text) = self.store.get(STORAGE_KEY)? else {
            return Ok(Ledger::new());
        };

        let transactions: Vec<Transaction> = serde_json::from_str(&text)
            .map_err(|e| FinanceError::Deserialization(e.to_string()))?;

        Ledger::from_transactions(transactions)
            .map_err(|e| FinanceError::Deserialization(e.to_string()))
    }

    /// Load the stored ledger, falling back to an empty one on any failure
    pub fn load_ledger(&self) -> Ledger {
        match self.try_load() {
            Ok(ledger) => {
                debug!(key = STORAGE_KEY, count = ledger.len(), "ledger loaded");
                ledger
            }
            Err(e) => {
                warn!(
                    key = STORAGE_KEY,
                    error = %e,
                    "error parsing stored transactions, starting with an empty ledger"
                );
                Ledger::new()
            }
        }
    }

    /// Load the stored transactions in order
    pub fn load(&self) -> Vec<Transaction> {
        self.load_ledger().into_transactions()
    }
}
