//! Transaction model
//!
//! A transaction is one signed monetary entry. The sign of the amount encodes
//! direction: positive is income, negative is expense. Transactions are never
//! edited; the ledger creates and deletes them.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;
use crate::error::{FinanceError, FinanceResult};

/// Direction of a transaction, derived from the sign of its amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,

    /// Persisted as `text` to stay compatible with existing stored ledgers
    #[serde(rename = "text")]
    description: String,

    amount: Money,

    /// Creation instant; older records carry only the id
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "chrono::serde::ts_milliseconds_option"
    )]
    created_at: Option<DateTime<Utc>>,
}

impl Transaction {
    pub(crate) fn new(
        id: TransactionId,
        description: impl Into<String>,
        amount: Money,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            created_at: Some(created_at),
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    /// When the transaction was created
    ///
    /// Falls back to reading the id as a millisecond timestamp for records
    /// written before the creation time was stored separately.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at.unwrap_or_else(|| {
            Utc.timestamp_millis_opt(self.id.as_i64())
                .single()
                .unwrap_or_default()
        })
    }

    pub fn kind(&self) -> TransactionKind {
        if self.amount.is_positive() {
            TransactionKind::Income
        } else {
            TransactionKind::Expense
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind() == TransactionKind::Income
    }

    /// Check the ledger invariants for a single transaction
    pub fn validate(&self) -> FinanceResult<()> {
        if self.description.trim().is_empty() {
            return Err(FinanceError::invalid_description(
                "Please enter a transaction description",
            ));
        }

        if self.amount.is_zero() {
            return Err(FinanceError::invalid_amount(
                "Please enter a valid amount (non-zero number)",
            ));
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.description, self.amount.format_signed())
    }
}
