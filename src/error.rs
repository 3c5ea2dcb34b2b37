//! Custom error types for FinanceFlow
//!
//! This module defines the error hierarchy for the ledger using thiserror
//! for ergonomic error definitions.

use std::fmt;

use thiserror::Error;

use crate::models::TransactionId;

/// The input field a validation error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Description,
    Amount,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Description => write!(f, "description"),
            Self::Amount => write!(f, "amount"),
        }
    }
}

/// The main error type for FinanceFlow operations
#[derive(Error, Debug)]
pub enum FinanceError {
    /// A transaction input was rejected; the ledger is unchanged
    #[error("Invalid {field}: {message}")]
    Validation { field: Field, message: String },

    /// Persisted ledger state could not be decoded
    #[error("Failed to deserialize stored transactions: {0}")]
    Deserialization(String),

    /// Two transactions share an id
    #[error("Transaction already exists: {0}")]
    Duplicate(TransactionId),

    /// No id is left above the highest one in use
    #[error("No transaction id available after {0}; delete that transaction first")]
    IdsExhausted(TransactionId),

    /// Export requested with nothing to export
    #[error("No transactions to export")]
    EmptyLedger,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Key-value store errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl FinanceError {
    /// Create a validation error for the description field
    pub fn invalid_description(message: impl Into<String>) -> Self {
        Self::Validation {
            field: Field::Description,
            message: message.into(),
        }
    }

    /// Create a validation error for the amount field
    pub fn invalid_amount(message: impl Into<String>) -> Self {
        Self::Validation {
            field: Field::Amount,
            message: message.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// The invalid field, if this is a validation error
    pub fn invalid_field(&self) -> Option<Field> {
        match self {
            Self::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }

    /// Check if this is the empty-export signal
    pub fn is_empty_ledger(&self) -> bool {
        matches!(self, Self::EmptyLedger)
    }
}

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for FinanceFlow operations
pub type FinanceResult<T> = Result<T, FinanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let err = FinanceError::invalid_description("must not be empty");
        assert_eq!(err.to_string(), "Invalid description: must not be empty");
        assert!(err.is_validation());
        assert_eq!(err.invalid_field(), Some(Field::Description));
    }

    #[test]
    fn test_amount_field() {
        let err = FinanceError::invalid_amount("must be non-zero");
        assert_eq!(err.invalid_field(), Some(Field::Amount));
        assert_eq!(err.to_string(), "Invalid amount: must be non-zero");
    }

    #[test]
    fn test_empty_ledger() {
        let err = FinanceError::EmptyLedger;
        assert!(err.is_empty_ledger());
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "No transactions to export");
    }

    #[test]
    fn test_ids_exhausted_names_blocking_id() {
        let err = FinanceError::IdsExhausted(TransactionId::from_raw(i64::MAX));
        assert!(err.to_string().contains("9223372036854775807"));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FinanceError = io_err.into();
        assert!(matches!(err, FinanceError::Io(_)));
    }
}
