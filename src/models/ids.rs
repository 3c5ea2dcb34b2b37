//! Transaction identifiers
//!
//! Ids are integers seeded from the creation clock in milliseconds. They stay
//! distinct from plain integers at compile time so a row index can never be
//! passed where an id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(i64);

impl TransactionId {
    /// Create an id from a raw integer
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Create an id from a creation instant
    pub fn from_timestamp(at: DateTime<Utc>) -> Self {
        Self(at.timestamp_millis())
    }

    /// Get the raw integer value
    pub const fn as_i64(&self) -> i64 {
        self.0
    }

    /// The id immediately after this one, or `None` at `i64::MAX`
    pub const fn next(&self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for TransactionId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl FromStr for TransactionId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}
