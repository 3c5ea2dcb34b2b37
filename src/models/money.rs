//! Money type for representing currency amounts
//!
//! Amounts are held as `rust_decimal::Decimal`, so whatever number was entered
//! is kept exactly, sub-cent values included, and sums do not drift. Rounding
//! to cents only happens when an amount is rendered. On the wire an amount is
//! a plain JSON number of dollars, so persisted data stays readable by
//! anything that speaks the `{id, text, amount}` format.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};
use std::str::FromStr;

/// A signed dollar amount
///
/// Arithmetic saturates at the bounds of `Decimal` (about 7.9e28) instead of
/// panicking or wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use financeflow::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Create a Money amount from a dollar value, keeping it exactly
    ///
    /// The value is taken as its shortest decimal form, so `0.1` is one tenth
    /// rather than the nearest binary fraction. Returns `None` for NaN,
    /// infinities, magnitudes beyond `Decimal` range and non-zero values too
    /// small to represent.
    ///
    /// # Examples
    /// ```
    /// use financeflow::models::Money;
    /// assert_eq!(Money::from_f64(-1234.5).unwrap(), Money::from_cents(-123450));
    /// assert!(!Money::from_f64(0.001).unwrap().is_zero());
    /// assert!(Money::from_f64(f64::NAN).is_none());
    /// ```
    pub fn from_f64(dollars: f64) -> Option<Self> {
        if !dollars.is_finite() {
            return None;
        }
        // f64 Display never uses exponent notation
        let value = Decimal::from_str(&dollars.to_string()).ok()?;
        if value.is_zero() && dollars != 0.0 {
            return None;
        }
        Some(Self(value))
    }

    /// Create a zero Money amount
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the amount as a dollar value
    ///
    /// Values built by `from_f64` come back bit-exact.
    pub fn to_f64(&self) -> f64 {
        self.0.to_string().parse().unwrap_or_default()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Sign, whole dollars and cents, rounded half away from zero
    ///
    /// The sign is taken before rounding, so `-0.001` reports negative.
    fn parts(&self) -> (bool, u128, u32) {
        let rounded = self
            .0
            .abs()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let whole = rounded.trunc();
        let cents = ((rounded - whole) * Decimal::ONE_HUNDRED)
            .to_u32()
            .unwrap_or_default();
        (self.is_negative(), whole.to_u128().unwrap_or_default(), cents)
    }

    /// Format as a bare signed decimal with two places, e.g. `-1200.00`
    pub fn format_plain(&self) -> String {
        let (negative, whole, cents) = self.parts();
        let sign = if negative { "-" } else { "" };
        format!("{}{}.{:02}", sign, whole, cents)
    }

    /// Format as currency with an explicit `+` on positive amounts
    ///
    /// Used for list rows, where the sign doubles as the income marker.
    pub fn format_signed(&self) -> String {
        if self.is_positive() {
            format!("+{}", self)
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (negative, whole, cents) = self.parts();
        let dollars = group_thousands(&whole.to_string());
        if negative {
            write!(f, "-${}.{:02}", dollars, cents)
        } else {
            write!(f, "${}.{:02}", dollars, cents)
        }
    }
}

/// Insert `,` every three digits from the right of an unsigned digit string
pub(crate) fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.fract().is_zero() {
            if let Some(whole) = self.0.to_i64() {
                return serializer.serialize_i64(whole);
            }
        }
        serializer.serialize_f64(self.to_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let dollars = f64::deserialize(deserializer)?;
        Money::from_f64(dollars)
            .ok_or_else(|| de::Error::custom(format!("amount out of range: {}", dollars)))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Parse user-entered amount text into a finite dollar value
///
/// Accepts an optional leading sign, an optional `$` and `,` thousands
/// separators: "12.50", "-$1,200", "+3". NaN and infinities are rejected.
pub fn parse_amount(s: &str) -> Result<f64, MoneyParseError> {
    let trimmed = s.trim();

    let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
        (true, stripped)
    } else if let Some(stripped) = trimmed.strip_prefix('+') {
        (false, stripped)
    } else {
        (false, trimmed)
    };

    let rest = rest.strip_prefix('$').unwrap_or(rest);
    if rest.is_empty() || rest.starts_with(['-', '+']) {
        return Err(MoneyParseError::InvalidFormat(s.to_string()));
    }

    let digits: String = rest.chars().filter(|&c| c != ',').collect();
    let value: f64 = digits
        .parse()
        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

    if !value.is_finite() {
        return Err(MoneyParseError::NotFinite(s.to_string()));
    }

    Ok(if negative { -value } else { value })
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    NotFinite(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::NotFinite(s) => write!(f, "Amount is not a finite number: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
