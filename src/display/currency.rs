//! Currency formatting
//!
//! US dollars with en-US conventions: leading `$`, `,` thousands separators,
//! two decimals, minus sign before the symbol. Negative amounts keep their
//! sign even when they round to zero, so `-0.001` renders as `-$0.00`.

use crate::models::money::{group_thousands, Money};

/// Format a dollar amount, e.g. `-1234.5` -> `-$1,234.50`
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return "$NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount < 0.0 { "-$∞" } else { "$∞" }.to_string();
    }

    if amount == 0.0 && amount.is_sign_negative() {
        return "-$0.00".to_string();
    }

    match Money::from_f64(amount) {
        Some(money) => money.to_string(),
        None => format_f64(amount),
    }
}

/// Amounts outside the range `Money` can hold
///
/// These are either whole numbers far above any cent precision or dust below
/// a cent, so only the integer part needs rendering.
fn format_f64(amount: f64) -> String {
    let magnitude = amount.abs();
    let whole = if magnitude >= 1.0 {
        magnitude.trunc().to_string()
    } else {
        "0".to_string()
    };
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}${}.00", sign, group_thousands(&whole))
}
