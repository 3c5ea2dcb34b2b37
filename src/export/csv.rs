//! CSV Export functionality
//!
//! Renders the ledger as `Date,Description,Amount,Type` rows. Rows are joined
//! with `\n` and the output has no trailing newline.

use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::error::{FinanceError, FinanceResult};
use crate::models::Transaction;

/// Header row of every export
pub const CSV_HEADER: &str = "Date,Description,Amount,Type";

/// File name prefix for exports
pub const EXPORT_FILE_PREFIX: &str = "financeflow_transactions_";

/// en-US style date and time, e.g. `4/25/2024, 3:06:40 PM`
const DATE_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Render transactions as CSV with dates in local time
pub fn to_csv(transactions: &[Transaction]) -> FinanceResult<String> {
    to_csv_in(transactions, &Local)
}

/// Render transactions as CSV with dates in the given time zone
///
/// Fails with [`FinanceError::EmptyLedger`] when there is nothing to export.
pub fn to_csv_in<Tz>(transactions: &[Transaction], tz: &Tz) -> FinanceResult<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if transactions.is_empty() {
        return Err(FinanceError::EmptyLedger);
    }

    let rows = transactions.iter().map(|txn| {
        [
            txn.created_at()
                .with_timezone(tz)
                .format(DATE_FORMAT)
                .to_string(),
            escape_csv(txn.description()),
            txn.amount().format_plain(),
            txn.kind().to_string(),
        ]
        .join(",")
    });

    Ok(std::iter::once(CSV_HEADER.to_string())
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Write the CSV rendering of `transactions` to `writer`
pub fn write_csv<W, Tz>(transactions: &[Transaction], writer: &mut W, tz: &Tz) -> FinanceResult<()>
where
    W: Write,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let csv = to_csv_in(transactions, tz)?;
    writer
        .write_all(csv.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| FinanceError::Export(e.to_string()))
}

/// Name of an export file created at `now`
pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("{}{}.csv", EXPORT_FILE_PREFIX, now.timestamp_millis())
}

/// Write an export file named for `now` into `dir`, returning its path
pub fn export_to_dir<Tz>(
    transactions: &[Transaction],
    dir: &Path,
    now: DateTime<Utc>,
    tz: &Tz,
) -> FinanceResult<PathBuf>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let path = dir.join(export_file_name(now));
    export_to_file(transactions, &path, tz)?;
    Ok(path)
}

/// Write an export to an explicit path
pub fn export_to_file<Tz>(transactions: &[Transaction], path: &Path, tz: &Tz) -> FinanceResult<()>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    // Check before touching the filesystem so an empty ledger leaves no file
    if transactions.is_empty() {
        return Err(FinanceError::EmptyLedger);
    }

    let file = File::create(path).map_err(|e| {
        FinanceError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    write_csv(transactions, &mut writer, tz)
}

/// Quote a field iff it contains a comma or a double quote
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
