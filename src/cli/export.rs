//! CLI command for CSV export

use std::fmt::Display;
use std::path::PathBuf;

use chrono::{Local, TimeZone, Utc};

use crate::config::Settings;
use crate::error::{FinanceError, FinanceResult};
use crate::export;
use crate::services::LedgerService;
use crate::storage::KeyValueStore;

/// Handle `export`
///
/// Writes to `output` when given, otherwise to a timestamped file in the
/// configured export directory. An empty ledger is reported, not an error.
pub fn handle_export<S: KeyValueStore>(
    service: &LedgerService<S>,
    settings: &Settings,
    output: Option<PathBuf>,
) -> FinanceResult<()> {
    let result = if settings.use_local_time {
        export_in(service, settings, output, &Local)
    } else {
        export_in(service, settings, output, &Utc)
    };

    match result {
        Ok(path) => {
            println!(
                "Exported {} transactions to: {}",
                service.list().len(),
                path.display()
            );
            Ok(())
        }
        Err(FinanceError::EmptyLedger) => {
            println!("No transactions to export");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn export_in<S, Tz>(
    service: &LedgerService<S>,
    settings: &Settings,
    output: Option<PathBuf>,
    tz: &Tz,
) -> FinanceResult<PathBuf>
where
    S: KeyValueStore,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match output {
        Some(path) => {
            export::export_to_file(service.list(), &path, tz)?;
            Ok(path)
        }
        None => {
            let dir = settings.export_dir();
            std::fs::create_dir_all(&dir).map_err(|e| {
                FinanceError::Export(format!(
                    "Failed to create export directory {}: {}",
                    dir.display(),
                    e
                ))
            })?;
            service.export_to_dir(&dir, tz)
        }
    }
}
