//! CLI command for viewing and changing settings

use std::path::PathBuf;

use tracing::info;

use crate::config::{FinancePaths, Settings};
use crate::error::FinanceResult;

/// Settings changes requested on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigUpdate {
    pub export_dir: Option<PathBuf>,
    pub use_local_time: Option<bool>,
    pub log_filter: Option<String>,
}

impl ConfigUpdate {
    pub fn is_empty(&self) -> bool {
        self.export_dir.is_none() && self.use_local_time.is_none() && self.log_filter.is_none()
    }

    /// Apply the requested changes; returns true if anything changed
    pub fn apply_to(self, settings: &mut Settings) -> bool {
        let before = settings.clone();

        if let Some(dir) = self.export_dir {
            settings.export_dir = Some(dir);
        }
        if let Some(local) = self.use_local_time {
            settings.use_local_time = local;
        }
        if let Some(filter) = self.log_filter {
            settings.log_filter = filter;
        }

        *settings != before
    }
}

/// Handle `config`
///
/// Saves any requested changes, then prints paths and effective settings.
pub fn handle_config(
    paths: &FinancePaths,
    settings: &mut Settings,
    update: ConfigUpdate,
) -> FinanceResult<()> {
    if update.apply_to(settings) {
        settings.save(paths)?;
        info!(path = %paths.settings_file().display(), "settings saved");
        println!("Settings saved.");
        println!();
    }

    println!("FinanceFlow Configuration");
    println!("=========================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Data directory:   {}", paths.data_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!();
    println!("Settings:");
    println!("  Export directory: {}", settings.export_dir().display());
    println!("  Local time:       {}", settings.use_local_time);
    println!("  Log filter:       {}", settings.log_filter);

    Ok(())
}
