use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use financeflow::cli::{
    handle_add, handle_config, handle_delete, handle_export, handle_list, handle_summary,
    ConfigUpdate,
};
use financeflow::config::{logging, paths::FinancePaths, settings::Settings};
use financeflow::models::TransactionId;
use financeflow::services::LedgerService;
use financeflow::storage::open_file_store;

#[derive(Parser)]
#[command(
    name = "financeflow",
    version,
    about = "Track income and expenses from the terminal",
    long_about = "FinanceFlow records income and expenses in a local ledger, \
                  shows your balance, and exports everything to CSV."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a transaction (positive amount = income, negative = expense)
    Add {
        /// What the transaction was for
        description: String,
        /// Amount, e.g. "2000" or "-12.50"
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// List all transactions
    #[command(alias = "ls")]
    List,

    /// Delete a transaction by ID
    #[command(alias = "rm")]
    Delete {
        /// Transaction ID as shown by `list`
        id: TransactionId,
    },

    /// Show balance, income and expense totals
    Summary,

    /// Export transactions to CSV
    Export {
        /// Output file (defaults to a timestamped file in the export directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show configuration and paths, optionally changing settings
    Config {
        /// Directory timestamped exports are written to
        #[arg(long)]
        export_dir: Option<PathBuf>,

        /// Render export dates in local time (true) or UTC (false)
        #[arg(long)]
        local_time: Option<bool>,

        /// Log filter used when RUST_LOG is not set, e.g. "info"
        #[arg(long)]
        log_filter: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = FinancePaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    logging::init(&settings.log_filter);

    let mut service = LedgerService::open(open_file_store(&paths)?);

    match cli.command {
        Some(Commands::Add {
            description,
            amount,
        }) => handle_add(&mut service, &description, &amount)?,
        Some(Commands::List) => handle_list(&service)?,
        Some(Commands::Delete { id }) => handle_delete(&mut service, id)?,
        Some(Commands::Summary) => handle_summary(&service)?,
        Some(Commands::Export { output }) => handle_export(&service, &settings, output)?,
        Some(Commands::Config {
            export_dir,
            local_time,
            log_filter,
        }) => {
            let update = ConfigUpdate {
                export_dir,
                use_local_time: local_time,
                log_filter,
            };
            handle_config(&paths, &mut settings, update)?
        }
        None => {
            println!("FinanceFlow - personal finance ledger");
            println!();
            println!("Run 'financeflow --help' for usage information.");
        }
    }

    Ok(())
}
