//! Export module for FinanceFlow
//!
//! Provides CSV export of the transaction list.

pub mod csv;

pub use csv::{
    export_file_name, export_to_dir, export_to_file, to_csv, to_csv_in, write_csv, CSV_HEADER,
    EXPORT_FILE_PREFIX,
};
