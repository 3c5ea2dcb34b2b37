//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod config;
pub mod export;
pub mod transaction;

pub use config::{handle_config, ConfigUpdate};
pub use export::handle_export;
pub use transaction::{handle_add, handle_delete, handle_list, handle_summary};
