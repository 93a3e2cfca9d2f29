//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod session;
pub mod transaction;

pub use export::{handle_export_command, ExportFormat};
pub use session::{handle_session_command, SessionCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
