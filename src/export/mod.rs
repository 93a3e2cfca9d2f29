//! Export module for the expense tracker
//!
//! Exports the logged-in user's ledger in several formats:
//! - CSV: transactions only (spreadsheet-compatible)
//! - JSON: full ledger document, machine-readable
//! - YAML: full ledger document, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_transactions_csv;
pub use self::json::{export_ledger_json, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_ledger_yaml;
