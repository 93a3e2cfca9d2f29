//! JSON Export functionality
//!
//! Exports one user's ledger to JSON with schema versioning.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, Transaction};
use crate::services::Ledger;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Ledger export document shared by the JSON and YAML formats
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Owner of the ledger
    pub user: String,

    /// Sum of all amounts at export time
    pub balance: Money,

    /// All transactions in insertion order
    pub transactions: Vec<Transaction>,
}

impl LedgerExport {
    /// Snapshot the loaded ledger of `user`
    pub fn from_ledger(user: impl Into<String>, ledger: &Ledger<'_>) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            user: user.into(),
            balance: ledger.total(),
            transactions: ledger.transactions().to_vec(),
        }
    }
}

/// Write the export as JSON
pub fn export_ledger_json<W: Write>(
    export: &LedgerExport,
    writer: &mut W,
    pretty: bool,
) -> TrackerResult<()> {
    let result = if pretty {
        serde_json::to_writer_pretty(&mut *writer, export)
    } else {
        serde_json::to_writer(&mut *writer, export)
    };
    result.map_err(|e| TrackerError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(())
}
