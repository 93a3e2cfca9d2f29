//! YAML Export functionality
//!
//! Same document as the JSON export, in a human-readable form.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::export::json::LedgerExport;

/// Write the export as YAML with a short header comment
pub fn export_ledger_yaml<W: Write>(export: &LedgerExport, writer: &mut W) -> TrackerResult<()> {
    writeln!(writer, "# Expense tracker ledger export")
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer, "# User: {}", export.user).map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}
