//! CLI command for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::{TrackerError, TrackerResult};
use crate::export::{csv, json, yaml, LedgerExport};
use crate::services::Tracker;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (transactions only)
    Csv,
    /// JSON format (full ledger)
    Json,
    /// YAML format (full ledger, human-readable)
    Yaml,
}

/// Export the logged-in user's ledger to `output`
pub fn handle_export_command(
    tracker: &mut Tracker<'_>,
    output: PathBuf,
    format: ExportFormat,
) -> TrackerResult<()> {
    let user = tracker.resume()?.ok_or(TrackerError::NoSession)?;

    let file = File::create(&output).map_err(|e| {
        TrackerError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => {
            csv::export_transactions_csv(tracker.transactions(), &mut writer)?;
        }
        ExportFormat::Json => {
            let export = LedgerExport::from_ledger(&user, tracker.ledger());
            json::export_ledger_json(&export, &mut writer, true)?;
        }
        ExportFormat::Yaml => {
            let export = LedgerExport::from_ledger(&user, tracker.ledger());
            yaml::export_ledger_yaml(&export, &mut writer)?;
        }
    }

    writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    tracing::info!(user = %user, path = %output.display(), ?format, "exported ledger");
    println!(
        "Exported {} transactions to: {}",
        tracker.transactions().len(),
        output.display()
    );

    Ok(())
}
