//! CSV Export functionality
//!
//! Exports the ledger's transactions as a spreadsheet-friendly table.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Transaction;

/// Export transactions to CSV with header `ID,Date,Name,Type,Amount`
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> TrackerResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["ID", "Date", "Name", "Type", "Amount"])
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    for txn in transactions {
        let date = txn
            .created_at()
            .map(|at| at.to_rfc3339())
            .unwrap_or_default();

        csv_writer
            .write_record([
                txn.id.to_string(),
                date,
                txn.name.clone(),
                txn.kind.to_string(),
                txn.amount.to_string(),
            ])
            .map_err(|e| TrackerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionId, TransactionKind};

    #[test]
    fn test_csv_export() {
        let transactions = vec![
            Transaction::new(
                TransactionId::from_raw(1_700_000_000_000),
                "Coffee, large",
                Money::from_units(50),
                TransactionKind::Expense,
            ),
            Transaction::new(
                TransactionId::from_raw(1_700_000_000_001),
                "Salary",
                Money::from_cents(100050),
                TransactionKind::Income,
            ),
        ];

        let mut buffer = Vec::new();
        export_transactions_csv(&transactions, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "ID,Date,Name,Type,Amount");
        assert!(lines[1].starts_with("1700000000000,2023-11-14T22:13:20+00:00,"));
        assert!(lines[1].ends_with("\"Coffee, large\",expense,-50.00"));
        assert!(lines[2].ends_with("Salary,income,1000.50"));
    }

    #[test]
    fn test_csv_export_empty() {
        let mut buffer = Vec::new();
        export_transactions_csv(&[], &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "ID,Date,Name,Type,Amount\n");
    }
}
