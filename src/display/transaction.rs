//! Transaction display formatting
//!
//! Formats the ledger history and balance for terminal output.

use std::fmt::Write;

use chrono::{DateTime, Local, Utc};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::{Money, Transaction};

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl HistoryRow {
    fn new(txn: &Transaction, settings: &Settings) -> Self {
        Self {
            id: txn.id.to_string(),
            date: txn
                .created_at()
                .map(|at| format_date(at, &settings.date_format))
                .unwrap_or_default(),
            name: truncate(&txn.name, 30),
            kind: txn.kind.to_string(),
            amount: txn.amount.format_signed(&settings.currency_symbol),
        }
    }
}

/// Render `at` in local time with `pattern`, falling back to RFC 3339
fn format_date(at: DateTime<Utc>, pattern: &str) -> String {
    let local = at.with_timezone(&Local);
    let mut out = String::new();
    if write!(out, "{}", local.format(pattern)).is_err() {
        return local.to_rfc3339();
    }
    out
}

/// Format transactions as a history table, in the order given
pub fn format_history(transactions: &[Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions.iter().map(|t| HistoryRow::new(t, settings));
    let mut table = Table::new(rows);
    table.with(Style::psql());

    format!("{}\n", table)
}

/// Format a single transaction as one line, e.g. `Coffee (expense) -₹50.00`
pub fn format_transaction_line(txn: &Transaction, symbol: &str) -> String {
    format!(
        "{} ({}) {}  [id {}]",
        txn.name,
        txn.kind,
        txn.amount.format_signed(symbol),
        txn.id
    )
}

/// Format the balance line
pub fn format_balance(balance: Money, symbol: &str) -> String {
    format!("Balance: {}", balance.format_with_symbol(symbol))
}

/// Format balance with income and expense subtotals
pub fn format_summary(balance: Money, income: Money, expenses: Money, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Income:   {}\n", income.format_signed(symbol)));
    output.push_str(&format!("Expenses: {}\n", expenses.format_signed(symbol)));
    output.push_str(&"-".repeat(24));
    output.push('\n');
    output.push_str(&format_balance(balance, symbol));
    output.push('\n');
    output
}

/// Truncate a string to a maximum length
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
