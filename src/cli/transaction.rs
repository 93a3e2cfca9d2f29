//! Transaction CLI commands
//!
//! Add, delete, history and balance for the logged-in user's ledger.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_history, format_summary, format_transaction_line};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{TransactionId, TransactionKind};
use crate::services::Tracker;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a transaction
    Add {
        /// What the money was for
        name: String,
        /// Amount; the sign is taken from --type
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Transaction type (income or expense)
        #[arg(short = 't', long = "type", default_value = "expense")]
        kind: String,
    },
    /// Add an income transaction
    Income {
        name: String,
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Add an expense transaction
    Expense {
        name: String,
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Delete a transaction by ID
    #[command(alias = "rm")]
    Delete {
        /// Transaction ID (as shown by `history`)
        id: String,
    },
    /// Show transaction history
    #[command(alias = "list")]
    History {
        /// Number of most recent transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
        /// Show every transaction
        #[arg(short, long, conflicts_with = "limit")]
        all: bool,
        /// Only show income or expense
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
    },
    /// Show the balance with income and expense subtotals
    Balance,
}

/// Handle a transaction command
pub fn handle_transaction_command(
    tracker: &mut Tracker<'_>,
    settings: &Settings,
    cmd: TransactionCommands,
) -> TrackerResult<()> {
    tracker.resume()?.ok_or(TrackerError::NoSession)?;
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add { name, amount, kind } => {
            let txn = tracker.add(&name, &amount, &kind)?;
            println!("Added: {}", format_transaction_line(&txn, symbol));
        }

        TransactionCommands::Income { name, amount } => {
            let txn = tracker.add(&name, &amount, TransactionKind::Income.as_str())?;
            println!("Added: {}", format_transaction_line(&txn, symbol));
        }

        TransactionCommands::Expense { name, amount } => {
            let txn = tracker.add(&name, &amount, TransactionKind::Expense.as_str())?;
            println!("Added: {}", format_transaction_line(&txn, symbol));
        }

        TransactionCommands::Delete { id } => {
            let parsed: TransactionId = id.parse().map_err(|_| {
                TrackerError::Validation(format!("Invalid transaction ID: '{}'", id))
            })?;

            if tracker.remove(parsed)? {
                println!("Deleted transaction {}", parsed);
            } else {
                println!("No transaction with ID {}", parsed);
            }
        }

        TransactionCommands::History { limit, all, kind } => {
            let kind = kind
                .map(|k| k.parse::<TransactionKind>())
                .transpose()
                .map_err(TrackerError::Validation)?;

            let mut transactions: Vec<_> = tracker
                .transactions()
                .iter()
                .filter(|t| kind.map_or(true, |k| t.kind == k))
                .cloned()
                .collect();

            let total = transactions.len();
            if !all {
                let limit = limit.unwrap_or(settings.history_limit);
                let skip = total.saturating_sub(limit);
                transactions.drain(..skip);
            }

            print!("{}", format_history(&transactions, settings));
            println!(
                "\nShowing {} of {} transactions",
                transactions.len(),
                total
            );
        }

        TransactionCommands::Balance => {
            let ledger = tracker.ledger();
            print!(
                "{}",
                format_summary(
                    ledger.total(),
                    ledger.income_total(),
                    ledger.expense_total(),
                    symbol
                )
            );
        }
    }

    Ok(())
}
