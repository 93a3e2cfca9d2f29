//! Display formatting for terminal output
//!
//! Provides the history table, balance lines, and the observer that
//! re-renders the balance after each ledger change.

pub mod transaction;

pub use transaction::{format_balance, format_history, format_summary, format_transaction_line};

use crate::services::{LedgerEvent, LedgerObserver, LedgerView};

/// Prints the balance whenever a transaction is added or removed
pub struct BalancePrinter {
    currency_symbol: String,
}

impl BalancePrinter {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }
}

impl LedgerObserver for BalancePrinter {
    fn ledger_changed(&self, event: &LedgerEvent, view: LedgerView<'_>) {
        if matches!(event, LedgerEvent::Added(_) | LedgerEvent::Removed(_)) {
            println!("{}", format_balance(view.balance, &self.currency_symbol));
        }
    }
}
