//! Expense Tracker - per-user income and expense ledger
//!
//! A user logs in with a name, records income and expense entries, and
//! sees a running balance and history. Everything is persisted locally
//! through a string-keyed key-value store: the logged-in user under
//! `loggedUser` and each user's ledger under `transactions_<username>`.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Transactions, ids and money
//! - `storage`: Key-value storage port with file and in-memory stores
//! - `services`: Session, ledger and the `Tracker` that composes them
//! - `display`: Terminal formatting and the balance re-render observer
//! - `export`: CSV, JSON and YAML export of a ledger
//! - `cli`: clap command handlers
//!
//! # Example
//!
//! ```
//! use expense_tracker::models::Money;
//! use expense_tracker::services::Tracker;
//! use expense_tracker::storage::MemoryStore;
//!
//! let store = MemoryStore::new();
//! let mut tracker = Tracker::new(&store);
//! tracker.login("alice", "secret")?;
//! tracker.add("Coffee", "50", "expense")?;
//! tracker.add("Salary", "1000", "income")?;
//! assert_eq!(tracker.total(), Money::from_units(950));
//! # Ok::<(), expense_tracker::TrackerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
