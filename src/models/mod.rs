//! Core data models for the expense tracker
//!
//! Transactions, their identifiers, and the money type used for amounts.

pub mod ids;
pub mod money;
pub mod transaction;

pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionKind, TransactionValidationError};
