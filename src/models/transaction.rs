//! Transaction model
//!
//! A transaction is one income or expense entry. The direction is carried
//! twice on the wire, once as the `type` tag and once as the sign of
//! `amount`; the constructor derives the sign from the tag so freshly
//! created records always agree.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in (positive amount)
    Income,
    /// Money going out (negative amount)
    Expense,
}

impl TransactionKind {
    /// Apply this direction's sign to an unsigned magnitude
    pub fn signed(&self, magnitude: Money) -> Money {
        match self {
            Self::Income => magnitude.abs(),
            Self::Expense => -magnitude.abs(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!(
                "Invalid transaction type: '{}'. Use income or expense",
                other
            )),
        }
    }
}

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier (creation time in milliseconds)
    pub id: TransactionId,

    /// Display name
    pub name: String,

    /// Signed amount (positive for income, negative for expense)
    pub amount: Money,

    /// Direction tag, stored alongside the sign
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl Transaction {
    /// Create a transaction from an unsigned magnitude and a direction
    pub fn new(
        id: TransactionId,
        name: impl Into<String>,
        magnitude: Money,
        kind: TransactionKind,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            amount: kind.signed(magnitude),
            kind,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// When the record was created, decoded from its id
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.id.created_at()
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.name.trim().is_empty() {
            return Err(TransactionValidationError::EmptyName);
        }

        if self.amount.is_zero() {
            return Err(TransactionValidationError::ZeroAmount);
        }

        if self.kind.signed(self.amount) != self.amount {
            return Err(TransactionValidationError::SignMismatch {
                kind: self.kind,
                amount: self.amount,
            });
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) {}", self.name, self.kind, self.amount)
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyName,
    ZeroAmount,
    SignMismatch { kind: TransactionKind, amount: Money },
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Transaction name cannot be empty"),
            Self::ZeroAmount => write!(f, "Please enter a valid amount"),
            Self::SignMismatch { kind, amount } => {
                write!(f, "Amount {} does not match transaction type {}", amount, kind)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn id() -> TransactionId {
        TransactionId::from_raw(1_700_000_000_000)
    }

    #[test]
    fn test_expense_is_negated() {
        let txn = Transaction::new(id(), "Coffee", Money::from_units(50), TransactionKind::Expense);
        assert_eq!(txn.amount, Money::from_units(-50));
        assert!(txn.is_expense());
    }

    #[test]
    fn test_income_takes_absolute_value() {
        let txn = Transaction::new(id(), "Refund", Money::from_units(-20), TransactionKind::Income);
        assert_eq!(txn.amount, Money::from_units(20));
        assert!(txn.is_income());
    }

    #[test]
    fn test_validation() {
        let txn = Transaction::new(id(), "  ", Money::from_units(5), TransactionKind::Income);
        assert_eq!(txn.validate(), Err(TransactionValidationError::EmptyName));

        let txn = Transaction::new(id(), "Gift", Money::zero(), TransactionKind::Income);
        assert_eq!(txn.validate(), Err(TransactionValidationError::ZeroAmount));

        let mut txn = Transaction::new(id(), "Gift", Money::from_units(5), TransactionKind::Income);
        assert!(txn.validate().is_ok());
        txn.amount = -txn.amount;
        assert!(matches!(
            txn.validate(),
            Err(TransactionValidationError::SignMismatch { .. })
        ));
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("income".parse::<TransactionKind>(), Ok(TransactionKind::Income));
        assert_eq!(" Expense ".parse::<TransactionKind>(), Ok(TransactionKind::Expense));
        assert!("transfer".parse::<TransactionKind>().is_err());
        assert!("".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn test_stored_layout() {
        let txn = Transaction::new(id(), "Coffee", Money::from_units(50), TransactionKind::Expense);
        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1_700_000_000_000_i64,
                "name": "Coffee",
                "amount": -50,
                "type": "expense"
            })
        );

        let parsed: Transaction = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, txn);
    }
}
