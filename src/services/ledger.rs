//! Ledger service
//!
//! Holds the logged-in user's transactions in insertion order and writes
//! the whole sequence through to storage after every mutation, under the
//! key `transactions_<username>`. Observers are notified after each change
//! so presentation code can re-render without the ledger knowing about it.

use chrono::Utc;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, Transaction, TransactionId, TransactionKind};
use crate::storage::{KeyValueStore, LEDGER_KEY_PREFIX};

use super::session::SessionService;

/// What changed in the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerEvent {
    /// The sequence was replaced with the stored one
    Loaded,
    /// A transaction was appended
    Added(TransactionId),
    /// A transaction was removed
    Removed(TransactionId),
    /// The in-memory sequence was dropped
    Cleared,
}

/// Read-only view of the ledger handed to observers
#[derive(Debug, Clone, Copy)]
pub struct LedgerView<'l> {
    pub transactions: &'l [Transaction],
    pub balance: Money,
}

/// Receives a notification after every ledger change
pub trait LedgerObserver {
    fn ledger_changed(&self, event: &LedgerEvent, view: LedgerView<'_>);
}

/// In-memory ledger with write-through persistence
pub struct Ledger<'a> {
    store: &'a dyn KeyValueStore,
    session: SessionService<'a>,
    transactions: Vec<Transaction>,
    /// Key whose stored value failed to parse on the last load
    unreadable: Option<String>,
    observers: Vec<Box<dyn LedgerObserver + 'a>>,
}

impl<'a> Ledger<'a> {
    /// Create an empty ledger; call [`Ledger::load`] to read stored data
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self {
            store,
            session: SessionService::new(store),
            transactions: Vec::new(),
            unreadable: None,
            observers: Vec::new(),
        }
    }

    /// Register an observer for ledger changes
    pub fn subscribe(&mut self, observer: impl LedgerObserver + 'a) {
        self.observers.push(Box::new(observer));
    }

    /// Storage key for the logged-in user's ledger
    ///
    /// With nobody logged in this is `transactions_undefined`; mutations
    /// never write under it.
    pub fn key(&self) -> TrackerResult<String> {
        let user = self.session.current_user()?;
        Ok(ledger_key(user.as_deref().unwrap_or("undefined")))
    }

    /// Replace the in-memory sequence with the stored one
    ///
    /// A missing value yields an empty ledger. A value that does not parse
    /// is reported as a storage error, the ledger stays empty and the
    /// stored value is left untouched: `add` and `remove` refuse to write
    /// under that key until a later load succeeds.
    pub fn load(&mut self) -> TrackerResult<()> {
        self.transactions.clear();
        self.unreadable = None;

        let key = self.key()?;
        if let Some(raw) = self.store.get(&key)? {
            let stored: Option<Vec<Transaction>> = match serde_json::from_str(&raw) {
                Ok(stored) => stored,
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "stored ledger is corrupted");
                    self.unreadable = Some(key.clone());
                    return Err(TrackerError::Storage(format!(
                        "Failed to parse {}: {}",
                        key, e
                    )));
                }
            };
            self.transactions = stored.unwrap_or_default();
        }

        tracing::debug!(key = %key, count = self.transactions.len(), "loaded ledger");
        self.notify(LedgerEvent::Loaded);
        Ok(())
    }

    /// Add a transaction from raw user input
    ///
    /// `raw_amount` is an unsigned magnitude; its sign is replaced by the
    /// one `kind` implies. Nothing changes if validation fails.
    pub fn add(&mut self, name: &str, raw_amount: &str, kind: &str) -> TrackerResult<Transaction> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrackerError::Validation(
                "Transaction name cannot be empty".into(),
            ));
        }

        let amount = Money::parse(raw_amount).map_err(|e| {
            TrackerError::Validation(format!("Please enter a valid amount ({})", e))
        })?;

        let kind: TransactionKind = kind.parse().map_err(TrackerError::Validation)?;

        self.add_entry(name, amount, kind)
    }

    /// Add a transaction from already-typed values
    pub fn add_entry(
        &mut self,
        name: &str,
        amount: Money,
        kind: TransactionKind,
    ) -> TrackerResult<Transaction> {
        let last = self.transactions.iter().map(|t| t.id).max();
        let txn = Transaction::new(
            TransactionId::allocate(Utc::now(), last),
            name.trim(),
            amount,
            kind,
        );

        txn.validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        let key = self.session_key()?;

        self.transactions.push(txn.clone());
        if let Err(e) = self.save(&key) {
            self.transactions.pop();
            return Err(e);
        }

        tracing::debug!(id = %txn.id, kind = %txn.kind, amount = %txn.amount, "added transaction");
        self.notify(LedgerEvent::Added(txn.id));
        Ok(txn)
    }

    /// Remove the transaction with `id`
    ///
    /// Returns whether a record was removed; an unknown id is a no-op.
    pub fn remove(&mut self, id: TransactionId) -> TrackerResult<bool> {
        let Some(index) = self.transactions.iter().position(|t| t.id == id) else {
            return Ok(false);
        };

        let key = self.session_key()?;

        let removed = self.transactions.remove(index);
        if let Err(e) = self.save(&key) {
            self.transactions.insert(index, removed);
            return Err(e);
        }

        tracing::debug!(id = %id, "removed transaction");
        self.notify(LedgerEvent::Removed(id));
        Ok(true)
    }

    /// Drop the in-memory sequence without touching storage
    pub fn clear(&mut self) {
        self.transactions.clear();
        self.notify(LedgerEvent::Cleared);
    }

    /// Balance: the sum of all amounts
    pub fn total(&self) -> Money {
        self.transactions.iter().map(|t| t.amount).sum()
    }

    /// Sum of income amounts
    pub fn income_total(&self) -> Money {
        self.transactions
            .iter()
            .filter(|t| t.amount.is_positive())
            .map(|t| t.amount)
            .sum()
    }

    /// Sum of expense amounts (zero or negative)
    pub fn expense_total(&self) -> Money {
        self.transactions
            .iter()
            .filter(|t| t.amount.is_negative())
            .map(|t| t.amount)
            .sum()
    }

    /// Transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Current state as handed to observers
    pub fn view(&self) -> LedgerView<'_> {
        LedgerView {
            transactions: &self.transactions,
            balance: self.total(),
        }
    }

    /// Key to write under, refusing one whose stored value could not be read
    fn session_key(&self) -> TrackerResult<String> {
        let user = self.session.current_user()?.ok_or(TrackerError::NoSession)?;
        let key = ledger_key(&user);
        if self.unreadable.as_deref() == Some(key.as_str()) {
            return Err(TrackerError::Storage(format!(
                "{} could not be read; refusing to overwrite it",
                key
            )));
        }
        Ok(key)
    }

    fn save(&self, key: &str) -> TrackerResult<()> {
        let raw = serde_json::to_string(&self.transactions)?;
        self.store.set(key, &raw)
    }

    fn notify(&self, event: LedgerEvent) {
        let view = self.view();
        for observer in &self.observers {
            observer.ledger_changed(&event, view);
        }
    }
}

/// Storage key of `user`'s ledger
pub fn ledger_key(user: &str) -> String {
    format!("{}{}", LEDGER_KEY_PREFIX, user)
}
