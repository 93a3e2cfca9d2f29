//! Application state
//!
//! `Tracker` ties the session and the ledger to one store and owns the
//! login/logout transitions: every login reloads the ledger for the new
//! user and every logout drops the in-memory records, so one user's
//! transactions are never visible in another user's session.

use crate::error::TrackerResult;
use crate::models::{Money, Transaction, TransactionId, TransactionKind};
use crate::storage::KeyValueStore;

use super::ledger::{Ledger, LedgerObserver};
use super::session::SessionService;

/// Session plus ledger over a single key-value store
pub struct Tracker<'a> {
    session: SessionService<'a>,
    ledger: Ledger<'a>,
}

impl<'a> Tracker<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self {
            session: SessionService::new(store),
            ledger: Ledger::new(store),
        }
    }

    /// Register an observer on the ledger
    pub fn subscribe(&mut self, observer: impl LedgerObserver + 'a) {
        self.ledger.subscribe(observer);
    }

    /// Log in and load that user's ledger
    pub fn login(&mut self, username: &str, password: &str) -> TrackerResult<String> {
        let user = self.session.login(username, password)?;
        self.ledger.load()?;
        Ok(user)
    }

    /// Log out and drop the in-memory ledger
    pub fn logout(&mut self) -> TrackerResult<()> {
        self.session.logout()?;
        self.ledger.clear();
        Ok(())
    }

    /// Pick up a session persisted by an earlier run
    ///
    /// Loads the ledger when someone is logged in and returns their name.
    pub fn resume(&mut self) -> TrackerResult<Option<String>> {
        let user = self.session.current_user()?;
        if user.is_some() {
            self.ledger.load()?;
        } else {
            self.ledger.clear();
        }
        Ok(user)
    }

    pub fn current_user(&self) -> TrackerResult<Option<String>> {
        self.session.current_user()
    }

    /// Add a transaction from raw input; see [`Ledger::add`]
    pub fn add(&mut self, name: &str, raw_amount: &str, kind: &str) -> TrackerResult<Transaction> {
        self.ledger.add(name, raw_amount, kind)
    }

    /// Add a transaction from typed values; see [`Ledger::add_entry`]
    pub fn add_entry(
        &mut self,
        name: &str,
        amount: Money,
        kind: TransactionKind,
    ) -> TrackerResult<Transaction> {
        self.ledger.add_entry(name, amount, kind)
    }

    pub fn remove(&mut self, id: TransactionId) -> TrackerResult<bool> {
        self.ledger.remove(id)
    }

    pub fn total(&self) -> Money {
        self.ledger.total()
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.transactions()
    }

    pub fn ledger(&self) -> &Ledger<'a> {
        &self.ledger
    }
}
