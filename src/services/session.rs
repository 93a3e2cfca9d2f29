//! Session service
//!
//! Tracks which user is logged in. The session is an identity label only:
//! any non-empty username and password pair is accepted, and the password is
//! never stored or checked.

use crate::error::{TrackerError, TrackerResult};
use crate::storage::{KeyValueStore, SESSION_KEY};

/// Service for the logged-in user
#[derive(Clone, Copy)]
pub struct SessionService<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> SessionService<'a> {
    /// Create a new session service
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Log in as `username`
    ///
    /// Both fields are trimmed and must be non-empty. Returns the username
    /// that was stored.
    pub fn login(&self, username: &str, password: &str) -> TrackerResult<String> {
        let username = username.trim();
        let password = password.trim();

        if username.is_empty() || password.is_empty() {
            return Err(TrackerError::Validation(
                "Please enter username and password".into(),
            ));
        }

        self.store.set(SESSION_KEY, username)?;
        tracing::info!(user = username, "logged in");

        Ok(username.to_string())
    }

    /// Forget the logged-in user
    pub fn logout(&self) -> TrackerResult<()> {
        self.store.remove(SESSION_KEY)?;
        tracing::info!("logged out");
        Ok(())
    }

    /// The logged-in user, if any
    pub fn current_user(&self) -> TrackerResult<Option<String>> {
        Ok(self
            .store
            .get(SESSION_KEY)?
            .filter(|user| !user.is_empty()))
    }
}
