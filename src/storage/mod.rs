//! Storage layer for the expense tracker
//!
//! Sessions and ledgers are persisted through a string-keyed, string-valued
//! key-value port. `FileStore` keeps the map in a JSON file with atomic
//! writes; `MemoryStore` keeps it in memory for tests.

pub mod file_store;
pub mod memory;

pub use file_store::FileStore;
pub use memory::MemoryStore;

use crate::config::paths::TrackerPaths;
use crate::error::TrackerResult;

/// Key under which the logged-in username is stored
pub const SESSION_KEY: &str = "loggedUser";

/// Prefix of per-user ledger keys
pub const LEDGER_KEY_PREFIX: &str = "transactions_";

/// String-keyed, string-valued persistent storage
///
/// Each `set` or `remove` is a single atomic write from the caller's
/// point of view.
pub trait KeyValueStore {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> TrackerResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> TrackerResult<()>;

    /// Remove `key`; removing a missing key succeeds
    fn remove(&self, key: &str) -> TrackerResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> TrackerResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> TrackerResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> TrackerResult<()> {
        (**self).remove(key)
    }
}

/// Open the file-backed store at its configured location
pub fn open_file_store(paths: &TrackerPaths) -> TrackerResult<FileStore> {
    paths.ensure_directories()?;
    FileStore::open(paths.store_file())
}
