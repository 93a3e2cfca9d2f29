//! File-backed key-value store
//!
//! The whole map lives in one JSON object on disk and is rewritten
//! atomically on every `set`/`remove`, so each mutation is a single durable
//! write.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{TrackerError, TrackerResult};

use super::KeyValueStore;

type Snapshot = BTreeMap<String, String>;

/// Key-value store persisted as a JSON object
pub struct FileStore {
    path: PathBuf,
    data: RwLock<Snapshot>,
}

impl FileStore {
    /// Open the store at `path`, reading any existing contents
    ///
    /// A missing file is an empty store; a file that is not a JSON object of
    /// strings is a storage error.
    pub fn open(path: PathBuf) -> TrackerResult<Self> {
        let data = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice::<Snapshot>(&bytes).map_err(|e| {
                TrackerError::Storage(format!("Failed to parse {}: {}", path.display(), e))
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => Snapshot::new(),
            Err(e) => {
                return Err(TrackerError::Storage(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        tracing::debug!(path = %path.display(), keys = data.len(), "opened key-value store");
        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> TrackerResult<RwLockReadGuard<'_, Snapshot>> {
        self.data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> TrackerResult<RwLockWriteGuard<'_, Snapshot>> {
        self.data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Replace the backing file with `data` via a sibling temp file and rename
    fn persist(&self, data: &Snapshot) -> TrackerResult<()> {
        let storage_err = |what: &str, e: String| {
            TrackerError::Storage(format!("Failed to {} {}: {}", what, self.path.display(), e))
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| storage_err("create directory for", e.to_string()))?;
        }

        let bytes = serde_json::to_vec_pretty(data).map_err(|e| storage_err("serialize", e.to_string()))?;

        let temp_path = self.path.with_extension("json.tmp");
        let written = File::create(&temp_path).and_then(|mut file| {
            file.write_all(&bytes)?;
            file.sync_all()
        });
        if let Err(e) = written.and_then(|()| fs::rename(&temp_path, &self.path)) {
            let _ = fs::remove_file(&temp_path);
            return Err(storage_err("write", e.to_string()));
        }

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> TrackerResult<Option<String>> {
        Ok(self.read()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> TrackerResult<()> {
        let mut data = self.write()?;

        let previous = data.insert(key.to_string(), value.to_string());
        if let Err(e) = self.persist(&data) {
            // Keep memory identical to disk
            match previous {
                Some(old) => data.insert(key.to_string(), old),
                None => data.remove(key),
            };
            return Err(e);
        }

        tracing::trace!(key, bytes = value.len(), "stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> TrackerResult<()> {
        let mut data = self.write()?;

        let Some(previous) = data.remove(key) else {
            return Ok(());
        };

        if let Err(e) = self.persist(&data) {
            data.insert(key.to_string(), previous);
            return Err(e);
        }

        tracing::trace!(key, "removed value");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_path(temp_dir: &TempDir) -> PathBuf {
        temp_dir.path().join("data").join("local_storage.json")
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(store_path(&temp_dir)).unwrap();

        assert_eq!(store.get("loggedUser").unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_values_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(store_path(&temp_dir)).unwrap();
        store.set("loggedUser", "alice").unwrap();
        store.set("transactions_alice", "[]").unwrap();
        drop(store);

        let reopened = FileStore::open(store_path(&temp_dir)).unwrap();
        assert_eq!(reopened.get("loggedUser").unwrap().as_deref(), Some("alice"));
        assert_eq!(
            reopened.get("transactions_alice").unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn test_file_is_plain_json_object() {
        let temp_dir = TempDir::new().unwrap();
        let path = store_path(&temp_dir);
        let store = FileStore::open(path.clone()).unwrap();
        store.set("loggedUser", "alice").unwrap();

        let on_disk: Snapshot =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk.get("loggedUser").map(String::as_str), Some("alice"));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_failed_write_leaves_memory_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(store_path(&temp_dir)).unwrap();
        // The parent directory is replaced by a regular file, so writes fail
        std::fs::write(temp_dir.path().join("data"), "").unwrap();

        assert!(matches!(
            store.set("loggedUser", "alice"),
            Err(TrackerError::Storage(_))
        ));
        assert_eq!(store.get("loggedUser").unwrap(), None);
    }

    #[test]
    fn test_remove_is_persisted() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(store_path(&temp_dir)).unwrap();
        store.set("loggedUser", "alice").unwrap();
        store.remove("loggedUser").unwrap();
        store.remove("loggedUser").unwrap();

        let reopened = FileStore::open(store_path(&temp_dir)).unwrap();
        assert_eq!(reopened.get("loggedUser").unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_fails_to_open() {
        let temp_dir = TempDir::new().unwrap();
        let path = store_path(&temp_dir);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ broken").unwrap();

        assert!(matches!(
            FileStore::open(path),
            Err(TrackerError::Storage(_))
        ));
    }
}
