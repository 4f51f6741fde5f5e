//! Key-value persistence for store snapshots.
//!
//! # Layout
//!
//! Each store owns one entry, keyed by a fixed name (see [`keys`]). The value
//! is a JSON envelope:
//!
//! ```json
//! { "state": { ... }, "version": 0 }
//! ```
//!
//! [`JsonFileStorage`] writes one `<key>.json` file per entry into a data
//! directory; [`MemoryStorage`] keeps entries in a map for tests.
//!
//! Stores never block on persistence: [`SnapshotSlot::save`] logs failures
//! instead of returning them, and [`SnapshotSlot::load`] treats unreadable
//! entries as absent.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage keys for persisted store snapshots.
pub mod keys {
    /// Key for the auth session snapshot.
    pub const AUTH: &str = "auth-storage";

    /// Key for the cart contents snapshot.
    pub const CART: &str = "cart-storage";

    /// Key for the active locale snapshot.
    pub const LANGUAGE: &str = "language-storage";
}

/// Envelope version written with every snapshot.
pub const SNAPSHOT_VERSION: u32 = 0;

/// Errors from a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("storage I/O error for {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },

    /// Snapshot could not be encoded or decoded.
    #[error("malformed snapshot for {key}: {source}")]
    Json {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Snapshot was written by an incompatible version.
    #[error("snapshot {key} has version {found}, expected {expected}")]
    VersionMismatch { key: String, found: u64, expected: u32 },
}

/// A durable string key-value store.
pub trait Storage: Send + Sync {
    /// Read the raw value under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the backend cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the backend cannot be written.
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

// =============================================================================
// File Backend
// =============================================================================

/// One JSON file per key inside a data directory.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    /// Open (and create if needed) the data directory.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StorageError::Io {
            key: dir.display().to_string(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// The data directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for JsonFileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                key: key.to_owned(),
                source,
            }),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // Write-then-rename so a crash never leaves a truncated snapshot.
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)
            .and_then(|()| fs::rename(&tmp, &path))
            .map_err(|source| StorageError::Io {
                key: key.to_owned(),
                source,
            })
    }
}

// =============================================================================
// Memory Backend
// =============================================================================

/// Process-local storage. Clones share the same entries, so a clone handed to
/// a rebuilt `AppState` sees what the previous one saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// =============================================================================
// Typed Snapshots
// =============================================================================

/// Typed access to one persisted entry.
pub struct SnapshotSlot<T> {
    storage: Arc<dyn Storage>,
    key: &'static str,
    _snapshot: PhantomData<fn() -> T>,
}

impl<T> std::fmt::Debug for SnapshotSlot<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotSlot").field("key", &self.key).finish()
    }
}

impl<T> SnapshotSlot<T>
where
    T: Serialize + DeserializeOwned,
{
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>, key: &'static str) -> Self {
        Self {
            storage,
            key,
            _snapshot: PhantomData,
        }
    }

    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Read and decode the snapshot.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails, the envelope is malformed
    /// or was written with a different version.
    pub fn try_load(&self) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.storage.load(self.key)? else {
            return Ok(None);
        };
        decode(self.key, &raw).map(Some)
    }

    /// Read the snapshot, treating any failure as "nothing stored".
    #[must_use]
    pub fn load(&self) -> Option<T> {
        self.try_load().unwrap_or_else(|e| {
            tracing::warn!(key = self.key, error = %e, "Ignoring unreadable snapshot");
            None
        })
    }

    /// Encode and write the snapshot.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if encoding or the backend write fails.
    pub fn try_save(&self, state: &T) -> Result<(), StorageError> {
        let raw = encode(self.key, state)?;
        self.storage.save(self.key, &raw)
    }

    /// Write the snapshot, logging instead of returning failures.
    pub fn save(&self, state: &T) {
        if let Err(e) = self.try_save(state) {
            tracing::warn!(key = self.key, error = %e, "Failed to persist snapshot");
        }
    }
}

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    state: &'a T,
    version: u32,
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    state: serde_json::Value,
    #[serde(default)]
    version: u64,
}

fn encode<T: Serialize>(key: &str, state: &T) -> Result<String, StorageError> {
    let envelope = EnvelopeRef {
        state,
        version: SNAPSHOT_VERSION,
    };
    serde_json::to_string(&envelope).map_err(|source| StorageError::Json {
        key: key.to_owned(),
        source,
    })
}

fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Result<T, StorageError> {
    let json_error = |source| StorageError::Json {
        key: key.to_owned(),
        source,
    };

    let envelope: Envelope = serde_json::from_str(raw).map_err(json_error)?;
    if envelope.version != u64::from(SNAPSHOT_VERSION) {
        return Err(StorageError::VersionMismatch {
            key: key.to_owned(),
            found: envelope.version,
            expected: SNAPSHOT_VERSION,
        });
    }
    serde_json::from_value(envelope.state).map_err(json_error)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Counter {
        count: u32,
    }

    fn slot(storage: &MemoryStorage) -> SnapshotSlot<Counter> {
        SnapshotSlot::new(Arc::new(storage.clone()), "counter")
    }

    #[test]
    fn test_envelope_format() {
        let storage = MemoryStorage::new();
        slot(&storage).save(&Counter { count: 3 });

        let raw = storage.load("counter").unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value, json!({ "state": { "count": 3 }, "version": 0 }));
    }

    #[test]
    fn test_missing_entry_loads_as_none() {
        let storage = MemoryStorage::new();
        assert_eq!(slot(&storage).load(), None);
    }

    #[test]
    fn test_corrupt_entry_is_ignored() {
        let storage = MemoryStorage::new();
        storage.save("counter", "{not json").unwrap();

        let slot = slot(&storage);
        assert!(matches!(slot.try_load(), Err(StorageError::Json { .. })));
        assert_eq!(slot.load(), None);
    }

    #[test]
    fn test_version_mismatch_is_rejected() {
        let storage = MemoryStorage::new();
        storage
            .save("counter", r#"{"state":{"count":1},"version":7}"#)
            .unwrap();

        assert!(matches!(
            slot(&storage).try_load(),
            Err(StorageError::VersionMismatch { found: 7, .. })
        ));
    }

    #[test]
    fn test_file_storage_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let storage = JsonFileStorage::open(dir.path().join("data")).unwrap();
            let slot: SnapshotSlot<Counter> = SnapshotSlot::new(Arc::new(storage), "counter");
            slot.save(&Counter { count: 9 });
        }

        let storage = JsonFileStorage::open(dir.path().join("data")).unwrap();
        assert!(storage.dir().join("counter.json").exists());
        let slot: SnapshotSlot<Counter> = SnapshotSlot::new(Arc::new(storage), "counter");
        assert_eq!(slot.load(), Some(Counter { count: 9 }));
    }
}
