//! Key-value storage port
//!
//! Every persisted collection is a single JSON document stored under a key.
//! Components talk to the `KeyValueStore` trait only, so the disk backend can
//! be swapped for the in-memory one in tests.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{PassgenError, PassgenResult};

use super::file_io::{read_optional, write_atomic};

/// Durable storage addressed by key
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value stored under `key`, if any
    fn get(&self, key: &str) -> PassgenResult<Option<String>>;

    /// Overwrite the value stored under `key`
    fn set(&self, key: &str, value: &str) -> PassgenResult<()>;

    /// Remove `key` entirely (no-op if absent)
    fn remove(&self, key: &str) -> PassgenResult<()>;
}

/// Load a JSON array stored under `key`; an absent key is an empty collection
pub fn load_collection<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> PassgenResult<Vec<T>> {
    match store.get(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map_err(|e| PassgenError::Storage(format!("Failed to parse '{}': {}", key, e))),
        None => Ok(Vec::new()),
    }
}

/// Overwrite the collection stored under `key`
pub fn save_collection<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    items: &[T],
) -> PassgenResult<()> {
    let raw = serde_json::to_string_pretty(items)
        .map_err(|e| PassgenError::Storage(format!("Failed to serialize '{}': {}", key, e)))?;
    store.set(key, &raw)
}

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> PassgenResult<Option<String>> {
        read_optional(self.path_for(key))
    }

    fn set(&self, key: &str, value: &str) -> PassgenResult<()> {
        log::debug!("writing {}", self.path_for(key).display());
        write_atomic(self.path_for(key), value.as_bytes())
    }

    fn remove(&self, key: &str) -> PassgenResult<()> {
        let path = self.path_for(key);
        if path.exists() {
            log::debug!("removing {}", path.display());
            fs::remove_file(&path).map_err(|e| {
                PassgenError::Storage(format!("Failed to remove {}: {}", path.display(), e))
            })?;
        }
        Ok(())
    }
}

/// Volatile store, used by tests and embedders that don't want files
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether anything is stored under `key`
    #[cfg(test)]
    pub fn contains(&self, key: &str) -> bool {
        self.data
            .read()
            .map(|data| data.contains_key(key))
            .unwrap_or(false)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> PassgenResult<Option<String>> {
        let data = self.data.read().map_err(|e| {
            PassgenError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PassgenResult<()> {
        let mut data = self.data.write().map_err(|e| {
            PassgenError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> PassgenResult<()> {
        let mut data = self.data.write().map_err(|e| {
            PassgenError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        data.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn exercise(store: &dyn KeyValueStore) {
        assert!(store.get("k").unwrap().is_none());

        store.set("k", "[1,2]").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("[1,2]"));

        store.set("k", "[3]").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("[3]"));

        store.remove("k").unwrap();
        assert!(store.get("k").unwrap().is_none());

        // Removing again is fine
        store.remove("k").unwrap();
    }

    #[test]
    fn test_memory_store() {
        exercise(&MemoryStore::new());
    }

    #[test]
    fn test_json_file_store() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().to_path_buf());
        exercise(&store);
        assert!(!store.path_for("k").exists());
    }

    #[test]
    fn test_json_file_store_layout() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().to_path_buf());
        store.set("storedPasswords", "[]").unwrap();
        assert!(temp_dir.path().join("storedPasswords.json").exists());
    }

    #[test]
    fn test_collection_helpers() {
        let store = MemoryStore::new();
        let empty: Vec<u32> = load_collection(&store, "nums").unwrap();
        assert!(empty.is_empty());

        save_collection(&store, "nums", &[1u32, 2, 3]).unwrap();
        let loaded: Vec<u32> = load_collection(&store, "nums").unwrap();
        assert_eq!(loaded, vec![1, 2, 3]);

        store.set("nums", "{not json").unwrap();
        let broken: PassgenResult<Vec<u32>> = load_collection(&store, "nums");
        assert!(matches!(broken, Err(PassgenError::Storage(_))));
    }
}
