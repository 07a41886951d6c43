//! Storage layer for PassGen
//!
//! Persisted collections sit behind the `KeyValueStore` port. The default
//! backend writes one JSON file per key with atomic writes; an in-memory
//! backend is available for tests.

pub mod credentials;
pub mod file_io;
pub mod history;
pub mod store;

pub use credentials::{CredentialRepository, VAULT_KEY};
pub use file_io::{read_json, write_json_atomic};
pub use history::{HistoryRepository, HISTORY_KEY};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};

use std::sync::Arc;

use crate::config::paths::PassgenPaths;
use crate::error::PassgenError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    store: Arc<dyn KeyValueStore>,
    pub history: HistoryRepository,
    pub credentials: CredentialRepository,
}

impl Storage {
    /// Create a file-backed Storage rooted at the configured data directory
    pub fn new(paths: &PassgenPaths) -> Result<Self, PassgenError> {
        paths.ensure_directories()?;
        Ok(Self::with_store(Arc::new(JsonFileStore::new(paths.data_dir()))))
    }

    /// Create a Storage over any backend
    pub fn with_store(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            history: HistoryRepository::new(store.clone()),
            credentials: CredentialRepository::new(store.clone()),
            store,
        }
    }

    /// Create a Storage that keeps everything in memory
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    /// The underlying key-value backend
    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Load all data from the backend
    pub fn load_all(&self) -> Result<(), PassgenError> {
        self.history.load()?;
        self.credentials.load()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PassgenPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(&paths).unwrap();
        storage.load_all().unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(storage.credentials.count().unwrap(), 0);
        assert_eq!(storage.history.count().unwrap(), 0);
    }

    #[test]
    fn test_repositories_share_backend() {
        let storage = Storage::in_memory();
        storage.store().set(VAULT_KEY, "[]").unwrap();
        storage.store().set(HISTORY_KEY, "[]").unwrap();
        storage.load_all().unwrap();
        assert_eq!(storage.credentials.count().unwrap(), 0);
    }
}
