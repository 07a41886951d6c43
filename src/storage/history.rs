//! History repository
//!
//! Keeps the generated-password log in memory and persists it whole under
//! the `passwordHistory` key.

use std::collections::BTreeSet;
use std::sync::{Arc, RwLock};

use crate::error::{PassgenError, PassgenResult};
use crate::models::{HistoryEntry, HistoryId};

use super::store::{load_collection, save_collection, KeyValueStore};

/// Storage key for the history log
pub const HISTORY_KEY: &str = "passwordHistory";

/// Repository for history persistence, most recent entry first
pub struct HistoryRepository {
    store: Arc<dyn KeyValueStore>,
    entries: RwLock<Vec<HistoryEntry>>,
}

impl HistoryRepository {
    /// Create a new history repository
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Load history from the store
    pub fn load(&self) -> PassgenResult<()> {
        let loaded: Vec<HistoryEntry> = load_collection(self.store.as_ref(), HISTORY_KEY)?;

        let mut entries = self.entries.write().map_err(|e| {
            PassgenError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *entries = loaded;
        Ok(())
    }

    /// Persist the whole log
    pub fn save(&self) -> PassgenResult<()> {
        let entries = self.entries.read().map_err(|e| {
            PassgenError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        save_collection(self.store.as_ref(), HISTORY_KEY, &entries)
    }

    /// All entries, most recent first
    pub fn get_all(&self) -> PassgenResult<Vec<HistoryEntry>> {
        let entries = self.entries.read().map_err(|e| {
            PassgenError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(entries.clone())
    }

    /// Every ID currently in the log
    pub fn ids(&self) -> PassgenResult<BTreeSet<HistoryId>> {
        let entries = self.entries.read().map_err(|e| {
            PassgenError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(entries.iter().map(|entry| entry.id).collect())
    }

    /// Put an entry at the front and drop whatever falls past `capacity`
    pub fn push_front(&self, entry: HistoryEntry, capacity: usize) -> PassgenResult<()> {
        let mut entries = self.entries.write().map_err(|e| {
            PassgenError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        entries.insert(0, entry);
        entries.truncate(capacity);
        Ok(())
    }

    /// Drop every entry and the persisted key
    pub fn clear(&self) -> PassgenResult<()> {
        let mut entries = self.entries.write().map_err(|e| {
            PassgenError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        entries.clear();
        self.store.remove(HISTORY_KEY)
    }

    pub fn count(&self) -> PassgenResult<usize> {
        let entries = self.entries.read().map_err(|e| {
            PassgenError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(entries.len())
    }
}
