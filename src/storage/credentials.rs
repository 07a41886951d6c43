//! Credential repository
//!
//! Holds the vault as an ordered sequence and persists it whole under the
//! `storedPasswords` key. An empty vault has no persisted key at all.

use std::collections::BTreeSet;
use std::sync::{Arc, RwLock};

use crate::error::{PassgenError, PassgenResult};
use crate::models::{CredentialId, CredentialRecord};

use super::store::{load_collection, save_collection, KeyValueStore};

/// Storage key for the vault
pub const VAULT_KEY: &str = "storedPasswords";

/// Repository for credential persistence
pub struct CredentialRepository {
    store: Arc<dyn KeyValueStore>,
    records: RwLock<Vec<CredentialRecord>>,
}

impl CredentialRepository {
    /// Create a new credential repository
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            records: RwLock::new(Vec::new()),
        }
    }

    /// Load credentials from the store
    pub fn load(&self) -> PassgenResult<()> {
        let loaded: Vec<CredentialRecord> = load_collection(self.store.as_ref(), VAULT_KEY)?;

        let mut records = self.records.write().map_err(|e| {
            PassgenError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *records = loaded;
        Ok(())
    }

    /// Persist the vault, or drop the key if the vault is empty
    pub fn save(&self) -> PassgenResult<()> {
        let records = self.records.read().map_err(|e| {
            PassgenError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        if records.is_empty() {
            self.store.remove(VAULT_KEY)
        } else {
            save_collection(self.store.as_ref(), VAULT_KEY, &records)
        }
    }

    /// Get a credential by ID
    pub fn get(&self, id: CredentialId) -> PassgenResult<Option<CredentialRecord>> {
        let records = self.records.read().map_err(|e| {
            PassgenError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    /// All credentials in stored order
    pub fn get_all(&self) -> PassgenResult<Vec<CredentialRecord>> {
        let records = self.records.read().map_err(|e| {
            PassgenError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(records.clone())
    }

    /// Every ID currently in the vault
    pub fn ids(&self) -> PassgenResult<BTreeSet<CredentialId>> {
        let records = self.records.read().map_err(|e| {
            PassgenError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(records.iter().map(|r| r.id).collect())
    }

    /// Append credentials to the end of the vault
    pub fn extend(&self, new_records: Vec<CredentialRecord>) -> PassgenResult<()> {
        let mut records = self.records.write().map_err(|e| {
            PassgenError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        records.extend(new_records);
        Ok(())
    }

    /// Replace the credential with the same ID; returns false if there is none
    pub fn replace(&self, record: CredentialRecord) -> PassgenResult<bool> {
        let mut records = self.records.write().map_err(|e| {
            PassgenError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        match records.iter_mut().find(|r| r.id == record.id) {
            Some(slot) => {
                *slot = record;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove a credential, returning it if it existed
    pub fn delete(&self, id: CredentialId) -> PassgenResult<Option<CredentialRecord>> {
        let mut records = self.records.write().map_err(|e| {
            PassgenError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        match records.iter().position(|r| r.id == id) {
            Some(index) => Ok(Some(records.remove(index))),
            None => Ok(None),
        }
    }

    pub fn count(&self) -> PassgenResult<usize> {
        let records = self.records.read().map_err(|e| {
            PassgenError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(records.len())
    }
}
