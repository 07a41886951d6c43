//! Credential vault service
//!
//! Validation and bookkeeping for stored credentials on top of the
//! credential repository.

use crate::error::{PassgenError, PassgenResult};
use crate::export;
use crate::models::{CredentialFields, CredentialId, CredentialRecord};
use crate::storage::Storage;

/// Service for credential management
pub struct CredentialVault<'a> {
    storage: &'a Storage,
}

impl<'a> CredentialVault<'a> {
    /// Create a new vault service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Store a new credential
    pub fn create(&self, fields: CredentialFields) -> PassgenResult<CredentialRecord> {
        fields.validate()?;

        let id = CredentialId::fresh(&self.storage.credentials.ids()?);
        let record = CredentialRecord::new(id, fields);

        self.storage.credentials.extend(vec![record.clone()])?;
        self.storage.credentials.save()?;

        log::info!("stored credential {} for {}", record.id, record.url);
        Ok(record)
    }

    /// Replace every editable field of an existing credential
    pub fn update(&self, id: CredentialId, fields: CredentialFields) -> PassgenResult<CredentialRecord> {
        let mut record = self
            .storage
            .credentials
            .get(id)?
            .ok_or_else(|| PassgenError::credential_not_found(id.to_string()))?;

        fields.validate()?;
        record.apply(fields);

        self.storage.credentials.replace(record.clone())?;
        self.storage.credentials.save()?;

        log::info!("updated credential {}", record.id);
        Ok(record)
    }

    /// Delete a credential; deleting an unknown ID does nothing
    pub fn delete(&self, id: CredentialId) -> PassgenResult<Option<CredentialRecord>> {
        let removed = self.storage.credentials.delete(id)?;

        if let Some(record) = &removed {
            self.storage.credentials.save()?;
            log::info!("deleted credential {}", record.id);
        }

        Ok(removed)
    }

    /// Get a credential by ID
    pub fn get(&self, id: CredentialId) -> PassgenResult<Option<CredentialRecord>> {
        self.storage.credentials.get(id)
    }

    /// All credentials in stored order
    pub fn list(&self) -> PassgenResult<Vec<CredentialRecord>> {
        self.storage.credentials.get_all()
    }

    /// Case-insensitive substring search over url and username
    ///
    /// An empty term returns every credential.
    pub fn search(&self, term: &str) -> PassgenResult<Vec<CredentialRecord>> {
        let records = self.storage.credentials.get_all()?;
        if term.is_empty() {
            return Ok(records);
        }

        let needle = term.to_lowercase();
        Ok(records.into_iter().filter(|r| r.matches(&needle)).collect())
    }

    /// Serialize the vault as a pretty-printed JSON array
    pub fn export_json(&self) -> PassgenResult<Vec<u8>> {
        let mut out = Vec::new();
        export::export_vault_json(&self.list()?, &mut out)?;
        Ok(out)
    }

    /// Serialize the vault as always-quoted CSV
    pub fn export_csv(&self) -> PassgenResult<Vec<u8>> {
        let mut out = Vec::new();
        export::export_vault_csv(&self.list()?, &mut out)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::storage::VAULT_KEY;

    #[test]
    fn test_create_and_get() {
        let storage = Storage::in_memory();
        let vault = CredentialVault::new(&storage);

        let record = vault
            .create(CredentialFields::new("https://example.com", "s3cret").with_username("alice"))
            .unwrap();

        assert_eq!(record.created_at, record.updated_at);
        let fetched = vault.get(record.id).unwrap().unwrap();
        assert_eq!(fetched, record);
        assert!(storage.store().get(VAULT_KEY).unwrap().is_some());
    }

    #[test]
    fn test_create_requires_url_and_password() {
        let storage = Storage::in_memory();
        let vault = CredentialVault::new(&storage);

        let err = vault.create(CredentialFields::new("", "x")).unwrap_err();
        assert!(matches!(
            err,
            PassgenError::Validation(ValidationError::MissingRequiredField("url"))
        ));

        let err = vault.create(CredentialFields::new("https://a.com", "")).unwrap_err();
        assert!(matches!(
            err,
            PassgenError::Validation(ValidationError::MissingRequiredField("password"))
        ));

        assert!(vault.list().unwrap().is_empty());
        assert!(storage.store().get(VAULT_KEY).unwrap().is_none());
    }

    #[test]
    fn test_ids_unique_within_same_millisecond() {
        let storage = Storage::in_memory();
        let vault = CredentialVault::new(&storage);

        let a = vault.create(CredentialFields::new("a.com", "1")).unwrap();
        let b = vault.create(CredentialFields::new("a.com", "2")).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_update_preserves_identity_and_created_at() {
        let storage = Storage::in_memory();
        let vault = CredentialVault::new(&storage);
        let original = vault
            .create(CredentialFields::new("https://a.com", "old").with_notes("n"))
            .unwrap();

        let updated = vault
            .update(original.id, CredentialFields::new("https://b.com", "new"))
            .unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert!(updated.updated_at >= original.updated_at);
        assert_eq!(updated.url, "https://b.com");
        assert_eq!(updated.notes, "");

        storage.credentials.load().unwrap();
        assert_eq!(vault.get(original.id).unwrap().unwrap().password, "new");
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let storage = Storage::in_memory();
        let vault = CredentialVault::new(&storage);
        let err = vault
            .update(CredentialId::from_raw(1), CredentialFields::new("a.com", "x"))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_update_rejects_blank_fields() {
        let storage = Storage::in_memory();
        let vault = CredentialVault::new(&storage);
        let record = vault.create(CredentialFields::new("a.com", "x")).unwrap();

        assert!(vault
            .update(record.id, CredentialFields::new("a.com", ""))
            .unwrap_err()
            .is_validation());
        assert_eq!(vault.get(record.id).unwrap().unwrap().password, "x");
    }

    #[test]
    fn test_delete_is_idempotent_and_clears_key() {
        let storage = Storage::in_memory();
        let vault = CredentialVault::new(&storage);
        let record = vault.create(CredentialFields::new("a.com", "x")).unwrap();

        assert!(vault.delete(record.id).unwrap().is_some());
        assert!(vault.delete(record.id).unwrap().is_none());
        assert!(vault.list().unwrap().is_empty());
        assert!(storage.store().get(VAULT_KEY).unwrap().is_none());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let storage = Storage::in_memory();
        let vault = CredentialVault::new(&storage);
        vault
            .create(CredentialFields::new("https://example.com", "x"))
            .unwrap();
        vault
            .create(CredentialFields::new("https://other.org", "y").with_username("Example-User"))
            .unwrap();
        vault
            .create(CredentialFields::new("https://third.net", "z"))
            .unwrap();

        assert_eq!(vault.search("EXAMPLE").unwrap().len(), 2);
        assert_eq!(vault.search("third").unwrap().len(), 1);
        assert_eq!(vault.search("").unwrap().len(), 3);
        assert!(vault.search("nomatch").unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_urls_allowed() {
        let storage = Storage::in_memory();
        let vault = CredentialVault::new(&storage);
        vault.create(CredentialFields::new("a.com", "1")).unwrap();
        vault.create(CredentialFields::new("a.com", "2")).unwrap();
        assert_eq!(vault.list().unwrap().len(), 2);
    }
}
