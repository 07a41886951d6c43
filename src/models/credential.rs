//! Credential model
//!
//! A labeled login stored in the vault. Records are persisted with camelCase
//! field names so vault files stay interchangeable with browser exports of the
//! same shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::CredentialId;
use crate::error::ValidationError;

/// The user-editable part of a credential
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialFields {
    pub url: String,
    pub username: String,
    pub password: String,
    pub notes: String,
}

impl CredentialFields {
    /// Fields with the two required values set
    pub fn new(url: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Check the required fields are present
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.trim().is_empty() {
            return Err(ValidationError::MissingRequiredField("url"));
        }
        if self.password.trim().is_empty() {
            return Err(ValidationError::MissingRequiredField("password"));
        }
        Ok(())
    }
}

/// A stored credential
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRecord {
    /// Unique identifier, stable across edits
    pub id: CredentialId,

    /// Site the credential belongs to
    pub url: String,

    #[serde(default)]
    pub username: String,

    pub password: String,

    #[serde(default)]
    pub notes: String,

    /// Set once on creation
    pub created_at: DateTime<Utc>,

    /// Refreshed on every edit
    pub updated_at: DateTime<Utc>,
}

impl CredentialRecord {
    /// Create a record from fields, stamped with the current time
    pub fn new(id: CredentialId, fields: CredentialFields) -> Self {
        let now = Utc::now();
        Self {
            id,
            url: fields.url,
            username: fields.username,
            password: fields.password,
            notes: fields.notes,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every editable field and refresh `updated_at`
    pub fn apply(&mut self, fields: CredentialFields) {
        self.url = fields.url;
        self.username = fields.username;
        self.password = fields.password;
        self.notes = fields.notes;
        self.updated_at = Utc::now();
    }

    /// The editable fields of this record
    pub fn fields(&self) -> CredentialFields {
        CredentialFields {
            url: self.url.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            notes: self.notes.clone(),
        }
    }

    /// Case-insensitive substring match against url or username
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.url.to_lowercase().contains(needle) || self.username.to_lowercase().contains(needle)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.fields().validate()
    }
}
