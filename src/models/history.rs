//! History entry model
//!
//! One record in the bounded log of generated passwords.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::HistoryId;

/// A previously generated password
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Unique identifier
    pub id: HistoryId,

    /// The generated password
    pub password: String,

    /// When the password was generated
    #[serde(alias = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create an entry stamped with the current time
    pub fn new(id: HistoryId, password: impl Into<String>) -> Self {
        Self {
            id,
            password: password.into(),
            created_at: Utc::now(),
        }
    }
}
