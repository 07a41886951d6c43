//! Core data models for PassGen
//!
//! Character classes and generation requests, generated-password history
//! entries, and vault credentials.

pub mod charset;
pub mod credential;
pub mod history;
pub mod ids;

pub use charset::{
    alphabet_for, CharacterClass, ClassSelection, GenerationPreset, GenerationRequest,
    DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH,
};
pub use credential::{CredentialFields, CredentialRecord};
pub use history::HistoryEntry;
pub use ids::{CredentialId, HistoryId};
