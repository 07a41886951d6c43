//! Service layer for PassGen
//!
//! The service layer provides the operations behind each command on top of
//! the storage layer, handling validation, ID assignment and persistence.

pub mod generator;
pub mod history;
pub mod import;
pub mod strength;
pub mod vault;

pub use generator::{generate_password, GeneratedPassword, PasswordGenerator};
pub use history::{HistoryLog, HISTORY_CAPACITY};
pub use import::{ImportFormat, ImportService, ImportSummary};
pub use strength::{evaluate, StrengthTier};
pub use vault::CredentialVault;
