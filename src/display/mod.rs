//! Display formatting for terminal output
//!
//! Turns credentials, history entries and strength tiers into the strings the
//! command handlers print.

pub mod credential;
pub mod history;
pub mod strength;

pub use credential::{format_credential_details, format_credential_table, mask_password};
pub use history::format_history;
pub use strength::{format_strength, strength_meter};
