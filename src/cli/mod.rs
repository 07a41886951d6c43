//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod generate;
pub mod history;
pub mod import;
pub mod prompt;
pub mod strength;
pub mod vault;

pub use export::handle_export_command;
pub use generate::{handle_generate_command, GenerateArgs};
pub use history::{handle_history_command, HistoryCommands};
pub use import::handle_import_command;
pub use strength::handle_strength_command;
pub use vault::{handle_vault_command, VaultCommands};
