//! Vault CLI commands
//!
//! Implements CLI commands for credential management.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_credential_details, format_credential_table};
use crate::error::PassgenResult;
use crate::models::{CredentialFields, CredentialId, GenerationRequest};
use crate::services::{CredentialVault, HistoryLog, PasswordGenerator};
use crate::storage::Storage;

use super::prompt::{confirm, prompt_password};

/// Vault subcommands
#[derive(Subcommand)]
pub enum VaultCommands {
    /// Store a new credential
    Add {
        /// Site or service URL
        #[arg(long)]
        url: String,
        /// Username or login
        #[arg(short, long)]
        username: Option<String>,
        /// Password (prompted for when omitted)
        #[arg(short, long, conflicts_with = "generate")]
        password: Option<String>,
        /// Generate the password with the default character classes
        #[arg(short, long)]
        generate: bool,
        /// Length of the generated password (6-32)
        #[arg(short, long, requires = "generate", value_parser = clap::value_parser!(u32).range(6..=32))]
        length: Option<u32>,
        /// Free-form notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// List stored credentials
    List {
        /// Only show credentials whose url or username contains this text
        #[arg(short, long)]
        search: Option<String>,
        /// Reveal passwords
        #[arg(long)]
        show: bool,
    },
    /// Show one credential
    Show {
        /// Credential ID
        id: CredentialId,
        /// Reveal the password
        #[arg(long)]
        show: bool,
    },
    /// Edit a credential; omitted fields keep their current value
    Edit {
        /// Credential ID
        id: CredentialId,
        #[arg(long)]
        url: Option<String>,
        #[arg(short, long)]
        username: Option<String>,
        #[arg(short, long)]
        password: Option<String>,
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Delete a credential
    Delete {
        /// Credential ID
        id: CredentialId,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a vault command
pub fn handle_vault_command(storage: &Storage, settings: &Settings, cmd: VaultCommands) -> PassgenResult<()> {
    let vault = CredentialVault::new(storage);

    match cmd {
        VaultCommands::Add {
            url,
            username,
            password,
            generate,
            length,
            notes,
        } => {
            let generated = if generate {
                let length = length.map(|l| l as usize).unwrap_or(settings.default_length);
                let request = GenerationRequest::new(settings.default_selection(), length);
                Some(PasswordGenerator::new().generate(&request)?)
            } else {
                None
            };

            let password = match (&generated, password) {
                (Some(generated), _) => generated.as_str().to_string(),
                (None, Some(password)) => password,
                (None, None) => prompt_password("Password: ")?,
            };

            let fields = CredentialFields {
                url,
                username: username.unwrap_or_default(),
                password,
                notes: notes.unwrap_or_default(),
            };

            let record = vault.create(fields)?;
            println!("Stored credential {} for {}", record.id, record.url);

            if let Some(generated) = generated {
                HistoryLog::new(storage).append(generated.as_str())?;
                println!("Generated password: {}", generated);
            }
        }

        VaultCommands::List { search, show } => {
            let records = match search {
                Some(term) => vault.search(&term)?,
                None => vault.list()?,
            };

            println!("{}", format_credential_table(&records, show || !settings.mask_passwords));
            if !records.is_empty() {
                println!("\nTotal: {} credentials", records.len());
            }
        }

        VaultCommands::Show { id, show } => match vault.get(id)? {
            Some(record) => print!(
                "{}",
                format_credential_details(&record, show || !settings.mask_passwords)
            ),
            None => println!("Credential not found: {}", id),
        },

        VaultCommands::Edit {
            id,
            url,
            username,
            password,
            notes,
        } => {
            let Some(existing) = vault.get(id)? else {
                println!("Credential not found: {}", id);
                return Ok(());
            };

            let current = existing.fields();
            let fields = CredentialFields {
                url: url.unwrap_or(current.url),
                username: username.unwrap_or(current.username),
                password: password.unwrap_or(current.password),
                notes: notes.unwrap_or(current.notes),
            };

            match vault.update(id, fields) {
                Ok(record) => println!("Updated credential {} ({})", record.id, record.url),
                Err(e) if e.is_not_found() => println!("{}", e),
                Err(e) => return Err(e),
            }
        }

        VaultCommands::Delete { id, force } => {
            let Some(record) = vault.get(id)? else {
                println!("Credential not found: {}", id);
                return Ok(());
            };

            if !force && !confirm(&format!("Delete credential for {}?", record.url))? {
                println!("Aborted.");
                return Ok(());
            }

            vault.delete(id)?;
            println!("Deleted credential {} ({})", record.id, record.url);
        }
    }

    Ok(())
}
