//! Export CLI command
//!
//! Writes the vault to a file in JSON or CSV format.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::error::{PassgenError, PassgenResult, ValidationError};
use crate::export::{default_export_filename, export_vault_csv, export_vault_json, ExportFormat};
use crate::services::CredentialVault;
use crate::storage::Storage;

/// Handle `passgen export [--format json|csv] [--output PATH]`
pub fn handle_export_command(
    storage: &Storage,
    format: Option<&str>,
    output: Option<PathBuf>,
) -> PassgenResult<()> {
    let format = match format {
        Some(name) => ExportFormat::parse(name).ok_or_else(|| {
            ValidationError::InvalidValue(format!("Unknown export format '{}' (expected json or csv)", name))
        })?,
        None => ExportFormat::default(),
    };

    let path = output.unwrap_or_else(|| {
        PathBuf::from(default_export_filename(format, chrono::Local::now().date_naive()))
    });

    let records = CredentialVault::new(storage).list()?;

    let file = File::create(&path).map_err(|e| {
        PassgenError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Json => export_vault_json(&records, &mut writer)?,
        ExportFormat::Csv => export_vault_csv(&records, &mut writer)?,
    }

    std::io::Write::flush(&mut writer).map_err(|e| PassgenError::Export(e.to_string()))?;

    println!("Exported {} credentials to {}", records.len(), path.display());
    if records.is_empty() {
        println!("The vault is empty; the file contains no credentials.");
    }

    Ok(())
}
