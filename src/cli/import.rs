//! Import CLI command

use std::path::Path;

use crate::error::{PassgenResult, ValidationError};
use crate::services::{ImportFormat, ImportService};
use crate::storage::Storage;

/// Handle `passgen import FILE [--format json|csv]`
pub fn handle_import_command(storage: &Storage, file: &Path, format: Option<&str>) -> PassgenResult<()> {
    let format = match format {
        Some(name) => Some(ImportFormat::parse(name).ok_or_else(|| {
            ValidationError::InvalidValue(format!("Unknown import format '{}' (expected json or csv)", name))
        })?),
        None => None,
    };

    let summary = ImportService::new(storage).import_file(file, format)?;

    println!("Imported {} credentials from {}", summary.accepted, file.display());
    if summary.skipped > 0 {
        println!(
            "Skipped {} invalid entries (a url and a password are required)",
            summary.skipped
        );
    }

    Ok(())
}
