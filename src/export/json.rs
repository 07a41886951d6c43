//! JSON Export functionality
//!
//! The vault is written as a bare array so that an export can be fed straight
//! back into the JSON importer.

use crate::error::{PassgenError, PassgenResult};
use crate::models::CredentialRecord;
use std::io::Write;

/// Write credentials as a pretty-printed JSON array
pub fn export_vault_json<W: Write>(records: &[CredentialRecord], writer: &mut W) -> PassgenResult<()> {
    serde_json::to_writer_pretty(&mut *writer, records)
        .map_err(|e| PassgenError::Export(format!("JSON serialization failed: {}", e)))?;
    writeln!(writer).map_err(|e| PassgenError::Export(e.to_string()))?;
    Ok(())
}
