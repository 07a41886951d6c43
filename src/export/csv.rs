//! CSV Export functionality
//!
//! Every field is quoted and embedded quotes are doubled, so urls, notes and
//! passwords containing commas survive a round trip through a spreadsheet.

use crate::error::{PassgenError, PassgenResult};
use crate::models::CredentialRecord;
use csv::{QuoteStyle, WriterBuilder};
use std::io::Write;

/// Header row written ahead of the data rows
pub const CSV_HEADER: &str = "URL,Username,Password,Notes";

/// Write credentials as CSV
pub fn export_vault_csv<W: Write>(records: &[CredentialRecord], writer: &mut W) -> PassgenResult<()> {
    writeln!(writer, "{}", CSV_HEADER).map_err(|e| PassgenError::Export(e.to_string()))?;

    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .from_writer(&mut *writer);

    for record in records {
        csv_writer
            .write_record([
                record.url.as_str(),
                record.username.as_str(),
                record.password.as_str(),
                record.notes.as_str(),
            ])
            .map_err(|e| PassgenError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| PassgenError::Export(e.to_string()))?;
    Ok(())
}
