//! Export module for PassGen
//!
//! Writes the credential vault in two formats:
//! - JSON: pretty-printed array of full records, re-importable as-is
//! - CSV: spreadsheet-friendly `URL,Username,Password,Notes` rows

pub mod csv;
pub mod json;

pub use self::csv::export_vault_csv;
pub use self::json::export_vault_json;

use chrono::NaiveDate;
use std::fmt;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl ExportFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    /// Parse a format from its name
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Some(ExportFormat::Json),
            "csv" => Some(ExportFormat::Csv),
            _ => None,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Default file name for an export made on `date`, e.g. `passwords_2024-03-01.json`
pub fn default_export_filename(format: ExportFormat, date: NaiveDate) -> String {
    format!("passwords_{}.{}", date.format("%Y-%m-%d"), format.extension())
}
