//! Vault import service
//!
//! Bulk-loads credentials from JSON arrays or header-led CSV text. Every
//! incoming record is held to the same rules as a manually created one;
//! anything that fails them is skipped and counted rather than stored.

use std::collections::BTreeSet;
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{PassgenError, PassgenResult};
use crate::models::{CredentialFields, CredentialId, CredentialRecord};
use crate::storage::Storage;

/// Supported import formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Json,
    Csv,
}

impl ImportFormat {
    /// Pick a format from a file extension (`.json`, `.csv`, `.xlsx`)
    ///
    /// `.xlsx` files are read as delimited text, like `.csv`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "json" => Some(ImportFormat::Json),
            "csv" | "xlsx" => Some(ImportFormat::Csv),
            _ => None,
        }
    }

    /// Parse a format from its name
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Some(ImportFormat::Json),
            "csv" => Some(ImportFormat::Csv),
            _ => None,
        }
    }
}

/// Outcome of an import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Records appended to the vault
    pub accepted: usize,
    /// Records or rows that were dropped
    pub skipped: usize,
}

/// A record as it may appear in an imported JSON file
///
/// Every field may be missing, null or of an unexpected type. Values that
/// cannot be used are treated as missing: required fields then fail
/// validation, an unusable id gets a fresh one and an unusable timestamp
/// becomes now.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ImportedRecord {
    id: Option<Value>,
    url: Option<Value>,
    username: Option<Value>,
    password: Option<Value>,
    notes: Option<Value>,
    created_at: Option<Value>,
    updated_at: Option<Value>,
}

impl ImportedRecord {
    fn fields(&self) -> CredentialFields {
        CredentialFields {
            url: text(&self.url),
            username: text(&self.username),
            password: text(&self.password),
            notes: text(&self.notes),
        }
    }

    fn id(&self) -> Option<CredentialId> {
        match self.id.as_ref()? {
            Value::Number(n) => n
                .as_u64()
                .or_else(|| {
                    n.as_f64()
                        .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f < u64::MAX as f64)
                        .map(|f| f as u64)
                })
                .map(CredentialId::from_raw),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        timestamp(&self.created_at)
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        timestamp(&self.updated_at)
    }
}

/// String form of a scalar JSON value; anything else is empty
fn text(value: &Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Read an RFC 3339 timestamp, a bare date or datetime, or epoch milliseconds
fn timestamp(value: &Option<Value>) -> Option<DateTime<Utc>> {
    match value.as_ref()? {
        Value::String(s) => {
            let s = s.trim();
            if let Ok(parsed) = DateTime::parse_from_rfc3339(s) {
                return Some(parsed.with_timezone(&Utc));
            }
            if let Ok(parsed) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
                return Some(parsed.and_utc());
            }
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|midnight| midnight.and_utc())
        }
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}

/// Hands out IDs for imported records without colliding with existing ones
struct IdAllocator {
    taken: BTreeSet<CredentialId>,
}

impl IdAllocator {
    fn new(existing: &[CredentialRecord]) -> Self {
        Self {
            taken: existing.iter().map(|r| r.id).collect(),
        }
    }

    /// Keep `wanted` if it is free and not ahead of the clock, otherwise mint
    /// a fresh ID
    fn claim(&mut self, wanted: Option<CredentialId>) -> CredentialId {
        let id = match wanted {
            Some(id) if !self.taken.contains(&id) && !id.is_ahead_of_clock() => id,
            _ => CredentialId::fresh(&self.taken),
        };
        self.taken.insert(id);
        id
    }
}

/// Service for vault imports
pub struct ImportService<'a> {
    storage: &'a Storage,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Import a JSON array of credential objects
    ///
    /// Fails with `MalformedImport`, leaving the vault untouched, when the
    /// payload is not JSON or not an array.
    pub fn import_json(&self, payload: &str) -> PassgenResult<ImportSummary> {
        let value: serde_json::Value = serde_json::from_str(payload)
            .map_err(|e| PassgenError::MalformedImport(format!("Invalid JSON: {}", e)))?;

        let items = match value {
            serde_json::Value::Array(items) => items,
            _ => {
                return Err(PassgenError::MalformedImport(
                    "Expected a JSON array of credentials".into(),
                ))
            }
        };

        let existing = self.storage.credentials.get_all()?;
        let mut ids = IdAllocator::new(&existing);
        let mut accepted = Vec::new();
        let mut summary = ImportSummary::default();

        for (index, item) in items.into_iter().enumerate() {
            let imported: ImportedRecord = match serde_json::from_value(item) {
                Ok(record) => record,
                Err(e) => {
                    log::warn!("skipping JSON element {}: {}", index, e);
                    summary.skipped += 1;
                    continue;
                }
            };

            let fields = imported.fields();
            if let Err(e) = fields.validate() {
                log::warn!("skipping JSON element {}: {}", index, e);
                summary.skipped += 1;
                continue;
            }

            let mut record = CredentialRecord::new(ids.claim(imported.id()), fields);
            if let Some(created_at) = imported.created_at() {
                record.created_at = created_at;
            }
            record.updated_at = imported.updated_at().unwrap_or(record.created_at);

            accepted.push(record);
        }

        summary.accepted = accepted.len();
        self.commit(accepted)?;

        log::info!(
            "JSON import: {} accepted, {} skipped",
            summary.accepted,
            summary.skipped
        );
        Ok(summary)
    }

    /// Import CSV text laid out as `url,username,password[,notes]`
    ///
    /// The first line is always treated as a header. Each following line is
    /// parsed on its own, so a quoting mistake on one line cannot swallow the
    /// lines after it. Lines with fewer than three fields, lines the CSV
    /// reader cannot parse, and lines missing a url or password are dropped.
    /// Blank lines are ignored.
    pub fn import_csv(&self, payload: &str) -> PassgenResult<ImportSummary> {
        let existing = self.storage.credentials.get_all()?;
        let mut ids = IdAllocator::new(&existing);
        let mut accepted = Vec::new();
        let mut summary = ImportSummary::default();

        for (index, line) in payload.lines().enumerate().skip(1) {
            let row = index + 1;
            if line.trim().is_empty() {
                continue;
            }

            let fields = match parse_line(line) {
                Ok(Some(fields)) => fields,
                Ok(None) => {
                    log::warn!("skipping CSV row {}: fewer than 3 fields", row);
                    summary.skipped += 1;
                    continue;
                }
                Err(e) => {
                    log::warn!("skipping CSV row {}: {}", row, e);
                    summary.skipped += 1;
                    continue;
                }
            };

            if let Err(e) = fields.validate() {
                log::warn!("skipping CSV row {}: {}", row, e);
                summary.skipped += 1;
                continue;
            }

            accepted.push(CredentialRecord::new(ids.claim(None), fields));
        }

        summary.accepted = accepted.len();
        self.commit(accepted)?;

        log::info!(
            "CSV import: {} accepted, {} skipped",
            summary.accepted,
            summary.skipped
        );
        Ok(summary)
    }

    /// Read a file and import it, picking the format from the extension
    /// unless one is given
    pub fn import_file(&self, path: &Path, format: Option<ImportFormat>) -> PassgenResult<ImportSummary> {
        let format = match format.or_else(|| ImportFormat::from_path(path)) {
            Some(format) => format,
            None => {
                return Err(PassgenError::Import(format!(
                    "Cannot tell the format of {}; use a .json, .csv or .xlsx file or pass --format",
                    path.display()
                )))
            }
        };

        if !path.exists() {
            return Err(PassgenError::Import(format!(
                "File not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| PassgenError::Import(format!("Failed to read file: {}", e)))?;

        match format {
            ImportFormat::Json => self.import_json(&content),
            ImportFormat::Csv => self.import_csv(&content),
        }
    }

    fn commit(&self, records: Vec<CredentialRecord>) -> PassgenResult<()> {
        if records.is_empty() {
            return Ok(());
        }
        self.storage.credentials.extend(records)?;
        self.storage.credentials.save()
    }
}

/// Parse one CSV line; `Ok(None)` when it has fewer than three fields
fn parse_line(line: &str) -> Result<Option<CredentialFields>, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(line.as_bytes());

    match reader.records().next() {
        Some(record) => Ok(parse_row(&record?)),
        None => Ok(None),
    }
}

/// Map a CSV row onto credential fields (columns: url, username, password, notes)
fn parse_row(record: &StringRecord) -> Option<CredentialFields> {
    if record.len() < 3 {
        return None;
    }

    let field = |i: usize| record.get(i).map(strip_quotes).unwrap_or_default();

    Some(CredentialFields {
        url: field(0),
        username: field(1),
        password: field(2),
        notes: field(3),
    })
}

/// Remove one layer of surrounding quote characters the CSV reader left behind
fn strip_quotes(field: &str) -> String {
    let field = field.strip_prefix(['"', '\'']).unwrap_or(field);
    let field = field.strip_suffix(['"', '\'']).unwrap_or(field);
    field.trim().to_string()
}
