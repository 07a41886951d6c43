//! Credential display formatting
//!
//! Formats vault records for terminal output in table and detail views.
//! Passwords are masked unless the caller asks to reveal them.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::CredentialRecord;

const MASK: &str = "********";

#[derive(Tabled)]
struct CredentialRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "URL")]
    url: String,
    #[tabled(rename = "Username")]
    username: String,
    #[tabled(rename = "Password")]
    password: String,
    #[tabled(rename = "Notes")]
    notes: String,
}

/// Mask a password for display; the mask has a fixed width so it leaks nothing
pub fn mask_password(password: &str) -> &'static str {
    if password.is_empty() {
        ""
    } else {
        MASK
    }
}

/// Format a list of credentials as a table
pub fn format_credential_table(records: &[CredentialRecord], show_passwords: bool) -> String {
    if records.is_empty() {
        return "No credentials found.".to_string();
    }

    let rows = records.iter().map(|r| CredentialRow {
        id: r.id.to_string(),
        url: truncate(&r.url, 40),
        username: truncate(&r.username, 24),
        password: if show_passwords {
            r.password.clone()
        } else {
            mask_password(&r.password).to_string()
        },
        notes: truncate(&r.notes, 30),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

/// Format a single credential's details
pub fn format_credential_details(record: &CredentialRecord, show_password: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!("Credential: {}\n", record.url));
    output.push_str(&format!("  ID:       {}\n", record.id));
    output.push_str(&format!("  Username: {}\n", record.username));
    output.push_str(&format!(
        "  Password: {}\n",
        if show_password {
            record.password.as_str()
        } else {
            mask_password(&record.password)
        }
    ));

    if !record.notes.is_empty() {
        output.push('\n');
        output.push_str(&format!("  Notes: {}\n", record.notes));
    }

    output.push('\n');
    output.push_str(&format!(
        "  Created:  {}\n",
        record.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  Modified: {}\n",
        record.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
