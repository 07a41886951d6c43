//! History display formatting

use crate::models::HistoryEntry;

/// Format the history log, newest first
pub fn format_history(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "No passwords generated yet.".to_string();
    }

    let width = entries
        .iter()
        .map(|e| e.password.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!("{:>3}  {:<width$}  {}\n", "#", "Password", "Generated", width = width));
    output.push_str(&format!("{:->3}  {:-<width$}  {:-<19}\n", "", "", "", width = width));

    for (index, entry) in entries.iter().enumerate() {
        output.push_str(&format!(
            "{:>3}  {:<width$}  {}\n",
            index + 1,
            entry.password,
            entry.created_at.format("%Y-%m-%d %H:%M:%S"),
            width = width
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HistoryId;

    #[test]
    fn test_format_history() {
        let entries = vec![
            HistoryEntry::new(HistoryId::from_raw(2), "newest-pass"),
            HistoryEntry::new(HistoryId::from_raw(1), "older-pass"),
        ];
        let output = format_history(&entries);
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[2].contains("newest-pass"));
        assert!(lines[3].trim_start().starts_with('2'));
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(format_history(&[]), "No passwords generated yet.");
    }
}
