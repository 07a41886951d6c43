//! User settings for PassGen
//!
//! Holds the defaults the generator falls back to when a command does not
//! spell out its own length or character classes.

use serde::{Deserialize, Serialize};

use super::paths::PassgenPaths;
use crate::error::PassgenError;
use crate::models::{
    CharacterClass, ClassSelection, GenerationRequest, DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH,
};
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings for PassGen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Password length used when none is given on the command line
    #[serde(default = "default_length")]
    pub default_length: usize,

    /// Character classes used when none are given on the command line
    #[serde(default = "default_classes")]
    pub default_classes: Vec<CharacterClass>,

    /// Whether vault listings hide passwords unless asked to show them
    #[serde(default = "default_mask_passwords")]
    pub mask_passwords: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_length() -> usize {
    DEFAULT_LENGTH
}

fn default_classes() -> Vec<CharacterClass> {
    vec![
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digits,
    ]
}

fn default_mask_passwords() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_length: default_length(),
            default_classes: default_classes(),
            mask_passwords: default_mask_passwords(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &PassgenPaths) -> Result<Self, PassgenError> {
        let settings: Settings = read_json(paths.settings_file()).map_err(|e| {
            PassgenError::Config(format!("Failed to load settings file: {}", e))
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PassgenPaths) -> Result<(), PassgenError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// The default character classes as a selection
    pub fn default_selection(&self) -> ClassSelection {
        self.default_classes.iter().copied().collect()
    }

    /// Check that the defaults describe a request the CLI would accept
    pub fn validate(&self) -> Result<(), PassgenError> {
        let request = GenerationRequest::new(self.default_selection(), self.default_length);
        if !request.is_length_in_range() {
            return Err(PassgenError::Config(format!(
                "default_length must be between {} and {}, got {}",
                MIN_LENGTH, MAX_LENGTH, self.default_length
            )));
        }

        if request.classes.is_empty() {
            return Err(PassgenError::Config(
                "default_classes must contain at least one character class".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_length, 12);
        assert!(settings.mask_passwords);
        assert!(settings.validate().is_ok());

        let selection = settings.default_selection();
        assert!(selection.contains(CharacterClass::Uppercase));
        assert!(selection.contains(CharacterClass::Lowercase));
        assert!(selection.contains(CharacterClass::Digits));
        assert!(!selection.contains(CharacterClass::Special));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PassgenPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.default_length = 20;
        settings.default_classes = vec![CharacterClass::Special];

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_length, 20);
        assert_eq!(loaded.default_classes, vec![CharacterClass::Special]);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PassgenPaths::with_base_dir(temp_dir.path().to_path_buf());

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_length, 12);
    }

    #[test]
    fn test_rejects_out_of_range_length() {
        let mut settings = Settings::default();
        settings.default_length = 64;
        assert!(matches!(settings.validate(), Err(PassgenError::Config(_))));

        settings.default_length = 12;
        settings.default_classes.clear();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_length_bounds_are_inclusive() {
        let mut settings = Settings::default();
        for (length, ok) in [(5, false), (6, true), (32, true), (33, false)] {
            settings.default_length = length;
            assert_eq!(settings.validate().is_ok(), ok, "length {}", length);
        }
    }

    #[test]
    fn test_partial_file_uses_field_defaults() {
        let json = r#"{ "default_length": 8 }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.default_length, 8);
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.default_classes.len(), 3);
    }
}
