//! Path management for PassGen
//!
//! ## Path Resolution Order
//!
//! 1. `PASSGEN_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory for `passgen`
//!    (`~/.config/passgen` on Linux, `~/Library/Application Support/passgen` on
//!    macOS, `%APPDATA%\passgen\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::PassgenError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "PASSGEN_DATA_DIR";

/// Manages all paths used by PassGen
#[derive(Debug, Clone)]
pub struct PassgenPaths {
    /// Base directory for all PassGen data
    base_dir: PathBuf,
}

impl PassgenPaths {
    /// Create a new PassgenPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, PassgenError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create PassgenPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory holding the persisted collections
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), PassgenError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PassgenError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| PassgenError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if PassGen has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, PassgenError> {
    ProjectDirs::from("", "", "passgen")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| PassgenError::Config("Could not determine a home directory".into()))
}
