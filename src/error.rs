//! Custom error types for PassGen
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// Validation failures that are reported back to the user inline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Password generation was requested with no character class enabled
    #[error("Please select at least one character type")]
    NoCharacterClassSelected,

    /// A credential was submitted without one of its required fields
    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),

    /// A user-supplied value could not be interpreted
    #[error("{0}")]
    InvalidValue(String),
}

/// The main error type for PassGen operations
#[derive(Error, Debug)]
pub enum PassgenError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for requests and records
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Import payload could not be understood at all
    #[error("Malformed import: {0}")]
    MalformedImport(String),

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl PassgenError {
    /// Create a "not found" error for vault credentials
    pub fn credential_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Credential",
            identifier: identifier.into(),
        }
    }

    /// Create a missing-field validation error
    pub fn missing_field(field: &'static str) -> Self {
        Self::Validation(ValidationError::MissingRequiredField(field))
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for PassgenError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PassgenError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for PassGen operations
pub type PassgenResult<T> = Result<T, PassgenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PassgenError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = PassgenError::credential_not_found("42");
        assert_eq!(err.to_string(), "Credential not found: 42");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_validation_error_display() {
        let err: PassgenError = ValidationError::NoCharacterClassSelected.into();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Validation error: Please select at least one character type"
        );

        let err = PassgenError::missing_field("url");
        assert_eq!(err.to_string(), "Validation error: Missing required field: url");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let passgen_err: PassgenError = io_err.into();
        assert!(matches!(passgen_err, PassgenError::Io(_)));
    }
}
