//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Rejected user input (empty fields, zero or non-numeric amounts)
    #[error("Validation error: {0}")]
    Validation(String),

    /// A ledger operation was attempted with nobody logged in
    #[error("No user is logged in. Run 'expense login <username>' first")]
    NoSession,

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors, including stored values that fail to parse
    #[error("Storage error: {0}")]
    Storage(String),
}

impl TrackerError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrackerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_no_session_error() {
        let err = TrackerError::NoSession;
        assert!(err.to_string().contains("expense login"));
    }

    #[test]
    fn test_validation_error() {
        let err = TrackerError::Validation("Please enter a valid amount".into());
        assert!(err.is_validation());
        assert!(!TrackerError::NoSession.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let tracker_err: TrackerError = io_err.into();
        assert!(matches!(tracker_err, TrackerError::Io(_)));
    }
}
