//! Error types with caller location tracking.

use derive_more::{Display, Error};
use tracing::instrument;

/// Raised when a screen identifier outside the closed set reaches the navigator.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid screen '{}' at {}:{}", name, file, line)]
pub struct InvalidScreenError {
    /// The identifier that failed to resolve.
    pub name: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InvalidScreenError {
    /// Creates a new invalid screen error with caller location tracking.
    #[track_caller]
    #[instrument(skip(name))]
    pub fn new(name: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            name: name.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Screen registry construction error.
#[derive(Debug, Clone, Display, Error)]
#[display("Registry error: {} at {}:{}", message, file, line)]
pub struct RegistryError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl RegistryError {
    /// Creates a new registry error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<InvalidScreenError> for ConfigError {
    #[track_caller]
    fn from(err: InvalidScreenError) -> Self {
        Self::new(format!("Unknown screen identifier '{}'", err.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_screen_error_records_caller() {
        let err = InvalidScreenError::new("kitchen");
        assert_eq!(err.name, "kitchen");
        assert!(err.file.ends_with("error.rs"));
        assert!(err.to_string().starts_with("Invalid screen 'kitchen'"));
    }

    #[test]
    fn test_config_error_from_invalid_screen() {
        let err: ConfigError = InvalidScreenError::new("bar").into();
        assert!(err.message.contains("'bar'"));
    }
}
