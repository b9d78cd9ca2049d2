//! Error handling for the stm32gen skeleton generator.
//!
//! This module defines the main error type `Error` used throughout the
//! generator, along with a convenient `Result` type alias. It uses
//! `thiserror` for easy error handling and implements conversions from
//! common error types.
//!
//! The taxonomy is deliberately small: shape problems are `InvalidArgument`,
//! structurally valid but empty inputs are `MissingData`, and everything the
//! filesystem or YAML layer reports is passed through untranslated.

use thiserror::Error;

/// Result type for skeleton generation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for skeleton generation operations
#[derive(Debug, Error)]
pub enum Error {
    /// A required parameter has the wrong shape
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A required parameter is structurally valid but empty or absent
    #[error("missing data: {0}")]
    MissingData(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Create a new invalid-argument error
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a new missing-data error
    pub fn missing_data<S: Into<String>>(msg: S) -> Self {
        Self::MissingData(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_invalid_argument_creation() {
        let error = Error::invalid_argument("manifest is not a mapping");
        assert!(matches!(error, Error::InvalidArgument(_)));
        assert_eq!(
            error.to_string(),
            "invalid argument: manifest is not a mapping"
        );
    }

    #[test]
    fn test_missing_data_creation() {
        let error = Error::missing_data("empty project name");
        assert!(matches!(error, Error::MissingData(_)));
        assert_eq!(error.to_string(), "missing data: empty project name");
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
        assert!(error.to_string().contains("I/O error"));
        assert!(error.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_from_yaml_error() {
        let yaml_result: std::result::Result<serde_yaml::Value, _> =
            serde_yaml::from_str(": not : valid : yaml :");
        let error: Error = yaml_result.unwrap_err().into();
        assert!(matches!(error, Error::Yaml(_)));
        assert!(error.to_string().contains("YAML parsing error"));
    }
}
