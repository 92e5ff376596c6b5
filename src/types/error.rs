//! Error types for the sales analytics engine
//!
//! This module defines all error types that can occur while loading a dataset,
//! validating it, and writing the resulting report.
//!
//! # Error Categories
//!
//! - **Precondition Errors**: Malformed dataset or incomplete strategy bundle
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **Parsing Errors**: Malformed JSON input, CSV serialization failures
//!
//! Soft data inconsistencies (unknown sellers, unknown SKUs, non-finite
//! strategy output) are never reported through this type. They are skipped or
//! zeroed during aggregation.

use thiserror::Error;

/// Main error type for the sales analytics engine
///
/// Every variant is fatal: the analysis either completes or fails before any
/// seller statistics are built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// Dataset is missing or structurally malformed
    ///
    /// Raised when the dataset is absent, when one of the required record
    /// sequences is missing, not a sequence, or empty, and when seller
    /// identifiers are duplicated.
    #[error("Invalid input data: {reason}")]
    InvalidInput {
        /// What is wrong with the dataset
        reason: String,
    },

    /// Strategy bundle is incomplete
    ///
    /// Raised when a required revenue or bonus calculator was not supplied.
    #[error("Invalid options: {reason}")]
    InvalidOptions {
        /// What is wrong with the strategy bundle
        reason: String,
    },

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Input or output could not be parsed or serialized
    #[error("Parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

// Conversion from io::Error to AnalysisError
impl From<std::io::Error> for AnalysisError {
    fn from(error: std::io::Error) -> Self {
        AnalysisError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from serde_json::Error to AnalysisError
impl From<serde_json::Error> for AnalysisError {
    fn from(error: serde_json::Error) -> Self {
        if error.is_io() {
            return AnalysisError::IoError {
                message: error.to_string(),
            };
        }

        // serde_json reports line 0 when no position is known
        let line = match error.line() {
            0 => None,
            l => Some(l as u64),
        };

        AnalysisError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to AnalysisError
impl From<csv::Error> for AnalysisError {
    fn from(error: csv::Error) -> Self {
        if let csv::ErrorKind::Io(io_error) = error.kind() {
            return AnalysisError::IoError {
                message: io_error.to_string(),
            };
        }

        let line = error.position().map(|pos| pos.line());

        AnalysisError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl AnalysisError {
    /// Create an InvalidInput error
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        AnalysisError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Create an InvalidOptions error
    pub fn invalid_options(reason: impl Into<String>) -> Self {
        AnalysisError::InvalidOptions {
            reason: reason.into(),
        }
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        AnalysisError::FileNotFound { path: path.into() }
    }
}
