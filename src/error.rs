//! Error types for the analytics engines

use serde::Serialize;
use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

/// A single violated request precondition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Request field that failed validation
    pub field: String,
    /// Human readable reason
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Broad classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input: lengths, empty collections, out-of-range parameters
    InvalidInput,
    /// Degenerate numerics with no fallback value
    Numerical,
    /// Failures of the surrounding tooling (config files, JSON, IO)
    Internal,
}

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// One or more request fields failed validation
    #[error("Validation failed: {}", join_fields(.0))]
    InvalidRequest(Vec<FieldError>),

    /// Not enough values to compute a statistic
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Two inputs that must line up do not
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// A feature row with no values
    #[error("Feature row {row} is empty")]
    EmptyRow { row: usize },

    /// A feature row whose width differs from the first row
    #[error("Row {row} has inconsistent length: expected {expected}, got {got}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// The elimination ran out of pivot rows
    #[error("Singular matrix detected")]
    SingularMatrix,

    /// The solve finished but produced no usable solution
    #[error("Regression solver failed")]
    SolverFailed,

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for a single-field validation failure
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidRequest(vec![FieldError::new(field, message)])
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidRequest(_)
            | Error::InsufficientData(_)
            | Error::DimensionMismatch { .. }
            | Error::EmptyRow { .. }
            | Error::RaggedRow { .. } => ErrorKind::InvalidInput,
            Error::SingularMatrix | Error::SolverFailed => ErrorKind::Numerical,
            Error::Config(_) | Error::Json(_) | Error::Io(_) => ErrorKind::Internal,
        }
    }

    /// Whether the caller, not the engine, is responsible for the failure.
    ///
    /// Numerical failures count as client errors: they only arise from the
    /// shape of the submitted data.
    pub fn is_client_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidInput | ErrorKind::Numerical)
    }

    /// Field-level details, empty for non-validation errors
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Error::InvalidRequest(errors) => errors,
            _ => &[],
        }
    }
}

fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert_eq!(Error::SolverFailed.kind(), ErrorKind::Numerical);
        assert!(Error::SolverFailed.is_client_error());
        assert!(Error::EmptyRow { row: 0 }.is_client_error());
        assert!(!Error::Config("bad".into()).is_client_error());
    }

    #[test]
    fn test_validation_message_lists_fields() {
        let err = Error::InvalidRequest(vec![
            FieldError::new("text", "text must be at least 10 characters"),
            FieldError::new("topK", "topK cannot exceed 15"),
        ]);
        let message = err.to_string();

        assert!(message.contains("text: text must be at least 10 characters"));
        assert!(message.contains("topK: topK cannot exceed 15"));
        assert_eq!(err.field_errors().len(), 2);
    }
}
