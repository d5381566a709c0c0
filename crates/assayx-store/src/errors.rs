//! Error handling for assayx-store
//!
//! Wraps assayx-core ExError with loader-specific helpers

use assayx_core::errors::{AxiomError, ExError, ExErrorKind};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a document validation error
pub fn document_validation(op: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op(op.to_string())
        .with_message(reason.to_string())
}

/// Create an unsupported schema version error
pub fn unsupported_schema_version(op: &str, found: u32) -> ExError {
    ExError::new(ExErrorKind::UnsupportedSchemaVersion)
        .with_op(op.to_string())
        .with_message(format!("Unsupported schema_version: {}. Expected 0", found))
}

/// Create a parse error for YAML or JSON input
pub fn parse_error(op: &str, format: &str, err: impl std::fmt::Display) -> ExError {
    ExError::new(ExErrorKind::Parse)
        .with_op(op.to_string())
        .with_message(format!("{} parse error: {}", format, err))
}

/// Create a serialization error for YAML or JSON output
pub fn serialization_error(op: &str, err: impl std::fmt::Display) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op(op.to_string())
        .with_message(err.to_string())
}

/// Lift a domain validation error into the loader's context
pub fn from_axiom(op: &str, err: AxiomError) -> ExError {
    ExError::from(err).with_op(op.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_path(path.display().to_string())
        .with_message(err.to_string())
}

/// Attach the file being loaded to an error that lacks one
pub fn at_path(err: ExError, path: &Path) -> ExError {
    if err.path().is_some() {
        err
    } else {
        err.with_path(path.display().to_string())
    }
}
