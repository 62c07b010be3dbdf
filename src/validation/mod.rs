//! Post-write validation of JSON files

use std::path::Path;

use crate::error::{CompactError, ParseError};
use crate::parser::read_document;

/// Message reported when the file to validate does not exist
pub const FILE_NOT_FOUND: &str = "File not found.";

/// Why a file failed validation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{}", FILE_NOT_FOUND)]
    NotFound,

    #[error(transparent)]
    Malformed(#[from] ParseError),

    #[error("{0}")]
    Io(String),
}

/// Outcome of validating one file; `error` is set iff the file is invalid
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    valid: bool,
    error: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn invalid(error: &ValidationError) -> Self {
        Self {
            valid: false,
            error: Some(error.to_string()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Check that the file at `path` contains exactly one well-formed JSON document.
///
/// Read-only. Distinguishes a missing file from malformed JSON from any
/// other read or decoding failure.
pub fn validate(path: &Path) -> ValidationResult {
    match check(path) {
        Ok(()) => ValidationResult::valid(),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "validation failed");
            ValidationResult::invalid(&e)
        }
    }
}

/// Typed form of [`validate`]
pub fn check(path: &Path) -> Result<(), ValidationError> {
    match read_document(path) {
        Ok(_) => Ok(()),
        Err(CompactError::NotFound { .. }) => Err(ValidationError::NotFound),
        Err(CompactError::Decode(e)) => Err(ValidationError::Malformed(e)),
        Err(e) => Err(ValidationError::Io(e.to_string())),
    }
}
