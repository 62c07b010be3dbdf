//! Error types and handling infrastructure for JSON compaction

use std::fmt;
use std::path::PathBuf;

/// Main error type for compaction operations
#[derive(Debug, thiserror::Error)]
pub enum CompactError {
    #[error(transparent)]
    Decode(#[from] ParseError),

    #[error("{message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("JSON encode error: {message}")]
    Encode { message: String },

    #[error("Failed walking {}: {}", .path.display(), .message)]
    Walk { message: String, path: PathBuf },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl CompactError {
    pub fn io(error: &std::io::Error, path: Option<PathBuf>) -> Self {
        match (error.kind(), path) {
            (std::io::ErrorKind::NotFound, Some(path)) => Self::NotFound { path },
            (_, path) => Self::Io {
                message: error.to_string(),
                path,
            },
        }
    }

    pub fn encode(message: String) -> Self {
        Self::Encode { message }
    }

    pub fn walk(message: String, path: PathBuf) -> Self {
        Self::Walk { message, path }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Decode(err) => format!("JSON parse error: {}", err),
            Self::Io {
                message,
                path: Some(path),
            } => format!("{} ({})", message, path.display()),
            _ => self.to_string(),
        }
    }
}

/// JSON parsing errors
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub location: Option<(usize, usize)>,
}

impl ParseError {
    pub fn new(message: String, location: Option<(usize, usize)>) -> Self {
        Self { message, location }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some((line, col)) = self.location {
            write!(f, " at line {}, column {}", line, col)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Result type for compaction operations
pub type CompactResult<T> = Result<T, CompactError>;

/// Convenience result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
