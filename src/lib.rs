//! JSON directory compactor
//!
//! Walks a directory tree and rewrites every `.json` file in place with all
//! insignificant whitespace removed, then re-validates the rewritten file.

pub mod cli;
pub mod compression;
pub mod error;
pub mod parser;
pub mod validation;

// Re-export commonly used types
pub use compression::{
    compact, compact_str, compress_all, compress_file, CompactConfig, FileOutcome,
};
pub use error::{CompactError, CompactResult, ParseError};
pub use validation::{validate, ValidationError, ValidationResult};
