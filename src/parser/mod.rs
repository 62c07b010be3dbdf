//! JSON document reading and parsing

pub mod directory;
pub mod filter;

use crate::error::{CompactError, CompactResult, ParseError, ParseResult};
use serde_json::Value;
use std::path::Path;

/// Parse a single JSON document from a string
pub fn parse_document(content: &str) -> ParseResult<Value> {
    serde_json::from_str(content).map_err(|e| to_parse_error(&e))
}

/// Read a UTF-8 file and parse its full contents as one JSON document
pub fn read_document(path: &Path) -> CompactResult<Value> {
    let content =
        std::fs::read_to_string(path).map_err(|e| CompactError::io(&e, Some(path.to_path_buf())))?;

    Ok(parse_document(&content)?)
}

/// Convert a serde_json error, splitting the trailing position off the message
pub(crate) fn to_parse_error(error: &serde_json::Error) -> ParseError {
    let location = extract_error_location(error);
    let full = error.to_string();

    let message = match location {
        Some((line, col)) => {
            let suffix = format!(" at line {} column {}", line, col);
            full.strip_suffix(&suffix).unwrap_or(&full).to_string()
        }
        None => full,
    };

    ParseError::new(message, location)
}

/// serde_json reports line 0 for errors that have no position (e.g. I/O)
fn extract_error_location(error: &serde_json::Error) -> Option<(usize, usize)> {
    if error.line() == 0 {
        None
    } else {
        Some((error.line(), error.column()))
    }
}
