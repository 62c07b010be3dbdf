//! Per-file compaction pipeline: read, parse, rewrite compactly, re-validate

use serde_json::Value;
use std::path::Path;

use crate::compression::CompactConfig;
use crate::error::{CompactError, CompactResult, ParseError};
use crate::parser::{parse_document, read_document};
use crate::validation::{validate, ValidationResult};

/// What happened to a single file
#[derive(Debug)]
pub enum FileOutcome {
    /// The file was rewritten; `validation` is `None` when re-validation is disabled
    Compressed { validation: Option<ValidationResult> },
    /// The original content did not parse; the file was left untouched
    DecodeFailed(ParseError),
    /// Any other failure while reading or writing the file
    Failed(CompactError),
}

impl FileOutcome {
    pub fn is_compressed(&self) -> bool {
        matches!(self, FileOutcome::Compressed { .. })
    }
}

/// Serialize a document with no whitespace between tokens.
///
/// Separators are `,` and `:`, there is no trailing newline and non-ASCII
/// characters are written literally.
pub fn compact(value: &Value) -> CompactResult<String> {
    serde_json::to_string(value).map_err(|e| CompactError::encode(e.to_string()))
}

/// Parse `content` and return its compact form
pub fn compact_str(content: &str) -> CompactResult<String> {
    let value = parse_document(content)?;
    compact(&value)
}

/// Rewrite one file in compact form and re-validate it.
///
/// The write truncates the file in place. There is no rollback: a file that
/// fails re-validation keeps its rewritten content.
pub fn compress_file(path: &Path, config: &CompactConfig) -> FileOutcome {
    let _span = tracing::debug_span!("compress_file", path = %path.display()).entered();

    let value = match read_document(path) {
        Ok(value) => value,
        Err(CompactError::Decode(e)) => return FileOutcome::DecodeFailed(e),
        Err(e) => return FileOutcome::Failed(e),
    };

    if let Err(e) = rewrite(path, &value) {
        return FileOutcome::Failed(e);
    }

    let validation = config.validate_output.then(|| validate(path));
    if let Some(result) = &validation {
        if !result.is_valid() {
            tracing::warn!(path = %path.display(), "rewritten file failed validation");
        }
    }

    FileOutcome::Compressed { validation }
}

fn rewrite(path: &Path, value: &Value) -> CompactResult<()> {
    let content = compact(value)?;
    std::fs::write(path, &content).map_err(|e| CompactError::io(&e, Some(path.to_path_buf())))?;
    tracing::debug!(bytes = content.len(), "rewrote file");
    Ok(())
}
