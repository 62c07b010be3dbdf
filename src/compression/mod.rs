//! In-place JSON compaction over a directory tree
//!
//! Files are handled strictly one at a time. A failure on one file is
//! reported and the walk moves on to the next.

pub mod config;
pub mod engine;
pub mod report;

pub use config::CompactConfig;
pub use engine::{compact, compact_str, compress_file, FileOutcome};

use std::io::Write;
use std::path::Path;

use crate::error::{CompactError, CompactResult};
use crate::parser::directory::find_json_files;

/// Compact every matching file under `root`, printing one report per file to stdout
pub fn compress_all(root: &Path, config: &CompactConfig) -> CompactResult<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    compress_all_to(root, config, &mut out)
}

/// Same as [`compress_all`] but writes the per-file report to `out`
pub fn compress_all_to<W: Write>(
    root: &Path,
    config: &CompactConfig,
    out: &mut W,
) -> CompactResult<()> {
    config.validate().map_err(CompactError::configuration)?;

    tracing::info!(root = %root.display(), "compacting json files");
    let json_files = find_json_files(root, config)?;

    let total = json_files.len();
    let mut compressed = 0usize;

    for json_file in json_files {
        let outcome = compress_file(&json_file, config);
        if outcome.is_compressed() {
            compressed += 1;
        }
        if let FileOutcome::Failed(e) = &outcome {
            tracing::warn!(path = %json_file.display(), error = %e.user_message(), "file skipped");
        }

        // A closed console (e.g. broken pipe) must not stop the remaining files
        if let Err(e) = report::write_outcome(out, &json_file, &outcome).and_then(|()| out.flush()) {
            tracing::warn!(path = %json_file.display(), error = %e, "failed writing report");
        }
    }

    tracing::debug!(compressed, total, "finished walk");
    Ok(())
}
