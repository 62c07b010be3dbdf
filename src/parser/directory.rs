use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::compression::CompactConfig;
use crate::error::{CompactError, CompactResult};

/// Find every file under `dir` whose name ends with the configured suffix.
///
/// The walk is depth-first and sorted by file name. A failure to read the
/// root itself is returned; failures on nested entries are logged and skipped.
pub fn find_json_files(dir: &Path, config: &CompactConfig) -> CompactResult<Vec<PathBuf>> {
    let mut json_files = Vec::new();

    let walker = WalkDir::new(dir)
        .follow_links(config.follow_links)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 || e.path() == Some(dir) => {
                return Err(CompactError::walk(e.to_string(), dir.to_path_buf()));
            }
            Err(e) => {
                tracing::warn!(
                    path = ?e.path(),
                    error = %e,
                    "skipping unreadable directory entry"
                );
                continue;
            }
        };

        let path = entry.path();
        if crate::parser::filter::has_suffix(path, &config.suffix) {
            json_files.push(path.to_path_buf());
        }
    }

    tracing::debug!(root = %dir.display(), count = json_files.len(), "collected json files");
    Ok(json_files)
}
