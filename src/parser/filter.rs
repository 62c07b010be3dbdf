use std::path::Path;

/// Return true if the file name ends with `suffix` (case-sensitive) and resolves to a file
pub fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .is_some_and(|name| name.as_encoded_bytes().ends_with(suffix.as_bytes()))
        && path.is_file()
}
