//! Configuration options for JSON compaction

/// Compaction configuration options
#[derive(Debug, Clone, PartialEq)]
pub struct CompactConfig {
    /// Literal, case-sensitive file name suffix selecting files to rewrite
    pub suffix: String,
    /// Re-validate each file after it has been rewritten
    pub validate_output: bool,
    /// Descend into symlinked directories
    pub follow_links: bool,
}

impl Default for CompactConfig {
    fn default() -> Self {
        Self {
            suffix: ".json".to_string(),
            validate_output: true,
            follow_links: false,
        }
    }
}

impl CompactConfig {
    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), String> {
        if self.suffix.is_empty() {
            return Err("File suffix must not be empty".to_string());
        }

        Ok(())
    }
}
