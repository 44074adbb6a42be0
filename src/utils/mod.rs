// Shared utilities
//
// Small filesystem helpers used by the extractor manager.

use anyhow::{Context, Result};
use std::path::Path;

/// File utilities
pub mod file_utils {
    use super::*;
    use std::fs;

    /// Check if a file has a supported language extension
    pub fn is_supported_file(path: &Path) -> bool {
        crate::language::detect_language_from_extension(
            path.extension().and_then(|e| e.to_str()).unwrap_or(""),
        )
        .is_some()
    }

    /// Read file content safely
    pub fn read_file_content(path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }

}
