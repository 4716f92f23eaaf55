//! Common types and utilities for ravt commands.

use std::path::{Path, PathBuf};

use crate::error::{RavtError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Output formats for the token listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `line:start-end kind text` record per line
    Text,
    /// One JSON array of token records per file
    Json,
}

impl OutputFormat {
    /// Parse a format name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

// ============================================================================
// Input Utilities
// ============================================================================

/// Validate that at least one input file was given.
pub fn validate_input_files(input: &[PathBuf]) -> Result<()> {
    if input.is_empty() {
        return Err(RavtError::Validation(
            error_messages::NO_INPUT_FILES.to_string(),
        ));
    }
    Ok(())
}

/// Read a source file, rejecting paths that are missing or not files.
pub fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(RavtError::FileOperation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }

    if !path.is_file() {
        return Err(RavtError::FileOperation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    std::fs::read_to_string(path)
        .map_err(|e| RavtError::FileOperation(format!("{}: {}", path.display(), e)))
}

/// Turn a count of failed files into an error.
pub fn check_for_failures(files_failed: usize) -> Result<()> {
    if files_failed > 0 {
        return Err(RavtError::FileOperation(format!(
            "{} {}",
            files_failed,
            error_messages::FILES_FAILED
        )));
    }
    Ok(())
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when an unknown format is specified.
    pub const UNKNOWN_FORMAT: &str = "Unknown format:";

    /// Error when config has an invalid format.
    pub const INVALID_CONFIG_FORMAT: &str = "Invalid format in configuration:";

    /// Error when the worker count is zero.
    pub const INVALID_JOBS: &str = "Number of jobs must be at least 1";

    /// Error when files failed to process.
    pub const FILES_FAILED: &str = "file(s) failed to process";

    /// Error when the init target is not a directory.
    pub const TARGET_NOT_DIR: &str = "Target path is not a directory:";

    /// Error when the configuration file already exists.
    pub const CONFIG_EXISTS: &str = "Configuration file already exists:";
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("text"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::parse("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("yaml"), None);
    }

    #[test]
    fn test_validate_input_files() {
        assert!(matches!(
            validate_input_files(&[]),
            Err(RavtError::Validation(_))
        ));
        assert!(validate_input_files(&[PathBuf::from("a.rv")]).is_ok());
    }

    #[test]
    fn test_read_source() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("main.rv");
        std::fs::write(&file, "print x\n").unwrap();

        assert_eq!(read_source(&file).unwrap(), "print x\n");
        assert!(matches!(
            read_source(temp_dir.path()),
            Err(RavtError::FileOperation(msg)) if msg.contains("not a file")
        ));
        assert!(matches!(
            read_source(&temp_dir.path().join("missing.rv")),
            Err(RavtError::FileOperation(msg)) if msg.contains("does not exist")
        ));
    }

    #[test]
    fn test_check_for_failures() {
        assert!(check_for_failures(0).is_ok());
        let err = check_for_failures(2).unwrap_err();
        assert_eq!(err.to_string(), "File operation failed: 2 file(s) failed to process");
    }
}
