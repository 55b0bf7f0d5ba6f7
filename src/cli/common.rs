//! Shared error and helper types for CLI command handlers.

use std::fmt;
use std::path::Path;

use crate::catalog::TokenCatalog;
use crate::config::Config;

/// Result type for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// What went wrong while executing a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// File or data could not be read, written, or parsed
    Io,
    /// The operation ran but its outcome is a failure
    Validation,
    /// The command was invoked with unusable arguments
    Usage,
}

/// CLI command error with a process exit code.
#[derive(Debug, Clone)]
pub struct CliError {
    /// Error classification
    pub kind: CliErrorKind,
    /// Human-readable message
    pub message: String,
}

impl CliError {
    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// Creates a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Usage,
            message: message.into(),
        }
    }

    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self.kind {
            CliErrorKind::Validation => 1,
            CliErrorKind::Io | CliErrorKind::Usage => 2,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Resolves the catalog for a command: an explicit `--catalog` path
/// wins, then the configured default path, then the embedded catalog.
pub fn load_catalog(explicit: Option<&Path>) -> CliResult<TokenCatalog> {
    if let Some(path) = explicit {
        return TokenCatalog::from_file(path)
            .map_err(|e| CliError::io(format!("Failed to load catalog: {e}")));
    }

    let config = Config::load().map_err(|e| CliError::io(format!("Failed to load config: {e}")))?;
    if let Some(path) = config.catalog.path.as_ref() {
        return TokenCatalog::from_file(path)
            .map_err(|e| CliError::io(format!("Failed to load configured catalog: {e}")));
    }

    TokenCatalog::load().map_err(|e| CliError::io(format!("Failed to load embedded catalog: {e}")))
}

/// Reads scan input for commands that accept either a file path or
/// inline text. Exactly one source must be supplied.
pub fn read_scan_input(file: Option<&Path>, text: Option<&str>) -> CliResult<String> {
    match (file, text) {
        (Some(path), None) => std::fs::read_to_string(path)
            .map_err(|e| CliError::io(format!("Failed to read {}: {e}", path.display()))),
        (None, Some(text)) => Ok(text.to_string()),
        (Some(_), Some(_)) => Err(CliError::usage(
            "Supply either --file or --text, not both",
        )),
        (None, None) => Err(CliError::usage("Supply --file or --text to scan")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_scan_input_requires_one_source() {
        assert!(read_scan_input(None, None).is_err());
        assert!(read_scan_input(Some(Path::new("a.css")), Some("x")).is_err());
        assert_eq!(read_scan_input(None, Some("x")).unwrap(), "x");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::validation("x").exit_code(), 1);
        assert_eq!(CliError::io("x").exit_code(), 2);
        assert_eq!(CliError::usage("x").exit_code(), 2);
    }

    #[test]
    fn test_explicit_missing_catalog_is_io_error() {
        let err = load_catalog(Some(Path::new("/does/not/exist.json"))).unwrap_err();
        assert_eq!(err.kind, CliErrorKind::Io);
    }
}
