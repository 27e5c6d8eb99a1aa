//! Error types for the typography checker.
//!
//! The rule engine itself never fails. Everything here belongs to the
//! boundary: building rules from patterns and acquiring input text.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for typography operations.
pub type TypographyResult<T> = Result<T, TypographyError>;

/// Error type for rule construction and input handling.
#[derive(Debug, Error)]
pub enum TypographyError {
    /// Reading an input failed
    #[error("IO error for '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An input path does not name a regular file
    #[error("No such file: {}", path.display())]
    NotAFile { path: PathBuf },

    /// A rule pattern failed to compile
    #[error("Pattern error for '{pattern}': {reason}")]
    Pattern { pattern: String, reason: String },
}
