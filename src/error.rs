//! Error types for the Orthos library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`OrthosError`] enum. Initialization and snapshot I/O surface explicit
//! failures; lookup and candidate generation never fail on an initialized
//! store, degrading to "no correction found" instead.

use std::io;
use std::path::PathBuf;

use anyhow;
use thiserror::Error;

use crate::language::Language;

/// The main error type for Orthos operations.
#[derive(Error, Debug)]
pub enum OrthosError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A word or filler source file is missing. Fatal for that language's
    /// initialization.
    #[error("source file not found: {}", path.display())]
    SourceNotFound {
        /// Path of the missing source file.
        path: PathBuf,
    },

    /// A dictionary snapshot is malformed. Initialization fails rather than
    /// silently falling back to the text source.
    #[error("snapshot corrupt: {0}")]
    SnapshotCorrupt(String),

    /// A lookup was attempted before the language was initialized.
    #[error("language not initialized: {0}")]
    UninitializedLanguage(Language),

    /// Random filler retrieval with no fillers loaded.
    #[error("no filler phrases loaded for language: {0}")]
    EmptyFillerSet(Language),

    /// A language tag failed validation.
    #[error("invalid language tag: {0}")]
    InvalidLanguage(String),

    /// Invalid operation
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Generic anyhow error
    #[error("anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with OrthosError.
pub type Result<T> = std::result::Result<T, OrthosError>;

impl OrthosError {
    /// Create a new source-not-found error.
    pub fn source_not_found<P: Into<PathBuf>>(path: P) -> Self {
        OrthosError::SourceNotFound { path: path.into() }
    }

    /// Create a new snapshot-corrupt error.
    pub fn snapshot_corrupt<S: Into<String>>(msg: S) -> Self {
        OrthosError::SnapshotCorrupt(msg.into())
    }

    /// Create a new invalid-language error.
    pub fn invalid_language<S: Into<String>>(msg: S) -> Self {
        OrthosError::InvalidLanguage(msg.into())
    }

    /// Create a new invalid-operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        OrthosError::InvalidOperation(msg.into())
    }

    /// Create a new serialization error.
    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        OrthosError::Serialization(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = OrthosError::snapshot_corrupt("bad magic");
        assert_eq!(error.to_string(), "snapshot corrupt: bad magic");

        let error = OrthosError::invalid_language("EN!");
        assert_eq!(error.to_string(), "invalid language tag: EN!");

        let error = OrthosError::source_not_found("/data/en_words.txt");
        assert_eq!(
            error.to_string(),
            "source file not found: /data/en_words.txt"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let orthos_error = OrthosError::from(io_error);

        match orthos_error {
            OrthosError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
