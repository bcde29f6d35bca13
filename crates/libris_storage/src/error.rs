//! Error types for storage operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Existing data could not be parsed as a list of records.
    #[error("malformed data in {}: {message}", .path.display())]
    Parse {
        /// The file that failed to parse.
        path: PathBuf,
        /// Description of the problem.
        message: String,
    },

    /// Records could not be serialized.
    #[error("serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The collection name cannot be mapped to a storage location.
    #[error("invalid collection name: {0:?}")]
    InvalidCollection(String),
}

impl StorageError {
    /// Creates a parse error for the given file.
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}
