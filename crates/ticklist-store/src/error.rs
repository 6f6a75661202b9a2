//! Error types for ticklist store operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during `JsonStore` operations.
///
/// Corrupt stored data is deliberately absent: loading treats it as an
/// empty slot and logs a warning instead of failing.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing a storage file failed.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        /// Path that was being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Serializing store contents to JSON failed.
    #[error("failed to serialize store contents: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
