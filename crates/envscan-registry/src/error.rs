//! Scan error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from scanning a source tree or a package store.
///
/// Only [`ScanError::RootNotFound`] is fatal to a scan; the other variants
/// are reported per directory or per package and the walk continues.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The scan root does not exist or cannot be read.
    #[error("scan root '{}' does not exist or is unreadable: {source}", path.display())]
    RootNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A package manifest could not be read.
    #[error("failed to read manifest '{}': {source}", path.display())]
    ManifestIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A package manifest is not valid JSON or has an unexpected shape.
    #[error("invalid manifest '{}': {source}", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Generic filesystem error while walking.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
