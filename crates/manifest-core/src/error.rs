//! Error types for manifest-core

use std::path::PathBuf;

/// Result type for manifest-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while checking a manifest
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid file pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Manifest path {path} has no containing directory")]
    NoManifestDir { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
