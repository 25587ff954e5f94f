//! Error types for hooks-fs

use std::path::{Path, PathBuf};

/// Result type for hooks-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in hooks-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The path the failed operation was acting on.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::LockFailed { path } => path,
        }
    }

    /// True when the underlying I/O error is a missing file or directory.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
