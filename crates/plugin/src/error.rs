//! Generation errors

use std::path::PathBuf;
use thiserror::Error;

/// Failure while producing an artifact.
///
/// The namespace model is never affected, and a failed run leaves no artifact behind
/// that looks complete.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("I/O error while writing {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Destination is not writable: {}", .path.display())]
    UnwritableDestination { path: PathBuf },

    #[error("Failed to finalize artifact {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerationError {
    /// Path of the artifact or directory that could not be written
    pub fn path(&self) -> &std::path::Path {
        match self {
            GenerationError::Io { path, .. }
            | GenerationError::UnwritableDestination { path }
            | GenerationError::Persist { path, .. } => path,
        }
    }
}
