//! Error types for the licensify header stamper.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while configuring or running a stamp pass
#[derive(Debug, Error)]
pub enum StampError {
    #[error("Traversal root not found: {0}")]
    RootNotFound(PathBuf),

    #[error("Traversal root is not a directory: {0}")]
    RootNotDirectory(PathBuf),

    #[error("Failed to walk {path}: {message}")]
    Walk { path: PathBuf, message: String },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {path} as UTF-8 text")]
    Decode { path: PathBuf },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid style entry: {0}")]
    InvalidStyle(String),
}

impl StampError {
    /// Path of the file or directory the error is about, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            StampError::RootNotFound(path) | StampError::RootNotDirectory(path) => {
                Some(path.as_path())
            }
            StampError::Walk { path, .. }
            | StampError::Read { path, .. }
            | StampError::Decode { path }
            | StampError::Write { path, .. } => Some(path.as_path()),
            StampError::Config(_) | StampError::InvalidStyle(_) => None,
        }
    }
}

impl From<config::ConfigError> for StampError {
    fn from(err: config::ConfigError) -> Self {
        StampError::Config(err.to_string())
    }
}
