//! Preference store error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrefsError {
    /// Reading or writing a preference slot failed.
    #[error("preference storage error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The slot name cannot be used as a file name.
    #[error("invalid preference key '{0}'")]
    InvalidKey(String),

    /// Serializing the card array failed.
    #[error("failed to serialize preferences: {0}")]
    Serialize(#[from] serde_json::Error),
}
