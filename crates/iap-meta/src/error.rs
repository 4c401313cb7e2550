//! Error types for iap-meta

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] iap_fs::Error),

    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Malformed JSON, or JSON whose shape cannot form a config tree.
    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
}
