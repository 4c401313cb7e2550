//! Error types for iap-tools

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] iap_fs::Error),

    #[error("Tool {tool} has no usable output target")]
    NoOutputTarget { tool: String },

    #[error("Content not loaded for {path}")]
    MissingContent { path: PathBuf },

    #[error("Two references render to the same output {path}")]
    DuplicateOutput { path: String },

    #[error("Generation cancelled")]
    Cancelled,
}
