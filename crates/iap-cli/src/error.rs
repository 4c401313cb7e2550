//! Error types for iap-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] iap_core::Error),

    #[error(transparent)]
    Meta(#[from] iap_meta::Error),

    #[error(transparent)]
    Fs(#[from] iap_fs::Error),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}
