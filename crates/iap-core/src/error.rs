//! Error types for iap-core

use std::path::PathBuf;

use iap_meta::ValidationReport;

/// Result type for iap-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// What kind of id a selection named.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    Language,
    Framework,
    Structure,
    Process,
    Tool,
}

impl std::fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Language => "language",
            Self::Framework => "framework",
            Self::Structure => "structure",
            Self::Process => "process",
            Self::Tool => "tool",
        };
        f.write_str(name)
    }
}

/// Errors that can occur in iap-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Validation found error-severity findings; nothing was written
    #[error("Configuration has {} error(s)", .report.errors.len())]
    InvalidConfig { report: Box<ValidationReport> },

    #[error("Unknown {kind} '{id}'")]
    UnknownSelection { kind: SelectionKind, id: String },

    /// A referenced document is not on disk; nothing was written
    #[error("Missing content document {path}")]
    MissingContent { path: PathBuf },

    // Transparent wrappers for underlying crate errors
    #[error(transparent)]
    Fs(#[from] iap_fs::Error),

    #[error(transparent)]
    Meta(#[from] iap_meta::Error),

    #[error(transparent)]
    Tools(#[from] iap_tools::Error),
}

impl Error {
    pub(crate) fn unknown(kind: SelectionKind, id: impl Into<String>) -> Self {
        Self::UnknownSelection {
            kind,
            id: id.into(),
        }
    }
}
