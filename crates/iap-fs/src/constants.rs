//! Well-known paths of an ai-iap project.

use std::path::Path;

/// Standard locations below the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IapPath {
    /// The `.ai-iap` directory holding config and content
    IapDir,
    /// `.ai-iap/config.json`
    ConfigFile,
    /// `.ai-iap/generator.toml`, optional generator settings
    SettingsFile,
    /// `.ai-iap/rules`, default root of rule documents
    RulesDir,
    /// `.ai-iap/processes`, default root of process guides
    ProcessesDir,
}

impl IapPath {
    /// Get the path relative to the project root.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IapDir => ".ai-iap",
            Self::ConfigFile => ".ai-iap/config.json",
            Self::SettingsFile => ".ai-iap/generator.toml",
            Self::RulesDir => ".ai-iap/rules",
            Self::ProcessesDir => ".ai-iap/processes",
        }
    }
}

impl AsRef<Path> for IapPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for IapPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for IapPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
