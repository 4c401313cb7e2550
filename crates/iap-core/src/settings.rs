//! Generator settings from `.ai-iap/generator.toml`
//!
//! ```toml
//! rules_dir = ".ai-iap/rules"
//! processes_dir = ".ai-iap/processes"
//! default_tools = ["cursor", "claude"]
//! parallel = true
//! ```
//!
//! Every key is optional; a missing file means all defaults.

use iap_fs::{ConfigStore, IapPath, NormalizedPath};
use iap_meta::ConfigModel;
use serde::{Deserialize, Serialize};

use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Rule documents, relative to the project root
    pub rules_dir: String,
    /// Process documents, relative to the project root
    pub processes_dir: String,
    /// Tools generated when a run names none
    pub default_tools: Vec<String>,
    /// One worker per tool
    pub parallel: bool,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            rules_dir: IapPath::RulesDir.as_str().to_string(),
            processes_dir: IapPath::ProcessesDir.as_str().to_string(),
            default_tools: Vec::new(),
            parallel: true,
        }
    }
}

impl GeneratorSettings {
    /// Load `<root>/.ai-iap/generator.toml`, or defaults when it is absent.
    pub fn load(root: &NormalizedPath) -> Result<Self> {
        let path = root.join(IapPath::SettingsFile.as_str());
        if !path.is_file() {
            tracing::debug!(path = %path, "no generator settings, using defaults");
            return Ok(Self::default());
        }
        let settings = ConfigStore::new().load(&path)?;
        tracing::debug!(path = %path, ?settings, "loaded generator settings");
        Ok(settings)
    }

    /// Absolute document directories below `root`.
    pub fn layout(&self, root: &NormalizedPath) -> ContentLayout {
        ContentLayout {
            rules_dir: root.join(&self.rules_dir),
            processes_dir: root.join(&self.processes_dir),
        }
    }

    /// Requested tools, else `default_tools`, else every configured tool.
    pub fn effective_tools(&self, requested: &[String], model: &ConfigModel) -> Vec<String> {
        if !requested.is_empty() {
            return requested.to_vec();
        }
        if !self.default_tools.is_empty() {
            return self.default_tools.clone();
        }
        model.tools().map(|(id, _)| id.clone()).collect()
    }
}

/// Where source documents live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLayout {
    pub rules_dir: NormalizedPath,
    pub processes_dir: NormalizedPath,
}
