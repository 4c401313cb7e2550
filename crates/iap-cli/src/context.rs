//! Project paths resolved from `--root` and `--config`

use std::path::Path;

use iap_core::GeneratorSettings;
use iap_fs::{IapPath, NormalizedPath};
use iap_meta::{ConfigLoader, ConfigModel};

use crate::error::Result;

#[derive(Debug, Clone)]
pub struct ProjectContext {
    pub root: NormalizedPath,
    pub config_path: NormalizedPath,
}

impl ProjectContext {
    /// `config` overrides `<root>/.ai-iap/config.json`.
    pub fn new(root: &Path, config: Option<&Path>) -> Self {
        let root = NormalizedPath::new(root);
        let config_path = match config {
            Some(path) => NormalizedPath::new(path),
            None => root.join(IapPath::ConfigFile.as_str()),
        };
        Self { root, config_path }
    }

    pub fn load_model(&self) -> Result<ConfigModel> {
        Ok(ConfigLoader::new().load(&self.config_path)?)
    }

    pub fn settings(&self) -> Result<GeneratorSettings> {
        Ok(GeneratorSettings::load(&self.root)?)
    }
}
