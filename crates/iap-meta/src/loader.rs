//! Loader for `.ai-iap/config.json`
//!
//! Loading is structural deserialization only. Semantic problems are left
//! for [`crate::SchemaValidator`].

use iap_fs::{ConfigStore, NormalizedPath};

use crate::schema::ConfigModel;
use crate::{Error, Result};

/// Parses config.json into a [`ConfigModel`].
#[derive(Debug, Default)]
pub struct ConfigLoader {
    store: ConfigStore,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            store: ConfigStore::new(),
        }
    }

    /// Load and parse the config file at `path`.
    ///
    /// # Errors
    ///
    /// - [`Error::ConfigNotFound`] if the file does not exist
    /// - [`Error::Parse`] on malformed JSON or an incompatible shape
    pub fn load(&self, path: &NormalizedPath) -> Result<ConfigModel> {
        if !path.is_file() {
            return Err(Error::ConfigNotFound {
                path: path.to_native(),
            });
        }

        let model: ConfigModel = self.store.load(path).map_err(parse_error)?;

        let model = model.finalize();
        let counts = model.counts();
        tracing::debug!(
            path = %path,
            tools = counts.tools,
            languages = counts.languages,
            "loaded config"
        );
        Ok(model)
    }

    /// Parse config JSON that is already in memory.
    pub fn parse(&self, json: &str) -> Result<ConfigModel> {
        let path = NormalizedPath::new("config.json");
        let model: ConfigModel = self.store.parse(&path, json).map_err(parse_error)?;
        Ok(model.finalize())
    }
}

fn parse_error(e: iap_fs::Error) -> Error {
    match e {
        iap_fs::Error::ConfigParse { path, message, .. } => Error::Parse { path, message },
        other => Error::Fs(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file() {
        let err = ConfigLoader::new()
            .load(&NormalizedPath::new("/nonexistent/.ai-iap/config.json"))
            .unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_malformed_json_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, "{ \"tools\": ").unwrap();

        let err = ConfigLoader::new()
            .load(&NormalizedPath::new(&path))
            .unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_wrong_shape_is_parse_error() {
        let err = ConfigLoader::new()
            .parse(r#"{"tools": ["cursor"]}"#)
            .unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_mistyped_properties_are_not_parse_errors() {
        let model = ConfigLoader::new()
            .parse(
                r#"{"tools":{"cursor":{"outputDir":".cursor/rules","supportsGlobs":"true"}},
                    "languages":{"python":{"frameworks":{"django":{"name":5}},
                    "processes":{"ci":{"type":"one-time"}}}}}"#,
            )
            .unwrap();
        assert_eq!(model.counts().processes, 1);
    }

    #[test]
    fn test_parse_resolves_outputs() {
        let model = ConfigLoader::new()
            .parse(r#"{"tools":{"cursor":{"outputDir":".cursor/rules"}}}"#)
            .unwrap();
        assert_eq!(model.tool("cursor").unwrap().output().label(), "directory");
    }
}
