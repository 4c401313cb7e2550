//! Root of the config tree

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::language::{Framework, Language, Process};
use super::tool::Tool;

/// Typed, read-only view of `.ai-iap/config.json`.
///
/// Sections are optional so that a config missing one still loads and the
/// validator can report it. Maps keep file order.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConfigModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<IndexMap<String, Tool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<IndexMap<String, Language>>,
    /// Top-level keys this version does not know about
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Aggregate entity counts, reported for observability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EntityCounts {
    pub tools: usize,
    pub languages: usize,
    pub frameworks: usize,
    pub structures: usize,
    pub processes: usize,
}

impl ConfigModel {
    /// Resolve derived state once, after deserialization.
    pub(crate) fn finalize(mut self) -> Self {
        if let Some(tools) = self.tools.as_mut() {
            for (id, tool) in tools.iter_mut() {
                tool.resolve_output(id);
            }
        }
        self
    }

    pub fn tools(&self) -> impl Iterator<Item = (&String, &Tool)> {
        self.tools.iter().flatten()
    }

    pub fn languages(&self) -> impl Iterator<Item = (&String, &Language)> {
        self.languages.iter().flatten()
    }

    pub fn tool(&self, id: &str) -> Option<&Tool> {
        self.tools.as_ref()?.get(id)
    }

    pub fn language(&self, id: &str) -> Option<&Language> {
        self.languages.as_ref()?.get(id)
    }

    pub fn framework(&self, language: &str, id: &str) -> Option<&Framework> {
        self.language(language)?.frameworks.get(id)
    }

    pub fn process(&self, language: &str, id: &str) -> Option<&Process> {
        self.language(language)?.processes.get(id)
    }

    pub fn counts(&self) -> EntityCounts {
        let mut counts = EntityCounts {
            tools: self.tools().count(),
            ..EntityCounts::default()
        };
        for (_, language) in self.languages() {
            counts.languages += 1;
            counts.processes += language.processes.len();
            for framework in language.frameworks.values() {
                counts.frameworks += 1;
                counts.structures += framework.structures.len();
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ToolOutput;

    #[test]
    fn test_finalize_resolves_tool_outputs() {
        let model: ConfigModel = serde_json::from_str(
            r#"{"tools":{"claude":{"outputFile":"CLAUDE.md","outputDir":".claude/skills"}}}"#,
        )
        .unwrap();
        let model = model.finalize();

        assert_eq!(
            model.tool("claude").unwrap().output(),
            &ToolOutput::Dual {
                file: "CLAUDE.md".into(),
                dir: ".claude/skills".into()
            }
        );
    }

    #[test]
    fn test_counts_walk_nested_entities() {
        let model: ConfigModel = serde_json::from_str(
            r#"{
              "tools": {"a": {}, "b": {}},
              "languages": {
                "python": {
                  "frameworks": {
                    "django": {"structures": {"modular": {}, "flat": {}}},
                    "flask": {}
                  },
                  "processes": {"ci": {}}
                },
                "general": {}
              }
            }"#,
        )
        .unwrap();

        assert_eq!(
            model.counts(),
            EntityCounts {
                tools: 2,
                languages: 2,
                frameworks: 2,
                structures: 2,
                processes: 1,
            }
        );
    }

    #[test]
    fn test_unknown_top_level_keys_are_preserved() {
        let model: ConfigModel =
            serde_json::from_str(r#"{"version":"2.0","$schema":"./schema.json"}"#).unwrap();
        assert_eq!(model.extra["$schema"], "./schema.json");
        assert!(model.tools.is_none());
    }
}
