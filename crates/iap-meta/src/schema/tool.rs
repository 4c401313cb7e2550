//! Tool definitions - the `tools` map of config.json
//!
//! # Example
//!
//! ```json
//! "cursor": {
//!   "name": "Cursor",
//!   "outputDir": ".cursor/rules",
//!   "fileExtension": ".mdc",
//!   "useFrontmatter": true,
//!   "supportsGlobs": true,
//!   "supportsSubfolders": true
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{bool_of, str_of};

/// Tool id that writes both a root file and a skills directory.
pub const CLAUDE_TOOL: &str = "claude";

/// Tool id with glob-scoped rule files.
pub const CURSOR_TOOL: &str = "cursor";

/// One AI assistant consumer.
///
/// Properties are held as raw JSON so the validator can report missing or
/// mistyped ones instead of the loader failing on the first. Typed
/// accessors read them leniently.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_frontmatter: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_extension: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_file: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports_globs: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports_subfolders: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_filename: Option<Value>,
    /// Keys this version does not know about
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
    /// Resolved when the model is built
    #[serde(skip)]
    output: ToolOutput,
}

/// Where a tool's generated content goes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ToolOutput {
    /// Everything concatenated into one file
    SingleFile { file: String },
    /// One file per resolved reference below a directory
    Directory { dir: String },
    /// Root file for always-apply content plus a per-unit directory tree
    Dual { file: String, dir: String },
    /// Neither target set, or both set on a tool that does not allow it
    #[default]
    Unresolved,
}

impl ToolOutput {
    /// Decide the output kind from the raw `outputFile`/`outputDir` pair.
    ///
    /// Only the `claude` tool may carry both.
    pub fn resolve(id: &str, output_file: Option<&str>, output_dir: Option<&str>) -> Self {
        match (output_file, output_dir) {
            (Some(file), None) => Self::SingleFile { file: file.into() },
            (None, Some(dir)) => Self::Directory { dir: dir.into() },
            (Some(file), Some(dir)) if id == CLAUDE_TOOL => Self::Dual {
                file: file.into(),
                dir: dir.into(),
            },
            _ => Self::Unresolved,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SingleFile { .. } => "single-file",
            Self::Directory { .. } => "directory",
            Self::Dual { .. } => "dual",
            Self::Unresolved => "unresolved",
        }
    }
}

impl Tool {
    /// Recompute [`Tool::output`] from `outputFile`/`outputDir`.
    pub fn resolve_output(&mut self, id: &str) {
        self.output = ToolOutput::resolve(id, self.output_file(), self.output_dir());
    }

    /// Output kind resolved at load time.
    pub fn output(&self) -> &ToolOutput {
        &self.output
    }

    pub fn name(&self) -> Option<&str> {
        str_of(&self.name)
    }

    pub fn output_file(&self) -> Option<&str> {
        str_of(&self.output_file)
    }

    pub fn output_dir(&self) -> Option<&str> {
        str_of(&self.output_dir)
    }

    pub fn skill_filename(&self) -> Option<&str> {
        str_of(&self.skill_filename)
    }

    pub fn uses_frontmatter(&self) -> bool {
        bool_of(&self.use_frontmatter).unwrap_or(false)
    }

    pub fn supports_globs(&self) -> bool {
        bool_of(&self.supports_globs).unwrap_or(false)
    }

    pub fn supports_subfolders(&self) -> bool {
        bool_of(&self.supports_subfolders).unwrap_or(false)
    }

    /// File extension with a leading dot, `.md` when unset.
    pub fn extension(&self) -> String {
        match str_of(&self.file_extension).map(str::trim) {
            None | Some("") => ".md".to_string(),
            Some(ext) if ext.starts_with('.') => ext.to_string(),
            Some(ext) => format!(".{ext}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("cursor", None, Some(".cursor/rules"), "directory")]
    #[case("copilot", Some(".github/copilot-instructions.md"), None, "single-file")]
    #[case("claude", Some("CLAUDE.md"), Some(".claude/skills"), "dual")]
    #[case("windsurf", Some(".windsurfrules"), Some(".windsurf/rules"), "unresolved")]
    #[case("cursor", None, None, "unresolved")]
    #[case("claude", Some("CLAUDE.md"), None, "single-file")]
    fn test_resolve_output(
        #[case] id: &str,
        #[case] file: Option<&str>,
        #[case] dir: Option<&str>,
        #[case] expected: &str,
    ) {
        assert_eq!(ToolOutput::resolve(id, file, dir).label(), expected);
    }

    #[rstest]
    #[case(None, ".md")]
    #[case(Some(".mdc"), ".mdc")]
    #[case(Some("md"), ".md")]
    #[case(Some(""), ".md")]
    fn test_extension(#[case] raw: Option<&str>, #[case] expected: &str) {
        let tool = Tool {
            file_extension: raw.map(Value::from),
            ..Tool::default()
        };
        assert_eq!(tool.extension(), expected);
    }

    #[test]
    fn test_parse_tool_keeps_unknown_keys() {
        let tool: Tool = serde_json::from_str(
            r#"{"name":"Cursor","useFrontmatter":true,"fileExtension":".mdc","legacyPath":".cursorrules"}"#,
        )
        .unwrap();
        assert_eq!(tool.name(), Some("Cursor"));
        assert!(tool.uses_frontmatter());
        assert_eq!(tool.extra["legacyPath"], ".cursorrules");
        assert_eq!(tool.output(), &ToolOutput::Unresolved);
    }

    #[test]
    fn test_mistyped_properties_still_load() {
        let mut tool: Tool = serde_json::from_str(
            r#"{"name":7,"useFrontmatter":"yes","supportsGlobs":"true","outputDir":[".cursor"]}"#,
        )
        .unwrap();
        tool.resolve_output("cursor");

        assert_eq!(tool.name(), None);
        assert!(!tool.uses_frontmatter());
        assert!(!tool.supports_globs());
        assert_eq!(tool.output(), &ToolOutput::Unresolved);
    }
}
