//! [`TestProject`] builder for ai-iap test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value, json};
use tempfile::TempDir;

use crate::fixtures;

/// A temporary project root with an `.ai-iap/` tree.
///
/// # Example
///
/// ```rust,no_run
/// use iap_test_utils::TestProject;
/// use iap_test_utils::fixtures::{cursor_tool, python_language};
///
/// let mut project = TestProject::new();
/// project.tool("cursor", cursor_tool()).language("python", python_language());
/// project.write_config();
/// project.write_docs();
/// project.assert_file_exists(".ai-iap/rules/python/architecture.md");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
    config: Value,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Empty project with `version`, and empty `tools` and `languages` maps.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
            config: json!({"version": "1.0", "tools": {}, "languages": {}}),
        }
    }

    /// general + python + typescript, cursor + claude + copilot, with every
    /// referenced document on disk.
    pub fn sample() -> Self {
        let mut project = Self::new();
        project
            .tool("cursor", fixtures::cursor_tool())
            .tool("claude", fixtures::claude_tool())
            .tool("copilot", fixtures::copilot_tool())
            .language("general", fixtures::general_language())
            .language("python", fixtures::python_language())
            .language("typescript", fixtures::typescript_language());
        project.write_config();
        project.write_docs();
        project
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.root().join(".ai-iap/config.json")
    }

    pub fn config_mut(&mut self) -> &mut Value {
        &mut self.config
    }

    pub fn tool(&mut self, id: &str, definition: Value) -> &mut Self {
        self.section("tools").insert(id.to_string(), definition);
        self
    }

    pub fn language(&mut self, id: &str, definition: Value) -> &mut Self {
        self.section("languages").insert(id.to_string(), definition);
        self
    }

    fn section(&mut self, key: &str) -> &mut Map<String, Value> {
        self.config
            .as_object_mut()
            .unwrap()
            .entry(key)
            .or_insert_with(|| json!({}))
            .as_object_mut()
            .unwrap()
    }

    /// Write `.ai-iap/config.json` from the current definitions.
    pub fn write_config(&self) -> PathBuf {
        let path = self.config_path();
        self.write_file(
            ".ai-iap/config.json",
            &serde_json::to_string_pretty(&self.config).unwrap(),
        );
        path
    }

    /// Write raw text as the config, for malformed-input tests.
    pub fn write_raw_config(&self, text: &str) -> PathBuf {
        self.write_file(".ai-iap/config.json", text);
        self.config_path()
    }

    /// Write `path` (relative to root), creating parent directories.
    pub fn write_file(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }

    /// Write a document for every file the config references, under the
    /// default `.ai-iap/rules` and `.ai-iap/processes` layout.
    ///
    /// Each document is a single heading `# <language> <unit>`.
    pub fn write_docs(&self) {
        for (path, heading) in self.doc_paths() {
            self.write_file(&path, &format!("# {heading}\n"));
        }
    }

    /// `(relative path, heading)` for every referenced document.
    pub fn doc_paths(&self) -> Vec<(String, String)> {
        let mut docs = Vec::new();
        let Some(languages) = self.config["languages"].as_object() else {
            return docs;
        };

        for (lang, language) in languages {
            let rules = format!(".ai-iap/rules/{lang}");
            for file in language["files"].as_array().into_iter().flatten() {
                if let Some(file) = file.as_str() {
                    docs.push((format!("{rules}/{file}.md"), format!("{lang} {file}")));
                }
            }
            for framework in object_values(&language["frameworks"]) {
                if let Some(file) = framework["file"].as_str() {
                    docs.push((
                        format!("{rules}/frameworks/{file}.md"),
                        format!("{lang} frameworks/{file}"),
                    ));
                }
                for structure in object_values(&framework["structures"]) {
                    if let Some(file) = structure["file"].as_str() {
                        docs.push((
                            format!("{rules}/frameworks/structures/{file}.md"),
                            format!("{lang} frameworks/structures/{file}"),
                        ));
                    }
                }
            }
            for process in object_values(&language["processes"]) {
                let kind = match process["type"].as_str() {
                    Some("ondemand") => "ondemand",
                    _ => "permanent",
                };
                if let Some(file) = process["file"].as_str() {
                    docs.push((
                        format!(".ai-iap/processes/{kind}/{lang}/{file}.md"),
                        format!("{lang} processes/{file}"),
                    ));
                }
            }
        }
        docs
    }

    pub fn read(&self, path: &str) -> String {
        let full_path = self.root().join(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    pub fn exists(&self, path: &str) -> bool {
        self.root().join(path).exists()
    }

    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let file_content = self.read(path);
        assert!(
            file_content.contains(content),
            "File {path} does not contain expected content.\nExpected: {content}\nActual: {file_content}"
        );
    }
}

fn object_values(value: &Value) -> impl Iterator<Item = &Value> {
    value.as_object().into_iter().flat_map(|map| map.values())
}
