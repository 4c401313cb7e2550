//! Structural and consistency checks over a [`ConfigModel`]
//!
//! Every rule produces a [`Finding`] instead of failing fast, so a single
//! run lists every problem in the config. Errors block generation;
//! warnings flag recommended properties and suspicious values.

use serde::Serialize;
use serde_json::Value;

use crate::schema::{
    CLAUDE_TOOL, CURSOR_TOOL, ConfigModel, EntityCounts, Framework, GENERAL_LANGUAGE, Language,
    Process, Structure, Tool, ToolOutput,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Line prefix used by the validate command.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Error => "[ERROR]",
            Self::Warning => "[WARNING]",
        }
    }
}

/// One validation result at a dotted config path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    /// e.g. `languages.java.frameworks.spring.structures.layered`
    pub path: String,
    pub message: String,
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}: {}", self.severity.tag(), self.path, self.message)
    }
}

/// Result of validating one config.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
    pub counts: EntityCounts,
}

impl ValidationReport {
    /// No error-severity findings. Warnings are allowed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Process exit code for validate-only runs: 0 without errors, else 1.
    pub fn exit_code(&self) -> i32 {
        if self.is_valid() { 0 } else { 1 }
    }

    /// Errors first, then warnings.
    pub fn all(&self) -> impl Iterator<Item = &Finding> {
        self.errors.iter().chain(self.warnings.iter())
    }

    /// Findings at exactly `path`.
    pub fn at<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a Finding> + 'a {
        self.all().filter(move |f| f.path == path)
    }
}

/// Accumulates findings during a single [`SchemaValidator::validate`] call.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    errors: Vec<Finding>,
    warnings: Vec<Finding>,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(Finding {
            severity: Severity::Error,
            path: path.into(),
            message: message.into(),
        });
    }

    pub fn warning(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(Finding {
            severity: Severity::Warning,
            path: path.into(),
            message: message.into(),
        });
    }

    pub fn finish(self, counts: EntityCounts) -> ValidationReport {
        ValidationReport {
            errors: self.errors,
            warnings: self.warnings,
            counts,
        }
    }
}

/// Pure checker over a loaded config.
#[derive(Debug, Default, Clone, Copy)]
pub struct SchemaValidator;

impl SchemaValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, model: &ConfigModel) -> ValidationReport {
        let mut report = ReportBuilder::new();

        if model.version.is_none() {
            report.warning("version", "Missing 'version'");
        }

        match &model.tools {
            None => report.error("tools", "Missing 'tools' section"),
            Some(tools) => {
                for (id, tool) in tools {
                    validate_tool(id, tool, &mut report);
                }
            }
        }

        match &model.languages {
            None => report.error("languages", "Missing 'languages' section"),
            Some(languages) => {
                for (id, language) in languages {
                    validate_language(id, language, &mut report);
                }
            }
        }

        let report = report.finish(model.counts());
        tracing::debug!(
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "validated config"
        );
        report
    }
}

/// JSON type a scalar property is expected to have.
#[derive(Debug, Clone, Copy)]
enum Expect {
    String,
    Boolean,
}

impl Expect {
    fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Boolean => value.is_boolean(),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::String => "a string",
            Self::Boolean => "a boolean",
        }
    }
}

/// Missing or mistyped is an error.
fn require(
    report: &mut ReportBuilder,
    path: &str,
    value: &Option<Value>,
    property: &str,
    expect: Expect,
) {
    match value {
        None => report.error(path, format!("Missing required property '{property}'")),
        Some(_) => check_type(report, Severity::Error, path, value, property, expect),
    }
}

/// Missing or mistyped is a warning.
fn recommend(
    report: &mut ReportBuilder,
    path: &str,
    value: &Option<Value>,
    property: &str,
    expect: Expect,
) {
    match value {
        None => report.warning(path, format!("Missing recommended property '{property}'")),
        Some(_) => check_type(report, Severity::Warning, path, value, property, expect),
    }
}

/// A present value of the wrong type, reported at `severity`.
fn check_type(
    report: &mut ReportBuilder,
    severity: Severity,
    path: &str,
    value: &Option<Value>,
    property: &str,
    expect: Expect,
) {
    if let Some(value) = value
        && !expect.matches(value)
    {
        let message = format!("'{property}' must be {}", expect.name());
        match severity {
            Severity::Error => report.error(path, message),
            Severity::Warning => report.warning(path, message),
        }
    }
}

fn validate_tool(id: &str, tool: &Tool, report: &mut ReportBuilder) {
    let path = format!("tools.{id}");

    require(report, &path, &tool.name, "name", Expect::String);
    require(report, &path, &tool.use_frontmatter, "useFrontmatter", Expect::Boolean);
    require(report, &path, &tool.file_extension, "fileExtension", Expect::String);
    check_type(report, Severity::Error, &path, &tool.output_file, "outputFile", Expect::String);
    check_type(report, Severity::Error, &path, &tool.output_dir, "outputDir", Expect::String);
    check_type(
        report,
        Severity::Warning,
        &path,
        &tool.skill_filename,
        "skillFilename",
        Expect::String,
    );

    if id != CLAUDE_TOOL && *tool.output() == ToolOutput::Unresolved {
        report.error(
            &path,
            "Must define exactly one of 'outputDir' or 'outputFile'",
        );
    }

    let supports_globs = tool.supports_globs.as_ref().and_then(Value::as_bool);
    let supports_subfolders = tool.supports_subfolders.as_ref().and_then(Value::as_bool);

    match id {
        CURSOR_TOOL => {
            if supports_globs != Some(true) {
                report.warning(&path, "Cursor should have 'supportsGlobs' set to true");
            }
            if supports_subfolders != Some(true) {
                report.warning(&path, "Cursor should have 'supportsSubfolders' set to true");
            }
        }
        CLAUDE_TOOL => {
            if tool.skill_filename.is_none() {
                report.warning(&path, "Claude should define 'skillFilename'");
            }
            if supports_subfolders != Some(true) {
                report.warning(&path, "Claude should have 'supportsSubfolders' set to true");
            }
            if supports_globs != Some(false) {
                report.warning(&path, "Claude should have 'supportsGlobs' set to false");
            }
            if tool.output_file.is_none() {
                report.warning(&path, "Claude should define 'outputFile' (e.g. CLAUDE.md)");
            }
            if tool.output_dir.is_none() {
                report.warning(&path, "Claude should define 'outputDir' for skills");
            }
        }
        // cursor and claude already warn on any flag that is not the expected boolean
        _ => {
            check_type(
                report,
                Severity::Warning,
                &path,
                &tool.supports_globs,
                "supportsGlobs",
                Expect::Boolean,
            );
            check_type(
                report,
                Severity::Warning,
                &path,
                &tool.supports_subfolders,
                "supportsSubfolders",
                Expect::Boolean,
            );
        }
    }
}

fn validate_language(id: &str, language: &Language, report: &mut ReportBuilder) {
    let path = format!("languages.{id}");

    require(report, &path, &language.name, "name", Expect::String);

    match &language.globs {
        None => report.error(&path, "Missing required property 'globs'"),
        Some(Value::Array(_)) => {
            report.error(&path, "'globs' must be a single pattern string, not an array")
        }
        Some(Value::String(_)) => {}
        Some(_) => report.error(&path, "'globs' must be a string"),
    }

    match &language.always_apply {
        None => report.error(&path, "Missing required property 'alwaysApply'"),
        Some(Value::Bool(always_apply)) => {
            if id == GENERAL_LANGUAGE && !always_apply {
                report.error(&path, "'general' must have 'alwaysApply' set to true");
            } else if id != GENERAL_LANGUAGE && *always_apply {
                report.warning(
                    &path,
                    "Only 'general' should have 'alwaysApply' set to true",
                );
            }
        }
        Some(_) => report.error(&path, "'alwaysApply' must be a boolean"),
    }

    require(report, &path, &language.description, "description", Expect::String);

    match &language.files {
        None => report.error(&path, "Missing required property 'files'"),
        Some(files) if !files.is_array() => report.error(&path, "'files' must be an array"),
        Some(_) => {}
    }

    if language.enabled.is_some() {
        report.error(
            &path,
            "Obsolete property 'enabled' found; languages are now selected at generation time, remove it",
        );
    }

    for (framework_id, framework) in &language.frameworks {
        validate_framework(&format!("{path}.frameworks.{framework_id}"), framework, report);
    }

    for (process_id, process) in &language.processes {
        validate_process(&format!("{path}.processes.{process_id}"), process, report);
    }
}

fn validate_framework(path: &str, framework: &Framework, report: &mut ReportBuilder) {
    require(report, path, &framework.name, "name", Expect::String);
    require(report, path, &framework.file, "file", Expect::String);
    recommend(report, path, &framework.category, "category", Expect::String);
    recommend(report, path, &framework.description, "description", Expect::String);

    for (structure_id, structure) in &framework.structures {
        validate_structure(&format!("{path}.structures.{structure_id}"), structure, report);
    }
}

fn validate_structure(path: &str, structure: &Structure, report: &mut ReportBuilder) {
    require(report, path, &structure.name, "name", Expect::String);
    require(report, path, &structure.file, "file", Expect::String);
    recommend(report, path, &structure.description, "description", Expect::String);
}

fn validate_process(path: &str, process: &Process, report: &mut ReportBuilder) {
    require(report, path, &process.name, "name", Expect::String);
    require(report, path, &process.file, "file", Expect::String);
    recommend(report, path, &process.description, "description", Expect::String);

    if let Some(raw) = &process.process_type
        && process.declared_kind().is_none()
    {
        report.warning(
            path,
            format!(
                "'type' must be 'permanent' or 'ondemand', found {raw}; classified as {}",
                process.kind()
            ),
        );
    }
    check_type(
        report,
        Severity::Warning,
        path,
        &process.load_into_ai,
        "loadIntoAI",
        Expect::Boolean,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigLoader;

    fn validate(json: &str) -> ValidationReport {
        let model = ConfigLoader::new().parse(json).unwrap();
        SchemaValidator::new().validate(&model)
    }

    #[test]
    fn test_empty_object_reports_missing_sections() {
        let report = validate("{}");
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.at("tools").count(), 1);
        assert_eq!(report.at("languages").count(), 1);
        assert_eq!(report.at("version").count(), 1);
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn test_tool_missing_required_properties() {
        let report = validate(
            r#"{"version":"1","languages":{},"tools":{"copilot":{"outputFile":"x.md"}}}"#,
        );
        let messages: Vec<&str> = report.errors.iter().map(|f| f.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Missing required property 'name'",
                "Missing required property 'useFrontmatter'",
                "Missing required property 'fileExtension'",
            ]
        );
    }

    #[test]
    fn test_claude_may_define_both_outputs() {
        let report = validate(
            r#"{"version":"1","languages":{},"tools":{"claude":{
                "name":"Claude","useFrontmatter":false,"fileExtension":".md",
                "outputFile":"CLAUDE.md","outputDir":".claude/skills",
                "skillFilename":"SKILL.md","supportsSubfolders":true,"supportsGlobs":false}}}"#,
        );
        assert!(report.is_valid());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_display_prefixes_severity() {
        let finding = Finding {
            severity: Severity::Warning,
            path: "languages.python".into(),
            message: "Only 'general' should have 'alwaysApply' set to true".into(),
        };
        assert_eq!(
            finding.to_string(),
            "[WARNING] languages.python: Only 'general' should have 'alwaysApply' set to true"
        );
    }
}
