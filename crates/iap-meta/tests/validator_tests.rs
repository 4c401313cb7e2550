//! Validation rules over whole config documents.

use iap_meta::{ConfigLoader, SchemaValidator, Severity, ValidationReport};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

fn validate(config: Value) -> ValidationReport {
    let model = ConfigLoader::new().parse(&config.to_string()).unwrap();
    SchemaValidator::new().validate(&model)
}

fn valid_tool(output: Value) -> Value {
    let mut tool = json!({
        "name": "Tool",
        "useFrontmatter": false,
        "fileExtension": ".md"
    });
    tool.as_object_mut()
        .unwrap()
        .extend(output.as_object().unwrap().clone());
    tool
}

fn valid_language(always_apply: bool) -> Value {
    json!({
        "name": "Lang",
        "globs": "*.x",
        "alwaysApply": always_apply,
        "description": "rules",
        "files": ["architecture", "code-style"]
    })
}

fn config_with_tool(id: &str, tool: Value) -> Value {
    json!({ "version": "1.0", "tools": { id: tool }, "languages": {} })
}

fn config_with_language(id: &str, language: Value) -> Value {
    json!({ "version": "1.0", "tools": {}, "languages": { id: language } })
}

// ============================================================================
// Tool output exclusivity
// ============================================================================

#[rstest]
#[case(json!({}))]
#[case(json!({"outputDir": ".windsurf/rules", "outputFile": ".windsurfrules"}))]
fn test_exclusivity_violation_is_one_error(#[case] output: Value) {
    let report = validate(config_with_tool("windsurf", valid_tool(output)));

    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].path, "tools.windsurf");
    assert!(report.errors[0].message.contains("exactly one"));
    assert_eq!(report.exit_code(), 1);
}

#[rstest]
#[case(json!({"outputDir": ".windsurf/rules"}))]
#[case(json!({"outputFile": ".windsurfrules"}))]
fn test_exactly_one_output_is_valid(#[case] output: Value) {
    let report = validate(config_with_tool("windsurf", valid_tool(output)));
    assert!(report.is_valid());
}

#[test]
fn test_claude_with_single_output_only_warns() {
    let tool = valid_tool(json!({
        "outputFile": "CLAUDE.md",
        "skillFilename": "SKILL.md",
        "supportsSubfolders": true,
        "supportsGlobs": false
    }));
    let report = validate(config_with_tool("claude", tool));

    assert!(report.is_valid());
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].message.contains("outputDir"));
}

#[test]
fn test_claude_recommendations_each_warn() {
    let tool = valid_tool(json!({ "outputFile": "CLAUDE.md", "outputDir": ".claude/skills" }));
    let report = validate(config_with_tool("claude", tool));

    assert!(report.is_valid());
    // skillFilename, supportsSubfolders, supportsGlobs
    assert_eq!(report.warnings.len(), 3);
}

#[test]
fn test_cursor_capability_warnings() {
    let report = validate(config_with_tool(
        "cursor",
        valid_tool(json!({ "outputDir": ".cursor/rules", "supportsGlobs": false })),
    ));

    assert!(report.is_valid());
    let messages: Vec<&str> = report.warnings.iter().map(|f| f.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "Cursor should have 'supportsGlobs' set to true",
            "Cursor should have 'supportsSubfolders' set to true",
        ]
    );
}

// ============================================================================
// alwaysApply consistency
// ============================================================================

#[test]
fn test_general_without_always_apply_is_one_error() {
    let report = validate(config_with_language("general", valid_language(false)));

    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].path, "languages.general");
    assert!(report.warnings.is_empty());
}

#[test]
fn test_other_language_with_always_apply_is_one_warning() {
    let report = validate(config_with_language("python", valid_language(true)));

    assert!(report.is_valid());
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].path, "languages.python");
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn test_general_with_always_apply_is_clean() {
    let report = validate(config_with_language("general", valid_language(true)));
    assert!(report.is_valid());
    assert!(!report.has_warnings());
}

// ============================================================================
// Language shape checks
// ============================================================================

#[rstest]
#[case("globs", json!(["*.py", "*.pyi"]), "array")]
#[case("alwaysApply", json!("false"), "boolean")]
#[case("files", json!("architecture"), "must be an array")]
#[case("enabled", json!(true), "Obsolete")]
fn test_language_type_errors(#[case] key: &str, #[case] value: Value, #[case] needle: &str) {
    let mut language = valid_language(false);
    language[key] = value;

    let report = validate(config_with_language("python", language));

    assert_eq!(report.errors.len(), 1, "{:?}", report.errors);
    assert!(report.errors[0].message.contains(needle));
}

#[test]
fn test_language_missing_everything() {
    let report = validate(config_with_language("rust", json!({})));

    assert_eq!(report.errors.len(), 5);
    assert!(report.errors.iter().all(|f| f.path == "languages.rust"));
}

// ============================================================================
// Nested entities
// ============================================================================

#[test]
fn test_nested_paths_and_severities() {
    let mut language = valid_language(false);
    language["frameworks"] = json!({
        "spring": {
            "name": "Spring",
            "file": "spring",
            "structures": {
                "layered": { "name": "Layered" }
            }
        }
    });
    language["processes"] = json!({
        "ci": { "file": "ci-setup", "description": "CI" }
    });

    let report = validate(config_with_language("java", language));

    let errors: Vec<(&str, &str)> = report
        .errors
        .iter()
        .map(|f| (f.path.as_str(), f.message.as_str()))
        .collect();
    assert_eq!(
        errors,
        vec![
            (
                "languages.java.frameworks.spring.structures.layered",
                "Missing required property 'file'"
            ),
            ("languages.java.processes.ci", "Missing required property 'name'"),
        ]
    );

    let warnings: Vec<(&str, &str)> = report
        .warnings
        .iter()
        .map(|f| (f.path.as_str(), f.message.as_str()))
        .collect();
    assert_eq!(
        warnings,
        vec![
            (
                "languages.java.frameworks.spring",
                "Missing recommended property 'category'"
            ),
            (
                "languages.java.frameworks.spring",
                "Missing recommended property 'description'"
            ),
            (
                "languages.java.frameworks.spring.structures.layered",
                "Missing recommended property 'description'"
            ),
        ]
    );
    assert!(report.all().take(2).all(|f| f.severity == Severity::Error));
}

#[test]
fn test_counts_are_reported() {
    let mut language = valid_language(false);
    language["frameworks"] = json!({ "react": { "name": "React", "file": "react" } });
    let report = validate(config_with_language("typescript", language));

    assert_eq!(report.counts.languages, 1);
    assert_eq!(report.counts.frameworks, 1);
    assert_eq!(report.counts.tools, 0);
}

#[test]
fn test_exit_code_ignores_warning_count() {
    let mut language = valid_language(true);
    language["frameworks"] = json!({ "react": { "name": "React", "file": "react" } });
    let report = validate(config_with_language("typescript", language));

    assert!(report.warnings.len() > 1);
    assert_eq!(report.exit_code(), 0);
}

// ============================================================================
// Mistyped properties become findings
// ============================================================================

#[rstest]
#[case(json!("true"))]
#[case(json!(1))]
fn test_cursor_non_boolean_supports_globs_is_one_warning(#[case] supports_globs: Value) {
    let report = validate(config_with_tool(
        "cursor",
        valid_tool(json!({
            "outputDir": ".cursor/rules",
            "supportsGlobs": supports_globs,
            "supportsSubfolders": true
        })),
    ));

    assert_eq!(report.exit_code(), 0);
    let messages: Vec<&str> = report.warnings.iter().map(|f| f.message.as_str()).collect();
    assert_eq!(messages, vec!["Cursor should have 'supportsGlobs' set to true"]);
}

#[rstest]
#[case("name", json!(5), "'name' must be a string")]
#[case("file", json!(["spring"]), "'file' must be a string")]
fn test_framework_non_string_required_is_one_error(
    #[case] key: &str,
    #[case] value: Value,
    #[case] message: &str,
) {
    let mut framework = json!({
        "name": "Spring",
        "file": "spring",
        "category": "Web Framework",
        "description": "Spring rules"
    });
    framework[key] = value;
    let mut language = valid_language(false);
    language["frameworks"] = json!({ "spring": framework });

    let report = validate(config_with_language("java", language));

    assert_eq!(report.errors.len(), 1, "{:?}", report.errors);
    assert_eq!(report.errors[0].path, "languages.java.frameworks.spring");
    assert_eq!(report.errors[0].message, message);
    assert!(!report.has_warnings());
}

#[rstest]
#[case("useFrontmatter", json!("yes"), "'useFrontmatter' must be a boolean")]
#[case("fileExtension", json!(false), "'fileExtension' must be a string")]
fn test_tool_mistyped_required_is_error(
    #[case] key: &str,
    #[case] value: Value,
    #[case] message: &str,
) {
    let mut tool = valid_tool(json!({ "outputFile": ".windsurfrules" }));
    tool[key] = value;

    let report = validate(config_with_tool("windsurf", tool));

    assert_eq!(report.errors.len(), 1, "{:?}", report.errors);
    assert_eq!(report.errors[0].path, "tools.windsurf");
    assert_eq!(report.errors[0].message, message);
}

#[test]
fn test_generic_tool_mistyped_flag_warns() {
    let mut tool = valid_tool(json!({ "outputFile": ".windsurfrules" }));
    tool["supportsSubfolders"] = json!("no");

    let report = validate(config_with_tool("windsurf", tool));

    assert!(report.is_valid());
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].message, "'supportsSubfolders' must be a boolean");
}

#[test]
fn test_unknown_process_type_warns_without_hiding_other_findings() {
    let mut language = valid_language(false);
    language["processes"] = json!({
        "release": {
            "name": "Release",
            "file": "release",
            "description": "Release steps",
            "type": "one-time"
        },
        "ci": { "file": "ci", "description": "CI" }
    });

    let report = validate(config_with_language("go", language));

    let errors: Vec<&str> = report.errors.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(errors, vec!["languages.go.processes.ci"]);
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].path, "languages.go.processes.release");
    assert!(report.warnings[0].message.contains("\"one-time\""));
}
