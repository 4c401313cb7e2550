//! Tests for output-shape dispatch and writing.

mod common;

use std::fs;

use common::{content_ref, store, tool};
use iap_fs::NormalizedPath;
use iap_meta::ToolOutput;
use iap_tools::{
    CancelToken, EmitContext, Error, FileStatus, OutputAdapter, SingleFileAdapter,
    ToolBundle, ToolDispatcher, ToolTarget,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use tempfile::TempDir;

fn claude() -> iap_meta::Tool {
    tool(
        "claude",
        json!({
            "name": "Claude",
            "outputFile": "CLAUDE.md",
            "outputDir": ".claude/skills",
            "fileExtension": ".md",
            "skillFilename": "SKILL.md",
            "useFrontmatter": false,
            "supportsSubfolders": true,
            "supportsGlobs": false
        }),
    )
}

#[rstest]
#[case(ToolOutput::SingleFile { file: "a.md".into() }, vec!["single-file"])]
#[case(ToolOutput::Directory { dir: "d".into() }, vec!["directory"])]
#[case(ToolOutput::Dual { file: "a.md".into(), dir: "d".into() }, vec!["single-file", "directory"])]
#[case(ToolOutput::Unresolved, vec![])]
fn test_adapters_follow_output_shape(#[case] output: ToolOutput, #[case] expected: Vec<&str>) {
    let names: Vec<&str> = ToolDispatcher::adapters_for(&output)
        .iter()
        .map(|a| a.name())
        .collect();
    assert_eq!(names, expected);
}

#[test]
fn test_dual_output_splits_root_file_and_skills() {
    let dir = TempDir::new().unwrap();
    let tool = claude();
    let persona = content_ref("general", "persona", "*", true);
    let arch = content_ref("python", "architecture", "*.py", false);
    let content = store(&[(&persona, "# Persona"), (&arch, "# Arch")]);
    let refs = vec![persona.clone(), arch.clone()];
    let ctx = EmitContext::new(NormalizedPath::new(dir.path()));

    let outcomes = ToolDispatcher::new()
        .emit(&ToolTarget::new("claude", &tool), &ToolBundle::new(&refs, &content), &ctx)
        .unwrap();

    let paths: Vec<&str> = outcomes.iter().map(|o| o.path.as_str()).collect();
    assert_eq!(
        paths,
        vec!["CLAUDE.md", ".claude/skills/python/architecture/SKILL.md"]
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("CLAUDE.md")).unwrap(),
        "# Persona\n"
    );
    assert!(outcomes.iter().all(|o| o.status == FileStatus::Written));
}

#[test]
fn test_second_emit_reports_unchanged() {
    let dir = TempDir::new().unwrap();
    let tool = claude();
    let persona = content_ref("general", "persona", "*", true);
    let content = store(&[(&persona, "# Persona")]);
    let refs = vec![persona.clone()];
    let ctx = EmitContext::new(NormalizedPath::new(dir.path()));
    let target = ToolTarget::new("claude", &tool);
    let bundle = ToolBundle::new(&refs, &content);

    ToolDispatcher::new().emit(&target, &bundle, &ctx).unwrap();
    let second = ToolDispatcher::new().emit(&target, &bundle, &ctx).unwrap();

    assert!(second.iter().all(|o| o.status == FileStatus::Unchanged));
}

#[test]
fn test_unresolved_tool_has_no_target() {
    let tool = tool("claude", json!({"name": "Claude"}));
    let content = store(&[]);
    let ctx = EmitContext::new(NormalizedPath::new("unused"));

    let err = ToolDispatcher::new()
        .emit(&ToolTarget::new("claude", &tool), &ToolBundle::new(&[], &content), &ctx)
        .unwrap_err();

    assert!(matches!(err, Error::NoOutputTarget { tool } if tool == "claude"));
}

#[test]
fn test_escaping_output_file_is_refused() {
    let dir = TempDir::new().unwrap();
    let tool = tool("copilot", json!({"outputFile": "../outside.md"}));
    let persona = content_ref("general", "persona", "*", true);
    let content = store(&[(&persona, "# Persona")]);
    let refs = vec![persona.clone()];
    let ctx = EmitContext::new(NormalizedPath::new(dir.path()));

    let err = SingleFileAdapter::new()
        .emit(&ToolTarget::new("copilot", &tool), &ToolBundle::new(&refs, &content), &ctx)
        .unwrap_err();

    assert!(matches!(err, Error::Fs(iap_fs::Error::UnsafePath { .. })));
}

#[test]
fn test_cancelled_emit_returns_cancelled() {
    let dir = TempDir::new().unwrap();
    let tool = claude();
    let persona = content_ref("general", "persona", "*", true);
    let content = store(&[(&persona, "# Persona")]);
    let refs = vec![persona.clone()];
    let cancel = CancelToken::new();
    cancel.cancel();
    let ctx = EmitContext::new(NormalizedPath::new(dir.path())).with_cancel(cancel);

    let err = ToolDispatcher::new()
        .emit(&ToolTarget::new("claude", &tool), &ToolBundle::new(&refs, &content), &ctx)
        .unwrap_err();

    assert!(matches!(err, Error::Cancelled));
    assert!(!dir.path().join("CLAUDE.md").exists());
}
