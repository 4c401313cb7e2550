//! Per-run generation results

use iap_meta::Finding;
use iap_tools::{FileOutcome, FileStatus};
use serde::Serialize;

/// What happened for one tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolOutcome {
    pub tool: String,
    pub files: Vec<FileOutcome>,
    /// Set when the tool failed; its sibling tools are unaffected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ToolOutcome {
    pub fn success(tool: impl Into<String>, files: Vec<FileOutcome>) -> Self {
        Self {
            tool: tool.into(),
            files,
            error: None,
        }
    }

    pub fn failure(tool: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            files: Vec::new(),
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Report from a generate run, tools in selection order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationReport {
    pub tools: Vec<ToolOutcome>,
    pub dry_run: bool,
    /// Validation warnings; generation went ahead regardless
    pub warnings: Vec<Finding>,
}

impl GenerationReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &ToolOutcome> {
        self.tools.iter().filter(|t| t.is_success())
    }

    pub fn failed(&self) -> impl Iterator<Item = &ToolOutcome> {
        self.tools.iter().filter(|t| !t.is_success())
    }

    /// Every tool succeeded.
    pub fn is_success(&self) -> bool {
        self.failed().next().is_none()
    }

    pub fn files_written(&self) -> usize {
        self.tools
            .iter()
            .flat_map(|t| &t.files)
            .filter(|f| f.status == FileStatus::Written)
            .count()
    }

    pub fn tool(&self, id: &str) -> Option<&ToolOutcome> {
        self.tools.iter().find(|t| t.tool == id)
    }
}
