//! Routes a tool to the adapters for its output shape
//!
//! Selection depends only on the tool's resolved [`ToolOutput`], so any
//! config entry with a valid output target works without code changes.

use iap_meta::ToolOutput;

use crate::adapter::{EmitContext, FileOutcome, OutputAdapter, OutputFile, ToolTarget};
use crate::{DirectoryAdapter, Error, Result, SingleFileAdapter, ToolBundle};

#[derive(Debug, Default, Clone, Copy)]
pub struct ToolDispatcher;

impl ToolDispatcher {
    pub fn new() -> Self {
        Self
    }

    /// Adapters for an output shape, in emit order.
    pub fn adapters_for(output: &ToolOutput) -> Vec<Box<dyn OutputAdapter>> {
        match output {
            ToolOutput::SingleFile { .. } => vec![Box::new(SingleFileAdapter::new())],
            ToolOutput::Directory { .. } => vec![Box::new(DirectoryAdapter::new())],
            ToolOutput::Dual { .. } => vec![
                Box::new(SingleFileAdapter::always_apply_only()),
                Box::new(DirectoryAdapter::scoped_only()),
            ],
            ToolOutput::Unresolved => Vec::new(),
        }
    }

    /// Render every file for one tool.
    pub fn render(&self, target: &ToolTarget<'_>, bundle: &ToolBundle<'_>) -> Result<Vec<OutputFile>> {
        let adapters = Self::adapters_for(target.tool.output());
        if adapters.is_empty() {
            return Err(Error::NoOutputTarget {
                tool: target.id.to_string(),
            });
        }

        let mut files = Vec::new();
        for adapter in &adapters {
            files.extend(adapter.render(target, bundle)?);
        }
        Ok(files)
    }

    /// Render all of a tool's files first, then write them.
    ///
    /// A render failure in any adapter leaves the tool's outputs untouched.
    pub fn emit(
        &self,
        target: &ToolTarget<'_>,
        bundle: &ToolBundle<'_>,
        ctx: &EmitContext,
    ) -> Result<Vec<FileOutcome>> {
        let files = self.render(target, bundle)?;
        tracing::info!(
            tool = target.id,
            output = target.tool.output().label(),
            files = files.len(),
            "emitting tool outputs"
        );
        ctx.write_all(&files)
    }
}
