//! The adapter port: render files for a tool, then write them

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use iap_fs::{NormalizedPath, WriteOutcome, io, validate_relative_path};
use iap_meta::Tool;
use serde::Serialize;

use crate::{Error, Result, ToolBundle};

/// A tool entry together with its config id.
#[derive(Debug, Clone, Copy)]
pub struct ToolTarget<'a> {
    pub id: &'a str,
    pub tool: &'a Tool,
}

impl<'a> ToolTarget<'a> {
    pub fn new(id: &'a str, tool: &'a Tool) -> Self {
        Self { id, tool }
    }
}

/// A rendered file, path relative to the destination root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub path: String,
    pub content: String,
}

impl OutputFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Written,
    Unchanged,
    /// Dry run: would have been written
    Planned,
}

impl FileStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Written => "written",
            Self::Unchanged => "unchanged",
            Self::Planned => "planned",
        }
    }
}

impl From<WriteOutcome> for FileStatus {
    fn from(outcome: WriteOutcome) -> Self {
        match outcome {
            WriteOutcome::Written => Self::Written,
            WriteOutcome::Unchanged => Self::Unchanged,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    pub path: String,
    pub status: FileStatus,
}

/// Cooperative cancellation shared between the orchestrator and its workers.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Where and how rendered files are written.
#[derive(Debug, Clone)]
pub struct EmitContext {
    pub dest_root: NormalizedPath,
    pub dry_run: bool,
    pub cancel: CancelToken,
}

impl EmitContext {
    pub fn new(dest_root: NormalizedPath) -> Self {
        Self {
            dest_root,
            dry_run: false,
            cancel: CancelToken::new(),
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Write rendered files below `dest_root`.
    ///
    /// Every path is checked before the first write, so an unsafe path
    /// leaves nothing behind for this batch. Cancellation is checked
    /// before each write.
    pub fn write_all(&self, files: &[OutputFile]) -> Result<Vec<FileOutcome>> {
        for file in files {
            validate_relative_path(&file.path)?;
        }

        let mut outcomes = Vec::with_capacity(files.len());
        for file in files {
            if self.cancel.is_cancelled() {
                return Err(Error::Cancelled);
            }

            let status = if self.dry_run {
                FileStatus::Planned
            } else {
                let dest = self.dest_root.join(&file.path);
                io::write_if_changed(&dest, file.content.as_bytes())?.into()
            };
            tracing::debug!(path = %file.path, ?status, "emitted");

            outcomes.push(FileOutcome {
                path: file.path.clone(),
                status,
            });
        }
        Ok(outcomes)
    }
}

/// One output shape a tool can be rendered into.
///
/// Rendering is pure: all file content is produced from the bundle before
/// anything touches disk.
pub trait OutputAdapter: Send + Sync {
    /// Adapter name for logs and reports
    fn name(&self) -> &'static str;

    /// Produce the files for this tool.
    fn render(&self, target: &ToolTarget<'_>, bundle: &ToolBundle<'_>) -> Result<Vec<OutputFile>>;

    /// Render, then write through `ctx`.
    fn emit(
        &self,
        target: &ToolTarget<'_>,
        bundle: &ToolBundle<'_>,
        ctx: &EmitContext,
    ) -> Result<Vec<FileOutcome>> {
        let files = self.render(target, bundle)?;
        tracing::debug!(
            adapter = self.name(),
            tool = target.id,
            files = files.len(),
            "rendered"
        );
        ctx.write_all(&files)
    }
}
