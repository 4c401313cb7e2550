//! GeneratorOrchestrator implementation
//!
//! Wires the pipeline for one run:
//!
//! 1. **validate** - any error-severity finding aborts before resolution
//! 2. **resolve** - an unknown id aborts before any I/O
//! 3. **load** - a missing document aborts before any write
//! 4. **emit** - one worker per tool; a failing tool is recorded in the
//!    report and does not stop its siblings

use iap_fs::NormalizedPath;
use iap_meta::{ConfigModel, SchemaValidator, ValidationReport};
use iap_tools::{CancelToken, ContentStore, EmitContext, ToolDispatcher, ToolTarget};

use crate::report::{GenerationReport, ToolOutcome};
use crate::resolver::{ResolvedBundle, Selection, SelectionResolver};
use crate::settings::{ContentLayout, GeneratorSettings};
use crate::{Error, Result, load_content};

/// Options for a generate run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Root the tools' output paths are relative to
    pub dest_root: NormalizedPath,
    /// Render and report planned files without writing
    pub dry_run: bool,
    pub parallel: bool,
}

impl GenerateOptions {
    pub fn new(dest_root: NormalizedPath) -> Self {
        Self {
            dest_root,
            dry_run: false,
            parallel: true,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Runs validation, resolution, and per-tool emission for a project.
pub struct GeneratorOrchestrator {
    layout: ContentLayout,
    validator: SchemaValidator,
    dispatcher: ToolDispatcher,
    cancel: CancelToken,
}

impl GeneratorOrchestrator {
    /// `root` is the project root the settings' document directories are
    /// relative to.
    pub fn new(root: &NormalizedPath, settings: &GeneratorSettings) -> Self {
        Self {
            layout: settings.layout(root),
            validator: SchemaValidator::new(),
            dispatcher: ToolDispatcher::new(),
            cancel: CancelToken::new(),
        }
    }

    /// Token observed by every worker before each write.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Validate-only mode.
    pub fn validate(&self, model: &ConfigModel) -> ValidationReport {
        self.validator.validate(model)
    }

    pub fn resolve(&self, model: &ConfigModel, selection: &Selection) -> Result<ResolvedBundle> {
        SelectionResolver::new(model, &self.layout).resolve(selection)
    }

    /// Generate every selected tool's outputs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`], [`Error::UnknownSelection`], or
    /// [`Error::MissingContent`] before anything is written. Per-tool
    /// failures are reported in the [`GenerationReport`] instead.
    pub fn run(
        &self,
        model: &ConfigModel,
        selection: &Selection,
        options: &GenerateOptions,
    ) -> Result<GenerationReport> {
        let validation = self.validate(model);
        if !validation.is_valid() {
            tracing::warn!(
                errors = validation.errors.len(),
                "configuration invalid, nothing generated"
            );
            return Err(Error::InvalidConfig {
                report: Box::new(validation),
            });
        }

        let bundle = self.resolve(model, selection)?;
        let content = load_content(&bundle.refs)?;

        let ctx = EmitContext::new(options.dest_root.clone())
            .with_dry_run(options.dry_run)
            .with_cancel(self.cancel.clone());

        let tools = if options.parallel && bundle.tools.len() > 1 {
            self.emit_parallel(model, &bundle, &content, &ctx)
        } else {
            bundle
                .tools
                .iter()
                .map(|id| self.emit_tool(model, id, &bundle, &content, &ctx))
                .collect()
        };

        let report = GenerationReport {
            tools,
            dry_run: options.dry_run,
            warnings: validation.warnings,
        };
        tracing::info!(
            succeeded = report.succeeded().count(),
            failed = report.failed().count(),
            written = report.files_written(),
            "generation finished"
        );
        Ok(report)
    }

    /// One scoped thread per tool; outcomes come back in tool order.
    fn emit_parallel(
        &self,
        model: &ConfigModel,
        bundle: &ResolvedBundle,
        content: &ContentStore,
        ctx: &EmitContext,
    ) -> Vec<ToolOutcome> {
        std::thread::scope(|scope| {
            let handles: Vec<_> = bundle
                .tools
                .iter()
                .map(|id| scope.spawn(move || self.emit_tool(model, id, bundle, content, ctx)))
                .collect();

            handles
                .into_iter()
                .zip(&bundle.tools)
                .map(|(handle, id)| {
                    handle
                        .join()
                        .unwrap_or_else(|_| ToolOutcome::failure(id.as_str(), "worker panicked"))
                })
                .collect()
        })
    }

    fn emit_tool(
        &self,
        model: &ConfigModel,
        id: &str,
        bundle: &ResolvedBundle,
        content: &ContentStore,
        ctx: &EmitContext,
    ) -> ToolOutcome {
        let Some(tool) = model.tool(id) else {
            return ToolOutcome::failure(id, "tool is not defined");
        };

        match self
            .dispatcher
            .emit(&ToolTarget::new(id, tool), &bundle.bundle(content), ctx)
        {
            Ok(files) => ToolOutcome::success(id, files),
            Err(e) => {
                tracing::warn!(tool = id, error = %e, "tool generation failed");
                ToolOutcome::failure(id, e.to_string())
            }
        }
    }
}
