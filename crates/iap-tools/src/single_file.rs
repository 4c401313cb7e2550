//! Concatenate resolved content into one file

use iap_meta::ToolOutput;

use crate::adapter::{OutputAdapter, OutputFile, ToolTarget};
use crate::{ContentRef, Error, Frontmatter, Result, ToolBundle};

/// Writes every reference into the tool's `outputFile`.
///
/// Consecutive references of the same language form one section. With
/// `useFrontmatter` each section opens with its own frontmatter block.
#[derive(Debug, Clone, Default)]
pub struct SingleFileAdapter {
    always_apply_only: bool,
}

impl SingleFileAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only references whose language is always-apply, for the root file
    /// of a dual-output tool.
    pub fn always_apply_only() -> Self {
        Self {
            always_apply_only: true,
        }
    }

    fn section(
        &self,
        target: &ToolTarget<'_>,
        bundle: &ToolBundle<'_>,
        group: &[&ContentRef],
    ) -> Result<String> {
        let mut section = String::new();

        if target.tool.uses_frontmatter()
            && let Some(first) = group.first()
        {
            let mut fm = Frontmatter::new();
            if target.tool.supports_globs() {
                fm = fm.maybe_string("globs", first.globs.as_deref());
            }
            fm = fm.bool("alwaysApply", first.always_apply);
            section.push_str(&fm.render());
            section.push('\n');
        }

        let docs = group
            .iter()
            .map(|r| bundle.content.get(r).map(str::trim_end))
            .collect::<Result<Vec<_>>>()?;
        section.push_str(&docs.join("\n\n"));
        Ok(section)
    }
}

impl OutputAdapter for SingleFileAdapter {
    fn name(&self) -> &'static str {
        "single-file"
    }

    fn render(&self, target: &ToolTarget<'_>, bundle: &ToolBundle<'_>) -> Result<Vec<OutputFile>> {
        let file = match target.tool.output() {
            ToolOutput::SingleFile { file } | ToolOutput::Dual { file, .. } => file,
            _ => {
                return Err(Error::NoOutputTarget {
                    tool: target.id.to_string(),
                });
            }
        };

        let refs: Vec<&ContentRef> = bundle
            .refs
            .iter()
            .filter(|r| !self.always_apply_only || r.always_apply)
            .collect();
        if refs.is_empty() {
            tracing::debug!(tool = target.id, "nothing to concatenate");
            return Ok(Vec::new());
        }

        let mut sections = Vec::new();
        for group in refs.chunk_by(|a, b| a.language == b.language) {
            sections.push(self.section(target, bundle, group)?);
        }

        let mut content = sections.join("\n\n");
        content.push('\n');
        Ok(vec![OutputFile::new(file.clone(), content)])
    }
}
