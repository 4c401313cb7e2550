//! One output file per resolved reference

use std::collections::HashSet;

use iap_meta::ToolOutput;

use crate::adapter::{OutputAdapter, OutputFile, ToolTarget};
use crate::{ContentRef, Error, Frontmatter, Result, ToolBundle};

/// Writes each reference below the tool's `outputDir`.
///
/// Naming, for unit `frameworks/django` of language `python`:
///
/// | subfolders | skillFilename | path                                   |
/// |------------|---------------|----------------------------------------|
/// | yes        | -             | `<dir>/python/frameworks/django<ext>`  |
/// | no         | -             | `<dir>/python-frameworks-django<ext>`  |
/// | yes        | `SKILL.md`    | `<dir>/python/frameworks/django/SKILL.md` |
/// | no         | `SKILL.md`    | `<dir>/python-frameworks-django/SKILL.md` |
#[derive(Debug, Clone, Default)]
pub struct DirectoryAdapter {
    scoped_only: bool,
}

impl DirectoryAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip always-apply references; the dual-output root file carries them.
    pub fn scoped_only() -> Self {
        Self { scoped_only: true }
    }

    fn output_path(target: &ToolTarget<'_>, dir: &str, content_ref: &ContentRef) -> String {
        let dir = dir.trim_end_matches('/');
        let stem = if target.tool.supports_subfolders() {
            format!("{}/{}", content_ref.language, content_ref.unit)
        } else {
            content_ref.flat_name()
        };

        match skill_filename(target) {
            Some(skill) => format!("{dir}/{stem}/{skill}"),
            None => format!("{dir}/{stem}{}", target.tool.extension()),
        }
    }

    fn frontmatter(target: &ToolTarget<'_>, content_ref: &ContentRef) -> Frontmatter {
        let tool = target.tool;
        let skill = skill_filename(target).is_some();
        let mut fm = Frontmatter::new();

        if skill {
            fm = fm.string("name", content_ref.flat_name()).string(
                "description",
                content_ref
                    .description
                    .clone()
                    .unwrap_or_else(|| default_description(content_ref)),
            );
        } else if tool.uses_frontmatter() {
            fm = fm.maybe_string("description", content_ref.description.as_deref());
        }

        if tool.uses_frontmatter() {
            if tool.supports_globs() {
                fm = fm.maybe_string("globs", content_ref.globs.as_deref());
            }
            fm = fm.bool("alwaysApply", content_ref.always_apply);
        }
        fm
    }
}

fn skill_filename<'a>(target: &ToolTarget<'a>) -> Option<&'a str> {
    target
        .tool
        .skill_filename()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn default_description(content_ref: &ContentRef) -> String {
    format!(
        "{} guidance for {}",
        content_ref.leaf().replace(['-', '_'], " "),
        content_ref.language
    )
}

impl OutputAdapter for DirectoryAdapter {
    fn name(&self) -> &'static str {
        "directory"
    }

    fn render(&self, target: &ToolTarget<'_>, bundle: &ToolBundle<'_>) -> Result<Vec<OutputFile>> {
        let dir = match target.tool.output() {
            ToolOutput::Directory { dir } | ToolOutput::Dual { dir, .. } => dir,
            _ => {
                return Err(Error::NoOutputTarget {
                    tool: target.id.to_string(),
                });
            }
        };

        let mut seen = HashSet::new();
        let mut files = Vec::new();

        for content_ref in bundle.refs {
            if self.scoped_only && content_ref.always_apply {
                continue;
            }

            let path = Self::output_path(target, dir, content_ref);
            if !seen.insert(path.clone()) {
                return Err(Error::DuplicateOutput { path });
            }

            let mut content = Self::frontmatter(target, content_ref).render();
            if !content.is_empty() {
                content.push('\n');
            }
            content.push_str(bundle.content.get(content_ref)?.trim_end());
            content.push('\n');

            files.push(OutputFile::new(path, content));
        }

        Ok(files)
    }
}
