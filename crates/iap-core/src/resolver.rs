//! Selection resolution: from user-chosen ids to ordered content references
//!
//! The resolved order encodes rule precedence, most specific first:
//!
//! 1. Structures of the selected frameworks
//! 2. Selected frameworks
//! 3. Selected languages' files (architecture, code-style, then the rest)
//! 4. `general` files
//! 5. Processes of every included language, in the same language order
//!
//! Several frameworks under one language are all kept, in selection order.

use std::collections::HashSet;

use iap_meta::{ConfigModel, Framework, GENERAL_LANGUAGE, Language, ProcessKind, Structure};
use iap_tools::{ContentKind, ContentRef, ContentStore, ToolBundle};

use crate::settings::ContentLayout;
use crate::{Error, Result, SelectionKind};

/// What the user asked to generate.
///
/// Framework, structure, and process ids may be bare (`django`) or
/// qualified with their language (`python/django`); structures may also
/// name their framework (`python/django/modular`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub structures: Vec<String>,
    pub processes: Vec<String>,
    pub tools: Vec<String>,
    /// Include every on-demand process of the included languages
    pub include_on_demand: bool,
}

fn owned<I, S>(ids: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ids.into_iter().map(Into::into).collect()
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_languages<I: IntoIterator<Item = S>, S: Into<String>>(mut self, ids: I) -> Self {
        self.languages = owned(ids);
        self
    }

    pub fn with_frameworks<I: IntoIterator<Item = S>, S: Into<String>>(mut self, ids: I) -> Self {
        self.frameworks = owned(ids);
        self
    }

    pub fn with_structures<I: IntoIterator<Item = S>, S: Into<String>>(mut self, ids: I) -> Self {
        self.structures = owned(ids);
        self
    }

    pub fn with_processes<I: IntoIterator<Item = S>, S: Into<String>>(mut self, ids: I) -> Self {
        self.processes = owned(ids);
        self
    }

    pub fn with_tools<I: IntoIterator<Item = S>, S: Into<String>>(mut self, ids: I) -> Self {
        self.tools = owned(ids);
        self
    }

    pub fn with_on_demand(mut self, include: bool) -> Self {
        self.include_on_demand = include;
        self
    }
}

/// Ordered references shared by every selected tool.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedBundle {
    /// Tool ids in selection order, without duplicates
    pub tools: Vec<String>,
    pub refs: Vec<ContentRef>,
}

impl ResolvedBundle {
    pub fn bundle<'a>(&'a self, content: &'a ContentStore) -> ToolBundle<'a> {
        ToolBundle::new(&self.refs, content)
    }

    /// Unit paths in order, prefixed with their language.
    pub fn units(&self) -> Vec<String> {
        self.refs
            .iter()
            .map(|r| format!("{}/{}", r.language, r.unit))
            .collect()
    }
}

#[derive(Clone, Copy)]
struct LanguagePick<'a> {
    id: &'a str,
    language: &'a Language,
}

impl<'a> LanguagePick<'a> {
    fn framework(&self, id: &str) -> Option<FrameworkPick<'a>> {
        self.language
            .frameworks
            .get_key_value(id)
            .map(|(key, framework)| FrameworkPick {
                language: *self,
                id: key,
                framework,
            })
    }

    fn process(&self, id: &str) -> Option<(&'a str, &'a str)> {
        self.language
            .processes
            .get_key_value(id)
            .map(|(key, _)| (self.id, key.as_str()))
    }
}

#[derive(Clone, Copy)]
struct FrameworkPick<'a> {
    language: LanguagePick<'a>,
    id: &'a str,
    framework: &'a Framework,
}

impl<'a> FrameworkPick<'a> {
    fn key(&self) -> (&'a str, &'a str) {
        (self.language.id, self.id)
    }

    fn structure(&self, id: &str) -> Option<StructurePick<'a>> {
        self.framework
            .structures
            .get_key_value(id)
            .map(|(key, structure)| StructurePick {
                framework: *self,
                id: key,
                structure,
            })
    }
}

#[derive(Clone, Copy)]
struct StructurePick<'a> {
    framework: FrameworkPick<'a>,
    id: &'a str,
    structure: &'a Structure,
}

impl<'a> StructurePick<'a> {
    fn key(&self) -> (&'a str, &'a str, &'a str) {
        (self.framework.language.id, self.framework.id, self.id)
    }
}

/// Resolves a [`Selection`] against a config model.
pub struct SelectionResolver<'a> {
    model: &'a ConfigModel,
    layout: &'a ContentLayout,
}

impl<'a> SelectionResolver<'a> {
    pub fn new(model: &'a ConfigModel, layout: &'a ContentLayout) -> Self {
        Self { model, layout }
    }

    /// Fails on the first unknown id; nothing partial is returned.
    pub fn resolve(&self, selection: &Selection) -> Result<ResolvedBundle> {
        let tools = self.resolve_tools(&selection.tools)?;
        let languages = self.resolve_languages(&selection.languages)?;
        let frameworks = resolve_frameworks(&languages, &selection.frameworks)?;
        let structures = resolve_structures(&languages, &frameworks, &selection.structures)?;
        let explicit = resolve_processes(&languages, &selection.processes)?;

        let mut refs = Vec::new();
        for pick in &structures {
            refs.push(self.structure_ref(pick));
        }
        for pick in &frameworks {
            refs.push(self.framework_ref(pick));
        }
        for pick in &languages {
            refs.extend(self.language_refs(pick));
        }
        for pick in &languages {
            for (id, process) in &pick.language.processes {
                let kind = process.kind();
                let included = kind == ProcessKind::Permanent
                    || selection.include_on_demand
                    || explicit.contains(&(pick.id, id.as_str()));
                if included {
                    refs.push(self.process_ref(pick, id, process, kind));
                }
            }
        }

        tracing::debug!(
            tools = tools.len(),
            languages = languages.len(),
            frameworks = frameworks.len(),
            structures = structures.len(),
            refs = refs.len(),
            "resolved selection"
        );
        Ok(ResolvedBundle { tools, refs })
    }

    fn resolve_tools(&self, requested: &[String]) -> Result<Vec<String>> {
        let mut tools: Vec<String> = Vec::new();
        for id in requested {
            if self.model.tool(id).is_none() {
                return Err(Error::unknown(SelectionKind::Tool, id));
            }
            if !tools.contains(id) {
                tools.push(id.clone());
            }
        }
        Ok(tools)
    }

    /// Selected languages in order, then `general` when the config has it.
    fn resolve_languages(&self, requested: &[String]) -> Result<Vec<LanguagePick<'a>>> {
        let model: &'a ConfigModel = self.model;
        let find = |id: &str| {
            model
                .languages()
                .find(|(key, _)| key.as_str() == id)
                .map(|(key, language)| LanguagePick {
                    id: key.as_str(),
                    language,
                })
        };

        let mut picked: Vec<LanguagePick<'a>> = Vec::new();
        for id in requested {
            let pick = find(id).ok_or_else(|| Error::unknown(SelectionKind::Language, id))?;
            if pick.id != GENERAL_LANGUAGE && !picked.iter().any(|p| p.id == pick.id) {
                picked.push(pick);
            }
        }
        if let Some(general) = find(GENERAL_LANGUAGE) {
            picked.push(general);
        }
        Ok(picked)
    }

    fn content_ref(
        &self,
        kind: ContentKind,
        language: &LanguagePick<'_>,
        entity: &str,
        source: iap_fs::NormalizedPath,
        unit: String,
        description: Option<&str>,
    ) -> ContentRef {
        ContentRef {
            kind,
            language: language.id.to_string(),
            entity: entity.to_string(),
            source,
            unit,
            globs: language.language.globs().map(str::to_string),
            always_apply: language.language.always_apply(),
            description: description.map(str::to_string),
        }
    }

    fn language_refs(&self, pick: &LanguagePick<'_>) -> Vec<ContentRef> {
        let mut files = pick.language.files();
        files.sort_by_key(|file| file_rank(file));

        files
            .into_iter()
            .map(|file| {
                let source = self.layout.rules_dir.join(pick.id).join(&markdown(file));
                self.content_ref(
                    ContentKind::Rule,
                    pick,
                    stem(file),
                    source,
                    stem(file).to_string(),
                    None,
                )
            })
            .collect()
    }

    fn framework_ref(&self, pick: &FrameworkPick<'_>) -> ContentRef {
        let file = pick.framework.file().unwrap_or(pick.id);
        let source = self
            .layout
            .rules_dir
            .join(pick.language.id)
            .join("frameworks")
            .join(&markdown(file));
        self.content_ref(
            ContentKind::Framework,
            &pick.language,
            pick.id,
            source,
            format!("frameworks/{}", stem(file)),
            pick.framework.description(),
        )
    }

    fn structure_ref(&self, pick: &StructurePick<'_>) -> ContentRef {
        let file = pick.structure.file().unwrap_or(pick.id);
        let language = &pick.framework.language;
        let source = self
            .layout
            .rules_dir
            .join(language.id)
            .join("frameworks/structures")
            .join(&markdown(file));
        self.content_ref(
            ContentKind::Structure,
            language,
            pick.id,
            source,
            format!("frameworks/structures/{}", stem(file)),
            pick.structure.description(),
        )
    }

    fn process_ref(
        &self,
        pick: &LanguagePick<'_>,
        id: &str,
        process: &iap_meta::Process,
        kind: ProcessKind,
    ) -> ContentRef {
        let file = process.file().unwrap_or(id);
        let source = self
            .layout
            .processes_dir
            .join(kind.as_str())
            .join(pick.id)
            .join(&markdown(file));
        self.content_ref(
            ContentKind::Process,
            pick,
            id,
            source,
            format!("processes/{}", stem(file)),
            process.description(),
        )
    }
}

fn resolve_frameworks<'a>(
    languages: &[LanguagePick<'a>],
    requested: &[String],
) -> Result<Vec<FrameworkPick<'a>>> {
    let mut picked: Vec<FrameworkPick<'a>> = Vec::new();
    for raw in requested {
        let matches: Vec<FrameworkPick<'a>> = match raw.split_once('/') {
            Some((lang, id)) => languages
                .iter()
                .filter(|l| l.id == lang)
                .filter_map(|l| l.framework(id))
                .collect(),
            None => languages.iter().filter_map(|l| l.framework(raw)).collect(),
        };
        if matches.is_empty() {
            return Err(Error::unknown(SelectionKind::Framework, raw));
        }
        for pick in matches {
            if !picked.iter().any(|p| p.key() == pick.key()) {
                picked.push(pick);
            }
        }
    }
    Ok(picked)
}

fn resolve_structures<'a>(
    languages: &[LanguagePick<'a>],
    frameworks: &[FrameworkPick<'a>],
    requested: &[String],
) -> Result<Vec<StructurePick<'a>>> {
    let mut picked: Vec<StructurePick<'a>> = Vec::new();
    for raw in requested {
        let parts: Vec<&str> = raw.split('/').collect();
        let matches: Vec<StructurePick<'a>> = match parts.as_slice() {
            [id] => frameworks.iter().filter_map(|f| f.structure(id)).collect(),
            [lang, id] => frameworks
                .iter()
                .filter(|f| f.language.id == *lang)
                .filter_map(|f| f.structure(id))
                .collect(),
            // Fully qualified: any framework of an included language
            [lang, framework, id] => languages
                .iter()
                .filter(|l| l.id == *lang)
                .filter_map(|l| l.framework(framework))
                .filter_map(|f| f.structure(id))
                .collect(),
            _ => Vec::new(),
        };
        if matches.is_empty() {
            return Err(Error::unknown(SelectionKind::Structure, raw));
        }
        for pick in matches {
            if !picked.iter().any(|p| p.key() == pick.key()) {
                picked.push(pick);
            }
        }
    }
    Ok(picked)
}

/// `(language, process)` pairs named explicitly.
fn resolve_processes<'a>(
    languages: &[LanguagePick<'a>],
    requested: &[String],
) -> Result<HashSet<(&'a str, &'a str)>> {
    let mut explicit = HashSet::new();
    for raw in requested {
        let matches: Vec<(&'a str, &'a str)> = match raw.split_once('/') {
            Some((lang, id)) => languages
                .iter()
                .filter(|l| l.id == lang)
                .filter_map(|l| l.process(id))
                .collect(),
            None => languages.iter().filter_map(|l| l.process(raw)).collect(),
        };
        if matches.is_empty() {
            return Err(Error::unknown(SelectionKind::Process, raw));
        }
        explicit.extend(matches);
    }
    Ok(explicit)
}

fn file_rank(file: &str) -> u8 {
    match stem(file) {
        "architecture" => 0,
        "code-style" => 1,
        _ => 2,
    }
}

fn stem(file: &str) -> &str {
    file.strip_suffix(".md").unwrap_or(file)
}

fn markdown(file: &str) -> String {
    if file.ends_with(".md") {
        file.to_string()
    } else {
        format!("{file}.md")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("architecture", 0)]
    #[case("architecture.md", 0)]
    #[case("code-style", 1)]
    #[case("testing", 2)]
    fn test_file_rank(#[case] file: &str, #[case] rank: u8) {
        assert_eq!(file_rank(file), rank);
    }

    #[test]
    fn test_markdown_suffix_added_once() {
        assert_eq!(markdown("django"), "django.md");
        assert_eq!(markdown("django.md"), "django.md");
        assert_eq!(stem("django.md"), "django");
    }
}
