//! Resolved content references and the documents they point at

use std::path::PathBuf;

use indexmap::IndexMap;
use iap_fs::NormalizedPath;
use serde::Serialize;

use crate::{Error, Result};

/// Which config entity a reference was resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// One of a language's `files`
    Rule,
    Framework,
    Structure,
    Process,
}

/// One markdown document selected for generation.
///
/// `unit` is the document's path below its language, without extension:
/// `architecture`, `frameworks/django`, `frameworks/structures/modular`,
/// `processes/ci`. Adapters build output names from `language` and `unit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentRef {
    pub kind: ContentKind,
    pub language: String,
    /// Id of the entity that contributed this document
    pub entity: String,
    /// Source markdown file
    pub source: NormalizedPath,
    pub unit: String,
    /// The owning language's glob pattern
    pub globs: Option<String>,
    /// The owning language's alwaysApply flag
    pub always_apply: bool,
    pub description: Option<String>,
}

impl ContentRef {
    /// `language-unit` with every `/` replaced, for tools without subfolders.
    pub fn flat_name(&self) -> String {
        format!("{}-{}", self.language, self.unit.replace('/', "-"))
    }

    /// Last segment of the unit path.
    pub fn leaf(&self) -> &str {
        self.unit.rsplit('/').next().unwrap_or(&self.unit)
    }
}

/// Source documents loaded ahead of generation, keyed by source path.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    documents: IndexMap<NormalizedPath, String>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, source: NormalizedPath, content: impl Into<String>) {
        self.documents.insert(source, content.into());
    }

    pub fn contains(&self, source: &NormalizedPath) -> bool {
        self.documents.contains_key(source)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Content for a reference.
    pub fn get(&self, content_ref: &ContentRef) -> Result<&str> {
        self.documents
            .get(&content_ref.source)
            .map(String::as_str)
            .ok_or_else(|| Error::MissingContent {
                path: PathBuf::from(content_ref.source.as_str()),
            })
    }
}

/// Everything an adapter needs for one tool: ordered refs plus their text.
#[derive(Debug, Clone, Copy)]
pub struct ToolBundle<'a> {
    pub refs: &'a [ContentRef],
    pub content: &'a ContentStore,
}

impl<'a> ToolBundle<'a> {
    pub fn new(refs: &'a [ContentRef], content: &'a ContentStore) -> Self {
        Self { refs, content }
    }
}
