#![allow(dead_code)]

use iap_fs::NormalizedPath;
use iap_meta::Tool;
use iap_tools::{ContentKind, ContentRef, ContentStore};
use serde_json::Value;

pub fn tool(id: &str, definition: Value) -> Tool {
    let mut tool: Tool = serde_json::from_value(definition).unwrap();
    tool.resolve_output(id);
    tool
}

pub fn content_ref(language: &str, unit: &str, globs: &str, always_apply: bool) -> ContentRef {
    let kind = if unit.starts_with("frameworks/structures/") {
        ContentKind::Structure
    } else if unit.starts_with("frameworks/") {
        ContentKind::Framework
    } else if unit.starts_with("processes/") {
        ContentKind::Process
    } else {
        ContentKind::Rule
    };
    ContentRef {
        kind,
        language: language.to_string(),
        entity: unit.rsplit('/').next().unwrap().to_string(),
        source: NormalizedPath::new(format!("src/{language}/{unit}.md")),
        unit: unit.to_string(),
        globs: Some(globs.to_string()),
        always_apply,
        description: None,
    }
}

pub fn store(docs: &[(&ContentRef, &str)]) -> ContentStore {
    let mut store = ContentStore::new();
    for (content_ref, text) in docs {
        store.insert(content_ref.source.clone(), *text);
    }
    store
}
