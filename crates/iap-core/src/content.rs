//! Loading the documents a resolved bundle references

use std::path::PathBuf;

use iap_fs::io;
use iap_tools::{ContentRef, ContentStore};

use crate::{Error, Result};

/// Read every distinct source document once.
///
/// Fails on the first missing document, before any output is written.
pub fn load_content(refs: &[ContentRef]) -> Result<ContentStore> {
    let mut store = ContentStore::new();
    for content_ref in refs {
        if store.contains(&content_ref.source) {
            continue;
        }
        if !content_ref.source.is_file() {
            return Err(Error::MissingContent {
                path: PathBuf::from(content_ref.source.as_str()),
            });
        }
        let text = io::read_text(&content_ref.source)?;
        store.insert(content_ref.source.clone(), text);
    }
    tracing::debug!(documents = store.len(), "loaded content");
    Ok(store)
}
