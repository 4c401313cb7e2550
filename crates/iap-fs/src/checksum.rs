//! SHA-256 checksum utilities
//!
//! Checksums use the canonical format `sha256:<hex>` and let the writers
//! skip destinations whose content is already up to date.

use sha2::{Digest, Sha256};
use std::path::Path;

const PREFIX: &str = "sha256:";

/// Compute the SHA-256 checksum of in-memory content.
pub fn compute_content_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{}{:x}", PREFIX, hasher.finalize())
}

/// Compute the SHA-256 checksum of a file's contents.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn compute_file_checksum(path: &Path) -> std::io::Result<String> {
    let content = std::fs::read(path)?;
    Ok(compute_content_checksum(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_checksum_has_prefix() {
        assert!(compute_content_checksum(b"hello world").starts_with("sha256:"));
    }

    #[test]
    fn content_checksum_known_value() {
        assert_eq!(
            compute_content_checksum(b"hello world"),
            "sha256:b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn file_checksum_matches_content_checksum() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rule.md");
        std::fs::write(&path, "# Rule").unwrap();

        assert_eq!(
            compute_file_checksum(&path).unwrap(),
            compute_content_checksum(b"# Rule")
        );
    }
}
