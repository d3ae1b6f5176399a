//! Generated artifact descriptors

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::PathBuf;

/// What a successful generator run produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedArtifact {
    /// Name of the generator that produced the artifact
    pub generator: String,

    /// Final artifact path
    pub path: PathBuf,

    /// Number of lines written
    pub lines: usize,

    /// Number of bytes written
    pub bytes: usize,

    /// Hex SHA-256 of the artifact content
    pub sha256: String,
}

impl GeneratedArtifact {
    pub fn new(generator: impl Into<String>, path: PathBuf, content: &str) -> Self {
        Self {
            generator: generator.into(),
            path,
            lines: content.lines().count(),
            bytes: content.len(),
            sha256: content_digest(content),
        }
    }
}

/// Hex SHA-256 of `content`
pub fn content_digest(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
