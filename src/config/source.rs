//! Source configuration definitions

use anyhow::{anyhow, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where mapping documents are read from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Source {
    /// A single mapping document
    MappingFile(MappingFileSource),

    /// Every matching mapping document under a directory
    MappingDirectory(MappingDirectorySource),
}

impl Source {
    /// Get the name of the source
    pub fn name(&self) -> &str {
        match self {
            Source::MappingFile(file) => &file.name,
            Source::MappingDirectory(dir) => &dir.name,
        }
    }

    pub fn path(&self) -> &PathBuf {
        match self {
            Source::MappingFile(file) => &file.path,
            Source::MappingDirectory(dir) => &dir.path,
        }
    }

    pub fn type_label(&self) -> &'static str {
        match self {
            Source::MappingFile(_) => "mapping file",
            Source::MappingDirectory(_) => "mapping directory",
        }
    }

    /// Validate the source configuration
    pub fn validate(&self) -> Result<()> {
        match self {
            Source::MappingFile(file) => file.validate(),
            Source::MappingDirectory(dir) => dir.validate(),
        }
    }
}

/// Single mapping document source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingFileSource {
    /// Name of the source
    pub name: String,

    /// Path of the YAML or JSON mapping document
    pub path: PathBuf,
}

impl MappingFileSource {
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(anyhow!("Mapping file source name cannot be empty"));
        }

        if self.path.to_string_lossy().is_empty() {
            return Err(anyhow!("Mapping file path cannot be empty"));
        }

        Ok(())
    }
}

/// Directory of mapping documents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingDirectorySource {
    /// Name of the source
    pub name: String,

    /// Directory to scan recursively
    pub path: PathBuf,

    /// File patterns to include (e.g., ["**/*.yaml"]); empty means YAML and JSON files
    #[serde(default)]
    pub include_patterns: Vec<String>,

    /// File patterns to exclude (e.g., ["drafts/**"])
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
}

impl MappingDirectorySource {
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(anyhow!("Mapping directory source name cannot be empty"));
        }

        if self.path.to_string_lossy().is_empty() {
            return Err(anyhow!("Mapping directory path cannot be empty"));
        }

        for pattern in self.include_patterns.iter().chain(&self.exclude_patterns) {
            Pattern::new(pattern)
                .map_err(|e| anyhow!("Invalid file pattern '{}': {}", pattern, e))?;
        }

        Ok(())
    }
}
