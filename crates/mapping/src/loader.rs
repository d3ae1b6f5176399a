//! Mapping document loading
//!
//! A mapping document is the serialized form of an already-built namespace mapping,
//! together with the type-hierarchy table used for assignability. YAML and JSON are
//! both accepted; the format follows the file extension.

use anyhow::{anyhow, Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::assignability::TypeHierarchy;
use crate::element::ElementMapping;
use crate::error::ModelViolation;
use crate::namespace::NamespaceMapping;

/// Serialized namespace mapping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingDocument {
    /// Namespace URI
    pub namespace: String,

    /// Designated root element name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,

    /// Classes with a namespace-wide text converter
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub simple_types: Vec<String>,

    /// Class name to direct supertypes
    #[serde(default, skip_serializing_if = "TypeHierarchy::is_empty")]
    pub types: TypeHierarchy,

    /// Elements in declaration order
    #[serde(default)]
    pub elements: Vec<ElementMapping>,
}

impl MappingDocument {
    /// Build the immutable namespace model, wiring the type table in as its assignability
    pub fn into_namespace(self) -> Result<NamespaceMapping, ModelViolation> {
        let mut builder = NamespaceMapping::builder(self.namespace)
            .elements(self.elements)
            .assignability(self.types);

        if let Some(root) = self.root {
            builder = builder.root_element(root);
        }
        for class_name in self.simple_types {
            builder = builder.simple_type(class_name);
        }

        builder.build()
    }
}

/// Serialization format of a mapping document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Pick the format from a file extension, defaulting to YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// A namespace mapping together with the document it came from
#[derive(Debug, Clone)]
pub struct LoadedMapping {
    pub source_path: PathBuf,
    pub namespace: NamespaceMapping,
}

/// Default file patterns for directory scans
pub const DEFAULT_INCLUDE_PATTERNS: &[&str] = &["*.yaml", "*.yml", "*.json"];

pub struct MappingLoader;

impl Default for MappingLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl MappingLoader {
    pub fn new() -> Self {
        Self
    }

    /// Parse a mapping document without building the model
    pub fn parse_document(&self, content: &str, format: DocumentFormat) -> Result<MappingDocument> {
        let document = match format {
            DocumentFormat::Yaml => serde_yaml::from_str(content)?,
            DocumentFormat::Json => serde_json::from_str(content)?,
        };
        Ok(document)
    }

    /// Parse and build a namespace mapping from text
    pub fn parse_str(&self, content: &str, format: DocumentFormat) -> Result<NamespaceMapping> {
        let document = self.parse_document(content, format)?;
        Ok(document.into_namespace()?)
    }

    /// Load a single mapping document
    pub fn load_file(&self, path: &Path) -> Result<NamespaceMapping> {
        debug!("Loading mapping document: {:?}", path);

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read mapping document {}", path.display()))?;

        self.parse_str(&content, DocumentFormat::from_path(path))
            .with_context(|| format!("Invalid mapping document {}", path.display()))
    }

    /// Load every mapping document under `dir` that matches the include patterns and none
    /// of the exclude patterns. Patterns are matched against the path relative to `dir`.
    /// Documents are returned sorted by path.
    pub fn load_directory(
        &self,
        dir: &Path,
        include_patterns: &[String],
        exclude_patterns: &[String],
    ) -> Result<Vec<LoadedMapping>> {
        info!("Loading mapping documents from directory: {:?}", dir);

        if !dir.is_dir() {
            return Err(anyhow!("Mapping directory does not exist: {:?}", dir));
        }

        let includes = if include_patterns.is_empty() {
            compile_patterns(DEFAULT_INCLUDE_PATTERNS.iter().copied())?
        } else {
            compile_patterns(include_patterns.iter().map(String::as_str))?
        };
        let excludes = compile_patterns(exclude_patterns.iter().map(String::as_str))?;

        let mut mappings = Vec::new();

        for entry in WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let path = entry.path();
            let relative = path.strip_prefix(dir).unwrap_or(path);

            if !includes.iter().any(|p| p.matches_path(relative)) {
                continue;
            }
            if excludes.iter().any(|p| p.matches_path(relative)) {
                debug!("Excluded mapping document: {:?}", relative);
                continue;
            }

            let namespace = self.load_file(path)?;
            mappings.push(LoadedMapping {
                source_path: path.to_path_buf(),
                namespace,
            });
        }

        info!("Found {} mapping documents", mappings.len());
        Ok(mappings)
    }
}

fn compile_patterns<'a>(patterns: impl Iterator<Item = &'a str>) -> Result<Vec<Pattern>> {
    patterns
        .map(|p| Pattern::new(p).with_context(|| format!("Invalid file pattern: {p}")))
        .collect()
}
