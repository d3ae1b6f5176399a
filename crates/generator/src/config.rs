//! Configuration types for the generator

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Base path for generated files
    pub base_path: PathBuf,

    /// Organization strategy for output files
    pub organization: OrganizationStrategy,
}

impl OutputConfig {
    pub fn validate(&self) -> Result<()> {
        if self.base_path.to_string_lossy().is_empty() {
            return Err(anyhow!("Base path cannot be empty"));
        }
        Ok(())
    }

    /// Destination (without extension) for one generator run over a namespace.
    ///
    /// `file_stem` defaults to a file-system friendly form of the namespace URI.
    pub fn destination_for(&self, namespace_uri: &str, file_stem: Option<&str>) -> PathBuf {
        let namespace_stem = namespace_file_stem(namespace_uri);
        let stem = file_stem.unwrap_or(&namespace_stem);

        match self.organization {
            OrganizationStrategy::Flat => self.base_path.join(stem),
            OrganizationStrategy::ByNamespace => self.base_path.join(&namespace_stem).join(stem),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("./generated"),
            organization: OrganizationStrategy::Flat,
        }
    }
}

/// Organization strategy for output files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationStrategy {
    /// All artifacts in the base directory
    Flat,

    /// One directory per namespace
    ByNamespace,
}

/// Convert a namespace URI into a file name stem
/// (e.g. `http://activemq.org/config/1.0` becomes `activemq.org_config_1.0`)
pub fn namespace_file_stem(namespace_uri: &str) -> String {
    let without_scheme = match namespace_uri.find("://") {
        Some(index) => &namespace_uri[index + 3..],
        None => namespace_uri
            .strip_prefix("urn:")
            .unwrap_or(namespace_uri),
    };

    let stem: String = without_scheme
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let stem = stem.trim_matches(|c: char| c == '_' || c == '.');
    if stem.is_empty() {
        "namespace".to_string()
    } else {
        stem.to_string()
    }
}
