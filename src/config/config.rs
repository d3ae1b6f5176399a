//! Main configuration structure and implementation

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use super::{default_generators, GenerationConfig, GeneratorSpec, Source};
use xmlns_generator::OutputConfig;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// List of mapping sources to process
    pub sources: Vec<Source>,

    /// Output configuration
    pub output: OutputConfig,

    /// Generation settings
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Generators run for every namespace
    #[serde(default = "default_generators")]
    pub generators: Vec<GeneratorSpec>,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write configuration file {}", path.display()))?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.version != "1.0" {
            return Err(anyhow!(
                "Unsupported configuration version: {}",
                self.version
            ));
        }

        if self.sources.is_empty() {
            return Err(anyhow!("At least one source must be configured"));
        }

        let mut names = HashSet::new();
        for source in &self.sources {
            source.validate()?;
            if !names.insert(source.name()) {
                return Err(anyhow!("Duplicate source name: {}", source.name()));
            }
        }

        self.output.validate()?;

        if self.enabled_generators().next().is_none() {
            return Err(anyhow!("At least one generator must be enabled"));
        }

        // Two generators of the same kind would write the same file
        let mut outputs = HashSet::new();
        for generator in self.enabled_generators() {
            if let Some(stem) = &generator.file_stem {
                if stem.trim().is_empty() {
                    return Err(anyhow!("Generator {} has an empty file stem", generator.kind));
                }
            }
            if !outputs.insert((generator.kind, generator.file_stem.as_deref())) {
                return Err(anyhow!(
                    "Generator {} is configured more than once for the same output",
                    generator.kind
                ));
            }
        }

        Ok(())
    }

    /// Generators that will run, in configured order
    pub fn enabled_generators(&self) -> impl Iterator<Item = &GeneratorSpec> {
        self.generators.iter().filter(|g| g.enabled)
    }

    /// Create a default configuration
    pub fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            sources: Vec::new(),
            output: OutputConfig::default(),
            generation: GenerationConfig::default(),
            generators: default_generators(),
        }
    }
}
