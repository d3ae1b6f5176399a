//! xmlns-gen Library
//!
//! Generates reference documentation, XML schemas and binding metadata from XML
//! namespace mapping documents. Mapping documents are loaded into
//! [`NamespaceMapping`]s and every configured generator plugin is run against each
//! namespace.

pub mod cli;
pub mod config;
pub mod plugin;
pub mod utils;

pub use config::{Config, GenerationConfig, GeneratorKind, GeneratorSpec, Source};
pub use plugin::{GeneratorFactory, PluginManager, RendererFactory};
pub use xmlns_generator::{GenerationResult, GenerationStatistics, OutputConfig, PluginRunResult};
pub use xmlns_mapping::{LoadedMapping, MappingLoader, NamespaceMapping};

use anyhow::{Context, Result};
use chrono::Utc;
use futures::future::join_all;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use xmlns_gen_plugin::{GeneratorPlugin, Log, TracingLog};

/// Main application context that coordinates all components
pub struct XmlnsGen {
    config: Config,
    loader: MappingLoader,
    plugin_manager: Arc<PluginManager>,
}

impl XmlnsGen {
    /// Create a new XmlnsGen instance with the built-in generators
    pub fn new(config: Config) -> Result<Self> {
        Self::with_plugin_manager(config, PluginManager::with_builtin_factories())
    }

    /// Create a new XmlnsGen instance with a custom set of generator factories
    pub fn with_plugin_manager(config: Config, plugin_manager: PluginManager) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            loader: MappingLoader::new(),
            plugin_manager: Arc::new(plugin_manager),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn plugin_manager(&self) -> &PluginManager {
        &self.plugin_manager
    }

    /// Load every configured source. A namespace defined by more than one
    /// document is rejected, since its artifacts would overwrite each other.
    pub fn load_sources(&self) -> Result<Vec<LoadedMapping>> {
        let mut mappings = Vec::new();
        let mut seen: HashMap<String, PathBuf> = HashMap::new();

        for source in &self.config.sources {
            for mapping in self.load_source(source)? {
                let uri = mapping.namespace.namespace_uri().to_string();
                if let Some(previous) = seen.get(&uri) {
                    return Err(XmlnsGenError::Config(format!(
                        "Namespace {} is defined by both {} and {}",
                        uri,
                        previous.display(),
                        mapping.source_path.display()
                    ))
                    .into());
                }
                seen.insert(uri, mapping.source_path.clone());
                mappings.push(mapping);
            }
        }

        Ok(mappings)
    }

    /// Load the mapping documents of a single source
    pub fn load_source(&self, source: &Source) -> Result<Vec<LoadedMapping>> {
        let path = utils::expand_path(source.path())?;
        info!("Loading {} source {}: {:?}", source.type_label(), source.name(), path);

        let mappings = match source {
            Source::MappingFile(_) => {
                let namespace = self.loader.load_file(&path)?;
                vec![LoadedMapping {
                    source_path: path,
                    namespace,
                }]
            }
            Source::MappingDirectory(dir) => self
                .loader
                .load_directory(&path, &dir.include_patterns, &dir.exclude_patterns)
                .with_context(|| format!("Failed to load source {}", source.name()))?,
        };

        if mappings.is_empty() {
            warn!("Source {} contains no mapping documents", source.name());
        }

        Ok(mappings)
    }

    /// Create one plugin per enabled generator for a namespace
    pub fn create_plugins(&self, namespace_uri: &str) -> Result<Vec<Box<dyn GeneratorPlugin>>> {
        let base_path = utils::expand_path(self.config.output.base_path())?;
        let output = OutputConfig {
            base_path,
            ..self.config.output.clone()
        };

        self.config
            .enabled_generators()
            .map(|spec| -> Result<Box<dyn GeneratorPlugin>> {
                let destination = output.destination_for(namespace_uri, spec.file_stem.as_deref());
                let log: Arc<dyn Log> = Arc::new(TracingLog::with_source(spec.kind.as_str()));
                debug!("Creating {} generator for {:?}", spec.kind, destination);
                Ok(self.plugin_manager.create_plugin(spec, &destination, log)?)
            })
            .collect()
    }

    /// Reject runs in which two namespaces would write the same artifact.
    ///
    /// Distinct URIs can share a file stem (`http://x/a` and `https://x/a`), and an
    /// explicit `file_stem` under flat organization is shared by every namespace.
    pub fn check_destinations(&self, mappings: &[LoadedMapping]) -> XmlnsGenResult<()> {
        let mut owners: HashMap<PathBuf, &str> = HashMap::new();

        for mapping in mappings {
            let uri = mapping.namespace.namespace_uri();
            let plugins = self
                .create_plugins(uri)
                .map_err(|e| XmlnsGenError::Config(format!("{e:#}")))?;

            for plugin in &plugins {
                let destination = plugin.destination().to_path_buf();
                match owners.get(&destination) {
                    Some(owner) if *owner != uri => {
                        return Err(XmlnsGenError::DestinationConflict {
                            path: destination,
                            first: owner.to_string(),
                            second: uri.to_string(),
                        });
                    }
                    Some(_) => {
                        return Err(XmlnsGenError::Config(format!(
                            "Two generators of namespace {} write {}",
                            uri,
                            destination.display()
                        )));
                    }
                    None => {
                        owners.insert(destination, uri);
                    }
                }
            }
        }

        Ok(())
    }

    /// Generate artifacts for all configured sources
    pub async fn generate(&self) -> Result<GenerationResult> {
        info!("Starting generation");
        let start_time = Instant::now();

        let mappings = self.load_sources()?;
        self.check_destinations(&mappings)?;
        let namespaces_processed = mappings.len();
        let mut results = Vec::new();

        for mapping in mappings {
            let namespace_results = self.generate_namespace(mapping).await?;
            results.extend(namespace_results);
        }

        let generation_time = start_time.elapsed();
        info!("Generation completed in {:?}", generation_time);

        let mut statistics = GenerationStatistics::from_results(&results, namespaces_processed);
        statistics.total_processing_time_ms = generation_time.as_millis() as u64;

        Ok(GenerationResult {
            namespaces_processed,
            total_sources: self.config.sources.len(),
            results,
            statistics,
            generated_at: Utc::now(),
        })
    }

    /// Run every enabled generator over one namespace
    pub async fn generate_namespace(&self, mapping: LoadedMapping) -> Result<Vec<PluginRunResult>> {
        let LoadedMapping {
            source_path,
            namespace,
        } = mapping;
        info!(
            "Processing namespace {} ({} elements) from {:?}",
            namespace.namespace_uri(),
            namespace.element_count(),
            source_path
        );

        let plugins = self.create_plugins(namespace.namespace_uri())?;
        let fail_fast = self.config.generation.fail_fast;

        let results = if self.config.generation.parallel {
            self.run_parallel(plugins, Arc::new(namespace), source_path)
                .await?
        } else {
            let mut results = Vec::with_capacity(plugins.len());
            for plugin in &plugins {
                let result = run_plugin(plugin.as_ref(), &namespace, &source_path);
                let failed = !result.is_success();
                results.push(result);
                if failed && fail_fast {
                    break;
                }
            }
            results
        };

        if fail_fast {
            if let Some(failure) = results.iter().find(|r| !r.is_success()) {
                return Err(XmlnsGenError::Generation {
                    generator: failure.generator.clone(),
                    namespace: failure.namespace_uri.clone(),
                    message: failure.error.clone().unwrap_or_default(),
                }
                .into());
            }
        }

        Ok(results)
    }

    async fn run_parallel(
        &self,
        plugins: Vec<Box<dyn GeneratorPlugin>>,
        namespace: Arc<NamespaceMapping>,
        source_path: PathBuf,
    ) -> Result<Vec<PluginRunResult>> {
        let tasks = plugins.into_iter().map(|plugin| {
            let namespace = Arc::clone(&namespace);
            let source_path = source_path.clone();
            tokio::task::spawn_blocking(move || {
                run_plugin(plugin.as_ref(), &namespace, &source_path)
            })
        });

        join_all(tasks)
            .await
            .into_iter()
            .map(|joined| joined.context("Generator task panicked"))
            .collect()
    }
}

/// Run a single plugin, capturing its outcome instead of propagating it
pub fn run_plugin(
    plugin: &dyn GeneratorPlugin,
    namespace: &NamespaceMapping,
    source_path: &Path,
) -> PluginRunResult {
    let start_time = Instant::now();
    let previous_digest = utils::calculate_file_hash(plugin.destination()).ok();

    let outcome = plugin.generate(namespace);
    let processing_time_ms = start_time.elapsed().as_millis() as u64;

    let mut result = PluginRunResult {
        generator: plugin.name().to_string(),
        namespace_uri: namespace.namespace_uri().to_string(),
        source_path: source_path.to_path_buf(),
        artifact: None,
        error: None,
        unchanged: false,
        processing_time_ms,
    };

    match outcome {
        Ok(artifact) => {
            result.unchanged = previous_digest.as_deref() == Some(artifact.sha256.as_str());
            info!(
                "Generated {} ({} lines){}",
                artifact.path.display(),
                artifact.lines,
                if result.unchanged { ", unchanged" } else { "" }
            );
            result.artifact = Some(artifact);
        }
        Err(e) => {
            error!(
                "{} failed for namespace {}: {}",
                plugin.name(),
                namespace.namespace_uri(),
                e
            );
            result.error = Some(e.to_string());
        }
    }

    result
}

/// Application error types
#[derive(thiserror::Error, Debug)]
pub enum XmlnsGenError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Namespaces {first} and {second} both write {}", .path.display())]
    DestinationConflict {
        path: PathBuf,
        first: String,
        second: String,
    },

    #[error("{generator} failed for namespace {namespace}: {message}")]
    Generation {
        generator: String,
        namespace: String,
        message: String,
    },

    #[error("Plugin error: {0}")]
    Plugin(String),
}

/// Result type for the main application
pub type XmlnsGenResult<T> = Result<T, XmlnsGenError>;
