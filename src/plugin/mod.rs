//! Generator plugin registry
//!
//! Maps each configured [`GeneratorKind`] to a factory producing a boxed
//! [`GeneratorPlugin`] bound to a destination.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;
use xmlns_gen_plugin::{GeneratorPlugin, LineRenderer, Log, TextArtifactGenerator};
use xmlns_generator::{HtmlDocumentation, WikiDocumentation, XmlMetadata, XsdSchema};

use crate::config::{GeneratorKind, GeneratorSpec};
use crate::{XmlnsGenError, XmlnsGenResult};

/// Creates generator plugins of one kind
pub trait GeneratorFactory: Send + Sync {
    /// Kind of plugin this factory builds
    fn kind(&self) -> GeneratorKind;

    /// Create a plugin writing to `destination` (without extension)
    fn create(&self, destination: &Path, log: Arc<dyn Log>) -> Box<dyn GeneratorPlugin>;
}

/// Factory for generators built from a [`LineRenderer`]
#[derive(Debug, Clone)]
pub struct RendererFactory<R> {
    kind: GeneratorKind,
    renderer: R,
}

impl<R> RendererFactory<R> {
    pub fn new(kind: GeneratorKind, renderer: R) -> Self {
        Self { kind, renderer }
    }
}

impl<R: LineRenderer + Clone + 'static> GeneratorFactory for RendererFactory<R> {
    fn kind(&self) -> GeneratorKind {
        self.kind
    }

    fn create(&self, destination: &Path, log: Arc<dyn Log>) -> Box<dyn GeneratorPlugin> {
        Box::new(TextArtifactGenerator::new(self.renderer.clone(), destination).with_log(log))
    }
}

/// Plugin manager for creating configured generators
pub struct PluginManager {
    factories: BTreeMap<GeneratorKind, Box<dyn GeneratorFactory>>,
}

impl PluginManager {
    /// Create an empty plugin manager
    pub fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Create a plugin manager with every built-in backend registered
    pub fn with_builtin_factories() -> Self {
        let mut manager = Self::new();
        manager.register_factory(Box::new(RendererFactory::new(
            GeneratorKind::Html,
            HtmlDocumentation,
        )));
        manager.register_factory(Box::new(RendererFactory::new(
            GeneratorKind::Wiki,
            WikiDocumentation,
        )));
        manager.register_factory(Box::new(RendererFactory::new(
            GeneratorKind::Xsd,
            XsdSchema,
        )));
        manager.register_factory(Box::new(RendererFactory::new(
            GeneratorKind::Metadata,
            XmlMetadata,
        )));
        manager
    }

    /// Register a plugin factory, replacing any factory of the same kind
    pub fn register_factory(&mut self, factory: Box<dyn GeneratorFactory>) {
        debug!("Registering generator factory: {}", factory.kind());
        self.factories.insert(factory.kind(), factory);
    }

    /// Kinds that can currently be created
    pub fn supported_kinds(&self) -> Vec<GeneratorKind> {
        self.factories.keys().copied().collect()
    }

    /// Create a plugin for a configured generator
    pub fn create_plugin(
        &self,
        spec: &GeneratorSpec,
        destination: &Path,
        log: Arc<dyn Log>,
    ) -> XmlnsGenResult<Box<dyn GeneratorPlugin>> {
        let factory = self.factories.get(&spec.kind).ok_or_else(|| {
            XmlnsGenError::Plugin(format!("No factory found for generator kind: {}", spec.kind))
        })?;
        Ok(factory.create(destination, log))
    }
}

impl Default for PluginManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use xmlns_gen_plugin::NoopLog;

    #[test]
    fn test_plugin_manager_creation() {
        let manager = PluginManager::new();
        assert!(manager.supported_kinds().is_empty());

        let builtin = PluginManager::with_builtin_factories();
        assert_eq!(builtin.supported_kinds(), GeneratorKind::ALL.to_vec());
    }

    #[test]
    fn test_create_plugin_appends_extension() {
        let manager = PluginManager::with_builtin_factories();
        let destination = PathBuf::from("out/foo");

        let expected = [
            (GeneratorKind::Html, "out/foo.html"),
            (GeneratorKind::Wiki, "out/foo.wiki"),
            (GeneratorKind::Xsd, "out/foo.xsd"),
            (GeneratorKind::Metadata, "out/foo.properties"),
        ];
        for (kind, path) in expected {
            let plugin = manager
                .create_plugin(&GeneratorSpec::new(kind), &destination, Arc::new(NoopLog))
                .unwrap();
            assert_eq!(plugin.destination(), Path::new(path));
        }
    }

    #[test]
    fn test_missing_factory() {
        let manager = PluginManager::new();
        let result = manager.create_plugin(
            &GeneratorSpec::new(GeneratorKind::Xsd),
            Path::new("out/foo"),
            Arc::new(NoopLog),
        );
        assert!(matches!(result, Err(XmlnsGenError::Plugin(_))));
    }
}
