//! Line-oriented renderers and the generator that writes them

use std::path::{Path, PathBuf};
use std::sync::Arc;

use xmlns_mapping::NamespaceMapping;

use super::generator::GeneratorPlugin;
use crate::artifact::GeneratedArtifact;
use crate::error::GenerationError;
use crate::log::{Log, NoopLog};
use crate::writer::write_atomic;

/// Renders a namespace into the lines of a text artifact.
///
/// Rendering is pure: the same namespace always yields the same lines.
pub trait LineRenderer: Send + Sync {
    /// Human-readable artifact kind, used in progress messages
    fn name(&self) -> &str;

    /// File extension appended to the destination
    fn extension(&self) -> &str;

    fn render(&self, namespace: &NamespaceMapping) -> Vec<String>;
}

/// Adapts a [`LineRenderer`] into a [`GeneratorPlugin`] writing `<destination>.<extension>`
pub struct TextArtifactGenerator<R> {
    renderer: R,
    path: PathBuf,
    log: Arc<dyn Log>,
}

impl<R: LineRenderer> TextArtifactGenerator<R> {
    pub fn new(renderer: R, destination: impl AsRef<Path>) -> Self {
        let path = artifact_path(destination.as_ref(), renderer.extension());
        Self {
            renderer,
            path,
            log: Arc::new(NoopLog),
        }
    }

    pub fn with_log(mut self, log: Arc<dyn Log>) -> Self {
        self.log = log;
        self
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Render the full artifact text without writing it
    pub fn render_to_string(&self, namespace: &NamespaceMapping) -> String {
        let mut content = self.renderer.render(namespace).join("\n");
        content.push('\n');
        content
    }
}

impl<R: LineRenderer> GeneratorPlugin for TextArtifactGenerator<R> {
    fn name(&self) -> &str {
        self.renderer.name()
    }

    fn destination(&self) -> &Path {
        &self.path
    }

    fn generate(&self, namespace: &NamespaceMapping) -> Result<GeneratedArtifact, GenerationError> {
        self.log.log(&format!(
            "Generating {} file: {} for namespace: {}",
            self.renderer.name(),
            self.path.display(),
            namespace.namespace_uri()
        ));

        let content = self.render_to_string(namespace);
        write_atomic(&self.path, content.as_bytes())?;

        Ok(GeneratedArtifact::new(
            self.renderer.name(),
            self.path.clone(),
            &content,
        ))
    }
}

/// `destination` with `.extension` appended to its file name
pub fn artifact_path(destination: &Path, extension: &str) -> PathBuf {
    let mut file_name = destination
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    file_name.push(".");
    file_name.push(extension);
    destination.with_file_name(file_name)
}
