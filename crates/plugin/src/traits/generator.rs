//! Generator plugin trait

use std::path::Path;

use xmlns_mapping::NamespaceMapping;

use crate::artifact::GeneratedArtifact;
use crate::error::GenerationError;

/// An output backend that turns a namespace mapping into one artifact.
///
/// The destination is fixed at construction; `generate` is the only runtime entry point.
/// Implementations must not mutate the model and must report progress through the
/// logging capability they were given, never a global.
pub trait GeneratorPlugin: Send + Sync {
    /// Get generator name
    fn name(&self) -> &str;

    /// Path of the artifact this generator writes
    fn destination(&self) -> &Path;

    /// Produce the artifact, failing as a whole on any I/O error
    fn generate(&self, namespace: &NamespaceMapping) -> Result<GeneratedArtifact, GenerationError>;
}

impl<G: GeneratorPlugin + ?Sized> GeneratorPlugin for Box<G> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn destination(&self) -> &Path {
        (**self).destination()
    }

    fn generate(&self, namespace: &NamespaceMapping) -> Result<GeneratedArtifact, GenerationError> {
        (**self).generate(namespace)
    }
}
