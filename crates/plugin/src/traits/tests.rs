//! Traits tests

use super::*;
use crate::error::GenerationError;
use crate::log::MemoryLog;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use xmlns_mapping::{ElementMapping, NamespaceMapping};

struct ElementList;

impl LineRenderer for ElementList {
    fn name(&self) -> &str {
        "element list"
    }

    fn extension(&self) -> &str {
        "txt"
    }

    fn render(&self, namespace: &NamespaceMapping) -> Vec<String> {
        std::iter::once(format!("# {}", namespace.namespace_uri()))
            .chain(namespace.elements().map(|e| e.element_name().to_string()))
            .collect()
    }
}

fn namespace() -> NamespaceMapping {
    NamespaceMapping::builder("http://example.org/ns")
        .element(ElementMapping::new("broker", "org.example.Broker", vec![]).unwrap())
        .element(ElementMapping::new("queue", "org.example.Queue", vec![]).unwrap())
        .build()
        .unwrap()
}

#[test]
fn test_artifact_path_appends_extension() {
    assert_eq!(
        artifact_path(Path::new("out/schema"), "xsd"),
        PathBuf::from("out/schema.xsd")
    );
    assert_eq!(
        artifact_path(Path::new("out/activemq.org"), "html"),
        PathBuf::from("out/activemq.org.html")
    );
}

#[test]
fn test_text_generator_writes_and_logs() {
    let temp_dir = TempDir::new().unwrap();
    let log = Arc::new(MemoryLog::new());
    let generator = TextArtifactGenerator::new(ElementList, temp_dir.path().join("elements"))
        .with_log(log.clone());

    let artifact = generator.generate(&namespace()).unwrap();

    assert_eq!(artifact.path, temp_dir.path().join("elements.txt"));
    assert_eq!(artifact.generator, "element list");
    assert_eq!(artifact.lines, 3);
    let written = std::fs::read_to_string(&artifact.path).unwrap();
    assert_eq!(written, "# http://example.org/ns\nbroker\nqueue\n");

    let messages = log.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("element list"));
    assert!(messages[0].contains("http://example.org/ns"));
}

#[test]
fn test_generation_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let generator = TextArtifactGenerator::new(ElementList, temp_dir.path().join("elements"));
    let namespace = namespace();

    let first = generator.generate(&namespace).unwrap();
    let first_bytes = std::fs::read(&first.path).unwrap();
    let second = generator.generate(&namespace).unwrap();
    let second_bytes = std::fs::read(&second.path).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn test_unwritable_destination_fails() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir(temp_dir.path().join("elements.txt")).unwrap();
    let generator = TextArtifactGenerator::new(ElementList, temp_dir.path().join("elements"));

    let err = generator.generate(&namespace()).unwrap_err();
    assert!(matches!(err, GenerationError::UnwritableDestination { .. }));
    assert_eq!(err.path(), temp_dir.path().join("elements.txt"));
}

#[test]
fn test_boxed_plugin_delegates() {
    let temp_dir = TempDir::new().unwrap();
    let plugin: Box<dyn GeneratorPlugin> =
        Box::new(TextArtifactGenerator::new(ElementList, temp_dir.path().join("boxed")));

    assert_eq!(plugin.name(), "element list");
    assert_eq!(plugin.destination(), temp_dir.path().join("boxed.txt"));
    assert!(plugin.generate(&namespace()).is_ok());
}
