use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use xmlns_gen::config::{MappingDirectorySource, MappingFileSource, Source};
use xmlns_gen::{Config, GeneratorKind, GeneratorSpec, XmlnsGen, XmlnsGenError};
use xmlns_generator::OrganizationStrategy;

const FOO_MAPPING: &str = r#"
namespace: foo
root: bean2
types:
  org.example.Bean1: [org.example.Item]
elements:
  - name: bean1
    class: org.example.Bean1
    description: The first bean
    attributes:
      - name: name
        type: java.lang.String
        description: The bean name
  - name: bean2
    class: org.example.Bean2
    description: The second bean
    attributes:
      - name: items
        type:
          class: java.util.List
          collection: true
          nested: org.example.Item
        description: Contained items
      - name: helper
        type: org.example.Unimplemented
      - name: timeout
        type: java.time.Duration
        converter: org.example.DurationEditor
        property: timeoutDuration
"#;

const BAR_MAPPING: &str = r#"{
  "namespace": "http://example.org/bar",
  "elements": [
    { "name": "widget", "class": "org.example.Widget" }
  ]
}"#;

fn write_mappings(dir: &Path) -> PathBuf {
    let mappings = dir.join("mappings");
    fs::create_dir_all(mappings.join("drafts")).unwrap();
    fs::write(mappings.join("foo.yaml"), FOO_MAPPING).unwrap();
    fs::write(mappings.join("bar.json"), BAR_MAPPING).unwrap();
    fs::write(mappings.join("drafts").join("broken.yaml"), "namespace: [").unwrap();
    mappings
}

fn directory_config(dir: &Path) -> Config {
    let mut config = Config::default();
    config.sources.push(Source::MappingDirectory(MappingDirectorySource {
        name: "all".to_string(),
        path: write_mappings(dir),
        include_patterns: Vec::new(),
        exclude_patterns: vec!["drafts/*".to_string()],
    }));
    config.output.base_path = dir.join("out");
    config
}

fn read(path: PathBuf) -> String {
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("{}: {e}", path.display()))
}

#[tokio::test]
async fn test_full_generation_workflow() {
    let temp_dir = TempDir::new().unwrap();
    let config = directory_config(temp_dir.path());
    let out = config.output.base_path.clone();

    let app = XmlnsGen::new(config).unwrap();
    let result = app.generate().await.unwrap();

    assert_eq!(result.namespaces_processed, 2);
    assert_eq!(result.total_sources, 1);
    assert_eq!(result.statistics.artifacts_generated, 8);
    assert_eq!(result.statistics.error_count, 0);
    assert_eq!(result.failures().count(), 0);

    // Directory sources are loaded in file name order
    assert_eq!(result.results[0].namespace_uri, "http://example.org/bar");
    assert_eq!(result.results[4].namespace_uri, "foo");

    for extension in ["html", "wiki", "xsd", "properties"] {
        assert!(out.join(format!("foo.{extension}")).is_file());
        assert!(out.join(format!("example.org_bar.{extension}")).is_file());
    }

    let html = read(out.join("foo.html"));
    let root = html.find("<h1>Root Element</h1>").unwrap();
    let summary = html.find("<h1>Element Summary</h1>").unwrap();
    assert!(root < summary);
    let summary_section = &html[summary..];
    assert!(
        summary_section.find("<a href='#bean1'>bean1</a></td>").unwrap()
            < summary_section.find("<a href='#bean2'>bean2</a></td>").unwrap()
    );
    assert!(html.contains("(<a href='#bean1'>bean1</a>)*"));
    assert!(html.contains("&lt;spring:bean/&gt;"));

    let bar_html = read(out.join("example.org_bar.html"));
    assert!(!bar_html.contains("Root Element"));

    let properties = read(out.join("foo.properties"));
    assert!(properties.contains("bean1 = org.example.Bean1"));
    assert!(properties.contains("org.example.Bean2.alias.timeout = timeoutDuration"));
}

#[tokio::test]
async fn test_generation_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let config = directory_config(temp_dir.path());
    let out = config.output.base_path.clone();
    let app = XmlnsGen::new(config).unwrap();

    let first = app.generate().await.unwrap();
    let first_html = fs::read(out.join("foo.html")).unwrap();
    assert_eq!(first.statistics.artifacts_unchanged, 0);

    let second = app.generate().await.unwrap();
    let second_html = fs::read(out.join("foo.html")).unwrap();

    assert_eq!(first_html, second_html);
    assert_eq!(second.statistics.artifacts_unchanged, 8);
    let first_digests: Vec<&str> = first.artifacts().map(|a| a.sha256.as_str()).collect();
    let second_digests: Vec<&str> = second.artifacts().map(|a| a.sha256.as_str()).collect();
    assert_eq!(first_digests, second_digests);
}

#[tokio::test]
async fn test_parallel_generation_matches_sequential() {
    let sequential_dir = TempDir::new().unwrap();
    let parallel_dir = TempDir::new().unwrap();

    let sequential = directory_config(sequential_dir.path());
    let mut parallel = directory_config(parallel_dir.path());
    parallel.generation.parallel = true;

    let sequential_out = sequential.output.base_path.clone();
    let parallel_out = parallel.output.base_path.clone();

    XmlnsGen::new(sequential).unwrap().generate().await.unwrap();
    let result = XmlnsGen::new(parallel).unwrap().generate().await.unwrap();

    assert_eq!(result.statistics.artifacts_generated, 8);
    // Results keep the configured generator order
    let kinds: Vec<&str> = result.results[..4].iter().map(|r| r.generator.as_str()).collect();
    assert_eq!(
        kinds,
        vec!["HTML documentation", "wiki documentation", "XSD schema", "XML metadata"]
    );
    for name in ["foo.html", "foo.wiki", "foo.xsd", "foo.properties"] {
        assert_eq!(
            fs::read(sequential_out.join(name)).unwrap(),
            fs::read(parallel_out.join(name)).unwrap()
        );
    }
}

#[tokio::test]
async fn test_by_namespace_organization_and_file_stems() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = directory_config(temp_dir.path());
    config.output.organization = OrganizationStrategy::ByNamespace;
    config.generators = vec![
        GeneratorSpec {
            kind: GeneratorKind::Xsd,
            file_stem: Some("schema".to_string()),
            enabled: true,
        },
        GeneratorSpec {
            kind: GeneratorKind::Html,
            file_stem: None,
            enabled: false,
        },
    ];
    let out = config.output.base_path.clone();

    let result = XmlnsGen::new(config).unwrap().generate().await.unwrap();

    assert_eq!(result.statistics.artifacts_generated, 2);
    assert!(out.join("foo").join("schema.xsd").is_file());
    assert!(out.join("example.org_bar").join("schema.xsd").is_file());
    assert!(!out.join("foo").join("foo.html").exists());
}

#[tokio::test]
async fn test_invalid_mapping_document_fails_generation() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = directory_config(temp_dir.path());
    if let Source::MappingDirectory(dir) = &mut config.sources[0] {
        dir.exclude_patterns.clear();
    }

    let err = XmlnsGen::new(config).unwrap().generate().await.unwrap_err();
    assert!(format!("{err:#}").contains("broken.yaml"));
}

#[test]
fn test_duplicate_namespace_across_sources() {
    let temp_dir = TempDir::new().unwrap();
    let mappings = write_mappings(temp_dir.path());

    let mut config = Config::default();
    for name in ["first", "second"] {
        config.sources.push(Source::MappingFile(MappingFileSource {
            name: name.to_string(),
            path: mappings.join("foo.yaml"),
        }));
    }

    let err = XmlnsGen::new(config).unwrap().load_sources().unwrap_err();
    assert!(err.to_string().contains("Namespace foo is defined by both"));
}

#[test]
fn test_config_file_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let config = directory_config(temp_dir.path());
    let config_path = temp_dir.path().join(".xmlns-gen.yaml");

    config.save_to_file(&config_path).unwrap();
    let loaded = Config::from_file(&config_path).unwrap();

    assert_eq!(loaded.sources.len(), 1);
    assert_eq!(loaded.sources[0].name(), "all");
    assert_eq!(loaded.output.base_path, config.output.base_path);
    assert_eq!(loaded.generators, config.generators);
}

fn single_element_mapping(namespace: &str, element: &str) -> String {
    format!(
        "namespace: {namespace}\nelements:\n  - name: {element}\n    class: org.example.{element}\n"
    )
}

#[tokio::test]
async fn test_namespaces_sharing_a_file_stem_are_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let mappings = temp_dir.path().join("mappings");
    fs::create_dir_all(&mappings).unwrap();
    fs::write(
        mappings.join("a.yaml"),
        single_element_mapping("http://example.org/bar", "alpha"),
    )
    .unwrap();
    fs::write(
        mappings.join("b.yaml"),
        single_element_mapping("https://example.org/bar", "beta"),
    )
    .unwrap();

    let mut config = Config::default();
    config.sources.push(Source::MappingDirectory(MappingDirectorySource {
        name: "bar".to_string(),
        path: mappings,
        include_patterns: Vec::new(),
        exclude_patterns: Vec::new(),
    }));
    config.output.base_path = temp_dir.path().join("out");
    config.generators = vec![GeneratorSpec::new(GeneratorKind::Html)];
    let out = config.output.base_path.clone();

    let err = XmlnsGen::new(config).unwrap().generate().await.unwrap_err();

    match err.downcast_ref::<XmlnsGenError>() {
        Some(XmlnsGenError::DestinationConflict {
            path,
            first,
            second,
        }) => {
            assert_eq!(path, &out.join("example.org_bar.html"));
            assert_eq!(first, "http://example.org/bar");
            assert_eq!(second, "https://example.org/bar");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    // Nothing is written when destinations clash
    assert!(!out.join("example.org_bar.html").exists());
}

#[tokio::test]
async fn test_flat_file_stem_shared_by_namespaces_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = directory_config(temp_dir.path());
    config.generators = vec![GeneratorSpec {
        kind: GeneratorKind::Xsd,
        file_stem: Some("schema".to_string()),
        enabled: true,
    }];
    let out = config.output.base_path.clone();

    let app = XmlnsGen::new(config).unwrap();
    let mappings = app.load_sources().unwrap();
    let err = app.check_destinations(&mappings).unwrap_err();
    assert!(matches!(err, XmlnsGenError::DestinationConflict { .. }));
    assert!(err.to_string().contains("schema.xsd"));

    assert!(app.generate().await.is_err());
    assert!(!out.join("schema.xsd").exists());
}
