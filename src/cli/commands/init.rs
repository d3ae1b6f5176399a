//! Init command implementation

use crate::config::{MappingFileSource, Source};
use crate::Config;
use anyhow::{anyhow, Result};
use clap::{ArgMatches, Command};
use std::path::{Path, PathBuf};
use tracing::info;

/// Sample mapping document written by `init --example`
pub const EXAMPLE_MAPPING: &str = r#"namespace: http://example.org/beans
root: container
types:
  org.example.SimpleService: [org.example.Service]
elements:
  - name: container
    class: org.example.Container
    description: Holds the configured services
    attributes:
      - name: name
        type: java.lang.String
        description: Name of the container
      - name: services
        type:
          class: java.util.List
          collection: true
          nested: org.example.Service
        description: Services started by the container
      - name: timeout
        type: java.time.Duration
        converter: org.example.DurationEditor
        property: startupTimeout
        description: Time allowed for startup
  - name: simple-service
    class: org.example.SimpleService
    description: A service with a single endpoint
    attributes:
      - name: endpoint
        type: java.lang.String
        description: Address the service listens on
      - name: port
        type: int
"#;

pub fn command() -> Command {
    Command::new("init")
        .about("Initialize a new configuration file")
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file path")
                .value_name("FILE")
                .default_value(".xmlns-gen.yaml"),
        )
        .arg(
            clap::Arg::new("example")
                .short('e')
                .long("example")
                .help("Create example configuration and mapping document")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("force")
                .short('f')
                .long("force")
                .help("Overwrite existing files")
                .action(clap::ArgAction::SetTrue),
        )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let output_path = matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("Missing output path"))?;
    let example = matches.get_flag("example");
    let force = matches.get_flag("force");

    info!("Initializing configuration file: {:?}", output_path);

    init_config(&output_path, example, force)?;

    info!("Configuration file created: {:?}", output_path);

    if example {
        println!("Example configuration created with a sample mapping source.");
        println!("Run 'xmlns-gen generate' to produce the documentation.");
    } else {
        println!("Empty configuration file created.");
        println!("Add mapping sources to get started.");
    }

    Ok(())
}

/// Write the sample mapping document next to the configuration file
fn write_example_mapping(config_path: &Path, force: bool) -> Result<PathBuf> {
    let mapping_dir = config_directory(config_path).join("mappings");
    crate::utils::ensure_directory(&mapping_dir)?;

    let mapping_path = mapping_dir.join("example.yaml");
    if mapping_path.exists() && !force {
        return Err(anyhow!(
            "{} already exists, use --force to overwrite it",
            mapping_path.display()
        ));
    }
    std::fs::write(&mapping_path, EXAMPLE_MAPPING)?;
    Ok(mapping_path)
}

/// Write the configuration file, and with `example` the sample mapping document.
/// Paths in the example configuration are placed next to the configuration file.
pub fn init_config(output_path: &Path, example: bool, force: bool) -> Result<Config> {
    if output_path.exists() && !force {
        return Err(anyhow!(
            "{} already exists, use --force to overwrite it",
            output_path.display()
        ));
    }

    let config = if example {
        let mapping_path = write_example_mapping(output_path, force)?;
        println!("Example mapping document created: {}", mapping_path.display());
        create_example_config(output_path, mapping_path)
    } else {
        Config::default()
    };

    config.save_to_file(output_path)?;
    Ok(config)
}

fn create_example_config(config_path: &Path, mapping_path: PathBuf) -> Config {
    let mut config = Config::default();

    config.sources.push(Source::MappingFile(MappingFileSource {
        name: "example-beans".to_string(),
        path: mapping_path,
    }));
    config.output.base_path = config_directory(config_path).join("generated");

    config
}

fn config_directory(config_path: &Path) -> &Path {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
