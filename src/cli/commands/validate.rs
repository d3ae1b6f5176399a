//! Validate command implementation

use crate::cli::utils;
use anyhow::Result;
use clap::{ArgMatches, Command};
use tracing::info;

pub fn command() -> Command {
    Command::new("validate")
        .about("Validate the configuration file and every mapping document it references")
        .arg(utils::config_arg())
        .arg(
            clap::Arg::new("config-only")
                .long("config-only")
                .help("Only validate the configuration file")
                .action(clap::ArgAction::SetTrue),
        )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    info!("Validating configuration file");

    let config = utils::load_config(matches)?;

    println!("Configuration file is valid!");
    println!("Version: {}", config.version);
    println!("Sources: {}", config.sources.len());
    println!("Output path: {:?}", config.output.base_path);
    println!(
        "Generators: {}",
        config
            .enabled_generators()
            .map(|g| g.kind.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    for source in &config.sources {
        println!("  - {} ({})", source.name(), source.type_label());
    }

    if matches.get_flag("config-only") {
        return Ok(());
    }

    let app = utils::create_app(config)?;
    let mappings = app.load_sources()?;

    println!("Mapping documents are valid!");
    for mapping in &mappings {
        let namespace = &mapping.namespace;
        println!(
            "  - {}: {} elements{} ({})",
            namespace.namespace_uri(),
            namespace.element_count(),
            namespace
                .root_element()
                .map(|root| format!(", root {}", root.element_name()))
                .unwrap_or_default(),
            mapping.source_path.display()
        );
    }

    Ok(())
}
