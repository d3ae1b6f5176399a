//! Generate command implementation

use crate::cli::utils;
use anyhow::{anyhow, Result};
use clap::{ArgMatches, Command};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

pub fn command() -> Command {
    Command::new("generate")
        .about("Generate artifacts from configured mapping sources")
        .arg(utils::config_arg())
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .help("Output directory")
                .value_name("DIR"),
        )
        .arg(
            clap::Arg::new("fail-fast")
                .long("fail-fast")
                .help("Stop on first error")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("parallel")
                .long("parallel")
                .help("Run the generators of each namespace concurrently")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("json")
                .long("json")
                .help("Print the generation report as JSON")
                .action(clap::ArgAction::SetTrue),
        )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    info!("Starting artifact generation");

    let mut config = utils::load_config(matches)?;

    // Override output path if specified
    if let Some(output_path) = matches.get_one::<String>("output") {
        config.output.base_path = PathBuf::from(output_path);
    }

    if matches.get_flag("fail-fast") {
        config.generation.fail_fast = true;
    }

    if matches.get_flag("parallel") {
        config.generation.parallel = true;
    }

    let app = utils::create_app(config)?;
    let result = app.generate().await?;

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Generation completed!");
        println!(
            "Namespaces processed: {} (from {} sources)",
            result.namespaces_processed, result.total_sources
        );
        println!(
            "Artifacts generated: {} ({} unchanged)",
            result.statistics.artifacts_generated, result.statistics.artifacts_unchanged
        );
        println!(
            "Processing time: {}",
            crate::utils::format_duration(Duration::from_millis(
                result.statistics.total_processing_time_ms
            ))
        );

        for run in &result.results {
            match (&run.artifact, &run.error) {
                (Some(artifact), _) => println!(
                    "  {} [{}]: {} ({})",
                    run.namespace_uri,
                    run.generator,
                    artifact.path.display(),
                    crate::utils::format_bytes(artifact.bytes as u64)
                ),
                (None, Some(error)) => eprintln!(
                    "  {} [{}]: Error: {}",
                    run.namespace_uri, run.generator, error
                ),
                (None, None) => {}
            }
        }
    }

    if result.statistics.error_count > 0 {
        return Err(anyhow!(
            "{} generator run(s) failed",
            result.statistics.error_count
        ));
    }

    Ok(())
}
