//! Info command implementation

use anyhow::Result;
use clap::{ArgMatches, Command};

use crate::plugin::PluginManager;

pub fn command() -> Command {
    Command::new("info").about("Show tool information").arg(
        clap::Arg::new("detailed")
            .short('d')
            .long("detailed")
            .help("Show detailed information")
            .action(clap::ArgAction::SetTrue),
    )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let detailed = matches.get_flag("detailed");

    println!("xmlns-gen - XML namespace mapping generator");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));

    let manager = PluginManager::with_builtin_factories();
    println!(
        "Generators: {}",
        manager
            .supported_kinds()
            .iter()
            .map(|kind| kind.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    if detailed {
        println!("\nDetailed Information:");
        println!("  - YAML and JSON mapping documents");
        println!("  - Polymorphic implementation lookup through declared type hierarchies");
        println!("  - HTML and Confluence wiki reference documentation");
        println!("  - XML Schema generation");
        println!("  - Element-to-class binding properties");
        println!("  - Atomic, idempotent artifact writes");
        println!("  - Optional concurrent generation per namespace");
    }

    Ok(())
}
