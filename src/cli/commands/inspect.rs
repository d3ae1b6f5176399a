//! Inspect command implementation

use anyhow::{anyhow, Result};
use clap::{ArgMatches, Command};
use std::path::PathBuf;
use xmlns_generator::crossref::plain_candidates;
use xmlns_mapping::{ElementMapping, MappingLoader, NamespaceMapping, Type};

pub fn command() -> Command {
    Command::new("inspect")
        .about("Show how each attribute of a mapping document is classified")
        .arg(
            clap::Arg::new("mapping")
                .help("Mapping document to inspect")
                .value_name("MAPPING")
                .required(true),
        )
        .arg(
            clap::Arg::new("element")
                .short('e')
                .long("element")
                .help("Only show this element")
                .value_name("NAME"),
        )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<String>("mapping")
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("Missing mapping document"))?;
    let path = crate::utils::expand_path(&path)?;

    let namespace = MappingLoader::new().load_file(&path)?;

    let elements: Vec<&ElementMapping> = match matches.get_one::<String>("element") {
        Some(name) => vec![namespace.element(name).ok_or_else(|| {
            anyhow!(
                "Element {} is not defined in namespace {}",
                name,
                namespace.namespace_uri()
            )
        })?],
        None => namespace.elements().collect(),
    };

    for line in describe_namespace(&namespace, &elements) {
        println!("{line}");
    }

    Ok(())
}

/// Lines describing the given elements of a namespace
pub fn describe_namespace(
    namespace: &NamespaceMapping,
    elements: &[&ElementMapping],
) -> Vec<String> {
    let mut lines = vec![format!(
        "Namespace: {} ({} elements{})",
        namespace.namespace_uri(),
        namespace.element_count(),
        namespace
            .root_element()
            .map(|root| format!(", root {}", root.element_name()))
            .unwrap_or_default()
    )];

    for element in elements {
        lines.push(String::new());
        lines.push(format!("{} ({})", element.element_name(), element.class_name()));
        for attribute in element.attributes() {
            let classification = namespace.classify(attribute);
            let mut line = format!(
                "  {}: {} -> {}",
                attribute.attribute_name(),
                type_label(attribute.ty()),
                classification
            );
            if let Some(converter) = attribute.text_converter() {
                line.push_str(&format!(" (converter {converter})"));
            } else if !classification.is_simple() {
                line.push_str(&format!(": {}", plain_candidates(namespace, attribute.ty())));
            }
            lines.push(line);
        }
    }

    lines
}

fn type_label(ty: &Type) -> String {
    match ty.nested_type() {
        Some(nested) => format!("{}<{}>", ty.class_name(), type_label(nested)),
        None => ty.class_name().to_string(),
    }
}
