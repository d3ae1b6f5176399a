//! XML metadata bindings backend
//!
//! Writes a properties file binding element names to implementation classes, the
//! form a namespace handler reads at runtime to instantiate elements.

use xmlns_gen_plugin::{LineRenderer, TextArtifactGenerator};
use xmlns_mapping::NamespaceMapping;

use crate::AUTOGENERATED_NOTE;

pub type XmlMetadataGenerator = TextArtifactGenerator<XmlMetadata>;

#[derive(Debug, Clone, Copy, Default)]
pub struct XmlMetadata;

impl LineRenderer for XmlMetadata {
    fn name(&self) -> &str {
        "XML metadata"
    }

    fn extension(&self) -> &str {
        "properties"
    }

    fn render(&self, namespace: &NamespaceMapping) -> Vec<String> {
        let mut lines = vec![
            format!("# {AUTOGENERATED_NOTE}"),
            format!("# namespace: {}", namespace.namespace_uri()),
            String::new(),
        ];

        if let Some(root) = namespace.root_element() {
            lines.push(property("@root", root.element_name()));
            lines.push(String::new());
        }

        lines.push("# element bindings".to_string());
        lines.extend(
            namespace
                .elements()
                .map(|element| property(element.element_name(), element.class_name())),
        );

        let mut aliases = Vec::new();
        let mut converters = Vec::new();
        for element in namespace.elements() {
            for attribute in element.attributes() {
                if attribute.is_aliased() {
                    aliases.push(property(
                        &format!("{}.alias.{}", element.class_name(), attribute.attribute_name()),
                        attribute.property_name(),
                    ));
                }
                if let Some(converter) = attribute.text_converter() {
                    converters.push(property(
                        &format!(
                            "{}.{}.converter",
                            element.class_name(),
                            attribute.property_name()
                        ),
                        converter,
                    ));
                }
            }
        }

        if !aliases.is_empty() {
            lines.push(String::new());
            lines.push("# property aliases".to_string());
            lines.extend(aliases);
        }
        if !converters.is_empty() {
            lines.push(String::new());
            lines.push("# text converters".to_string());
            lines.extend(converters);
        }

        lines
    }
}

fn property(key: &str, value: &str) -> String {
    format!("{} = {}", escape_key(key), escape_value(value))
}

fn escape_key(key: &str) -> String {
    let mut escaped = String::with_capacity(key.len());
    for (index, c) in key.chars().enumerate() {
        match c {
            '\\' | ':' | '=' | ' ' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '#' | '!' if index == 0 => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

fn escape_value(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\");
    match escaped.strip_prefix(' ') {
        Some(rest) => format!("\\ {rest}"),
        None => escaped,
    }
}
