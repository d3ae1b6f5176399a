//! Confluence wiki documentation backend

use xmlns_gen_plugin::{LineRenderer, TextArtifactGenerator};
use xmlns_mapping::resolve::referenced_complex_types;
use xmlns_mapping::{Classification, ElementMapping, NamespaceMapping};

use crate::crossref::{format_candidates, text_type_name, GENERIC_BEAN_PLACEHOLDER};

/// Wiki-markup reference documentation for a namespace
pub type WikiDocumentationGenerator = TextArtifactGenerator<WikiDocumentation>;

#[derive(Debug, Clone, Copy, Default)]
pub struct WikiDocumentation;

impl LineRenderer for WikiDocumentation {
    fn name(&self) -> &str {
        "wiki documentation"
    }

    fn extension(&self) -> &str {
        "wiki"
    }

    fn render(&self, namespace: &NamespaceMapping) -> Vec<String> {
        let mut lines = vec![
            format!("h1. Schema for namespace: {}", namespace.namespace_uri()),
            String::new(),
        ];
        lines.extend(root_element_section(namespace));
        lines.extend(elements_summary(namespace));
        lines.extend(elements_by_type(namespace));
        lines.extend(elements_detail(namespace));
        lines
    }
}

const SUMMARY_HEADER: &str = "|| Element || Description || Class ||";

fn root_element_section(namespace: &NamespaceMapping) -> Vec<String> {
    match namespace.root_element() {
        Some(root) => vec![
            "h3. Root Element".to_string(),
            SUMMARY_HEADER.to_string(),
            summary_row(root),
            String::new(),
        ],
        None => Vec::new(),
    }
}

fn elements_summary(namespace: &NamespaceMapping) -> Vec<String> {
    let mut lines = vec!["h3. Element Summary".to_string(), SUMMARY_HEADER.to_string()];
    lines.extend(namespace.elements().map(summary_row));
    lines.push(String::new());
    lines
}

fn summary_row(element: &ElementMapping) -> String {
    format!(
        "| {} | {} | {} |",
        element_link(element),
        cell(element.description()),
        element.class_name()
    )
}

fn elements_by_type(namespace: &NamespaceMapping) -> Vec<String> {
    let types = referenced_complex_types(namespace);
    if types.is_empty() {
        return Vec::new();
    }

    let mut lines = vec!["h3. Elements By Type".to_string()];
    for ty in types {
        let class_name = ty.class_name();
        lines.push(format!("{{anchor:{class_name}-types}}"));
        lines.push(format!(
            "h4. The _[{class_name}|#{class_name}-types]_ Type Implementations"
        ));

        let implementations = namespace.find_implementations_of(ty);
        if implementations.is_empty() {
            lines.push("| _No implementations found_ |".to_string());
        }
        for element in implementations {
            lines.push(format!(
                "| _{}_ | {} |",
                element_link(element),
                cell(element.description())
            ));
        }
        lines.push(String::new());
    }
    lines
}

fn elements_detail(namespace: &NamespaceMapping) -> Vec<String> {
    let mut lines = vec!["h3. Element Detail".to_string()];
    for element in namespace.elements() {
        lines.extend(element_detail(namespace, element));
    }
    lines
}

fn element_detail(namespace: &NamespaceMapping, element: &ElementMapping) -> Vec<String> {
    let name = element.element_name();
    let mut lines = vec![
        format!("{{anchor:{name}-element}}"),
        format!("h4. The _[{name}|#{name}-element]_ Element"),
    ];

    if !element.description().is_empty() {
        lines.push(format!("{{html}}{}{{html}}", element.description()));
    }

    if element.attribute_count() > 0 {
        let placeholder = format!("{{{{{GENERIC_BEAN_PLACEHOLDER}}}}}");
        lines.push("h5. Properties".to_string());
        lines.push("|| Property Name || Type || Description ||".to_string());
        for attribute in element.attributes() {
            let type_text = match namespace.classify(attribute) {
                Classification::Simple => format!("_{}_", text_type_name(attribute)),
                _ => format_candidates(namespace, attribute.ty(), &placeholder, |e| {
                    format!("_{}_", element_link(e))
                }),
            };
            lines.push(format!(
                "| {} | {} | {} |",
                attribute.attribute_name(),
                type_text,
                cell(attribute.description())
            ));
        }
    }

    lines.push(String::new());
    lines
}

fn element_link(element: &ElementMapping) -> String {
    let name = element.element_name();
    format!("[{name}|#{name}-element]")
}

/// Table cells cannot hold pipes or line breaks
fn cell(text: &str) -> String {
    let text = text.replace('|', "\\|").replace(['\r', '\n'], " ");
    if text.is_empty() {
        " ".to_string()
    } else {
        text
    }
}
