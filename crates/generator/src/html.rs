//! HTML documentation backend

use html_escape::{encode_single_quoted_attribute, encode_text};

use xmlns_gen_plugin::{LineRenderer, TextArtifactGenerator};
use xmlns_mapping::{ElementMapping, NamespaceMapping};

use crate::crossref::{
    format_candidates, partition_attributes, text_type_name, GENERIC_BEAN_PLACEHOLDER,
};
use crate::AUTOGENERATED_NOTE;

/// HTML reference documentation for a namespace
pub type DocumentationGenerator = TextArtifactGenerator<HtmlDocumentation>;

/// Renders the root element, an element summary and per-element detail tables
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlDocumentation;

impl LineRenderer for HtmlDocumentation {
    fn name(&self) -> &str {
        "HTML documentation"
    }

    fn extension(&self) -> &str {
        "html"
    }

    fn render(&self, namespace: &NamespaceMapping) -> Vec<String> {
        let uri = encode_text(namespace.namespace_uri());

        let mut lines = vec![
            format!("<!-- {AUTOGENERATED_NOTE} -->"),
            "<html>".to_string(),
            "<head>".to_string(),
            format!("<title>Schema for namespace: {uri}</title>"),
            "<link rel='stylesheet' href='style.css' type='text/css'>".to_string(),
            "</head>".to_string(),
            String::new(),
            "<body>".to_string(),
            String::new(),
        ];

        lines.extend(root_element_section(namespace));
        lines.extend(elements_summary(namespace));
        lines.push(String::new());
        lines.push(String::new());
        lines.extend(elements_detail(namespace));

        lines.push(String::new());
        lines.push("</body>".to_string());
        lines.push("</html>".to_string());
        lines
    }
}

const SUMMARY_HEADER: &str = "  <tr><th>Element</th><th>Description</th><th>Class</th></tr>";

fn root_element_section(namespace: &NamespaceMapping) -> Vec<String> {
    let Some(root) = namespace.root_element() else {
        return Vec::new();
    };

    vec![
        "<h1>Root Element</h1>".to_string(),
        "<table>".to_string(),
        SUMMARY_HEADER.to_string(),
        element_summary_row(root),
        "</table>".to_string(),
        String::new(),
    ]
}

fn elements_summary(namespace: &NamespaceMapping) -> Vec<String> {
    let mut lines = vec![
        "<h1>Element Summary</h1>".to_string(),
        "<table>".to_string(),
        SUMMARY_HEADER.to_string(),
    ];
    lines.extend(namespace.elements().map(element_summary_row));
    lines.push("</table>".to_string());
    lines
}

fn element_summary_row(element: &ElementMapping) -> String {
    format!(
        "  <tr><td>{}</td><td>{}</td><td>{}</td></tr>",
        element_link(element),
        encode_text(element.description()),
        encode_text(element.class_name()),
    )
}

fn element_link(element: &ElementMapping) -> String {
    format!(
        "<a href='#{}'>{}</a>",
        encode_single_quoted_attribute(element.element_name()),
        encode_text(element.element_name())
    )
}

fn elements_detail(namespace: &NamespaceMapping) -> Vec<String> {
    let mut lines = vec!["<h1>Element Detail</h1>".to_string()];
    for element in namespace.elements() {
        lines.extend(element_detail(namespace, element));
    }
    lines
}

fn element_detail(namespace: &NamespaceMapping, element: &ElementMapping) -> Vec<String> {
    let name = element.element_name();
    let mut lines = vec![format!(
        "<h2>Element: <a name='{}'>{}</a></h2>",
        encode_single_quoted_attribute(name),
        encode_text(name)
    )];

    let (simple, complex) = partition_attributes(namespace, element);

    if !simple.is_empty() {
        lines.push("<table>".to_string());
        lines.push("  <tr><th>Attribute</th><th>Type</th><th>Description</th></tr>".to_string());
        for attribute in simple {
            lines.push(format!(
                "  <tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                encode_text(attribute.attribute_name()),
                text_type_name(attribute),
                encode_text(attribute.description()),
            ));
        }
        lines.push("</table>".to_string());
    }

    if !complex.is_empty() {
        let placeholder = encode_text(GENERIC_BEAN_PLACEHOLDER);
        lines.push("<table>".to_string());
        lines.push("  <tr><th>Element</th><th>Type</th><th>Description</th></tr>".to_string());
        for (attribute, _) in complex {
            lines.push(format!(
                "  <tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                encode_text(attribute.attribute_name()),
                format_candidates(namespace, attribute.ty(), &placeholder, element_link),
                encode_text(attribute.description()),
            ));
        }
        lines.push("</table>".to_string());
    }

    lines
}
