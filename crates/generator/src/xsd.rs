//! XML Schema backend

use html_escape::encode_single_quoted_attribute;

use xmlns_gen_plugin::{LineRenderer, TextArtifactGenerator};
use xmlns_mapping::{AttributeMapping, Classification, ElementMapping, NamespaceMapping};

use crate::crossref::{partition_attributes, text_type_name};
use crate::AUTOGENERATED_NOTE;

/// XSD describing every element of a namespace
pub type XsdGenerator = TextArtifactGenerator<XsdSchema>;

#[derive(Debug, Clone, Copy, Default)]
pub struct XsdSchema;

impl LineRenderer for XsdSchema {
    fn name(&self) -> &str {
        "XSD schema"
    }

    fn extension(&self) -> &str {
        "xsd"
    }

    fn render(&self, namespace: &NamespaceMapping) -> Vec<String> {
        let uri = encode_single_quoted_attribute(namespace.namespace_uri());

        let mut lines = vec![
            "<?xml version='1.0'?>".to_string(),
            format!("<!-- {AUTOGENERATED_NOTE} -->"),
            String::new(),
            "<xs:schema elementFormDefault='qualified'".to_string(),
            format!("           targetNamespace='{uri}'"),
            "           xmlns:xs='http://www.w3.org/2001/XMLSchema'".to_string(),
            format!("           xmlns:tns='{uri}'>"),
            String::new(),
        ];

        for element in namespace.elements() {
            lines.extend(element_declaration(namespace, element));
        }

        lines.push("</xs:schema>".to_string());
        lines
    }
}

fn element_declaration(namespace: &NamespaceMapping, element: &ElementMapping) -> Vec<String> {
    let mut lines = vec![
        format!("  <!-- element for type: {} -->", element.class_name()),
        format!("  <xs:element name='{}'>", attr(element.element_name())),
    ];
    lines.extend(documentation(element.description(), "    "));
    lines.push("    <xs:complexType>".to_string());

    let (simple, complex) = partition_attributes(namespace, element);

    if !complex.is_empty() {
        lines.push("      <xs:sequence>".to_string());
        for (attribute, classification) in &complex {
            lines.extend(child_element(namespace, attribute, *classification));
        }
        lines.push("      </xs:sequence>".to_string());
    }

    for attribute in &simple {
        lines.extend(attribute_declaration(attribute, text_type_name(attribute)));
    }
    // A single nested value may also be given as a reference to a bean defined elsewhere.
    for (attribute, classification) in &complex {
        if *classification == Classification::ComplexSingle {
            lines.extend(attribute_declaration(attribute, "xs:string"));
        }
    }

    if element.attribute("id").is_none() {
        lines.push("      <xs:attribute name='id' type='xs:ID'/>".to_string());
    }
    lines.push("      <xs:anyAttribute namespace='##other' processContents='lax'/>".to_string());
    lines.push("    </xs:complexType>".to_string());
    lines.push("  </xs:element>".to_string());
    lines.push(String::new());
    lines
}

fn child_element(
    namespace: &NamespaceMapping,
    attribute: &AttributeMapping,
    classification: Classification,
) -> Vec<String> {
    let max_occurs = if classification.is_collection() {
        "unbounded"
    } else {
        "1"
    };

    let mut lines = vec![format!(
        "        <xs:element name='{}' minOccurs='0' maxOccurs='1'>",
        attr(attribute.attribute_name())
    )];
    lines.extend(documentation(attribute.description(), "          "));
    lines.push("          <xs:complexType>".to_string());
    lines.push(format!(
        "            <xs:choice minOccurs='0' maxOccurs='{max_occurs}'>"
    ));
    for candidate in namespace.find_implementations_of(attribute.ty()) {
        lines.push(format!(
            "              <xs:element ref='tns:{}'/>",
            attr(candidate.element_name())
        ));
    }
    lines.push("              <xs:any namespace='##other'/>".to_string());
    lines.push("            </xs:choice>".to_string());
    lines.push("          </xs:complexType>".to_string());
    lines.push("        </xs:element>".to_string());
    lines
}

fn attribute_declaration(attribute: &AttributeMapping, xsd_type: &str) -> Vec<String> {
    let name = attr(attribute.attribute_name());
    if attribute.description().is_empty() {
        return vec![format!("      <xs:attribute name='{name}' type='{xsd_type}'/>")];
    }

    let mut lines = vec![format!("      <xs:attribute name='{name}' type='{xsd_type}'>")];
    lines.extend(documentation(attribute.description(), "        "));
    lines.push("      </xs:attribute>".to_string());
    lines
}

fn documentation(description: &str, indent: &str) -> Vec<String> {
    if description.is_empty() {
        return Vec::new();
    }
    vec![
        format!("{indent}<xs:annotation>"),
        format!("{indent}  <xs:documentation><![CDATA["),
        format!("{indent}    {}", cdata(description)),
        format!("{indent}  ]]></xs:documentation>"),
        format!("{indent}</xs:annotation>"),
    ]
}

fn attr(value: &str) -> String {
    encode_single_quoted_attribute(value).into_owned()
}

/// CDATA sections cannot contain their own terminator
fn cdata(text: &str) -> String {
    text.replace("]]>", "]]]]><![CDATA[>")
}
