//! Cross-references from complex attributes to candidate elements

use tracing::debug;
use xmlns_mapping::xsd::{xsd_type_name, DEFAULT_XSD_TYPE};
use xmlns_mapping::{AttributeMapping, Classification, ElementMapping, NamespaceMapping, Type};

/// Shown in place of a candidate list when nothing in the namespace implements a type
pub const GENERIC_BEAN_PLACEHOLDER: &str = "<spring:bean/>";

/// Render the candidate elements for a complex type as `A | B | C`.
///
/// Collections are wrapped as `(...)*`. When there are no candidates, `placeholder`
/// stands in for the list. `link` formats each candidate.
pub fn format_candidates<F>(
    namespace: &NamespaceMapping,
    ty: &Type,
    placeholder: &str,
    link: F,
) -> String
where
    F: Fn(&ElementMapping) -> String,
{
    let candidates = namespace.find_implementations_of(ty);

    let body = if candidates.is_empty() {
        debug!(
            "No implementations of {} in namespace {}",
            ty.element_type().class_name(),
            namespace.namespace_uri()
        );
        placeholder.to_string()
    } else {
        candidates
            .into_iter()
            .map(link)
            .collect::<Vec<_>>()
            .join(" | ")
    };

    if ty.is_collection() {
        format!("({body})*")
    } else {
        body
    }
}

/// Candidate list using bare element names
pub fn plain_candidates(namespace: &NamespaceMapping, ty: &Type) -> String {
    format_candidates(namespace, ty, GENERIC_BEAN_PLACEHOLDER, |element| {
        element.element_name().to_string()
    })
}

/// XSD type name for an attribute written as text.
///
/// Attributes with a text converter are always plain strings.
pub fn text_type_name(attribute: &AttributeMapping) -> &'static str {
    if attribute.has_custom_text_converter() {
        DEFAULT_XSD_TYPE
    } else {
        xsd_type_name(attribute.ty())
    }
}

/// An element's attributes split into simple ones and complex ones, each in
/// declaration order
pub fn partition_attributes<'a>(
    namespace: &NamespaceMapping,
    element: &'a ElementMapping,
) -> (Vec<&'a AttributeMapping>, Vec<(&'a AttributeMapping, Classification)>) {
    let mut simple = Vec::new();
    let mut complex = Vec::new();
    for attribute in element.attributes() {
        match namespace.classify(attribute) {
            Classification::Simple => simple.push(attribute),
            classification => complex.push((attribute, classification)),
        }
    }
    (simple, complex)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use xmlns_mapping::TypeHierarchy;

    pub(crate) const ITEM: &str = "org.example.Item";

    /// bean1 implements Item; bean2 holds a list of Items and an unimplemented helper
    pub(crate) fn foo_namespace(with_root: bool) -> NamespaceMapping {
        let bean1 = ElementMapping::new(
            "bean1",
            "org.example.Bean1",
            vec![AttributeMapping::new("name", Type::new("java.lang.String"))
                .with_description("The bean name")],
        )
        .unwrap()
        .with_description("The first bean");

        let bean2 = ElementMapping::new(
            "bean2",
            "org.example.Bean2",
            vec![
                AttributeMapping::new(
                    "items",
                    Type::collection_of("java.util.List", Type::new(ITEM)),
                )
                .with_description("Contained items"),
                AttributeMapping::new("helper", Type::new("org.example.Unimplemented")),
                AttributeMapping::new("timeout", Type::new("org.example.Duration"))
                    .with_text_converter("org.example.DurationEditor")
                    .with_property_name("timeoutDuration"),
                AttributeMapping::new("size", Type::new("int")),
            ],
        )
        .unwrap()
        .with_description("The second bean");

        let mut builder = NamespaceMapping::builder("foo")
            .element(bean1)
            .element(bean2)
            .assignability(TypeHierarchy::new().with_supertype("org.example.Bean1", ITEM));
        if with_root {
            builder = builder.root_element("bean2");
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_collection_candidates() {
        let namespace = foo_namespace(false);
        let items = namespace.element("bean2").unwrap().attribute("items").unwrap();
        assert_eq!(plain_candidates(&namespace, items.ty()), "(bean1)*");
    }

    #[test]
    fn test_single_candidates_and_alternation() {
        let namespace = NamespaceMapping::builder("http://example.org/ns")
            .element(ElementMapping::new("a", "org.example.A", vec![]).unwrap())
            .element(ElementMapping::new("b", "org.example.B", vec![]).unwrap())
            .element(ElementMapping::new("c", "org.example.C", vec![]).unwrap())
            .assignability(
                TypeHierarchy::new()
                    .with_supertype("org.example.A", ITEM)
                    .with_supertype("org.example.C", ITEM),
            )
            .build()
            .unwrap();

        assert_eq!(plain_candidates(&namespace, &Type::new(ITEM)), "a | c");
        assert_eq!(
            plain_candidates(&namespace, &Type::collection_of("java.util.Set", Type::new(ITEM))),
            "(a | c)*"
        );
    }

    #[test]
    fn test_placeholder_when_no_candidates() {
        let namespace = foo_namespace(false);
        let helper = namespace.element("bean2").unwrap().attribute("helper").unwrap();
        assert_eq!(plain_candidates(&namespace, helper.ty()), GENERIC_BEAN_PLACEHOLDER);
        assert_eq!(
            plain_candidates(
                &namespace,
                &Type::collection_of("java.util.List", Type::new("java.lang.Object"))
            ),
            "(<spring:bean/>)*"
        );
    }

    #[test]
    fn test_text_type_name() {
        let namespace = foo_namespace(false);
        let bean2 = namespace.element("bean2").unwrap();
        assert_eq!(text_type_name(bean2.attribute("timeout").unwrap()), "xs:string");
        assert_eq!(text_type_name(bean2.attribute("size").unwrap()), "xs:integer");
    }

    #[test]
    fn test_partition_attributes() {
        let namespace = foo_namespace(false);
        let bean2 = namespace.element("bean2").unwrap();
        let (simple, complex) = partition_attributes(&namespace, bean2);

        let simple: Vec<_> = simple.iter().map(|a| a.attribute_name()).collect();
        assert_eq!(simple, vec!["timeout", "size"]);

        let complex: Vec<_> = complex
            .iter()
            .map(|(a, c)| (a.attribute_name(), *c))
            .collect();
        assert_eq!(
            complex,
            vec![
                ("items", Classification::ComplexCollection),
                ("helper", Classification::ComplexSingle),
            ]
        );
    }
}
