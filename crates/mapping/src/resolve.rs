//! Attribute classification and polymorphic implementation discovery

use serde::Serialize;
use std::fmt;

use crate::attribute::AttributeMapping;
use crate::element::ElementMapping;
use crate::namespace::NamespaceMapping;
use crate::types::Type;

/// How an attribute is represented in XML
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Plain text attribute value
    Simple,

    /// A single nested element
    ComplexSingle,

    /// Repeated nested elements
    ComplexCollection,
}

impl Classification {
    pub fn is_simple(self) -> bool {
        self == Classification::Simple
    }

    pub fn is_collection(self) -> bool {
        self == Classification::ComplexCollection
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Classification::Simple => "simple",
            Classification::ComplexSingle => "complex",
            Classification::ComplexCollection => "complex collection",
        };
        f.write_str(label)
    }
}

/// Decide how `attribute` is represented.
///
/// A registered text converter always wins. Collections are always complex, even when
/// their nested type is a simple leaf such as a list of strings; callers that care must
/// inspect the nested type themselves.
pub fn classify(attribute: &AttributeMapping, namespace: &NamespaceMapping) -> Classification {
    if attribute.has_custom_text_converter() {
        return Classification::Simple;
    }

    let ty = attribute.ty();
    if ty.is_collection() {
        Classification::ComplexCollection
    } else if namespace.is_simple_type(ty) {
        Classification::Simple
    } else {
        Classification::ComplexSingle
    }
}

/// Every element whose implementation class can be used where `ty` is declared.
///
/// Collections resolve against their nested type. Results follow the namespace's
/// declaration order. An empty result is normal: nothing in the namespace implements the
/// type, and renderers fall back to a generic bean.
pub fn find_implementations_of<'a>(
    namespace: &'a NamespaceMapping,
    ty: &Type,
) -> Vec<&'a ElementMapping> {
    let target = ty.element_type().class_name();
    let assignability = namespace.assignability();

    namespace
        .elements()
        .filter(|element| assignability.is_assignable(element.class_name(), target))
        .collect()
}

/// Distinct complex target types referenced by any attribute, in first-reference order
pub fn referenced_complex_types(namespace: &NamespaceMapping) -> Vec<&Type> {
    let mut types: Vec<&Type> = Vec::new();
    for element in namespace.elements() {
        for attribute in element.attributes() {
            if classify(attribute, namespace).is_simple() {
                continue;
            }
            let target = attribute.ty().element_type();
            if !types.iter().any(|seen| seen.class_name() == target.class_name()) {
                types.push(target);
            }
        }
    }
    types
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignability::TypeHierarchy;
    use rstest::rstest;

    const ITEM: &str = "org.example.Item";

    fn foo_namespace() -> NamespaceMapping {
        let bean1 = ElementMapping::new(
            "bean1",
            "org.example.Bean1",
            vec![AttributeMapping::new("name", Type::new("java.lang.String"))],
        )
        .unwrap();
        let bean2 = ElementMapping::new(
            "bean2",
            "org.example.Bean2",
            vec![
                AttributeMapping::new(
                    "items",
                    Type::collection_of("java.util.List", Type::new(ITEM)),
                ),
                AttributeMapping::new("helper", Type::new("org.example.Unimplemented")),
            ],
        )
        .unwrap();

        NamespaceMapping::builder("foo")
            .element(bean1)
            .element(bean2)
            .assignability(TypeHierarchy::new().with_supertype("org.example.Bean1", ITEM))
            .build()
            .unwrap()
    }

    #[rstest]
    #[case(Type::new("java.lang.String"), None, Classification::Simple)]
    #[case(Type::new("int"), None, Classification::Simple)]
    #[case(Type::new(ITEM), None, Classification::ComplexSingle)]
    #[case(Type::new(ITEM), Some("org.example.ItemEditor"), Classification::Simple)]
    #[case(
        Type::collection_of("java.util.List", Type::new(ITEM)),
        None,
        Classification::ComplexCollection
    )]
    #[case(
        Type::collection_of("java.util.List", Type::new(ITEM)),
        Some("org.example.ListEditor"),
        Classification::Simple
    )]
    #[case(
        Type::collection_of("java.util.List", Type::new("java.lang.String")),
        None,
        Classification::ComplexCollection
    )]
    fn test_classify(
        #[case] ty: Type,
        #[case] converter: Option<&str>,
        #[case] expected: Classification,
    ) {
        let namespace = foo_namespace();
        let mut attribute = AttributeMapping::new("value", ty);
        if let Some(converter) = converter {
            attribute = attribute.with_text_converter(converter);
        }
        assert_eq!(classify(&attribute, &namespace), expected);
    }

    #[test]
    fn test_namespace_registered_simple_type() {
        let namespace = NamespaceMapping::builder("foo")
            .simple_type(ITEM)
            .build()
            .unwrap();
        let attribute = AttributeMapping::new("item", Type::new(ITEM));
        assert_eq!(namespace.classify(&attribute), Classification::Simple);
    }

    #[test]
    fn test_collection_resolves_against_nested_type() {
        let namespace = foo_namespace();
        let items = namespace.element("bean2").unwrap().attribute("items").unwrap();

        assert_eq!(namespace.classify(items), Classification::ComplexCollection);
        let names: Vec<_> = namespace
            .find_implementations_of(items.ty())
            .iter()
            .map(|e| e.element_name())
            .collect();
        assert_eq!(names, vec!["bean1"]);
    }

    #[test]
    fn test_unimplemented_type_has_no_implementations() {
        let namespace = foo_namespace();
        let helper = namespace.element("bean2").unwrap().attribute("helper").unwrap();

        assert_eq!(namespace.classify(helper), Classification::ComplexSingle);
        assert!(namespace.find_implementations_of(helper.ty()).is_empty());
        assert!(namespace
            .find_implementations_of(&Type::new("java.lang.Object"))
            .is_empty());
    }

    #[test]
    fn test_implementations_follow_declaration_order() {
        let service = "org.example.Service";
        let names = ["delta", "alpha", "charlie", "bravo"];
        let mut hierarchy = TypeHierarchy::new();
        let mut builder = NamespaceMapping::builder("http://example.org/ns");
        for (index, name) in names.iter().enumerate() {
            let class_name = format!("org.example.{name}");
            // Every other element implements the service.
            if index % 2 == 0 {
                hierarchy.add_supertype(class_name.clone(), service);
            }
            builder = builder.element(ElementMapping::new(*name, class_name, vec![]).unwrap());
        }
        let namespace = builder.assignability(hierarchy).build().unwrap();

        let found: Vec<_> = namespace
            .find_implementations_of(&Type::new(service))
            .iter()
            .map(|e| e.element_name())
            .collect();
        assert_eq!(found, vec!["delta", "charlie"]);
    }

    #[test]
    fn test_matches_exactly_the_assignable_elements() {
        let namespace = foo_namespace();
        let oracle = namespace.assignability();
        for target in [ITEM, "org.example.Bean2", "org.example.Bean1", "java.lang.Object"] {
            let found = namespace.find_implementations_of(&Type::new(target));
            for element in namespace.elements() {
                let expected = oracle.is_assignable(element.class_name(), target);
                let included = found.iter().any(|e| e.element_name() == element.element_name());
                assert_eq!(expected, included, "{} for {}", element.element_name(), target);
            }
        }
    }

    #[test]
    fn test_referenced_complex_types() {
        let namespace = foo_namespace();
        let types: Vec<_> = referenced_complex_types(&namespace)
            .iter()
            .map(|t| t.class_name())
            .collect();
        assert_eq!(types, vec![ITEM, "org.example.Unimplemented"]);
    }
}
