//! Element mappings

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::attribute::AttributeMapping;
use crate::error::ModelViolation;

/// One declarable element of a namespace and the class that backs it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ElementRepr", into = "ElementRepr")]
pub struct ElementMapping {
    element_name: String,
    class_name: String,
    description: String,
    attributes: IndexMap<String, AttributeMapping>,
}

impl ElementMapping {
    /// Create an element, rejecting duplicate attribute names.
    ///
    /// Attributes keep the order they are given in; that order is the documentation order.
    pub fn new(
        element_name: impl Into<String>,
        class_name: impl Into<String>,
        attributes: impl IntoIterator<Item = AttributeMapping>,
    ) -> Result<Self, ModelViolation> {
        let element_name = element_name.into();
        let class_name = class_name.into();

        if element_name.is_empty() {
            return Err(ModelViolation::EmptyName("Element"));
        }
        if class_name.is_empty() {
            return Err(ModelViolation::EmptyName("Implementation class"));
        }

        let mut indexed = IndexMap::new();
        for attribute in attributes {
            if attribute.attribute_name().is_empty() {
                return Err(ModelViolation::EmptyName("Attribute"));
            }
            let name = attribute.attribute_name().to_string();
            if indexed.contains_key(&name) {
                return Err(ModelViolation::DuplicateAttribute {
                    element: element_name,
                    attribute: name,
                });
            }
            indexed.insert(name, attribute);
        }

        Ok(Self {
            element_name,
            class_name,
            description: String::new(),
            attributes: indexed,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn element_name(&self) -> &str {
        &self.element_name
    }

    /// Concrete implementation class backing this element
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Attributes in declaration order
    pub fn attributes(&self) -> impl Iterator<Item = &AttributeMapping> {
        self.attributes.values()
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeMapping> {
        self.attributes.get(name)
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }
}

#[derive(Serialize, Deserialize)]
struct ElementRepr {
    name: String,
    class: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    attributes: Vec<AttributeMapping>,
}

impl TryFrom<ElementRepr> for ElementMapping {
    type Error = ModelViolation;

    fn try_from(repr: ElementRepr) -> Result<Self, Self::Error> {
        Ok(ElementMapping::new(repr.name, repr.class, repr.attributes)?
            .with_description(repr.description))
    }
}

impl From<ElementMapping> for ElementRepr {
    fn from(element: ElementMapping) -> Self {
        Self {
            name: element.element_name,
            class: element.class_name,
            description: element.description,
            attributes: element.attributes.into_values().collect(),
        }
    }
}
