//! Namespace mappings

use indexmap::{IndexMap, IndexSet};
use std::sync::Arc;

use crate::assignability::{ExactClassMatch, IsAssignable};
use crate::attribute::AttributeMapping;
use crate::element::ElementMapping;
use crate::error::ModelViolation;
use crate::resolve::{self, Classification};
use crate::types::Type;

/// Every declarable element of one XML namespace.
///
/// Built once through [`NamespaceMappingBuilder`] and read-only afterwards, so a single
/// instance can be handed to any number of generators, concurrently if need be.
#[derive(Debug, Clone)]
pub struct NamespaceMapping {
    namespace_uri: String,
    elements: IndexMap<String, ElementMapping>,
    root_element: Option<String>,
    simple_types: IndexSet<String>,
    assignability: Arc<dyn IsAssignable>,
}

impl NamespaceMapping {
    pub fn builder(namespace_uri: impl Into<String>) -> NamespaceMappingBuilder {
        NamespaceMappingBuilder::new(namespace_uri)
    }

    pub fn namespace_uri(&self) -> &str {
        &self.namespace_uri
    }

    /// Elements in declaration order
    pub fn elements(&self) -> impl Iterator<Item = &ElementMapping> {
        self.elements.values()
    }

    pub fn element(&self, element_name: &str) -> Option<&ElementMapping> {
        self.elements.get(element_name)
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Designated entry-point element, if any
    pub fn root_element(&self) -> Option<&ElementMapping> {
        self.root_element
            .as_deref()
            .and_then(|name| self.elements.get(name))
    }

    /// Classes with a namespace-wide text converter
    pub fn simple_types(&self) -> impl Iterator<Item = &str> {
        self.simple_types.iter().map(String::as_str)
    }

    pub fn assignability(&self) -> &dyn IsAssignable {
        self.assignability.as_ref()
    }

    /// A type is simple when it is not a collection and is either a primitive/string-like
    /// leaf or a class registered with a namespace-wide text converter.
    pub fn is_simple_type(&self, ty: &Type) -> bool {
        if ty.is_collection() {
            return false;
        }
        ty.is_simple() || self.simple_types.contains(ty.class_name())
    }

    pub fn classify(&self, attribute: &AttributeMapping) -> Classification {
        resolve::classify(attribute, self)
    }

    pub fn find_implementations_of(&self, ty: &Type) -> Vec<&ElementMapping> {
        resolve::find_implementations_of(self, ty)
    }
}

/// Collects and validates the parts of a [`NamespaceMapping`]
#[derive(Debug)]
pub struct NamespaceMappingBuilder {
    namespace_uri: String,
    elements: Vec<ElementMapping>,
    root_element: Option<String>,
    simple_types: Vec<String>,
    assignability: Arc<dyn IsAssignable>,
}

impl NamespaceMappingBuilder {
    pub fn new(namespace_uri: impl Into<String>) -> Self {
        Self {
            namespace_uri: namespace_uri.into(),
            elements: Vec::new(),
            root_element: None,
            simple_types: Vec::new(),
            assignability: Arc::new(ExactClassMatch),
        }
    }

    pub fn element(mut self, element: ElementMapping) -> Self {
        self.elements.push(element);
        self
    }

    pub fn elements(mut self, elements: impl IntoIterator<Item = ElementMapping>) -> Self {
        self.elements.extend(elements);
        self
    }

    pub fn root_element(mut self, element_name: impl Into<String>) -> Self {
        self.root_element = Some(element_name.into());
        self
    }

    /// Register a class whose values are converted from text throughout the namespace
    pub fn simple_type(mut self, class_name: impl Into<String>) -> Self {
        self.simple_types.push(class_name.into());
        self
    }

    pub fn assignability(self, assignability: impl IsAssignable + 'static) -> Self {
        self.shared_assignability(Arc::new(assignability))
    }

    pub fn shared_assignability(mut self, assignability: Arc<dyn IsAssignable>) -> Self {
        self.assignability = assignability;
        self
    }

    /// Validate uniqueness and root membership, then freeze the model
    pub fn build(self) -> Result<NamespaceMapping, ModelViolation> {
        if self.namespace_uri.is_empty() {
            return Err(ModelViolation::EmptyName("Namespace URI"));
        }

        let mut elements = IndexMap::with_capacity(self.elements.len());
        for element in self.elements {
            let name = element.element_name().to_string();
            if elements.contains_key(&name) {
                return Err(ModelViolation::DuplicateElement {
                    namespace: self.namespace_uri,
                    element: name,
                });
            }
            elements.insert(name, element);
        }

        if let Some(root) = &self.root_element {
            if !elements.contains_key(root) {
                return Err(ModelViolation::UnknownRootElement {
                    namespace: self.namespace_uri,
                    root: root.clone(),
                });
            }
        }

        Ok(NamespaceMapping {
            namespace_uri: self.namespace_uri,
            elements,
            root_element: self.root_element,
            simple_types: self.simple_types.into_iter().collect(),
            assignability: self.assignability,
        })
    }
}
