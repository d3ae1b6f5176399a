//! Attribute mappings

use serde::{Deserialize, Serialize};

use crate::types::Type;

/// One property of an element, as exposed in XML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeMapping {
    /// XML attribute name, unique within the owning element
    #[serde(rename = "name")]
    attribute_name: String,

    /// Declared type
    #[serde(rename = "type")]
    ty: Type,

    /// Identifier of a registered text converter, if any
    #[serde(rename = "converter", default, skip_serializing_if = "Option::is_none")]
    text_converter: Option<String>,

    /// Backing property name, when it differs from the attribute name
    #[serde(rename = "property", default, skip_serializing_if = "Option::is_none")]
    property_name: Option<String>,

    #[serde(default)]
    description: String,
}

impl AttributeMapping {
    pub fn new(attribute_name: impl Into<String>, ty: Type) -> Self {
        Self {
            attribute_name: attribute_name.into(),
            ty,
            text_converter: None,
            property_name: None,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Register a string converter; the attribute is then always written as text
    pub fn with_text_converter(mut self, converter: impl Into<String>) -> Self {
        self.text_converter = Some(converter.into());
        self
    }

    pub fn with_property_name(mut self, property_name: impl Into<String>) -> Self {
        self.property_name = Some(property_name.into());
        self
    }

    pub fn attribute_name(&self) -> &str {
        &self.attribute_name
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn text_converter(&self) -> Option<&str> {
        self.text_converter.as_deref()
    }

    pub fn has_custom_text_converter(&self) -> bool {
        self.text_converter.is_some()
    }

    /// Name of the backing property, defaulting to the attribute name
    pub fn property_name(&self) -> &str {
        self.property_name.as_deref().unwrap_or(&self.attribute_name)
    }

    /// Whether the backing property is named differently from the attribute
    pub fn is_aliased(&self) -> bool {
        self.property_name() != self.attribute_name
    }
}
