//! Model violation errors

use thiserror::Error;

/// A malformed namespace mapping model
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelViolation {
    #[error("Element '{element}' is declared more than once in namespace {namespace}")]
    DuplicateElement { namespace: String, element: String },

    #[error("Attribute '{attribute}' is declared more than once on element '{element}'")]
    DuplicateAttribute { element: String, attribute: String },

    #[error("Collection type {class_name} has no nested element type")]
    MissingNestedType { class_name: String },

    #[error("Non-collection type {class_name} declares a nested element type")]
    UnexpectedNestedType { class_name: String },

    #[error("Root element '{root}' is not declared in namespace {namespace}")]
    UnknownRootElement { namespace: String, root: String },

    #[error("{0} name cannot be empty")]
    EmptyName(&'static str),
}
