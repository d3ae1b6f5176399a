//! Namespace mapping model and type resolution
//!
//! Describes the elements, attributes and attribute types declared by one XML namespace,
//! and answers the two questions every generator asks of it: is this attribute simple
//! text or a nested element, and which elements of the namespace can stand in for a
//! complex property type.

pub mod assignability;
pub mod attribute;
pub mod element;
pub mod error;
pub mod loader;
pub mod namespace;
pub mod resolve;
pub mod types;
pub mod xsd;

pub use assignability::{ExactClassMatch, FnAssignable, IsAssignable, TypeHierarchy};
pub use attribute::AttributeMapping;
pub use element::ElementMapping;
pub use error::ModelViolation;
pub use loader::{DocumentFormat, LoadedMapping, MappingDocument, MappingLoader};
pub use namespace::{NamespaceMapping, NamespaceMappingBuilder};
pub use resolve::{classify, find_implementations_of, Classification};
pub use types::Type;
