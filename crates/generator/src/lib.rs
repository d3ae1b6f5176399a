//! Output backends for namespace mappings
//!
//! Each backend is a [`LineRenderer`](xmlns_gen_plugin::LineRenderer); the rendering
//! decisions about simple versus nested attributes and about candidate implementations
//! all come from `xmlns_mapping`.

pub mod config;
pub mod crossref;
pub mod html;
pub mod metadata;
pub mod result;
pub mod wiki;
pub mod xsd;

pub use config::{OrganizationStrategy, OutputConfig};
pub use html::{DocumentationGenerator, HtmlDocumentation};
pub use metadata::{XmlMetadata, XmlMetadataGenerator};
pub use result::{GenerationResult, GenerationStatistics, PluginRunResult};
pub use wiki::{WikiDocumentation, WikiDocumentationGenerator};
pub use xsd::{XsdGenerator, XsdSchema};

/// First line comment of every generated artifact
pub const AUTOGENERATED_NOTE: &str = "NOTE: this file is autogenerated by xmlns-gen";
