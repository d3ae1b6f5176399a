//! Generator selection

use serde::{Deserialize, Serialize};
use std::fmt;

/// Built-in output backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorKind {
    /// HTML reference documentation
    Html,

    /// Confluence wiki documentation
    Wiki,

    /// XML Schema
    Xsd,

    /// Element-to-class bindings properties
    Metadata,
}

impl GeneratorKind {
    pub const ALL: [GeneratorKind; 4] = [
        GeneratorKind::Html,
        GeneratorKind::Wiki,
        GeneratorKind::Xsd,
        GeneratorKind::Metadata,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GeneratorKind::Html => "html",
            GeneratorKind::Wiki => "wiki",
            GeneratorKind::Xsd => "xsd",
            GeneratorKind::Metadata => "metadata",
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One configured generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSpec {
    /// Backend to run
    pub kind: GeneratorKind,

    /// Output file stem; defaults to one derived from the namespace URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_stem: Option<String>,

    /// Whether this generator runs
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl GeneratorSpec {
    pub fn new(kind: GeneratorKind) -> Self {
        Self {
            kind,
            file_stem: None,
            enabled: true,
        }
    }
}

fn default_enabled() -> bool {
    true
}

/// Every built-in generator, enabled, with default file stems
pub fn default_generators() -> Vec<GeneratorSpec> {
    GeneratorKind::ALL.iter().copied().map(GeneratorSpec::new).collect()
}
