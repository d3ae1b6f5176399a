//! Configuration management for xmlns-gen

pub mod config;
pub mod generation;
pub mod plugins;
pub mod source;


// Re-export main types for convenience
pub use config::Config;
pub use generation::GenerationConfig;
pub use plugins::{default_generators, GeneratorKind, GeneratorSpec};
pub use source::*;
