//! Generator plugin contract
//!
//! Every output backend implements [`GeneratorPlugin`]: given a finished namespace
//! mapping, produce exactly one artifact. Text backends usually implement only
//! [`LineRenderer`] and let [`TextArtifactGenerator`] handle destinations, progress
//! logging and the atomic write.

pub mod artifact;
pub mod error;
pub mod log;
pub mod traits;
pub mod writer;

pub use artifact::GeneratedArtifact;
pub use error::GenerationError;
pub use log::{Log, MemoryLog, NoopLog, TracingLog};
pub use traits::*;
pub use writer::write_atomic;
