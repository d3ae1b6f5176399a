//! Generation run settings

use serde::{Deserialize, Serialize};

/// Generation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Whether to stop at the first failed generator
    #[serde(default)]
    pub fail_fast: bool,

    /// Whether to run the generators of a namespace concurrently
    #[serde(default)]
    pub parallel: bool,
}
