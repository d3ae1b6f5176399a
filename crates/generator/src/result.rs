//! Result types for generation operations

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

use xmlns_gen_plugin::GeneratedArtifact;

/// Result of running one generator over one namespace
#[derive(Debug, Clone, Serialize)]
pub struct PluginRunResult {
    pub generator: String,
    pub namespace_uri: String,
    pub source_path: PathBuf,
    pub artifact: Option<GeneratedArtifact>,
    pub error: Option<String>,
    /// The artifact already existed with identical content
    pub unchanged: bool,
    pub processing_time_ms: u64,
}

impl PluginRunResult {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Overall generation result
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    pub namespaces_processed: usize,
    pub total_sources: usize,
    pub results: Vec<PluginRunResult>,
    pub statistics: GenerationStatistics,
    pub generated_at: DateTime<Utc>,
}

impl GenerationResult {
    pub fn artifacts(&self) -> impl Iterator<Item = &GeneratedArtifact> {
        self.results.iter().filter_map(|r| r.artifact.as_ref())
    }

    pub fn failures(&self) -> impl Iterator<Item = &PluginRunResult> {
        self.results.iter().filter(|r| !r.is_success())
    }
}

/// Generation statistics
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationStatistics {
    /// Total processing time in milliseconds
    pub total_processing_time_ms: u64,

    /// Number of namespaces processed
    pub namespaces_processed: usize,

    /// Number of artifacts written
    pub artifacts_generated: usize,

    /// Number of artifacts whose content did not change
    pub artifacts_unchanged: usize,

    /// Number of failed generator runs
    pub error_count: usize,

    /// Total lines across all artifacts
    pub lines_generated: usize,
}

impl GenerationStatistics {
    pub fn from_results(results: &[PluginRunResult], namespaces_processed: usize) -> Self {
        Self {
            total_processing_time_ms: 0,
            namespaces_processed,
            artifacts_generated: results.iter().filter(|r| r.artifact.is_some()).count(),
            artifacts_unchanged: results.iter().filter(|r| r.unchanged).count(),
            error_count: results.iter().filter(|r| r.error.is_some()).count(),
            lines_generated: results
                .iter()
                .filter_map(|r| r.artifact.as_ref())
                .map(|a| a.lines)
                .sum(),
        }
    }
}
