//! Progress logging capability injected into generators

use std::sync::Mutex;

/// Receives progress messages from a generator
pub trait Log: Send + Sync {
    fn log(&self, message: &str);
}

/// Discards every message
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLog;

impl Log for NoopLog {
    fn log(&self, _message: &str) {}
}

/// Forwards messages to `tracing` at info level
#[derive(Debug, Clone, Default)]
pub struct TracingLog {
    source: Option<String>,
}

impl TracingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag every message with the name of the emitting component
    pub fn with_source(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
        }
    }
}

impl Log for TracingLog {
    fn log(&self, message: &str) {
        match &self.source {
            Some(source) => tracing::info!(source = %source, "{}", message),
            None => tracing::info!("{}", message),
        }
    }
}

/// Keeps messages in memory
#[derive(Debug, Default)]
pub struct MemoryLog {
    messages: Mutex<Vec<String>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Log for MemoryLog {
    fn log(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(message.to_string());
    }
}
