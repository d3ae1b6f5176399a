//! Plugin traits and interfaces

pub mod generator;
pub mod renderer;

#[cfg(test)]
mod tests;

// Re-export main types for convenience
pub use generator::*;
pub use renderer::*;
