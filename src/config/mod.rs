//! Configuration for ming templates
//!
//! This module contains the configuration system components:
//! - `types`: Policy enums used by the rewriters and the registry
//! - `loader`: Options parsing and validation

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export commonly used types for convenience
pub use loader::TemplateOptions;
pub use types::{DuplicatePolicy, SubstitutionPolicy};
