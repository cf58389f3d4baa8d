/// Caller values and their flavor views.
pub mod argument;

/// Template options: directive keyword, substitution and duplicate policies.
pub mod config;

/// Shared constants.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Placeholder declarations collected from directive comments.
pub mod registry;

/// Per-call traversal of a working tree.
mod renderer;

/// The ordered chain of structural rewriters.
pub mod rewriter;

/// Adapters over the JavaScript parser and code generator.
mod syntax;

/// Template parsing and rendering.
pub mod template;

pub use argument::{Argument, Arguments, Flavor};
pub use config::TemplateOptions;
pub use error::{Error, Result};
pub use registry::PlaceholderRegistry;
pub use template::Template;
