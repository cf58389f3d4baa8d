//! Structural JavaScript templates.
//!
//! A [`Template`] is parsed once and rendered any number of times. Every call
//! to [`Template::render`] works on its own copy of the parsed tree, so a
//! template can be shared between threads.
//!
//! ```ignore
//! use ming::template::Template;
//! use serde_json::json;
//!
//! let template = Template::new(
//!     "// @ming NAME who to greet\nfunction hello_$NAME$() { greet('$NAME$'); }",
//! )?;
//! let code = template.render(&json!({ "NAME": "World" }))?;
//! ```

use crate::argument::{Argument, Arguments};
use crate::config::TemplateOptions;
use crate::error::{describe_value, Error, Result};
use crate::registry::PlaceholderRegistry;
use crate::renderer::Renderer;
use crate::rewriter::RewriteScope;
use crate::syntax::{generate, parse_script, ParsedScript};
use log::debug;
use std::str::FromStr;
use swc_core::ecma::ast::Script;

#[derive(Debug, Clone)]
pub struct Template {
    script: Script,
    placeholders: PlaceholderRegistry,
    options: TemplateOptions,
}

impl Template {
    /// Parses a template with default options.
    pub fn new(source: &str) -> Result<Self> {
        Self::with_options(source, TemplateOptions::default())
    }

    /// Parses a template and collects its placeholder declarations.
    ///
    /// # Arguments
    /// * `source` - JavaScript source with `@ming NAME description` line comments
    /// * `options` - Directive keyword, policies and output format
    ///
    /// # Returns
    /// * `Result<Template>` - The template, or `TemplateParseError` when the
    ///   source is not valid JavaScript
    pub fn with_options(source: &str, options: TemplateOptions) -> Result<Self> {
        options.validate()?;
        let ParsedScript { script, line_comments } =
            parse_script(source, false).map_err(Error::TemplateParseError)?;
        let placeholders = PlaceholderRegistry::from_comments(
            line_comments.iter().map(String::as_str),
            &options,
        )?;
        debug!(
            "Parsed template with {} top-level statements and {} placeholders",
            script.body.len(),
            placeholders.len()
        );
        Ok(Self { script, placeholders, options })
    }

    /// Declared placeholders, name to description.
    pub fn placeholders(&self) -> &PlaceholderRegistry {
        &self.placeholders
    }

    pub fn options(&self) -> &TemplateOptions {
        &self.options
    }

    /// Renders the template with JSON arguments.
    ///
    /// # Arguments
    /// * `arguments` - An object mapping placeholder names to either a string
    ///   or an object of flavor texts
    ///
    /// # Returns
    /// * `Result<String>` - Regenerated source text
    pub fn render(&self, arguments: &serde_json::Value) -> Result<String> {
        let serde_json::Value::Object(entries) = arguments else {
            return Err(Error::InvalidArgumentsError { found: describe_value(arguments) });
        };
        let arguments = entries
            .iter()
            .map(|(name, value)| -> Result<(String, Argument)> {
                Ok((name.clone(), Argument::from_value(name, value)?))
            })
            .collect::<Result<Arguments>>()?;
        self.render_arguments(&arguments)
    }

    /// Renders the template with prepared arguments.
    pub fn render_arguments(&self, arguments: &Arguments) -> Result<String> {
        let mut working = self.script.clone();
        let scope = RewriteScope {
            registry: &self.placeholders,
            arguments,
            policy: self.options.substitution,
        };
        Renderer::new(scope).run(&mut working)?;
        generate(&working, self.options.minify)
    }
}

impl FromStr for Template {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self> {
        Self::new(source)
    }
}
