//! Template options loading and validation

use crate::config::types::{DuplicatePolicy, SubstitutionPolicy};
use crate::constants::DEFAULT_DIRECTIVE;
use crate::error::{Error, Result};
use serde::Deserialize;

/// Options that control how a template is built and rendered.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TemplateOptions {
    /// Keyword that introduces a placeholder declaration in a line comment.
    #[serde(default = "get_default_directive")]
    pub directive: String,
    #[serde(default)]
    pub substitution: SubstitutionPolicy,
    #[serde(default)]
    pub duplicates: DuplicatePolicy,
    /// Emit compact code instead of the indented form.
    #[serde(default)]
    pub minify: bool,
}

impl TemplateOptions {
    /// Parses options from a JSON document and validates them.
    pub fn from_json(content: &str) -> Result<Self> {
        let options: TemplateOptions = serde_json::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    /// Parses options from a YAML document and validates them.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let options: TemplateOptions = serde_yaml::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if self.directive.is_empty() {
            return Err(Error::OptionsValidationError(
                "directive must not be empty".into(),
            ));
        }
        if self.directive.chars().any(char::is_whitespace) {
            return Err(Error::OptionsValidationError(
                "directive must not contain whitespace".into(),
            ));
        }
        Ok(())
    }
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            directive: get_default_directive(),
            substitution: SubstitutionPolicy::default(),
            duplicates: DuplicatePolicy::default(),
            minify: false,
        }
    }
}

fn get_default_directive() -> String {
    DEFAULT_DIRECTIVE.to_string()
}
