use crate::config::{DuplicatePolicy, TemplateOptions};
use crate::constants::WHOLE_TOKEN_PATTERN;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::{debug, warn};
use regex::Regex;
use std::sync::LazyLock;

static WHOLE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(WHOLE_TOKEN_PATTERN).expect("placeholder token pattern is valid")
});

/// Placeholders declared by a template, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderRegistry {
    entries: IndexMap<String, String>,
}

impl PlaceholderRegistry {
    /// Collects placeholder declarations from line comment bodies.
    ///
    /// A declaration looks like `<directive> NAME description`, where the
    /// description runs to the end of the line and may be empty.
    ///
    /// # Arguments
    /// * `comments` - Line comment bodies in source order
    /// * `options` - Supplies the directive keyword and the duplicate policy
    pub fn from_comments<'a, I>(comments: I, options: &TemplateOptions) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let pattern = format!(r"^\s*{}\s+(\w+)(?:\s+(.*))?$", regex::escape(&options.directive));
        let directive = Regex::new(&pattern)
            .map_err(|e| Error::OptionsValidationError(e.to_string()))?;

        let mut entries = IndexMap::new();
        for comment in comments {
            let Some(caps) = directive.captures(comment) else {
                continue;
            };
            let name = caps[1].to_string();
            let description =
                caps.get(2).map(|m| m.as_str().trim_end().to_string()).unwrap_or_default();

            if entries.contains_key(&name) {
                match options.duplicates {
                    DuplicatePolicy::Error => {
                        return Err(Error::DuplicateDeclarationError { name });
                    }
                    DuplicatePolicy::LastWins => {
                        warn!("Placeholder '{name}' is declared again, keeping the last description");
                    }
                }
            }
            debug!("Declared placeholder '{name}': {description}");
            entries.insert(name, description);
        }

        Ok(Self { entries })
    }

    /// Returns the placeholder name if `text` is exactly one registered token.
    pub fn whole_token<'t>(&self, text: &'t str) -> Option<&'t str> {
        let caps = WHOLE_TOKEN.captures(text)?;
        let name = caps.get(1)?.as_str();
        self.contains(name).then_some(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn description(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(name, description)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(name, desc)| (name.as_str(), desc.as_str()))
    }
}
