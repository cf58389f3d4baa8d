//! Policy enums for template options

use serde::Deserialize;

/// How many placeholder tokens are substituted inside one identifier or
/// string literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubstitutionPolicy {
    /// Every `$NAME$` occurrence is substituted.
    #[default]
    All,
    /// Only the first `$NAME$` occurrence is looked at, registered or not.
    First,
}

/// What happens when a placeholder name is declared twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// The later declaration replaces the earlier description.
    #[default]
    LastWins,
    /// Template construction fails.
    Error,
}
