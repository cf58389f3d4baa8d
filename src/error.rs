use crate::argument::Flavor;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The template text is not valid JavaScript.
    #[error("Failed to parse template: {0}.")]
    TemplateParseError(String),

    /// The text supplied for one flavor of an argument is not valid JavaScript.
    #[error("Failed to parse the '{flavor}' flavor of an argument: {message}.")]
    ArgumentParseError { flavor: Flavor, message: String },

    #[error("Template argument '{name}' is required.")]
    MissingArgumentError { name: String },

    /// An argument refers to its own placeholder, directly or through
    /// another argument.
    #[error("Template argument '{name}' expands into itself.")]
    RecursiveArgumentError { name: String },

    #[error("Undefined or illegal flavor '{flavor}'.")]
    UndefinedFlavorError { flavor: Flavor },

    #[error("Illegal argument '{name}': expected a string or a flavor mapping, got {found}.")]
    InvalidArgumentError { name: String, found: String },

    #[error("Illegal template arguments: expected a mapping, got {found}.")]
    InvalidArgumentsError { found: String },

    #[error("Placeholder '{name}' is declared more than once.")]
    DuplicateDeclarationError { name: String },

    #[error("Failed to parse template options. Original error: {0}")]
    OptionsParseError(String),

    #[error("Invalid template options: {0}.")]
    OptionsValidationError(String),

    #[error("Failed to generate code. Original error: {0}")]
    GenerateError(#[from] std::io::Error),

    #[error("Generated code is not valid UTF-8. Original error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
}

impl Error {
    /// Whether the error was raised while building a template rather than while
    /// rendering it.
    ///
    /// Construction errors point at the template author, render errors at the
    /// call site that supplied the arguments.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            Error::TemplateParseError(_)
                | Error::DuplicateDeclarationError { .. }
                | Error::OptionsParseError(_)
                | Error::OptionsValidationError(_)
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::OptionsParseError(err.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::OptionsParseError(err.to_string())
    }
}

/// Convenience type alias for Results with ming's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Describes a JSON value for error messages.
pub(crate) fn describe_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Bool(b) => format!("boolean `{b}`"),
        serde_json::Value::Number(n) => format!("number `{n}`"),
        serde_json::Value::String(_) => "a string".to_string(),
        serde_json::Value::Array(_) => "an array".to_string(),
        serde_json::Value::Object(_) => "a mapping".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_construction_errors_are_distinguished() {
        assert!(Error::TemplateParseError("x".into()).is_construction_error());
        assert!(Error::DuplicateDeclarationError { name: "A".into() }
            .is_construction_error());
        assert!(!Error::MissingArgumentError { name: "A".into() }.is_construction_error());
        assert!(!Error::UndefinedFlavorError { flavor: Flavor::Statement }
            .is_construction_error());
        assert!(!Error::RecursiveArgumentError { name: "A".into() }.is_construction_error());
    }

    #[test]
    fn test_error_messages() {
        let err = Error::MissingArgumentError { name: "NAME".into() };
        assert_eq!(err.to_string(), "Template argument 'NAME' is required.");

        let err = Error::UndefinedFlavorError { flavor: Flavor::Expression };
        assert_eq!(err.to_string(), "Undefined or illegal flavor 'expression'.");
    }

    #[test]
    fn test_describe_value() {
        assert_eq!(describe_value(&json!(null)), "null");
        assert_eq!(describe_value(&json!(42)), "number `42`");
        assert_eq!(describe_value(&json!([1])), "an array");
        assert_eq!(describe_value(&json!(true)), "boolean `true`");
    }
}
