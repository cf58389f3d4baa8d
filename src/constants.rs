//! Constants used throughout ming

/// Directive keyword that declares a placeholder in a line comment
pub const DEFAULT_DIRECTIVE: &str = "@ming";

/// Pattern of a placeholder token anywhere inside a piece of text
pub const TOKEN_PATTERN: &str = r"\$(\w+)\$";

/// Pattern of a text that is exactly one placeholder token
pub const WHOLE_TOKEN_PATTERN: &str = r"^\$(\w+)\$$";

/// Line terminator used by the code generator
pub const NEW_LINE: &str = "\n";

/// Flavor names accepted in argument mappings
pub mod flavors {
    pub const DEFAULT: &str = "default";
    pub const STATEMENT: &str = "statement";
    pub const EXPRESSION: &str = "expression";
    pub const IDENTIFIER: &str = "identifier";
    pub const LITERAL: &str = "literal";
}
