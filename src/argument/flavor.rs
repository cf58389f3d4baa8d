use crate::constants::flavors;
use std::fmt::Display;
use std::str::FromStr;

/// One of the textual representations an argument may supply.
///
/// Every syntactic position asks for its own flavor; a flavor the argument
/// does not define falls back to [`Flavor::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    Default,
    Statement,
    Expression,
    Identifier,
    Literal,
}

impl Flavor {
    pub const ALL: [Flavor; 5] = [
        Flavor::Default,
        Flavor::Statement,
        Flavor::Expression,
        Flavor::Identifier,
        Flavor::Literal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Flavor::Default => flavors::DEFAULT,
            Flavor::Statement => flavors::STATEMENT,
            Flavor::Expression => flavors::EXPRESSION,
            Flavor::Identifier => flavors::IDENTIFIER,
            Flavor::Literal => flavors::LITERAL,
        }
    }
}

impl Display for Flavor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Flavor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Flavor::ALL
            .into_iter()
            .find(|flavor| flavor.as_str() == s)
            .ok_or_else(|| format!("unknown flavor '{s}'"))
    }
}
