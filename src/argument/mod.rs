//! Caller values and their flavor views.
//!
//! An [`Argument`] is built fresh for every render call. It keeps the texts the
//! caller supplied and only parses the one flavor a syntactic position asks
//! for.

mod flavor;

pub use flavor::Flavor;

use crate::error::{describe_value, Error, Result};
use crate::syntax::parse_script;
use indexmap::IndexMap;
use log::warn;
use swc_core::common::{SyntaxContext, DUMMY_SP};
use swc_core::ecma::ast::{
    BlockStmt, CallExpr, Callee, Decl, Expr, ExprStmt, FnDecl, FnExpr, Function,
    ParenExpr, Stmt,
};

/// Arguments of one render call, keyed by placeholder name.
pub type Arguments = IndexMap<String, Argument>;

/// One caller value for one render call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Argument {
    /// `None` marks an entry that was supplied but is not text.
    flavors: IndexMap<Flavor, Option<String>>,
}

impl Argument {
    /// Creates an argument that answers every flavor with `text`.
    pub fn text(text: impl Into<String>) -> Self {
        let mut flavors = IndexMap::new();
        flavors.insert(Flavor::Default, Some(text.into()));
        Self { flavors }
    }

    /// Creates an argument from explicit flavor texts.
    pub fn from_flavors<I, S>(flavors: I) -> Self
    where
        I: IntoIterator<Item = (Flavor, S)>,
        S: Into<String>,
    {
        let flavors =
            flavors.into_iter().map(|(flavor, text)| (flavor, Some(text.into()))).collect();
        Self { flavors }
    }

    /// Wraps a JSON caller value.
    ///
    /// # Arguments
    /// * `name` - Placeholder name the value is given for (used in errors)
    /// * `value` - A string, or an object mapping flavor names to strings
    ///
    /// # Returns
    /// * `Result<Argument>` - The argument, or `InvalidArgumentError` for any
    ///   other kind of value
    pub fn from_value(name: &str, value: &serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::String(text) => Ok(Self::text(text.as_str())),
            serde_json::Value::Object(entries) => {
                let mut flavors = IndexMap::new();
                for (key, entry) in entries {
                    let Ok(flavor) = key.parse::<Flavor>() else {
                        warn!("Ignoring unknown flavor '{key}' of argument '{name}'");
                        continue;
                    };
                    match entry {
                        serde_json::Value::Null => {}
                        serde_json::Value::String(text) => {
                            flavors.insert(flavor, Some(text.clone()));
                        }
                        _ => {
                            flavors.insert(flavor, None);
                        }
                    }
                }
                Ok(Self { flavors })
            }
            other => Err(Error::InvalidArgumentError {
                name: name.to_string(),
                found: describe_value(other),
            }),
        }
    }

    /// Resolves a flavor: the exact entry first, then the default entry.
    ///
    /// Returns `None` when neither exists or the resolved entry is not text.
    pub fn flavor(&self, flavor: Flavor) -> Option<&str> {
        match self.flavors.get(&flavor) {
            Some(entry) => entry.as_deref(),
            None => self.flavors.get(&Flavor::Default).and_then(|e| e.as_deref()),
        }
    }

    fn require(&self, flavor: Flavor) -> Result<&str> {
        self.flavor(flavor).ok_or(Error::UndefinedFlavorError { flavor })
    }

    /// Text used for substring substitution inside identifiers and strings.
    pub fn to_text(&self, flavor: Flavor) -> Result<&str> {
        self.require(flavor)
    }

    /// Builds one node that is valid in statement position.
    ///
    /// A single parsed statement is returned as is; zero or several become a
    /// block.
    pub fn to_statement(&self) -> Result<Stmt> {
        let mut body = self.parse(Flavor::Statement)?;
        if body.len() == 1 {
            if let Some(stmt) = body.pop() {
                return Ok(stmt);
            }
        }
        Ok(Stmt::Block(BlockStmt { span: DUMMY_SP, ctxt: SyntaxContext::empty(), stmts: body }))
    }

    /// Builds one node that is valid in expression position.
    ///
    /// A single expression statement decays to its expression, a single
    /// function declaration to a function expression. Anything else runs inside
    /// an immediately invoked closure.
    pub fn to_expression(&self) -> Result<Expr> {
        let mut body = self.parse(Flavor::Expression)?;
        if body.len() == 1 {
            match body.pop() {
                Some(Stmt::Expr(ExprStmt { expr, .. })) => return Ok(*expr),
                Some(Stmt::Decl(Decl::Fn(FnDecl { ident, function, .. }))) => {
                    return Ok(Expr::Fn(FnExpr { ident: Some(ident), function }));
                }
                Some(stmt) => body.push(stmt),
                None => {}
            }
        }
        Ok(immediately_invoked(body))
    }

    fn parse(&self, flavor: Flavor) -> Result<Vec<Stmt>> {
        let text = self.require(flavor)?;
        let parsed = parse_script(text, true)
            .map_err(|message| Error::ArgumentParseError { flavor, message })?;
        Ok(parsed.script.body)
    }
}

impl From<&str> for Argument {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for Argument {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

/// `(function () { <body> })()`
fn immediately_invoked(body: Vec<Stmt>) -> Expr {
    let function = Function {
        params: Vec::new(),
        decorators: Vec::new(),
        span: DUMMY_SP,
        ctxt: SyntaxContext::empty(),
        body: Some(BlockStmt { span: DUMMY_SP, ctxt: SyntaxContext::empty(), stmts: body }),
        is_generator: false,
        is_async: false,
        type_params: None,
        return_type: None,
    };
    let callee = Expr::Paren(ParenExpr {
        span: DUMMY_SP,
        expr: Box::new(Expr::Fn(FnExpr { ident: None, function: Box::new(function) })),
    });
    Expr::Call(CallExpr {
        span: DUMMY_SP,
        ctxt: SyntaxContext::empty(),
        callee: Callee::Expr(Box::new(callee)),
        args: Vec::new(),
        type_args: None,
    })
}
