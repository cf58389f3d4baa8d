//! The fixed chain of rewriters applied while rendering.
//!
//! Each [`Rewriter`] recognizes one structural shape and splices the matching
//! flavor of an argument into it. [`CHAIN`] fixes their order; the first
//! rewriter that accepts a node is the only one applied to it.

mod substitute;

use crate::argument::{Argument, Arguments, Flavor};
use crate::config::SubstitutionPolicy;
use crate::error::{Error, Result};
use crate::registry::PlaceholderRegistry;
use log::trace;
use swc_core::common::DUMMY_SP;
use swc_core::ecma::ast::{Expr, ExprStmt, Ident, IdentName, Invalid, ParenExpr, Stmt, Str};

pub(crate) use substitute::substitute;

/// A mutable view of the tree nodes the chain knows about.
pub enum Node<'a> {
    Stmt(&'a mut Stmt),
    Expr(&'a mut Expr),
    /// Binding identifiers, function names and labels.
    Ident(&'a mut Ident),
    /// Non-computed property names.
    IdentName(&'a mut IdentName),
    Str(&'a mut Str),
}

/// Everything a rewriter may consult during one render call.
pub struct RewriteScope<'a> {
    pub registry: &'a PlaceholderRegistry,
    pub arguments: &'a Arguments,
    pub policy: SubstitutionPolicy,
}

impl RewriteScope<'_> {
    /// Looks up the argument of a placeholder that the template references.
    pub fn argument(&self, name: &str) -> Result<&Argument> {
        self.arguments
            .get(name)
            .ok_or_else(|| Error::MissingArgumentError { name: name.to_string() })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rewriter {
    /// `$NAME$;` as a whole statement.
    Statement,
    /// `$NAME$` as a whole expression.
    Expression,
    /// `$NAME$` anywhere inside an identifier.
    Identifier,
    /// `$NAME$` anywhere inside a string literal.
    StringLiteral,
}

/// Rewriters in the order they are tried at every node.
pub const CHAIN: [Rewriter; 4] = [
    Rewriter::Statement,
    Rewriter::Expression,
    Rewriter::Identifier,
    Rewriter::StringLiteral,
];

impl Rewriter {
    pub fn name(&self) -> &'static str {
        match self {
            Rewriter::Statement => "statement",
            Rewriter::Expression => "expression",
            Rewriter::Identifier => "identifier",
            Rewriter::StringLiteral => "string literal",
        }
    }

    /// Whether this rewriter accepts `node`.
    pub fn will_rewrite(&self, node: &Node<'_>, scope: &RewriteScope<'_>) -> bool {
        match (self, node) {
            (Rewriter::Statement, Node::Stmt(stmt)) => {
                statement_placeholder(stmt, scope.registry).is_some()
            }
            (Rewriter::Expression, Node::Expr(expr)) => {
                expression_placeholder(expr, scope.registry).is_some()
            }
            (Rewriter::Identifier, Node::Ident(_) | Node::IdentName(_)) => true,
            (Rewriter::StringLiteral, Node::Str(_)) => true,
            _ => false,
        }
    }

    /// Rewrites `node` in place.
    pub fn rewrite(&self, node: Node<'_>, scope: &RewriteScope<'_>) -> Result<()> {
        match (self, node) {
            (Rewriter::Statement, Node::Stmt(stmt)) => {
                let Some(name) = statement_placeholder(stmt, scope.registry) else {
                    return Ok(());
                };
                trace!("Substituting statement placeholder '{name}'");
                let replacement = scope.argument(name)?.to_statement()?;
                *stmt = replacement;
            }
            (Rewriter::Expression, Node::Expr(expr)) => {
                let Some(name) = expression_placeholder(expr, scope.registry) else {
                    return Ok(());
                };
                trace!("Substituting expression placeholder '{name}'");
                let replacement = scope.argument(name)?.to_expression()?;
                *expr = guard_precedence(replacement);
            }
            (Rewriter::Identifier, Node::Ident(ident)) => {
                if let Some(sym) = substitute(&ident.sym, Flavor::Identifier, scope)? {
                    trace!("Renaming identifier '{}' to '{sym}'", ident.sym);
                    ident.sym = sym.into();
                }
            }
            (Rewriter::Identifier, Node::IdentName(ident)) => {
                if let Some(sym) = substitute(&ident.sym, Flavor::Identifier, scope)? {
                    trace!("Renaming property '{}' to '{sym}'", ident.sym);
                    ident.sym = sym.into();
                }
            }
            (Rewriter::StringLiteral, Node::Str(lit)) => {
                if let Some(value) = substitute(&lit.value, Flavor::Literal, scope)? {
                    if value.as_str() != &*lit.value {
                        trace!("Rewriting string literal {:?} to {value:?}", &*lit.value);
                        lit.raw = Some(single_quoted(&value).into());
                        lit.value = value.into();
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }
}

/// Runs the chain on one node.
///
/// # Returns
/// * `Result<Option<Rewriter>>` - The rewriter that accepted the node, if any
pub(crate) fn apply(node: Node<'_>, scope: &RewriteScope<'_>) -> Result<Option<Rewriter>> {
    for rewriter in CHAIN {
        if rewriter.will_rewrite(&node, scope) {
            rewriter.rewrite(node, scope)?;
            return Ok(Some(rewriter));
        }
    }
    Ok(None)
}

/// The placeholder a statement consists of, if it is a bare `$NAME$;`.
pub(crate) fn statement_placeholder<'t>(
    stmt: &'t Stmt,
    registry: &PlaceholderRegistry,
) -> Option<&'t str> {
    match stmt {
        Stmt::Expr(ExprStmt { expr, .. }) => expression_placeholder(expr, registry),
        _ => None,
    }
}

pub(crate) fn expression_placeholder<'t>(
    expr: &'t Expr,
    registry: &PlaceholderRegistry,
) -> Option<&'t str> {
    match expr {
        Expr::Ident(ident) => registry.whole_token(&ident.sym),
        _ => None,
    }
}

/// Parenthesizes a substituted expression unless it is primary, so that the
/// operators around the placeholder keep binding the way the template reads.
fn guard_precedence(expr: Expr) -> Expr {
    match expr {
        Expr::Ident(_)
        | Expr::Lit(_)
        | Expr::Paren(_)
        | Expr::Array(_)
        | Expr::This(_)
        | Expr::Member(_)
        | Expr::SuperProp(_)
        | Expr::Call(_)
        | Expr::Tpl(_)
        | Expr::TaggedTpl(_) => expr,
        other => Expr::Paren(ParenExpr { span: DUMMY_SP, expr: Box::new(other) }),
    }
}

/// Parenthesizes the callee of a `new` expression when a call in its member
/// chain would otherwise be read as the argument list of `new`.
pub(crate) fn guard_new_callee(callee: &mut Expr) {
    if !calls_in_chain(callee) {
        return;
    }
    let inner = std::mem::replace(callee, Expr::Invalid(Invalid { span: DUMMY_SP }));
    *callee = Expr::Paren(ParenExpr { span: DUMMY_SP, expr: Box::new(inner) });
}

fn calls_in_chain(expr: &Expr) -> bool {
    match expr {
        Expr::Call(_) | Expr::OptChain(_) | Expr::New(_) => true,
        Expr::Member(member) => calls_in_chain(&member.obj),
        Expr::TaggedTpl(tagged) => calls_in_chain(&tagged.tag),
        _ => false,
    }
}

/// Quotes a string value the way templates are usually written: single
/// quotes, with only the characters that need it escaped.
fn single_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c < ' ' => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
