//! Per-call traversal of a working tree.

use crate::error::{Error, Result};
use crate::rewriter::{
    apply, expression_placeholder, guard_new_callee, statement_placeholder, Node, RewriteScope,
    Rewriter,
};
use swc_core::common::DUMMY_SP;
use swc_core::ecma::ast::{
    Expr, ExprStmt, Ident, IdentName, KeyValueProp, NewExpr, Prop, PropName, Script, Stmt, Str,
};
use swc_core::ecma::visit::{VisitMut, VisitMutWith};

/// Walks a working tree top-down and applies the rewriter chain on enter.
///
/// A replacement is visited for nested placeholders, the node it replaced is
/// not. Placeholders being expanded are kept on a stack, so an argument that
/// leads back to its own placeholder fails instead of expanding forever. The
/// first error stops the walk.
pub(crate) struct Renderer<'a> {
    scope: RewriteScope<'a>,
    expanding: Vec<String>,
    error: Option<Error>,
}

impl<'a> Renderer<'a> {
    pub fn new(scope: RewriteScope<'a>) -> Self {
        Self { scope, expanding: Vec::new(), error: None }
    }

    /// Rewrites `script` in place.
    pub fn run(mut self, script: &mut Script) -> Result<()> {
        script.visit_mut_with(&mut self);
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn enter(&mut self, node: Node<'_>) -> Option<Rewriter> {
        match apply(node, &self.scope) {
            Ok(matched) => matched,
            Err(err) => {
                self.error = Some(err);
                None
            }
        }
    }

    /// Claims `name` for expansion, failing if it is already being expanded.
    fn begin(&mut self, name: Option<&str>) -> Option<String> {
        let name = name?;
        if self.expanding.iter().any(|open| open == name) {
            self.error = Some(Error::RecursiveArgumentError { name: name.to_string() });
            return None;
        }
        Some(name.to_string())
    }

    /// Visits the children of a replacement with `name` on the stack.
    fn expand<N: VisitMutWith<Self>>(&mut self, name: String, node: &mut N) {
        self.expanding.push(name);
        node.visit_mut_children_with(self);
        self.expanding.pop();
    }

    fn failed(&self) -> bool {
        self.error.is_some()
    }
}

impl VisitMut for Renderer<'_> {
    fn visit_mut_stmt(&mut self, stmt: &mut Stmt) {
        if self.failed() {
            return;
        }
        let name = self.begin(statement_placeholder(stmt, self.scope.registry));
        if self.failed() {
            return;
        }
        let matched = self.enter(Node::Stmt(&mut *stmt));
        if self.failed() {
            return;
        }
        match (matched, name) {
            (Some(Rewriter::Statement), Some(name)) => {
                // an identifier spliced in is a leaf
                if let Stmt::Expr(ExprStmt { expr, .. }) = &*stmt {
                    if matches!(**expr, Expr::Ident(_)) {
                        return;
                    }
                }
                self.expand(name, stmt);
            }
            _ => stmt.visit_mut_children_with(self),
        }
    }

    fn visit_mut_expr(&mut self, expr: &mut Expr) {
        if self.failed() {
            return;
        }
        let name = self.begin(expression_placeholder(expr, self.scope.registry));
        if self.failed() {
            return;
        }
        let matched = self.enter(Node::Expr(&mut *expr));
        if self.failed() {
            return;
        }
        match (matched, name) {
            (Some(Rewriter::Expression), Some(name)) => {
                if !matches!(expr, Expr::Ident(_)) {
                    self.expand(name, expr);
                }
            }
            _ => expr.visit_mut_children_with(self),
        }
    }

    fn visit_mut_new_expr(&mut self, new: &mut NewExpr) {
        new.visit_mut_children_with(self);
        if !self.failed() {
            guard_new_callee(&mut new.callee);
        }
    }

    fn visit_mut_prop(&mut self, prop: &mut Prop) {
        if self.failed() {
            return;
        }
        // `{ $NAME$ }` is split into a key and a value so both flavors apply
        let shorthand = match prop {
            Prop::Shorthand(ident) if self.scope.registry.whole_token(&ident.sym).is_some() => {
                Some(ident.clone())
            }
            _ => None,
        };
        if let Some(ident) = shorthand {
            let key = PropName::Ident(IdentName::new(ident.sym.clone(), DUMMY_SP));
            *prop = Prop::KeyValue(KeyValueProp { key, value: Box::new(Expr::Ident(ident)) });
        }
        prop.visit_mut_children_with(self);
    }

    fn visit_mut_ident(&mut self, ident: &mut Ident) {
        if !self.failed() {
            self.enter(Node::Ident(ident));
        }
    }

    fn visit_mut_ident_name(&mut self, ident: &mut IdentName) {
        if !self.failed() {
            self.enter(Node::IdentName(ident));
        }
    }

    fn visit_mut_str(&mut self, lit: &mut Str) {
        if !self.failed() {
            self.enter(Node::Str(lit));
        }
    }
}
