//! Expression translation.
//!
//! The [`ExprTranslator`] maps one source expression to one IR expression.
//! It never sequences anything: effectful subexpressions are nested inside
//! the result as calls, and the statement sequencer decides where bindings
//! go.
//!
//! # Example
//!
//! ```ignore
//! let exprs = ExprTranslator::new(&cx, file);
//! let ir = exprs.translate(&expr)?;
//! ```

mod binary;
mod calls;
mod composite;
mod identifiers;
mod literals;
mod member;
mod unary;

use gander_core::FileId;
use gander_ir as ir;
use gander_syntax::ast::Expr;

use crate::type_resolver::TypeResolver;
use crate::{Context, FileContext, Result};

/// Translates expressions of one file.
pub struct ExprTranslator<'a> {
    fcx: FileContext<'a>,
}

impl<'a> ExprTranslator<'a> {
    pub fn new(cx: &'a Context, file: FileId) -> Self {
        Self::in_file(FileContext::new(cx, file))
    }

    pub(crate) fn in_file(fcx: FileContext<'a>) -> Self {
        Self { fcx }
    }

    pub(crate) fn fcx(&self) -> FileContext<'a> {
        self.fcx
    }

    pub(crate) fn types(&self) -> TypeResolver<'a> {
        TypeResolver::in_file(self.fcx)
    }

    /// Translate one expression.
    pub fn translate(&self, expr: &Expr<'_>) -> Result<ir::Expr> {
        match expr {
            Expr::Ident(ident) => identifiers::translate_ident(self, ident),
            Expr::Literal(lit) => literals::translate_literal(self, lit),
            Expr::Call(call) => calls::translate_call(self, call),
            Expr::Selector(sel) => member::translate_selector(self, sel),
            Expr::CompositeLit(lit) => composite::translate_struct_literal(self, lit),
            Expr::Binary(bin) => binary::translate_binary(self, bin),
            Expr::Unary(un) => unary::translate_unary(self, un),
            Expr::Star(star) => unary::translate_deref(self, star),
            Expr::Paren(p) => self.translate(p.expr),
            Expr::Index(index) => member::translate_index(self, index),
            Expr::Slice(slice) => member::translate_slice(self, slice),

            Expr::TypeAssert(e) => Err(self.fcx.unsupported(e.span, "type assertions")),
            Expr::FuncLit(e) => Err(self.fcx.unsupported(e.span, "function literals")),
            Expr::Type(e) => Err(self.fcx.unsupported(e.span, format!("type {} used as a value", e.ty))),
        }
    }

    /// Translate a list of expressions in order.
    pub fn translate_all(&self, exprs: &[Expr<'_>]) -> Result<Vec<ir::Expr>> {
        exprs.iter().map(|e| self.translate(e)).collect()
    }
}
