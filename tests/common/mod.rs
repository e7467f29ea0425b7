// tests/common/mod.rs
//! Shared fixture for integration tests.
//!
//! A [`Unit`] plays the part of the front end: it builds syntax with an
//! [`AstBuilder`] and records the facts a type checker would have produced
//! for it, then translates whole files through the public API.

#![allow(dead_code)]

use std::cell::RefCell;

use bumpalo::Bump;
use gander::ir;
use gander::syntax::AstBuilder;
use gander::syntax::ast::{Decl, Expr, Field, Stmt, TypeExpr};
use gander::syntax::sema::{BasicKind, ObjectKind, SemType};
use gander::{Config, ContextBuilder, Diagnostic, FileId, Translator};

pub struct Unit<'ast> {
    pub b: AstBuilder<'ast>,
    pub file: FileId,
    facts: RefCell<ContextBuilder>,
}

impl<'ast> Unit<'ast> {
    pub fn new(arena: &'ast Bump) -> Self {
        Self::with_config(arena, Config::default())
    }

    pub fn with_config(arena: &'ast Bump, config: Config) -> Self {
        let mut facts = ContextBuilder::new(config);
        let file = facts.add_file("log.go", None);
        Self {
            b: AstBuilder::new(arena),
            file,
            facts: RefCell::new(facts),
        }
    }

    pub fn var(&self, name: &str, ty: SemType) -> Expr<'ast> {
        let ident = self.b.ident(name);
        self.facts.borrow_mut().declare(&ident, ObjectKind::Var, ty);
        Expr::Ident(ident)
    }

    pub fn u64_var(&self, name: &str) -> Expr<'ast> {
        self.var(name, SemType::uint64())
    }

    pub fn bool_var(&self, name: &str) -> Expr<'ast> {
        self.var(name, SemType::Basic(BasicKind::Bool))
    }

    pub fn int(&self, raw: &str) -> Expr<'ast> {
        let lit = self.b.int(raw);
        self.typed(lit, SemType::Basic(BasicKind::UntypedInt))
    }

    pub fn typed(&self, expr: Expr<'ast>, ty: SemType) -> Expr<'ast> {
        self.facts.borrow_mut().record_type(expr.id(), ty);
        expr
    }

    pub fn type_name(&self, name: &str, ty: SemType) -> TypeExpr<'ast> {
        let ident = self.b.ident(name);
        self.facts.borrow_mut().declare(&ident, ObjectKind::TypeName, ty);
        TypeExpr::Named(ident)
    }

    pub fn uint64(&self) -> TypeExpr<'ast> {
        self.type_name("uint64", SemType::uint64())
    }

    pub fn param(&self, name: &str, ty: TypeExpr<'ast>) -> Field<'ast> {
        self.b.param(name, ty)
    }

    /// `name(args)` calling a declared function.
    pub fn call(&self, name: &str, args: &[Expr<'ast>]) -> Expr<'ast> {
        let ident = self.b.ident(name);
        self.facts.borrow_mut().record_object(ident.id, ObjectKind::Func);
        self.b.call(Expr::Ident(ident), args)
    }

    /// `name(args)` calling a predeclared function.
    pub fn builtin(&self, name: &str, args: &[Expr<'ast>], spread: bool) -> Expr<'ast> {
        let ident = self.b.ident(name);
        self.facts.borrow_mut().record_object(ident.id, ObjectKind::Builtin);
        if spread {
            self.b.call_spread(Expr::Ident(ident), args)
        } else {
            self.b.call(Expr::Ident(ident), args)
        }
    }

    pub fn body_stmts(&self, stmts: &[Stmt<'ast>]) -> Decl<'ast> {
        self.b.func("f", &[], &[], stmts)
    }

    /// Translate `decls` as the unit's only file.
    pub fn translate(&self, decls: &[Decl<'ast>]) -> Result<ir::File, Diagnostic> {
        let source = self.b.source_file(self.file, "log", decls);
        let cx = self.facts.borrow().clone().build();
        Translator::new(&cx).translate_files(&[source])
    }
}

/// The body of the single function in `file`.
#[track_caller]
pub fn only_body(file: &ir::File) -> &ir::Block {
    match file.iter().next() {
        Some(ir::Decl::Func(func)) => &func.body,
        other => panic!("expected one function, got {other:?}"),
    }
}
