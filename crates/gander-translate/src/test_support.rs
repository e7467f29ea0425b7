//! Unit-test fixture: builds syntax and records the facts a type checker
//! would have produced for it.

use std::cell::RefCell;

use bumpalo::Bump;
use gander_core::{Diagnostic, DiagnosticKind, FileId};
use gander_ir as ir;
use gander_syntax::AstBuilder;
use gander_syntax::ast::{Decl, Expr, Stmt, TypeExpr};
use gander_syntax::sema::{BasicKind, ObjectKind, SemType};

use crate::{Config, Context, ContextBuilder, DeclTranslator, ExprTranslator, StmtTranslator, TypeResolver};

pub(crate) struct Fixture<'ast> {
    pub b: AstBuilder<'ast>,
    pub file: FileId,
    facts: RefCell<ContextBuilder>,
}

impl<'ast> Fixture<'ast> {
    pub fn new(arena: &'ast Bump) -> Self {
        Self::with_config(arena, Config::default())
    }

    pub fn with_config(arena: &'ast Bump, config: Config) -> Self {
        let mut facts = ContextBuilder::new(config);
        let file = facts.add_file("test.go", None);
        Self {
            b: AstBuilder::new(arena),
            file,
            facts: RefCell::new(facts),
        }
    }

    // ------------------------------------------------------------------
    // Facts
    // ------------------------------------------------------------------

    /// Record `ty` as the type of an already built expression.
    pub fn typed(&self, expr: Expr<'ast>, ty: SemType) -> Expr<'ast> {
        self.facts.borrow_mut().record_type(expr.id(), ty);
        expr
    }

    /// A name resolving to `kind`, with no type recorded.
    pub fn object(&self, name: &str, kind: ObjectKind) -> Expr<'ast> {
        let ident = self.b.ident(name);
        self.facts.borrow_mut().record_object(ident.id, kind);
        Expr::Ident(ident)
    }

    pub fn var(&self, name: &str, ty: SemType) -> Expr<'ast> {
        let ident = self.b.ident(name);
        self.facts.borrow_mut().declare(&ident, ObjectKind::Var, ty);
        Expr::Ident(ident)
    }

    pub fn u64_var(&self, name: &str) -> Expr<'ast> {
        self.var(name, SemType::uint64())
    }

    pub fn nil(&self) -> Expr<'ast> {
        let ident = self.b.ident("nil");
        self.facts
            .borrow_mut()
            .declare(&ident, ObjectKind::Nil, SemType::Basic(BasicKind::UntypedNil));
        Expr::Ident(ident)
    }

    pub fn int(&self, raw: &str) -> Expr<'ast> {
        let lit = self.b.int(raw);
        self.typed(lit, SemType::Basic(BasicKind::UntypedInt))
    }

    /// A type name in type position, denoting `ty`.
    pub fn type_name(&self, name: &str, ty: SemType) -> TypeExpr<'ast> {
        let ident = self.b.ident(name);
        self.facts.borrow_mut().declare(&ident, ObjectKind::TypeName, ty);
        TypeExpr::Named(ident)
    }

    pub fn uint64(&self) -> TypeExpr<'ast> {
        self.type_name("uint64", SemType::uint64())
    }

    // ------------------------------------------------------------------
    // Calls
    // ------------------------------------------------------------------

    /// `name(args)` for a declared function.
    pub fn call(&self, name: &str, args: &[Expr<'ast>]) -> Expr<'ast> {
        let callee = self.object(name, ObjectKind::Func);
        self.b.call(callee, args)
    }

    /// `name(args)` for a predeclared function.
    pub fn builtin(&self, name: &str, args: &[Expr<'ast>]) -> Expr<'ast> {
        let callee = self.object(name, ObjectKind::Builtin);
        self.b.call(callee, args)
    }

    pub fn builtin_spread(&self, name: &str, args: &[Expr<'ast>]) -> Expr<'ast> {
        let callee = self.object(name, ObjectKind::Builtin);
        self.b.call_spread(callee, args)
    }

    /// `pkg.name(args)` where `pkg` resolves to `kind`.
    pub fn selected_call(&self, pkg: &str, kind: ObjectKind, name: &str, args: &[Expr<'ast>]) -> Expr<'ast> {
        let object = self.object(pkg, kind);
        let callee = self.b.selector(object, name);
        self.b.call(callee, args)
    }

    // ------------------------------------------------------------------
    // Translation
    // ------------------------------------------------------------------

    pub fn context(&self) -> Context {
        self.facts.borrow().clone().build()
    }

    pub fn resolve(&self, ty: TypeExpr<'ast>) -> Result<ir::Type, Diagnostic> {
        let cx = self.context();
        TypeResolver::new(&cx, self.file).resolve(&ty)
    }

    pub fn expr(&self, expr: Expr<'ast>) -> Result<ir::Expr, Diagnostic> {
        let cx = self.context();
        ExprTranslator::new(&cx, self.file).translate(&expr)
    }

    pub fn body(&self, stmts: &[Stmt<'ast>]) -> Result<ir::Block, Diagnostic> {
        let cx = self.context();
        let body = self.b.block(stmts);
        StmtTranslator::new(&cx, self.file).function_body(&body)
    }

    pub fn decl(&self, decl: Decl<'ast>) -> Result<Option<ir::Decl>, Diagnostic> {
        let cx = self.context();
        DeclTranslator::new(&cx, self.file).translate(&decl)
    }
}

/// Unwrap a translation failure and check its class.
#[track_caller]
pub(crate) fn expect_err<T: std::fmt::Debug>(result: Result<T, Diagnostic>, kind: DiagnosticKind) -> Diagnostic {
    match result {
        Ok(value) => panic!("expected {kind:?} diagnostic, got {value:?}"),
        Err(diag) => {
            assert_eq!(diag.kind, kind, "unexpected diagnostic: {diag}");
            diag
        }
    }
}
