//! Statement AST nodes.

use crate::ast::{AssignOp, BranchKind, Expr, GenDecl, Ident, IncDecOp};
use gander_core::Span;

/// A statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stmt<'ast> {
    /// Expression evaluated for effect
    Expr(ExprStmt<'ast>),
    /// `lhs op rhs`, including `:=`
    Assign(&'ast AssignStmt<'ast>),
    /// `x++` / `x--`
    IncDec(IncDecStmt<'ast>),
    /// `return ...`
    Return(ReturnStmt<'ast>),
    /// `break`, `continue`, `goto`, `fallthrough`
    Branch(BranchStmt<'ast>),
    /// `{ ... }`
    Block(Block<'ast>),
    /// `if`
    If(&'ast IfStmt<'ast>),
    /// Three-clause, condition-only, or infinite `for`
    For(&'ast ForStmt<'ast>),
    /// `for k, v := range x`
    Range(&'ast RangeStmt<'ast>),
    /// `go f()`
    Go(GoStmt<'ast>),
    /// `defer f()`
    Defer(DeferStmt<'ast>),
    /// Expression switch
    Switch(&'ast SwitchStmt<'ast>),
    /// Local `var`, `const`, or `type` declaration
    Decl(DeclStmt<'ast>),
    /// `label: stmt`
    Labeled(&'ast LabeledStmt<'ast>),
    /// Empty statement
    Empty(EmptyStmt),
}

impl<'ast> Stmt<'ast> {
    /// Get the span of this statement.
    pub fn span(&self) -> Span {
        match self {
            Self::Expr(s) => s.span,
            Self::Assign(s) => s.span,
            Self::IncDec(s) => s.span,
            Self::Return(s) => s.span,
            Self::Branch(s) => s.span,
            Self::Block(s) => s.span,
            Self::If(s) => s.span,
            Self::For(s) => s.span,
            Self::Range(s) => s.span,
            Self::Go(s) => s.span,
            Self::Defer(s) => s.span,
            Self::Switch(s) => s.span,
            Self::Decl(s) => s.span,
            Self::Labeled(s) => s.span,
            Self::Empty(s) => s.span,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExprStmt<'ast> {
    pub expr: &'ast Expr<'ast>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssignStmt<'ast> {
    pub lhs: &'ast [Expr<'ast>],
    pub op: AssignOp,
    pub rhs: &'ast [Expr<'ast>],
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncDecStmt<'ast> {
    pub target: &'ast Expr<'ast>,
    pub op: IncDecOp,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReturnStmt<'ast> {
    pub results: &'ast [Expr<'ast>],
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BranchStmt<'ast> {
    pub kind: BranchKind,
    pub label: Option<Ident<'ast>>,
    pub span: Span,
}

/// A brace-delimited statement list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block<'ast> {
    pub stmts: &'ast [Stmt<'ast>],
    pub span: Span,
}

impl<'ast> Block<'ast> {
    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }

    pub fn last(&self) -> Option<&'ast Stmt<'ast>> {
        self.stmts.last()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IfStmt<'ast> {
    pub init: Option<&'ast Stmt<'ast>>,
    pub cond: &'ast Expr<'ast>,
    pub body: Block<'ast>,
    /// Either a [`Stmt::Block`] or a chained [`Stmt::If`].
    pub else_branch: Option<&'ast Stmt<'ast>>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForStmt<'ast> {
    pub init: Option<&'ast Stmt<'ast>>,
    pub cond: Option<&'ast Expr<'ast>>,
    pub post: Option<&'ast Stmt<'ast>>,
    pub body: Block<'ast>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeStmt<'ast> {
    pub key: Option<&'ast Expr<'ast>>,
    pub value: Option<&'ast Expr<'ast>>,
    /// `:=` rather than `=`.
    pub define: bool,
    pub iterable: &'ast Expr<'ast>,
    pub body: Block<'ast>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoStmt<'ast> {
    pub call: &'ast Expr<'ast>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeferStmt<'ast> {
    pub call: &'ast Expr<'ast>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchStmt<'ast> {
    pub init: Option<&'ast Stmt<'ast>>,
    pub tag: Option<&'ast Expr<'ast>>,
    pub clauses: &'ast [CaseClause<'ast>],
    pub span: Span,
}

/// `case a, b: ...`, or `default:` when `exprs` is empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaseClause<'ast> {
    pub exprs: &'ast [Expr<'ast>],
    pub body: &'ast [Stmt<'ast>],
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeclStmt<'ast> {
    pub decl: &'ast GenDecl<'ast>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledStmt<'ast> {
    pub label: Ident<'ast>,
    pub stmt: Stmt<'ast>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmptyStmt {
    pub span: Span,
}
