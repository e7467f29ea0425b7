//! Expression AST nodes.
//!
//! Every expression node carries a [`NodeId`]; the front end records the
//! expression's type and, for identifiers, the object it resolves to under
//! that id.

use crate::ast::types::{FuncType, TypeExpr};
use crate::ast::{BinaryOp, Block, Ident, NodeId, UnaryOp};
use gander_core::Span;

/// An expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expr<'ast> {
    /// Identifier reference
    Ident(Ident<'ast>),
    /// Basic literal
    Literal(LiteralExpr<'ast>),
    /// Function or conversion call
    Call(&'ast CallExpr<'ast>),
    /// `x.f`
    Selector(&'ast SelectorExpr<'ast>),
    /// `T{...}`
    CompositeLit(&'ast CompositeLit<'ast>),
    /// `a op b`
    Binary(&'ast BinaryExpr<'ast>),
    /// `op x`
    Unary(&'ast UnaryExpr<'ast>),
    /// `*x`, either a dereference or a pointer type
    Star(&'ast StarExpr<'ast>),
    /// `(x)`
    Paren(&'ast ParenExpr<'ast>),
    /// `x[i]`
    Index(&'ast IndexExpr<'ast>),
    /// `x[lo:hi]` or `x[lo:hi:max]`
    Slice(&'ast SliceExpr<'ast>),
    /// `x.(T)`
    TypeAssert(&'ast TypeAssertExpr<'ast>),
    /// `func(...) { ... }`
    FuncLit(&'ast FuncLit<'ast>),
    /// A type in expression position, e.g. the first argument of `make`
    Type(&'ast TypeOperand<'ast>),
}

impl<'ast> Expr<'ast> {
    /// Get the span of this expression.
    pub fn span(&self) -> Span {
        match self {
            Self::Ident(e) => e.span,
            Self::Literal(e) => e.span,
            Self::Call(e) => e.span,
            Self::Selector(e) => e.span,
            Self::CompositeLit(e) => e.span,
            Self::Binary(e) => e.span,
            Self::Unary(e) => e.span,
            Self::Star(e) => e.span,
            Self::Paren(e) => e.span,
            Self::Index(e) => e.span,
            Self::Slice(e) => e.span,
            Self::TypeAssert(e) => e.span,
            Self::FuncLit(e) => e.span,
            Self::Type(e) => e.span,
        }
    }

    /// Get the node id semantic facts are keyed by.
    pub fn id(&self) -> NodeId {
        match self {
            Self::Ident(e) => e.id,
            Self::Literal(e) => e.id,
            Self::Call(e) => e.id,
            Self::Selector(e) => e.id,
            Self::CompositeLit(e) => e.id,
            Self::Binary(e) => e.id,
            Self::Unary(e) => e.id,
            Self::Star(e) => e.id,
            Self::Paren(e) => e.id,
            Self::Index(e) => e.id,
            Self::Slice(e) => e.id,
            Self::TypeAssert(e) => e.id,
            Self::FuncLit(e) => e.id,
            Self::Type(e) => e.id,
        }
    }

    /// The identifier, if this expression is a bare name.
    pub fn as_ident(&self) -> Option<Ident<'ast>> {
        match self {
            Self::Ident(ident) => Some(*ident),
            _ => None,
        }
    }

    /// Strip any number of enclosing parentheses.
    pub fn unparen(&self) -> Expr<'ast> {
        let mut expr = *self;
        while let Self::Paren(p) = expr {
            expr = *p.expr;
        }
        expr
    }
}

/// A basic literal, kept as written.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiteralExpr<'ast> {
    pub kind: LiteralKind,
    /// Source spelling, including quotes and prefixes.
    pub raw: &'ast str,
    pub id: NodeId,
    pub span: Span,
}

/// The kind of literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Int,
    Float,
    Imag,
    Char,
    String,
}

impl LiteralKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Int => "integer",
            Self::Float => "float",
            Self::Imag => "imaginary",
            Self::Char => "character",
            Self::String => "string",
        }
    }
}

/// `callee(args)` or `callee(args...)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallExpr<'ast> {
    pub callee: &'ast Expr<'ast>,
    pub args: &'ast [Expr<'ast>],
    /// Whether the last argument is spread with `...`.
    pub spread: bool,
    pub id: NodeId,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectorExpr<'ast> {
    pub object: &'ast Expr<'ast>,
    pub field: Ident<'ast>,
    pub id: NodeId,
    pub span: Span,
}

/// A composite literal such as `Log{d: d, sz: 0}`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeLit<'ast> {
    /// Literal type; absent for elided element types.
    pub ty: Option<TypeExpr<'ast>>,
    pub elements: &'ast [Element<'ast>],
    pub id: NodeId,
    pub span: Span,
}

/// One element of a composite literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Element<'ast> {
    /// `value`
    Positional(&'ast Expr<'ast>),
    /// `key: value`
    KeyValue(KeyValue<'ast>),
}

impl Element<'_> {
    pub fn span(&self) -> Span {
        match self {
            Self::Positional(e) => e.span(),
            Self::KeyValue(kv) => kv.span,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyValue<'ast> {
    pub key: &'ast Expr<'ast>,
    pub value: &'ast Expr<'ast>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryExpr<'ast> {
    pub left: &'ast Expr<'ast>,
    pub op: BinaryOp,
    pub right: &'ast Expr<'ast>,
    pub id: NodeId,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnaryExpr<'ast> {
    pub op: UnaryOp,
    pub operand: &'ast Expr<'ast>,
    pub id: NodeId,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarExpr<'ast> {
    pub operand: &'ast Expr<'ast>,
    pub id: NodeId,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParenExpr<'ast> {
    pub expr: &'ast Expr<'ast>,
    pub id: NodeId,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexExpr<'ast> {
    pub object: &'ast Expr<'ast>,
    pub index: &'ast Expr<'ast>,
    pub id: NodeId,
    pub span: Span,
}

/// `object[low:high]` or `object[low:high:max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceExpr<'ast> {
    pub object: &'ast Expr<'ast>,
    pub low: Option<&'ast Expr<'ast>>,
    pub high: Option<&'ast Expr<'ast>>,
    pub max: Option<&'ast Expr<'ast>>,
    /// Written with three indices.
    pub slice3: bool,
    pub id: NodeId,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeAssertExpr<'ast> {
    pub object: &'ast Expr<'ast>,
    /// `None` for `x.(type)` in a type switch.
    pub ty: Option<TypeExpr<'ast>>,
    pub id: NodeId,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuncLit<'ast> {
    pub ty: FuncType<'ast>,
    pub body: Block<'ast>,
    pub id: NodeId,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeOperand<'ast> {
    pub ty: TypeExpr<'ast>,
    pub id: NodeId,
    pub span: Span,
}
