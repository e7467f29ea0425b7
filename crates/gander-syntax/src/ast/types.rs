//! Type expressions as written in source.
//!
//! These are syntax only. What a type expression denotes is a semantic fact
//! (see [`crate::sema::SemType`]).

use std::fmt;

use crate::ast::{Expr, Ident};
use gander_core::Span;

/// A type expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypeExpr<'ast> {
    /// `T`
    Named(Ident<'ast>),
    /// `pkg.T`
    Qualified(QualifiedType<'ast>),
    /// `[N]T`, or `[]T` when `len` is absent
    Array(&'ast ArrayType<'ast>),
    /// `map[K]V`
    Map(&'ast MapType<'ast>),
    /// `*T`
    Pointer(&'ast PointerType<'ast>),
    /// `struct { ... }`
    Struct(&'ast StructType<'ast>),
    /// `func(...) ...`
    Func(&'ast FuncType<'ast>),
    /// `interface { ... }`
    Interface(InterfaceType),
    /// `chan T`
    Chan(&'ast ChanType<'ast>),
}

impl<'ast> TypeExpr<'ast> {
    pub fn span(&self) -> Span {
        match self {
            Self::Named(t) => t.span,
            Self::Qualified(t) => t.span,
            Self::Array(t) => t.span,
            Self::Map(t) => t.span,
            Self::Pointer(t) => t.span,
            Self::Struct(t) => t.span,
            Self::Func(t) => t.span,
            Self::Interface(t) => t.span,
            Self::Chan(t) => t.span,
        }
    }
}

/// `pkg.Name`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualifiedType<'ast> {
    pub package: Ident<'ast>,
    pub name: Ident<'ast>,
    pub span: Span,
}

/// An array or slice type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrayType<'ast> {
    /// Length expression; `None` for a slice.
    pub len: Option<&'ast Expr<'ast>>,
    pub elem: TypeExpr<'ast>,
    pub span: Span,
}

impl ArrayType<'_> {
    /// Whether this is `[]T` rather than `[N]T`.
    pub fn is_slice(&self) -> bool {
        self.len.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapType<'ast> {
    pub key: TypeExpr<'ast>,
    pub value: TypeExpr<'ast>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerType<'ast> {
    pub pointee: TypeExpr<'ast>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StructType<'ast> {
    pub fields: &'ast [Field<'ast>],
    pub span: Span,
}

/// A function signature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuncType<'ast> {
    pub params: &'ast [Field<'ast>],
    /// Result list; `None` when the function returns nothing.
    pub results: Option<&'ast [Field<'ast>]>,
    pub span: Span,
}

impl<'ast> FuncType<'ast> {
    /// The declared results, empty when there are none.
    pub fn results(&self) -> &'ast [Field<'ast>] {
        self.results.unwrap_or(&[])
    }
}

/// Interface bodies are never inspected, only rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterfaceType {
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChanType<'ast> {
    pub elem: TypeExpr<'ast>,
    pub span: Span,
}

/// A field or parameter group: `a, b T`, or just `T` when unnamed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field<'ast> {
    pub names: &'ast [Ident<'ast>],
    pub ty: TypeExpr<'ast>,
    pub span: Span,
}

impl fmt::Display for TypeExpr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name.name),
            Self::Qualified(q) => write!(f, "{}.{}", q.package.name, q.name.name),
            Self::Array(a) => match a.len {
                None => write!(f, "[]{}", a.elem),
                Some(Expr::Literal(lit)) => write!(f, "[{}]{}", lit.raw, a.elem),
                Some(_) => write!(f, "[...]{}", a.elem),
            },
            Self::Map(m) => write!(f, "map[{}]{}", m.key, m.value),
            Self::Pointer(p) => write!(f, "*{}", p.pointee),
            Self::Struct(_) => f.write_str("struct{...}"),
            Self::Func(_) => f.write_str("func(...)"),
            Self::Interface(_) => f.write_str("interface{...}"),
            Self::Chan(c) => write!(f, "chan {}", c.elem),
        }
    }
}
