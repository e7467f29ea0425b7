//! Top-level declarations and source files.

use crate::ast::types::{Field, FuncType, TypeExpr};
use crate::ast::{Block, Expr, Ident, LiteralExpr};
use gander_core::{FileId, Span};

/// One parsed source file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceFile<'ast> {
    /// Position index entry for this file.
    pub file: FileId,
    /// The `package` clause name.
    pub package: Ident<'ast>,
    pub decls: &'ast [Decl<'ast>],
    pub span: Span,
}

/// A top-level declaration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decl<'ast> {
    /// `func name(...) ... { ... }`, with or without a receiver
    Func(&'ast FuncDecl<'ast>),
    /// `import`, `const`, `var`, or `type` group
    Gen(&'ast GenDecl<'ast>),
    /// A declaration the front end could not make sense of
    Bad(BadDecl),
}

impl<'ast> Decl<'ast> {
    pub fn span(&self) -> Span {
        match self {
            Self::Func(d) => d.span,
            Self::Gen(d) => d.span,
            Self::Bad(d) => d.span,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuncDecl<'ast> {
    /// Doc comment text, without comment markers.
    pub doc: Option<&'ast str>,
    /// Receiver list; present for methods.
    pub recv: Option<&'ast [Field<'ast>]>,
    pub name: Ident<'ast>,
    pub ty: FuncType<'ast>,
    /// Absent for external (bodiless) declarations.
    pub body: Option<Block<'ast>>,
    pub span: Span,
}

impl FuncDecl<'_> {
    pub fn is_method(&self) -> bool {
        self.recv.is_some()
    }
}

/// The keyword introducing a [`GenDecl`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenKind {
    Import,
    Const,
    Var,
    Type,
}

impl GenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Import => "import",
            Self::Const => "const",
            Self::Var => "var",
            Self::Type => "type",
        }
    }
}

/// A generic declaration: one keyword with one or more specs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenDecl<'ast> {
    /// Doc comment text, without comment markers.
    pub doc: Option<&'ast str>,
    pub kind: GenKind,
    pub specs: &'ast [Spec<'ast>],
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Spec<'ast> {
    Import(ImportSpec<'ast>),
    Value(ValueSpec<'ast>),
    Type(TypeSpec<'ast>),
}

impl Spec<'_> {
    pub fn span(&self) -> Span {
        match self {
            Self::Import(s) => s.span,
            Self::Value(s) => s.span,
            Self::Type(s) => s.span,
        }
    }
}

/// `import name "path"`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImportSpec<'ast> {
    /// Local rename, including `.` and `_`.
    pub name: Option<Ident<'ast>>,
    pub path: LiteralExpr<'ast>,
    pub span: Span,
}

/// `a, b T = x, y` inside a `var` or `const` group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueSpec<'ast> {
    pub names: &'ast [Ident<'ast>],
    pub ty: Option<TypeExpr<'ast>>,
    pub values: &'ast [Expr<'ast>],
    pub span: Span,
}

/// `Name T` inside a `type` group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeSpec<'ast> {
    pub name: Ident<'ast>,
    pub ty: TypeExpr<'ast>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadDecl {
    pub span: Span,
}
