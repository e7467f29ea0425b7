//! Type resolution: source type expressions to IR types.
//!
//! The IR has one scalar integer type, so the resolver is deliberately
//! narrow. Supported shapes:
//! - type names, classified by the checker's facts (struct, named, basic)
//! - `[]T` slices (fixed-length arrays are rejected)
//! - `map[uint64]T`, the only key type the target's hash table accepts
//! - `*T` pointers
//! - `filesys.File`, the one whitelisted qualified type

use gander_core::{FileId, Span};
use gander_ir::{self as ir, prim};
use gander_syntax::ast::{Expr, Ident, MapType, TypeExpr};
use gander_syntax::sema::{BasicKind, SemType};

use crate::{Context, FileContext, Result};

/// Maps source types to IR types.
pub struct TypeResolver<'a> {
    fcx: FileContext<'a>,
}

impl<'a> TypeResolver<'a> {
    pub fn new(cx: &'a Context, file: FileId) -> Self {
        Self::in_file(FileContext::new(cx, file))
    }

    pub(crate) fn in_file(fcx: FileContext<'a>) -> Self {
        Self { fcx }
    }

    /// Resolve a type expression.
    pub fn resolve(&self, ty: &TypeExpr<'_>) -> Result<ir::Type> {
        match ty {
            TypeExpr::Named(ident) => self.named(ident),
            TypeExpr::Qualified(q) => self.qualified(&q.package, &q.name, q.span),
            TypeExpr::Array(array) => {
                if !array.is_slice() {
                    return Err(self.fcx.unsupported(array.span, "array types"));
                }
                Ok(ir::Type::slice(self.resolve(&array.elem)?))
            }
            TypeExpr::Map(map) => Ok(ir::Type::map(self.map_value(map)?)),
            TypeExpr::Pointer(ptr) => Ok(ir::Type::ptr(self.resolve(&ptr.pointee)?)),
            TypeExpr::Struct(s) => Err(self.fcx.unsupported(s.span, "anonymous struct types")),
            TypeExpr::Func(f) => Err(self.fcx.unsupported(f.span, "function types")),
            TypeExpr::Interface(i) => Err(self.fcx.unsupported(i.span, "interface types")),
            TypeExpr::Chan(c) => Err(self.fcx.unsupported(c.span, "channel types")),
        }
    }

    /// Value type of a map. The key must be `uint64`.
    pub fn map_value(&self, map: &MapType<'_>) -> Result<ir::Type> {
        match map.key {
            TypeExpr::Named(key) if key.is(prim::UINT64) => self.resolve(&map.value),
            key => Err(self
                .fcx
                .unsupported(key.span(), format!("maps must be from uint64 (not {key})"))),
        }
    }

    /// Resolve a type written in expression position, as in `new(T)`.
    ///
    /// The front end may hand such operands over either as a type operand or
    /// as the plain expression the parser saw (`Log`, `filesys.File`, `*Log`).
    pub fn resolve_operand(&self, expr: &Expr<'_>) -> Result<ir::Type> {
        match expr {
            Expr::Type(operand) => self.resolve(&operand.ty),
            Expr::Ident(ident) => self.named(ident),
            Expr::Selector(sel) => match sel.object.as_ident() {
                Some(package) => self.qualified(&package, &sel.field, sel.span),
                None => Err(self.fcx.unsupported(sel.span, "selector for unknown type")),
            },
            Expr::Star(star) => Ok(ir::Type::ptr(self.resolve_operand(star.operand)?)),
            Expr::Paren(paren) => self.resolve_operand(paren.expr),
            other => Err(self.fcx.nope(other.span(), "expected a type operand")),
        }
    }

    /// Map a checker type to an IR type. Only named and basic types have a
    /// spelling; everything else must come through a type expression.
    pub fn from_sem(&self, span: Span, ty: &SemType) -> Result<ir::Type> {
        match ty {
            SemType::Named(named) => match named.underlying.underlying() {
                SemType::Struct(_) => Ok(ir::Type::structure(&named.name)),
                _ => Ok(ir::Type::ident(&named.name)),
            },
            SemType::Basic(kind) => match kind {
                BasicKind::String => Ok(ir::Type::ident(prim::PATH)),
                BasicKind::Uint64 => Ok(ir::Type::ident(prim::UINT64)),
                BasicKind::Uint8 => Ok(ir::Type::ident(prim::BYTE)),
                _ => Err(self.fcx.todo(span, "explicitly handle basic types")),
            },
            other => Err(self
                .fcx
                .unsupported(span, format!("unnamed type {other} in type position"))),
        }
    }

    fn named(&self, ident: &Ident<'_>) -> Result<ir::Type> {
        match self.fcx.type_of(ident.id) {
            Some(ty) => self.from_sem(ident.span, ty),
            None => Err(self
                .fcx
                .nope(ident.span, format!("no type recorded for {}", ident.name))),
        }
    }

    fn qualified(&self, package: &Ident<'_>, name: &Ident<'_>, span: Span) -> Result<ir::Type> {
        if package.is("filesys") && name.is("File") {
            return Ok(ir::Type::ident(prim::FD));
        }
        Err(self.fcx.unsupported(
            span,
            format!("selector for unknown type {}.{}", package.name, name.name),
        ))
    }
}
