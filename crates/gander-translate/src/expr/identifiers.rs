//! Identifier expressions.
//!
//! Names the program declared become IR identifiers. `nil` becomes the
//! typed empty-slice sentinel. Every other predeclared name (`true`,
//! `iota`, a type name used as a value) is rejected.

use gander_ir::{self as ir, prim};
use gander_syntax::ast::Ident;
use gander_syntax::sema::{BasicKind, ObjectKind, SemType};

use super::{ExprTranslator, Result};

/// Translate an identifier reference.
pub(super) fn translate_ident(tr: &ExprTranslator<'_>, ident: &Ident<'_>) -> Result<ir::Expr> {
    let fcx = tr.fcx();
    match fcx.object_of(ident.id) {
        Some(kind) if kind.is_value() => Ok(ir::Expr::ident(ident.name)),
        Some(ObjectKind::Nil) => translate_nil(tr, ident),
        Some(_) => Err(fcx.unsupported(ident.span, format!("special identifier {}", ident.name))),
        None => Err(fcx.nope(ident.span, format!("unresolved identifier {}", ident.name))),
    }
}

fn translate_nil(tr: &ExprTranslator<'_>, ident: &Ident<'_>) -> Result<ir::Expr> {
    let fcx = tr.fcx();
    match fcx.type_of(ident.id) {
        Some(SemType::Basic(BasicKind::UntypedNil)) => Ok(ir::Expr::call(
            prim::SLICE_NIL,
            vec![ir::Expr::Type(ir::Type::ident(prim::ANY_TYPE))],
        )),
        Some(SemType::Basic(_)) => Err(fcx.nope(ident.span, "nil that is of a non-nil basic kind")),
        Some(ty) => Err(fcx.todo(ident.span, format!("take advantage of nil type {ty}"))),
        None => Err(fcx.nope(ident.span, "no type recorded for nil")),
    }
}

#[cfg(test)]
mod tests {
    use bumpalo::Bump;
    use gander_core::DiagnosticKind;

    use super::*;
    use crate::test_support::{Fixture, expect_err};

    #[test]
    fn declared_names_become_identifiers() {
        let arena = Bump::new();
        let fx = Fixture::new(&arena);
        for (name, kind) in [
            ("sz", ObjectKind::Var),
            ("Open", ObjectKind::Func),
            ("BlockSize", ObjectKind::Const),
        ] {
            let expr = fx.object(name, kind);
            assert_eq!(fx.expr(expr), Ok(ir::Expr::ident(name)));
        }
    }

    #[test]
    fn untyped_nil_is_the_empty_slice() {
        let arena = Bump::new();
        let fx = Fixture::new(&arena);
        let nil = fx.nil();
        assert_eq!(
            fx.expr(nil),
            Ok(ir::Expr::call(
                "slice.nil",
                vec![ir::Expr::Type(ir::Type::ident("_"))]
            ))
        );
    }

    #[test]
    fn other_nil_classifications() {
        let arena = Bump::new();
        let fx = Fixture::new(&arena);

        let typed = fx.object("nil", ObjectKind::Nil);
        fx.typed(typed, SemType::slice(SemType::byte()));
        let diag = expect_err(fx.expr(typed), DiagnosticKind::Todo);
        assert_eq!(diag.message, "take advantage of nil type []byte");

        let basic = fx.object("nil", ObjectKind::Nil);
        fx.typed(basic, SemType::uint64());
        expect_err(fx.expr(basic), DiagnosticKind::Nope);

        let untyped = fx.object("nil", ObjectKind::Nil);
        expect_err(fx.expr(untyped), DiagnosticKind::Nope);
    }

    #[test]
    fn predeclared_names_are_special() {
        let arena = Bump::new();
        let fx = Fixture::new(&arena);
        let t = fx.object("true", ObjectKind::Builtin);
        let diag = expect_err(fx.expr(t), DiagnosticKind::Unsupported);
        assert_eq!(diag.message, "special identifier true");

        let ty = fx.object("Log", ObjectKind::TypeName);
        expect_err(fx.expr(ty), DiagnosticKind::Unsupported);
    }

    #[test]
    fn unresolved_names_are_defects() {
        let arena = Bump::new();
        let fx = Fixture::new(&arena);
        let x = fx.b.name("x");
        let diag = expect_err(fx.expr(x), DiagnosticKind::Nope);
        assert_eq!(diag.position.to_string(), "test.go:1:1");
    }
}
