//! Binary operators.

use gander_ir::{self as ir, BinOp};
use gander_syntax::ast::{BinaryExpr, BinaryOp};

use super::{ExprTranslator, Result};

/// Translate a binary expression. Operands are translated first, so an
/// error inside an operand wins over an unsupported operator.
pub(super) fn translate_binary(tr: &ExprTranslator<'_>, bin: &BinaryExpr<'_>) -> Result<ir::Expr> {
    let left = tr.translate(bin.left)?;
    let right = tr.translate(bin.right)?;
    let op = match bin.op {
        BinaryOp::Lt => BinOp::LessThan,
        BinaryOp::Gt => BinOp::GreaterThan,
        BinaryOp::Add => BinOp::Plus,
        BinaryOp::Sub => BinOp::Minus,
        BinaryOp::Eq => BinOp::Equals,
        other => {
            return Err(tr
                .fcx()
                .unsupported(bin.span, format!("binary operator {other}")));
        }
    };
    Ok(ir::Expr::binary(op, left, right))
}

#[cfg(test)]
mod tests {
    use bumpalo::Bump;
    use gander_core::DiagnosticKind;

    use super::*;
    use crate::test_support::{Fixture, expect_err};

    #[test]
    fn supported_operators() {
        let arena = Bump::new();
        let fx = Fixture::new(&arena);
        let cases = [
            (BinaryOp::Lt, BinOp::LessThan),
            (BinaryOp::Gt, BinOp::GreaterThan),
            (BinaryOp::Add, BinOp::Plus),
            (BinaryOp::Sub, BinOp::Minus),
            (BinaryOp::Eq, BinOp::Equals),
        ];
        for (source, target) in cases {
            let e = fx.b.binary(fx.u64_var("a"), source, fx.int("1"));
            assert_eq!(
                fx.expr(e),
                Ok(ir::Expr::binary(target, ir::Expr::ident("a"), ir::Expr::IntLit(1)))
            );
        }
    }

    #[test]
    fn other_operators_are_unsupported() {
        let arena = Bump::new();
        let fx = Fixture::new(&arena);
        for op in [BinaryOp::Mul, BinaryOp::Le, BinaryOp::Ne, BinaryOp::LogicalAnd, BinaryOp::Shl] {
            let e = fx.b.binary(fx.u64_var("a"), op, fx.u64_var("b"));
            let diag = expect_err(fx.expr(e), DiagnosticKind::Unsupported);
            assert_eq!(diag.message, format!("binary operator {op}"));
        }
    }

    #[test]
    fn operand_errors_come_first() {
        let arena = Bump::new();
        let fx = Fixture::new(&arena);
        let e = fx.b.binary(fx.b.string("x"), BinaryOp::Mul, fx.int("1"));
        let diag = expect_err(fx.expr(e), DiagnosticKind::Unsupported);
        assert_eq!(diag.message, "non-integer literals are not supported");
    }
}
