//! Unary operators and pointer dereference.

use gander_ir::{self as ir, prim};
use gander_syntax::ast::{StarExpr, UnaryExpr, UnaryOp};

use super::{ExprTranslator, Result};

pub(super) fn translate_unary(tr: &ExprTranslator<'_>, un: &UnaryExpr<'_>) -> Result<ir::Expr> {
    match un.op {
        UnaryOp::Not => Ok(ir::Expr::not(tr.translate(un.operand)?)),
        UnaryOp::AddrOf => Err(tr.fcx().unsupported(un.span, "address-of (&) expressions")),
        other => Err(tr
            .fcx()
            .unsupported(un.span, format!("unary expression {other}"))),
    }
}

/// `*p` reads the referenced cell.
pub(super) fn translate_deref(tr: &ExprTranslator<'_>, star: &StarExpr<'_>) -> Result<ir::Expr> {
    Ok(ir::Expr::call(prim::READ_IOREF, vec![tr.translate(star.operand)?]))
}
