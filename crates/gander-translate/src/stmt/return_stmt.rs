//! `return` and `break`.

use gander_ir::{self as ir, Binding};
use gander_syntax::ast::{BranchKind, BranchStmt, ReturnStmt};

use super::{Cursor, Frame, StmtTranslator};
use crate::Result;

impl<'a> StmtTranslator<'a> {
    /// `return e1, ..., en` returns the collapsed tuple of the values.
    pub(super) fn return_stmt(
        &self,
        ret: &ReturnStmt<'_>,
        cursor: &mut Cursor<'_>,
        frame: Frame<'_>,
    ) -> Result<Binding> {
        self.expect_end(cursor, "return")?;
        if frame.in_loop() {
            return Err(self.fcx.future_work(ret.span, "return in loop (use break)"));
        }
        let values = self.exprs().translate_all(ret.results)?;
        Ok(Binding::anon(ir::Expr::ret(ir::Expr::tuple(values))))
    }

    /// An unlabeled `break` exits the loop. Loop `continue` is only valid
    /// right after a loop-variable assignment, which consumes it.
    pub(super) fn branch(
        &self,
        branch: &BranchStmt<'_>,
        cursor: &mut Cursor<'_>,
        frame: Frame<'_>,
    ) -> Result<Binding> {
        let fcx = &self.fcx;
        if !frame.in_loop() {
            return Err(fcx.unsupported(branch.span, "branching outside of a loop"));
        }
        if let Some(label) = branch.label {
            return Err(fcx.unsupported(
                branch.span,
                format!("labeled {} to {}", branch.kind, label.name),
            ));
        }
        if branch.kind != BranchKind::Break {
            return Err(fcx.unsupported(
                branch.span,
                format!("only break is supported to exit loops (found {})", branch.kind),
            ));
        }
        self.expect_end(cursor, "break")?;
        Ok(Binding::anon(ir::Expr::LoopRet))
    }
}

#[cfg(test)]
mod tests {
    use bumpalo::Bump;
    use gander_core::DiagnosticKind;
    use gander_ir::verify::verify_block;

    use super::*;
    use crate::test_support::{Fixture, expect_err};

    #[test]
    fn return_values_collapse() {
        let arena = Bump::new();
        let fx = Fixture::new(&arena);
        let b = &fx.b;

        let none = fx.body(&[b.ret(&[])]).unwrap();
        assert_eq!(none, ir::Block::return_unit());

        let one = fx.body(&[b.ret(&[fx.u64_var("x")])]).unwrap();
        assert_eq!(one.bindings, vec![Binding::anon(ir::Expr::ret(ir::Expr::ident("x")))]);

        let two = fx.body(&[b.ret(&[fx.u64_var("x"), fx.u64_var("y")])]).unwrap();
        assert_eq!(
            two.bindings,
            vec![Binding::anon(ir::Expr::ret(ir::Expr::Tuple(vec![
                ir::Expr::ident("x"),
                ir::Expr::ident("y"),
            ])))]
        );
        assert!(verify_block(&two).is_ok());
    }

    #[test]
    fn statement_after_return_is_rejected() {
        let arena = Bump::new();
        let fx = Fixture::new(&arena);
        let b = &fx.b;
        let body = [b.ret(&[]), b.expr_stmt(fx.call("f", &[]))];
        let diag = expect_err(fx.body(&body), DiagnosticKind::Unsupported);
        assert_eq!(diag.message, "statement following return");
    }

    #[test]
    fn break_outside_loop() {
        let arena = Bump::new();
        let fx = Fixture::new(&arena);
        let diag = expect_err(fx.body(&[fx.b.brk()]), DiagnosticKind::Unsupported);
        assert_eq!(diag.message, "branching outside of a loop");
    }

    #[test]
    fn return_inside_loop() {
        let arena = Bump::new();
        let fx = Fixture::new(&arena);
        let b = &fx.b;
        let body = [b.loop_stmt("i", fx.int("0"), &[b.ret(&[])])];
        let diag = expect_err(fx.body(&body), DiagnosticKind::FutureWork);
        assert_eq!(diag.message, "return in loop (use break)");
    }

    #[test]
    fn other_branches_inside_loop() {
        let arena = Bump::new();
        let fx = Fixture::new(&arena);
        let b = &fx.b;

        let bare_continue = [b.loop_stmt("i", fx.int("0"), &[b.cont()])];
        expect_err(fx.body(&bare_continue), DiagnosticKind::Unsupported);

        let labeled = [b.loop_stmt("i", fx.int("0"), &[b.branch(BranchKind::Break, Some("outer"))])];
        let diag = expect_err(fx.body(&labeled), DiagnosticKind::Unsupported);
        assert_eq!(diag.message, "labeled break to outer");

        let after_break = [b.loop_stmt("i", fx.int("0"), &[b.brk(), b.expr_stmt(fx.call("f", &[]))])];
        let diag = expect_err(fx.body(&after_break), DiagnosticKind::Unsupported);
        assert_eq!(diag.message, "statement following break");
    }
}
