//! Loops over one loop-carried variable.

use gander_ir::{self as ir, Binding};
use gander_syntax::ast::{AssignOp, ForStmt, Stmt};

use super::{Frame, StmtTranslator};
use crate::Result;

impl<'a> StmtTranslator<'a> {
    /// `for i := e; ; { ... }` becomes `loop (fun i => body) e`. Every path
    /// through the body must end in `continue` (after assigning `i`) or
    /// `break`.
    pub(super) fn for_stmt<'ast>(&self, s: &ForStmt<'ast>) -> Result<Binding> {
        let fcx = &self.fcx;
        if let Some(bad) = s.cond.map(|c| c.span()).or(s.post.map(|p| p.span())) {
            return Err(fcx.unsupported(bad, "loop conditions and post statements are unsupported"));
        }
        let Some(init) = s.init else {
            return Err(fcx.future_work(s.span, "loops without a loop variable"));
        };
        let (var, initial) = self.loop_var(init)?;

        let body = self.sequence(s.body.stmts, Frame::loop_body(var))?.finish_raw();
        if !body.exits_loop_iteration() {
            return Err(fcx.unsupported(
                s.body.span,
                "implicit control flow in loop (expected continue or break)",
            ));
        }
        Ok(Binding::anon(ir::Expr::loop_(var, initial, body)))
    }

    fn loop_var<'ast>(&self, init: &Stmt<'ast>) -> Result<(&'ast str, ir::Expr)> {
        let fcx = &self.fcx;
        let Stmt::Assign(assign) = init else {
            return Err(fcx.unsupported(init.span(), "loop initialization must be a single assignment"));
        };
        let (AssignOp::Define, [lhs], [rhs]) = (assign.op, assign.lhs, assign.rhs) else {
            return Err(fcx.unsupported(assign.span, "loop initialization must be a single assignment"));
        };
        let Some(ident) = lhs.as_ident() else {
            return Err(fcx.nope(assign.span, "definition of non-identifier"));
        };
        Ok((ident.name, self.exprs().translate(rhs)?))
    }
}
