//! Conditionals and early-return lifting.
//!
//! The `then` body must exit (`return`, `break`, or loop `continue`). What
//! happens next depends on what follows the `if` in its list:
//!
//! | else     | rest of list | result                                    |
//! |----------|--------------|-------------------------------------------|
//! | absent   | non-empty    | rest lifted into a synthesized else       |
//! | present  | empty        | else translated as written                |
//! | absent   | empty        | `Return tt`, or rejected inside a loop    |
//! | present  | non-empty    | rejected                                  |

use gander_ir::{self as ir, Binding};
use gander_syntax::ast::{IfStmt, Stmt};

use super::{Cursor, Frame, MAX_LIFT_DEPTH, StmtTranslator};
use crate::Result;

impl<'a> StmtTranslator<'a> {
    pub(super) fn if_stmt<'ast>(
        &self,
        s: &IfStmt<'ast>,
        cursor: &mut Cursor<'ast>,
        frame: Frame<'ast>,
    ) -> Result<Binding> {
        Ok(Binding::anon(self.if_expr(s, cursor, frame)?))
    }

    fn if_expr<'ast>(&self, s: &IfStmt<'ast>, cursor: &mut Cursor<'ast>, frame: Frame<'ast>) -> Result<ir::Expr> {
        let fcx = &self.fcx;
        if let Some(init) = s.init {
            return Err(fcx.unsupported(init.span(), "if statement with an init statement"));
        }
        let cond = self.exprs().translate(s.cond)?;
        let then = self.block(s.body.stmts, frame.nested())?;

        let then_exits = matches!(s.body.last(), Some(Stmt::Return(_) | Stmt::Branch(_)));
        if !then_exits {
            return Err(fcx.future_work(s.span, "non-terminal if statements are only partially supported"));
        }

        let else_ = match (cursor.has_next(), s.else_branch) {
            (true, Some(else_branch)) => {
                return Err(fcx.future_work(else_branch.span(), "else with early return"));
            }
            (true, None) => {
                if frame.lift_depth > MAX_LIFT_DEPTH {
                    return Err(fcx.future_work(
                        s.span,
                        "early return nested more than one level deep",
                    ));
                }
                ir::Expr::Block(self.block(cursor.remainder(), frame)?)
            }
            (false, None) if frame.in_loop() => {
                return Err(fcx.unsupported(s.span, "implicit loop continue"));
            }
            (false, None) => ir::Expr::ret(ir::Expr::unit()),
            (false, Some(Stmt::Block(block))) => ir::Expr::Block(self.block(block.stmts, frame.nested())?),
            (false, Some(Stmt::If(else_if))) => self.if_expr(else_if, cursor, frame)?,
            (false, Some(other)) => {
                return Err(fcx.nope(other.span(), "else branch is neither a block nor an if"));
            }
        };

        Ok(ir::Expr::if_(cond, ir::Expr::Block(then), else_))
    }
}
