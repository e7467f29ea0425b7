//! Statement sequencing: statement lists to IR binding sequences.
//!
//! The [`StmtTranslator`] walks a statement list with a [`Cursor`], turning
//! each statement into one [`Binding`]. Some statements consume what follows
//! them:
//! - an `if` whose body exits lifts the rest of the list into its else branch
//! - an assignment to the loop variable consumes the `continue` after it
//!
//! Terminals (`return`, `break`, the loop `continue`) must end their list.
//! A statement after one is rejected, never dropped, and the block builder
//! refuses to append past a terminal in any case.
//!
//! Translation state is a [`Frame`]: whether we are inside a loop body (and
//! which variable it carries), and how deeply early-return lifting is nested.
//!
//! # Example
//!
//! ```ignore
//! let stmts = StmtTranslator::new(&cx, file);
//! let body = stmts.function_body(&func.body)?;
//! ```

mod assign;
mod cursor;
mod for_stmt;
mod if_stmt;
mod return_stmt;

pub(crate) use cursor::Cursor;

use gander_core::FileId;
use gander_ir::{self as ir, Binding, BlockBuilder};
use gander_syntax::ast::{Block, Stmt};

use crate::expr::ExprTranslator;
use crate::{Context, FileContext, Result};

/// Deepest `then` body in which early-return lifting is still accepted.
const MAX_LIFT_DEPTH: u32 = 1;

/// Where a statement list sits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Frame<'ast> {
    /// Variable carried by the enclosing loop, if inside one.
    loop_var: Option<&'ast str>,
    /// Number of enclosing `then`/`else` bodies.
    lift_depth: u32,
}

impl<'ast> Frame<'ast> {
    pub fn function() -> Self {
        Self::default()
    }

    pub fn loop_body(loop_var: &'ast str) -> Self {
        Self {
            loop_var: Some(loop_var),
            lift_depth: 0,
        }
    }

    /// The frame for a branch body of a conditional.
    pub fn nested(self) -> Self {
        Self {
            lift_depth: self.lift_depth + 1,
            ..self
        }
    }

    pub fn in_loop(&self) -> bool {
        self.loop_var.is_some()
    }
}

/// Sequences the statements of one file.
pub struct StmtTranslator<'a> {
    fcx: FileContext<'a>,
}

impl<'a> StmtTranslator<'a> {
    pub fn new(cx: &'a Context, file: FileId) -> Self {
        Self::in_file(FileContext::new(cx, file))
    }

    pub(crate) fn in_file(fcx: FileContext<'a>) -> Self {
        Self { fcx }
    }

    fn exprs(&self) -> ExprTranslator<'a> {
        ExprTranslator::in_file(self.fcx)
    }

    /// Sequence a function body. An empty body returns unit.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn function_body(&self, body: &Block<'_>) -> Result<ir::Block> {
        self.block(body.stmts, Frame::function())
    }

    fn block<'ast>(&self, stmts: &'ast [Stmt<'ast>], frame: Frame<'ast>) -> Result<ir::Block> {
        Ok(self.sequence(stmts, frame)?.finish())
    }

    fn sequence<'ast>(&self, stmts: &'ast [Stmt<'ast>], frame: Frame<'ast>) -> Result<BlockBuilder> {
        let mut cursor = Cursor::new(stmts);
        let mut block = BlockBuilder::new();
        while let Some(stmt) = cursor.next() {
            let binding = self.stmt(stmt, &mut cursor, frame)?;
            if block.push(binding).is_err() {
                return Err(self.fcx.nope(stmt.span(), "binding follows a terminal"));
            }
        }
        Ok(block)
    }

    fn stmt<'ast>(
        &self,
        stmt: &'ast Stmt<'ast>,
        cursor: &mut Cursor<'ast>,
        frame: Frame<'ast>,
    ) -> Result<Binding> {
        let fcx = &self.fcx;
        match stmt {
            Stmt::Expr(s) => Ok(Binding::anon(self.exprs().translate(s.expr)?)),
            Stmt::Assign(s) => self.assign(s, cursor, frame),
            Stmt::Return(s) => self.return_stmt(s, cursor, frame),
            Stmt::Branch(s) => self.branch(s, cursor, frame),
            Stmt::Block(block) => self.nested_block(block, cursor, frame),
            Stmt::If(s) => self.if_stmt(s, cursor, frame),
            Stmt::For(s) => self.for_stmt(s),

            Stmt::Go(s) => Err(fcx.todo(s.span, "go func(){ ... } statements")),
            Stmt::IncDec(s) => Err(fcx.unsupported(s.span, "increment and decrement statements")),
            Stmt::Range(s) => Err(fcx.unsupported(s.span, "range loops")),
            Stmt::Defer(s) => Err(fcx.unsupported(s.span, "defer statements")),
            Stmt::Switch(s) => Err(fcx.unsupported(s.span, "switch statements")),
            Stmt::Decl(s) => Err(fcx.unsupported(s.span, "local declarations")),
            Stmt::Labeled(s) => Err(fcx.unsupported(s.span, "labeled statements")),
            Stmt::Empty(s) => Err(fcx.unsupported(s.span, "empty statements")),
        }
    }

    /// `{ ... }` is sequenced in the same frame. It cannot see the statements
    /// after it, so it may only exit when nothing follows.
    fn nested_block<'ast>(
        &self,
        block: &Block<'ast>,
        cursor: &mut Cursor<'ast>,
        frame: Frame<'ast>,
    ) -> Result<Binding> {
        if block.is_empty() {
            return Err(self.fcx.unsupported(block.span, "empty block statement"));
        }
        let inner = self.sequence(block.stmts, frame)?;
        if inner.is_terminated() {
            self.expect_end(cursor, "a block that exits")?;
        }
        let inner = inner.finish();
        if inner.can_exit() {
            self.expect_end(cursor, "a block that may exit")?;
        }
        Ok(Binding::anon(ir::Expr::Block(inner)))
    }

    /// Reject whatever follows a terminal in the same list.
    fn expect_end(&self, cursor: &Cursor<'_>, what: &str) -> Result<()> {
        match cursor.peek() {
            Some(next) => Err(self
                .fcx
                .unsupported(next.span(), format!("statement following {what}"))),
            None => Ok(()),
        }
    }
}
