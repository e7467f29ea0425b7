//! Definitions and assignments.
//!
//! `:=` binds names. Plain `=` is only accepted where it has a functional
//! reading: the loop variable (followed by `continue`), a map entry, or the
//! cell behind a pointer.

use gander_ir::{self as ir, Binding, prim};
use gander_syntax::ast::{AssignOp, AssignStmt, BranchKind, Expr, IndexExpr, Stmt};
use gander_syntax::sema::SemType;

use super::{Cursor, Frame, StmtTranslator};
use crate::Result;

impl<'a> StmtTranslator<'a> {
    pub(super) fn assign<'ast>(
        &self,
        s: &AssignStmt<'ast>,
        cursor: &mut Cursor<'ast>,
        frame: Frame<'ast>,
    ) -> Result<Binding> {
        let fcx = &self.fcx;
        if s.op == AssignOp::Define {
            return self.define(s);
        }
        if s.op.is_compound() {
            return Err(fcx.unsupported(s.span, format!("compound assignment {}", s.op)));
        }
        let ([lhs], [rhs]) = (s.lhs, s.rhs) else {
            return Err(fcx.unsupported(s.span, "multiple assignment"));
        };

        match lhs.unparen() {
            Expr::Ident(ident) => match frame.loop_var {
                Some(var) if ident.is(var) => self.loop_assign(var, rhs, cursor),
                Some(var) => Err(fcx.unsupported(
                    s.span,
                    format!("expected assignment to loop variable {var} (found {})", ident.name),
                )),
                None => Err(fcx.unsupported(s.span, "general re-assignment")),
            },
            Expr::Index(index) => self.index_update(index, rhs),
            Expr::Star(star) => {
                let exprs = self.exprs();
                let ptr = exprs.translate(star.operand)?;
                let value = exprs.translate(rhs)?;
                Ok(Binding::anon(ir::Expr::call(prim::WRITE_IOREF, vec![ptr, value])))
            }
            _ => Err(fcx.unsupported(s.span, "assigning to complex expression")),
        }
    }

    /// `a, b := f()` binds both names to one expression.
    fn define(&self, s: &AssignStmt<'_>) -> Result<Binding> {
        let fcx = &self.fcx;
        let [rhs] = s.rhs else {
            return Err(fcx.future_work(s.span, "multiple defines (split them up)"));
        };
        let mut names = Vec::with_capacity(s.lhs.len());
        for lhs in s.lhs {
            let Some(ident) = lhs.as_ident() else {
                return Err(fcx.nope(lhs.span(), "defining a non-identifier"));
            };
            names.push(ident.name.to_string());
        }
        Ok(Binding::new(names, self.exprs().translate(rhs)?))
    }

    /// `i = e; continue` carries `e` into the next iteration.
    fn loop_assign<'ast>(&self, var: &str, rhs: &Expr<'_>, cursor: &mut Cursor<'ast>) -> Result<Binding> {
        let fcx = &self.fcx;
        match cursor.next() {
            Some(Stmt::Branch(branch)) if branch.kind == BranchKind::Continue && branch.label.is_none() => {}
            Some(other) => {
                return Err(fcx.unsupported(
                    other.span(),
                    format!("expected continue following {var} loop assignment"),
                ));
            }
            None => {
                return Err(fcx.unsupported(
                    rhs.span(),
                    "implicit control flow in loop (expected continue)",
                ));
            }
        }
        self.expect_end(cursor, "continue")?;
        Ok(Binding::anon(ir::Expr::loop_continue(self.exprs().translate(rhs)?)))
    }

    /// `m[k] = v` inserts into a map.
    fn index_update(&self, index: &IndexExpr<'_>, rhs: &Expr<'_>) -> Result<Binding> {
        let fcx = &self.fcx;
        let Some(ty) = fcx.type_of(index.object.id()) else {
            return Err(fcx.nope(index.object.span(), "no type recorded for updated object"));
        };
        match ty.underlying() {
            SemType::Map(..) => {
                let exprs = self.exprs();
                let map = exprs.translate(index.object)?;
                let key = exprs.translate(index.index)?;
                let value = exprs.translate(rhs)?;
                Ok(Binding::anon(ir::Expr::call(
                    prim::HASH_TABLE_ALTER,
                    vec![map, key, ir::Expr::HashTableInsert(Box::new(value))],
                )))
            }
            SemType::Slice(_) => Err(fcx.todo(index.span, "slice updates")),
            _ => Err(fcx.unsupported(
                index.span,
                format!("index update to unexpected target of type {ty}"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use bumpalo::Bump;
    use gander_core::DiagnosticKind;

    use super::*;
    use crate::test_support::{Fixture, expect_err};

    #[test]
    fn multi_name_define() {
        let arena = Bump::new();
        let fx = Fixture::new(&arena);
        let b = &fx.b;
        let body = [b.define(&["v", "ok"], &[fx.call("lookup", &[])]), b.ret(&[])];
        let block = fx.body(&body).unwrap();
        assert_eq!(
            block.bindings[0],
            Binding::new(vec!["v".into(), "ok".into()], ir::Expr::call("lookup", vec![]))
        );
    }

    #[test]
    fn define_restrictions() {
        let arena = Bump::new();
        let fx = Fixture::new(&arena);
        let b = &fx.b;

        let two = b.define(&["a", "b"], &[fx.int("1"), fx.int("2")]);
        expect_err(fx.body(&[two]), DiagnosticKind::FutureWork);

        let field = b.selector(fx.u64_var("s"), "f");
        let bad = b.assign_multi(&[field], AssignOp::Define, &[fx.int("1")]);
        expect_err(fx.body(&[bad]), DiagnosticKind::Nope);
    }

    #[test]
    fn map_insert() {
        let arena = Bump::new();
        let fx = Fixture::new(&arena);
        let b = &fx.b;
        let m = fx.var("m", SemType::map(SemType::uint64(), SemType::uint64()));
        let body = [b.assign(b.index(m, fx.int("1")), fx.int("2"))];
        let block = fx.body(&body).unwrap();
        assert_eq!(
            block.bindings[0].expr,
            ir::Expr::call(
                "Data.hashTableAlter",
                vec![
                    ir::Expr::ident("m"),
                    ir::Expr::IntLit(1),
                    ir::Expr::HashTableInsert(Box::new(ir::Expr::IntLit(2))),
                ]
            )
        );
    }

    #[test]
    fn pointer_write() {
        let arena = Bump::new();
        let fx = Fixture::new(&arena);
        let b = &fx.b;
        let p = fx.var("p", SemType::pointer(SemType::uint64()));
        let body = [b.assign(b.star(p), fx.u64_var("v"))];
        let block = fx.body(&body).unwrap();
        assert_eq!(
            block.bindings[0].expr,
            ir::Expr::call("Data.writeIORef", vec![ir::Expr::ident("p"), ir::Expr::ident("v")])
        );
    }

    #[test]
    fn rejected_assignments() {
        let arena = Bump::new();
        let fx = Fixture::new(&arena);
        let b = &fx.b;

        let plain = b.assign(fx.u64_var("x"), fx.int("1"));
        let diag = expect_err(fx.body(&[plain]), DiagnosticKind::Unsupported);
        assert_eq!(diag.message, "general re-assignment");

        let compound = b.assign_op(fx.u64_var("x"), AssignOp::AddAssign, fx.int("1"));
        expect_err(fx.body(&[compound]), DiagnosticKind::Unsupported);

        let multi = b.assign_multi(
            &[fx.u64_var("x"), fx.u64_var("y")],
            AssignOp::Assign,
            &[fx.u64_var("y"), fx.u64_var("x")],
        );
        let diag = expect_err(fx.body(&[multi]), DiagnosticKind::Unsupported);
        assert_eq!(diag.message, "multiple assignment");

        let buf = fx.var("buf", SemType::slice(SemType::byte()));
        let slice_update = b.assign(b.index(buf, fx.int("0")), fx.int("1"));
        expect_err(fx.body(&[slice_update]), DiagnosticKind::Todo);

        let field = b.assign(b.selector(fx.u64_var("s"), "f"), fx.int("1"));
        let diag = expect_err(fx.body(&[field]), DiagnosticKind::Unsupported);
        assert_eq!(diag.message, "assigning to complex expression");
    }

    #[test]
    fn loop_variable_assignment_needs_continue() {
        let arena = Bump::new();
        let fx = Fixture::new(&arena);
        let b = &fx.b;

        let missing = [b.loop_stmt("i", fx.int("0"), &[b.assign(fx.u64_var("i"), fx.int("1"))])];
        let diag = expect_err(fx.body(&missing), DiagnosticKind::Unsupported);
        assert_eq!(diag.message, "implicit control flow in loop (expected continue)");

        let wrong = [b.loop_stmt(
            "i",
            fx.int("0"),
            &[b.assign(fx.u64_var("i"), fx.int("1")), b.brk()],
        )];
        let diag = expect_err(fx.body(&wrong), DiagnosticKind::Unsupported);
        assert_eq!(diag.message, "expected continue following i loop assignment");

        let other_var = [b.loop_stmt(
            "i",
            fx.int("0"),
            &[b.assign(fx.u64_var("j"), fx.int("1")), b.cont()],
        )];
        expect_err(fx.body(&other_var), DiagnosticKind::Unsupported);

        let trailing = [b.loop_stmt(
            "i",
            fx.int("0"),
            &[b.assign(fx.u64_var("i"), fx.int("1")), b.cont(), b.brk()],
        )];
        let diag = expect_err(fx.body(&trailing), DiagnosticKind::Unsupported);
        assert_eq!(diag.message, "statement following continue");
    }
}
