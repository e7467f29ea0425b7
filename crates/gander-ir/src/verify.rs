//! IR verification pass: structural validation of translated output.
//!
//! The translator is supposed to produce well-formed blocks by construction.
//! This pass re-checks the shape of a finished tree so tests (and callers
//! who build IR by hand) catch violations early:
//! - every block has at least one binding
//! - a terminal binding is always the last one in its block
//! - every path through a loop body ends in `LoopContinue` or `LoopRet`

use thiserror::Error;

use crate::{Block, Decl, Expr, File};

// ===========================================================================
// Public API
// ===========================================================================

/// A structural violation found by [`verify_file`] or [`verify_block`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    #[error("empty block in {context}")]
    EmptyBlock { context: String },

    #[error("binding {index} in {context} follows a terminal binding")]
    BindingAfterTerminal { context: String, index: usize },

    #[error("loop over {loop_var} in {context} can finish an iteration without continue or break")]
    LoopFallthrough { context: String, loop_var: String },
}

/// Verify every function body in a file. Returns the first violation.
pub fn verify_file(file: &File) -> Result<(), VerifyError> {
    for decl in file {
        if let Decl::Func(func) = decl {
            Verifier { context: &func.name }.block(&func.body)?;
        }
    }
    Ok(())
}

/// Verify a single block and everything nested in it.
pub fn verify_block(block: &Block) -> Result<(), VerifyError> {
    Verifier { context: "block" }.block(block)
}

// ===========================================================================
// Verifier
// ===========================================================================

struct Verifier<'a> {
    context: &'a str,
}

impl Verifier<'_> {
    fn block(&self, block: &Block) -> Result<(), VerifyError> {
        if block.is_empty() {
            return Err(VerifyError::EmptyBlock {
                context: self.context.to_string(),
            });
        }
        for (index, binding) in block.iter().enumerate() {
            if index > 0 && block.bindings[index - 1].is_terminal() {
                return Err(VerifyError::BindingAfterTerminal {
                    context: self.context.to_string(),
                    index,
                });
            }
            self.expr(&binding.expr)?;
        }
        Ok(())
    }

    fn expr(&self, expr: &Expr) -> Result<(), VerifyError> {
        match expr {
            Expr::Ident(_) | Expr::IntLit(_) | Expr::Type(_) | Expr::LoopRet => Ok(()),
            Expr::Call(call) | Expr::PureCall(call) => {
                call.args.iter().try_for_each(|arg| self.expr(arg))
            }
            Expr::Binary { left, right, .. } => {
                self.expr(left)?;
                self.expr(right)
            }
            Expr::Proj { arg, .. } => self.expr(arg),
            Expr::StructLit(lit) => lit.fields.iter().try_for_each(|f| self.expr(&f.value)),
            Expr::Tuple(values) => values.iter().try_for_each(|v| self.expr(v)),
            Expr::If { cond, then, else_ } => {
                self.expr(cond)?;
                self.expr(then)?;
                self.expr(else_)
            }
            Expr::Loop(lp) => {
                self.expr(&lp.initial)?;
                self.block(&lp.body)?;
                if !lp.body.exits_loop_iteration() {
                    return Err(VerifyError::LoopFallthrough {
                        context: self.context.to_string(),
                        loop_var: lp.loop_var.clone(),
                    });
                }
                Ok(())
            }
            Expr::Return(value)
            | Expr::LoopContinue(value)
            | Expr::Not(value)
            | Expr::HashTableInsert(value) => self.expr(value),
            Expr::Block(block) => self.block(block),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Binding, FuncDecl, Type};

    fn anon(expr: Expr) -> Binding {
        Binding::anon(expr)
    }

    #[test]
    fn well_formed_block_passes() {
        let block = Block::new(vec![
            Binding::new(vec!["x".into()], Expr::call("f", vec![])),
            anon(Expr::ret(Expr::ident("x"))),
        ]);
        assert_eq!(verify_block(&block), Ok(()));
    }

    #[test]
    fn binding_after_terminal_is_reported() {
        let block = Block::new(vec![
            anon(Expr::ret(Expr::unit())),
            anon(Expr::call("f", vec![])),
        ]);
        assert_eq!(
            verify_block(&block),
            Err(VerifyError::BindingAfterTerminal {
                context: "block".into(),
                index: 1
            })
        );
    }

    #[test]
    fn nested_empty_block_is_reported() {
        let block = Block::new(vec![anon(Expr::if_(
            Expr::ident("c"),
            Expr::Block(Block::default()),
            Expr::ret(Expr::unit()),
        ))]);
        assert!(matches!(verify_block(&block), Err(VerifyError::EmptyBlock { .. })));
    }

    #[test]
    fn loop_fallthrough_is_reported() {
        let body = Block::new(vec![anon(Expr::call("f", vec![]))]);
        let block = Block::new(vec![anon(Expr::loop_("i", Expr::IntLit(0), body))]);
        let err = verify_block(&block).unwrap_err();
        assert_eq!(
            err.to_string(),
            "loop over i in block can finish an iteration without continue or break"
        );
    }

    #[test]
    fn loop_with_exits_on_every_path_passes() {
        let body = Block::new(vec![anon(Expr::if_(
            Expr::binary(crate::BinOp::GreaterThan, Expr::ident("i"), Expr::IntLit(10)),
            Expr::Block(Block::new(vec![anon(Expr::LoopRet)])),
            Expr::Block(Block::new(vec![anon(Expr::loop_continue(Expr::binary(
                crate::BinOp::Plus,
                Expr::ident("i"),
                Expr::IntLit(1),
            )))])),
        ))]);
        let file = File::new(vec![Decl::Func(FuncDecl {
            name: "count".into(),
            args: vec![],
            return_type: Type::unit(),
            body: Block::new(vec![
                anon(Expr::loop_("i", Expr::IntLit(0), body)),
                anon(Expr::ret(Expr::unit())),
            ]),
            comment: None,
        })]);
        assert_eq!(verify_file(&file), Ok(()));
    }

    #[test]
    fn file_errors_name_the_function() {
        let file = File::new(vec![Decl::Func(FuncDecl {
            name: "broken".into(),
            args: vec![],
            return_type: Type::unit(),
            body: Block::default(),
            comment: None,
        })]);
        assert_eq!(
            verify_file(&file),
            Err(VerifyError::EmptyBlock {
                context: "broken".into()
            })
        );
    }
}
