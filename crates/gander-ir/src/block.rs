//! Bindings and blocks.

use serde::{Deserialize, Serialize};

use crate::Expr;

/// One monadic sequencing step: `names <- expr`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    /// Bound names; empty for an anonymous binding.
    pub names: Vec<String>,
    pub expr: Expr,
}

impl Binding {
    pub fn new(names: Vec<String>, expr: Expr) -> Self {
        Self { names, expr }
    }

    /// A binding whose result is discarded (or is the block's value).
    pub fn anon(expr: Expr) -> Self {
        Self {
            names: Vec::new(),
            expr,
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.names.is_empty()
    }

    pub fn is_terminal(&self) -> bool {
        self.expr.is_terminal()
    }

    /// The expression, when nothing is bound.
    pub fn into_anon_expr(self) -> Result<Expr, Binding> {
        if self.is_anonymous() {
            Ok(self.expr)
        } else {
            Err(self)
        }
    }
}

/// An ordered sequence of bindings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Block {
    pub bindings: Vec<Binding>,
}

impl Block {
    pub fn new(bindings: Vec<Binding>) -> Self {
        Self { bindings }
    }

    /// The block for an empty statement list: `Return tt`.
    pub fn return_unit() -> Self {
        Self::new(vec![Binding::anon(Expr::ret(Expr::unit()))])
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn last(&self) -> Option<&Binding> {
        self.bindings.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Binding> {
        self.bindings.iter()
    }

    /// Whether every path through the block ends in `LoopContinue` or
    /// `LoopRet`.
    pub fn exits_loop_iteration(&self) -> bool {
        self.last().is_some_and(|b| b.expr.exits_loop_iteration())
    }

    /// Whether any path through the block reaches a terminal.
    pub fn can_exit(&self) -> bool {
        self.bindings.iter().any(|b| b.expr.can_exit())
    }
}

impl<'a> IntoIterator for &'a Block {
    type Item = &'a Binding;
    type IntoIter = std::slice::Iter<'a, Binding>;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.iter()
    }
}

/// Accumulates bindings, refusing any after a terminal.
#[derive(Debug, Default)]
pub struct BlockBuilder {
    bindings: Vec<Binding>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a binding. Hands the binding back if the block already ended in
    /// a terminal.
    pub fn push(&mut self, binding: Binding) -> Result<(), Binding> {
        if self.is_terminated() {
            return Err(binding);
        }
        self.bindings.push(binding);
        Ok(())
    }

    pub fn is_terminated(&self) -> bool {
        self.bindings.last().is_some_and(Binding::is_terminal)
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Finish a statement-list block; an empty one becomes `Return tt`.
    pub fn finish(self) -> Block {
        if self.bindings.is_empty() {
            Block::return_unit()
        } else {
            Block::new(self.bindings)
        }
    }

    /// Finish without synthesizing anything, as loop bodies require.
    pub fn finish_raw(self) -> Block {
        Block::new(self.bindings)
    }
}
