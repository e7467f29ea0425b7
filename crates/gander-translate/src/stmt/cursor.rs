//! Lookahead over the statements remaining in one list.

use gander_syntax::ast::Stmt;

/// The unconsumed tail of a statement list.
///
/// Several constructs are stitched together with the statements that follow
/// them: a loop-variable assignment consumes the `continue` after it, and an
/// early-returning `if` consumes everything after it as its else branch.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Cursor<'ast> {
    rest: &'ast [Stmt<'ast>],
}

impl<'ast> Cursor<'ast> {
    pub fn new(stmts: &'ast [Stmt<'ast>]) -> Self {
        Self { rest: stmts }
    }

    pub fn has_next(&self) -> bool {
        !self.rest.is_empty()
    }

    pub fn peek(&self) -> Option<&'ast Stmt<'ast>> {
        self.rest.first()
    }

    /// Consume every remaining statement.
    pub fn remainder(&mut self) -> &'ast [Stmt<'ast>] {
        std::mem::take(&mut self.rest)
    }
}

impl<'ast> Iterator for Cursor<'ast> {
    type Item = &'ast Stmt<'ast>;

    fn next(&mut self) -> Option<Self::Item> {
        let (first, rest) = self.rest.split_first()?;
        self.rest = rest;
        Some(first)
    }
}
