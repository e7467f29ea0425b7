//! Abstract Syntax Tree for the source language.
//!
//! Every category (types, expressions, statements, declarations) is a closed
//! enum. Nodes are `Copy`, borrow children from the arena with lifetime
//! `'ast`, and carry a [`Span`](gander_core::Span). Expression nodes
//! additionally carry a [`NodeId`] so semantic facts can be attached to them
//! out of line.

pub mod decl;
pub mod expr;
pub mod node;
pub mod ops;
pub mod stmt;
pub mod types;

pub use decl::*;
pub use expr::*;
pub use node::*;
pub use ops::*;
pub use stmt::*;
pub use types::*;

/// One package: every file the front end parsed for it, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Package<'ast> {
    /// Package name from the `package` clauses.
    pub name: &'ast str,
    /// The package's files.
    pub files: Vec<SourceFile<'ast>>,
}

impl<'ast> Package<'ast> {
    pub fn new(name: &'ast str, files: Vec<SourceFile<'ast>>) -> Self {
        Self { name, files }
    }

    /// All declarations across the package's files.
    pub fn decls(&self) -> impl Iterator<Item = &Decl<'ast>> {
        self.files.iter().flat_map(|f| f.decls.iter())
    }
}
