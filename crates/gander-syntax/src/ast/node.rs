//! Node identity and identifiers.

use gander_core::Span;

/// Identifies a syntax node within one translation unit.
///
/// Semantic facts (types, resolved objects) are keyed by `NodeId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Creates a node id from a raw index.
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    pub const fn index(self) -> u32 {
        self.0
    }
}

/// An identifier occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ident<'ast> {
    pub name: &'ast str,
    pub id: NodeId,
    pub span: Span,
}

impl<'ast> Ident<'ast> {
    pub fn new(name: &'ast str, id: NodeId, span: Span) -> Self {
        Self { name, id, span }
    }

    /// Whether this identifier is spelled `name`.
    #[inline]
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    /// The blank identifier `_`.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.name == "_"
    }
}
