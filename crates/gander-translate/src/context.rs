//! Translation context: configuration plus the front end's semantic facts.
//!
//! Building happens in two phases. The front end fills a [`ContextBuilder`]
//! while it parses and type checks; [`ContextBuilder::build`] then freezes
//! everything into an immutable [`Context`] that translation only reads.
//! Each translation unit owns its own context, so independent units can be
//! translated on separate threads.

use gander_core::{FileId, Position, SourceMap, Span};
use gander_syntax::ast::{Ident, NodeId};
use gander_syntax::sema::{ObjectKind, SemType};
use rustc_hash::FxHashMap;

/// Translation options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Append an `origin: file:line:col` line to each emitted declaration's
    /// comment.
    pub add_source_file_comments: bool,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source_file_comments(mut self, enabled: bool) -> Self {
        self.add_source_file_comments = enabled;
        self
    }
}

/// Mutable phase: collects files and semantic facts.
#[derive(Debug, Clone, Default)]
pub struct ContextBuilder {
    config: Config,
    sources: SourceMap,
    types: FxHashMap<NodeId, SemType>,
    objects: FxHashMap<NodeId, ObjectKind>,
}

impl ContextBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> Config {
        self.config
    }

    /// Register a source file for position reporting.
    pub fn add_file(&mut self, name: impl Into<String>, source: Option<String>) -> FileId {
        self.sources.add(name, source)
    }

    /// Record the type of the expression (or denoted type of the type name)
    /// with this id.
    pub fn record_type(&mut self, id: NodeId, ty: SemType) -> &mut Self {
        self.types.insert(id, ty);
        self
    }

    /// Record what the identifier with this id resolves to.
    pub fn record_object(&mut self, id: NodeId, kind: ObjectKind) -> &mut Self {
        self.objects.insert(id, kind);
        self
    }

    /// Record both the object and the type of an identifier.
    pub fn declare(&mut self, ident: &Ident<'_>, kind: ObjectKind, ty: SemType) -> &mut Self {
        self.record_object(ident.id, kind);
        self.record_type(ident.id, ty)
    }

    /// Freeze into a read-only snapshot.
    pub fn build(self) -> Context {
        Context {
            config: self.config,
            sources: self.sources,
            types: self.types,
            objects: self.objects,
        }
    }
}

/// Read-only phase: everything translation needs to know about the unit.
#[derive(Debug, Clone)]
pub struct Context {
    config: Config,
    sources: SourceMap,
    types: FxHashMap<NodeId, SemType>,
    objects: FxHashMap<NodeId, ObjectKind>,
}

impl Context {
    pub fn config(&self) -> Config {
        self.config
    }

    pub fn sources(&self) -> &SourceMap {
        &self.sources
    }

    pub fn type_of(&self, id: NodeId) -> Option<&SemType> {
        self.types.get(&id)
    }

    pub fn object_of(&self, id: NodeId) -> Option<ObjectKind> {
        self.objects.get(&id).copied()
    }

    pub fn position(&self, file: FileId, span: Span) -> Position {
        self.sources.position(file, span)
    }
}

/// The context narrowed to one file, so spans can be turned into positions.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FileContext<'a> {
    pub cx: &'a Context,
    pub file: FileId,
}

impl<'a> FileContext<'a> {
    pub fn new(cx: &'a Context, file: FileId) -> Self {
        Self { cx, file }
    }

    pub fn where_(&self, span: Span) -> Position {
        self.cx.position(self.file, span)
    }

    pub fn type_of(&self, id: NodeId) -> Option<&'a SemType> {
        self.cx.type_of(id)
    }

    pub fn object_of(&self, id: NodeId) -> Option<ObjectKind> {
        self.cx.object_of(id)
    }

    pub fn config(&self) -> Config {
        self.cx.config()
    }
}
