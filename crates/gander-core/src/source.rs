//! Source-position index for one translation unit.

use std::fmt;

use crate::Span;

/// Identifies a file registered in a [`SourceMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct FileId(u32);

impl FileId {
    /// Creates a file id from a raw index.
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    pub const fn index(self) -> u32 {
        self.0
    }
}

/// A registered file: its display name and, optionally, its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Name used when rendering positions (usually a path).
    pub name: String,
    /// Full source text, when the front end kept it around.
    pub source: Option<String>,
}

/// Maps [`FileId`]s to file names and source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceMap {
    files: Vec<SourceFile>,
}

impl SourceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file and return its id.
    pub fn add(&mut self, name: impl Into<String>, source: Option<String>) -> FileId {
        let id = FileId::new(self.files.len() as u32);
        self.files.push(SourceFile {
            name: name.into(),
            source,
        });
        id
    }

    pub fn get(&self, file: FileId) -> Option<&SourceFile> {
        self.files.get(file.index() as usize)
    }

    /// The file's display name, or `""` for an unregistered id.
    pub fn name(&self, file: FileId) -> &str {
        self.get(file).map_or("", |f| f.name.as_str())
    }

    pub fn source(&self, file: FileId) -> Option<&str> {
        self.get(file).and_then(|f| f.source.as_deref())
    }

    /// Resolve a span inside `file` to a printable position.
    pub fn position(&self, file: FileId, span: Span) -> Position {
        Position {
            file: self.name(file).to_string(),
            line: span.line,
            col: span.col,
        }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// A fully resolved source position, rendered as `file:line:col`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// File name; empty when unknown.
    pub file: String,
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed).
    pub col: u32,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.file.is_empty() {
            write!(f, "{}:{}", self.line, self.col)
        } else {
            write!(f, "{}:{}:{}", self.file, self.line, self.col)
        }
    }
}
