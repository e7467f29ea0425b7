//! Shared foundations for the gander translator.
//!
//! - [`Span`]: line/column location of a syntax node
//! - [`SourceMap`]: the per-unit index from [`FileId`] to file names and text
//! - [`Diagnostic`]: a classified translation rejection with its [`Position`]
//! - [`TranslationError`]: the failure surfaced by the package driver

mod error;
mod source;
mod span;

pub use error::{BoxedCause, Diagnostic, DiagnosticKind, TranslationError};
pub use source::{FileId, Position, SourceFile, SourceMap};
pub use span::Span;
