//! Gander: a conservative translator from a small, Go-like imperative
//! language into a monadic IR.
//!
//! Translation accepts only a restricted subset of the source language. Any
//! construct outside it is rejected with a classified [`Diagnostic`] rather
//! than approximated, so whatever comes out means what the source meant.
//!
//! The workspace is split by concern:
//! - `gander-core`: spans, positions, diagnostics, driver errors
//! - `gander-syntax`: the input syntax tree and semantic fact vocabulary
//! - `gander-ir`: the output IR and its structural verifier
//! - `gander-translate`: the translator itself
//!
//! This crate re-exports the pieces most callers need and adds the package
//! driver, [`translate_package`].

mod driver;

pub use driver::{Frontend, translate_package};

pub use gander_core::{BoxedCause, Diagnostic, DiagnosticKind, FileId, Position, Span, TranslationError};
pub use gander_translate::{
    Config, Context, ContextBuilder, DeclTranslator, ExprTranslator, StmtTranslator, Translator,
    TypeResolver,
};

pub mod ir {
    pub use gander_ir::*;
}

pub mod syntax {
    pub use gander_syntax::*;
}

pub mod prelude {
    pub use crate::driver::{Frontend, translate_package};
    pub use gander_core::{Diagnostic, DiagnosticKind, TranslationError};
    pub use gander_syntax::AstBuilder;
    pub use gander_translate::{Config, Context, ContextBuilder, Translator};
}
