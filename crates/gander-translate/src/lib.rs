//! Translation of semantically analyzed syntax trees into the gander IR.
//!
//! Components, leaf first:
//! - [`TypeResolver`]: source type expressions to IR types
//! - [`ExprTranslator`]: expressions to pure or effectful IR expressions
//! - [`StmtTranslator`]: statement lists to binding sequences (the core)
//! - [`DeclTranslator`]: top-level declarations to IR declarations
//!
//! Every component returns `Result<_, Diagnostic>`. The first diagnostic
//! aborts the whole unit: [`Translator::translate_files`] either returns a
//! complete [`gander_ir::File`] or the one diagnostic that stopped it.
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use gander_syntax::AstBuilder;
//! use gander_translate::{Config, ContextBuilder, Translator};
//!
//! let arena = Bump::new();
//! let b = AstBuilder::new(&arena);
//! let mut builder = ContextBuilder::new(Config::default());
//! let file = builder.add_file("noop.go", None);
//!
//! let noop = b.func("noop", &[], &[], &[]);
//! let source = b.source_file(file, "noop", &[noop]);
//!
//! let cx = builder.build();
//! let out = Translator::new(&cx).translate_files(&[source]).unwrap();
//! assert_eq!(out.func("noop").map(|f| f.body.len()), Some(1));
//! ```

mod context;
mod decl;
mod expr;
mod report;
mod stmt;
mod type_resolver;

#[cfg(test)]
mod test_support;

pub use context::{Config, Context, ContextBuilder};
pub use decl::DeclTranslator;
pub use expr::ExprTranslator;
pub use gander_core::{Diagnostic, DiagnosticKind};
pub use stmt::StmtTranslator;
pub use type_resolver::TypeResolver;

use context::FileContext;
use gander_syntax::ast::{Package, SourceFile};

type Result<T> = std::result::Result<T, Diagnostic>;

/// Per-unit entry point.
pub struct Translator<'a> {
    cx: &'a Context,
}

impl<'a> Translator<'a> {
    pub fn new(cx: &'a Context) -> Self {
        Self { cx }
    }

    /// Translate every declaration of every file, in order.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn translate_files(&self, files: &[SourceFile<'_>]) -> Result<gander_ir::File> {
        let mut out = gander_ir::File::default();
        for file in files {
            self.translate_file(file, &mut out)?;
        }
        Ok(out)
    }

    pub fn translate_package(&self, package: &Package<'_>) -> Result<gander_ir::File> {
        self.translate_files(&package.files)
    }

    fn translate_file(&self, file: &SourceFile<'_>, out: &mut gander_ir::File) -> Result<()> {
        let decls = DeclTranslator::new(self.cx, file.file);
        for decl in file.decls {
            if let Some(decl) = decls.translate(decl)? {
                out.push(decl);
            }
        }
        Ok(())
    }
}
