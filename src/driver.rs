//! Package driver.
//!
//! Runs an external front end over a source directory and translates the
//! one package it finds. Parsing and type checking are not this crate's
//! business: the [`Frontend`] trait is the seam where they plug in.
//!
//! # Example
//!
//! ```ignore
//! use gander::{Config, translate_package};
//!
//! let file = translate_package(&my_frontend, "internal/log", Config::default())?;
//! for decl in &file {
//!     println!("{}", decl.name());
//! }
//! ```

use std::path::Path;

use bumpalo::Bump;
use gander_core::{BoxedCause, TranslationError};
use gander_syntax::ast::Package;
use gander_translate::{Config, ContextBuilder, Translator};

/// Parser plus semantic analysis for the source language.
///
/// Implementations register every file they parse with
/// [`ContextBuilder::add_file`] and record the facts of their analysis with
/// [`ContextBuilder::record_type`] and [`ContextBuilder::record_object`].
pub trait Frontend {
    /// Parse every source file in `dir`, grouped by package.
    fn parse<'ast>(
        &self,
        dir: &Path,
        arena: &'ast Bump,
        cx: &mut ContextBuilder,
    ) -> Result<Vec<Package<'ast>>, BoxedCause>;

    /// Type check one parsed package, recording what it learns.
    fn type_check(&self, package: &Package<'_>, cx: &mut ContextBuilder) -> Result<(), BoxedCause>;
}

/// Translate the single package in `src_dir`.
///
/// A directory with no package translates to an empty file.
///
/// # Errors
///
/// - [`TranslationError::Parse`] if the front end cannot parse the sources
/// - [`TranslationError::MultiplePackages`] if more than one package is found
/// - [`TranslationError::TypeCheck`] if semantic analysis fails
/// - [`TranslationError::Translate`] with the first diagnostic otherwise
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn translate_package<F>(
    frontend: &F,
    src_dir: impl AsRef<Path>,
    config: Config,
) -> Result<gander_ir::File, TranslationError>
where
    F: Frontend + ?Sized,
{
    let arena = Bump::new();
    let mut builder = ContextBuilder::new(config);

    let mut packages = {
        #[cfg(feature = "profiling")]
        profiling::scope!("parsing");

        frontend
            .parse(src_dir.as_ref(), &arena, &mut builder)
            .map_err(TranslationError::Parse)?
    };

    let package = match packages.len() {
        0 => return Ok(gander_ir::File::default()),
        1 => packages.remove(0),
        _ => {
            let names = packages.iter().map(|p| p.name.to_string()).collect();
            return Err(TranslationError::MultiplePackages(names));
        }
    };

    {
        #[cfg(feature = "profiling")]
        profiling::scope!("type checking");

        frontend
            .type_check(&package, &mut builder)
            .map_err(TranslationError::TypeCheck)?;
    }

    let cx = builder.build();
    let file = {
        #[cfg(feature = "profiling")]
        profiling::scope!("translation");

        Translator::new(&cx).translate_package(&package)?
    };
    Ok(file)
}
