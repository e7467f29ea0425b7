//! Error types for translation.
//!
//! ## Error Hierarchy
//!
//! ```text
//! TranslationError (driver level)
//! ├── Parse            - the front end could not parse the package
//! ├── TypeCheck        - the front end rejected the package's types
//! ├── MultiplePackages - the directory holds more than one package
//! └── Translate        - a Diagnostic raised while lowering to IR
//! ```
//!
//! A [`Diagnostic`] is the only error the translator itself produces. The
//! first one raised aborts the whole unit; there is no recovery.

use thiserror::Error;

use crate::Position;

// ============================================================================
// Diagnostics
// ============================================================================

/// Classification of a translation rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// The construct is permanently out of scope.
    Unsupported,
    /// A known gap that is planned.
    FutureWork,
    /// A gap expected to be closed soon.
    Todo,
    /// An internal invariant was violated. Semantic analysis should have
    /// excluded this input, so the translator itself is at fault.
    Nope,
    /// An edge case with no test coverage, rejected conservatively.
    NoExample,
}

impl DiagnosticKind {
    /// Returns a human-readable name for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::Unsupported => "unsupported",
            DiagnosticKind::FutureWork => "future work",
            DiagnosticKind::Todo => "todo",
            DiagnosticKind::Nope => "nope",
            DiagnosticKind::NoExample => "no example",
        }
    }
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified rejection with its source position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("{kind} at {position}: {message}")]
pub struct Diagnostic {
    /// Why the input was rejected.
    pub kind: DiagnosticKind,
    /// Where the offending node starts.
    pub position: Position,
    /// What was rejected.
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, position: Position, message: impl Into<String>) -> Self {
        Self {
            kind,
            position,
            message: message.into(),
        }
    }

    /// True for `nope`: the input passed semantic analysis but still broke a
    /// translator invariant.
    pub fn is_translator_defect(&self) -> bool {
        self.kind == DiagnosticKind::Nope
    }

    /// Format the diagnostic with the offending source line and a caret.
    pub fn display_with_source(&self, source: &str) -> String {
        let mut output = String::new();
        let line = self.position.line;
        let column = self.position.col.max(1);

        output.push_str(&format!("{} at {}\n", self.kind, self.position));
        if !self.message.is_empty() {
            output.push_str(&format!("  {}\n", self.message));
        }

        if let Some(line_text) = Self::get_line(source, line) {
            output.push_str("  |\n");
            output.push_str(&format!("{:>3} | {}\n", line, line_text));
            let indent = " ".repeat(column as usize - 1);
            output.push_str(&format!("  | {}^\n", indent));
        }

        output
    }

    /// Get the text of a specific line (1-indexed).
    fn get_line(source: &str, line_num: u32) -> Option<&str> {
        if line_num == 0 {
            return None;
        }
        source.lines().nth(line_num as usize - 1)
    }
}

// ============================================================================
// Driver Errors
// ============================================================================

/// An error produced by an external collaborator (parser or type checker).
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync>;

/// Failure of a whole-package translation.
#[derive(Debug, Error)]
pub enum TranslationError {
    /// The front end failed to parse the sources.
    #[error("code does not parse\n{0}")]
    Parse(#[source] BoxedCause),

    /// The front end's semantic analysis rejected the package.
    #[error("code does not type check\n{0}")]
    TypeCheck(#[source] BoxedCause),

    /// More than one package was found in the source directory.
    #[error("found multiple packages: {}", .0.join(", "))]
    MultiplePackages(Vec<String>),

    /// Lowering to IR was rejected.
    #[error("failed to translate\n{0}")]
    Translate(#[source] Diagnostic),
}

impl TranslationError {
    /// The human message, without the wrapped cause.
    pub fn message(&self) -> &'static str {
        match self {
            TranslationError::Parse(_) => "code does not parse",
            TranslationError::TypeCheck(_) => "code does not type check",
            TranslationError::MultiplePackages(_) => "found multiple packages",
            TranslationError::Translate(_) => "failed to translate",
        }
    }

    /// The diagnostic, when translation itself failed.
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            TranslationError::Translate(diag) => Some(diag),
            _ => None,
        }
    }
}

impl From<Diagnostic> for TranslationError {
    fn from(diag: Diagnostic) -> Self {
        TranslationError::Translate(diag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn pos(line: u32, col: u32) -> Position {
        Position {
            file: "log.go".to_string(),
            line,
            col,
        }
    }

    #[test]
    fn diagnostic_display() {
        let diag = Diagnostic::new(DiagnosticKind::Unsupported, pos(3, 5), "3-index slice");
        assert_eq!(diag.to_string(), "unsupported at log.go:3:5: 3-index slice");

        let diag = Diagnostic::new(DiagnosticKind::FutureWork, pos(1, 1), "methods");
        assert_eq!(diag.to_string(), "future work at log.go:1:1: methods");
    }

    #[test]
    fn only_nope_is_a_translator_defect() {
        let kinds = [
            DiagnosticKind::Unsupported,
            DiagnosticKind::FutureWork,
            DiagnosticKind::Todo,
            DiagnosticKind::NoExample,
        ];
        for kind in kinds {
            assert!(!Diagnostic::new(kind, pos(1, 1), "x").is_translator_defect());
        }
        assert!(Diagnostic::new(DiagnosticKind::Nope, pos(1, 1), "x").is_translator_defect());
    }

    #[test]
    fn display_with_source_points_at_column() {
        let source = "package p\n\nfunc f() {\n\tx := a[1:2:3]\n}\n";
        let diag = Diagnostic::new(DiagnosticKind::Unsupported, pos(4, 7), "3-index slice");
        let rendered = diag.display_with_source(source);

        assert!(rendered.starts_with("unsupported at log.go:4:7\n"));
        assert!(rendered.contains("  3-index slice\n"));
        assert!(rendered.contains("  4 | \tx := a[1:2:3]\n"));
        assert!(rendered.ends_with("  |       ^\n"));
    }

    #[test]
    fn display_with_source_skips_missing_line() {
        let diag = Diagnostic::new(DiagnosticKind::Todo, pos(40, 1), "global constants");
        let rendered = diag.display_with_source("package p\n");
        assert!(!rendered.contains('|'));
    }

    #[test]
    fn translation_error_wraps_cause() {
        let cause: BoxedCause = "expected ';'".into();
        let err = TranslationError::Parse(cause);
        assert_eq!(err.message(), "code does not parse");
        assert_eq!(err.to_string(), "code does not parse\nexpected ';'");
        assert_eq!(err.source().map(|e| e.to_string()).as_deref(), Some("expected ';'"));
    }

    #[test]
    fn translation_error_from_diagnostic() {
        let diag = Diagnostic::new(DiagnosticKind::Todo, pos(2, 1), "global constants");
        let err = TranslationError::from(diag.clone());
        assert_eq!(err.message(), "failed to translate");
        assert_eq!(err.diagnostic(), Some(&diag));
        assert!(err.to_string().ends_with("todo at log.go:2:1: global constants"));
    }

    #[test]
    fn multiple_packages_lists_names() {
        let err = TranslationError::MultiplePackages(vec!["a".into(), "b".into()]);
        assert_eq!(err.to_string(), "found multiple packages: a, b");
        assert!(err.source().is_none());
    }
}
