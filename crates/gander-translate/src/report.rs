//! Diagnostic constructors.
//!
//! Each rejection class has one constructor on [`FileContext`], which
//! attaches the file position of the offending node. Callers return the
//! result with `Err(...)`; the first one aborts the unit.

use gander_core::{Diagnostic, DiagnosticKind, Span};

use crate::context::FileContext;

impl FileContext<'_> {
    fn diagnostic(&self, kind: DiagnosticKind, span: Span, message: impl Into<String>) -> Diagnostic {
        Diagnostic::new(kind, self.where_(span), message)
    }

    /// Permanently out of scope.
    pub fn unsupported(&self, span: Span, message: impl Into<String>) -> Diagnostic {
        self.diagnostic(DiagnosticKind::Unsupported, span, message)
    }

    /// Known gap, planned.
    pub fn future_work(&self, span: Span, message: impl Into<String>) -> Diagnostic {
        self.diagnostic(DiagnosticKind::FutureWork, span, message)
    }

    /// Gap expected to close soon.
    pub fn todo(&self, span: Span, message: impl Into<String>) -> Diagnostic {
        self.diagnostic(DiagnosticKind::Todo, span, message)
    }

    /// Translator defect: semantic analysis should have excluded this.
    pub fn nope(&self, span: Span, message: impl Into<String>) -> Diagnostic {
        self.diagnostic(DiagnosticKind::Nope, span, message)
    }

    /// Untested edge case, rejected conservatively.
    pub fn no_example(&self, span: Span, message: impl Into<String>) -> Diagnostic {
        self.diagnostic(DiagnosticKind::NoExample, span, message)
    }
}
