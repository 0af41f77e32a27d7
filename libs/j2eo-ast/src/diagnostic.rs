//! # Diagnostics
//!
//! Soft-failure reports gathered while projecting. A diagnostic never aborts
//! the compilation unit; it records where fidelity was lost.

use crate::ast::PlaceholderTag;
use java_cst::Span;
use serde::{Deserialize, Serialize};

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
}

/// What a diagnostic reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// A construct was replaced by a placeholder carrying this tag.
    Placeholder(PlaceholderTag),
    /// An unsupported literal form was replaced by the sentinel integer.
    LiteralFallback,
    /// A construct was translated with known loss of information.
    Lossy,
}

/// A diagnostic message with severity and location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    pub message: String,
    pub span: Span,
    pub hint: Option<String>,
}

impl Diagnostic {
    pub fn new(severity: Severity, kind: DiagnosticKind, message: String, span: Span) -> Self {
        Self {
            severity,
            kind,
            message,
            span,
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn warning(kind: DiagnosticKind, message: String, span: Span) -> Self {
        Self::new(Severity::Warning, kind, message, span)
    }

    /// Placeholder tag this diagnostic reports, if any.
    pub fn placeholder(&self) -> Option<PlaceholderTag> {
        match self.kind {
            DiagnosticKind::Placeholder(tag) => Some(tag),
            _ => None,
        }
    }
}
