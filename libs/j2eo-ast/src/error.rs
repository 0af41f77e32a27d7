//! # Error Types
//!
//! Hard failures of the projector. Any of these aborts the compilation unit;
//! no partial AST is returned alongside them.

use java_cst::{CstError, Span, TerminalKind};
use thiserror::Error;

/// Errors that abort projection of a compilation unit.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// A local type declaration other than a class.
    #[error("unsupported local type declaration: {construct}")]
    UnsupportedLocalType { construct: String, span: Span },

    /// An operator token without an abstract code.
    #[error("unsupported token: {text} ({kind:?})")]
    UnsupportedToken {
        kind: TerminalKind,
        text: String,
        span: Span,
    },

    /// Literal text that cannot be decoded, or an unsupported literal form
    /// when the sentinel fallback is disabled.
    #[error("invalid literal: {text}")]
    InvalidLiteral { text: String, span: Span },

    /// The CST does not have the shape the grammar guarantees.
    #[error("malformed CST: expected {expected}")]
    MalformedTree { expected: &'static str, span: Span },

    /// The CST document could not be loaded.
    #[error(transparent)]
    Cst(#[from] CstError),
}

impl ProjectError {
    /// Source location of the failure, when known.
    pub fn span(&self) -> Option<Span> {
        match self {
            ProjectError::UnsupportedLocalType { span, .. }
            | ProjectError::UnsupportedToken { span, .. }
            | ProjectError::InvalidLiteral { span, .. }
            | ProjectError::MalformedTree { span, .. } => Some(*span),
            ProjectError::Cst(_) => None,
        }
    }
}
