//! Terse constructors for synthesizing CSTs.
//!
//! Spans default to empty; use [`CstNode::span`] directly when positions
//! matter.
//!
//! ```rust
//! use java_cst::build::{ident, labelled, rule, term};
//! use java_cst::{RuleKind, TerminalKind};
//!
//! let neg = rule(
//!     RuleKind::Expression,
//!     vec![
//!         labelled("prefix", term(TerminalKind::Sub, "-")),
//!         rule(RuleKind::Expression, vec![rule(RuleKind::Primary, vec![ident("x")])]),
//!     ],
//! );
//! assert_eq!(neg.flattened_text(), "-x");
//! ```

use crate::cst::CstNode;
use crate::kind::{RuleKind, TerminalKind};
use crate::span::Span;

/// Rule node with the given children.
pub fn rule(kind: RuleKind, children: Vec<CstNode>) -> CstNode {
    CstNode::with_children(kind, Span::default(), children)
}

/// Terminal node with the given token text.
pub fn term(kind: TerminalKind, text: &str) -> CstNode {
    CstNode::with_text(kind, Span::default(), text)
}

/// Binds `node` to the element label `field`.
pub fn labelled(field: &str, mut node: CstNode) -> CstNode {
    node.field = Some(field.to_string());
    node
}

/// `identifier` rule wrapping an `IDENTIFIER` token.
pub fn ident(name: &str) -> CstNode {
    rule(RuleKind::Identifier, vec![term(TerminalKind::Identifier, name)])
}

/// Attaches a source span to `node`.
pub fn spanned(mut node: CstNode, start: usize, end: usize) -> CstNode {
    node.span = Span::new(start, end);
    node
}
