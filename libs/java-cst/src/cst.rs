//! # Concrete Syntax Tree (CST)
//!
//! CST node type produced by an external grammar-driven Java parser.
//! Nodes expose structural queries only; interpretation belongs to the
//! projector in `j2eo-ast`.
//!
//! ## Example
//!
//! ```rust
//! use java_cst::build::{ident, rule};
//! use java_cst::RuleKind;
//!
//! let node = rule(RuleKind::Primary, vec![ident("x")]);
//! assert_eq!(node.rule(RuleKind::Identifier).map(|n| n.flattened_text()), Some("x".to_string()));
//! ```

use crate::kind::{NodeKind, RuleKind, TerminalKind};
use crate::span::Span;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// ERRORS
// =============================================================================

/// Errors raised while loading a CST.
#[derive(Debug, Error)]
pub enum CstError {
    /// The JSON document does not describe a CST.
    #[error("invalid CST document: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// CST NODE
// =============================================================================

/// A node in the Concrete Syntax Tree.
///
/// ## Fields
///
/// - `kind`: rule or terminal kind
/// - `span`: byte range in the source
/// - `children`: ordered child nodes (empty for terminals)
/// - `text`: token text, present on terminals
/// - `field`: ANTLR element label this node was bound to in its parent
///   (`bop`, `prefix`, `postfix`, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CstNode {
    /// Node type.
    pub kind: NodeKind,
    /// Source span.
    #[serde(default)]
    pub span: Span,
    /// Child nodes.
    #[serde(default)]
    pub children: Vec<CstNode>,
    /// Text content (for terminals).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Element label in the parent rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl CstNode {
    /// Create a new CST node without children.
    ///
    /// ## Parameters
    ///
    /// - `kind`: Node type
    /// - `span`: Source location
    pub fn new(kind: impl Into<NodeKind>, span: Span) -> Self {
        Self {
            kind: kind.into(),
            span,
            children: Vec::new(),
            text: None,
            field: None,
        }
    }

    /// Create a terminal node with its token text.
    pub fn with_text(kind: TerminalKind, span: Span, text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new(kind, span)
        }
    }

    /// Create a rule node with children.
    pub fn with_children(kind: RuleKind, span: Span, children: Vec<CstNode>) -> Self {
        Self {
            children,
            ..Self::new(kind, span)
        }
    }

    /// Parse a CST from its JSON form.
    ///
    /// # Example
    ///
    /// ```rust
    /// use java_cst::{CstNode, TerminalKind};
    ///
    /// let node = CstNode::from_json(r#"{"kind":{"terminal":"IDENTIFIER"},"text":"x"}"#).unwrap();
    /// assert_eq!(node.terminal_kind(), Some(TerminalKind::Identifier));
    /// assert_eq!(node.text_or_empty(), "x");
    /// ```
    pub fn from_json(json: &str) -> Result<Self, CstError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the CST to JSON.
    pub fn to_json(&self) -> Result<String, CstError> {
        Ok(serde_json::to_string(self)?)
    }

    // -------------------------------------------------------------------------
    // Own kind
    // -------------------------------------------------------------------------

    /// Rule kind of this node, if it is a rule node.
    pub fn rule_kind(&self) -> Option<RuleKind> {
        self.kind.as_rule()
    }

    /// Terminal kind of this node, if it is a terminal.
    pub fn terminal_kind(&self) -> Option<TerminalKind> {
        self.kind.as_terminal()
    }

    /// Returns true if this node was produced by `kind`.
    pub fn is_rule(&self, kind: RuleKind) -> bool {
        self.kind == NodeKind::Rule(kind)
    }

    /// Returns true if this node is a token of `kind`.
    pub fn is_terminal(&self, kind: TerminalKind) -> bool {
        self.kind == NodeKind::Terminal(kind)
    }

    /// Get text content, or empty string if none.
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Concatenated text of all terminals below this node, in order.
    pub fn flattened_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    // -------------------------------------------------------------------------
    // Rule children
    // -------------------------------------------------------------------------

    /// First child produced by `kind`.
    pub fn rule(&self, kind: RuleKind) -> Option<&CstNode> {
        self.rule_at(kind, 0)
    }

    /// The `index`-th child produced by `kind`.
    pub fn rule_at(&self, kind: RuleKind, index: usize) -> Option<&CstNode> {
        self.rules(kind).nth(index)
    }

    /// All children produced by `kind`, in order.
    pub fn rules(&self, kind: RuleKind) -> impl Iterator<Item = &CstNode> {
        self.children.iter().filter(move |c| c.is_rule(kind))
    }

    /// All rule children whose kind satisfies `pred`, in order.
    pub fn rules_where<F>(&self, pred: F) -> impl Iterator<Item = &CstNode>
    where
        F: Fn(RuleKind) -> bool,
    {
        self.children
            .iter()
            .filter(move |c| c.rule_kind().is_some_and(&pred))
    }

    /// The `index`-th child that is an alternative of the `statement` rule.
    pub fn statement(&self, index: usize) -> Option<&CstNode> {
        self.rules_where(|k| k.is_statement()).nth(index)
    }

    /// The `index`-th child that is an alternative of the `typeType` rule.
    pub fn type_type(&self, index: usize) -> Option<&CstNode> {
        self.type_types().nth(index)
    }

    /// All children that are alternatives of the `typeType` rule.
    pub fn type_types(&self) -> impl Iterator<Item = &CstNode> {
        self.rules_where(|k| k.is_type_type())
    }

    // -------------------------------------------------------------------------
    // Terminal children
    // -------------------------------------------------------------------------

    /// First child token of `kind`.
    pub fn terminal(&self, kind: TerminalKind) -> Option<&CstNode> {
        self.terminals(kind).next()
    }

    /// All child tokens of `kind`, in order.
    pub fn terminals(&self, kind: TerminalKind) -> impl Iterator<Item = &CstNode> {
        self.children.iter().filter(move |c| c.is_terminal(kind))
    }

    /// Returns true if a direct child is a token of `kind`.
    pub fn has_terminal(&self, kind: TerminalKind) -> bool {
        self.terminal(kind).is_some()
    }

    /// First direct child that is a token of any kind.
    pub fn first_terminal(&self) -> Option<&CstNode> {
        self.children.iter().find(|c| c.terminal_kind().is_some())
    }

    /// Direct child bound to the element label `field`.
    pub fn labelled(&self, field: &str) -> Option<&CstNode> {
        self.children
            .iter()
            .find(|c| c.field.as_deref() == Some(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{ident, labelled, rule, term};

    fn binary() -> CstNode {
        rule(
            RuleKind::Expression,
            vec![
                rule(RuleKind::Expression, vec![rule(RuleKind::Primary, vec![ident("a")])]),
                labelled("bop", term(TerminalKind::Add, "+")),
                rule(RuleKind::Expression, vec![rule(RuleKind::Primary, vec![ident("b")])]),
            ],
        )
    }

    #[test]
    fn test_indexed_rule_access() {
        let node = binary();
        assert_eq!(node.rules(RuleKind::Expression).count(), 2);
        assert_eq!(
            node.rule_at(RuleKind::Expression, 1).map(CstNode::flattened_text),
            Some("b".to_string())
        );
        assert!(node.rule_at(RuleKind::Expression, 2).is_none());
        assert!(node.rule(RuleKind::Primary).is_none());
    }

    #[test]
    fn test_terminal_queries() {
        let node = binary();
        assert!(node.has_terminal(TerminalKind::Add));
        assert!(!node.has_terminal(TerminalKind::Sub));
        assert_eq!(node.first_terminal().map(CstNode::text_or_empty), Some("+"));
        assert_eq!(
            node.labelled("bop").and_then(CstNode::terminal_kind),
            Some(TerminalKind::Add)
        );
        assert!(node.labelled("prefix").is_none());
    }

    #[test]
    fn test_flattened_text() {
        assert_eq!(binary().flattened_text(), "a+b");
        assert_eq!(binary().child_count(), 3);
    }

    #[test]
    fn test_statement_and_type_alternatives() {
        let node = rule(
            RuleKind::StatementIf,
            vec![
                term(TerminalKind::If, "if"),
                rule(RuleKind::ParExpression, vec![]),
                rule(RuleKind::StatementSemi, vec![term(TerminalKind::Semi, ";")]),
                term(TerminalKind::Else, "else"),
                rule(RuleKind::StatementBreak, vec![]),
                rule(RuleKind::TypePrimitiveType, vec![]),
            ],
        );
        assert!(node.statement(0).is_some_and(|s| s.is_rule(RuleKind::StatementSemi)));
        assert!(node.statement(1).is_some_and(|s| s.is_rule(RuleKind::StatementBreak)));
        assert!(node.statement(2).is_none());
        assert_eq!(node.type_types().count(), 1);
    }

    #[test]
    fn test_json_round_trip_keeps_labels() {
        let node = binary();
        let json = node.to_json().unwrap();
        let back = CstNode::from_json(&json).unwrap();
        assert_eq!(back, node);
        assert_eq!(back.labelled("bop").map(CstNode::text_or_empty), Some("+"));
    }

    #[test]
    fn test_from_json_rejects_unknown_kind() {
        let result = CstNode::from_json(r#"{"kind":{"rule":"noSuchRule"}}"#);
        assert!(matches!(result, Err(CstError::Json(_))));
    }
}
