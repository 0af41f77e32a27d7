//! Modifier decoding.

use crate::ast::Modifiers;
use crate::tokens::modifier_code;
use java_cst::{CstNode, RuleKind};

/// Decodes a list of `modifier`, `classOrInterfaceModifier` or
/// `variableModifier` nodes.
///
/// No nodes yields `None`; nodes that are all unrecognized (annotations,
/// `native`, `sealed`, ...) yield `Some` of an empty set.
pub(crate) fn decode<'a, I>(nodes: I) -> Option<Modifiers>
where
    I: IntoIterator<Item = &'a CstNode>,
{
    let mut nodes = nodes.into_iter().peekable();
    nodes.peek()?;
    Some(Modifiers::from_codes(nodes.filter_map(modifier_token)))
}

fn modifier_token(node: &CstNode) -> Option<crate::tokens::TokenCode> {
    // `modifier` wraps `classOrInterfaceModifier` for the keywords we keep.
    let inner = node.rule(RuleKind::ClassOrInterfaceModifier).unwrap_or(node);
    inner
        .first_terminal()
        .and_then(CstNode::terminal_kind)
        .and_then(modifier_code)
}
