//! Data leaves. They render as fixed literal text; indentation is never
//! applied.

use crate::node::EoNode;

/// Character literal, rendered `'c'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharData(pub char);

impl EoNode for CharData {
    fn render(&self, _indent: usize) -> String {
        format!("'{}'", self.0)
    }
}

/// Regex literal, rendered as the bare pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegexData(pub String);

impl EoNode for RegexData {
    fn render(&self, _indent: usize) -> String {
        self.0.clone()
    }
}
