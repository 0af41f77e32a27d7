//! The rendering trait shared by every target-tree node.

use config::constants::INDENT_WIDTH;
use std::fmt;

/// A node of the EO target tree.
pub trait EoNode: fmt::Debug {
    /// Renders the node as EO text at indentation level `indent`.
    fn render(&self, indent: usize) -> String;
}

/// Leading whitespace for indentation level `indent`.
pub fn indentation(indent: usize) -> String {
    " ".repeat(indent * INDENT_WIDTH)
}
