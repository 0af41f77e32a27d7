//! # Java CST
//!
//! Input contract of the j2eo projector: the concrete syntax tree an
//! external ANTLR-style Java parser produces.
//!
//! ## Architecture
//!
//! ```text
//! Java source → (external parser) → JSON / in-process tree → CstNode → j2eo-ast
//! ```
//!
//! The crate does not parse Java. It models the tree shape (rule and token
//! kinds, element labels, spans) and offers structural queries over it.
//!
//! ## Example
//!
//! ```rust
//! use java_cst::build::{ident, rule};
//! use java_cst::{CstNode, RuleKind};
//!
//! let tree = rule(RuleKind::QualifiedName, vec![ident("java"), ident("util")]);
//! let json = tree.to_json().unwrap();
//! assert_eq!(CstNode::from_json(&json).unwrap(), tree);
//! ```

pub mod build;
pub mod cst;
pub mod kind;
pub mod span;

pub use cst::{CstError, CstNode};
pub use kind::{NodeKind, RuleKind, TerminalKind};
pub use span::Span;
