//! # EO Target Tree
//!
//! Minimal node set of the EO object tree and its text rendering.
//!
//! ## Rendering contract
//!
//! Every node renders to text at an indentation level. Nested renderings
//! compose by string concatenation on the first line only:
//!
//! - a [`Dot`] with a source renders the source and appends `.name` to the
//!   source's first line; later lines are left untouched
//! - a [`Dot`] without a source renders `indent` levels of indentation
//!   followed by its name
//! - data leaves ([`CharData`], [`RegexData`]) render literal text with no
//!   indentation
//!
//! One level is [`config::constants::INDENT_WIDTH`] spaces.
//!
//! ## Example
//!
//! ```rust
//! use eo_tree::{BndExpr, Dot, EoNode};
//!
//! let bound = BndExpr::new(Box::new(Dot::from("memory")), "bnd1");
//! assert_eq!(bound.render(0), "memory > bnd1");
//! assert_eq!(bound.render(1), "  memory > bnd1");
//! ```

pub mod data;
pub mod dot;
pub mod expr;
pub mod node;

pub use data::{CharData, RegexData};
pub use dot::Dot;
pub use expr::{BndExpr, CopyExpr};
pub use node::{indentation, EoNode};
