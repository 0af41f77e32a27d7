//! # j2eo AST Crate
//!
//! Front end of the Java to EO translator: projects a Java concrete syntax
//! tree into a normalized AST the lowering stage consumes.
//!
//! ## Architecture
//!
//! ```text
//! Java source → (external parser) → java-cst (CST) → j2eo-ast (AST) → lowering → eo-tree
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use j2eo_ast::{project, Declaration};
//! use java_cst::build::{ident, rule, term};
//! use java_cst::{RuleKind, TerminalKind};
//!
//! let cst = rule(
//!     RuleKind::CompilationUnit,
//!     vec![rule(
//!         RuleKind::TypeDeclaration,
//!         vec![rule(
//!             RuleKind::ClassDeclaration,
//!             vec![
//!                 term(TerminalKind::Class, "class"),
//!                 ident("Main"),
//!                 rule(RuleKind::ClassBody, vec![]),
//!             ],
//!         )],
//!     )],
//! );
//! let unit = project(&cst).unwrap();
//! assert!(matches!(&unit.declarations[0], Declaration::Class(c) if c.name == "Main"));
//! ```
//!
//! ## Design Principles
//!
//! - **Total over valid trees**: untranslatable constructs become tagged
//!   placeholders plus a [`Diagnostic`], never a panic
//! - **Few hard failures**: local non-class types, unmapped operators and
//!   undecodable literals abort the unit ([`ProjectError`])
//! - **Independent units**: no state is shared between compilation units

pub mod ast;
pub mod batch;
pub mod diagnostic;
pub mod error;
pub mod tokens;
pub mod visitor;

// Re-exports for convenience
pub use ast::*;
pub use batch::{project_all, project_all_with};
pub use diagnostic::{Diagnostic, DiagnosticKind, Severity};
pub use error::ProjectError;
pub use tokens::{token_code, Token, TokenCode};
pub use visitor::cst_to_ast::{project, Projection, Projector};
