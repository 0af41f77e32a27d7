//! # AST Visitors
//!
//! ```text
//! visitor/
//! ├── mod.rs              - This file
//! └── cst_to_ast/         - CST to AST projection
//!     ├── mod.rs          - Projector, context, shared helpers
//!     ├── declarations.rs - Compilation unit, classes, members
//!     ├── statements.rs   - Blocks and statements
//!     ├── expressions.rs  - Expression disambiguation
//!     ├── literals.rs     - Literals and the sentinel fallback
//!     ├── modifiers.rs    - Modifier decoding
//!     └── types.rs        - Types, type arguments, type lists
//! ```

pub mod cst_to_ast;
