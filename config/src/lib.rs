//! # Config Crate
//!
//! Centralized configuration for the j2eo projection pipeline.
//! Literal fallbacks, rendering indentation and recursion limits are defined
//! here so the CST projector and the EO tree renderer agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ProjectionConfig, LiteralFallback, INDENT_WIDTH};
//!
//! let cfg = ProjectionConfig::default();
//! assert_eq!(cfg.literal_fallback, LiteralFallback::Sentinel);
//! assert_eq!(" ".repeat(INDENT_WIDTH * 2).len(), 4);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure values, usable from every crate in the workspace
//! - **Validated**: Runtime configuration is built through checked constructors

pub mod constants;
