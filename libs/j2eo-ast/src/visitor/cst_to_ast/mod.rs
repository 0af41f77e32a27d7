//! # CST to AST Projection
//!
//! Projects a Java CST onto the normalized AST.
//!
//! Projection is total over grammatically valid trees: constructs without a
//! translation become tagged placeholders and a [`Diagnostic`] is recorded.
//! Only the conditions in [`ProjectError`] abort a unit.
//!
//! ## Example
//!
//! ```rust
//! use j2eo_ast::visitor::cst_to_ast::project;
//! use java_cst::build::rule;
//! use java_cst::RuleKind;
//!
//! let unit = project(&rule(RuleKind::CompilationUnit, vec![])).unwrap();
//! assert!(unit.declarations.is_empty());
//! ```

mod declarations;
mod expressions;
mod literals;
mod modifiers;
mod statements;
mod types;

use crate::ast::{CompilationUnit, DottedName, Expression, PlaceholderTag};
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::error::ProjectError;
use config::constants::ProjectionConfig;
use java_cst::{CstNode, RuleKind};
use stacker::maybe_grow;
use tracing::{debug, trace};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Result of projecting one compilation unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub unit: CompilationUnit,
    /// Placeholders, literal fallbacks and other fidelity losses, in the
    /// order they were encountered.
    pub diagnostics: Vec<Diagnostic>,
}

/// Projects CST roots with a fixed configuration.
///
/// ## Example
///
/// ```rust
/// use config::constants::{LiteralFallback, ProjectionConfig};
/// use j2eo_ast::visitor::cst_to_ast::Projector;
/// use java_cst::build::rule;
/// use java_cst::RuleKind;
///
/// let projector = Projector::with_config(
///     ProjectionConfig::default().with_literal_fallback(LiteralFallback::Reject),
/// );
/// let projection = projector.project(&rule(RuleKind::CompilationUnit, vec![])).unwrap();
/// assert!(projection.diagnostics.is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Projector {
    config: ProjectionConfig,
}

impl Projector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Projects one `compilationUnit` CST.
    ///
    /// ## Parameters
    ///
    /// - `root`: CST root; must be a `compilationUnit` rule node
    ///
    /// ## Returns
    ///
    /// The AST with the diagnostics gathered, or the first hard failure.
    pub fn project(&self, root: &CstNode) -> Result<Projection, ProjectError> {
        debug!(span = ?root.span, "projecting compilation unit");
        let mut cx = Context::new(self.config);
        let unit = declarations::compilation_unit(&mut cx, root)?;
        debug!(
            declarations = unit.declarations.len(),
            diagnostics = cx.diagnostics.len(),
            "projected compilation unit"
        );
        Ok(Projection {
            unit,
            diagnostics: cx.diagnostics,
        })
    }

    /// Loads a CST from JSON and projects it.
    pub fn project_json(&self, json: &str) -> Result<Projection, ProjectError> {
        let root = CstNode::from_json(json)?;
        self.project(&root)
    }
}

/// Projects one compilation unit with the default configuration.
///
/// ## Parameters
///
/// - `root`: CST root for one compilation unit
///
/// ## Returns
///
/// `Result<CompilationUnit, ProjectError>` - AST on success, hard failure
/// otherwise
pub fn project(root: &CstNode) -> Result<CompilationUnit, ProjectError> {
    Projector::default().project(root).map(|p| p.unit)
}

// =============================================================================
// PROJECTION CONTEXT
// =============================================================================

/// Per-unit state threaded through the projection rules.
pub(crate) struct Context {
    config: ProjectionConfig,
    diagnostics: Vec<Diagnostic>,
}

impl Context {
    fn new(config: ProjectionConfig) -> Self {
        Self {
            config,
            diagnostics: Vec::new(),
        }
    }

    pub(crate) fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Runs `f` on a fresh stack segment when the remaining stack drops
    /// below the configured red zone.
    pub(crate) fn grow<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let red_zone = self.config.red_zone;
        let stack_size = self.config.stack_size;
        maybe_grow(red_zone, stack_size, || f(self))
    }

    pub(crate) fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Records a placeholder for `node` and returns the placeholder expression.
    pub(crate) fn placeholder(
        &mut self,
        tag: PlaceholderTag,
        node: &CstNode,
        construct: &str,
    ) -> Expression {
        trace!(%tag, construct, "placeholder");
        self.report(Diagnostic::warning(
            DiagnosticKind::Placeholder(tag),
            format!("{construct} is not translated"),
            node.span,
        ));
        Expression::Placeholder(tag)
    }
}

// =============================================================================
// SHARED HELPERS
// =============================================================================

pub(crate) fn malformed(node: &CstNode, expected: &'static str) -> ProjectError {
    ProjectError::MalformedTree {
        expected,
        span: node.span,
    }
}

/// Text of an `identifier` rule (or a bare token).
pub(crate) fn identifier_text(node: &CstNode) -> String {
    match node.first_terminal() {
        Some(token) => token.text_or_empty().to_string(),
        None => node.flattened_text(),
    }
}

/// Required `identifier` child of `node`.
pub(crate) fn required_identifier(node: &CstNode) -> Result<String, ProjectError> {
    node.rule(RuleKind::Identifier)
        .map(identifier_text)
        .ok_or_else(|| malformed(node, "identifier"))
}

/// Dotted name from the `identifier` children of `node`.
pub(crate) fn dotted_name(node: &CstNode) -> Result<DottedName, ProjectError> {
    DottedName::from_parts(node.rules(RuleKind::Identifier).map(identifier_text))
        .ok_or_else(|| malformed(node, "at least one identifier"))
}

/// First child of kind `rule` that follows a token of kind `after`.
pub(crate) fn rule_after(
    node: &CstNode,
    after: java_cst::TerminalKind,
    rule: RuleKind,
) -> Option<&CstNode> {
    node.children
        .iter()
        .skip_while(|c| !c.is_terminal(after))
        .find(|c| c.is_rule(rule))
}
