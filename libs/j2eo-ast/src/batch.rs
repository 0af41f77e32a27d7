//! # Batch Projection
//!
//! Compilation units are independent, so a batch projects them in parallel
//! on the rayon pool. Each unit gets its own [`Projector`] invocation and
//! results keep the input order.

use crate::ast::CompilationUnit;
use crate::error::ProjectError;
use crate::visitor::cst_to_ast::{Projection, Projector};
use java_cst::CstNode;
use rayon::prelude::*;
use tracing::debug;

/// Projects every root with the default configuration.
///
/// ## Returns
///
/// One result per root, in input order. A failing unit does not affect
/// the others.
pub fn project_all(roots: &[CstNode]) -> Vec<Result<CompilationUnit, ProjectError>> {
    project_all_with(&Projector::default(), roots)
        .into_iter()
        .map(|result| result.map(|p| p.unit))
        .collect()
}

/// Projects every root with `projector`, keeping diagnostics.
pub fn project_all_with(
    projector: &Projector,
    roots: &[CstNode],
) -> Vec<Result<Projection, ProjectError>> {
    debug!(units = roots.len(), "projecting batch");
    roots.par_iter().map(|root| projector.project(root)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use java_cst::build::{ident, rule, term};
    use java_cst::{RuleKind, TerminalKind};

    fn unit_with_class(name: &str) -> CstNode {
        rule(
            RuleKind::CompilationUnit,
            vec![rule(
                RuleKind::TypeDeclaration,
                vec![rule(
                    RuleKind::ClassDeclaration,
                    vec![
                        term(TerminalKind::Class, "class"),
                        ident(name),
                        rule(RuleKind::ClassBody, vec![]),
                    ],
                )],
            )],
        )
    }

    fn class_name(unit: &CompilationUnit) -> &str {
        match &unit.declarations[..] {
            [crate::ast::Declaration::Class(class)] => &class.name,
            other => panic!("expected one class, got {other:?}"),
        }
    }

    #[test]
    fn test_results_keep_input_order() {
        let roots: Vec<_> = (0..32).map(|i| unit_with_class(&format!("C{i}"))).collect();
        let results = project_all(&roots);
        assert_eq!(results.len(), 32);
        for (i, result) in results.iter().enumerate() {
            assert_eq!(class_name(result.as_ref().unwrap()), format!("C{i}"));
        }
    }

    #[test]
    fn test_failure_is_isolated() {
        let roots = vec![
            unit_with_class("A"),
            rule(RuleKind::Block, vec![]),
            unit_with_class("B"),
        ];
        let results = project_all(&roots);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(ProjectError::MalformedTree { .. })));
        assert_eq!(class_name(results[2].as_ref().unwrap()), "B");
    }
}
