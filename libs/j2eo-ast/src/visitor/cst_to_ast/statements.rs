//! # Statement Projection
//!
//! Blocks, block statements and the labelled alternatives of `statement`.
//! Alternatives without a translation become placeholder expression
//! statements, one tag per construct.

use super::expressions::expression;
use super::{declarations, identifier_text, malformed, modifiers, types, Context};
use crate::ast::{
    Block, BlockStatement, Declaration, Expression, Initializer, PlaceholderTag, Statement,
    VariableDeclaration,
};
use crate::error::ProjectError;
use java_cst::{CstNode, RuleKind, TerminalKind};

/// Projects a `block`.
pub(crate) fn block(cx: &mut Context, node: &CstNode) -> Result<Block, ProjectError> {
    let mut statements = Vec::new();
    for child in node.rules(RuleKind::BlockStatement) {
        statements.extend(block_statement(cx, child)?);
    }
    Ok(Block { statements })
}

/// Projects a `blockStatement`. Local variable declarations expand into one
/// declaration per variable.
fn block_statement(cx: &mut Context, node: &CstNode) -> Result<Vec<BlockStatement>, ProjectError> {
    if let Some(local) = node.rule(RuleKind::LocalVariableDeclaration) {
        return Ok(local_variables(cx, local)?
            .into_iter()
            .map(|v| BlockStatement::Declaration(Declaration::Variable(v)))
            .collect());
    }
    if let Some(stmt) = node.statement(0) {
        return Ok(vec![BlockStatement::Statement(statement(cx, stmt)?)]);
    }
    if let Some(local_type) = node.rule(RuleKind::LocalTypeDeclaration) {
        let class = declarations::local_type(cx, local_type)?;
        return Ok(vec![BlockStatement::Declaration(class)]);
    }
    Err(malformed(node, "local declaration or statement"))
}

/// Projects a `localVariableDeclaration`:
/// `var x = e` or `T a, b = e`.
fn local_variables(
    cx: &mut Context,
    node: &CstNode,
) -> Result<Vec<VariableDeclaration>, ProjectError> {
    let modifiers = modifiers::decode(node.rules(RuleKind::VariableModifier));

    if node.has_terminal(TerminalKind::Var) {
        let name = node
            .rule(RuleKind::Identifier)
            .map(identifier_text)
            .ok_or_else(|| malformed(node, "`var` variable name"))?;
        let init = node
            .rule(RuleKind::Expression)
            .ok_or_else(|| malformed(node, "`var` initializer"))?;
        return Ok(vec![VariableDeclaration {
            name,
            modifiers,
            ty: None,
            dims: 0,
            initializer: Some(Initializer::Expression(expression(cx, init)?)),
        }]);
    }

    let ty = node
        .type_type(0)
        .ok_or_else(|| malformed(node, "local variable type"))?;
    let ty = types::type_type(cx, ty)?;
    let declarators = node
        .rule(RuleKind::VariableDeclarators)
        .ok_or_else(|| malformed(node, "variableDeclarators"))?;
    declarations::variable_declarators(cx, declarators, modifiers, Some(ty))
}

/// Projects a `statement` alternative.
pub(crate) fn statement(cx: &mut Context, node: &CstNode) -> Result<Statement, ProjectError> {
    cx.grow(|cx| statement_inner(cx, node))
}

fn statement_inner(cx: &mut Context, node: &CstNode) -> Result<Statement, ProjectError> {
    let Some(kind) = node.rule_kind() else {
        return Err(malformed(node, "statement"));
    };
    let stmt = match kind {
        RuleKind::StatementBlockLabel => {
            let body = node
                .rule(RuleKind::Block)
                .ok_or_else(|| malformed(node, "block"))?;
            Statement::Block(block(cx, body)?)
        }
        RuleKind::StatementIf => Statement::If {
            condition: condition(cx, node)?,
            then_branch: Box::new(nested(cx, node, 0)?),
            else_branch: node
                .statement(1)
                .map(|s| statement(cx, s).map(Box::new))
                .transpose()?,
        },
        RuleKind::StatementWhile => Statement::While {
            condition: condition(cx, node)?,
            body: Box::new(nested(cx, node, 0)?),
        },
        RuleKind::StatementDo => Statement::Do {
            body: Box::new(nested(cx, node, 0)?),
            condition: condition(cx, node)?,
        },
        RuleKind::StatementReturn => Statement::Return(
            node.rule(RuleKind::Expression)
                .map(|e| expression(cx, e))
                .transpose()?,
        ),
        RuleKind::StatementBreak => Statement::Break(label(node)),
        RuleKind::StatementContinue => Statement::Continue(label(node)),
        RuleKind::StatementAssert => Statement::Assert {
            condition: operand(cx, node, 0)?,
            message: node
                .rule_at(RuleKind::Expression, 1)
                .map(|e| expression(cx, e))
                .transpose()?,
        },
        RuleKind::StatementExpression => Statement::Expression(operand(cx, node, 0)?),
        RuleKind::StatementSwitchExpression => {
            placeholder(cx, node, PlaceholderTag::SwitchExpression, "switch expression")
        }
        RuleKind::StatementFor => placeholder(cx, node, PlaceholderTag::ForLoop, "for loop"),
        RuleKind::StatementIdentifierLabel => {
            placeholder(cx, node, PlaceholderTag::IdentifierLabel, "labelled statement")
        }
        RuleKind::StatementSemi => placeholder(cx, node, PlaceholderTag::SemiNoop, "empty statement"),
        RuleKind::StatementSwitch => {
            placeholder(cx, node, PlaceholderTag::SwitchStatement, "switch statement")
        }
        RuleKind::StatementTryResourceSpecification => placeholder(
            cx,
            node,
            PlaceholderTag::TryResource,
            "try-with-resources statement",
        ),
        RuleKind::StatementTryBlock => {
            placeholder(cx, node, PlaceholderTag::TryBlock, "try statement")
        }
        RuleKind::StatementThrow => placeholder(cx, node, PlaceholderTag::Statement, "throw statement"),
        RuleKind::StatementSynchronized => {
            placeholder(cx, node, PlaceholderTag::Statement, "synchronized statement")
        }
        RuleKind::StatementYield => placeholder(cx, node, PlaceholderTag::Statement, "yield statement"),
        _ => return Err(malformed(node, "statement")),
    };
    Ok(stmt)
}

fn placeholder(
    cx: &mut Context,
    node: &CstNode,
    tag: PlaceholderTag,
    construct: &str,
) -> Statement {
    Statement::Expression(cx.placeholder(tag, node, construct))
}

/// Condition inside `parExpression`.
fn condition(cx: &mut Context, node: &CstNode) -> Result<Expression, ProjectError> {
    let par = node
        .rule(RuleKind::ParExpression)
        .ok_or_else(|| malformed(node, "parenthesized condition"))?;
    operand(cx, par, 0)
}

fn operand(cx: &mut Context, node: &CstNode, index: usize) -> Result<Expression, ProjectError> {
    let expr = node
        .rule_at(RuleKind::Expression, index)
        .ok_or_else(|| malformed(node, "expression"))?;
    expression(cx, expr)
}

fn nested(cx: &mut Context, node: &CstNode, index: usize) -> Result<Statement, ProjectError> {
    let stmt = node
        .statement(index)
        .ok_or_else(|| malformed(node, "nested statement"))?;
    statement(cx, stmt)
}

/// Target label of `break` / `continue`.
fn label(node: &CstNode) -> Option<String> {
    node.rule(RuleKind::Identifier).map(identifier_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Type;
    use crate::tokens::{Token, TokenCode};
    use config::constants::ProjectionConfig;
    use java_cst::build::{ident, labelled, rule, term};

    fn cx() -> Context {
        Context::new(ProjectionConfig::default())
    }

    fn name(text: &str) -> CstNode {
        rule(RuleKind::Expression, vec![rule(RuleKind::Primary, vec![ident(text)])])
    }

    fn int_type() -> CstNode {
        rule(
            RuleKind::TypePrimitiveType,
            vec![rule(RuleKind::PrimitiveType, vec![term(TerminalKind::Int, "int")])],
        )
    }

    fn one() -> CstNode {
        rule(
            RuleKind::Expression,
            vec![rule(
                RuleKind::Primary,
                vec![rule(
                    RuleKind::Literal,
                    vec![rule(
                        RuleKind::IntegerLiteral,
                        vec![term(TerminalKind::DecimalLiteral, "1")],
                    )],
                )],
            )],
        )
    }

    fn declarator(var: &str, init: Option<CstNode>) -> CstNode {
        let mut children = vec![rule(RuleKind::VariableDeclaratorId, vec![ident(var)])];
        if let Some(init) = init {
            children.push(term(TerminalKind::Assign, "="));
            children.push(rule(RuleKind::VariableInitializer, vec![init]));
        }
        rule(RuleKind::VariableDeclarator, children)
    }

    fn block_of(statements: Vec<CstNode>) -> CstNode {
        rule(
            RuleKind::Block,
            statements
                .into_iter()
                .map(|s| rule(RuleKind::BlockStatement, vec![s]))
                .collect(),
        )
    }

    fn par(expr: CstNode) -> CstNode {
        rule(
            RuleKind::ParExpression,
            vec![term(TerminalKind::LParen, "("), expr, term(TerminalKind::RParen, ")")],
        )
    }

    #[test]
    fn test_local_declarators_expand_in_order() {
        // int a, b = 1;
        let local = rule(
            RuleKind::LocalVariableDeclaration,
            vec![
                int_type(),
                rule(
                    RuleKind::VariableDeclarators,
                    vec![
                        declarator("a", None),
                        term(TerminalKind::Comma, ","),
                        declarator("b", Some(one())),
                    ],
                ),
            ],
        );
        let block = block(&mut cx(), &block_of(vec![local])).unwrap();
        let vars: Vec<_> = block
            .statements
            .iter()
            .map(|s| match s {
                BlockStatement::Declaration(Declaration::Variable(v)) => v,
                other => panic!("expected variable, got {other:?}"),
            })
            .collect();
        assert_eq!(vars.len(), 2);
        assert_eq!(vars[0].name, "a");
        assert_eq!(vars[0].initializer, None);
        assert_eq!(vars[1].name, "b");
        assert_eq!(
            vars[1].initializer,
            Some(Initializer::Expression(Expression::Literal(Token::with_text(
                TokenCode::IntegerLiteral,
                "1"
            ))))
        );
        let int = Some(Type::Primitive {
            code: TokenCode::Int,
            dims: 0,
        });
        assert_eq!(vars[0].ty, int);
        assert_eq!(vars[1].ty, int);
        assert_eq!(vars[0].modifiers, None);
    }

    #[test]
    fn test_var_declaration_has_no_type() {
        let local = rule(
            RuleKind::LocalVariableDeclaration,
            vec![
                rule(
                    RuleKind::VariableModifier,
                    vec![term(TerminalKind::Final, "final")],
                ),
                term(TerminalKind::Var, "var"),
                ident("x"),
                term(TerminalKind::Assign, "="),
                name("y"),
            ],
        );
        let vars = local_variables(&mut cx(), &local).unwrap();
        assert_eq!(vars.len(), 1);
        assert_eq!(vars[0].ty, None);
        assert!(vars[0]
            .modifiers
            .as_ref()
            .is_some_and(|m| m.contains(TokenCode::Final)));
        assert_eq!(
            vars[0].initializer,
            Some(Initializer::Expression(Expression::reference("y")))
        );
    }

    #[test]
    fn test_if_else() {
        let node = rule(
            RuleKind::StatementIf,
            vec![
                term(TerminalKind::If, "if"),
                par(name("c")),
                rule(RuleKind::StatementBreak, vec![term(TerminalKind::Break, "break")]),
                term(TerminalKind::Else, "else"),
                rule(
                    RuleKind::StatementContinue,
                    vec![term(TerminalKind::Continue, "continue"), ident("outer")],
                ),
            ],
        );
        assert_eq!(
            statement(&mut cx(), &node).unwrap(),
            Statement::If {
                condition: Expression::reference("c"),
                then_branch: Box::new(Statement::Break(None)),
                else_branch: Some(Box::new(Statement::Continue(Some("outer".to_string())))),
            }
        );
    }

    #[test]
    fn test_while_and_return() {
        let node = rule(
            RuleKind::StatementWhile,
            vec![
                term(TerminalKind::While, "while"),
                par(name("c")),
                rule(
                    RuleKind::StatementReturn,
                    vec![term(TerminalKind::Return, "return"), name("x")],
                ),
            ],
        );
        assert_eq!(
            statement(&mut cx(), &node).unwrap(),
            Statement::While {
                condition: Expression::reference("c"),
                body: Box::new(Statement::Return(Some(Expression::reference("x")))),
            }
        );
    }

    #[test]
    fn test_assignment_statement() {
        let assign = rule(
            RuleKind::Expression,
            vec![name("x"), labelled("bop", term(TerminalKind::Assign, "=")), one()],
        );
        let node = rule(
            RuleKind::StatementExpression,
            vec![assign, term(TerminalKind::Semi, ";")],
        );
        assert!(matches!(
            statement(&mut cx(), &node).unwrap(),
            Statement::Expression(Expression::Binary {
                op: TokenCode::Assign,
                ..
            })
        ));
    }

    #[test]
    fn test_untranslated_statements_have_distinct_tags() {
        let cases = [
            (RuleKind::StatementFor, PlaceholderTag::ForLoop),
            (RuleKind::StatementSwitch, PlaceholderTag::SwitchStatement),
            (RuleKind::StatementSwitchExpression, PlaceholderTag::SwitchExpression),
            (RuleKind::StatementTryBlock, PlaceholderTag::TryBlock),
            (RuleKind::StatementTryResourceSpecification, PlaceholderTag::TryResource),
            (RuleKind::StatementIdentifierLabel, PlaceholderTag::IdentifierLabel),
            (RuleKind::StatementSemi, PlaceholderTag::SemiNoop),
            (RuleKind::StatementThrow, PlaceholderTag::Statement),
        ];
        let mut cx = cx();
        for (kind, tag) in cases {
            let stmt = statement(&mut cx, &rule(kind, vec![])).unwrap();
            assert_eq!(stmt.placeholder_tag(), Some(tag), "{kind:?}");
        }
        assert_eq!(cx.diagnostics.len(), cases.len());
    }

    #[test]
    fn test_local_class_is_declaration() {
        let local = rule(
            RuleKind::LocalTypeDeclaration,
            vec![rule(
                RuleKind::ClassDeclaration,
                vec![
                    term(TerminalKind::Class, "class"),
                    ident("Local"),
                    rule(RuleKind::ClassBody, vec![]),
                ],
            )],
        );
        let block = block(&mut cx(), &block_of(vec![local])).unwrap();
        assert!(matches!(
            &block.statements[..],
            [BlockStatement::Declaration(Declaration::Class(class))] if class.name == "Local"
        ));
    }

    #[test]
    fn test_local_interface_is_rejected() {
        let local = rule(
            RuleKind::LocalTypeDeclaration,
            vec![rule(RuleKind::InterfaceDeclaration, vec![ident("I")])],
        );
        let err = block(&mut cx(), &block_of(vec![local])).unwrap_err();
        assert!(matches!(
            err,
            ProjectError::UnsupportedLocalType { construct, .. } if construct == "InterfaceDeclaration"
        ));
    }

    #[test]
    fn test_unknown_block_statement_is_malformed() {
        let node = block_of(vec![term(TerminalKind::Semi, ";")]);
        assert!(matches!(
            block(&mut cx(), &node).unwrap_err(),
            ProjectError::MalformedTree { .. }
        ));
    }
}
