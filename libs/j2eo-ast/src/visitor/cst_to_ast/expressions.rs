//! # Expression Projection
//!
//! The grammar folds every expression form into one `expression` rule. A
//! node is resolved by an ordered chain of recognizers; the first one that
//! accepts the node wins:
//!
//! 1. array access: `[` `]` present
//! 2. unary: two children, an operator token labelled `prefix` or `postfix`
//! 3. cast: `(` type `)` operand
//! 4. operator forms without an abstract code (shifts, method references):
//!    placeholder, checked ahead of step 5 so `a << b` never collapses to `a`
//! 5. nested `expression` child
//! 6. primary forms: `primary`, identifier, creator, method call
//! 7. placeholder
//!
//! When the node carries a `bop` label the chain resolves the left operand.
//! The right side of `.` must be a name or a method call; operators in the
//! lexer's binary range build a [`Expression::Binary`].

use super::{dotted_name, identifier_text, malformed, Context};
use super::{declarations, literals, types};
use crate::ast::{DottedName, Expression, Initializer, PlaceholderTag, Type};
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::error::ProjectError;
use crate::tokens::{token_code, Token, TokenCode};
use java_cst::{CstNode, RuleKind, TerminalKind};
use tracing::{trace, warn};

// =============================================================================
// ENTRY POINT
// =============================================================================

/// Projects an `expression` node.
pub(crate) fn expression(cx: &mut Context, node: &CstNode) -> Result<Expression, ProjectError> {
    cx.grow(|cx| resolve(cx, node))
}

fn resolve(cx: &mut Context, node: &CstNode) -> Result<Expression, ProjectError> {
    let Some(bop) = node.labelled("bop") else {
        return recognize(cx, node);
    };
    let Some(kind) = bop.terminal_kind() else {
        return Err(malformed(bop, "operator token"));
    };

    if kind == TerminalKind::Dot {
        return member_access(cx, node);
    }
    if kind.is_binary_operator() {
        return binary(cx, node, bop, kind);
    }
    trace!(operator = ?kind, "operator outside binary range");
    Ok(cx.placeholder(
        PlaceholderTag::Expression,
        node,
        &format!("`{}` expression", bop.text_or_empty()),
    ))
}

// =============================================================================
// RECOGNIZER CHAIN
// =============================================================================

fn recognize(cx: &mut Context, node: &CstNode) -> Result<Expression, ProjectError> {
    if let Some(expr) = array_access(cx, node)? {
        trace!("array access");
        return Ok(expr);
    }
    if let Some(expr) = unary(cx, node)? {
        trace!("unary");
        return Ok(expr);
    }
    if let Some(expr) = cast(cx, node)? {
        trace!("cast");
        return Ok(expr);
    }
    // Runs before the nested-expression step so `a << b` is not read as `a`.
    if let Some(construct) = operator_form_without_code(node) {
        return Ok(cx.placeholder(PlaceholderTag::Expression, node, construct));
    }
    if let Some(nested) = node.rule(RuleKind::Expression) {
        return expression(cx, nested);
    }
    if let Some(primary_node) = node.rule(RuleKind::Primary) {
        return primary(cx, primary_node);
    }
    if let Some(identifier) = node.rule(RuleKind::Identifier) {
        return Ok(reference(identifier));
    }
    if let Some(creator_node) = node.rule(RuleKind::Creator) {
        return creator(cx, creator_node);
    }
    if let Some(call) = node.rule(RuleKind::MethodCall) {
        return method_call(cx, call, None);
    }
    if node.rule(RuleKind::SwitchExpression).is_some() {
        return Ok(cx.placeholder(PlaceholderTag::SwitchExpression, node, "switch expression"));
    }
    Ok(cx.placeholder(PlaceholderTag::Expression, node, construct_name(node)))
}

/// `a[i]`
fn array_access(cx: &mut Context, node: &CstNode) -> Result<Option<Expression>, ProjectError> {
    if !(node.has_terminal(TerminalKind::LBrack) && node.has_terminal(TerminalKind::RBrack)) {
        return Ok(None);
    }
    let object = required_expression(cx, node, 0)?;
    let index = required_expression(cx, node, 1)?;
    Ok(Some(Expression::ArrayAccess {
        object: Box::new(object),
        index: Box::new(index),
    }))
}

/// `-x`, `!x`, `x++`, ...
fn unary(cx: &mut Context, node: &CstNode) -> Result<Option<Expression>, ProjectError> {
    if node.child_count() != 2 || node.rule(RuleKind::Expression).is_none() {
        return Ok(None);
    }
    let (op_node, postfix) = match (node.labelled("prefix"), node.labelled("postfix")) {
        (Some(op), _) => (op, false),
        (None, Some(op)) => (op, true),
        (None, None) => return Ok(None),
    };
    let op = operator_code(op_node)?;
    let operand = Box::new(required_expression(cx, node, 0)?);
    Ok(Some(if postfix {
        Expression::UnaryPostfix { op, operand }
    } else {
        Expression::UnaryPrefix { op, operand }
    }))
}

/// `(T) x`
fn cast(cx: &mut Context, node: &CstNode) -> Result<Option<Expression>, ProjectError> {
    if !(node.has_terminal(TerminalKind::LParen) && node.has_terminal(TerminalKind::RParen)) {
        return Ok(None);
    }
    let Some(type_node) = node.type_type(0) else {
        return Ok(None);
    };
    let ty = types::type_type(cx, type_node)?;
    let operand = required_expression(cx, node, 0)?;
    Ok(Some(Expression::Cast {
        ty,
        operand: Box::new(operand),
    }))
}

/// Operator forms the grammar spells without a `bop` label and that have no
/// abstract code: shifts and method references.
fn operator_form_without_code(node: &CstNode) -> Option<&'static str> {
    if node.has_terminal(TerminalKind::ColonColon) {
        return Some("method reference");
    }
    let shift = node.labelled("bop").is_none()
        && node.rules(RuleKind::Expression).count() == 2
        && (node.has_terminal(TerminalKind::Lt) || node.has_terminal(TerminalKind::Gt));
    shift.then_some("shift expression")
}

fn required_expression(
    cx: &mut Context,
    node: &CstNode,
    index: usize,
) -> Result<Expression, ProjectError> {
    let child = node
        .rule_at(RuleKind::Expression, index)
        .ok_or_else(|| malformed(node, "operand expression"))?;
    expression(cx, child)
}

fn construct_name(node: &CstNode) -> &'static str {
    if node.rule(RuleKind::LambdaExpression).is_some() {
        "lambda expression"
    } else {
        "expression form"
    }
}

// =============================================================================
// OPERATORS
// =============================================================================

fn operator_code(op: &CstNode) -> Result<TokenCode, ProjectError> {
    let kind = op
        .terminal_kind()
        .ok_or_else(|| malformed(op, "operator token"))?;
    token_code(kind).ok_or_else(|| ProjectError::UnsupportedToken {
        kind,
        text: op.text_or_empty().to_string(),
        span: op.span,
    })
}

/// `left OP right` for an operator in the binary range.
fn binary(
    cx: &mut Context,
    node: &CstNode,
    bop: &CstNode,
    kind: TerminalKind,
) -> Result<Expression, ProjectError> {
    let (Some(left_node), Some(right_node)) = (
        node.rule_at(RuleKind::Expression, 0),
        node.rule_at(RuleKind::Expression, 1),
    ) else {
        trace!(operator = ?kind, "binary operator without two operands");
        return Ok(cx.placeholder(PlaceholderTag::Expression, node, "incomplete binary expression"));
    };
    let op = operator_code(bop)?;
    let left = expression(cx, left_node)?;
    let right = expression(cx, right_node)?;
    if op == TokenCode::Question {
        warn!(span = ?node.span, "conditional expression keeps only its first branch");
        cx.report(
            Diagnostic::warning(
                DiagnosticKind::Lossy,
                "conditional expression translated without its `:` branch".to_string(),
                node.span,
            )
            .with_hint("the false branch is dropped"),
        );
    }
    Ok(Expression::binary(op, left, right))
}

/// `left . right`: calls are kept with `left` as receiver and names become
/// field accesses. Any other right-hand side (`Outer.this`, `a.new B()`,
/// `X.super.m()`, `a.<T>m()`) is a placeholder.
///
/// A bare `super` on the left qualifies the access instead of becoming an
/// operand.
fn member_access(cx: &mut Context, node: &CstNode) -> Result<Expression, ProjectError> {
    let super_object = is_bare_super(node);
    if let Some(call) = node.rule(RuleKind::MethodCall) {
        let target = if super_object {
            None
        } else {
            Some(recognize(cx, node)?)
        };
        let mut invocation = method_call(cx, call, target)?;
        if let Expression::MethodInvocation { is_super, .. } = &mut invocation {
            *is_super |= super_object;
        }
        return Ok(invocation);
    }
    if let Some(identifier) = node.rule(RuleKind::Identifier) {
        let object = if super_object {
            Expression::This
        } else {
            recognize(cx, node)?
        };
        return Ok(Expression::FieldAccess {
            object: Box::new(object),
            is_super: super_object || node.has_terminal(TerminalKind::Super),
            field: Token::identifier(identifier_text(identifier)),
        });
    }
    warn!(span = ?node.span, "member access right-hand side is neither a name nor a call");
    Ok(cx.placeholder(
        PlaceholderTag::Expression,
        node,
        "member access to something other than a field or method",
    ))
}

/// True when the left operand of `.` is the bare `super` keyword.
fn is_bare_super(node: &CstNode) -> bool {
    node.rule(RuleKind::Expression)
        .and_then(|left| left.rule(RuleKind::Primary))
        .is_some_and(|primary| {
            primary.child_count() == 1 && primary.has_terminal(TerminalKind::Super)
        })
}

// =============================================================================
// PRIMARY FORMS
// =============================================================================

fn reference(identifier: &CstNode) -> Expression {
    Expression::SimpleReference(DottedName::single(identifier_text(identifier)))
}

/// Projects a `primary` node.
fn primary(cx: &mut Context, node: &CstNode) -> Result<Expression, ProjectError> {
    let nested = node.rule(RuleKind::Expression);
    if let Some(inner) = nested {
        let inner = expression(cx, inner)?;
        if node.has_terminal(TerminalKind::LParen) && node.has_terminal(TerminalKind::RParen) {
            return Ok(Expression::Parenthesized(Box::new(inner)));
        }
        return Ok(inner);
    }
    if let Some(identifier) = node.rule(RuleKind::Identifier) {
        return Ok(reference(identifier));
    }
    if node.has_terminal(TerminalKind::This) {
        return Ok(Expression::This);
    }
    if let Some(literal) = node.rule(RuleKind::Literal) {
        return literals::literal(cx, literal);
    }
    let construct = if node.has_terminal(TerminalKind::Super) {
        "`super` expression"
    } else if node.has_terminal(TerminalKind::Class) {
        "class literal"
    } else {
        "primary expression"
    };
    Ok(cx.placeholder(PlaceholderTag::Expression, node, construct))
}

/// Projects a `creator` (the part after `new`).
fn creator(cx: &mut Context, node: &CstNode) -> Result<Expression, ProjectError> {
    let name = node
        .rule(RuleKind::CreatedName)
        .ok_or_else(|| malformed(node, "createdName"))?;

    if let Some(rest) = node.rule(RuleKind::ClassCreatorRest) {
        let arguments = match rest.rule(RuleKind::Arguments) {
            Some(args) => arguments(cx, args)?,
            None => Vec::new(),
        };
        let body = rest
            .rule(RuleKind::ClassBody)
            .map(|body| declarations::class_body(cx, body))
            .transpose()?;
        return Ok(Expression::InstanceCreation {
            ty: Type::named(dotted_name(name)?),
            arguments,
            body,
        });
    }

    if let Some(rest) = node.rule(RuleKind::ArrayCreatorRest) {
        let element = match name.rule(RuleKind::PrimitiveType) {
            Some(primitive) => types::primitive_type(primitive, 0)?,
            None => Type::named(dotted_name(name)?),
        };
        let initializer = match rest.rule(RuleKind::ArrayInitializer) {
            Some(init) => array_initializer(cx, init)?,
            None => vec![Initializer::Expression(required_expression(cx, rest, 0)?)],
        };
        return Ok(Expression::ArrayCreation {
            element,
            initializer,
        });
    }

    Ok(cx.placeholder(
        PlaceholderTag::UnknownCreatorContext,
        node,
        "object creation form",
    ))
}

/// Projects a `methodCall`, with `target` as receiver when it follows `.`.
fn method_call(
    cx: &mut Context,
    node: &CstNode,
    target: Option<Expression>,
) -> Result<Expression, ProjectError> {
    let is_super = node.has_terminal(TerminalKind::Super);
    let name = if let Some(identifier) = node.rule(RuleKind::Identifier) {
        Token::identifier(identifier_text(identifier))
    } else if is_super {
        Token::with_text(TokenCode::Super, "super")
    } else if node.has_terminal(TerminalKind::This) {
        Token::with_text(TokenCode::This, "this")
    } else {
        return Err(malformed(node, "method name, `this` or `super`"));
    };
    let arguments = match (node.rule(RuleKind::ExpressionList), node.rule(RuleKind::Arguments)) {
        (Some(list), _) => expression_list(cx, list)?,
        (None, Some(args)) => arguments(cx, args)?,
        (None, None) => Vec::new(),
    };
    Ok(Expression::MethodInvocation {
        target: target.map(Box::new),
        is_super,
        name,
        arguments,
    })
}

/// Projects `arguments`: `( expressionList? )`.
fn arguments(cx: &mut Context, node: &CstNode) -> Result<Vec<Expression>, ProjectError> {
    match node.rule(RuleKind::ExpressionList) {
        Some(list) => expression_list(cx, list),
        None => Ok(Vec::new()),
    }
}

fn expression_list(cx: &mut Context, node: &CstNode) -> Result<Vec<Expression>, ProjectError> {
    node.rules(RuleKind::Expression)
        .map(|e| expression(cx, e))
        .collect()
}

// =============================================================================
// INITIALIZERS
// =============================================================================

/// Projects a `variableInitializer`.
pub(crate) fn variable_initializer(
    cx: &mut Context,
    node: &CstNode,
) -> Result<Initializer, ProjectError> {
    if let Some(array) = node.rule(RuleKind::ArrayInitializer) {
        return array_initializer(cx, array).map(Initializer::Array);
    }
    required_expression(cx, node, 0).map(Initializer::Expression)
}

/// Projects an `arrayInitializer`: `{ a, b, {c} }`.
pub(crate) fn array_initializer(
    cx: &mut Context,
    node: &CstNode,
) -> Result<Vec<Initializer>, ProjectError> {
    node.rules(RuleKind::VariableInitializer)
        .map(|init| cx.grow(|cx| variable_initializer(cx, init)))
        .collect()
}
