//! # Literal Projection
//!
//! Boolean, decimal integer, null, floating point and string literals map
//! directly. Other forms (hex/octal/binary integers, characters, text
//! blocks) follow the configured [`LiteralFallback`].

use super::Context;
use crate::ast::Expression;
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::error::ProjectError;
use crate::tokens::{Token, TokenCode};
use config::constants::{LiteralFallback, SENTINEL_INTEGER_LITERAL};
use java_cst::{CstNode, RuleKind, TerminalKind};
use tracing::warn;

/// Projects a `literal` node.
pub(crate) fn literal(cx: &mut Context, node: &CstNode) -> Result<Expression, ProjectError> {
    if let Some(token) = node.terminal(TerminalKind::BoolLiteral) {
        let code = match token.text_or_empty() {
            "true" => TokenCode::True,
            "false" => TokenCode::False,
            _ => return Err(invalid(token)),
        };
        return Ok(Expression::Literal(Token::new(code)));
    }
    if let Some(integer) = node.rule(RuleKind::IntegerLiteral) {
        return match integer.terminal(TerminalKind::DecimalLiteral) {
            Some(decimal) => Ok(Expression::Literal(Token::with_text(
                TokenCode::IntegerLiteral,
                non_empty(decimal)?,
            ))),
            None => fallback(cx, integer),
        };
    }
    if node.has_terminal(TerminalKind::NullLiteral) {
        return Ok(Expression::Literal(Token::new(TokenCode::Null)));
    }
    if let Some(float) = node.rule(RuleKind::FloatLiteral) {
        let text = float.flattened_text();
        if text.is_empty() {
            return Err(invalid(float));
        }
        return Ok(Expression::Literal(Token::with_text(
            TokenCode::FloatingLiteral,
            text,
        )));
    }
    if let Some(string) = node.terminal(TerminalKind::StringLiteral) {
        let content = unquote(string.text_or_empty()).ok_or_else(|| invalid(string))?;
        return Ok(Expression::Literal(Token::with_text(
            TokenCode::StringLiteral,
            content,
        )));
    }
    if node.first_terminal().is_some() {
        return fallback(cx, node);
    }
    Err(invalid(node))
}

/// Strips the enclosing double quotes of a string literal.
fn unquote(text: &str) -> Option<&str> {
    text.strip_prefix('"')?.strip_suffix('"')
}

fn non_empty(token: &CstNode) -> Result<&str, ProjectError> {
    match token.text_or_empty() {
        "" => Err(invalid(token)),
        text => Ok(text),
    }
}

fn fallback(cx: &mut Context, node: &CstNode) -> Result<Expression, ProjectError> {
    let text = node.flattened_text();
    match cx.config().literal_fallback {
        LiteralFallback::Reject => Err(ProjectError::InvalidLiteral {
            text,
            span: node.span,
        }),
        LiteralFallback::Sentinel => {
            warn!(literal = %text, "unsupported literal replaced by sentinel");
            cx.report(
                Diagnostic::warning(
                    DiagnosticKind::LiteralFallback,
                    format!("literal `{text}` replaced by {SENTINEL_INTEGER_LITERAL}"),
                    node.span,
                )
                .with_hint("only decimal integer, floating point, string, boolean and null literals are translated"),
            );
            Ok(Expression::Literal(Token::with_text(
                TokenCode::IntegerLiteral,
                SENTINEL_INTEGER_LITERAL,
            )))
        }
    }
}

fn invalid(node: &CstNode) -> ProjectError {
    ProjectError::InvalidLiteral {
        text: node.flattened_text(),
        span: node.span,
    }
}
