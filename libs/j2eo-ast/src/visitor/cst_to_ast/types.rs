//! # Type Projection
//!
//! `typeType` alternatives, type arguments, type parameters and type lists.
//!
//! Named types keep only the last type-argument list of a qualified name:
//! `A<B>.C<D>` keeps `<D>`.

use super::{dotted_name, malformed, required_identifier, Context};
use crate::ast::{Type, TypeArgument, TypeParameter, WildcardBound};
use crate::error::ProjectError;
use crate::tokens::primitive_code;
use java_cst::{CstNode, RuleKind, TerminalKind};

/// Projects a `typeType` alternative.
pub(crate) fn type_type(cx: &mut Context, node: &CstNode) -> Result<Type, ProjectError> {
    let dims = node.terminals(TerminalKind::LBrack).count();
    match node.rule_kind() {
        Some(RuleKind::TypeClassOrInterfaceType) => {
            let class = node
                .rule(RuleKind::ClassOrInterfaceType)
                .ok_or_else(|| malformed(node, "classOrInterfaceType"))?;
            class_or_interface_type(cx, class, dims)
        }
        Some(RuleKind::TypePrimitiveType) => {
            let primitive = node
                .rule(RuleKind::PrimitiveType)
                .ok_or_else(|| malformed(node, "primitiveType"))?;
            primitive_type(primitive, dims)
        }
        _ => Err(malformed(node, "typeType alternative")),
    }
}

/// Projects a `primitiveType` node with the given dimensions.
pub(crate) fn primitive_type(node: &CstNode, dims: usize) -> Result<Type, ProjectError> {
    let code = node
        .first_terminal()
        .and_then(CstNode::terminal_kind)
        .and_then(primitive_code)
        .ok_or_else(|| malformed(node, "primitive type keyword"))?;
    Ok(Type::Primitive { code, dims })
}

fn class_or_interface_type(
    cx: &mut Context,
    node: &CstNode,
    dims: usize,
) -> Result<Type, ProjectError> {
    let name = dotted_name(node)?;
    let arguments = node
        .rules(RuleKind::TypeArguments)
        .last()
        .map(|args| type_arguments(cx, args))
        .transpose()?;
    Ok(Type::Named {
        name,
        arguments,
        dims,
    })
}

fn type_arguments(cx: &mut Context, node: &CstNode) -> Result<Vec<TypeArgument>, ProjectError> {
    node.rules(RuleKind::TypeArgument)
        .map(|arg| type_argument(cx, arg))
        .collect()
}

fn type_argument(cx: &mut Context, node: &CstNode) -> Result<TypeArgument, ProjectError> {
    let bound = node.type_type(0).map(|t| type_type(cx, t)).transpose()?;
    if !node.has_terminal(TerminalKind::Question) {
        return bound
            .map(TypeArgument::Type)
            .ok_or_else(|| malformed(node, "type argument"));
    }
    let bound = match bound {
        Some(ty) if node.has_terminal(TerminalKind::Super) => Some(WildcardBound::Super(ty)),
        Some(ty) => Some(WildcardBound::Extends(ty)),
        None => None,
    };
    Ok(TypeArgument::Wildcard(bound))
}

/// Projects `typeTypeOrVoid`; `void` yields `None`.
pub(crate) fn type_or_void(cx: &mut Context, node: &CstNode) -> Result<Option<Type>, ProjectError> {
    node.type_type(0).map(|t| type_type(cx, t)).transpose()
}

/// Projects a `typeList` (superinterfaces).
pub(crate) fn type_list(cx: &mut Context, node: &CstNode) -> Result<Vec<Type>, ProjectError> {
    node.type_types().map(|t| type_type(cx, t)).collect()
}

/// Projects `typeParameters`.
pub(crate) fn type_parameters(
    cx: &mut Context,
    node: &CstNode,
) -> Result<Vec<TypeParameter>, ProjectError> {
    node.rules(RuleKind::TypeParameter)
        .map(|param| {
            let name = required_identifier(param)?;
            let bounds = match param.rule(RuleKind::TypeBound) {
                Some(bound) => bound
                    .type_types()
                    .map(|t| type_type(cx, t))
                    .collect::<Result<_, _>>()?,
                None => Vec::new(),
            };
            Ok(TypeParameter { name, bounds })
        })
        .collect()
}

/// Projects a `qualifiedNameList` (declared exceptions) into named types.
pub(crate) fn qualified_name_list(node: &CstNode) -> Result<Vec<Type>, ProjectError> {
    node.rules(RuleKind::QualifiedName)
        .map(|name| dotted_name(name).map(Type::named))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::DottedName;
    use crate::tokens::TokenCode;
    use config::constants::ProjectionConfig;
    use java_cst::build::{ident, rule, term};

    fn cx() -> Context {
        Context::new(ProjectionConfig::default())
    }

    fn named(name: &str) -> CstNode {
        rule(
            RuleKind::TypeClassOrInterfaceType,
            vec![rule(RuleKind::ClassOrInterfaceType, vec![ident(name)])],
        )
    }

    fn type_args(args: Vec<CstNode>) -> CstNode {
        rule(
            RuleKind::TypeArguments,
            args.into_iter()
                .map(|a| rule(RuleKind::TypeArgument, vec![a]))
                .collect(),
        )
    }

    #[test]
    fn test_primitive_array_dims() {
        let node = rule(
            RuleKind::TypePrimitiveType,
            vec![
                rule(RuleKind::PrimitiveType, vec![term(TerminalKind::Int, "int")]),
                term(TerminalKind::LBrack, "["),
                term(TerminalKind::RBrack, "]"),
                term(TerminalKind::LBrack, "["),
                term(TerminalKind::RBrack, "]"),
            ],
        );
        assert_eq!(
            type_type(&mut cx(), &node).unwrap(),
            Type::Primitive {
                code: TokenCode::Int,
                dims: 2
            }
        );
    }

    #[test]
    fn test_qualified_generic_keeps_last_arguments() {
        // A<B>.C<D>
        let node = rule(
            RuleKind::TypeClassOrInterfaceType,
            vec![rule(
                RuleKind::ClassOrInterfaceType,
                vec![
                    ident("A"),
                    type_args(vec![named("B")]),
                    term(TerminalKind::Dot, "."),
                    ident("C"),
                    type_args(vec![named("D")]),
                ],
            )],
        );
        let expected = Type::Named {
            name: DottedName::from_parts(["A", "C"]).unwrap(),
            arguments: Some(vec![TypeArgument::Type(Type::named(DottedName::single("D")))]),
            dims: 0,
        };
        assert_eq!(type_type(&mut cx(), &node).unwrap(), expected);
    }

    #[test]
    fn test_wildcard_bounds() {
        let unbounded = rule(RuleKind::TypeArgument, vec![term(TerminalKind::Question, "?")]);
        let lower = rule(
            RuleKind::TypeArgument,
            vec![
                term(TerminalKind::Question, "?"),
                term(TerminalKind::Super, "super"),
                named("T"),
            ],
        );
        assert_eq!(
            type_argument(&mut cx(), &unbounded).unwrap(),
            TypeArgument::Wildcard(None)
        );
        assert_eq!(
            type_argument(&mut cx(), &lower).unwrap(),
            TypeArgument::Wildcard(Some(WildcardBound::Super(Type::named(DottedName::single(
                "T"
            )))))
        );
    }

    #[test]
    fn test_void_is_absent() {
        let node = rule(RuleKind::TypeTypeOrVoid, vec![term(TerminalKind::Void, "void")]);
        assert_eq!(type_or_void(&mut cx(), &node).unwrap(), None);
    }

    #[test]
    fn test_type_parameter_bounds() {
        let node = rule(
            RuleKind::TypeParameters,
            vec![rule(
                RuleKind::TypeParameter,
                vec![
                    ident("T"),
                    term(TerminalKind::Extends, "extends"),
                    rule(
                        RuleKind::TypeBound,
                        vec![named("A"), term(TerminalKind::BitAnd, "&"), named("B")],
                    ),
                ],
            )],
        );
        let params = type_parameters(&mut cx(), &node).unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].name, "T");
        assert_eq!(params[0].bounds.len(), 2);
    }
}
