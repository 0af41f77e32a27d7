//! # Declaration Projection
//!
//! Compilation unit, imports, classes and their members.
//!
//! Only class declarations are projected. Interfaces, enums, records,
//! annotation types and generic methods or constructors are dropped from
//! class bodies and from the top level; they cannot appear in expression
//! position, so no placeholder is needed.

use super::expressions::variable_initializer;
use super::statements::block;
use super::{dotted_name, identifier_text, malformed, modifiers, required_identifier, rule_after};
use super::{types, Context};
use crate::ast::{
    Block, ClassDeclaration, ClassInitializer, CompilationUnit, ConstructorDeclaration,
    Declaration, ImportDeclaration, MethodDeclaration, Modifiers, Parameter, Type,
    VariableDeclaration,
};
use crate::error::ProjectError;
use java_cst::{CstNode, RuleKind, TerminalKind};
use tracing::trace;

// =============================================================================
// COMPILATION UNIT
// =============================================================================

/// Projects the `compilationUnit` root.
pub(crate) fn compilation_unit(
    cx: &mut Context,
    root: &CstNode,
) -> Result<CompilationUnit, ProjectError> {
    if !root.is_rule(RuleKind::CompilationUnit) {
        return Err(malformed(root, "compilationUnit root"));
    }

    let package = root
        .rule(RuleKind::PackageDeclaration)
        .map(|pkg| {
            pkg.rule(RuleKind::QualifiedName)
                .ok_or_else(|| malformed(pkg, "package name"))
                .and_then(dotted_name)
        })
        .transpose()?;

    let imports = root
        .rules(RuleKind::ImportDeclaration)
        .map(import_declaration)
        .collect::<Result<Vec<_>, _>>()?;

    let mut declarations = Vec::new();
    for type_decl in root.rules(RuleKind::TypeDeclaration) {
        match type_decl.rule(RuleKind::ClassDeclaration) {
            Some(class) => {
                let modifiers =
                    modifiers::decode(type_decl.rules(RuleKind::ClassOrInterfaceModifier));
                declarations.push(Declaration::Class(class_declaration(cx, class, modifiers)?));
            }
            None => trace!(span = ?type_decl.span, "dropping non-class type declaration"),
        }
    }

    Ok(CompilationUnit {
        package,
        imports,
        declarations,
    })
}

/// `import static a.b.C.*;`
fn import_declaration(node: &CstNode) -> Result<ImportDeclaration, ProjectError> {
    let name = node
        .rule(RuleKind::QualifiedName)
        .ok_or_else(|| malformed(node, "imported name"))?;
    Ok(ImportDeclaration {
        is_static: node.has_terminal(TerminalKind::Static),
        name: dotted_name(name)?,
        is_wildcard: node.has_terminal(TerminalKind::Mul),
    })
}

// =============================================================================
// CLASSES
// =============================================================================

/// Projects a `classDeclaration`.
pub(crate) fn class_declaration(
    cx: &mut Context,
    node: &CstNode,
    modifiers: Option<Modifiers>,
) -> Result<ClassDeclaration, ProjectError> {
    let name = required_identifier(node)?;
    let type_parameters = node
        .rule(RuleKind::TypeParameters)
        .map(|params| types::type_parameters(cx, params))
        .transpose()?;
    let superclass = node
        .type_type(0)
        .map(|ty| types::type_type(cx, ty))
        .transpose()?;
    let interfaces = rule_after(node, TerminalKind::Implements, RuleKind::TypeList)
        .map(|list| types::type_list(cx, list))
        .transpose()?;
    let body = node
        .rule(RuleKind::ClassBody)
        .ok_or_else(|| malformed(node, "class body"))?;
    let members = class_body(cx, body)?;

    Ok(ClassDeclaration {
        name,
        modifiers,
        type_parameters,
        superclass,
        interfaces,
        members,
    })
}

/// Projects a `classBody` into its member declarations, in source order.
pub(crate) fn class_body(cx: &mut Context, node: &CstNode) -> Result<Vec<Declaration>, ProjectError> {
    let mut members = Vec::new();
    for decl in node.rules(RuleKind::ClassBodyDeclaration) {
        members.extend(cx.grow(|cx| class_body_declaration(cx, decl))?);
    }
    Ok(members)
}

/// A class body entry yields zero or more declarations.
fn class_body_declaration(
    cx: &mut Context,
    node: &CstNode,
) -> Result<Vec<Declaration>, ProjectError> {
    if let Some(body) = node.rule(RuleKind::Block) {
        return Ok(vec![Declaration::Initializer(ClassInitializer {
            body: block(cx, body)?,
            is_static: node.has_terminal(TerminalKind::Static),
        })]);
    }
    let Some(member) = node.rule(RuleKind::MemberDeclaration) else {
        return Ok(Vec::new());
    };
    let modifiers = modifiers::decode(node.rules(RuleKind::Modifier));
    member_declaration(cx, member, modifiers)
}

fn member_declaration(
    cx: &mut Context,
    node: &CstNode,
    modifiers: Option<Modifiers>,
) -> Result<Vec<Declaration>, ProjectError> {
    if let Some(method) = node.rule(RuleKind::MethodDeclaration) {
        return Ok(vec![Declaration::Method(method_declaration(cx, method, modifiers)?)]);
    }
    if let Some(class) = node.rule(RuleKind::ClassDeclaration) {
        return Ok(vec![Declaration::Class(class_declaration(cx, class, modifiers)?)]);
    }
    if let Some(field) = node.rule(RuleKind::FieldDeclaration) {
        return Ok(field_declaration(cx, field, modifiers)?
            .into_iter()
            .map(Declaration::Variable)
            .collect());
    }
    if let Some(constructor) = node.rule(RuleKind::ConstructorDeclaration) {
        return Ok(vec![Declaration::Constructor(constructor_declaration(
            cx,
            constructor,
            modifiers,
        )?)]);
    }
    trace!(span = ?node.span, "dropping unsupported member declaration");
    Ok(Vec::new())
}

/// Projects a `localTypeDeclaration`; only classes are supported.
pub(crate) fn local_type(cx: &mut Context, node: &CstNode) -> Result<Declaration, ProjectError> {
    if let Some(class) = node.rule(RuleKind::ClassDeclaration) {
        let modifiers = modifiers::decode(node.rules(RuleKind::ClassOrInterfaceModifier));
        return Ok(Declaration::Class(class_declaration(cx, class, modifiers)?));
    }
    let construct = node
        .rules_where(|kind| kind != RuleKind::ClassOrInterfaceModifier)
        .next()
        .and_then(CstNode::rule_kind)
        .map(|kind| format!("{kind:?}"))
        .unwrap_or_else(|| "empty declaration".to_string());
    Err(ProjectError::UnsupportedLocalType {
        construct,
        span: node.span,
    })
}

// =============================================================================
// MEMBERS
// =============================================================================

fn method_declaration(
    cx: &mut Context,
    node: &CstNode,
    modifiers: Option<Modifiers>,
) -> Result<MethodDeclaration, ProjectError> {
    let return_type = node
        .rule(RuleKind::TypeTypeOrVoid)
        .ok_or_else(|| malformed(node, "return type"))?;
    let return_type = types::type_or_void(cx, return_type)?;
    let name = required_identifier(node)?;
    let parameters = formal_parameters(cx, node)?;
    let throws = throws(node)?;
    // `;` instead of a body (abstract, native) yields an empty block.
    let body = match node.rule(RuleKind::MethodBody).and_then(|b| b.rule(RuleKind::Block)) {
        Some(body) => block(cx, body)?,
        None => Block::default(),
    };
    Ok(MethodDeclaration {
        modifiers,
        return_type,
        name,
        parameters,
        throws,
        body,
    })
}

fn constructor_declaration(
    cx: &mut Context,
    node: &CstNode,
    modifiers: Option<Modifiers>,
) -> Result<ConstructorDeclaration, ProjectError> {
    let parameters = formal_parameters(cx, node)?;
    let throws = throws(node)?;
    let body = node
        .labelled("constructorBody")
        .or_else(|| node.rule(RuleKind::Block))
        .ok_or_else(|| malformed(node, "constructor body"))?;
    Ok(ConstructorDeclaration {
        modifiers,
        parameters,
        throws,
        body: block(cx, body)?,
    })
}

fn field_declaration(
    cx: &mut Context,
    node: &CstNode,
    modifiers: Option<Modifiers>,
) -> Result<Vec<VariableDeclaration>, ProjectError> {
    let ty = node
        .type_type(0)
        .ok_or_else(|| malformed(node, "field type"))?;
    let ty = types::type_type(cx, ty)?;
    let declarators = node
        .rule(RuleKind::VariableDeclarators)
        .ok_or_else(|| malformed(node, "variableDeclarators"))?;
    variable_declarators(cx, declarators, modifiers, Some(ty))
}

/// `throws A, b.C` on methods and constructors.
fn throws(node: &CstNode) -> Result<Vec<Type>, ProjectError> {
    match rule_after(node, TerminalKind::Throws, RuleKind::QualifiedNameList) {
        Some(list) => types::qualified_name_list(list),
        None => Ok(Vec::new()),
    }
}

/// Parameters of the `formalParameters` child of `node`.
fn formal_parameters(cx: &mut Context, node: &CstNode) -> Result<Vec<Parameter>, ProjectError> {
    let Some(list) = node
        .rule(RuleKind::FormalParameters)
        .and_then(|params| params.rule(RuleKind::FormalParameterList))
    else {
        return Ok(Vec::new());
    };
    list.rules_where(|kind| {
        matches!(
            kind,
            RuleKind::FormalParameter | RuleKind::LastFormalParameter
        )
    })
    .map(|param| parameter(cx, param))
    .collect()
}

/// `T name`, `T name[]` or `T... name`.
fn parameter(cx: &mut Context, node: &CstNode) -> Result<Parameter, ProjectError> {
    let ty = node
        .type_type(0)
        .ok_or_else(|| malformed(node, "parameter type"))?;
    let id = node
        .rule(RuleKind::VariableDeclaratorId)
        .ok_or_else(|| malformed(node, "parameter name"))?;
    let name = required_identifier(id)?;
    // `int a[]` declares the same parameter as `int[] a`.
    let extra_dims = id.terminals(TerminalKind::LBrack).count();
    let ty = match types::type_type(cx, ty)? {
        Type::Primitive { code, dims } => Type::Primitive {
            code,
            dims: dims + extra_dims,
        },
        Type::Named {
            name,
            arguments,
            dims,
        } => Type::Named {
            name,
            arguments,
            dims: dims + extra_dims,
        },
    };
    Ok(Parameter {
        ty,
        name,
        is_varargs: node.has_terminal(TerminalKind::Ellipsis),
    })
}

/// Expands `variableDeclarators` into one declaration per declarator, each
/// sharing `modifiers` and `ty`, in source order.
pub(crate) fn variable_declarators(
    cx: &mut Context,
    node: &CstNode,
    modifiers: Option<Modifiers>,
    ty: Option<Type>,
) -> Result<Vec<VariableDeclaration>, ProjectError> {
    node.rules(RuleKind::VariableDeclarator)
        .map(|declarator| {
            let id = declarator
                .rule(RuleKind::VariableDeclaratorId)
                .ok_or_else(|| malformed(declarator, "variableDeclaratorId"))?;
            let name = id
                .rule(RuleKind::Identifier)
                .map(identifier_text)
                .ok_or_else(|| malformed(id, "variable name"))?;
            let initializer = declarator
                .rule(RuleKind::VariableInitializer)
                .map(|init| variable_initializer(cx, init))
                .transpose()?;
            Ok(VariableDeclaration {
                name,
                modifiers: modifiers.clone(),
                ty: ty.clone(),
                dims: id.terminals(TerminalKind::LBrack).count(),
                initializer,
            })
        })
        .collect()
}
