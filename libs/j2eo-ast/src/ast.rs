//! # AST Types
//!
//! Normalized abstract syntax tree for one Java compilation unit.
//!
//! Nodes are plain owned data: built once by the projector, never mutated
//! afterwards, compared structurally. Source positions live on the CST and
//! in diagnostics, not here.
//!
//! ## Example
//!
//! ```rust
//! use j2eo_ast::ast::{DottedName, Expression};
//!
//! let name = DottedName::from_parts(["java", "util", "List"]).unwrap();
//! assert_eq!(name.to_string(), "java.util.List");
//! let reference = Expression::SimpleReference(name);
//! assert!(!reference.is_placeholder());
//! ```

use crate::tokens::{Token, TokenCode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

// =============================================================================
// VALUE TYPES
// =============================================================================

/// Raised when building a [`DottedName`] from no segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("dotted name must have at least one segment")]
pub struct EmptyDottedName;

/// Non-empty, ordered sequence of identifiers (`a.b.c`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct DottedName(Vec<String>);

impl DottedName {
    /// Single-segment name.
    pub fn single(name: impl Into<String>) -> Self {
        Self(vec![name.into()])
    }

    /// Builds a name from its segments; `None` when there are none.
    pub fn from_parts<I, S>(parts: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = parts.into_iter().map(Into::into).collect();
        if names.is_empty() {
            None
        } else {
            Some(Self(names))
        }
    }

    /// Segments in source order.
    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Leading segment.
    pub fn first(&self) -> &str {
        // Non-empty by construction.
        self.0.first().map(String::as_str).unwrap_or_default()
    }
}

impl TryFrom<Vec<String>> for DottedName {
    type Error = EmptyDottedName;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_parts(names).ok_or(EmptyDottedName)
    }
}

impl From<DottedName> for Vec<String> {
    fn from(name: DottedName) -> Self {
        name.0
    }
}

impl fmt::Display for DottedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

/// Unordered set of recognized modifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers(BTreeSet<TokenCode>);

impl Modifiers {
    /// Keeps only codes that are modifiers.
    pub fn from_codes<I: IntoIterator<Item = TokenCode>>(codes: I) -> Self {
        Self(codes.into_iter().filter(TokenCode::is_modifier).collect())
    }

    pub fn contains(&self, code: TokenCode) -> bool {
        self.0.contains(&code)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = TokenCode> + '_ {
        self.0.iter().copied()
    }
}

/// Closed set of placeholder tags for constructs without a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum PlaceholderTag {
    #[serde(rename = "for_loop_placeholder")]
    ForLoop,
    #[serde(rename = "identifier_label_placeholder")]
    IdentifierLabel,
    #[serde(rename = "semi_noop_placeholder")]
    SemiNoop,
    #[serde(rename = "switch_statement_placeholder")]
    SwitchStatement,
    #[serde(rename = "switch_expression_placeholder")]
    SwitchExpression,
    #[serde(rename = "try_resource_placeholder")]
    TryResource,
    #[serde(rename = "try_block_placeholder")]
    TryBlock,
    #[serde(rename = "statement_placeholder")]
    Statement,
    #[serde(rename = "expression_placeholder")]
    Expression,
    #[serde(rename = "unknown_creator_context_placeholder")]
    UnknownCreatorContext,
}

impl PlaceholderTag {
    /// Stable tag string handed to downstream stages.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceholderTag::ForLoop => "for_loop_placeholder",
            PlaceholderTag::IdentifierLabel => "identifier_label_placeholder",
            PlaceholderTag::SemiNoop => "semi_noop_placeholder",
            PlaceholderTag::SwitchStatement => "switch_statement_placeholder",
            PlaceholderTag::SwitchExpression => "switch_expression_placeholder",
            PlaceholderTag::TryResource => "try_resource_placeholder",
            PlaceholderTag::TryBlock => "try_block_placeholder",
            PlaceholderTag::Statement => "statement_placeholder",
            PlaceholderTag::Expression => "expression_placeholder",
            PlaceholderTag::UnknownCreatorContext => "unknown_creator_context_placeholder",
        }
    }
}

impl fmt::Display for PlaceholderTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// COMPILATION UNIT
// =============================================================================

/// Root of the AST for one source file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompilationUnit {
    pub package: Option<DottedName>,
    pub imports: Vec<ImportDeclaration>,
    pub declarations: Vec<Declaration>,
}

/// `import [static] a.b.C[.*];`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportDeclaration {
    pub is_static: bool,
    pub name: DottedName,
    pub is_wildcard: bool,
}

// =============================================================================
// DECLARATIONS
// =============================================================================

/// Declarations at class or block level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Declaration {
    Class(ClassDeclaration),
    Variable(VariableDeclaration),
    Method(MethodDeclaration),
    Constructor(ConstructorDeclaration),
    Initializer(ClassInitializer),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDeclaration {
    pub name: String,
    pub modifiers: Option<Modifiers>,
    pub type_parameters: Option<Vec<TypeParameter>>,
    pub superclass: Option<Type>,
    pub interfaces: Option<Vec<Type>>,
    pub members: Vec<Declaration>,
}

/// `T extends A & B`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeParameter {
    pub name: String,
    pub bounds: Vec<Type>,
}

/// One declared variable. Fields and locals declaring several variables
/// expand to one node each, sharing type and modifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    pub name: String,
    pub modifiers: Option<Modifiers>,
    /// Absent for `var` locals.
    pub ty: Option<Type>,
    /// Brackets after the declarator name (`int a[]`).
    pub dims: usize,
    pub initializer: Option<Initializer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Initializer {
    Expression(Expression),
    Array(Vec<Initializer>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDeclaration {
    pub modifiers: Option<Modifiers>,
    /// Absent for `void`.
    pub return_type: Option<Type>,
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub throws: Vec<Type>,
    pub body: Block,
}

/// Constructor. An explicit `super(...)` call stays the first body
/// statement; it is not lifted out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructorDeclaration {
    pub modifiers: Option<Modifiers>,
    pub parameters: Vec<Parameter>,
    pub throws: Vec<Type>,
    pub body: Block,
}

/// `{ ... }` or `static { ... }` inside a class body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassInitializer {
    pub body: Block,
    pub is_static: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub ty: Type,
    pub name: String,
    pub is_varargs: bool,
}

// =============================================================================
// STATEMENTS
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub statements: Vec<BlockStatement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BlockStatement {
    Declaration(Declaration),
    Statement(Statement),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    If {
        condition: Expression,
        then_branch: Box<Statement>,
        else_branch: Option<Box<Statement>>,
    },
    While {
        condition: Expression,
        body: Box<Statement>,
    },
    Do {
        body: Box<Statement>,
        condition: Expression,
    },
    Return(Option<Expression>),
    Break(Option<String>),
    Continue(Option<String>),
    Assert {
        condition: Expression,
        message: Option<Expression>,
    },
    Block(Block),
    Expression(Expression),
}

impl Statement {
    /// Expression statement wrapping a placeholder.
    pub fn placeholder(tag: PlaceholderTag) -> Self {
        Statement::Expression(Expression::Placeholder(tag))
    }

    /// Tag of a placeholder statement.
    pub fn placeholder_tag(&self) -> Option<PlaceholderTag> {
        match self {
            Statement::Expression(Expression::Placeholder(tag)) => Some(*tag),
            _ => None,
        }
    }
}

// =============================================================================
// EXPRESSIONS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    Binary {
        op: TokenCode,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    UnaryPrefix {
        op: TokenCode,
        operand: Box<Expression>,
    },
    UnaryPostfix {
        op: TokenCode,
        operand: Box<Expression>,
    },
    Cast {
        ty: Type,
        operand: Box<Expression>,
    },
    ArrayAccess {
        object: Box<Expression>,
        index: Box<Expression>,
    },
    FieldAccess {
        object: Box<Expression>,
        is_super: bool,
        field: Token,
    },
    MethodInvocation {
        target: Option<Box<Expression>>,
        is_super: bool,
        /// Method identifier, or `this` / `super` for constructor calls.
        name: Token,
        arguments: Vec<Expression>,
    },
    InstanceCreation {
        ty: Type,
        arguments: Vec<Expression>,
        body: Option<Vec<Declaration>>,
    },
    ArrayCreation {
        element: Type,
        initializer: Vec<Initializer>,
    },
    Literal(Token),
    SimpleReference(DottedName),
    This,
    Parenthesized(Box<Expression>),
    Placeholder(PlaceholderTag),
}

impl Expression {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Expression::Placeholder(_))
    }

    /// Single-segment reference.
    pub fn reference(name: impl Into<String>) -> Self {
        Expression::SimpleReference(DottedName::single(name))
    }

    pub fn binary(op: TokenCode, left: Expression, right: Expression) -> Self {
        Expression::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Type {
    Primitive {
        code: TokenCode,
        dims: usize,
    },
    Named {
        name: DottedName,
        arguments: Option<Vec<TypeArgument>>,
        dims: usize,
    },
}

impl Type {
    /// Non-generic named type without dimensions.
    pub fn named(name: DottedName) -> Self {
        Type::Named {
            name,
            arguments: None,
            dims: 0,
        }
    }

    pub fn dims(&self) -> usize {
        match self {
            Type::Primitive { dims, .. } | Type::Named { dims, .. } => *dims,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeArgument {
    Type(Type),
    /// `?`, `? extends T`, `? super T`
    Wildcard(Option<WildcardBound>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WildcardBound {
    Extends(Type),
    Super(Type),
}
