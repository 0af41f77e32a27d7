//! # Node Kinds
//!
//! Rule and terminal kinds of a Java concrete syntax tree.
//!
//! Rule names follow the camelCase names of the ANTLR Java grammar; labelled
//! alternatives (`statement` and `typeType`) appear as their own kinds so a
//! node carries the alternative it was parsed as. Terminal names follow the
//! SCREAMING_SNAKE_CASE symbolic names of the Java lexer.
//!
//! ## Example
//!
//! ```rust
//! use java_cst::{NodeKind, RuleKind, TerminalKind};
//!
//! let kind: NodeKind = serde_json::from_str(r#"{"terminal":"NOTEQUAL"}"#).unwrap();
//! assert_eq!(kind, NodeKind::Terminal(TerminalKind::NotEqual));
//! assert!(RuleKind::StatementWhile.is_statement());
//! ```

use serde::{Deserialize, Serialize};
use strum::EnumIter;

// =============================================================================
// NODE KIND
// =============================================================================

/// Kind of a CST node: a parser rule or a lexer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Interior node produced by a parser rule.
    Rule(RuleKind),
    /// Leaf node produced by the lexer.
    Terminal(TerminalKind),
}

impl NodeKind {
    /// Returns the rule kind, if this is a rule node.
    pub fn as_rule(&self) -> Option<RuleKind> {
        match self {
            NodeKind::Rule(kind) => Some(*kind),
            NodeKind::Terminal(_) => None,
        }
    }

    /// Returns the terminal kind, if this is a terminal node.
    pub fn as_terminal(&self) -> Option<TerminalKind> {
        match self {
            NodeKind::Terminal(kind) => Some(*kind),
            NodeKind::Rule(_) => None,
        }
    }
}

impl From<RuleKind> for NodeKind {
    fn from(kind: RuleKind) -> Self {
        NodeKind::Rule(kind)
    }
}

impl From<TerminalKind> for NodeKind {
    fn from(kind: TerminalKind) -> Self {
        NodeKind::Terminal(kind)
    }
}

// =============================================================================
// RULE KIND
// =============================================================================

/// Parser rules of the Java grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "camelCase")]
pub enum RuleKind {
    // Compilation unit
    CompilationUnit,
    PackageDeclaration,
    ImportDeclaration,
    TypeDeclaration,
    QualifiedName,
    QualifiedNameList,

    // Modifiers
    Modifier,
    ClassOrInterfaceModifier,
    VariableModifier,
    Annotation,

    // Type declarations
    ClassDeclaration,
    EnumDeclaration,
    InterfaceDeclaration,
    RecordDeclaration,
    AnnotationTypeDeclaration,
    TypeParameters,
    TypeParameter,
    TypeBound,
    TypeList,
    ClassBody,
    ClassBodyDeclaration,
    MemberDeclaration,
    LocalTypeDeclaration,

    // Members
    MethodDeclaration,
    GenericMethodDeclaration,
    MethodBody,
    TypeTypeOrVoid,
    ConstructorDeclaration,
    GenericConstructorDeclaration,
    FieldDeclaration,
    FormalParameters,
    FormalParameterList,
    FormalParameter,
    LastFormalParameter,

    // Variables
    VariableDeclarators,
    VariableDeclarator,
    VariableDeclaratorId,
    VariableInitializer,
    ArrayInitializer,
    LocalVariableDeclaration,
    Identifier,

    // Types
    TypeClassOrInterfaceType,
    TypePrimitiveType,
    ClassOrInterfaceType,
    PrimitiveType,
    TypeArguments,
    TypeArgument,

    // Blocks and statements
    Block,
    BlockStatement,
    StatementBlockLabel,
    StatementAssert,
    StatementIf,
    StatementFor,
    StatementWhile,
    StatementDo,
    StatementTryBlock,
    StatementTryResourceSpecification,
    StatementSwitch,
    StatementSynchronized,
    StatementReturn,
    StatementThrow,
    StatementBreak,
    StatementContinue,
    StatementYield,
    StatementSemi,
    StatementExpression,
    StatementSwitchExpression,
    StatementIdentifierLabel,
    ForControl,
    CatchClause,
    FinallyBlock,
    ResourceSpecification,
    SwitchBlockStatementGroup,
    SwitchLabel,
    ParExpression,

    // Expressions
    Expression,
    ExpressionList,
    MethodCall,
    Primary,
    Literal,
    IntegerLiteral,
    FloatLiteral,
    Creator,
    CreatedName,
    ClassCreatorRest,
    ArrayCreatorRest,
    InnerCreator,
    Arguments,
    SuperSuffix,
    ExplicitGenericInvocation,
    NonWildcardTypeArguments,
    LambdaExpression,
    SwitchExpression,
    Pattern,
}

impl RuleKind {
    /// Returns true for the labelled alternatives of the `statement` rule.
    pub fn is_statement(&self) -> bool {
        matches!(
            self,
            RuleKind::StatementBlockLabel
                | RuleKind::StatementAssert
                | RuleKind::StatementIf
                | RuleKind::StatementFor
                | RuleKind::StatementWhile
                | RuleKind::StatementDo
                | RuleKind::StatementTryBlock
                | RuleKind::StatementTryResourceSpecification
                | RuleKind::StatementSwitch
                | RuleKind::StatementSynchronized
                | RuleKind::StatementReturn
                | RuleKind::StatementThrow
                | RuleKind::StatementBreak
                | RuleKind::StatementContinue
                | RuleKind::StatementYield
                | RuleKind::StatementSemi
                | RuleKind::StatementExpression
                | RuleKind::StatementSwitchExpression
                | RuleKind::StatementIdentifierLabel
        )
    }

    /// Returns true for the labelled alternatives of the `typeType` rule.
    pub fn is_type_type(&self) -> bool {
        matches!(
            self,
            RuleKind::TypeClassOrInterfaceType | RuleKind::TypePrimitiveType
        )
    }
}

// =============================================================================
// TERMINAL KIND
// =============================================================================

/// Token kinds of the Java lexer.
///
/// Declaration order mirrors the lexer's token numbering; the binary
/// operator range (`.` through `>>>=`) relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u16)]
pub enum TerminalKind {
    // Keywords
    Abstract,
    Assert,
    Boolean,
    Break,
    Byte,
    Case,
    Catch,
    Char,
    Class,
    Const,
    Continue,
    Default,
    Do,
    Double,
    Else,
    Enum,
    Extends,
    Final,
    Finally,
    Float,
    For,
    If,
    Goto,
    Implements,
    Import,
    Instanceof,
    Int,
    Interface,
    Long,
    Native,
    New,
    Package,
    Private,
    Protected,
    Public,
    Return,
    Short,
    Static,
    Strictfp,
    Super,
    Switch,
    Synchronized,
    This,
    Throw,
    Throws,
    Transient,
    Try,
    Void,
    Volatile,
    While,

    // Module-related and contextual keywords
    Module,
    Open,
    Requires,
    Exports,
    Opens,
    To,
    Uses,
    Provides,
    With,
    Transitive,
    Var,
    Yield,
    Record,
    Sealed,
    Permits,
    NonSealed,

    // Literals
    DecimalLiteral,
    HexLiteral,
    OctLiteral,
    BinaryLiteral,
    FloatLiteral,
    HexFloatLiteral,
    BoolLiteral,
    CharLiteral,
    StringLiteral,
    TextBlock,
    NullLiteral,

    // Separators
    #[serde(rename = "LPAREN")]
    LParen,
    #[serde(rename = "RPAREN")]
    RParen,
    #[serde(rename = "LBRACE")]
    LBrace,
    #[serde(rename = "RBRACE")]
    RBrace,
    #[serde(rename = "LBRACK")]
    LBrack,
    #[serde(rename = "RBRACK")]
    RBrack,
    Semi,
    Comma,
    Dot,

    // Operators
    Assign,
    Gt,
    Lt,
    Bang,
    Tilde,
    Question,
    Colon,
    Equal,
    Le,
    Ge,
    #[serde(rename = "NOTEQUAL")]
    NotEqual,
    And,
    Or,
    Inc,
    Dec,
    Add,
    Sub,
    Mul,
    Div,
    #[serde(rename = "BITAND")]
    BitAnd,
    #[serde(rename = "BITOR")]
    BitOr,
    Caret,
    Mod,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    AndAssign,
    OrAssign,
    XorAssign,
    ModAssign,
    #[serde(rename = "LSHIFT_ASSIGN")]
    LShiftAssign,
    #[serde(rename = "RSHIFT_ASSIGN")]
    RShiftAssign,
    #[serde(rename = "URSHIFT_ASSIGN")]
    UrShiftAssign,

    // Java 8 tokens
    Arrow,
    #[serde(rename = "COLONCOLON")]
    ColonColon,
    At,
    Ellipsis,

    // Identifiers
    Identifier,
}

impl TerminalKind {
    /// Returns true for tokens in the lexer range `.` through `>>>=`, the
    /// tokens a `bop` label may carry for a binary expression.
    ///
    /// # Example
    ///
    /// ```rust
    /// use java_cst::TerminalKind;
    ///
    /// assert!(TerminalKind::Add.is_binary_operator());
    /// assert!(TerminalKind::Question.is_binary_operator());
    /// assert!(!TerminalKind::Instanceof.is_binary_operator());
    /// ```
    pub fn is_binary_operator(&self) -> bool {
        let ordinal = *self as u16;
        (TerminalKind::Dot as u16..=TerminalKind::UrShiftAssign as u16).contains(&ordinal)
    }

    /// Returns true for literal token kinds.
    pub fn is_literal(&self) -> bool {
        (TerminalKind::DecimalLiteral as u16..=TerminalKind::NullLiteral as u16)
            .contains(&(*self as u16))
    }
}
