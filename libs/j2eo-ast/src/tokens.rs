//! # Token / Operator Mapper
//!
//! Closed mapping from Java lexer token kinds to the abstract codes used in
//! the AST.
//!
//! [`token_code`] matches every [`TerminalKind`] without a wildcard arm, so a
//! new lexer token does not compile until it is classified here.
//!
//! ## Example
//!
//! ```rust
//! use j2eo_ast::tokens::{token_code, TokenCode};
//! use java_cst::TerminalKind;
//!
//! assert_eq!(token_code(TerminalKind::Add), Some(TokenCode::Plus));
//! assert_eq!(token_code(TerminalKind::ModAssign), None);
//! assert_eq!(TokenCode::DoubleAmpersand.to_string(), "&&");
//! ```

use java_cst::TerminalKind;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter};

// =============================================================================
// TOKEN CODE
// =============================================================================

/// Abstract operator, keyword and literal-class codes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    Display,
    AsRefStr,
)]
pub enum TokenCode {
    // Operators
    #[strum(serialize = "+")]
    Plus,
    #[strum(serialize = "-")]
    Minus,
    #[strum(serialize = "*")]
    Star,
    #[strum(serialize = "/")]
    Slash,
    #[strum(serialize = "%")]
    Percent,
    #[strum(serialize = "=")]
    Assign,
    #[strum(serialize = "+=")]
    PlusAssign,
    #[strum(serialize = "-=")]
    MinusAssign,
    #[strum(serialize = "*=")]
    StarAssign,
    #[strum(serialize = "/=")]
    SlashAssign,
    #[strum(serialize = "&=")]
    AmpersandAssign,
    #[strum(serialize = "|=")]
    VerticalAssign,
    #[strum(serialize = "^=")]
    CaretAssign,
    #[strum(serialize = "<<=")]
    LeftShiftAssign,
    #[strum(serialize = "==")]
    Equal,
    #[strum(serialize = "!=")]
    NonEqual,
    #[strum(serialize = ">")]
    Greater,
    #[strum(serialize = "<")]
    Less,
    #[strum(serialize = ">=")]
    GreaterEqual,
    #[strum(serialize = "<=")]
    LessEqual,
    #[strum(serialize = "||")]
    DoubleVertical,
    #[strum(serialize = "&&")]
    DoubleAmpersand,
    #[strum(serialize = "|")]
    Vertical,
    #[strum(serialize = "&")]
    Ampersand,
    #[strum(serialize = "^")]
    Caret,
    #[strum(serialize = "!")]
    Negation,
    #[strum(serialize = "~")]
    Tilde,
    #[strum(serialize = "++")]
    PlusPlus,
    #[strum(serialize = "--")]
    MinusMinus,
    #[strum(serialize = "?")]
    Question,
    #[strum(serialize = ".")]
    Dot,
    #[strum(serialize = "instanceof")]
    Instanceof,

    // Modifiers
    #[strum(serialize = "public")]
    Public,
    #[strum(serialize = "private")]
    Private,
    #[strum(serialize = "protected")]
    Protected,
    #[strum(serialize = "static")]
    Static,
    #[strum(serialize = "abstract")]
    Abstract,
    #[strum(serialize = "final")]
    Final,
    #[strum(serialize = "strictfp")]
    Strictfp,

    // Primitive types
    #[strum(serialize = "boolean")]
    Boolean,
    #[strum(serialize = "char")]
    Char,
    #[strum(serialize = "byte")]
    Byte,
    #[strum(serialize = "short")]
    Short,
    #[strum(serialize = "int")]
    Int,
    #[strum(serialize = "long")]
    Long,
    #[strum(serialize = "float")]
    Float,
    #[strum(serialize = "double")]
    Double,

    // Keywords
    #[strum(serialize = "this")]
    This,
    #[strum(serialize = "super")]
    Super,
    #[strum(serialize = "var")]
    Var,
    #[strum(serialize = "break")]
    Break,
    #[strum(serialize = "continue")]
    Continue,
    #[strum(serialize = "true")]
    True,
    #[strum(serialize = "false")]
    False,
    #[strum(serialize = "null")]
    Null,

    // Literal and name classes
    #[strum(serialize = "<identifier>")]
    Identifier,
    #[strum(serialize = "<integer>")]
    IntegerLiteral,
    #[strum(serialize = "<floating>")]
    FloatingLiteral,
    #[strum(serialize = "<string>")]
    StringLiteral,
}

impl TokenCode {
    /// Returns true for class and member modifiers.
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            TokenCode::Public
                | TokenCode::Private
                | TokenCode::Protected
                | TokenCode::Static
                | TokenCode::Abstract
                | TokenCode::Final
                | TokenCode::Strictfp
        )
    }

    /// Returns true for primitive type keywords.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            TokenCode::Boolean
                | TokenCode::Char
                | TokenCode::Byte
                | TokenCode::Short
                | TokenCode::Int
                | TokenCode::Long
                | TokenCode::Float
                | TokenCode::Double
        )
    }
}

// =============================================================================
// TOKEN
// =============================================================================

/// An abstract code with optional source text (identifiers, literals).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub code: TokenCode,
    pub text: Option<String>,
}

impl Token {
    /// Token carrying only a code.
    pub fn new(code: TokenCode) -> Self {
        Self { code, text: None }
    }

    /// Token carrying a code and its text.
    pub fn with_text(code: TokenCode, text: impl Into<String>) -> Self {
        Self {
            code,
            text: Some(text.into()),
        }
    }

    /// Identifier token.
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::with_text(TokenCode::Identifier, name)
    }

    /// Text if present, otherwise the code's symbol.
    pub fn text_or_symbol(&self) -> &str {
        self.text.as_deref().unwrap_or_else(|| self.code.as_ref())
    }
}

// =============================================================================
// MAPPINGS
// =============================================================================

/// Operator tokens inside the binary range that have no abstract code.
/// A `bop` carrying one of these aborts projection.
pub const UNMAPPED_OPERATORS: [TerminalKind; 4] = [
    TerminalKind::Colon,
    TerminalKind::ModAssign,
    TerminalKind::RShiftAssign,
    TerminalKind::UrShiftAssign,
];

/// Maps a lexer token kind to its abstract code.
///
/// Returns `None` for tokens that never reach the AST as a code (separators,
/// unsupported keywords, literal kinds outside the supported set, the
/// operators in [`UNMAPPED_OPERATORS`]).
pub fn token_code(kind: TerminalKind) -> Option<TokenCode> {
    use TerminalKind as T;
    let code = match kind {
        // Operators
        T::Add => TokenCode::Plus,
        T::Sub => TokenCode::Minus,
        T::Mul => TokenCode::Star,
        T::Div => TokenCode::Slash,
        T::Mod => TokenCode::Percent,
        T::Assign => TokenCode::Assign,
        T::AddAssign => TokenCode::PlusAssign,
        T::SubAssign => TokenCode::MinusAssign,
        T::MulAssign => TokenCode::StarAssign,
        T::DivAssign => TokenCode::SlashAssign,
        T::AndAssign => TokenCode::AmpersandAssign,
        T::OrAssign => TokenCode::VerticalAssign,
        T::XorAssign => TokenCode::CaretAssign,
        T::LShiftAssign => TokenCode::LeftShiftAssign,
        T::Equal => TokenCode::Equal,
        T::NotEqual => TokenCode::NonEqual,
        T::Gt => TokenCode::Greater,
        T::Lt => TokenCode::Less,
        T::Ge => TokenCode::GreaterEqual,
        T::Le => TokenCode::LessEqual,
        T::Or => TokenCode::DoubleVertical,
        T::And => TokenCode::DoubleAmpersand,
        T::BitOr => TokenCode::Vertical,
        T::BitAnd => TokenCode::Ampersand,
        T::Caret => TokenCode::Caret,
        T::Bang => TokenCode::Negation,
        T::Tilde => TokenCode::Tilde,
        T::Inc => TokenCode::PlusPlus,
        T::Dec => TokenCode::MinusMinus,
        T::Question => TokenCode::Question,
        T::Dot => TokenCode::Dot,
        T::Instanceof => TokenCode::Instanceof,
        T::Colon | T::ModAssign | T::RShiftAssign | T::UrShiftAssign => return None,

        // Modifiers
        T::Public => TokenCode::Public,
        T::Private => TokenCode::Private,
        T::Protected => TokenCode::Protected,
        T::Static => TokenCode::Static,
        T::Abstract => TokenCode::Abstract,
        T::Final => TokenCode::Final,
        T::Strictfp => TokenCode::Strictfp,

        // Primitive types
        T::Boolean => TokenCode::Boolean,
        T::Char => TokenCode::Char,
        T::Byte => TokenCode::Byte,
        T::Short => TokenCode::Short,
        T::Int => TokenCode::Int,
        T::Long => TokenCode::Long,
        T::Float => TokenCode::Float,
        T::Double => TokenCode::Double,

        // Keywords with a code
        T::This => TokenCode::This,
        T::Super => TokenCode::Super,
        T::Var => TokenCode::Var,
        T::Break => TokenCode::Break,
        T::Continue => TokenCode::Continue,

        // Literal and name classes
        T::Identifier => TokenCode::Identifier,
        T::DecimalLiteral => TokenCode::IntegerLiteral,
        T::FloatLiteral => TokenCode::FloatingLiteral,
        T::StringLiteral => TokenCode::StringLiteral,
        T::NullLiteral => TokenCode::Null,

        // Boolean literals take their code from the token text.
        T::BoolLiteral => return None,

        // Literal kinds outside the supported set
        T::HexLiteral
        | T::OctLiteral
        | T::BinaryLiteral
        | T::HexFloatLiteral
        | T::CharLiteral
        | T::TextBlock => return None,

        // Keywords without a code
        T::Assert
        | T::Case
        | T::Catch
        | T::Class
        | T::Const
        | T::Default
        | T::Do
        | T::Else
        | T::Enum
        | T::Extends
        | T::Finally
        | T::For
        | T::If
        | T::Goto
        | T::Implements
        | T::Import
        | T::Interface
        | T::Native
        | T::New
        | T::Package
        | T::Return
        | T::Switch
        | T::Synchronized
        | T::Throw
        | T::Throws
        | T::Transient
        | T::Try
        | T::Void
        | T::Volatile
        | T::While
        | T::Module
        | T::Open
        | T::Requires
        | T::Exports
        | T::Opens
        | T::To
        | T::Uses
        | T::Provides
        | T::With
        | T::Transitive
        | T::Yield
        | T::Record
        | T::Sealed
        | T::Permits
        | T::NonSealed => return None,

        // Separators and Java 8 punctuation
        T::LParen
        | T::RParen
        | T::LBrace
        | T::RBrace
        | T::LBrack
        | T::RBrack
        | T::Semi
        | T::Comma
        | T::Arrow
        | T::ColonColon
        | T::At
        | T::Ellipsis => return None,
    };
    Some(code)
}

/// Maps a modifier keyword to its code; other tokens yield `None`.
pub fn modifier_code(kind: TerminalKind) -> Option<TokenCode> {
    token_code(kind).filter(TokenCode::is_modifier)
}

/// Maps a primitive type keyword to its code; other tokens yield `None`.
pub fn primitive_code(kind: TerminalKind) -> Option<TokenCode> {
    token_code(kind).filter(TokenCode::is_primitive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use strum::IntoEnumIterator;

    #[test]
    fn test_binary_range_is_mapped_or_documented() {
        for kind in TerminalKind::iter().filter(TerminalKind::is_binary_operator) {
            let mapped = token_code(kind).is_some();
            let documented = UNMAPPED_OPERATORS.contains(&kind);
            assert!(
                mapped != documented,
                "{kind:?} must be either mapped or listed as unmapped"
            );
        }
    }

    #[test]
    fn test_mapping_is_injective() {
        let mut seen: HashMap<TokenCode, TerminalKind> = HashMap::new();
        for kind in TerminalKind::iter() {
            if let Some(code) = token_code(kind) {
                if let Some(previous) = seen.insert(code, kind) {
                    panic!("{code:?} produced by both {previous:?} and {kind:?}");
                }
            }
        }
    }

    #[test]
    fn test_modifier_and_primitive_lookups_agree() {
        for kind in TerminalKind::iter() {
            if let Some(code) = modifier_code(kind) {
                assert_eq!(token_code(kind), Some(code));
                assert!(!code.is_primitive());
            }
            if let Some(code) = primitive_code(kind) {
                assert_eq!(token_code(kind), Some(code));
                assert!(!code.is_modifier());
            }
        }
        let modifiers = TerminalKind::iter().filter_map(modifier_code).count();
        let primitives = TerminalKind::iter().filter_map(primitive_code).count();
        assert_eq!(modifiers, 7);
        assert_eq!(primitives, 8);
    }

    #[test]
    fn test_every_code_has_a_distinct_symbol() {
        let mut symbols: Vec<String> = TokenCode::iter().map(|c| c.to_string()).collect();
        let total = symbols.len();
        symbols.sort();
        symbols.dedup();
        assert_eq!(symbols.len(), total);
    }

    #[test]
    fn test_unsupported_modifiers_are_not_modifiers() {
        assert_eq!(modifier_code(TerminalKind::Native), None);
        assert_eq!(modifier_code(TerminalKind::Sealed), None);
        assert_eq!(modifier_code(TerminalKind::Int), None);
    }

    #[test]
    fn test_token_text_or_symbol() {
        assert_eq!(Token::new(TokenCode::Plus).text_or_symbol(), "+");
        assert_eq!(Token::identifier("b").text_or_symbol(), "b");
    }
}
