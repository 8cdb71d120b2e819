//! Token kinds, the token-set bitmask, and the token record itself.

use es3_core::SourcePosition;

/// Every kind of token the lexer can produce.
///
/// The discriminant doubles as a bit index inside [`TokenSet`], so the
/// enum must stay small enough for a `u32` mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `=`
    Equals,
    /// `==`
    DoubleEquals,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterOrEqual,
    /// `<`
    LessThan,
    /// `<=`
    LessOrEqual,
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `^`
    Exponent,
    /// `;`
    StatementEnd,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// `,`
    Comma,
    /// Numeric literal
    Number,
    /// String literal, payload kept with its surrounding quotes
    String,
    /// Name that is not a keyword
    Identifier,
    /// `define` keyword
    Define,
    /// `if` keyword
    Conditional,
    /// `return` keyword
    Return,
    /// `loop` keyword
    Loop,
    /// `true` keyword
    True,
    /// `false` keyword
    False,
    /// End of input
    EndOfFile,
}

impl TokenKind {
    /// All kinds in declaration order; drives [`TokenSet::names`].
    pub const ALL: [TokenKind; 29] = [
        TokenKind::Equals,
        TokenKind::DoubleEquals,
        TokenKind::GreaterThan,
        TokenKind::GreaterOrEqual,
        TokenKind::LessThan,
        TokenKind::LessOrEqual,
        TokenKind::Add,
        TokenKind::Subtract,
        TokenKind::Multiply,
        TokenKind::Divide,
        TokenKind::Exponent,
        TokenKind::StatementEnd,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::OpenBrace,
        TokenKind::CloseBrace,
        TokenKind::OpenBracket,
        TokenKind::CloseBracket,
        TokenKind::Comma,
        TokenKind::Number,
        TokenKind::String,
        TokenKind::Identifier,
        TokenKind::Define,
        TokenKind::Conditional,
        TokenKind::Return,
        TokenKind::Loop,
        TokenKind::True,
        TokenKind::False,
        TokenKind::EndOfFile,
    ];

    /// The single-bit mask for this kind.
    pub const fn bit(self) -> u32 {
        1 << (self as u32)
    }

    /// Human-readable name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Equals => "Equals",
            TokenKind::DoubleEquals => "Double Equals",
            TokenKind::GreaterThan => "Greater Than",
            TokenKind::GreaterOrEqual => "Greater Or Equal",
            TokenKind::LessThan => "Less Than",
            TokenKind::LessOrEqual => "Less Or Equal",
            TokenKind::Add => "Add",
            TokenKind::Subtract => "Subtract",
            TokenKind::Multiply => "Multiply",
            TokenKind::Divide => "Divide",
            TokenKind::Exponent => "Exponent",
            TokenKind::StatementEnd => "Statement End",
            TokenKind::OpenParen => "Open Paren",
            TokenKind::CloseParen => "Close Paren",
            TokenKind::OpenBrace => "Open Brace",
            TokenKind::CloseBrace => "Close Brace",
            TokenKind::OpenBracket => "Open Bracket",
            TokenKind::CloseBracket => "Close Bracket",
            TokenKind::Comma => "Comma",
            TokenKind::Number => "Number",
            TokenKind::String => "String",
            TokenKind::Identifier => "Identifier",
            TokenKind::Define => "Define",
            TokenKind::Conditional => "Conditional",
            TokenKind::Return => "Return",
            TokenKind::Loop => "Loop",
            TokenKind::True => "True",
            TokenKind::False => "False",
            TokenKind::EndOfFile => "End Of File",
        }
    }
}

/// A set of token kinds packed into one `u32` mask.
///
/// Grammar checks test membership with a single AND, and the same set
/// feeds the "expected ..." part of a syntax error.
///
/// # Examples
///
/// ```
/// use translator::{TokenKind, TokenSet};
///
/// const STARTERS: TokenSet = TokenSet::of(&[TokenKind::Number, TokenKind::Identifier]);
/// assert!(STARTERS.contains(TokenKind::Number));
/// assert!(!STARTERS.contains(TokenKind::Comma));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u32);

impl TokenSet {
    /// The empty set.
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Build a set from a list of kinds, usable in `const` position.
    pub const fn of(kinds: &[TokenKind]) -> TokenSet {
        let mut mask = 0u32;
        let mut i = 0;
        while i < kinds.len() {
            mask |= kinds[i].bit();
            i += 1;
        }
        TokenSet(mask)
    }

    /// Whether `kind` is a member.
    pub const fn contains(self, kind: TokenKind) -> bool {
        self.0 & kind.bit() != 0
    }

    /// Member names in declaration order, joined with `", "`.
    pub fn names(self) -> String {
        let mut parts = Vec::new();
        for kind in TokenKind::ALL {
            if self.contains(kind) {
                parts.push(kind.name());
            }
        }
        parts.join(", ")
    }
}

/// A single token: its kind, the payload text for kinds that carry one
/// (numbers, strings, identifiers), and where it started in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is
    pub kind: TokenKind,
    /// Source text payload, present only for Number, String, Identifier
    pub text: Option<String>,
    /// Position of the token's first character
    pub position: SourcePosition,
}
