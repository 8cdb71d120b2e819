//! Translator error constructors.
//!
//! Every lexer and parser failure funnels through one of these helpers so
//! that the category, the message shape, and the source position stay
//! consistent across the component.

use es3_core::{CompileError, ErrorCategory, SourcePosition};

use crate::token::{Token, TokenSet};

/// Lexer hit a character no rule accepts.
pub fn unknown_character(ch: char, position: SourcePosition) -> CompileError {
    CompileError::new(
        ErrorCategory::UnknownCharacter,
        format!("unknown token found - \"{}\" / \"{}\"", ch, ch as u32),
        Some(position),
    )
}

/// String literal ran into end of input before its closing quote.
pub fn unterminated_string(position: SourcePosition) -> CompileError {
    CompileError::new(
        ErrorCategory::UnterminatedString,
        "unclosed string",
        Some(position),
    )
}

/// Numeric literal ended on a decimal point with no digit after it.
pub fn unfinished_number(position: SourcePosition) -> CompileError {
    CompileError::new(
        ErrorCategory::UnfinishedNumber,
        "unfinished digit",
        Some(position),
    )
}

/// Parser found a token outside the set the grammar allows here.
pub fn unexpected_token(expected: TokenSet, got: &Token) -> CompileError {
    CompileError::new(
        ErrorCategory::UnexpectedToken,
        format!("expected \"{}\", got \"{}\"", expected.names(), got.kind.name()),
        Some(got.position.clone()),
    )
}

/// Function definition appeared after the leading definitions region.
pub fn misplaced_function(name: &str, position: SourcePosition) -> CompileError {
    CompileError::new(
        ErrorCategory::MisplacedFunction,
        format!("function \"{}\" must be defined at the top of the file", name),
        Some(position),
    )
}

/// Parameter list entry that is not a bare identifier.
pub fn malformed_parameter(got: &Token) -> CompileError {
    CompileError::new(
        ErrorCategory::MalformedParameter,
        format!("expected a parameter name, got \"{}\"", got.kind.name()),
        Some(got.position.clone()),
    )
}

/// `return` with no enclosing function body.
pub fn return_outside_function(position: SourcePosition) -> CompileError {
    CompileError::new(
        ErrorCategory::UnexpectedToken,
        "\"return\" used outside of a function",
        Some(position),
    )
}
