//! ES3 Lexer - tokenizes source code into tokens
//!
//! Pull-model scanner: the parser requests tokens one at a time with
//! [`Lexer::next_token`], and looks ahead without consuming through
//! [`Lexer::peek_nth`]. Lookahead is served from a token buffer, so
//! peeking at any depth leaves consumption state untouched.

use std::collections::VecDeque;

use es3_core::{CompileError, SourcePosition};

use crate::error::{unfinished_number, unknown_character, unterminated_string};
use crate::token::{Token, TokenKind};

/// Lexer for ES3 source code
pub struct Lexer {
    chars: Vec<char>,
    position: usize,
    line: u32,
    column: u32,
    /// Tokens scanned ahead of the consumption point, front first
    lookahead: VecDeque<Token>,
}

impl Lexer {
    /// Create a new lexer for the given source code
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            lookahead: VecDeque::new(),
        }
    }

    /// Get the next token from the source, consuming it
    pub fn next_token(&mut self) -> Result<Token, CompileError> {
        if let Some(token) = self.lookahead.pop_front() {
            return Ok(token);
        }
        self.scan_token()
    }

    /// Peek at the next token without consuming it
    pub fn peek_token(&mut self) -> Result<&Token, CompileError> {
        self.peek_nth(0)
    }

    /// Peek at the n-th following token (0 = the token `next_token`
    /// would return) without consuming anything
    pub fn peek_nth(&mut self, n: usize) -> Result<&Token, CompileError> {
        while self.lookahead.len() <= n {
            let token = self.scan_token()?;
            self.lookahead.push_back(token);
        }
        Ok(&self.lookahead[n])
    }

    fn scan_token(&mut self) -> Result<Token, CompileError> {
        self.skip_whitespace();

        let position = self.current_position();

        if self.is_at_end() {
            return Ok(Token {
                kind: TokenKind::EndOfFile,
                text: None,
                position,
            });
        }

        let ch = self.advance();

        let kind = match ch {
            '=' => {
                if self.match_char('=') {
                    TokenKind::DoubleEquals
                } else {
                    TokenKind::Equals
                }
            }
            '>' => {
                if self.match_char('=') {
                    TokenKind::GreaterOrEqual
                } else {
                    TokenKind::GreaterThan
                }
            }
            '<' => {
                if self.match_char('=') {
                    TokenKind::LessOrEqual
                } else {
                    TokenKind::LessThan
                }
            }
            '+' => TokenKind::Add,
            '-' => TokenKind::Subtract,
            '*' => TokenKind::Multiply,
            '/' => TokenKind::Divide,
            '^' => TokenKind::Exponent,
            ';' => TokenKind::StatementEnd,
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            '{' => TokenKind::OpenBrace,
            '}' => TokenKind::CloseBrace,
            '[' => TokenKind::OpenBracket,
            ']' => TokenKind::CloseBracket,
            ',' => TokenKind::Comma,
            '"' => return self.scan_string(position),
            _ if ch.is_ascii_digit() => return self.scan_number(ch, position),
            _ if ch.is_ascii_alphabetic() => return self.scan_identifier(ch, position),
            _ => return Err(unknown_character(ch, position)),
        };

        Ok(Token {
            kind,
            text: None,
            position,
        })
    }

    /// Scan a string literal. The payload keeps the surrounding quote
    /// characters so the code generator can splice it out verbatim.
    fn scan_string(&mut self, position: SourcePosition) -> Result<Token, CompileError> {
        let mut text = String::from('"');

        loop {
            if self.is_at_end() {
                return Err(unterminated_string(position));
            }
            let ch = self.advance();
            text.push(ch);
            if ch == '"' {
                break;
            }
        }

        Ok(Token {
            kind: TokenKind::String,
            text: Some(text),
            position,
        })
    }

    /// Scan a numeric literal: digits with at most one decimal point,
    /// which must be followed by at least one digit. The payload is the
    /// exact source text; the generated code's own literal parser does
    /// the final conversion.
    fn scan_number(&mut self, first: char, position: SourcePosition) -> Result<Token, CompileError> {
        let mut text = first.to_string();

        while !self.is_at_end() && self.peek_char().is_ascii_digit() {
            text.push(self.advance());
        }

        if !self.is_at_end() && self.peek_char() == '.' {
            text.push(self.advance());
            if self.is_at_end() || !self.peek_char().is_ascii_digit() {
                return Err(unfinished_number(position));
            }
            while !self.is_at_end() && self.peek_char().is_ascii_digit() {
                text.push(self.advance());
            }
        }

        Ok(Token {
            kind: TokenKind::Number,
            text: Some(text),
            position,
        })
    }

    fn scan_identifier(&mut self, first: char, position: SourcePosition) -> Result<Token, CompileError> {
        let mut text = first.to_string();

        while !self.is_at_end() && self.peek_char().is_ascii_alphanumeric() {
            text.push(self.advance());
        }

        // Reserved words lex as keyword tokens with no payload
        let kind = match text.as_str() {
            "define" => TokenKind::Define,
            "if" => TokenKind::Conditional,
            "return" => TokenKind::Return,
            "loop" => TokenKind::Loop,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            _ => {
                return Ok(Token {
                    kind: TokenKind::Identifier,
                    text: Some(text),
                    position,
                })
            }
        };

        Ok(Token {
            kind,
            text: None,
            position,
        })
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() {
            match self.peek_char() {
                ' ' | '\t' | '\r' | '\n' => {
                    self.advance();
                }
                _ => break,
            }
        }
    }

    fn current_position(&self) -> SourcePosition {
        SourcePosition {
            line: self.line,
            column: self.column,
            offset: self.position,
        }
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.chars.len()
    }

    fn peek_char(&self) -> char {
        self.chars[self.position]
    }

    fn advance(&mut self) -> char {
        let ch = self.chars[self.position];
        self.position += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        ch
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.peek_char() != expected {
            return false;
        }
        self.advance();
        true
    }
}
