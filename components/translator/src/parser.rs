//! Recursive descent parser for ES3
//!
//! One method per grammar level, tightest-binding first: primary, unary,
//! exponent, term, expression, comparison. Statement dispatch peeks at
//! the first token; the `define` form needs a balanced-bracket lookahead
//! to tell a function definition from an array-valued variable.

use es3_core::CompileError;

use crate::ast::{BinaryOp, Expression, Program, Statement};
use crate::error::{
    malformed_parameter, misplaced_function, return_outside_function, unexpected_token,
};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind, TokenSet};

/// Tokens that can start a statement.
const STATEMENT_STARTERS: TokenSet = TokenSet::of(&[
    TokenKind::Define,
    TokenKind::Identifier,
    TokenKind::Conditional,
    TokenKind::Loop,
    TokenKind::Return,
]);

/// Tokens that can start a primary expression.
const PRIMARY_STARTERS: TokenSet = TokenSet::of(&[
    TokenKind::Number,
    TokenKind::String,
    TokenKind::Identifier,
    TokenKind::OpenParen,
    TokenKind::OpenBracket,
    TokenKind::True,
    TokenKind::False,
]);

/// ES3 parser
pub struct Parser {
    lexer: Lexer,
    /// True until the first statement that is not a `define` form.
    /// Function definitions are only legal while this holds.
    in_leading_defs: bool,
    /// Brace nesting depth; function definitions are rejected inside
    /// any block
    block_depth: usize,
    /// Function body nesting depth for `return` validation
    function_depth: usize,
}

impl Parser {
    /// Create a new parser for the given source code
    pub fn new(source: &str) -> Self {
        Self {
            lexer: Lexer::new(source),
            in_leading_defs: true,
            block_depth: 0,
            function_depth: 0,
        }
    }

    /// Parse the source into a program
    pub fn parse(&mut self) -> Result<Program, CompileError> {
        let mut statements = Vec::new();

        while !self.is_at_end()? {
            let statement = self.parse_statement()?;
            if !statement.is_definition() {
                self.in_leading_defs = false;
            }
            statements.push(statement);
        }

        Ok(Program { statements })
    }

    fn is_at_end(&mut self) -> Result<bool, CompileError> {
        Ok(self.lexer.peek_token()?.kind == TokenKind::EndOfFile)
    }

    /// Consume the next token, requiring it to be a member of `expected`
    fn expect(&mut self, expected: TokenSet) -> Result<Token, CompileError> {
        let token = self.lexer.next_token()?;
        if !expected.contains(token.kind) {
            return Err(unexpected_token(expected, &token));
        }
        Ok(token)
    }

    fn expect_statement_end(&mut self) -> Result<(), CompileError> {
        self.expect(TokenSet::of(&[TokenKind::StatementEnd]))?;
        Ok(())
    }

    fn parse_statement(&mut self) -> Result<Statement, CompileError> {
        let token = self.lexer.peek_token()?.clone();

        match token.kind {
            TokenKind::Define => self.parse_define_statement(),
            TokenKind::Identifier => self.parse_identifier_statement(),
            TokenKind::Conditional => self.parse_if_statement(),
            TokenKind::Loop => self.parse_loop_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => Err(unexpected_token(STATEMENT_STARTERS, &token)),
        }
    }

    /// Parse `define name = ...;` — either a variable definition or,
    /// when the value position holds `[params] = { body }`, a function
    /// definition.
    fn parse_define_statement(&mut self) -> Result<Statement, CompileError> {
        self.lexer.next_token()?; // consume 'define'
        let name_token = self.expect(TokenSet::of(&[TokenKind::Identifier]))?;
        let name = name_token.text.unwrap_or_default();
        self.expect(TokenSet::of(&[TokenKind::Equals]))?;

        if self.lexer.peek_token()?.kind == TokenKind::OpenBracket
            && self.bracket_group_starts_function()?
        {
            if !self.in_leading_defs || self.block_depth > 0 {
                return Err(misplaced_function(&name, name_token.position));
            }

            let params = self.parse_parameter_list()?;
            self.expect(TokenSet::of(&[TokenKind::Equals]))?;
            self.function_depth += 1;
            let body = self.parse_block()?;
            self.function_depth -= 1;
            self.expect_statement_end()?;
            return Ok(Statement::FunctionDefinition { name, params, body });
        }

        let value = self.parse_comparison()?;
        self.expect_statement_end()?;
        Ok(Statement::VariableDefinition { name, value })
    }

    /// After `define name =`, an open bracket starts either an array
    /// literal value or a function definition's parameter list. Peek
    /// past the balanced bracket group without consuming anything; a
    /// following `=` means function definition.
    fn bracket_group_starts_function(&mut self) -> Result<bool, CompileError> {
        let mut depth = 1;
        let mut n = 1;
        while depth > 0 {
            match self.lexer.peek_nth(n)?.kind {
                TokenKind::OpenBracket => depth += 1,
                TokenKind::CloseBracket => depth -= 1,
                // Unclosed group; let the array-literal path report it
                TokenKind::EndOfFile => return Ok(false),
                _ => {}
            }
            n += 1;
        }
        Ok(self.lexer.peek_nth(n)?.kind == TokenKind::Equals)
    }

    /// Parse `name = value;` (reassignment) or `name[args];` (call)
    fn parse_identifier_statement(&mut self) -> Result<Statement, CompileError> {
        let name_token = self.lexer.next_token()?;
        let name = name_token.text.unwrap_or_default();

        let next = self.lexer.peek_token()?.clone();
        match next.kind {
            TokenKind::Equals => {
                self.lexer.next_token()?;
                let value = self.parse_comparison()?;
                self.expect_statement_end()?;
                Ok(Statement::Reassignment { name, value })
            }
            TokenKind::OpenBracket => {
                let args = self.parse_bracketed_expressions()?;
                self.expect_statement_end()?;
                Ok(Statement::Call { name, args })
            }
            _ => Err(unexpected_token(
                TokenSet::of(&[TokenKind::Equals, TokenKind::OpenBracket]),
                &next,
            )),
        }
    }

    fn parse_if_statement(&mut self) -> Result<Statement, CompileError> {
        self.lexer.next_token()?; // consume 'if'
        self.expect(TokenSet::of(&[TokenKind::OpenParen]))?;
        let condition = self.parse_comparison()?;
        self.expect(TokenSet::of(&[TokenKind::CloseParen]))?;
        let body = self.parse_block()?;
        self.expect_statement_end()?;
        Ok(Statement::If { condition, body })
    }

    fn parse_loop_statement(&mut self) -> Result<Statement, CompileError> {
        self.lexer.next_token()?; // consume 'loop'
        self.expect(TokenSet::of(&[TokenKind::OpenParen]))?;
        let condition = self.parse_comparison()?;
        self.expect(TokenSet::of(&[TokenKind::CloseParen]))?;
        let body = self.parse_block()?;
        self.expect_statement_end()?;
        Ok(Statement::Loop { condition, body })
    }

    fn parse_return_statement(&mut self) -> Result<Statement, CompileError> {
        let keyword = self.lexer.next_token()?;
        if self.function_depth == 0 {
            return Err(return_outside_function(keyword.position));
        }
        let value = self.parse_comparison()?;
        self.expect_statement_end()?;
        Ok(Statement::Return { value })
    }

    /// Parse `{ statements }`
    fn parse_block(&mut self) -> Result<Vec<Statement>, CompileError> {
        self.expect(TokenSet::of(&[TokenKind::OpenBrace]))?;
        self.block_depth += 1;

        let mut statements = Vec::new();
        while self.lexer.peek_token()?.kind != TokenKind::CloseBrace {
            statements.push(self.parse_statement()?);
        }
        self.lexer.next_token()?; // consume '}'

        self.block_depth -= 1;
        Ok(statements)
    }

    /// Parse `[e1, e2, ...]` — array literals and call argument lists
    fn parse_bracketed_expressions(&mut self) -> Result<Vec<Expression>, CompileError> {
        self.expect(TokenSet::of(&[TokenKind::OpenBracket]))?;

        let mut items = Vec::new();
        if self.lexer.peek_token()?.kind == TokenKind::CloseBracket {
            self.lexer.next_token()?;
            return Ok(items);
        }

        loop {
            items.push(self.parse_comparison()?);
            let separator =
                self.expect(TokenSet::of(&[TokenKind::Comma, TokenKind::CloseBracket]))?;
            if separator.kind == TokenKind::CloseBracket {
                return Ok(items);
            }
        }
    }

    /// Parse `[a, b, ...]` where every entry must be a bare identifier
    fn parse_parameter_list(&mut self) -> Result<Vec<String>, CompileError> {
        self.expect(TokenSet::of(&[TokenKind::OpenBracket]))?;

        let mut params = Vec::new();
        if self.lexer.peek_token()?.kind == TokenKind::CloseBracket {
            self.lexer.next_token()?;
            return Ok(params);
        }

        loop {
            let token = self.lexer.next_token()?;
            if token.kind != TokenKind::Identifier {
                return Err(malformed_parameter(&token));
            }
            params.push(token.text.unwrap_or_default());

            let separator =
                self.expect(TokenSet::of(&[TokenKind::Comma, TokenKind::CloseBracket]))?;
            if separator.kind == TokenKind::CloseBracket {
                return Ok(params);
            }
        }
    }

    fn parse_comparison(&mut self) -> Result<Expression, CompileError> {
        let mut left = self.parse_expression()?;

        loop {
            let op = match self.lexer.peek_token()?.kind {
                TokenKind::DoubleEquals => BinaryOp::Equal,
                TokenKind::GreaterThan => BinaryOp::Greater,
                TokenKind::GreaterOrEqual => BinaryOp::GreaterEqual,
                TokenKind::LessThan => BinaryOp::Less,
                TokenKind::LessOrEqual => BinaryOp::LessEqual,
                _ => break,
            };
            self.lexer.next_token()?;
            let right = self.parse_expression()?;
            left = Expression::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_expression(&mut self) -> Result<Expression, CompileError> {
        let mut left = self.parse_term()?;

        loop {
            let op = match self.lexer.peek_token()?.kind {
                TokenKind::Add => BinaryOp::Add,
                TokenKind::Subtract => BinaryOp::Subtract,
                _ => break,
            };
            self.lexer.next_token()?;
            let right = self.parse_term()?;
            left = Expression::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expression, CompileError> {
        let mut left = self.parse_exponent()?;

        loop {
            let op = match self.lexer.peek_token()?.kind {
                TokenKind::Multiply => BinaryOp::Multiply,
                TokenKind::Divide => BinaryOp::Divide,
                _ => break,
            };
            self.lexer.next_token()?;
            let right = self.parse_exponent()?;
            left = Expression::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Repeated `^` builds a left-nested tree, so the emitted runtime
    /// calls evaluate chains left-to-right.
    fn parse_exponent(&mut self) -> Result<Expression, CompileError> {
        let mut left = self.parse_unary()?;

        while self.lexer.peek_token()?.kind == TokenKind::Exponent {
            self.lexer.next_token()?;
            let right = self.parse_unary()?;
            left = Expression::Binary {
                left: Box::new(left),
                op: BinaryOp::Power,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expression, CompileError> {
        if self.lexer.peek_token()?.kind == TokenKind::Subtract {
            self.lexer.next_token()?;
            let operand = self.parse_unary()?;
            return Ok(Expression::Negate(Box::new(operand)));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Expression, CompileError> {
        let token = self.lexer.peek_token()?.clone();

        match token.kind {
            TokenKind::OpenParen => {
                self.lexer.next_token()?;
                let inner = self.parse_comparison()?;
                self.expect(TokenSet::of(&[TokenKind::CloseParen]))?;
                Ok(inner)
            }
            TokenKind::OpenBracket => {
                let items = self.parse_bracketed_expressions()?;
                Ok(Expression::Array(items))
            }
            TokenKind::Identifier => {
                self.lexer.next_token()?;
                let name = token.text.unwrap_or_default();
                if self.lexer.peek_token()?.kind == TokenKind::OpenBracket {
                    let args = self.parse_bracketed_expressions()?;
                    Ok(Expression::Call { name, args })
                } else {
                    Ok(Expression::Variable(name))
                }
            }
            TokenKind::Number => {
                self.lexer.next_token()?;
                Ok(Expression::Number(token.text.unwrap_or_default()))
            }
            TokenKind::String => {
                self.lexer.next_token()?;
                Ok(Expression::StringLiteral(token.text.unwrap_or_default()))
            }
            TokenKind::True => {
                self.lexer.next_token()?;
                Ok(Expression::Boolean(true))
            }
            TokenKind::False => {
                self.lexer.next_token()?;
                Ok(Expression::Boolean(false))
            }
            _ => Err(unexpected_token(PRIMARY_STARTERS, &token)),
        }
    }
}
