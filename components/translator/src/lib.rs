//! ES3 Translator Component
//!
//! Provides the lexer, recursive descent parser, AST, and C code
//! generator that turn ES3 source text into a compilable C translation
//! unit over the `ES3Var` runtime type.
//!
//! # Overview
//!
//! - [`Lexer`] - Tokenizes ES3 source code with unbounded peek
//! - [`Token`] / [`TokenKind`] / [`TokenSet`] - Token types and the
//!   bitmask sets grammar rules check membership against
//! - [`Parser`] - Recursive descent parser producing the AST
//! - [`Program`] - Parsed program root
//! - [`CodeGen`] - Renders a parsed program as C text
//!
//! # Example
//!
//! ```
//! use translator::{CodeGen, Parser};
//!
//! let source = "define x = 5;\nprint[x];";
//! let program = Parser::new(source).parse().unwrap();
//!
//! let c_source = CodeGen::new().generate(&program);
//! assert!(c_source.contains("int main() {"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod emit;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;


pub use ast::{BinaryOp, Expression, Program, Statement};
pub use emit::CodeGen;
pub use lexer::Lexer;
pub use parser::Parser;
pub use token::{Token, TokenKind, TokenSet};
