//! Compilation orchestration for the CLI
//!
//! The Compiler struct drives the translation pipeline: read the
//! source, lex and parse it, render the C text, and write it out. The
//! debug printing flags live here so the library crates never print.

use std::path::{Path, PathBuf};

use translator::{CodeGen, Lexer, Parser, TokenKind};

use crate::error::{CliError, CliResult};

/// Drives source-to-C compilation for the CLI
pub struct Compiler {
    /// Whether to print the token stream before parsing
    print_tokens: bool,
    /// Whether to print the parsed program before code generation
    print_ast: bool,
}

impl Compiler {
    /// Create a new compiler instance
    ///
    /// # Example
    /// ```
    /// use es3_cli::Compiler;
    ///
    /// let compiler = Compiler::new();
    /// ```
    pub fn new() -> Self {
        Self {
            print_tokens: false,
            print_ast: false,
        }
    }

    /// Enable token stream printing
    pub fn with_print_tokens(mut self, enabled: bool) -> Self {
        self.print_tokens = enabled;
        self
    }

    /// Enable AST printing
    pub fn with_print_ast(mut self, enabled: bool) -> Self {
        self.print_ast = enabled;
        self
    }

    /// Compile an ES3 source file and write the C translation
    ///
    /// # Arguments
    /// * `path` - Path to the ES3 source file
    /// * `output` - Path for the generated C file; defaults to `path`
    ///   with its extension replaced by `.c`
    ///
    /// # Errors
    /// Returns `CliError` if the file cannot be read, translation
    /// fails, or the output cannot be written
    ///
    /// # Example
    /// ```no_run
    /// use es3_cli::Compiler;
    ///
    /// let compiler = Compiler::new();
    /// compiler.compile_file("example.es3", None).unwrap();
    /// ```
    pub fn compile_file(&self, path: &str, output: Option<&str>) -> CliResult<()> {
        let source = std::fs::read_to_string(path).map_err(|source| CliError::SourceRead {
            path: path.to_string(),
            source,
        })?;

        let generated = self.compile_source(&source)?;

        let output_path = match output {
            Some(explicit) => PathBuf::from(explicit),
            None => Path::new(path).with_extension("c"),
        };
        std::fs::write(&output_path, generated).map_err(|source| CliError::OutputWrite {
            path: output_path.display().to_string(),
            source,
        })?;

        Ok(())
    }

    /// Compile an ES3 source string to C text
    ///
    /// # Arguments
    /// * `source` - ES3 source code
    ///
    /// # Returns
    /// The generated C translation unit
    ///
    /// # Errors
    /// Returns `CliError` if lexing or parsing fails
    ///
    /// # Example
    /// ```
    /// use es3_cli::Compiler;
    ///
    /// let compiler = Compiler::new();
    /// let c_source = compiler.compile_source("define x = 5;").unwrap();
    /// assert!(c_source.contains("int main() {"));
    /// ```
    pub fn compile_source(&self, source: &str) -> CliResult<String> {
        if self.print_tokens {
            self.print_token_stream(source)?;
        }

        let program = Parser::new(source).parse()?;

        if self.print_ast {
            println!("AST: {:#?}", program);
        }

        Ok(CodeGen::new().generate(&program))
    }

    fn print_token_stream(&self, source: &str) -> CliResult<()> {
        let mut lexer = Lexer::new(source);
        loop {
            let token = lexer.next_token()?;
            match &token.text {
                Some(text) => println!("{}: {}", token.kind.name(), text),
                None => println!("{}", token.kind.name()),
            }
            if token.kind == TokenKind::EndOfFile {
                return Ok(());
            }
        }
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Compiler::new()
    }
}
