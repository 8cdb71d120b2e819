//! Compile error types shared by every stage of the translation pipeline.
//!
//! All fatal conditions carry an [`ErrorCategory`] so callers (and tests)
//! can tell failure classes apart without parsing messages. Each category
//! maps to a distinct process exit code.

use crate::SourcePosition;
use thiserror::Error;

/// The category of a fatal translation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Source file could not be opened or read
    SourceUnreadable,
    /// Output file could not be created or written
    OutputUnwritable,
    /// Lexer hit a character that starts no token
    UnknownCharacter,
    /// String literal reached end of input before its closing quote
    UnterminatedString,
    /// Numeral ended on a decimal point with no digit after it
    UnfinishedNumber,
    /// Token outside the set the current grammar rule accepts
    UnexpectedToken,
    /// Function definition after the leading definitions region
    MisplacedFunction,
    /// Parameter list entry that is not a bare identifier
    MalformedParameter,
}

impl ErrorCategory {
    /// Process exit code for this category.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorCategory::SourceUnreadable => 101,
            ErrorCategory::OutputUnwritable => 103,
            ErrorCategory::UnknownCharacter => 201,
            ErrorCategory::UnterminatedString => 202,
            ErrorCategory::UnfinishedNumber => 206,
            ErrorCategory::UnexpectedToken => 401,
            ErrorCategory::MisplacedFunction => 402,
            ErrorCategory::MalformedParameter => 403,
        }
    }
}

/// A fatal translation error.
///
/// Detection aborts the whole run: the pipeline propagates the error to
/// the top level, where the CLI reports it and exits with the category's
/// code. No partial output survives a failed compile.
///
/// # Examples
///
/// ```
/// use es3_core::{CompileError, ErrorCategory};
///
/// let error = CompileError::new(
///     ErrorCategory::UnterminatedString,
///     "unclosed string",
///     None,
/// );
///
/// assert_eq!(error.category.exit_code(), 202);
/// ```
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct CompileError {
    /// Failure class, used for exit codes and test assertions
    pub category: ErrorCategory,
    /// Human-readable description
    pub message: String,
    /// Where in the source the error was detected, when known
    pub position: Option<SourcePosition>,
}

impl CompileError {
    /// Create an error in the given category.
    pub fn new(
        category: ErrorCategory,
        message: impl Into<String>,
        position: Option<SourcePosition>,
    ) -> Self {
        Self {
            category,
            message: message.into(),
            position,
        }
    }
}
