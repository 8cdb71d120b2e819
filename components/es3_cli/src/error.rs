//! Error types for the CLI

use es3_core::{CompileError, ErrorCategory};
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Translation failed
    #[error("{0}")]
    Compile(#[from] CompileError),

    /// Source file could not be read
    #[error("can't open file \"{path}\": {source}")]
    SourceRead {
        /// Path that failed to open
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Output file could not be written
    #[error("can't write file \"{path}\": {source}")]
    OutputWrite {
        /// Path that failed to write
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Compile(error) => error.category.exit_code(),
            CliError::SourceRead { .. } => ErrorCategory::SourceUnreadable.exit_code(),
            CliError::OutputWrite { .. } => ErrorCategory::OutputUnwritable.exit_code(),
        }
    }

    /// Source line the error points at, when known.
    pub fn line(&self) -> Option<u32> {
        match self {
            CliError::Compile(error) => error.position.as_ref().map(|position| position.line),
            _ => None,
        }
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
