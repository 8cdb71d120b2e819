//! ES3 Compiler CLI Library
//!
//! Provides the Compiler struct and supporting modules for the `es3c`
//! command line interface.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod compiler;
pub mod error;

pub use cli::Cli;
pub use compiler::Compiler;
pub use error::{CliError, CliResult};
