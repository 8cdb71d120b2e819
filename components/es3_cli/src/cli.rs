//! Command line argument definitions

use clap::Parser;

/// Compiles ES3 source files to C over the ES3Var runtime.
#[derive(Debug, Parser)]
#[command(name = "es3c", version, about = "ES3 to C compiler")]
pub struct Cli {
    /// ES3 source file to compile
    pub file: Option<String>,

    /// Path for the generated C file (default: the input path with a .c extension)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Compile an inline source string and print the C to stdout
    #[arg(long, value_name = "CODE")]
    pub eval: Option<String>,

    /// Print the token stream before parsing
    #[arg(long)]
    pub print_tokens: bool,

    /// Print the parsed program before code generation
    #[arg(long)]
    pub print_ast: bool,
}
