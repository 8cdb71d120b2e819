//! ES3 Compiler CLI
//!
//! Entry point for the ES3-to-C compiler. Parses CLI arguments and
//! delegates to the Compiler for translation.

use clap::Parser as ClapParser;
use es3_cli::{Cli, CliError, Compiler};

fn main() {
    let cli = Cli::parse();

    let compiler = Compiler::new()
        .with_print_tokens(cli.print_tokens)
        .with_print_ast(cli.print_ast);

    if let Some(file) = cli.file {
        if let Err(error) = compiler.compile_file(&file, cli.output.as_deref()) {
            report_and_exit(error);
        }
    } else if let Some(code) = cli.eval {
        match compiler.compile_source(&code) {
            Ok(generated) => print!("{}", generated),
            Err(error) => report_and_exit(error),
        }
    } else {
        // Default: show usage
        println!("ES3 Compiler v0.1.0");
        println!();
        println!("Usage:");
        println!("  es3c <FILE>              Compile an ES3 file to C");
        println!("  es3c <FILE> -o <PATH>    Choose the output path");
        println!("  es3c --eval <CODE>       Compile inline ES3 code to stdout");
        println!();
        println!("Run 'es3c --help' for more options.");
    }
}

/// Print the diagnostic ("Error on line N: ..." when the position is
/// known) and exit with the error's category code.
fn report_and_exit(error: CliError) -> ! {
    match error.line() {
        Some(line) => eprintln!("Error on line {}: {}", line, error),
        None => eprintln!("Error: {}", error),
    }
    std::process::exit(error.exit_code());
}
