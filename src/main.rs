//! The Lox interpreter CLI.
//!
//! `lox` runs a script file; `lox` with no arguments starts the
//! interactive prompt. Execution and diagnostics rendering live in the
//! driver module.

use clap::Parser;

mod diagnostics;
mod driver;

/// Command-line interface for the Lox interpreter.
#[derive(Parser)]
#[command(name = "lox")]
#[command(about = "The Lox programming language", long_about = None)]
struct Cli {
    /// The script to run (e.g., `program.lox`). Starts the interactive
    /// prompt when omitted.
    ///
    /// Captured as a list so surplus arguments produce the conventional
    /// usage message and exit code instead of a clap error.
    #[arg(value_name = "SCRIPT")]
    script: Vec<String>,
}

/// Entry point for the Lox interpreter.
fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.script.as_slice() {
        [] => driver::run_prompt(),
        [script] => driver::run_file(script),
        _ => {
            eprintln!("Usage: lox [script]");
            64
        }
    };

    std::process::exit(exit_code);
}
