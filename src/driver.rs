//! Execution driver: file mode, the interactive prompt, and exit codes.
//!
//! Both modes share one pipeline run (lex, parse, interpret) against a
//! long-lived interpreter and reporter. File mode turns the reporter's
//! flags into the conventional exit codes: 65 for lex/parse errors, 70 for
//! a runtime error.

use std::io::{self, Write};

use lox::interpreter::Interpreter;
use lox::lexer::Lexer;
use lox::parser::Parser;
use lox::report::Reporter;

use crate::diagnostics;

/// How a run presents its diagnostics.
enum Mode<'a> {
    /// Batch execution of a script; every error also gets a span-labelled
    /// report against the file source.
    File { filename: &'a str },
    /// The interactive prompt; plain diagnostic lines only, and expression
    /// statements echo their value.
    Repl,
}

/// Runs a script file and returns the process exit code.
pub(crate) fn run_file(path: &str) -> i32 {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Could not read '{}': {}", path, error);
            return 66;
        }
    };

    let mut reporter = Reporter::new();
    let mut interpreter = Interpreter::new();
    run(
        &source,
        &mut interpreter,
        &mut reporter,
        &Mode::File { filename: path },
    );

    if reporter.had_error {
        65
    } else if reporter.had_runtime_error {
        70
    } else {
        0
    }
}

/// Runs the interactive prompt until EOF, an empty line, or `.quit`.
///
/// Globals persist across lines. A line without a trailing `;` gets one
/// appended, so `1 + 2` works at the prompt. Lex/parse errors are cleared
/// between lines so one bad line does not poison the next.
pub(crate) fn run_prompt() -> i32 {
    let mut reporter = Reporter::new();
    let mut interpreter = Interpreter::new();
    let stdin = io::stdin();

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(error) => {
                eprintln!("Could not read input: {}", error);
                break;
            }
        }

        let line = line.trim_end_matches(['\n', '\r']);
        if line.is_empty() || line == ".quit" {
            break;
        }

        let mut source = line.to_string();
        if !source.ends_with(';') {
            source.push(';');
        }

        run(&source, &mut interpreter, &mut reporter, &Mode::Repl);
        reporter.reset();
    }

    0
}

/// Runs one source through the pipeline, reporting as it goes.
///
/// Evaluation only happens when the source lexed and parsed cleanly; a
/// lexical error alone is enough to skip it.
fn run(source: &str, interpreter: &mut Interpreter, reporter: &mut Reporter, mode: &Mode) {
    let mut lexer = Lexer::new(source);
    let (tokens, lex_errors) = lexer.tokenize();
    for error in &lex_errors {
        reporter.error(error.span().line, error.message());
        if let Mode::File { filename } = mode {
            diagnostics::report_span(filename, source, error.span(), error.message());
        }
    }

    let mut parser = Parser::new(tokens);
    let statements = match parser.parse() {
        Ok(statements) => statements,
        Err(parse_errors) => {
            for error in &parse_errors {
                reporter.report(error.span().line, &error.location(), error.message());
                if let Mode::File { filename } = mode {
                    diagnostics::report_span(filename, source, error.span(), error.message());
                }
            }
            return;
        }
    };

    if reporter.had_error {
        return;
    }

    let result = match mode {
        Mode::File { .. } => interpreter.interpret(&statements),
        Mode::Repl => interpreter.repl_interpret(&statements),
    };

    if let Err(error) = result {
        reporter.runtime_error(&error);
        if let Mode::File { filename } = mode {
            diagnostics::report_span(filename, source, error.span(), error.message());
        }
    }
}
