//! Unit tests for the evaluator.
//!
//! Tests are organized by concern:
//! - [`value`]: Truthiness, equality, and stringification
//! - [`expr`]: Expression evaluation and operator errors
//! - [`env`]: Scoping, shadowing, and variable lifecycle
//! - [`stmt`]: Control flow and `break`
//! - [`functions`]: Declarations, calls, returns, and closures

use super::*;
use crate::ast::{Stmt, StmtKind};
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::token::{Span, Token, TokenKind};

mod stmt;

/// Parses a program, asserting it lexes and parses cleanly.
pub(super) fn parse(source: &str) -> Vec<Stmt> {
    let mut lexer = Lexer::new(source);
    let (tokens, lex_errors) = lexer.tokenize();
    assert!(
        lex_errors.is_empty(),
        "Lexer failed on test input {:?}: {:?}",
        source,
        lex_errors
    );
    let mut parser = Parser::new(tokens);
    parser
        .parse()
        .unwrap_or_else(|errors| panic!("Failed to parse {:?}: {:?}", source, errors))
}

/// Evaluates a single expression on a fresh interpreter.
pub(super) fn eval(source: &str) -> Result<Value, RuntimeError> {
    let statements = parse(&format!("{};", source));
    assert_eq!(statements.len(), 1, "input {:?}", source);
    let StmtKind::Expr(ref expression) = statements[0].kind else {
        panic!("Expected expression statement for {:?}", source);
    };
    Interpreter::new().evaluate(expression)
}

/// Evaluates an expression that is expected to succeed.
pub(super) fn eval_ok(source: &str) -> Value {
    eval(source).unwrap_or_else(|error| panic!("Evaluation of {:?} failed: {}", source, error))
}

/// Evaluates an expression that is expected to fail.
pub(super) fn eval_err(source: &str) -> RuntimeError {
    match eval(source) {
        Ok(value) => panic!("Expected runtime error for {:?}, got {}", source, value),
        Err(error) => error,
    }
}

/// Runs a program and returns the interpreter for inspection.
pub(super) fn run(source: &str) -> Result<Interpreter, RuntimeError> {
    let statements = parse(source);
    let mut interpreter = Interpreter::new();
    interpreter.interpret(&statements)?;
    Ok(interpreter)
}

/// Reads a global variable from an interpreter.
pub(super) fn global(interpreter: &Interpreter, name: &str) -> Value {
    let token = Token::new(TokenKind::Identifier, name, None, Span::new(0, 0, 1, 1));
    interpreter
        .globals()
        .borrow()
        .get(&token)
        .unwrap_or_else(|error| panic!("Reading global '{}' failed: {}", name, error))
}

/// Runs a program and reads one global from the result.
pub(super) fn run_and_get(source: &str, name: &str) -> Value {
    let interpreter =
        run(source).unwrap_or_else(|error| panic!("Program {:?} failed: {}", source, error));
    global(&interpreter, name)
}
