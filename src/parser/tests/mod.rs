//! Unit tests for parsing.
//!
//! Tests are organized by parser component:
//! - [`expr`]: Expression parsing, precedence, and associativity
//! - [`stmt`]: Statement parsing (including `for` lowering)
//! - [`decl`]: Function and variable declarations
//! - [`errors`]: Error detection, messages, and recovery

use super::*;
use crate::ast::{AstPrinter, Expr, ExprKind, LiteralValue, Stmt, StmtKind};
use crate::lexer::Lexer;


/// Parses a program, asserting the input lexes cleanly.
pub(super) fn parse(source: &str) -> Result<Vec<Stmt>, Vec<ParseError>> {
    let mut lexer = Lexer::new(source);
    let (tokens, lex_errors) = lexer.tokenize();
    assert!(
        lex_errors.is_empty(),
        "Lexer failed on parser test input {:?}: {:?}",
        source,
        lex_errors
    );
    let mut parser = Parser::new(tokens);
    parser.parse()
}

/// Parses a program that is expected to be valid.
pub(super) fn parse_ok(source: &str) -> Vec<Stmt> {
    parse(source).unwrap_or_else(|errors| panic!("Failed to parse {:?}: {:?}", source, errors))
}

/// Parses `source` as a single expression statement and extracts the
/// expression.
pub(super) fn parse_expr(source: &str) -> Expr {
    let mut statements = parse_ok(&format!("{};", source));
    assert_eq!(statements.len(), 1, "input {:?}", source);
    match statements.remove(0).kind {
        StmtKind::Expr(expr) => expr,
        other => panic!("Expected expression statement for {:?}, got {:?}", source, other),
    }
}

/// Parses an expression and renders it in parenthesized prefix form.
pub(super) fn printed(source: &str) -> String {
    AstPrinter.print(&parse_expr(source))
}

/// Parses a program that is expected to fail and returns its errors.
pub(super) fn parse_errors(source: &str) -> Vec<ParseError> {
    match parse(source) {
        Ok(statements) => panic!(
            "Expected parse errors for {:?}, got {} statements",
            source,
            statements.len()
        ),
        Err(errors) => errors,
    }
}
