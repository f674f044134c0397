//! Unit tests for the lexer module.

use super::*;
use crate::token::{Literal, Token, TokenKind};

mod identifiers;

/// Tokenizes input that is expected to be error-free and returns the kinds.
pub(super) fn tokenize_kinds(input: &str) -> Vec<TokenKind> {
    let (tokens, errors) = tokenize(input);
    assert!(
        errors.is_empty(),
        "Unexpected lex errors for input {:?}: {:?}",
        input,
        errors
    );
    tokens.into_iter().map(|t| t.kind).collect()
}

/// Tokenizes input and returns both tokens and errors.
pub(super) fn tokenize(input: &str) -> (Vec<Token>, Vec<LexError>) {
    let mut lexer = Lexer::new(input);
    lexer.tokenize()
}

/// Tokenizes input that is expected to fail and returns its errors.
pub(super) fn tokenize_errors(input: &str) -> Vec<LexError> {
    let (_, errors) = tokenize(input);
    assert!(
        !errors.is_empty(),
        "Expected lex errors for input {:?}, but scanning succeeded",
        input
    );
    errors
}
