//! Lexical analysis error types.
//!
//! This module defines [`LexError`], which represents errors that can occur
//! during tokenization.

use crate::token::Span;

/// The kind of lexical error.
///
/// This enum allows error handling code and tests to match on error types
/// structurally rather than relying on string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A character that starts no token.
    UnexpectedCharacter,
    /// A string literal missing its closing quote before the end of input.
    UnterminatedString,
}

/// An error that occurred during lexical analysis.
///
/// `LexError` contains a human-readable message and the source location
/// where the error occurred, enabling rich error reporting with tools
/// like [`ariadne`].
///
/// [`ariadne`]: https://docs.rs/ariadne
#[derive(Debug)]
pub struct LexError {
    /// The kind of error, for structured error handling.
    kind: LexErrorKind,
    /// A human-readable description of the error.
    message: String,
    /// The source location where the error occurred.
    span: Span,
}

impl LexError {
    /// Creates an "unexpected character" error.
    pub fn unexpected_character(span: Span) -> Self {
        LexError {
            kind: LexErrorKind::UnexpectedCharacter,
            message: "Unexpected character.".to_string(),
            span,
        }
    }

    /// Creates an "unterminated string" error.
    pub fn unterminated_string(span: Span) -> Self {
        LexError {
            kind: LexErrorKind::UnterminatedString,
            message: "Unterminated string.".to_string(),
            span,
        }
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> LexErrorKind {
        self.kind
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the source location where the error occurred.
    pub fn span(&self) -> Span {
        self.span
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.line, self.span.column, self.message
        )
    }
}

impl std::error::Error for LexError {}
