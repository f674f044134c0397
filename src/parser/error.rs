//! Parse error types.

use crate::token::{Span, Token, TokenKind};

/// The kind of parse error.
///
/// This enum allows error handling code and tests to match on error types
/// structurally rather than relying on string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The current token is not what the grammar requires here.
    UnexpectedToken,
    /// A position that requires an expression holds none.
    ExpectedExpression,
    /// The left-hand side of `=` is not assignable.
    InvalidAssignmentTarget,
    /// A function declaration exceeds the 255-parameter cap.
    TooManyParameters,
    /// A call expression exceeds the 255-argument cap.
    TooManyArguments,
    /// A `break` statement outside any loop.
    BreakOutsideLoop,
    /// A `return` statement outside any function body.
    ReturnOutsideFunction,
    /// Internal parser inconsistency (should never occur in normal operation).
    Internal,
}

/// An error that occurred during parsing.
///
/// `ParseError` contains a human-readable message, the offending token's
/// lexeme (for the ` at '…'` part of diagnostic lines), and the source
/// location where the error occurred.
///
/// # See Also
///
/// * [`crate::lexer::LexError`] - Similar error type for lexical errors
#[derive(Debug)]
pub struct ParseError {
    /// The kind of error, for structured error handling.
    kind: ParseErrorKind,
    /// A human-readable description of the error.
    message: String,
    /// The lexeme of the offending token, `None` when the error is at EOF.
    found: Option<String>,
    /// The source location where the error occurred.
    span: Span,
}

impl ParseError {
    /// Creates a new error at the given token.
    pub fn new(kind: ParseErrorKind, message: impl Into<String>, token: &Token) -> Self {
        let found = if token.kind == TokenKind::Eof {
            None
        } else {
            Some(token.lexeme.clone())
        };
        ParseError {
            kind,
            message: message.into(),
            found,
            span: token.span,
        }
    }

    /// Creates an error for a literal token missing its literal payload.
    ///
    /// The lexer always pairs `Number`/`String` tokens with a value, so
    /// hitting this indicates an interpreter bug, not a user error.
    pub fn internal_literal_inconsistency(token: &Token) -> Self {
        ParseError::new(
            ParseErrorKind::Internal,
            "Internal error: literal token without a value.",
            token,
        )
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> ParseErrorKind {
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

    /// Returns the location suffix for a diagnostic line.
    ///
    /// ` at 'lexeme'` for an error at a token, ` at end` for an error at
    /// the end of input.
    pub fn location(&self) -> String {
        match &self.found {
            Some(lexeme) => format!(" at '{}'", lexeme),
            None => " at end".to_string(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.line, self.span.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}
