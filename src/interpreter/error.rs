//! Runtime error and unwinding types.
//!
//! Runtime errors and the two non-error exits (`break`, `return`) share the
//! unwinding mechanism at the statement level, but they are kept apart:
//! expression evaluation can only fail with a [`RuntimeError`], while
//! statement execution unwinds with an [`Unwind`] that the nearest loop or
//! call boundary inspects.

use super::value::Value;
use crate::token::{Span, Token};

/// The kind of runtime error.
///
/// This enum allows error handling code and tests to match on error types
/// structurally rather than relying on string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    /// A variable reference that no enclosing scope defines.
    UndefinedVariable,
    /// A read of a declared variable before its first assignment.
    UninitializedVariable,
    /// An operator applied to operands of the wrong type.
    OperandType,
    /// A call whose callee is not a function.
    NotCallable,
    /// A call with the wrong number of arguments.
    Arity,
}

/// An error that occurred during evaluation.
///
/// Contains a human-readable message and the source location of the token
/// the error is charged to (typically the operator or the closing paren of
/// a call), from which diagnostics recover the line number.
#[derive(Debug)]
pub struct RuntimeError {
    /// The kind of error, for structured error handling.
    kind: RuntimeErrorKind,
    /// A human-readable description of the error.
    message: String,
    /// The source location of the offending token.
    span: Span,
}

impl RuntimeError {
    /// Creates a new error charged to the given token.
    pub fn new(kind: RuntimeErrorKind, message: impl Into<String>, token: &Token) -> Self {
        RuntimeError {
            kind,
            message: message.into(),
            span: token.span,
        }
    }

    /// Creates an "undefined variable" error for a name token.
    pub fn undefined_variable(name: &Token) -> Self {
        RuntimeError::new(
            RuntimeErrorKind::UndefinedVariable,
            format!("Undefined variable '{}'.", name.lexeme),
            name,
        )
    }

    /// Creates an "uninitialized variable" error for a name token.
    pub fn uninitialized_variable(name: &Token) -> Self {
        RuntimeError::new(
            RuntimeErrorKind::UninitializedVariable,
            format!("Uninitialized variable '{}'.", name.lexeme),
            name,
        )
    }

    /// Creates the unary "Operand must be a number." error.
    pub fn number_operand(operator: &Token) -> Self {
        RuntimeError::new(
            RuntimeErrorKind::OperandType,
            "Operand must be a number.",
            operator,
        )
    }

    /// Creates the binary "Operands must be numbers." error.
    pub fn number_operands(operator: &Token) -> Self {
        RuntimeError::new(
            RuntimeErrorKind::OperandType,
            "Operands must be numbers.",
            operator,
        )
    }

    /// Creates the `+`-specific operand error.
    pub fn addition_operands(operator: &Token) -> Self {
        RuntimeError::new(
            RuntimeErrorKind::OperandType,
            "Operands must be two numbers or two strings.",
            operator,
        )
    }

    /// Creates the error for calling a non-callable value.
    pub fn not_callable(paren: &Token) -> Self {
        RuntimeError::new(
            RuntimeErrorKind::NotCallable,
            "Can only call functions and classes.",
            paren,
        )
    }

    /// Creates an arity mismatch error at a call site.
    pub fn arity_mismatch(paren: &Token, expected: usize, got: usize) -> Self {
        RuntimeError::new(
            RuntimeErrorKind::Arity,
            format!("Expected {} arguments but got {}.", expected, got),
            paren,
        )
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> RuntimeErrorKind {
        self.kind
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the source location the error is charged to.
    pub fn span(&self) -> Span {
        self.span
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.line, self.span.column, self.message
        )
    }
}

impl std::error::Error for RuntimeError {}

/// A non-local exit unwinding out of statement execution.
#[derive(Debug)]
pub(crate) enum Unwind {
    /// `break`, caught by the nearest enclosing loop.
    Break,
    /// `return`, caught by the nearest enclosing call.
    Return(Value),
    /// A runtime error, surfaced from `interpret`.
    Error(RuntimeError),
}

impl Unwind {
    /// Extracts the runtime error from an unwind that reached top level.
    ///
    /// # Panics
    ///
    /// Panics on `Break`/`Return`: the parser rejects `break` outside loops
    /// and `return` outside functions, so neither can escape to top level.
    pub(crate) fn into_runtime_error(self) -> RuntimeError {
        match self {
            Unwind::Error(error) => error,
            Unwind::Break | Unwind::Return(_) => {
                unreachable!("loop and function unwinds are caught before top level")
            }
        }
    }
}

impl From<RuntimeError> for Unwind {
    fn from(error: RuntimeError) -> Self {
        Unwind::Error(error)
    }
}
