//! Tree-walking evaluator for the Lox language.
//!
//! This module provides the [`Interpreter`] struct which executes a parsed
//! program against a chain of lexical environments.
//!
//! # Overview
//!
//! The interpreter walks the AST directly: statement execution recurses
//! through [`Stmt`] nodes and expression evaluation through
//! [`Expr`](crate::ast::Expr) nodes. Three things unwind out of that
//! recursion: `break` (caught by the nearest loop), `return` (caught by the
//! nearest call), and runtime errors (surfaced from [`Interpreter::interpret`]).
//!
//! Scoping is lexical. Entering a block pushes a fresh [`Environment`]
//! enclosing the current one; invoking a function pushes an environment
//! enclosing the function's *closure* (the environment captured at its
//! declaration), not the caller's. Environments are reference-counted so a
//! closure keeps its scope alive after the block returns.
//!
//! # Module Structure
//!
//! - [`value`] - Runtime values, truthiness, equality, stringification
//! - [`environment`] - The scope chain
//! - [`callable`] - User functions and the native `clock`
//! - [`error`] - Runtime errors and unwinding signals
//! - `expr` - Expression evaluation
//! - `stmt` - Statement execution
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the AST this module consumes

mod callable;
mod environment;
mod error;
mod expr;
mod stmt;
mod value;

#[cfg(test)]
mod tests;

pub use callable::{Callable, LoxFunction, NativeFunction};
pub use environment::Environment;
pub use error::{RuntimeError, RuntimeErrorKind};
pub use value::Value;

use std::cell::RefCell;
use std::rc::Rc;

use crate::ast::{Stmt, StmtKind};
use error::Unwind;

/// The Lox evaluator.
///
/// One interpreter instance owns the global environment and runs one
/// program (or, in the REPL, a sequence of lines sharing the globals).
#[derive(Debug)]
pub struct Interpreter {
    /// The global environment, pre-populated with the native functions.
    globals: Rc<RefCell<Environment>>,
    /// The environment of the innermost scope currently executing.
    environment: Rc<RefCell<Environment>>,
}

impl Interpreter {
    /// Creates an interpreter with `clock` bound in the globals.
    pub fn new() -> Self {
        let mut globals = Environment::new();
        let clock = callable::clock();
        globals.define(
            clock.name,
            Some(Value::Callable(Callable::Native(Rc::new(clock)))),
        );

        let globals = Rc::new(RefCell::new(globals));
        Interpreter {
            environment: Rc::clone(&globals),
            globals,
        }
    }

    /// Returns the global environment.
    pub fn globals(&self) -> Rc<RefCell<Environment>> {
        Rc::clone(&self.globals)
    }

    /// Executes statements in order.
    ///
    /// Stops at the first runtime error; the remaining statements are
    /// abandoned. The caller forwards the error to the reporter.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        for statement in statements {
            self.execute(statement)
                .map_err(Unwind::into_runtime_error)?;
        }
        Ok(())
    }

    /// Executes statements like [`Interpreter::interpret`], but echoes the
    /// value of every expression statement.
    ///
    /// An expression statement is evaluated once and its stringified value
    /// printed, so `1 + 2` at the prompt answers `3` without needing
    /// `print`.
    pub fn repl_interpret(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        for statement in statements {
            if let StmtKind::Expr(expression) = &statement.kind {
                let value = self.evaluate(expression)?;
                println!("{}", value);
            } else {
                self.execute(statement)
                    .map_err(Unwind::into_runtime_error)?;
            }
        }
        Ok(())
    }

    /// Executes statements in `environment`, restoring the previous
    /// environment afterwards on every exit path, unwinds included.
    pub(crate) fn execute_block(
        &mut self,
        statements: &[Stmt],
        environment: Rc<RefCell<Environment>>,
    ) -> Result<(), Unwind> {
        let previous = std::mem::replace(&mut self.environment, environment);
        let result = statements
            .iter()
            .try_for_each(|statement| self.execute(statement));
        self.environment = previous;
        result
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}
