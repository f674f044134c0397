//! Statement execution.

use std::cell::RefCell;
use std::rc::Rc;

use super::Interpreter;
use super::callable::{Callable, LoxFunction};
use super::environment::Environment;
use super::error::Unwind;
use super::value::Value;
use crate::ast::{Stmt, StmtKind};

impl Interpreter {
    /// Executes a single statement.
    pub(crate) fn execute(&mut self, statement: &Stmt) -> Result<(), Unwind> {
        match &statement.kind {
            StmtKind::Expr(expression) => {
                self.evaluate(expression)?;
                Ok(())
            }

            StmtKind::Print(expression) => {
                let value = self.evaluate(expression)?;
                println!("{}", value);
                Ok(())
            }

            StmtKind::Var { name, initializer } => {
                let value = match initializer {
                    Some(expression) => Some(self.evaluate(expression)?),
                    None => None,
                };
                self.environment
                    .borrow_mut()
                    .define(name.lexeme.clone(), value);
                Ok(())
            }

            StmtKind::Block(statements) => {
                let environment = Environment::with_enclosing(Rc::clone(&self.environment));
                self.execute_block(statements, Rc::new(RefCell::new(environment)))
            }

            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(())
                }
            }

            StmtKind::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    match self.execute(body) {
                        Ok(()) => {}
                        Err(Unwind::Break) => break,
                        Err(unwind) => return Err(unwind),
                    }
                }
                Ok(())
            }

            StmtKind::Break { .. } => Err(Unwind::Break),

            StmtKind::Return { value, .. } => {
                let value = match value {
                    Some(expression) => self.evaluate(expression)?,
                    None => Value::Nil,
                };
                Err(Unwind::Return(value))
            }

            StmtKind::Function(declaration) => {
                // The function captures the environment in force right
                // here, at its declaration.
                let function =
                    LoxFunction::new(Rc::clone(declaration), Rc::clone(&self.environment));
                let value = Value::Callable(Callable::Function(Rc::new(function)));
                self.environment
                    .borrow_mut()
                    .define(declaration.name.lexeme.clone(), Some(value));
                Ok(())
            }
        }
    }
}
