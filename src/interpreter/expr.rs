//! Expression evaluation.

use super::Interpreter;
use super::error::RuntimeError;
use super::value::Value;
use crate::ast::{Expr, ExprKind, LiteralValue};
use crate::token::{Token, TokenKind};

/// Requires both operands to be numbers, charging the error to `operator`.
fn number_operands(
    operator: &Token,
    left: &Value,
    right: &Value,
) -> Result<(f64, f64), RuntimeError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(RuntimeError::number_operands(operator)),
    }
}

impl Interpreter {
    /// Evaluates an expression to a value.
    ///
    /// Operands evaluate left to right; `and`/`or` and the ternary only
    /// evaluate the operands they need.
    pub(crate) fn evaluate(&mut self, expression: &Expr) -> Result<Value, RuntimeError> {
        match &expression.kind {
            ExprKind::Literal(value) => Ok(match value {
                LiteralValue::Number(n) => Value::Number(*n),
                LiteralValue::Str(s) => Value::Str(s.clone()),
                LiteralValue::Bool(b) => Value::Bool(*b),
                LiteralValue::Nil => Value::Nil,
            }),

            ExprKind::Grouping(inner) => self.evaluate(inner),

            ExprKind::Unary { operator, right } => {
                let right = self.evaluate(right)?;
                match operator.kind {
                    TokenKind::Bang => Ok(Value::Bool(!right.is_truthy())),
                    TokenKind::Minus => match right {
                        Value::Number(value) => Ok(Value::Number(-value)),
                        _ => Err(RuntimeError::number_operand(operator)),
                    },
                    // Unreachable.
                    _ => Ok(Value::Nil),
                }
            }

            ExprKind::Binary {
                left,
                operator,
                right,
            } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                binary(operator, left, right)
            }

            ExprKind::Logical {
                left,
                operator,
                right,
            } => {
                let left = self.evaluate(left)?;
                let short_circuits = if operator.kind == TokenKind::Or {
                    left.is_truthy()
                } else {
                    !left.is_truthy()
                };
                if short_circuits {
                    Ok(left)
                } else {
                    self.evaluate(right)
                }
            }

            ExprKind::Ternary {
                condition,
                left,
                right,
                ..
            } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.evaluate(left)
                } else {
                    self.evaluate(right)
                }
            }

            ExprKind::Variable { name } => self.environment.borrow().get(name),

            ExprKind::Assign { name, value } => {
                let value = self.evaluate(value)?;
                self.environment.borrow_mut().assign(name, value.clone())?;
                Ok(value)
            }

            ExprKind::Call {
                callee,
                paren,
                args,
            } => {
                let callee = self.evaluate(callee)?;

                let mut arguments = Vec::with_capacity(args.len());
                for arg in args {
                    arguments.push(self.evaluate(arg)?);
                }

                let Value::Callable(function) = callee else {
                    return Err(RuntimeError::not_callable(paren));
                };
                if arguments.len() != function.arity() {
                    return Err(RuntimeError::arity_mismatch(
                        paren,
                        function.arity(),
                        arguments.len(),
                    ));
                }

                function.call(self, arguments)
            }
        }
    }
}

/// Applies a binary operator to already-evaluated operands.
fn binary(operator: &Token, left: Value, right: Value) -> Result<Value, RuntimeError> {
    match operator.kind {
        TokenKind::Greater => {
            let (a, b) = number_operands(operator, &left, &right)?;
            Ok(Value::Bool(a > b))
        }
        TokenKind::GreaterEqual => {
            let (a, b) = number_operands(operator, &left, &right)?;
            Ok(Value::Bool(a >= b))
        }
        TokenKind::Less => {
            let (a, b) = number_operands(operator, &left, &right)?;
            Ok(Value::Bool(a < b))
        }
        TokenKind::LessEqual => {
            let (a, b) = number_operands(operator, &left, &right)?;
            Ok(Value::Bool(a <= b))
        }
        TokenKind::Minus => {
            let (a, b) = number_operands(operator, &left, &right)?;
            Ok(Value::Number(a - b))
        }
        TokenKind::Star => {
            let (a, b) = number_operands(operator, &left, &right)?;
            Ok(Value::Number(a * b))
        }
        // IEEE-754 division: dividing by zero yields an infinity or NaN.
        TokenKind::Slash => {
            let (a, b) = number_operands(operator, &left, &right)?;
            Ok(Value::Number(a / b))
        }
        TokenKind::BangEqual => Ok(Value::Bool(left != right)),
        TokenKind::EqualEqual => Ok(Value::Bool(left == right)),
        // `+` adds numbers and concatenates strings; a number mixed with a
        // string is stringified and concatenated.
        TokenKind::Plus => match (left, right) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
            (Value::Str(a), Value::Str(b)) => Ok(Value::Str(a + &b)),
            (Value::Str(a), Value::Number(b)) => Ok(Value::Str(format!("{}{}", a, Value::Number(b)))),
            (Value::Number(a), Value::Str(b)) => Ok(Value::Str(format!("{}{}", Value::Number(a), b))),
            _ => Err(RuntimeError::addition_operands(operator)),
        },
        // Unreachable.
        _ => Ok(Value::Nil),
    }
}
