//! Expression parsing.
//!
//! One method per precedence level, from `expression` down to `primary`.
//! Binary levels are left-associative loops; assignment and the ternary
//! are right-associative through recursion.

use super::Parser;
use super::error::{ParseError, ParseErrorKind};
use crate::ast::{Expr, ExprKind, LiteralValue};
use crate::token::{Literal, TokenKind};

impl Parser {
    /// Parses an expression.
    ///
    /// # Grammar
    ///
    /// ```text
    /// expression → ternary
    /// ```
    pub(super) fn expression(&mut self) -> Result<Expr, ParseError> {
        self.ternary()
    }

    /// Parses a ternary conditional.
    ///
    /// The branches recurse into `expression`, so `a ? b : c ? d : e`
    /// associates to the right: `a ? b : (c ? d : e)`.
    ///
    /// # Grammar
    ///
    /// ```text
    /// ternary → assignment ( "?" expression ":" expression )?
    /// ```
    fn ternary(&mut self) -> Result<Expr, ParseError> {
        let expr = self.assignment()?;

        if self.matches(&[TokenKind::Question]) {
            let question = self.previous().clone();
            let left = self.expression()?;
            let colon = self.consume(TokenKind::Colon, "Expect ':' in ternary expression.")?;
            let right = self.expression()?;

            let span = expr.span.to(right.span);
            return Ok(Expr::new(
                ExprKind::Ternary {
                    condition: Box::new(expr),
                    question,
                    left: Box::new(left),
                    colon,
                    right: Box::new(right),
                },
                span,
            ));
        }

        Ok(expr)
    }

    /// Parses an assignment.
    ///
    /// The left-hand side is parsed as an ordinary expression first; only
    /// when an `=` follows is it validated to be a variable reference. An
    /// invalid target is recorded without unwinding, so parsing continues
    /// with the rest of the statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// assignment → IDENT "=" assignment | logic_or
    /// ```
    fn assignment(&mut self) -> Result<Expr, ParseError> {
        let expr = self.or()?;

        if self.matches(&[TokenKind::Equal]) {
            let equals = self.previous().clone();
            let value = self.assignment()?;

            return match expr {
                Expr {
                    kind: ExprKind::Variable { name },
                    span: target_span,
                } => {
                    let span = target_span.to(value.span);
                    Ok(Expr::new(
                        ExprKind::Assign {
                            name,
                            value: Box::new(value),
                        },
                        span,
                    ))
                }
                other => {
                    self.errors.push(ParseError::new(
                        ParseErrorKind::InvalidAssignmentTarget,
                        "Invalid assignment target.",
                        &equals,
                    ));
                    Ok(other)
                }
            };
        }

        Ok(expr)
    }

    /// Parses a short-circuit `or` chain.
    fn or(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.and()?;

        while self.matches(&[TokenKind::Or]) {
            let operator = self.previous().clone();
            let right = self.and()?;
            let span = expr.span.to(right.span);
            expr = Expr::new(
                ExprKind::Logical {
                    left: Box::new(expr),
                    operator,
                    right: Box::new(right),
                },
                span,
            );
        }

        Ok(expr)
    }

    /// Parses a short-circuit `and` chain.
    fn and(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.equality()?;

        while self.matches(&[TokenKind::And]) {
            let operator = self.previous().clone();
            let right = self.equality()?;
            let span = expr.span.to(right.span);
            expr = Expr::new(
                ExprKind::Logical {
                    left: Box::new(expr),
                    operator,
                    right: Box::new(right),
                },
                span,
            );
        }

        Ok(expr)
    }

    /// Parses an equality chain: `!=`, `==`.
    fn equality(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.comparison()?;

        while self.matches(&[TokenKind::BangEqual, TokenKind::EqualEqual]) {
            let operator = self.previous().clone();
            let right = self.comparison()?;
            let span = expr.span.to(right.span);
            expr = Expr::new(
                ExprKind::Binary {
                    left: Box::new(expr),
                    operator,
                    right: Box::new(right),
                },
                span,
            );
        }

        Ok(expr)
    }

    /// Parses a comparison chain: `>`, `>=`, `<`, `<=`.
    fn comparison(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.term()?;

        while self.matches(&[
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
        ]) {
            let operator = self.previous().clone();
            let right = self.term()?;
            let span = expr.span.to(right.span);
            expr = Expr::new(
                ExprKind::Binary {
                    left: Box::new(expr),
                    operator,
                    right: Box::new(right),
                },
                span,
            );
        }

        Ok(expr)
    }

    /// Parses an additive chain: `-`, `+`.
    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.factor()?;

        while self.matches(&[TokenKind::Minus, TokenKind::Plus]) {
            let operator = self.previous().clone();
            let right = self.factor()?;
            let span = expr.span.to(right.span);
            expr = Expr::new(
                ExprKind::Binary {
                    left: Box::new(expr),
                    operator,
                    right: Box::new(right),
                },
                span,
            );
        }

        Ok(expr)
    }

    /// Parses a multiplicative chain: `/`, `*`.
    fn factor(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.unary()?;

        while self.matches(&[TokenKind::Slash, TokenKind::Star]) {
            let operator = self.previous().clone();
            let right = self.unary()?;
            let span = expr.span.to(right.span);
            expr = Expr::new(
                ExprKind::Binary {
                    left: Box::new(expr),
                    operator,
                    right: Box::new(right),
                },
                span,
            );
        }

        Ok(expr)
    }

    /// Parses a prefix operator application: `!`, `-`.
    fn unary(&mut self) -> Result<Expr, ParseError> {
        if self.matches(&[TokenKind::Bang, TokenKind::Minus]) {
            let operator = self.previous().clone();
            let right = self.unary()?;
            let span = operator.span.to(right.span);
            return Ok(Expr::new(
                ExprKind::Unary {
                    operator,
                    right: Box::new(right),
                },
                span,
            ));
        }

        self.call()
    }

    /// Parses a call chain: `f(1)(2)` applies the result of the first call.
    fn call(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.primary()?;

        while self.matches(&[TokenKind::LeftParen]) {
            expr = self.finish_call(expr)?;
        }

        Ok(expr)
    }

    /// Parses the argument list and closing paren of a call.
    ///
    /// # Grammar
    ///
    /// ```text
    /// arguments → expression ( "," expression )*          (max 255)
    /// ```
    fn finish_call(&mut self, callee: Expr) -> Result<Expr, ParseError> {
        let mut args = Vec::new();

        if !self.check(TokenKind::RightParen) {
            loop {
                if args.len() >= 255 {
                    let error = ParseError::new(
                        ParseErrorKind::TooManyArguments,
                        "Can't have more than 255 arguments.",
                        self.current(),
                    );
                    // Recorded without unwinding; the argument still parses.
                    self.errors.push(error);
                }
                args.push(self.expression()?);
                if !self.matches(&[TokenKind::Comma]) {
                    break;
                }
            }
        }

        let paren = self.consume(TokenKind::RightParen, "Expect ')' after arguments.")?;
        let span = callee.span.to(paren.span);
        Ok(Expr::new(
            ExprKind::Call {
                callee: Box::new(callee),
                paren,
                args,
            },
            span,
        ))
    }

    /// Parses a primary expression.
    ///
    /// # Grammar
    ///
    /// ```text
    /// primary → "true" | "false" | "nil" | NUMBER | STRING | IDENT
    ///         | "(" expression ")"
    /// ```
    fn primary(&mut self) -> Result<Expr, ParseError> {
        if self.matches(&[TokenKind::False]) {
            let token = self.previous();
            return Ok(Expr::new(
                ExprKind::Literal(LiteralValue::Bool(false)),
                token.span,
            ));
        }
        if self.matches(&[TokenKind::True]) {
            let token = self.previous();
            return Ok(Expr::new(
                ExprKind::Literal(LiteralValue::Bool(true)),
                token.span,
            ));
        }
        if self.matches(&[TokenKind::Nil]) {
            let token = self.previous();
            return Ok(Expr::new(ExprKind::Literal(LiteralValue::Nil), token.span));
        }

        if self.matches(&[TokenKind::Number, TokenKind::String]) {
            let token = self.previous().clone();
            let value = match token.literal {
                Some(Literal::Number(n)) => LiteralValue::Number(n),
                Some(Literal::Str(ref s)) => LiteralValue::Str(s.clone()),
                None => return Err(ParseError::internal_literal_inconsistency(&token)),
            };
            return Ok(Expr::new(ExprKind::Literal(value), token.span));
        }

        if self.matches(&[TokenKind::Identifier]) {
            let name = self.previous().clone();
            let span = name.span;
            return Ok(Expr::new(ExprKind::Variable { name }, span));
        }

        if self.matches(&[TokenKind::LeftParen]) {
            let open = self.previous().clone();
            let expr = self.expression()?;
            let close = self.consume(TokenKind::RightParen, "Expect ')' after expression.")?;
            return Ok(Expr::new(
                ExprKind::Grouping(Box::new(expr)),
                open.span.to(close.span),
            ));
        }

        Err(ParseError::new(
            ParseErrorKind::ExpectedExpression,
            "Expect expression.",
            self.current(),
        ))
    }
}
