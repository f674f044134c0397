//! Statement parsing, including the lowering of `for` loops.

use super::Parser;
use super::error::{ParseError, ParseErrorKind};
use crate::ast::{Expr, ExprKind, LiteralValue, Stmt, StmtKind};
use crate::token::{Token, TokenKind};

impl Parser {
    /// Parses a single statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// statement → exprStmt | printStmt | block | ifStmt
    ///           | whileStmt | forStmt | breakStmt | returnStmt
    /// ```
    pub(super) fn statement(&mut self) -> Result<Stmt, ParseError> {
        if self.matches(&[TokenKind::For]) {
            return self.for_statement();
        }
        if self.matches(&[TokenKind::If]) {
            return self.if_statement();
        }
        if self.matches(&[TokenKind::Print]) {
            return self.print_statement();
        }
        if self.matches(&[TokenKind::Return]) {
            return self.return_statement();
        }
        if self.matches(&[TokenKind::While]) {
            return self.while_statement();
        }
        if self.matches(&[TokenKind::Break]) {
            return self.break_statement();
        }
        if self.matches(&[TokenKind::LeftBrace]) {
            return self.block_statement();
        }
        self.expression_statement()
    }

    /// Parses a `for` statement by lowering it onto `while`.
    ///
    /// There is no `For` AST node. `for (init; cond; incr) body` becomes
    ///
    /// ```text
    /// { init  while (cond) { body  incr; } }
    /// ```
    ///
    /// with omitted parts elided and a missing condition defaulting to
    /// `true`.
    fn for_statement(&mut self) -> Result<Stmt, ParseError> {
        let for_keyword = self.previous().clone();
        self.consume(TokenKind::LeftParen, "Expect '(' after 'for'.")?;

        let initializer = if self.matches(&[TokenKind::Semicolon]) {
            None
        } else if self.matches(&[TokenKind::Var]) {
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition = if !self.check(TokenKind::Semicolon) {
            Some(self.expression()?)
        } else {
            None
        };
        self.consume(TokenKind::Semicolon, "Expect ';' after loop condition.")?;

        let increment = if !self.check(TokenKind::RightParen) {
            Some(self.expression()?)
        } else {
            None
        };
        let paren = self.consume(TokenKind::RightParen, "Expect ')' after for clauses.")?;

        self.loop_depth += 1;
        let body = self.statement();
        self.loop_depth -= 1;
        let mut body = body?;

        if let Some(increment) = increment {
            let increment_span = increment.span;
            let span = body.span.to(increment_span);
            body = Stmt::new(
                StmtKind::Block(vec![
                    body,
                    Stmt::new(StmtKind::Expr(increment), increment_span),
                ]),
                span,
            );
        }

        let condition = condition.unwrap_or_else(|| {
            Expr::new(ExprKind::Literal(LiteralValue::Bool(true)), paren.span)
        });
        let span = for_keyword.span.to(body.span);
        body = Stmt::new(
            StmtKind::While {
                condition,
                body: Box::new(body),
            },
            span,
        );

        if let Some(initializer) = initializer {
            let span = initializer.span.to(body.span);
            body = Stmt::new(StmtKind::Block(vec![initializer, body]), span);
        }

        Ok(body)
    }

    /// Parses an `if` statement. The `if` keyword has been consumed.
    fn if_statement(&mut self) -> Result<Stmt, ParseError> {
        let if_keyword = self.previous().clone();
        self.consume(TokenKind::LeftParen, "Expect '(' after 'if'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after if condition.")?;

        let then_branch = self.statement()?;
        let else_branch = if self.matches(&[TokenKind::Else]) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        let end_span = else_branch
            .as_deref()
            .map(|branch| branch.span)
            .unwrap_or(then_branch.span);
        let span = if_keyword.span.to(end_span);
        Ok(Stmt::new(
            StmtKind::If {
                condition,
                then_branch: Box::new(then_branch),
                else_branch,
            },
            span,
        ))
    }

    /// Parses a `while` statement. The `while` keyword has been consumed.
    fn while_statement(&mut self) -> Result<Stmt, ParseError> {
        let while_keyword = self.previous().clone();
        self.consume(TokenKind::LeftParen, "Expect '(' after 'while'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after condition.")?;

        self.loop_depth += 1;
        let body = self.statement();
        self.loop_depth -= 1;
        let body = body?;

        let span = while_keyword.span.to(body.span);
        Ok(Stmt::new(
            StmtKind::While {
                condition,
                body: Box::new(body),
            },
            span,
        ))
    }

    /// Parses a `break` statement. The `break` keyword has been consumed.
    ///
    /// `break` outside any loop is rejected here rather than at runtime.
    fn break_statement(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.previous().clone();
        if self.loop_depth == 0 {
            return Err(ParseError::new(
                ParseErrorKind::BreakOutsideLoop,
                "Must be inside a loop to use 'break'.",
                &keyword,
            ));
        }

        let semicolon = self.consume(TokenKind::Semicolon, "Expect ';' after 'break'.")?;
        let span = keyword.span.to(semicolon.span);
        Ok(Stmt::new(StmtKind::Break { keyword }, span))
    }

    /// Parses a `return` statement. The `return` keyword has been consumed.
    ///
    /// `return` outside any function body is rejected here rather than at
    /// runtime.
    fn return_statement(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.previous().clone();
        if self.fun_depth == 0 {
            return Err(ParseError::new(
                ParseErrorKind::ReturnOutsideFunction,
                "Can't return from top-level code.",
                &keyword,
            ));
        }

        let value = if !self.check(TokenKind::Semicolon) {
            Some(self.expression()?)
        } else {
            None
        };

        let semicolon = self.consume(TokenKind::Semicolon, "Expect ';' after return value.")?;
        let span = keyword.span.to(semicolon.span);
        Ok(Stmt::new(StmtKind::Return { keyword, value }, span))
    }

    /// Parses a `print` statement. The `print` keyword has been consumed.
    fn print_statement(&mut self) -> Result<Stmt, ParseError> {
        let print_keyword = self.previous().clone();
        let value = self.expression()?;
        let semicolon = self.consume(TokenKind::Semicolon, "Expect ';' after value.")?;
        let span = print_keyword.span.to(semicolon.span);
        Ok(Stmt::new(StmtKind::Print(value), span))
    }

    /// Parses a block statement. The opening `{` has been consumed.
    fn block_statement(&mut self) -> Result<Stmt, ParseError> {
        let brace = self.previous().clone();
        let (statements, close) = self.block_statements()?;
        Ok(Stmt::new(
            StmtKind::Block(statements),
            brace.span.to(close.span),
        ))
    }

    /// Parses declarations up to the closing `}` of a block.
    ///
    /// Shared by block statements and function bodies. Errors inside the
    /// block recover at declaration boundaries like at top level.
    ///
    /// # Returns
    ///
    /// The block's statements and the closing brace token.
    pub(super) fn block_statements(&mut self) -> Result<(Vec<Stmt>, Token), ParseError> {
        let mut statements = Vec::new();

        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            if let Some(statement) = self.declaration_or_recover() {
                statements.push(statement);
            }
        }

        let brace = self.consume(TokenKind::RightBrace, "Expect '}' after block.")?;
        Ok((statements, brace))
    }

    /// Parses an expression statement.
    fn expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let value = self.expression()?;
        let semicolon = self.consume(TokenKind::Semicolon, "Expect ';' after expression.")?;
        let span = value.span.to(semicolon.span);
        Ok(Stmt::new(StmtKind::Expr(value), span))
    }
}
