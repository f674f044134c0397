//! Declaration parsing: functions and variables.

use std::rc::Rc;

use super::Parser;
use super::error::{ParseError, ParseErrorKind};
use crate::ast::{FunDecl, Stmt, StmtKind};
use crate::token::TokenKind;

impl Parser {
    /// Parses a single declaration.
    ///
    /// # Grammar
    ///
    /// ```text
    /// declaration → funDecl | varDecl | statement
    /// ```
    pub(super) fn declaration(&mut self) -> Result<Stmt, ParseError> {
        if self.matches(&[TokenKind::Fun]) {
            return self.function_declaration();
        }
        if self.matches(&[TokenKind::Var]) {
            return self.var_declaration();
        }
        self.statement()
    }

    /// Parses a function declaration. The `fun` keyword has been consumed.
    ///
    /// # Grammar
    ///
    /// ```text
    /// funDecl → "fun" IDENT "(" params? ")" block
    /// params  → IDENT ( "," IDENT )*          (max 255)
    /// ```
    fn function_declaration(&mut self) -> Result<Stmt, ParseError> {
        let fun_keyword = self.previous().clone();
        let name = self.consume(TokenKind::Identifier, "Expect function name.")?;
        self.consume(TokenKind::LeftParen, "Expect '(' after function name.")?;

        let mut params = Vec::new();
        if !self.check(TokenKind::RightParen) {
            loop {
                if params.len() >= 255 {
                    let error = ParseError::new(
                        ParseErrorKind::TooManyParameters,
                        "Can't have more than 255 parameters.",
                        self.current(),
                    );
                    // Recorded without unwinding; the parameter still parses.
                    self.errors.push(error);
                }
                params.push(self.consume(TokenKind::Identifier, "Expect parameter name.")?);
                if !self.matches(&[TokenKind::Comma]) {
                    break;
                }
            }
        }

        self.consume(TokenKind::RightParen, "Expect ')' after parameters.")?;
        self.consume(TokenKind::LeftBrace, "Expect '{' before function body.")?;

        // The body is a fresh context: enclosing loops do not admit `break`
        // from inside the function, and `return` becomes legal.
        let enclosing_loop_depth = std::mem::replace(&mut self.loop_depth, 0);
        self.fun_depth += 1;
        let body = self.block_statements();
        self.fun_depth -= 1;
        self.loop_depth = enclosing_loop_depth;
        let (body, brace) = body?;

        let span = fun_keyword.span.to(brace.span);
        let declaration = FunDecl { name, params, body };
        Ok(Stmt::new(StmtKind::Function(Rc::new(declaration)), span))
    }

    /// Parses a variable declaration. The `var` keyword has been consumed.
    ///
    /// # Grammar
    ///
    /// ```text
    /// varDecl → "var" IDENT ( "=" expression )? ";"
    /// ```
    pub(super) fn var_declaration(&mut self) -> Result<Stmt, ParseError> {
        let var_keyword = self.previous().clone();
        let name = self.consume(TokenKind::Identifier, "Expect variable name.")?;

        let initializer = if self.matches(&[TokenKind::Equal]) {
            Some(self.expression()?)
        } else {
            None
        };

        let semicolon = self.consume(TokenKind::Semicolon, "Expect ';' after variable declaration.")?;
        let span = var_keyword.span.to(semicolon.span);
        Ok(Stmt::new(StmtKind::Var { name, initializer }, span))
    }
}
