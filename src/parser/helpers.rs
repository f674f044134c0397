//! Parser helper methods for token navigation, consumption, and
//! error synchronization.

use super::Parser;
use super::error::{ParseError, ParseErrorKind};
use crate::ast::Stmt;
use crate::token::{Token, TokenKind};

impl Parser {
    /// Returns a reference to the current token.
    ///
    /// This method is safe to call at any time - if the position is past
    /// the end, it returns the last token (which is always `Eof`).
    pub(super) fn current(&self) -> &Token {
        // new() ensures tokens is non-empty, and advance() never moves past
        // Eof, so the index is always valid.
        let idx = self.pos.min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Returns the most recently consumed token.
    ///
    /// Only meaningful after at least one token has been consumed.
    pub(super) fn previous(&self) -> &Token {
        &self.tokens[self.pos.saturating_sub(1)]
    }

    /// Returns `true` if the current token has the given kind.
    pub(super) fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    /// Returns `true` if the current token is `Eof`.
    pub(super) fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Advances to the next token.
    ///
    /// Does nothing if already at `Eof`.
    pub(super) fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    /// Consumes the current token if its kind is one of `kinds`.
    ///
    /// # Returns
    ///
    /// `true` if a token was consumed; the consumed token is then available
    /// through [`Parser::previous`].
    pub(super) fn matches(&mut self, kinds: &[TokenKind]) -> bool {
        for &kind in kinds {
            if self.check(kind) {
                self.advance();
                return true;
            }
        }
        false
    }

    /// Expects the current token to have the given kind and consumes it.
    ///
    /// # Returns
    ///
    /// * `Ok(Token)` - A clone of the consumed token
    /// * `Err(ParseError)` - An error carrying `message` at the current
    ///   token, which is left unconsumed
    pub(super) fn consume(&mut self, kind: TokenKind, message: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            self.advance();
            Ok(self.previous().clone())
        } else {
            Err(ParseError::new(
                ParseErrorKind::UnexpectedToken,
                message,
                self.current(),
            ))
        }
    }

    /// Parses one declaration, recovering from a parse error.
    ///
    /// On error the error is recorded, the parser synchronizes, and `None`
    /// is returned so the caller can continue with the next declaration.
    pub(super) fn declaration_or_recover(&mut self) -> Option<Stmt> {
        match self.declaration() {
            Ok(statement) => Some(statement),
            Err(error) => {
                self.errors.push(error);
                self.synchronize();
                None
            }
        }
    }

    /// Discards tokens until a likely statement boundary.
    ///
    /// Skips forward until it has just consumed a `;` or the next token
    /// begins a statement. This lets one run report several independent
    /// parse errors instead of a cascade from the first one.
    pub(super) fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon {
                return;
            }

            match self.current().kind {
                TokenKind::Class
                | TokenKind::Fun
                | TokenKind::Var
                | TokenKind::For
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Print
                | TokenKind::Return => return,
                _ => {}
            }

            self.advance();
        }
    }
}
