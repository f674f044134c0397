//! Token reading and recognition for the lexer.
//!
//! This module provides the main scan dispatch plus the readers for string
//! literals, number literals, and identifiers/keywords.

use super::Lexer;
use super::error::LexError;
use crate::token::{Literal, Span, Token, TokenKind};

/// Returns `true` for characters that may start an identifier.
fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns `true` for characters that may continue an identifier.
fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl<'a> Lexer<'a> {
    /// Scans a single token starting at the current position.
    ///
    /// Whitespace and comments produce no token; lexical errors are recorded
    /// in `self.errors` and scanning continues with the next character.
    pub(super) fn scan_token(&mut self) {
        let Some(c) = self.current_char() else {
            return;
        };
        self.advance();

        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            ':' => self.add_token(TokenKind::Colon),
            '?' => self.add_token(TokenKind::Question),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '!' => {
                let kind = if self.consume('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind);
            }
            '=' => {
                let kind = if self.consume('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.consume('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.consume('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }
            '/' => {
                if self.consume('/') {
                    self.skip_line_comment();
                } else if self.consume('*') {
                    self.skip_block_comment();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            // advance() already counted the newline.
            ' ' | '\r' | '\t' | '\n' => {}
            '"' => self.read_string(),
            _ if c.is_ascii_digit() => self.read_number(),
            _ if is_identifier_start(c) => self.read_identifier(),
            _ => {
                let span = Span::new(self.start, self.pos, self.start_line, self.start_column);
                self.errors.push(LexError::unexpected_character(span));
            }
        }
    }

    /// Emits a token for the lexeme between `start` and the current position.
    fn add_token(&mut self, kind: TokenKind) {
        self.add_literal_token(kind, None);
    }

    /// Emits a token carrying a literal payload.
    fn add_literal_token(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let lexeme = &self.source[self.start..self.pos];
        let span = Span::new(self.start, self.pos, self.start_line, self.start_column);
        self.tokens.push(Token::new(kind, lexeme, literal, span));
    }

    /// Reads a string literal.
    ///
    /// The opening quote has already been consumed. Strings may span
    /// multiple lines; embedded newlines count toward line tracking. If the
    /// input ends before the closing quote, an "Unterminated string." error
    /// is recorded.
    fn read_string(&mut self) {
        while let Some(c) = self.current_char() {
            if c == '"' {
                break;
            }
            self.advance();
        }

        if self.is_eof() {
            let span = Span::new(self.start, self.pos, self.line, self.start_column);
            self.errors.push(LexError::unterminated_string(span));
            return;
        }

        // The closing quote.
        self.advance();

        let value = self.source[self.start + 1..self.pos - 1].to_string();
        self.add_literal_token(TokenKind::String, Some(Literal::Str(value)));
    }

    /// Reads a number literal.
    ///
    /// The first digit has already been consumed. A fractional part is only
    /// consumed when the `.` is followed by a digit, so `1.` scans as the
    /// number `1` followed by a `.` token, and `.5` as `.` followed by `5`.
    fn read_number(&mut self) {
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.current_char() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            // Consume the ".".
            self.advance();
            while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let lexeme = &self.source[self.start..self.pos];
        match lexeme.parse::<f64>() {
            Ok(value) => self.add_literal_token(TokenKind::Number, Some(Literal::Number(value))),
            // A digit-only lexeme always parses.
            Err(_) => {
                let span = Span::new(self.start, self.pos, self.start_line, self.start_column);
                self.errors.push(LexError::unexpected_character(span));
            }
        }
    }

    /// Reads an identifier or keyword.
    ///
    /// The first character has already been consumed. The lexeme is looked
    /// up in the reserved-word table; a match produces the keyword kind.
    fn read_identifier(&mut self) {
        while self.current_char().is_some_and(is_identifier_continue) {
            self.advance();
        }

        let lexeme = &self.source[self.start..self.pos];
        let kind = TokenKind::keyword(lexeme).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }
}
