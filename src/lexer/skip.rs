//! Comment skipping for the lexer.
//!
//! Lox has two comment forms: `//` line comments and `/* */` block comments.
//! Block comments nest to arbitrary depth, so the scanner tracks a depth
//! counter instead of searching for the next `*/`.

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Skips a line comment up to (but not including) the end of the line.
    ///
    /// The trailing newline is left for the main scan loop, which handles
    /// line counting uniformly.
    pub(super) fn skip_line_comment(&mut self) {
        while let Some(c) = self.current_char() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Skips a block comment, honoring nesting.
    ///
    /// Called after the opening `/*` has been consumed. Every nested `/*`
    /// increments the depth and every `*/` closes the innermost open
    /// comment. A block comment left open at the end of input is consumed
    /// silently.
    pub(super) fn skip_block_comment(&mut self) {
        let mut depth = 1usize;
        while depth > 0 {
            let Some(c) = self.current_char() else {
                return;
            };
            self.advance();
            match c {
                '*' if self.current_char() == Some('/') => {
                    self.advance();
                    depth -= 1;
                }
                '/' if self.current_char() == Some('*') => {
                    self.advance();
                    depth += 1;
                }
                _ => {}
            }
        }
    }
}
