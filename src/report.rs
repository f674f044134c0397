//! The error reporter shared by the pipeline and the CLI.
//!
//! The reporter owns the two flags the driver turns into exit codes:
//! `had_error` (lexical or parse errors; evaluation is skipped) and
//! `had_runtime_error` (evaluation failed). It is a plain value passed by
//! reference through the run, not process-global state.
//!
//! Diagnostics go to stderr in two fixed shapes:
//!
//! ```text
//! [line 3] Error at ')': Expect expression.
//! Undefined variable 'foo'.
//! [line 7]
//! ```

use crate::interpreter::RuntimeError;

/// Collects error flags and emits plain diagnostic lines.
#[derive(Debug, Default)]
pub struct Reporter {
    /// Set by any lexical or parse diagnostic. Evaluation is skipped while
    /// this is set; the REPL clears it between lines.
    pub had_error: bool,
    /// Set by a runtime error.
    pub had_runtime_error: bool,
}

impl Reporter {
    /// Creates a reporter with both flags clear.
    pub fn new() -> Self {
        Reporter::default()
    }

    /// Emits `[line L] Error<location>: <message>` and sets `had_error`.
    ///
    /// `location` is either empty (lexical errors) or a suffix like
    /// ` at 'foo'` / ` at end` (parse errors).
    pub fn report(&mut self, line: usize, location: &str, message: &str) {
        eprintln!("[line {}] Error{}: {}", line, location, message);
        self.had_error = true;
    }

    /// Emits a diagnostic with no location suffix.
    pub fn error(&mut self, line: usize, message: &str) {
        self.report(line, "", message);
    }

    /// Emits `<message>` followed by `[line L]` and sets
    /// `had_runtime_error`.
    pub fn runtime_error(&mut self, error: &RuntimeError) {
        eprintln!("{}\n[line {}]", error.message(), error.span().line);
        self.had_runtime_error = true;
    }

    /// Clears the lex/parse flag so the next REPL line starts fresh.
    ///
    /// The runtime error flag is deliberately sticky; it only matters for
    /// the file-mode exit code.
    pub fn reset(&mut self) {
        self.had_error = false;
    }
}
