//! Colored terminal output utilities.

use console::{Style, Term};

/// Terminal output formatter.
///
/// Diagnostics go to stderr; command results (assembled dumps, permalinks,
/// recovered grammars) go to stdout so they can be piped.
pub(crate) struct Output {
    stdout: Term,
    stderr: Term,
    red: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            stdout: Term::stdout(),
            stderr: Term::stderr(),
            red: Style::new().red(),
        }
    }

    /// Print a command result to stdout.
    pub(crate) fn result(&self, msg: &str) {
        let _ = self.stdout.write_line(msg);
    }

    /// Print an info message to stderr.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.stderr.write_line(msg);
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.stderr.write_line(&self.red.apply_to(msg).to_string());
    }
}
