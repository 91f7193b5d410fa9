//! Error and warning reporting.
//!
//! The compiler emits position-tagged single-line diagnostics. A
//! [`Handler`] renders each one to standard error as it is reported and
//! keeps it for later queries, so callers can ask whether a compilation
//! produced errors without re-parsing its output.

use std::cell::RefCell;
use std::fmt;

use crate::Position;

/// Diagnostic severity.
///
/// Errors are fatal to the compilation; warnings never alter control flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// A condition that aborts the compilation.
    Error,
    /// Informational only.
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A single position-tagged message.
///
/// Rendering produces `<message> on line <L>, col <C> in file <F>`.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Severity of the message.
    pub level: Level,
    /// The message text, without trailing punctuation or position.
    pub message: String,
    /// Where in the input the condition was detected.
    pub pos: Position,
}

impl Diagnostic {
    /// Creates a diagnostic of the given level.
    pub fn new(level: Level, message: impl Into<String>, pos: Position) -> Self {
        Self {
            level,
            message: message.into(),
            pos,
        }
    }

    /// Creates an error diagnostic.
    pub fn error(message: impl Into<String>, pos: Position) -> Self {
        Self::new(Level::Error, message, pos)
    }

    /// Creates a warning diagnostic.
    pub fn warning(message: impl Into<String>, pos: Position) -> Self {
        Self::new(Level::Warning, message, pos)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.message, self.pos)
    }
}

/// Collects diagnostics and writes them to standard error.
///
/// # Example
///
/// ```
/// use kcc_util::{Handler, Position};
///
/// let handler = Handler::new();
/// handler.warning("unused include", Position::start_of("main.c"));
/// assert!(!handler.has_errors());
/// assert_eq!(handler.warning_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    emitted: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Creates a handler with nothing reported yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders a diagnostic to standard error and records it.
    pub fn report(&self, diagnostic: Diagnostic) {
        eprintln!("{}", diagnostic);
        self.emitted.borrow_mut().push(diagnostic);
    }

    /// Reports an error.
    pub fn error(&self, message: impl Into<String>, pos: Position) {
        self.report(Diagnostic::error(message, pos));
    }

    /// Reports a warning.
    pub fn warning(&self, message: impl Into<String>, pos: Position) {
        self.report(Diagnostic::warning(message, pos));
    }

    /// True if any error has been reported.
    pub fn has_errors(&self) -> bool {
        self.emitted
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Number of errors reported so far.
    pub fn error_count(&self) -> usize {
        self.emitted
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Number of warnings reported so far.
    pub fn warning_count(&self) -> usize {
        self.emitted
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Warning)
            .count()
    }

    /// Everything reported so far, in order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.emitted.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos_at(line: u32, col: u32) -> Position {
        let mut pos = Position::start_of("./test.c");
        pos.line = line;
        pos.col = col;
        pos
    }

    #[test]
    fn test_level_display() {
        assert_eq!(format!("{}", Level::Error), "error");
        assert_eq!(format!("{}", Level::Warning), "warning");
    }

    #[test]
    fn test_diagnostic_format() {
        let diag = Diagnostic::error("Unexpected token", pos_at(3, 7));
        assert_eq!(
            format!("{}", diag),
            "Unexpected token on line 3, col 7 in file ./test.c"
        );
    }

    #[test]
    fn test_handler_counts() {
        let handler = Handler::new();
        assert!(!handler.has_errors());

        handler.warning("w1", pos_at(1, 1));
        assert!(!handler.has_errors());
        assert_eq!(handler.warning_count(), 1);

        handler.error("e1", pos_at(2, 5));
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.warning_count(), 1);
    }

    #[test]
    fn test_handler_keeps_order() {
        let handler = Handler::new();
        handler.error("first", pos_at(1, 1));
        handler.warning("second", pos_at(1, 2));

        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].message, "first");
        assert_eq!(diags[1].message, "second");
    }
}
