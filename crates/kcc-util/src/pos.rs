//! Source positions.
//!
//! A [`Position`] names a line/column pair inside an input, optionally
//! tagged with the input's filename. Positions advance byte by byte as the
//! lexer consumes input and are attached to every emitted token and
//! diagnostic.

use std::fmt;
use std::rc::Rc;

/// A line/column location inside a source input.
///
/// Lines and columns are 1-based. The column moves forward for every
/// consumed byte; consuming a newline then wraps to column 1 of the next
/// line, so the position a newline leaves behind is the *start* of the
/// following line.
///
/// The filename is shared (`Rc`) because one compilation clones the
/// position into every token it emits.
///
/// # Example
///
/// ```
/// use kcc_util::Position;
///
/// let mut pos = Position::start_of("main.c");
/// pos.advance(b'i');
/// pos.advance(b'\n');
/// assert_eq!((pos.line, pos.col), (2, 1));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub col: u32,
    /// Name of the input this position refers to, if it has one.
    pub filename: Option<Rc<str>>,
}

impl Position {
    /// Creates the starting position (line 1, column 1) of an unnamed
    /// input.
    pub fn start() -> Self {
        Self {
            line: 1,
            col: 1,
            filename: None,
        }
    }

    /// Creates the starting position of a named input.
    pub fn start_of(filename: &str) -> Self {
        Self {
            line: 1,
            col: 1,
            filename: Some(Rc::from(filename)),
        }
    }

    /// Advances past one consumed byte.
    ///
    /// The column always steps forward first; a newline then resets it to
    /// column 1 of the next line.
    pub fn advance(&mut self, byte: u8) {
        self.col += 1;
        if byte == b'\n' {
            self.line += 1;
            self.col = 1;
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}, col {} in file {}",
            self.line,
            self.col,
            self.filename.as_deref().unwrap_or("<input>")
        )
    }
}
