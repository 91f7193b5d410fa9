//! kcc-lex - Lexical analysis for the kcc compiler.
//!
//! The lexer turns a UTF-8 byte source into an ordered sequence of
//! [`Token`]s, each annotated with its source [`Position`], a flag for the
//! whitespace that followed it, and (inside parentheses) the text captured
//! since the outermost `(` was opened. It is the only implemented phase of
//! the compiler so far; the driver stores its output for the parser to
//! come.
//!
//! Input arrives through the three-operation [`CharSource`] contract, so
//! the same recognizer serves both files ([`FileSource`]) and synthetic
//! in-memory inputs ([`StringSource`] via [`build_for_string`]).
//!
//! # Example
//!
//! ```
//! use kcc_lex::{build_for_string, TokenKind};
//!
//! let process = build_for_string("int x = 10;").unwrap();
//! assert_eq!(process.tokens().len(), 5);
//! assert_eq!(process.tokens()[0].kind, TokenKind::Keyword("int".into()));
//! ```
//!
//! [`Position`]: kcc_util::Position

pub mod error;
pub mod lexer;
pub mod source;
pub mod token;

pub use error::LexError;
pub use lexer::LexProcess;
pub use source::{CharSource, FileSource, StringSource};
pub use token::{is_reserved_word, NumberKind, Token, TokenKind};

use kcc_util::ByteBuffer;

/// Lexes a synthetic in-memory string through a [`StringSource`].
///
/// Returns the finished process, whose token vector the caller can take
/// over. The string source's push-back appends to the buffer, so inputs
/// that need push-back recovery (bare `/`, invalid operator pairs) are only
/// representable over a file-backed source.
pub fn build_for_string(text: &str) -> Result<LexProcess, LexError> {
    let mut buffer = ByteBuffer::new();
    buffer.push_str(text);
    let mut process = LexProcess::new(Box::new(StringSource::new(buffer)), None);
    process.lex()?;
    Ok(process)
}
