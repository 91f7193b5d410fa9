//! Lexical errors.
//!
//! Every fatal condition the recognizer can hit has one variant here,
//! carrying the position at which it was raised. The recognizer performs no
//! local recovery beyond the one-byte operator push-back; anything else
//! unexpected aborts the whole lex run.

use kcc_util::Position;
use thiserror::Error;

/// A fatal lexical error.
///
/// The `Display` text is the bare message; the driver combines it with the
/// carried [`Position`] when rendering a diagnostic.
#[derive(Debug, Clone, Error)]
pub enum LexError {
    /// A leading byte outside the dispatch table.
    #[error("Unexpected token")]
    UnexpectedToken {
        /// Where the byte was peeked.
        pos: Position,
    },

    /// A character from the operator alphabet that forms no valid operator.
    #[error("The operator {op} is not valid")]
    InvalidOperator {
        /// The rejected operator text.
        op: String,
        /// Where the operator ended.
        pos: Position,
    },

    /// A `)` with no matching `(`.
    #[error("Unexpected ')'")]
    UnbalancedParen {
        /// Where the `)` was consumed.
        pos: Position,
    },

    /// A `/* ... */` comment still open at end of input.
    #[error("You did not close this multiline comment.")]
    UnterminatedComment {
        /// Where the input ran out.
        pos: Position,
    },

    /// A `'...'` literal missing its closing quote.
    #[error("You opened a quote, but did not close it.")]
    UnterminatedQuote {
        /// Where the closing quote was expected.
        pos: Position,
    },

    /// A digit other than `0` or `1` inside a `0b...` literal.
    #[error("Invalid binary string")]
    InvalidBinaryString {
        /// Where the digit run ended.
        pos: Position,
    },

    /// A numeric literal whose digits exceed 64 bits.
    #[error("Number literal is out of range")]
    NumberOutOfRange {
        /// Where the digit run ended.
        pos: Position,
    },
}

impl LexError {
    /// The position at which the error was raised.
    pub fn pos(&self) -> &Position {
        match self {
            LexError::UnexpectedToken { pos }
            | LexError::InvalidOperator { pos, .. }
            | LexError::UnbalancedParen { pos }
            | LexError::UnterminatedComment { pos }
            | LexError::UnterminatedQuote { pos }
            | LexError::InvalidBinaryString { pos }
            | LexError::NumberOutOfRange { pos } => pos,
        }
    }
}
