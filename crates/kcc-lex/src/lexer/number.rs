//! Number literal recognition.
//!
//! Covers decimal runs, the hexadecimal and binary reinterpretation of a
//! just-emitted `0`, character literals (which are numbers carrying the
//! literal byte), and the one-character type suffixes.

use crate::error::LexError;
use crate::token::{NumberKind, TokenKind};
use crate::Token;

use super::LexProcess;

/// Maps a peeked suffix byte to the number interpretation it selects.
fn number_kind_for_suffix(byte: Option<u8>) -> NumberKind {
    match byte {
        Some(b'L') | Some(b'l') => NumberKind::Long,
        Some(b'f') => NumberKind::Float,
        Some(b'd') => NumberKind::Double,
        _ => NumberKind::Normal,
    }
}

/// Translates the byte after a backslash in a character literal. Unknown
/// escapes decode to 0, matching the observed behavior of the language.
fn escaped_char(byte: u8) -> u8 {
    match byte {
        b'n' => b'\n',
        b't' => b'\t',
        b'r' => b'\r',
        b'\\' => b'\\',
        b'\'' => b'\'',
        _ => 0,
    }
}

impl LexProcess {
    /// Reads a run of decimal digits, leaving the first non-digit in the
    /// source.
    fn read_digit_run(&mut self) -> String {
        let mut digits = String::new();
        while let Some(c) = self.peek_char() {
            if !c.is_ascii_digit() {
                break;
            }
            digits.push(c as char);
            self.bump();
        }
        digits
    }

    /// Reads a run of hexadecimal digits, either case.
    fn read_hex_digit_run(&mut self) -> String {
        let mut digits = String::new();
        while let Some(c) = self.peek_char() {
            if !c.is_ascii_hexdigit() {
                break;
            }
            digits.push(c as char);
            self.bump();
        }
        digits
    }

    /// Parses a digit run in the given base; an empty run is 0.
    fn parse_digits(&self, digits: &str, base: u32) -> Result<u64, LexError> {
        if digits.is_empty() {
            return Ok(0);
        }
        u64::from_str_radix(digits, base).map_err(|_| LexError::NumberOutOfRange {
            pos: self.pos.clone(),
        })
    }

    /// Wraps a parsed value into a `Number` token, consuming a type suffix
    /// if one follows.
    fn make_number_for_value(&mut self, value: u64) -> Token {
        let kind = number_kind_for_suffix(self.peek_char());
        if kind != NumberKind::Normal {
            self.bump();
        }
        self.make_token(TokenKind::Number { value, kind })
    }

    /// Recognizes a decimal literal.
    pub(super) fn make_number(&mut self) -> Result<Token, LexError> {
        let digits = self.read_digit_run();
        let value = self.parse_digits(&digits, 10)?;
        Ok(self.make_number_for_value(value))
    }

    /// Recognizes `b`/`x` at the start of a word. When the previous emitted
    /// token is a `Number` with value 0, that token is popped and replaced
    /// by the hexadecimal or binary literal it introduced; otherwise this
    /// is an ordinary identifier or keyword.
    pub(super) fn make_special_number(&mut self) -> Result<Token, LexError> {
        let after_zero = matches!(
            self.tokens.last().map(|t| &t.kind),
            Some(TokenKind::Number { value: 0, .. })
        );
        if !after_zero {
            return Ok(self.make_identifier_or_keyword());
        }

        match self.peek_char() {
            Some(b'x') => {
                self.tokens.pop();
                self.make_hexadecimal_number()
            }
            Some(b'b') => {
                self.tokens.pop();
                self.make_binary_number()
            }
            _ => Ok(self.make_identifier_or_keyword()),
        }
    }

    fn make_hexadecimal_number(&mut self) -> Result<Token, LexError> {
        self.bump(); // the 'x'
        let digits = self.read_hex_digit_run();
        let value = self.parse_digits(&digits, 16)?;
        Ok(self.make_number_for_value(value))
    }

    fn make_binary_number(&mut self) -> Result<Token, LexError> {
        self.bump(); // the 'b'
        let digits = self.read_digit_run();
        if digits.bytes().any(|b| b != b'0' && b != b'1') {
            return Err(LexError::InvalidBinaryString {
                pos: self.pos.clone(),
            });
        }
        let value = self.parse_digits(&digits, 2)?;
        Ok(self.make_number_for_value(value))
    }

    /// Recognizes a `'...'` character literal, emitted as a `Number` whose
    /// value is the literal byte.
    pub(super) fn make_quote(&mut self) -> Result<Token, LexError> {
        let opening = self.bump();
        debug_assert_eq!(opening, b'\'');

        let mut value = self.bump();
        if value == b'\\' {
            let escape = self.bump();
            value = escaped_char(escape);
        }
        if self.next_char() != Some(b'\'') {
            return Err(LexError::UnterminatedQuote {
                pos: self.pos.clone(),
            });
        }

        Ok(self.make_token(TokenKind::Number {
            value: value as u64,
            kind: NumberKind::Normal,
        }))
    }
}
