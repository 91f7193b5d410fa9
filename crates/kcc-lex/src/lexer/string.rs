//! String literal recognition.
//!
//! One reader serves both `"..."` literals and the `<...>` include form;
//! the delimiters are parameters. A backslash drops out of the text and the
//! byte after it is handled by the ordinary loop, so an escaped delimiter
//! still terminates the literal. Running out of input ends the literal
//! without error.

use kcc_util::ByteBuffer;

use crate::token::TokenKind;
use crate::Token;

use super::LexProcess;

impl LexProcess {
    /// Reads a literal delimited by `start` and `end`.
    pub(super) fn make_string(&mut self, start: u8, end: u8) -> Token {
        let opening = self.bump();
        debug_assert_eq!(opening, start);

        let mut buffer = ByteBuffer::new();
        loop {
            match self.next_char() {
                None => break,
                Some(c) if c == end => break,
                Some(b'\\') => continue,
                Some(c) => buffer.write(c),
            }
        }
        self.make_token(TokenKind::String(buffer.text().into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_for_string;

    fn lex_kinds(source: &str) -> Vec<TokenKind> {
        build_for_string(source)
            .expect("lex")
            .into_tokens()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_simple_string() {
        assert_eq!(
            lex_kinds("\"hi\""),
            vec![TokenKind::String("hi".to_string())]
        );
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(lex_kinds("\"\""), vec![TokenKind::String(String::new())]);
    }

    #[test]
    fn test_backslash_is_dropped() {
        // The escape introducer disappears; the following byte is kept.
        assert_eq!(
            lex_kinds("\"a\\nb\""),
            vec![TokenKind::String("anb".to_string())]
        );
    }

    #[test]
    fn test_escaped_delimiter_terminates() {
        // The loop sees the delimiter before the escape rule, so "\"" ends
        // the literal and the trailing text lexes on its own.
        let kinds = lex_kinds("\"a\\\" x\"");
        assert_eq!(kinds[0], TokenKind::String("a".to_string()));
    }

    #[test]
    fn test_unterminated_string_is_not_an_error() {
        assert_eq!(
            lex_kinds("\"abc"),
            vec![TokenKind::String("abc".to_string())]
        );
    }

    #[test]
    fn test_string_may_span_lines() {
        assert_eq!(
            lex_kinds("\"a\nb\""),
            vec![TokenKind::String("a\nb".to_string())]
        );
    }
}
