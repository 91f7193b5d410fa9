//! Comment recognition.
//!
//! A peeked `/` lands here first. `//` collects to the end of the line and
//! `/*` to the closing `*/`; anything else pushes the `/` back and defers
//! to the operator path. Comment text keeps the quirks of the language:
//! a one-line comment's text starts at the second `/`, and a `*` inside a
//! multi-line comment that is not followed by `/` is consumed and dropped.

use kcc_util::ByteBuffer;

use crate::error::LexError;
use crate::token::TokenKind;
use crate::Token;

use super::LexProcess;

impl LexProcess {
    /// Dispatch entry for a peeked `/`.
    pub(super) fn handle_comment(&mut self) -> Result<Token, LexError> {
        self.bump();
        match self.peek_char() {
            Some(b'/') => Ok(self.make_one_line_comment()),
            Some(b'*') => {
                self.bump();
                self.make_multiline_comment()
            }
            _ => {
                self.push_char(b'/');
                self.make_operator_or_string()
            }
        }
    }

    fn make_one_line_comment(&mut self) -> Token {
        let mut buffer = ByteBuffer::new();
        while let Some(c) = self.peek_char() {
            if c == b'\n' {
                break;
            }
            buffer.write(c);
            self.bump();
        }
        self.make_token(TokenKind::Comment(buffer.text().into_owned()))
    }

    fn make_multiline_comment(&mut self) -> Result<Token, LexError> {
        let mut buffer = ByteBuffer::new();
        loop {
            while let Some(c) = self.peek_char() {
                if c == b'*' {
                    break;
                }
                buffer.write(c);
                self.bump();
            }
            match self.peek_char() {
                None => {
                    return Err(LexError::UnterminatedComment {
                        pos: self.pos.clone(),
                    })
                }
                Some(_) => {
                    self.bump();
                    if self.peek_char() == Some(b'/') {
                        self.bump();
                        break;
                    }
                }
            }
        }
        Ok(self.make_token(TokenKind::Comment(buffer.text().into_owned())))
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
    fn test_one_line_comment_runs_to_newline() {
        let kinds = lex_kinds("// hi\nx");
        assert_eq!(
            kinds,
            vec![
                // The text begins at the second '/'.
                TokenKind::Comment("/ hi".to_string()),
                TokenKind::Newline,
                TokenKind::Identifier("x".to_string()),
            ]
        );
    }

    #[test]
    fn test_one_line_comment_at_eof() {
        assert_eq!(
            lex_kinds("//done"),
            vec![TokenKind::Comment("/done".to_string())]
        );
    }

    #[test]
    fn test_multiline_comment() {
        assert_eq!(
            lex_kinds("/* x */"),
            vec![TokenKind::Comment(" x ".to_string())]
        );
    }

    #[test]
    fn test_multiline_comment_spans_lines() {
        assert_eq!(
            lex_kinds("/*a\nb*/"),
            vec![TokenKind::Comment("a\nb".to_string())]
        );
    }

    #[test]
    fn test_inner_star_is_dropped() {
        assert_eq!(
            lex_kinds("/*a*b*/"),
            vec![TokenKind::Comment("ab".to_string())]
        );
    }

    #[test]
    fn test_unterminated_multiline_comment() {
        let err = build_for_string("/* open").unwrap_err();
        assert!(matches!(err, LexError::UnterminatedComment { .. }));
    }
}
