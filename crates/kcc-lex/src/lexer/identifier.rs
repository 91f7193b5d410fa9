//! Identifier and keyword recognition.

use kcc_util::ByteBuffer;

use crate::token::{is_reserved_word, TokenKind};
use crate::Token;

use super::LexProcess;

impl LexProcess {
    /// Reads a `[A-Za-z0-9_]` run and classifies it against the reserved
    /// word list.
    pub(super) fn make_identifier_or_keyword(&mut self) -> Token {
        let mut buffer = ByteBuffer::new();
        while let Some(c) = self.peek_char() {
            if !(c.is_ascii_alphanumeric() || c == b'_') {
                break;
            }
            buffer.write(c);
            self.bump();
        }

        let text = buffer.text().into_owned();
        let kind = if is_reserved_word(&text) {
            TokenKind::Keyword(text)
        } else {
            TokenKind::Identifier(text)
        };
        self.make_token(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_for_string;

    fn lex_one(source: &str) -> TokenKind {
        let tokens = build_for_string(source).expect("lex").into_tokens();
        assert_eq!(tokens.len(), 1);
        tokens.into_iter().next().unwrap().kind
    }

    #[test]
    fn test_identifier() {
        assert_eq!(lex_one("foo"), TokenKind::Identifier("foo".to_string()));
        assert_eq!(
            lex_one("_tmp_1"),
            TokenKind::Identifier("_tmp_1".to_string())
        );
    }

    #[test]
    fn test_keyword() {
        assert_eq!(lex_one("int"), TokenKind::Keyword("int".to_string()));
        assert_eq!(lex_one("while"), TokenKind::Keyword("while".to_string()));
        assert_eq!(lex_one("sizeof"), TokenKind::Keyword("sizeof".to_string()));
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(lex_one("inty"), TokenKind::Identifier("inty".to_string()));
        assert_eq!(lex_one("if0"), TokenKind::Identifier("if0".to_string()));
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(lex_one("INT"), TokenKind::Identifier("INT".to_string()));
    }
}
