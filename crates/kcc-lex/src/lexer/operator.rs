//! Operator recognition.
//!
//! Operators are read greedily up to two characters, validated against the
//! closed set of the language, and recovered by pushing the second
//! character back when the pair is not a real operator. Two context rules
//! live here as well: `<` after the `include` keyword opens an
//! angle-bracket string, and a successful `(` enters a parenthesized
//! expression.

use crate::error::LexError;
use crate::token::TokenKind;
use crate::Token;

use super::LexProcess;

/// Operators that never fuse with a following character.
fn op_treated_as_one(op: u8) -> bool {
    matches!(op, b'(' | b',' | b'[' | b'.' | b'?' | b'*')
}

/// Characters that may appear as the second character of a two-character
/// operator.
fn is_single_operator(op: u8) -> bool {
    matches!(
        op,
        b'+' | b'-'
            | b'/'
            | b'*'
            | b'<'
            | b'>'
            | b'='
            | b'&'
            | b'|'
            | b'!'
            | b'~'
            | b'^'
            | b'%'
            | b'?'
            | b'.'
            | b','
            | b'('
            | b'['
    )
}

/// The closed set of operators the language recognizes.
fn op_valid(op: &str) -> bool {
    matches!(
        op,
        "+" | "-"
            | "*"
            | "/"
            | "%"
            | "!"
            | "^"
            | "&"
            | "|"
            | "~"
            | ">"
            | "<"
            | "="
            | "=="
            | "!="
            | "<="
            | ">="
            | "&&"
            | "||"
            | "++"
            | "--"
            | "+="
            | "-="
            | "*="
            | "/="
            | "%="
            | "<<"
            | ">>"
            | "->"
            | "."
            | ","
            | "?"
            | "..."
            | "("
            | "["
    )
}

impl LexProcess {
    /// Reads one operator, attempting a second character where the first
    /// allows it. An invalid pair is recovered by pushing every byte beyond
    /// the first back into the source; an operator that is still invalid
    /// after recovery is fatal.
    fn read_op(&mut self) -> Result<String, LexError> {
        let first = self.bump();
        let mut op = String::new();
        op.push(first as char);

        let mut attempted_multi = false;
        if !op_treated_as_one(first) {
            if let Some(second) = self.peek_char() {
                if is_single_operator(second) {
                    op.push(second as char);
                    self.bump();
                    attempted_multi = true;
                }
            }
        }

        if attempted_multi && !op_valid(&op) {
            for &byte in op.as_bytes()[1..].iter().rev() {
                self.push_char(byte);
            }
            op.truncate(1);
        }

        if !op_valid(&op) {
            return Err(LexError::InvalidOperator {
                op,
                pos: self.pos.clone(),
            });
        }
        Ok(op)
    }

    /// Recognizes an operator, or an angle-bracket string when `<` directly
    /// follows the `include` keyword.
    pub(super) fn make_operator_or_string(&mut self) -> Result<Token, LexError> {
        let leading = self.peek_char();

        if leading == Some(b'<') && self.tokens.last().is_some_and(|t| t.is_keyword("include")) {
            return Ok(self.make_string(b'<', b'>'));
        }

        let op = self.read_op()?;
        let token = self.make_token(TokenKind::Operator(op));

        if leading == Some(b'(') {
            self.new_expression();
        }
        Ok(token)
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

    fn op(text: &str) -> TokenKind {
        TokenKind::Operator(text.to_string())
    }

    #[test]
    fn test_single_operators() {
        for text in ["+", "-", "%", "=", "!", "~", "^", "<", ">", ",", ".", "?", "["] {
            assert_eq!(lex_kinds(text), vec![op(text)], "operator {:?}", text);
        }
    }

    #[test]
    fn test_two_char_operators() {
        for text in [
            "==", "!=", "<=", ">=", "&&", "||", "++", "--", "+=", "-=", "%=", "<<", ">>", "->",
        ] {
            assert_eq!(lex_kinds(text), vec![op(text)], "operator {:?}", text);
        }
    }

    #[test]
    fn test_star_never_fuses() {
        // '*' is treated as one, so "*=" lexes as two operators.
        assert_eq!(lex_kinds("*="), vec![op("*"), op("=")]);
    }

    #[test]
    fn test_include_angle_string() {
        let kinds = lex_kinds("include <stdio.h>");
        assert_eq!(
            kinds,
            vec![
                TokenKind::Keyword("include".to_string()),
                TokenKind::String("stdio.h".to_string()),
            ]
        );
    }

    #[test]
    fn test_less_than_without_include_is_operator() {
        let kinds = lex_kinds("a <b");
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier("a".to_string()),
                op("<"),
                TokenKind::Identifier("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_paren_enters_expression() {
        let tokens = build_for_string("(1)").expect("lex").into_tokens();
        assert_eq!(tokens[0].kind, op("("));
        assert!(tokens[0].between_brackets.is_none());
        assert!(tokens[1].between_brackets.is_some());
    }
}
