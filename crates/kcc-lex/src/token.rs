//! The token model.
//!
//! Tokens are value types: each one owns its payload string and carries the
//! position it was emitted at, a flag for trailing whitespace, and an
//! optional handle to the parenthesis-capture buffer.

use std::cell::RefCell;
use std::rc::Rc;

use kcc_util::{ByteBuffer, Position};

/// Interpretation of a numeric literal, chosen by its one-character suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberKind {
    /// No suffix.
    Normal,
    /// `L` or `l`.
    Long,
    /// `f`.
    Float,
    /// `d`.
    Double,
}

/// The payload-carrying kind of a token.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// A name that is not a reserved word.
    Identifier(String),
    /// A reserved word.
    Keyword(String),
    /// An operator from the closed valid set.
    Operator(String),
    /// A single structural byte (`{`, `;`, `:`, `]`, `}`, `)`, `#`, `\`).
    Symbol(u8),
    /// A numeric literal. Character literals are numbers whose value is the
    /// literal byte.
    Number {
        /// The parsed value.
        value: u64,
        /// Suffix-selected interpretation.
        kind: NumberKind,
    },
    /// A `"..."` or include-`<...>` literal, escapes already stripped.
    String(String),
    /// A `//` or `/* */` comment body.
    Comment(String),
    /// A line break. Newlines are preserved as tokens, never folded into
    /// the whitespace flag.
    Newline,
}

/// One lexical unit, annotated with its emission context.
#[derive(Clone, Debug)]
pub struct Token {
    /// What was recognized.
    pub kind: TokenKind,
    /// Lex position after the token's bytes (and suffix) were consumed.
    pub pos: Position,
    /// True if the *following* token was separated from this one by a space
    /// or tab.
    pub whitespace: bool,
    /// Handle to the parenthesis-capture buffer when the token was emitted
    /// at expression depth >= 1. All tokens of one outermost `(...)` group
    /// share the buffer, so after lexing each of them observes the full
    /// captured text.
    pub between_brackets: Option<Rc<RefCell<ByteBuffer>>>,
}

impl Token {
    /// True iff this token is the keyword `name`.
    pub fn is_keyword(&self, name: &str) -> bool {
        matches!(&self.kind, TokenKind::Keyword(text) if text == name)
    }

    /// The captured bracket text at this moment, if the token was emitted
    /// inside parentheses.
    pub fn between_brackets_text(&self) -> Option<String> {
        self.between_brackets
            .as_ref()
            .map(|buf| buf.borrow().text().into_owned())
    }
}

/// True iff `text` is one of the reserved words of the language.
pub fn is_reserved_word(text: &str) -> bool {
    matches!(
        text,
        "unsigned"
            | "signed"
            | "char"
            | "short"
            | "int"
            | "long"
            | "float"
            | "double"
            | "void"
            | "struct"
            | "enum"
            | "union"
            | "typedef"
            | "const"
            | "volatile"
            | "extern"
            | "static"
            | "__ignore_typecheck"
            | "return"
            | "include"
            | "if"
            | "else"
            | "while"
            | "for"
            | "do"
            | "break"
            | "continue"
            | "switch"
            | "case"
            | "default"
            | "goto"
            | "auto"
            | "register"
            | "restrict"
            | "inline"
            | "virtual"
            | "explicit"
            | "friend"
            | "constexpr"
            | "mutable"
            | "operator"
            | "this"
            | "sizeof"
            | "alignof"
            | "decltype"
            | "nullptr"
            | "true"
            | "false"
            | "bool"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyword(text: &str) -> Token {
        Token {
            kind: TokenKind::Keyword(text.to_string()),
            pos: Position::start(),
            whitespace: false,
            between_brackets: None,
        }
    }

    #[test]
    fn test_is_keyword_matches_name() {
        let token = keyword("include");
        assert!(token.is_keyword("include"));
        assert!(!token.is_keyword("if"));
    }

    #[test]
    fn test_is_keyword_rejects_other_kinds() {
        let token = Token {
            kind: TokenKind::Identifier("include".to_string()),
            pos: Position::start(),
            whitespace: false,
            between_brackets: None,
        };
        assert!(!token.is_keyword("include"));
    }

    #[test]
    fn test_reserved_words() {
        assert!(is_reserved_word("int"));
        assert!(is_reserved_word("__ignore_typecheck"));
        assert!(is_reserved_word("constexpr"));
        assert!(!is_reserved_word("main"));
        assert!(!is_reserved_word("Int"));
        assert!(!is_reserved_word(""));
    }
}
