//! The lex process and top-level token dispatch.
//!
//! [`LexProcess`] owns everything one lex run needs: the character source,
//! the current position, the expression-nesting counter with its capture
//! buffer, and the output vector. Every recognizer is a method taking
//! `&mut self`, so the whole state is threaded explicitly.
//!
//! The per-token-class recognizers live in the submodules; this module
//! holds the shared byte helpers and the dispatch table of
//! [`LexProcess::read_next_token`].

mod comment;
mod identifier;
mod number;
mod operator;
mod string;

use std::cell::RefCell;
use std::rc::Rc;

use kcc_util::{ByteBuffer, Position};

use crate::error::LexError;
use crate::source::CharSource;
use crate::token::{Token, TokenKind};

/// State carried across one lex run.
pub struct LexProcess {
    source: Box<dyn CharSource>,
    pos: Position,
    tokens: Vec<Token>,
    expression_depth: u32,
    parentheses_buffer: Option<Rc<RefCell<ByteBuffer>>>,
}

impl std::fmt::Debug for LexProcess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LexProcess")
            .field("pos", &self.pos)
            .field("tokens", &self.tokens)
            .field("expression_depth", &self.expression_depth)
            .field("parentheses_buffer", &self.parentheses_buffer)
            .finish()
    }
}

impl LexProcess {
    /// Creates a process reading from `source`. The filename, when given,
    /// is attached to every emitted position.
    pub fn new(source: Box<dyn CharSource>, filename: Option<&str>) -> Self {
        Self {
            source,
            pos: match filename {
                Some(name) => Position::start_of(name),
                None => Position::start(),
            },
            tokens: Vec::new(),
            expression_depth: 0,
            parentheses_buffer: None,
        }
    }

    /// Runs the recognizer to completion, pushing each emitted token onto
    /// the output vector in emission order.
    pub fn lex(&mut self) -> Result<(), LexError> {
        self.expression_depth = 0;
        self.parentheses_buffer = None;

        while let Some(token) = self.read_next_token()? {
            self.tokens.push(token);
        }
        Ok(())
    }

    /// The tokens emitted so far.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Consumes the process, handing the token vector to the caller.
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// The position after the last consumed byte.
    pub fn pos(&self) -> &Position {
        &self.pos
    }

    /// Current parenthesis nesting depth.
    pub fn expression_depth(&self) -> u32 {
        self.expression_depth
    }

    /// Peeks one byte and dispatches to the matching recognizer. `Ok(None)`
    /// only at end of input.
    fn read_next_token(&mut self) -> Result<Option<Token>, LexError> {
        let Some(c) = self.peek_char() else {
            return Ok(None);
        };

        // '/' may start a comment; the handler falls through to the
        // operator path otherwise.
        if c == b'/' {
            return self.handle_comment().map(Some);
        }

        let token = match c {
            b'0'..=b'9' => self.make_number()?,
            b'+' | b'-' | b'*' | b'%' | b'=' | b'!' | b'~' | b'&' | b'|' | b'^' | b'<' | b'>'
            | b'(' | b'[' | b',' | b'.' | b'?' => self.make_operator_or_string()?,
            b'{' | b';' | b':' | b']' | b'}' | b')' | b'#' | b'\\' => self.make_symbol()?,
            b'b' | b'x' => self.make_special_number()?,
            b'"' => self.make_string(b'"', b'"'),
            b'\'' => self.make_quote()?,
            b' ' | b'\t' => return self.handle_whitespace(),
            b'\n' => self.make_newline(),
            _ if c.is_ascii_alphabetic() || c == b'_' => self.make_identifier_or_keyword(),
            _ => {
                return Err(LexError::UnexpectedToken {
                    pos: self.pos.clone(),
                })
            }
        };
        Ok(Some(token))
    }

    /// Marks the previous emitted token as whitespace-separated, consumes
    /// the space or tab, and produces the next real token.
    fn handle_whitespace(&mut self) -> Result<Option<Token>, LexError> {
        if let Some(last) = self.tokens.last_mut() {
            last.whitespace = true;
        }
        self.bump();
        self.read_next_token()
    }

    fn make_newline(&mut self) -> Token {
        self.bump();
        self.make_token(TokenKind::Newline)
    }

    fn make_symbol(&mut self) -> Result<Token, LexError> {
        let byte = self.bump();
        if byte == b')' {
            self.finish_expression()?;
        }
        Ok(self.make_token(TokenKind::Symbol(byte)))
    }

    /// Consumes one byte, feeding the parenthesis capture and advancing the
    /// position. Push-back rewinds neither, so a re-consumed byte is
    /// counted (and captured) again.
    fn next_char(&mut self) -> Option<u8> {
        let byte = self.source.next_char();
        if let Some(b) = byte {
            if self.in_expression() {
                if let Some(buffer) = &self.parentheses_buffer {
                    buffer.borrow_mut().write(b);
                }
            }
            self.pos.advance(b);
        }
        byte
    }

    fn peek_char(&mut self) -> Option<u8> {
        self.source.peek_char()
    }

    fn push_char(&mut self, byte: u8) {
        self.source.push_char(byte);
    }

    /// Consumes a byte the caller has already peeked. Returns 0 at end of
    /// input, which only happens inside malformed literals that fail
    /// shortly after.
    fn bump(&mut self) -> u8 {
        self.next_char().unwrap_or(0)
    }

    fn in_expression(&self) -> bool {
        self.expression_depth > 0
    }

    /// Enters a parenthesized expression. The capture buffer is re-created
    /// on the 0 -> 1 transition; an old buffer's contents are never reused.
    fn new_expression(&mut self) {
        self.expression_depth += 1;
        if self.expression_depth == 1 {
            self.parentheses_buffer = Some(Rc::new(RefCell::new(ByteBuffer::new())));
        }
    }

    fn finish_expression(&mut self) -> Result<(), LexError> {
        if self.expression_depth == 0 {
            return Err(LexError::UnbalancedParen {
                pos: self.pos.clone(),
            });
        }
        self.expression_depth -= 1;
        Ok(())
    }

    /// Stamps a kind with the current position and, inside an expression,
    /// the shared capture handle.
    fn make_token(&self, kind: TokenKind) -> Token {
        Token {
            kind,
            pos: self.pos.clone(),
            whitespace: false,
            between_brackets: if self.in_expression() {
                self.parentheses_buffer.clone()
            } else {
                None
            },
        }
    }
}
