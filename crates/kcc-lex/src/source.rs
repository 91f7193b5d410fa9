//! Character sources.
//!
//! The recognizer pulls bytes through the three-operation [`CharSource`]
//! contract and never sees where they come from. The concrete source is
//! chosen when the lex process is created: [`FileSource`] streams a file,
//! [`StringSource`] replays an in-memory buffer.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use kcc_util::{ByteBuffer, Position};

/// A stream of bytes with one-byte look-ahead and push-back.
pub trait CharSource {
    /// Consumes and returns the next byte; `None` at end of input.
    fn next_char(&mut self) -> Option<u8>;

    /// Returns the next byte without consuming it. Idempotent across
    /// repeated calls with no intervening `next_char`/`push_char`.
    fn peek_char(&mut self) -> Option<u8>;

    /// Places a byte so that the next `peek_char`/`next_char` returns it.
    /// At least one byte of push-back is supported.
    fn push_char(&mut self, byte: u8);
}

/// A character source streaming from an open file.
///
/// The source keeps its own [`Position`], advanced on every consumed byte.
/// This is the authoritative line/column tracker for diagnostics raised
/// outside the lexer. A pushed-back byte advances it again when
/// re-consumed; push-back never rewinds it.
pub struct FileSource {
    reader: BufReader<File>,
    pushed: Vec<u8>,
    pos: Position,
}

impl FileSource {
    /// Wraps an already-open file.
    pub fn new(file: File) -> Self {
        Self {
            reader: BufReader::new(file),
            pushed: Vec::new(),
            pos: Position::start(),
        }
    }

    /// Opens `path` read-only and wraps it.
    pub fn open(path: &Path) -> io::Result<Self> {
        Ok(Self::new(File::open(path)?))
    }

    /// The position after the last consumed byte.
    pub fn pos(&self) -> &Position {
        &self.pos
    }

    /// Reads one byte from the underlying file. Read failures behave as end
    /// of input.
    fn read_raw(&mut self) -> Option<u8> {
        let mut byte = [0u8; 1];
        match self.reader.read(&mut byte) {
            Ok(1) => Some(byte[0]),
            _ => None,
        }
    }
}

impl CharSource for FileSource {
    fn next_char(&mut self) -> Option<u8> {
        let byte = self.pushed.pop().or_else(|| self.read_raw());
        if let Some(b) = byte {
            self.pos.advance(b);
        }
        byte
    }

    fn peek_char(&mut self) -> Option<u8> {
        if let Some(&byte) = self.pushed.last() {
            return Some(byte);
        }
        let byte = self.read_raw()?;
        self.pushed.push(byte);
        Some(byte)
    }

    fn push_char(&mut self, byte: u8) {
        self.pushed.push(byte);
    }
}

/// A character source replaying a [`ByteBuffer`]'s contents.
///
/// Reads consume through the buffer's cursor. `push_char` *appends* to the
/// buffer: the string source exists for synthetic inputs and does not
/// promise inverse-of-`next_char` ordering for pushed bytes.
pub struct StringSource {
    buffer: ByteBuffer,
}

impl StringSource {
    /// Wraps a buffer; reading starts at its current cursor.
    pub fn new(buffer: ByteBuffer) -> Self {
        Self { buffer }
    }
}

impl CharSource for StringSource {
    fn next_char(&mut self) -> Option<u8> {
        self.buffer.read()
    }

    fn peek_char(&mut self) -> Option<u8> {
        self.buffer.peek()
    }

    fn push_char(&mut self, byte: u8) {
        self.buffer.write(byte);
    }
}
