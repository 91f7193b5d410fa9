//! kcc-drv - Compiler driver.
//!
//! The driver owns one compilation: it opens the input (and optional
//! output) files, runs the lexer over the input, and retains the token
//! vector for the phases still to come. Parsing and code generation do not
//! exist yet, so nothing is written to the output file.

use std::fs::File;
use std::path::{Path, PathBuf};

use kcc_lex::{FileSource, LexError, LexProcess, Token};
use kcc_util::{Diagnostic, Handler, Position};
use thiserror::Error;

/// Errors surfaced by [`compile_file`].
///
/// Open failures are structural: the compilation never started. A
/// [`CompileError::Lex`] means the input was read and rejected; its
/// diagnostic has already been reported through the process handler.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompileError {
    /// The input file could not be opened.
    #[error("unable to open input file {path}")]
    InputOpen {
        /// The path that failed to open.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The requested output file could not be opened.
    #[error("unable to open output file {path}")]
    OutputOpen {
        /// The path that failed to open.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Lexical analysis hit a fatal condition.
    #[error(transparent)]
    Lex(#[from] LexError),
}

/// One compilation, from file handles to (eventually) generated code.
///
/// Created by [`compile_file`] or [`CompileProcess::create`]; lives for the
/// whole compilation and owns the file handles, the token vector, and the
/// diagnostic handler.
#[derive(Debug)]
pub struct CompileProcess {
    flags: u32,
    input_path: PathBuf,
    input: Option<File>,
    output: Option<File>,
    tokens: Vec<Token>,
    diagnostics: Handler,
}

impl CompileProcess {
    /// Opens the files of a compilation. The input is opened read-only; an
    /// output path, when given, is opened for writing.
    pub fn create(
        input_path: &Path,
        output_path: Option<&Path>,
        flags: u32,
    ) -> Result<Self, CompileError> {
        let input = File::open(input_path).map_err(|source| CompileError::InputOpen {
            path: input_path.to_path_buf(),
            source,
        })?;

        let output = match output_path {
            Some(path) => Some(File::create(path).map_err(|source| CompileError::OutputOpen {
                path: path.to_path_buf(),
                source,
            })?),
            None => None,
        };

        Ok(Self {
            flags,
            input_path: input_path.to_path_buf(),
            input: Some(input),
            output,
            tokens: Vec::new(),
            diagnostics: Handler::new(),
        })
    }

    /// Runs the lexer over the input file, storing the token vector on the
    /// process. A fatal lexical error is reported through the diagnostic
    /// handler before being returned.
    fn run_lexer(&mut self) -> Result<(), CompileError> {
        let Some(file) = self.input.take() else {
            return Ok(());
        };

        let source = FileSource::new(file);
        let filename = self.input_path.to_string_lossy();
        let mut lex = LexProcess::new(Box::new(source), Some(filename.as_ref()));
        match lex.lex() {
            Ok(()) => {
                self.tokens = lex.into_tokens();
                Ok(())
            }
            Err(err) => {
                self.report_lex_error(&err);
                Err(err.into())
            }
        }
    }

    fn report_lex_error(&self, err: &LexError) {
        self.diagnostics
            .report(Diagnostic::error(err.to_string(), err.pos().clone()));
    }

    /// The tokens produced by lexical analysis.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The flags this compilation was created with.
    pub fn flags(&self) -> u32 {
        self.flags
    }

    /// Path of the input file.
    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    /// The open output file, when one was requested.
    pub fn output(&self) -> Option<&File> {
        self.output.as_ref()
    }

    /// Reports a non-fatal warning against this compilation.
    pub fn warning(&self, message: &str, pos: Position) {
        self.diagnostics.warning(message, pos);
    }

    /// Diagnostics reported so far.
    pub fn diagnostics(&self) -> &Handler {
        &self.diagnostics
    }
}

/// Compiles `input_path`: opens the files, runs lexical analysis, and
/// returns the process carrying the token vector.
pub fn compile_file(
    input_path: &Path,
    output_path: Option<&Path>,
    flags: u32,
) -> Result<CompileProcess, CompileError> {
    let mut process = CompileProcess::create(input_path, output_path, flags)?;

    // Lexical analysis. Parsing and code generation slot in here once they
    // exist.
    process.run_lexer()?;

    Ok(process)
}
