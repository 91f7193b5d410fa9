//! The kcc command-line entry point.
//!
//! Takes no arguments: compiles `./test.c` with output path `test` and
//! prints a one-line verdict.

use std::path::Path;
use std::process;

use kcc_drv::{compile_file, CompileError};

fn main() {
    process::exit(run());
}

/// Runs the fixed compilation and maps the outcome to an exit code. A
/// fatal lexical error exits with -1; its diagnostic has already been
/// written to stderr by the driver. Everything else exits 0 after its
/// banner.
fn run() -> i32 {
    match compile_file(Path::new("./test.c"), Some(Path::new("test")), 0) {
        Ok(_) => {
            println!("everything compiled fine");
            0
        }
        Err(CompileError::Lex(_)) => -1,
        Err(CompileError::InputOpen { .. } | CompileError::OutputOpen { .. }) => {
            println!("compilation failed");
            0
        }
        Err(_) => {
            println!("unknown error");
            0
        }
    }
}
