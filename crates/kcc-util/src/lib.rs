//! kcc-util - Shared utilities for the kcc compiler.
//!
//! This crate collects the small leaf types the rest of the compiler is
//! built on:
//!
//! - [`ByteBuffer`]: growable byte storage with an independent read cursor,
//!   used both for in-memory lexing and for recognition scratch space.
//! - [`Position`]: 1-based line/column locations inside a named input.
//! - [`Diagnostic`], [`Handler`], [`Level`]: position-tagged error and
//!   warning reporting.
//!
//! Nothing in here knows about tokens or compilation phases; higher layers
//! (`kcc-lex`, `kcc-drv`) depend on this crate, never the other way around.

pub mod buffer;
pub mod diagnostic;
pub mod pos;

pub use buffer::ByteBuffer;
pub use diagnostic::{Diagnostic, Handler, Level};
pub use pos::Position;
