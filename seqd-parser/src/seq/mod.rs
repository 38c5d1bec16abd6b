//! The seqd format implementation.
//!
//! File layout follows the stage order:
//!
//!     src/seq
//!       ├── token        Token types shared by lexer, parser and tooling
//!       ├── lexing       Tokenization, line grouping, line classification
//!       ├── parsing      Per-line parse routines and the diagram builder
//!       ├── ast          Diagram model, locations, diagnostics
//!       └── testing      Verified sample sources and assertion helpers
//!
//! For testing guidelines see the [testing module](crate::seq::testing). All
//! parser tests must use verified seqd sources and deep diagram assertions.

pub mod ast;
pub mod lexing;
pub mod parsing;
pub mod testing;
pub mod token;
