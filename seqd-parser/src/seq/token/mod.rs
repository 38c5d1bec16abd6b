//! Core token types and helpers shared across the lexer, parser, and tooling.

pub mod core;
pub mod line;

pub use self::core::Token;
pub use line::{LineToken, LineType};
