//! Core tokenization
//!
//! One vanilla logos pass over the whole source. No custom lexer code: all
//! line semantics live in later stages.

use crate::seq::token::Token;
use logos::Logos;
use std::ops::Range as ByteRange;

/// Tokenize source text into (Token, byte range) pairs.
///
/// The token set covers every byte the normalized pipeline can feed it, so a
/// lexer miss cannot happen in practice; if one ever does (for example a
/// stray carriage return in un-normalized input), the slice is folded into a
/// Word token rather than dropped, preserving span contiguity.
pub fn tokenize(source: &str) -> Vec<(Token, ByteRange<usize>)> {
    Token::lexer(source)
        .spanned()
        .map(|(token, span)| (token.unwrap_or(Token::Word), span))
        .collect()
}
