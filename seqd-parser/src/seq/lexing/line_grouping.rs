//! Line grouping
//!
//! Splits the flat token stream at Newline tokens into one [`LineToken`] per
//! source line. The terminating Newline is consumed and not stored; the
//! line's span therefore ends before the newline, which is what diagnostics
//! want to underline.

use crate::seq::token::{LineToken, LineType, Token};
use std::ops::Range as ByteRange;

/// Group a flat token stream into unclassified line tokens.
///
/// Classification happens afterwards; every produced line starts out as
/// [`LineType::UnknownLine`]. A trailing line without a newline still
/// produces a line token.
pub fn group_lines(tokens: Vec<(Token, ByteRange<usize>)>) -> Vec<LineToken> {
    let mut lines = Vec::new();
    let mut current_tokens = Vec::new();
    let mut current_spans = Vec::new();

    for (token, span) in tokens {
        if token == Token::Newline {
            lines.push(LineToken {
                source_tokens: std::mem::take(&mut current_tokens),
                token_spans: std::mem::take(&mut current_spans),
                line_type: LineType::UnknownLine,
            });
        } else {
            current_tokens.push(token);
            current_spans.push(span);
        }
    }

    if !current_tokens.is_empty() {
        lines.push(LineToken {
            source_tokens: current_tokens,
            token_spans: current_spans,
            line_type: LineType::UnknownLine,
        });
    }

    lines
}
