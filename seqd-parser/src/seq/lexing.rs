//! Lexer
//!
//!     This module orchestrates the tokenization pipeline for the seqd
//!     format. The pipeline consists of:
//!
//!         1. Core tokenization using the logos lexer. See
//!            [base_tokenization](base_tokenization). Each newline is
//!            tokenized as a Newline token directly by logos.
//!
//!         2. Line grouping. See [line_grouping](line_grouping). Tokens are
//!            split at Newline tokens into one LineToken per source line.
//!
//!         3. Line classification. See
//!            [line_classification](line_classification). Each line gets
//!            exactly one LineType, decided by matching the line's grammar
//!            signature against ordered patterns.
//!
//! Source Token Preservation
//!
//!     Logos tokens carry the byte range of their source text. The parse
//!     routines slice actor names and message text straight out of the
//!     source using those ranges, and diagnostics point at them, so every
//!     stage must preserve them untouched.

pub mod base_tokenization;
pub mod line_classification;
pub mod line_grouping;

pub use base_tokenization::tokenize;
pub use line_classification::classify_line_tokens;
// Re-export token types for consumers that still import them from `lexing`
pub use crate::seq::token::{LineToken, LineType, Token};

/// Normalizes line endings so the rest of the pipeline only sees `\n`.
///
/// CRLF sources are accepted; carriage returns are dropped wholesale.
pub fn normalize_line_endings(source: &str) -> String {
    source.replace('\r', "")
}

/// Preprocesses source text to ensure it ends with a newline.
///
/// This is required so the final line groups like every other line.
/// Returns the original string if it already ends with a newline or is empty.
pub fn ensure_source_ends_with_newline(source: &str) -> String {
    if !source.is_empty() && !source.ends_with('\n') {
        format!("{}\n", source)
    } else {
        source.to_string()
    }
}

/// Runs the full lexing pipeline over already-normalized source.
///
/// The seqd token set covers every input byte, so lexing cannot fail; all
/// diagnostics are the parser's job.
pub fn lex(source: &str) -> Vec<LineToken> {
    let tokens = base_tokenization::tokenize(source);
    let mut lines = line_grouping::group_lines(tokens);
    for line in &mut lines {
        line.line_type = classify_line_tokens(line, source);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_helper(source: &str) -> Vec<LineToken> {
        let normalized = normalize_line_endings(source);
        let with_newline = ensure_source_ends_with_newline(&normalized);
        lex(&with_newline)
    }

    #[test]
    fn test_signal_and_note_lines() {
        let lines = lex_helper("Alice->Bob: Hello\nnote over Alice: hi");
        let types: Vec<LineType> = lines.iter().map(|l| l.line_type).collect();
        assert_eq!(types, vec![LineType::SignalLine, LineType::NoteLine]);
    }

    #[test]
    fn test_blank_and_comment_lines() {
        let lines = lex_helper("\n   \n# comment\nAlice->Bob: x");
        let types: Vec<LineType> = lines.iter().map(|l| l.line_type).collect();
        assert_eq!(
            types,
            vec![
                LineType::BlankLine,
                LineType::BlankLine,
                LineType::CommentLine,
                LineType::SignalLine,
            ]
        );
    }

    #[test]
    fn test_crlf_source() {
        let lines = lex_helper("title: T\r\nAlice->Bob: x\r\n");
        let types: Vec<LineType> = lines.iter().map(|l| l.line_type).collect();
        assert_eq!(types, vec![LineType::TitleLine, LineType::SignalLine]);
    }

    #[test]
    fn test_missing_trailing_newline_is_equivalent() {
        let with = lex_helper("Alice->Bob: x\n");
        let without = lex_helper("Alice->Bob: x");
        assert_eq!(with, without);
    }

    #[test]
    fn test_ensure_source_ends_with_newline() {
        assert_eq!(ensure_source_ends_with_newline(""), "");
        assert_eq!(ensure_source_ends_with_newline("a"), "a\n");
        assert_eq!(ensure_source_ends_with_newline("a\n"), "a\n");
    }
}
