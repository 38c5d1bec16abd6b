//! Line Classification
//!
//! Each line is reduced to a grammar signature string (one `<symbol>` per
//! significant token) and matched against declarative patterns, tried in
//! declaration order for correct disambiguation. Keywords are only keywords
//! in position: `title` at the start of a line is `<kw-title>`, but a line
//! with an arrow before its first colon is a signal no matter what words it
//! starts with, so an actor named `participant` still works on a signal
//! line. Everything after the first colon is message text, so an arrow
//! there never reclassifies a title or note line.
//!
//! Whitespace tokens never make it into the signature; seqd grammar is
//! whitespace-insensitive within a line.

use crate::seq::token::{LineToken, LineType, Token};
use once_cell::sync::Lazy;
use regex::Regex;

/// Keywords recognized at statement position (case-insensitive).
const KEYWORDS: &[&str] = &[
    "title",
    "participant",
    "note",
    "left",
    "right",
    "over",
    "of",
    "as",
];

/// Classification patterns as (line type, regex over the signature).
///
/// Order matters: a line with an arrow before its first colon is always a
/// signal, even when it starts with a keyword, so the signal pattern is
/// tried before the keyword forms. The signal pattern alone matches against
/// the signature truncated at the first `<colon>`.
const CLASSIFICATION_PATTERNS: &[(LineType, &str)] = &[
    (LineType::BlankLine, r"^$"),
    (LineType::CommentLine, r"^<comment>$"),
    (LineType::SignalLine, r"<arrow>"),
    (LineType::TitleLine, r"^<kw-title><colon>"),
    (
        LineType::NoteLine,
        r"^<kw-note>(<kw-left><kw-of>|<kw-right><kw-of>|<kw-over>)",
    ),
    (LineType::ParticipantLine, r"^<kw-participant>"),
];

static COMPILED_PATTERNS: Lazy<Vec<(LineType, Regex)>> = Lazy::new(|| {
    CLASSIFICATION_PATTERNS
        .iter()
        .map(|(line_type, pattern)| {
            let regex = Regex::new(pattern).expect("classification patterns are valid regexes");
            (*line_type, regex)
        })
        .collect()
});

/// Build the grammar signature for a line.
///
/// One `<symbol>` per significant token; whitespace is dropped. Word tokens
/// whose lexeme is a statement keyword become `<kw-name>` symbols.
pub fn line_signature(line: &LineToken, source: &str) -> String {
    let mut signature = String::new();
    for (token, span) in line.source_tokens.iter().zip(line.token_spans.iter()) {
        let symbol = match token {
            Token::Whitespace | Token::Newline => continue,
            Token::Comment => "<comment>",
            Token::Colon => "<colon>",
            Token::Comma => "<comma>",
            Token::QuotedName => "<quoted>",
            Token::Dash => "<dash>",
            Token::Gt => "<gt>",
            Token::Quote => "<quote>",
            Token::SolidArrow
            | Token::DashedArrow
            | Token::SolidOpenArrow
            | Token::DashedOpenArrow => "<arrow>",
            Token::Word => {
                let lexeme = source.get(span.clone()).unwrap_or("");
                match KEYWORDS
                    .iter()
                    .find(|kw| lexeme.eq_ignore_ascii_case(kw))
                {
                    Some(kw) => {
                        signature.push_str("<kw-");
                        signature.push_str(kw);
                        signature.push('>');
                        continue;
                    }
                    None => "<word>",
                }
            }
        };
        signature.push_str(symbol);
    }
    signature
}

/// Determine the type of a line from its grammar signature.
pub fn classify_line_tokens(line: &LineToken, source: &str) -> LineType {
    let signature = line_signature(line, source);
    // Arrows after the first colon are message text; the signal pattern
    // must not see them.
    let before_colon = match signature.find("<colon>") {
        Some(idx) => &signature[..idx],
        None => signature.as_str(),
    };
    for (line_type, regex) in COMPILED_PATTERNS.iter() {
        let candidate = match line_type {
            LineType::SignalLine => before_colon,
            _ => signature.as_str(),
        };
        if regex.is_match(candidate) {
            return *line_type;
        }
    }
    LineType::UnknownLine
}
