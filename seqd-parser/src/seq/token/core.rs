//! Token definitions for the seqd format
//!
//! All tokens the seqd lexer can produce, defined with the logos derive
//! macro. The token set covers every input byte: stray quotes, dashes and
//! angle brackets have their own tokens, so tokenization never fails and
//! message text can contain any of them.

use logos::Logos;

/// All possible tokens in the seqd format
#[derive(Logos, Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Token {
    // Line breaks
    #[token("\n")]
    Newline,

    // Whitespace (excluding newlines)
    #[regex(r"[ \t]+")]
    Whitespace,

    // Comment to end of line. Only significant at the start of a line;
    // after a `:` separator the raw text wins.
    #[regex(r"#[^\n]*", allow_greedy = true)]
    Comment,

    // Signal arrows. Longest match wins, so `-->>` never lexes as `-->` + `>`.
    #[token("->")]
    SolidArrow,
    #[token("-->")]
    DashedArrow,
    #[token("->>")]
    SolidOpenArrow,
    #[token("-->>")]
    DashedOpenArrow,

    // Structural markers
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,

    // A double-quoted actor name; quotes included in the lexeme
    #[regex(r#""[^"\n]*""#)]
    QuotedName,

    // Fallbacks so that arrow/quote characters in free text still tokenize
    #[token("-")]
    Dash,
    #[token(">")]
    Gt,
    #[token("\"")]
    Quote,

    // Any other run of non-special characters
    #[regex(r#"[^ \t\r\n:,#">-]+"#)]
    Word,
}

impl Token {
    /// Check if this token is an arrow operator
    pub fn is_arrow(&self) -> bool {
        matches!(
            self,
            Token::SolidArrow | Token::DashedArrow | Token::SolidOpenArrow | Token::DashedOpenArrow
        )
    }

    /// Check if this token is whitespace (including newlines)
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace | Token::Newline)
    }

    /// Strip the surrounding quotes from a QuotedName lexeme.
    ///
    /// Returns the lexeme unchanged for any other token's lexeme.
    pub fn unquote(lexeme: &str) -> &str {
        lexeme
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .unwrap_or(lexeme)
    }
}
