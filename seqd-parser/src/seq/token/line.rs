//! Line-based token types for the lexer pipeline
//!
//!     seqd is strictly line-oriented: every statement fits on one line, so
//!     all the grammar needs is one classified line token per source line.
//!     Each line token keeps the raw tokens and their byte spans, which lets
//!     the parse routines extract exact source text (actor names, message
//!     text) without re-lexing, and lets diagnostics point at real spans.
//!
//! Line Types
//!
//!     - BlankLine:       empty or whitespace only
//!     - CommentLine:     `#` comment and nothing else
//!     - TitleLine:       `title : text`
//!     - ParticipantLine: `participant Name [as Alias]`
//!     - SignalLine:      an arrow operator before the first colon
//!     - NoteLine:        `note left of|right of|over ...`
//!     - UnknownLine:     anything else; the parser reports it
//!
//!     See [classify_line_tokens](crate::seq::lexing::line_classification::classify_line_tokens)
//!     for the classification logic and ordering.

use std::fmt;
use std::ops::Range as ByteRange;

use super::core::Token;

/// A line token represents one logical line created from grouped raw tokens.
///
/// Line tokens store the original raw tokens (for classification), the byte
/// range of each token (for byte-accurate text extraction), and the line
/// classification. The terminating newline is not part of the line.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LineToken {
    /// The original raw tokens that comprise this line
    pub source_tokens: Vec<Token>,

    /// The byte range in source code for each token.
    /// Must be the same length as source_tokens.
    pub token_spans: Vec<ByteRange<usize>>,

    /// The type/classification of this line
    pub line_type: LineType,
}

impl LineToken {
    /// The byte span covering the whole line (empty span for empty lines).
    pub fn span(&self) -> ByteRange<usize> {
        match (self.token_spans.first(), self.token_spans.last()) {
            (Some(first), Some(last)) => first.start..last.end,
            _ => 0..0,
        }
    }

    /// The byte span covering tokens `range` (indices into `source_tokens`),
    /// with leading and trailing whitespace tokens excluded.
    ///
    /// Returns None when the range holds no significant tokens.
    pub fn trimmed_span(&self, range: ByteRange<usize>) -> Option<ByteRange<usize>> {
        let tokens = self.source_tokens.get(range.clone())?;
        let spans = self.token_spans.get(range)?;
        let first = tokens.iter().position(|t| !t.is_whitespace())?;
        let last = tokens.iter().rposition(|t| !t.is_whitespace())?;
        Some(spans[first].start..spans[last].end)
    }

    /// The source text of the whole line.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.span()).unwrap_or("")
    }

    /// Index of the first token matching `pred`, starting at `from`.
    pub fn find_token(&self, from: usize, pred: impl Fn(&Token) -> bool) -> Option<usize> {
        self.source_tokens
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, t)| pred(t))
            .map(|(i, _)| i)
    }
}

/// The classification of a line token
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LineType {
    /// Blank line (empty or whitespace only)
    BlankLine,

    /// A `#` comment and nothing else
    CommentLine,

    /// `title : text`
    TitleLine,

    /// `participant Name` or `participant Name as Alias`
    ParticipantLine,

    /// A line with an arrow operator (`->`, `-->`, `->>`, `-->>`) before
    /// its first colon
    SignalLine,

    /// `note left of A: ...`, `note right of A: ...`, `note over A[,B]: ...`
    NoteLine,

    /// Anything that matched no statement shape
    UnknownLine,
}

impl fmt::Display for LineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineType::BlankLine => "BLANK_LINE",
            LineType::CommentLine => "COMMENT_LINE",
            LineType::TitleLine => "TITLE_LINE",
            LineType::ParticipantLine => "PARTICIPANT_LINE",
            LineType::SignalLine => "SIGNAL_LINE",
            LineType::NoteLine => "NOTE_LINE",
            LineType::UnknownLine => "UNKNOWN_LINE",
        };
        write!(f, "{}", name)
    }
}
