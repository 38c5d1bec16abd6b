//! Error types for parsing and diagram construction

use crate::seq::ast::range::Range;
use std::fmt;

/// Errors that can occur while parsing seqd source into a diagram
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Line matched no statement shape
    UnexpectedLine {
        line_text: String,
        location: Range,
        source_context: String,
    },
    /// Signal or note line without the `:` message separator
    MissingMessageSeparator {
        statement: &'static str,
        location: Range,
        source_context: String,
    },
    /// An actor reference with no name in it
    EmptyActorName {
        location: Range,
        source_context: String,
    },
    /// The same participant declared explicitly twice
    DuplicateParticipant {
        name: String,
        location: Range,
        source_context: String,
    },
    /// A note placement with the wrong number of actors
    BadNoteActorCount {
        placement: &'static str,
        count: usize,
        location: Range,
        source_context: String,
    },
}

impl ParseError {
    pub fn location(&self) -> &Range {
        match self {
            ParseError::UnexpectedLine { location, .. }
            | ParseError::MissingMessageSeparator { location, .. }
            | ParseError::EmptyActorName { location, .. }
            | ParseError::DuplicateParticipant { location, .. }
            | ParseError::BadNoteActorCount { location, .. } => location,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Headlines report 1-based line and column
        match self {
            ParseError::UnexpectedLine {
                line_text,
                location,
                source_context,
            } => {
                writeln!(
                    f,
                    "Error: line {}, column {}: not a seqd statement",
                    location.start.line + 1,
                    location.start.column + 1
                )?;
                writeln!(f)?;
                write!(f, "{}", source_context)?;
                writeln!(f)?;
                writeln!(
                    f,
                    "\"{}\" matches no statement form (signal, note, title, participant).",
                    line_text.trim()
                )
            }
            ParseError::MissingMessageSeparator {
                statement,
                location,
                source_context,
            } => {
                writeln!(
                    f,
                    "Error: {} on line {}, column {} has no ':' message separator",
                    statement,
                    location.start.line + 1,
                    location.start.column + 1
                )?;
                writeln!(f)?;
                write!(f, "{}", source_context)?;
                writeln!(f)?;
                writeln!(
                    f,
                    "Every {} needs a ':' after its actors, even for an empty message.",
                    statement
                )
            }
            ParseError::EmptyActorName {
                location,
                source_context,
            } => {
                writeln!(
                    f,
                    "Error: empty actor name on line {}, column {}",
                    location.start.line + 1,
                    location.start.column + 1
                )?;
                writeln!(f)?;
                write!(f, "{}", source_context)?;
                writeln!(f)?;
                writeln!(f, "Actor references must name an actor.")
            }
            ParseError::DuplicateParticipant {
                name,
                location,
                source_context,
            } => {
                writeln!(
                    f,
                    "Error: participant \"{}\" declared twice (line {}, column {})",
                    name,
                    location.start.line + 1,
                    location.start.column + 1
                )?;
                writeln!(f)?;
                write!(f, "{}", source_context)?;
                writeln!(f)?;
                writeln!(
                    f,
                    "Each participant may be declared once; later references reuse it."
                )
            }
            ParseError::BadNoteActorCount {
                placement,
                count,
                location,
                source_context,
            } => {
                writeln!(
                    f,
                    "Error: note {} names {} actors (line {}, column {})",
                    placement,
                    count,
                    location.start.line + 1,
                    location.start.column + 1
                )?;
                writeln!(f)?;
                write!(f, "{}", source_context)?;
                writeln!(f)?;
                writeln!(
                    f,
                    "\"note over\" takes one or two actors; \"left of\"/\"right of\" take one."
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Type alias for parser results with boxed errors (reduces stack size)
pub type ParseResult<T> = Result<T, Box<ParseError>>;

/// Format source code context around an error location
///
/// Shows 2 lines before the error, the error line with >> marker, and 2
/// lines after. All lines are numbered for easy reference.
pub fn format_source_context(source: &str, range: &Range) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let error_line = range.start.line;

    let start_line = error_line.saturating_sub(2);
    let end_line = (error_line + 3).min(lines.len());

    let mut context = String::new();

    for line_num in start_line..end_line {
        let marker = if line_num == error_line { ">>" } else { "  " };
        let display_line_num = line_num + 1; // 1-indexed for display

        if line_num < lines.len() {
            context.push_str(&format!(
                "{} {:3} | {}\n",
                marker, display_line_num, lines[line_num]
            ));
        }
    }

    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::ast::range::Position;

    #[test]
    fn test_format_source_context() {
        let source = "line 1\nline 2\nline 3\nerror line\nline 5\nline 6\nline 7";
        let range = Range::new(21..31, Position::new(3, 0), Position::new(3, 10));

        let context = format_source_context(source, &range);

        assert!(context.contains("line 2"));
        assert!(context.contains(">> "));
        assert!(context.contains("error line"));
        assert!(context.contains("line 5"));
        assert!(!context.contains("line 7"));
    }

    #[test]
    fn test_format_source_context_at_start() {
        let source = "first\nsecond";
        let range = Range::new(0..5, Position::new(0, 0), Position::new(0, 5));
        let context = format_source_context(source, &range);
        assert!(context.starts_with(">>   1 | first"));
    }

    #[test]
    fn test_display_carries_context() {
        let err = ParseError::UnexpectedLine {
            line_text: "bogus".to_string(),
            location: Range::new(0..5, Position::new(0, 0), Position::new(0, 5)),
            source_context: ">>   1 | bogus\n".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("line 1, column 1: not a seqd statement"));
        assert!(rendered.contains(">>   1 | bogus"));
    }
}
