//! Parser
//!
//!     The parser walks classified lines in order and dispatches each to the
//!     parse routine for its shape. Classification has already decided what
//!     every line is, so each routine only extracts: it locates structural
//!     tokens (arrow, colon, keywords) by token kind and slices actor names
//!     and message text straight out of the source via the preserved byte
//!     spans. This keeps the routines small and keeps extraction exact even
//!     when names are quoted or messages contain arrows and colons.
//!
//!     Actor bookkeeping lives in [`DiagramBuilder`]: actors are registered
//!     in order of first appearance, explicit `participant` declarations
//!     first claim their slot, and later references reuse it.

pub mod builder;
pub mod lines;

pub use builder::DiagramBuilder;

use crate::seq::ast::error::{format_source_context, ParseError, ParseResult};
use crate::seq::ast::range::SourceLocation;
use crate::seq::ast::Diagram;
use crate::seq::lexing;
use crate::seq::token::LineType;

/// Parse seqd source text into a [`Diagram`].
///
/// This is the main entry point: it normalizes line endings, runs the lexing
/// pipeline, and parses every statement line. The first malformed line
/// aborts the parse with a located, self-describing error.
pub fn parse_diagram(source: &str) -> ParseResult<Diagram> {
    let normalized = lexing::normalize_line_endings(source);
    let prepared = lexing::ensure_source_ends_with_newline(&normalized);
    let line_tokens = lexing::lex(&prepared);
    let locations = SourceLocation::new(&prepared);

    let mut builder = DiagramBuilder::new();
    for line in &line_tokens {
        match line.line_type {
            LineType::BlankLine | LineType::CommentLine => continue,
            LineType::TitleLine => {
                lines::parse_title_line(line, &prepared, &locations, &mut builder)?
            }
            LineType::ParticipantLine => {
                lines::parse_participant_line(line, &prepared, &locations, &mut builder)?
            }
            LineType::SignalLine => {
                lines::parse_signal_line(line, &prepared, &locations, &mut builder)?
            }
            LineType::NoteLine => {
                lines::parse_note_line(line, &prepared, &locations, &mut builder)?
            }
            LineType::UnknownLine => {
                let location = locations.byte_range_to_ast_range(&line.span());
                return Err(Box::new(ParseError::UnexpectedLine {
                    line_text: line.text(&prepared).to_string(),
                    source_context: format_source_context(&prepared, &location),
                    location,
                }));
            }
        }
    }

    Ok(builder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::testing::{assert_diagram, samples};

    #[test]
    fn test_hello_sample() {
        let diagram = parse_diagram(samples::HELLO).expect("hello sample parses");
        assert_diagram(&diagram)
            .actor_count(2)
            .actor(0, "Alice")
            .actor(1, "Bob")
            .statement_count(2);
    }

    #[test]
    fn test_unknown_line_is_an_error() {
        let err = parse_diagram("Alice->Bob: hi\nnot a statement\n").unwrap_err();
        match *err {
            ParseError::UnexpectedLine { ref line_text, ref location, .. } => {
                assert_eq!(line_text, "not a statement");
                assert_eq!(location.start.line, 1);
            }
            other => panic!("expected UnexpectedLine, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_source_is_an_empty_diagram() {
        let diagram = parse_diagram("").expect("empty source parses");
        assert!(diagram.actors.is_empty());
        assert!(diagram.statements.is_empty());
        assert!(diagram.title.is_none());
    }
}
