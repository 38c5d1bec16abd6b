//! Per-line parse routines
//!
//! One routine per statement shape. Classification has already matched the
//! shape, so these routines locate the structural tokens (arrow, colon,
//! placement keywords) and slice the in-between text out of the source.
//! Raw-slice extraction is what lets message text contain arrows, colons,
//! quotes and keywords without any escaping.

use crate::seq::ast::error::{format_source_context, ParseError, ParseResult};
use crate::seq::ast::range::{Range, SourceLocation};
use crate::seq::ast::{ArrowHead, LineStyle, Message, Note, NotePlacement, Signal, Statement};
use crate::seq::parsing::builder::DiagramBuilder;
use crate::seq::token::{LineToken, Token};
use std::ops::Range as ByteRange;

/// `title : text`
pub fn parse_title_line(
    line: &LineToken,
    source: &str,
    locations: &SourceLocation,
    builder: &mut DiagramBuilder,
) -> ParseResult<()> {
    let location = line_location(line, locations);
    let colon = line
        .find_token(0, |t| *t == Token::Colon)
        .ok_or_else(|| unexpected(line, source, &location))?;
    let title = text_after(line, source, colon);
    if !title.is_empty() {
        builder.set_title(title);
    }
    Ok(())
}

/// `participant Name` or `participant Label as Name`
pub fn parse_participant_line(
    line: &LineToken,
    source: &str,
    locations: &SourceLocation,
    builder: &mut DiagramBuilder,
) -> ParseResult<()> {
    let location = line_location(line, locations);
    let keyword = first_significant(line, 0).ok_or_else(|| unexpected(line, source, &location))?;
    let end = line.source_tokens.len();

    // The last top-level `as` with text on both sides splits label from
    // name; quoting the label protects an embedded `as`.
    let as_split = (keyword + 1..end)
        .rev()
        .find(|&i| {
            line.source_tokens[i] == Token::Word
                && lexeme(line, source, i).eq_ignore_ascii_case("as")
                && has_significant(line, keyword + 1..i)
                && has_significant(line, i + 1..end)
        });

    let (label, name) = match as_split {
        Some(i) => {
            let label = actor_text(line, source, keyword + 1..i);
            let name = actor_text(line, source, i + 1..end);
            (label, name)
        }
        None => {
            let name = actor_text(line, source, keyword + 1..end);
            (name.clone(), name)
        }
    };

    let (label, name) = match (label, name) {
        (Some(label), Some(name)) => (label, name),
        _ => {
            return Err(Box::new(ParseError::EmptyActorName {
                source_context: format_source_context(source, &location),
                location,
            }))
        }
    };

    if builder.has_explicit(&name) {
        return Err(Box::new(ParseError::DuplicateParticipant {
            name,
            source_context: format_source_context(source, &location),
            location,
        }));
    }

    builder.declare_participant(name, label, location);
    Ok(())
}

/// `From -> To : message` (all four arrow spellings)
pub fn parse_signal_line(
    line: &LineToken,
    source: &str,
    locations: &SourceLocation,
    builder: &mut DiagramBuilder,
) -> ParseResult<()> {
    let location = line_location(line, locations);
    let arrow = line
        .find_token(0, Token::is_arrow)
        .ok_or_else(|| unexpected(line, source, &location))?;

    let (style, head) = match line.source_tokens[arrow] {
        Token::SolidArrow => (LineStyle::Solid, ArrowHead::Filled),
        Token::DashedArrow => (LineStyle::Dashed, ArrowHead::Filled),
        Token::SolidOpenArrow => (LineStyle::Solid, ArrowHead::Open),
        Token::DashedOpenArrow => (LineStyle::Dashed, ArrowHead::Open),
        _ => return Err(unexpected(line, source, &location)),
    };

    let colon = line
        .find_token(arrow + 1, |t| *t == Token::Colon)
        .ok_or_else(|| {
            Box::new(ParseError::MissingMessageSeparator {
                statement: "signal",
                source_context: format_source_context(source, &location),
                location: location.clone(),
            })
        })?;

    let from = require_actor(line, source, 0..arrow, &location)?;
    let to = require_actor(line, source, arrow + 1..colon, &location)?;
    let message = Message::new(text_after(line, source, colon));

    let from = builder.reference_actor(&from, &location);
    let to = builder.reference_actor(&to, &location);
    builder.push_statement(Statement::Signal(Signal {
        from,
        to,
        line: style,
        head,
        message,
        location,
    }));
    Ok(())
}

/// `note left of A: ...` / `note right of A: ...` / `note over A[,B]: ...`
pub fn parse_note_line(
    line: &LineToken,
    source: &str,
    locations: &SourceLocation,
    builder: &mut DiagramBuilder,
) -> ParseResult<()> {
    let location = line_location(line, locations);
    let keyword = first_significant(line, 0).ok_or_else(|| unexpected(line, source, &location))?;
    let side = first_significant(line, keyword + 1)
        .ok_or_else(|| unexpected(line, source, &location))?;

    let (placement_name, actors_from) = match lexeme(line, source, side).to_ascii_lowercase().as_str()
    {
        "over" => ("over", side + 1),
        word @ ("left" | "right") => {
            let of = first_significant(line, side + 1)
                .ok_or_else(|| unexpected(line, source, &location))?;
            let name = if word == "left" { "left of" } else { "right of" };
            (name, of + 1)
        }
        _ => return Err(unexpected(line, source, &location)),
    };

    let colon = line
        .find_token(actors_from, |t| *t == Token::Colon)
        .ok_or_else(|| {
            Box::new(ParseError::MissingMessageSeparator {
                statement: "note",
                source_context: format_source_context(source, &location),
                location: location.clone(),
            })
        })?;

    // Split the actor region on top-level commas. Commas inside quoted
    // names are part of the QuotedName token and never split.
    let mut segments: Vec<ByteRange<usize>> = Vec::new();
    let mut segment_start = actors_from;
    for i in actors_from..colon {
        if line.source_tokens[i] == Token::Comma {
            segments.push(segment_start..i);
            segment_start = i + 1;
        }
    }
    segments.push(segment_start..colon);

    let expected = if placement_name == "over" { 2 } else { 1 };
    if segments.len() > expected {
        return Err(Box::new(ParseError::BadNoteActorCount {
            placement: placement_name,
            count: segments.len(),
            source_context: format_source_context(source, &location),
            location,
        }));
    }

    let mut actors = Vec::new();
    for segment in segments {
        let name = require_actor(line, source, segment, &location)?;
        actors.push(builder.reference_actor(&name, &location));
    }

    let placement = match (placement_name, actors.as_slice()) {
        ("left of", [a]) => NotePlacement::LeftOf(*a),
        ("right of", [a]) => NotePlacement::RightOf(*a),
        ("over", [a]) => NotePlacement::Over(*a, None),
        ("over", [a, b]) => {
            // Normalize so the leftmost actor comes first; `over A,A`
            // collapses into the single-actor form
            let (first, second) = if b.index() < a.index() { (*b, *a) } else { (*a, *b) };
            NotePlacement::Over(first, Some(second)).normalized()
        }
        _ => return Err(unexpected(line, source, &location)),
    };

    let message = Message::new(text_after(line, source, colon));
    builder.push_statement(Statement::Note(Note {
        placement,
        message,
        location,
    }));
    Ok(())
}

/// The whole line as an AST range.
fn line_location(line: &LineToken, locations: &SourceLocation) -> Range {
    locations.byte_range_to_ast_range(&line.span())
}

fn unexpected(line: &LineToken, source: &str, location: &Range) -> Box<ParseError> {
    Box::new(ParseError::UnexpectedLine {
        line_text: line.text(source).to_string(),
        source_context: format_source_context(source, location),
        location: location.clone(),
    })
}

/// Source text of token `i`.
fn lexeme<'s>(line: &LineToken, source: &'s str, i: usize) -> &'s str {
    line.token_spans
        .get(i)
        .and_then(|span| source.get(span.clone()))
        .unwrap_or("")
}

/// Index of the first non-whitespace token at or after `from`.
fn first_significant(line: &LineToken, from: usize) -> Option<usize> {
    line.find_token(from, |t| !t.is_whitespace())
}

fn has_significant(line: &LineToken, range: ByteRange<usize>) -> bool {
    line.source_tokens
        .get(range)
        .map(|tokens| tokens.iter().any(|t| !t.is_whitespace()))
        .unwrap_or(false)
}

/// Raw source text from the end of token `i` to the end of the line, trimmed.
fn text_after(line: &LineToken, source: &str, i: usize) -> String {
    let start = match line.token_spans.get(i) {
        Some(span) => span.end,
        None => return String::new(),
    };
    let end = line.span().end;
    if start >= end {
        return String::new();
    }
    source.get(start..end).unwrap_or("").trim().to_string()
}

/// Actor name from the token range, unquoting a lone quoted name.
fn actor_text(line: &LineToken, source: &str, range: ByteRange<usize>) -> Option<String> {
    let span = line.trimmed_span(range.clone())?;
    let raw = source.get(span)?.trim();
    if raw.is_empty() {
        return None;
    }
    let mut significant = line
        .source_tokens
        .get(range)?
        .iter()
        .filter(|t| !t.is_whitespace());
    let lone_quoted = matches!(
        (significant.next(), significant.next()),
        (Some(Token::QuotedName), None)
    );
    if lone_quoted {
        let unquoted = Token::unquote(raw).trim();
        if unquoted.is_empty() {
            return None;
        }
        return Some(unquoted.to_string());
    }
    Some(raw.to_string())
}

fn require_actor(
    line: &LineToken,
    source: &str,
    range: ByteRange<usize>,
    location: &Range,
) -> ParseResult<String> {
    actor_text(line, source, range).ok_or_else(|| {
        Box::new(ParseError::EmptyActorName {
            source_context: format_source_context(source, location),
            location: location.clone(),
        })
    })
}
