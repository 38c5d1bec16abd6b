//! Unit tests for isolated note statements

use rstest::rstest;
use seqd_parser::seq::testing::assert_diagram;
use seqd_parser::{parse_diagram, ParseError};

#[rstest]
#[case("note left of A: waiting")]
#[case("Note Left Of A: waiting")]
#[case("NOTE LEFT OF A: waiting")]
fn test_left_of_case_insensitive(#[case] source: &str) {
    let diagram = parse_diagram(source).expect("note parses");
    assert_diagram(&diagram).note(0, |n| {
        n.left_of("A").text("waiting");
    });
}

#[test]
fn test_right_of() {
    let diagram = parse_diagram("note right of A: checking\n").expect("parses");
    assert_diagram(&diagram).note(0, |n| {
        n.right_of("A").text("checking");
    });
}

#[test]
fn test_over_single() {
    let diagram = parse_diagram("note over A: hmm\n").expect("parses");
    assert_diagram(&diagram).note(0, |n| {
        n.over_one("A").text("hmm");
    });
}

#[test]
fn test_over_pair() {
    let diagram = parse_diagram("A->B: x\nnote over A,B: both\n").expect("parses");
    assert_diagram(&diagram).note(1, |n| {
        n.over_pair("A", "B").text("both");
    });
}

#[test]
fn test_over_pair_normalizes_order() {
    // B appears first in the note but is the rightmost actor
    let diagram = parse_diagram("A->B: x\nnote over B,A: both\n").expect("parses");
    assert_diagram(&diagram).note(1, |n| {
        n.over_pair("A", "B");
    });
}

#[test]
fn test_over_same_actor_twice_collapses_to_single() {
    let diagram = parse_diagram("A->B: x\nnote over A,A: once\n").expect("parses");
    assert_diagram(&diagram).note(1, |n| {
        n.over_one("A").text("once");
    });
}

#[test]
fn test_note_registers_unknown_actors() {
    let diagram = parse_diagram("note over Carol: alone\n").expect("parses");
    assert_diagram(&diagram).actor_count(1).actor(0, "Carol");
}

#[test]
fn test_quoted_actor_with_comma_does_not_split() {
    let diagram = parse_diagram("note over \"Dept. A, B\": shared\n").expect("parses");
    assert_diagram(&diagram)
        .actor_count(1)
        .actor(0, "Dept. A, B")
        .note(0, |n| {
            n.over_one("Dept. A, B");
        });
}

#[test]
fn test_note_message_keeps_keywords() {
    let diagram = parse_diagram("note over A: note over B is over\n").expect("parses");
    assert_diagram(&diagram).actor_count(1).note(0, |n| {
        n.text("note over B is over");
    });
}

#[test]
fn test_note_message_keeps_arrows() {
    let diagram = parse_diagram("note over Alice: then Alice->Bob\n").expect("parses");
    assert_diagram(&diagram).actor_count(1).note(0, |n| {
        n.over_one("Alice").text("then Alice->Bob");
    });
}

#[test]
fn test_note_without_colon_is_an_error() {
    let err = parse_diagram("note over A\n").unwrap_err();
    assert!(matches!(
        *err,
        ParseError::MissingMessageSeparator { statement: "note", .. }
    ));
}

#[test]
fn test_over_three_actors_is_an_error() {
    let err = parse_diagram("note over A,B,C: too many\n").unwrap_err();
    assert!(matches!(
        *err,
        ParseError::BadNoteActorCount { placement: "over", count: 3, .. }
    ));
}

#[test]
fn test_left_of_two_actors_is_an_error() {
    let err = parse_diagram("note left of A,B: nope\n").unwrap_err();
    assert!(matches!(
        *err,
        ParseError::BadNoteActorCount { placement: "left of", count: 2, .. }
    ));
}

#[test]
fn test_over_with_empty_segment_is_an_error() {
    let err = parse_diagram("note over A,: nope\n").unwrap_err();
    assert!(matches!(*err, ParseError::EmptyActorName { .. }));
}

#[test]
fn test_bad_placement_word_is_unknown_line() {
    let err = parse_diagram("note beside A: nope\n").unwrap_err();
    assert!(matches!(*err, ParseError::UnexpectedLine { .. }));
}
