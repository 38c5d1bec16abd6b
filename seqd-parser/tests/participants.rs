//! Unit tests for participant declarations and the title line

use seqd_parser::seq::testing::{assert_diagram, samples};
use seqd_parser::{parse_diagram, ParseError};

#[test]
fn test_declared_order_wins() {
    let diagram = parse_diagram(samples::DECLARED_ORDER).expect("parses");
    assert_diagram(&diagram)
        .actor_count(2)
        .actor(0, "Bob")
        .actor(1, "Alice");
}

#[test]
fn test_participant_with_alias() {
    let diagram = parse_diagram("participant \"Auth Service\" as S\nA->S: go\n").expect("parses");
    assert_diagram(&diagram)
        .actor(0, "S")
        .actor_label(0, "Auth Service")
        .signal(0, |s| {
            s.from("A").to("S");
        });
}

#[test]
fn test_unquoted_alias_label() {
    let diagram = parse_diagram("participant Bob the Builder as Bob\n").expect("parses");
    assert_diagram(&diagram)
        .actor(0, "Bob")
        .actor_label(0, "Bob the Builder");
}

#[test]
fn test_quoted_label_protects_embedded_as() {
    let diagram = parse_diagram("participant \"Storage as a Service\" as DB\n").expect("parses");
    assert_diagram(&diagram)
        .actor(0, "DB")
        .actor_label(0, "Storage as a Service");
}

#[test]
fn test_declaration_after_reference_upgrades_label() {
    let diagram = parse_diagram("A->S: go\nparticipant \"Auth Service\" as S\n").expect("parses");
    assert_diagram(&diagram)
        .actor_count(2)
        .actor(0, "A")
        .actor(1, "S")
        .actor_label(1, "Auth Service");
}

#[test]
fn test_duplicate_explicit_declaration_is_an_error() {
    let err = parse_diagram("participant A\nparticipant A\n").unwrap_err();
    assert!(matches!(
        *err,
        ParseError::DuplicateParticipant { ref name, .. } if name == "A"
    ));
}

#[test]
fn test_participant_without_name_is_an_error() {
    let err = parse_diagram("participant\n").unwrap_err();
    assert!(matches!(*err, ParseError::EmptyActorName { .. }));
}

#[test]
fn test_title() {
    let diagram = parse_diagram("title: Authentication Flow\nA->B: x\n").expect("parses");
    assert_diagram(&diagram).title("Authentication Flow");
}

#[test]
fn test_title_text_may_contain_arrows() {
    let diagram = parse_diagram("title: A->B flow\n").expect("parses");
    assert_diagram(&diagram).title("A->B flow");
}

#[test]
fn test_title_spacing_variants() {
    let diagram = parse_diagram("title :   spaced out   \n").expect("parses");
    assert_diagram(&diagram).title("spaced out");
}

#[test]
fn test_empty_title_is_no_title() {
    let diagram = parse_diagram("title:\nA->B: x\n").expect("parses");
    assert_diagram(&diagram).no_title();
}

#[test]
fn test_later_title_wins() {
    let diagram = parse_diagram("title: one\ntitle: two\n").expect("parses");
    assert_diagram(&diagram).title("two");
}

#[test]
fn test_kitchen_sink_shape() {
    let diagram = parse_diagram(samples::KITCHEN_SINK).expect("kitchen sink parses");
    assert_diagram(&diagram)
        .title("Authentication")
        .actor_count(3)
        .actor(0, "S")
        .actor_label(0, "Auth Service")
        .actor(1, "Alice")
        .actor(2, "Bob")
        .statement_count(8)
        .signal(3, |s| {
            s.from("S").to("Alice").text("granted\\nfor one hour");
        })
        .note(4, |n| {
            n.over_pair("Alice", "Bob");
        })
        .signal(7, |s| {
            s.self_signal();
        });
}
