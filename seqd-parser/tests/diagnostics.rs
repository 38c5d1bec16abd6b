//! Diagnostic quality tests
//!
//! Every parse error must carry a location pointing at the offending line
//! and render a numbered source excerpt with a >> marker.

use seqd_parser::parse_diagram;

#[test]
fn test_error_location_points_at_line() {
    let source = "A->B: ok\nB->A: fine\nbogus line here\nA->B: after\n";
    let err = parse_diagram(source).unwrap_err();
    assert_eq!(err.location().start.line, 2);
}

#[test]
fn test_error_headline_reports_line_and_column() {
    let source = "A->B: ok\nB->A: fine\nbogus line here\nA->B: after\n";
    let err = parse_diagram(source).unwrap_err();
    let rendered = err.to_string();

    // 1-based in the headline, 0-based in the stored location
    assert!(rendered.contains("line 3, column 1"), "rendered: {}", rendered);
    assert_eq!(err.location().start.line, 2);
    assert_eq!(err.location().start.column, 0);
}

#[test]
fn test_error_renders_source_excerpt() {
    let source = "A->B: ok\nB->A: fine\nbogus line here\nA->B: after\n";
    let err = parse_diagram(source).unwrap_err();
    let rendered = err.to_string();

    // 1-based line number in the headline
    assert!(rendered.contains("line 3"), "rendered: {}", rendered);
    // excerpt shows surrounding lines, marks the bad one
    assert!(rendered.contains(">>   3 | bogus line here"), "rendered: {}", rendered);
    assert!(rendered.contains("   2 | B->A: fine"), "rendered: {}", rendered);
    assert!(rendered.contains("   4 | A->B: after"), "rendered: {}", rendered);
}

#[test]
fn test_error_excerpt_windows_long_sources() {
    let mut source = String::new();
    for i in 0..20 {
        source.push_str(&format!("A->B: message {}\n", i));
    }
    source.push_str("!!!\n");
    let err = parse_diagram(&source).unwrap_err();
    let rendered = err.to_string();

    assert!(rendered.contains(">>  21 | !!!"), "rendered: {}", rendered);
    // window is two lines either side, not the whole file
    assert!(!rendered.contains("message 0"), "rendered: {}", rendered);
    assert!(rendered.contains("message 19"), "rendered: {}", rendered);
}

#[test]
fn test_duplicate_participant_names_the_actor() {
    let err = parse_diagram("participant A\nparticipant A\n").unwrap_err();
    let rendered = err.to_string();
    assert!(rendered.contains("\"A\""), "rendered: {}", rendered);
    assert!(rendered.contains("line 2"), "rendered: {}", rendered);
}

#[test]
fn test_missing_separator_says_which_statement() {
    let err = parse_diagram("note over A\n").unwrap_err();
    assert!(err.to_string().contains("note"), "note errors name the statement");

    let err = parse_diagram("A->B\n").unwrap_err();
    assert!(err.to_string().contains("signal"), "signal errors name the statement");
}
