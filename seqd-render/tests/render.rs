//! End-to-end rendering tests: source text in, formatted output out.

use proptest::prelude::*;
use rstest::rstest;
use seqd_parser::parse_diagram;
use seqd_render::{default_registry, layout_diagram, LayoutConfig, RenderOptions, Theme};

const AUTH_FLOW: &str = "\
title: Authentication
participant \"Auth Service\" as S

Alice->S: credentials
S->S: verify
note right of S: audited
S-->>Alice: token
note over Alice,S: session established
";

#[rstest]
#[case("svg")]
#[case("ascii")]
#[case("json")]
fn every_format_renders_the_auth_flow(#[case] format: &str) {
    let diagram = parse_diagram(AUTH_FLOW).unwrap();
    let registry = default_registry();
    let output = registry
        .render(&diagram, format, &RenderOptions::default())
        .unwrap();
    assert!(!output.is_empty());
    assert!(output.contains("Alice"));
}

#[test]
fn unknown_format_is_an_error() {
    let diagram = parse_diagram("A->B: x").unwrap();
    let registry = default_registry();
    let result = registry.render(&diagram, "pdf", &RenderOptions::default());
    assert!(result.is_err());
}

#[test]
fn svg_uses_the_declared_label_not_the_alias() {
    let diagram = parse_diagram(AUTH_FLOW).unwrap();
    let registry = default_registry();
    let svg = registry
        .render(&diagram, "svg", &RenderOptions::default())
        .unwrap();
    assert!(svg.contains(">Auth Service</text>"));
    assert!(!svg.contains(">S</text>"));
}

#[test]
fn layout_respects_custom_spacing() {
    let diagram = parse_diagram("A->B: x").unwrap();
    let theme = Theme::default();
    let tight = layout_diagram(&diagram, &theme, &LayoutConfig::default());
    let config = LayoutConfig {
        actor_margin: 200.0,
        ..LayoutConfig::default()
    };
    let wide = layout_diagram(&diagram, &theme, &config);
    assert!(wide.width > tight.width);
}

fn arbitrary_source() -> impl Strategy<Value = String> {
    let actor = prop_oneof![Just("A"), Just("B"), Just("C")];
    let arrow = prop_oneof![Just("->"), Just("-->"), Just("->>"), Just("-->>")];
    let statement = (actor.clone(), arrow, actor, "[a-z ]{0,12}")
        .prop_map(|(from, arrow, to, text)| format!("{}{}{}: {}", from, arrow, to, text));
    proptest::collection::vec(statement, 1..8).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn layout_is_deterministic(source in arbitrary_source()) {
        let diagram = parse_diagram(&source).unwrap();
        let theme = Theme::default();
        let config = LayoutConfig::default();
        let first = layout_diagram(&diagram, &theme, &config);
        let second = layout_diagram(&diagram, &theme, &config);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn layout_never_goes_negative(source in arbitrary_source()) {
        let diagram = parse_diagram(&source).unwrap();
        let layout = layout_diagram(&diagram, &Theme::default(), &LayoutConfig::default());
        for actor in &layout.actors {
            prop_assert!(actor.top_box.x >= 0.0);
            prop_assert!(actor.top_box.y >= 0.0);
            prop_assert!(actor.lifeline_top < actor.lifeline_bottom);
        }
        prop_assert!(layout.width > 0.0);
        prop_assert!(layout.height > 0.0);
    }

    #[test]
    fn every_format_renders_without_error(source in arbitrary_source()) {
        let diagram = parse_diagram(&source).unwrap();
        let registry = default_registry();
        for format in registry.list_formats() {
            let output = registry.render(&diagram, &format, &RenderOptions::default());
            prop_assert!(output.is_ok());
        }
    }
}
