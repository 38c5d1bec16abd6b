//! Testing utilities for diagram assertions
//!
//!     seqd is a small format, but it is easy to write test sources that are
//!     subtly illegal (a missing colon, a keyword used as an actor without
//!     an arrow on the line) and end up testing the wrong thing. Parser
//!     tests therefore follow two rules:
//!
//!         1. Use the verified sources in [samples] wherever a test does not
//!            specifically exercise a malformed input.
//!         2. Assert deep structure with [assert_diagram], not just counts.
//!
//! Example:
//!
//!     ```rust,ignore
//!     let diagram = parse_diagram(samples::HELLO).unwrap();
//!     assert_diagram(&diagram)
//!         .actor_count(2)
//!         .actor(0, "Alice")
//!         .signal(0, |s| s.from("Alice").to("Bob").text("Hello Bob"));
//!     ```

use crate::seq::ast::{ArrowHead, Diagram, LineStyle, Note, NotePlacement, Signal, Statement};

/// Verified seqd sources shared by unit and integration tests.
pub mod samples {
    /// Two actors, one exchange.
    pub const HELLO: &str = "Alice->Bob: Hello Bob\nBob-->Alice: Hi Alice\n";

    /// Every statement form and arrow spelling in one diagram.
    pub const KITCHEN_SINK: &str = "\
title: Authentication

participant \"Auth Service\" as S
participant Alice

# handshake
Alice->Bob: Hello Bob
Bob-->Alice: Hi Alice
Alice->>S: token?
S-->>Alice: granted\\nfor one hour
note over Alice,Bob: greeting exchanged
note right of S: validates token
note left of Alice: thinking
S->S: rotate keys
";

    /// Self-signal only.
    pub const SELF_SIGNAL: &str = "A->A: think\n";

    /// Explicit declarations fixing the actor order before any signal.
    pub const DECLARED_ORDER: &str = "\
participant Bob
participant Alice
Alice->Bob: hi
";
}

/// Entry point for fluent diagram assertions.
pub fn assert_diagram(diagram: &Diagram) -> DiagramAssert<'_> {
    DiagramAssert { diagram }
}

pub struct DiagramAssert<'a> {
    diagram: &'a Diagram,
}

impl<'a> DiagramAssert<'a> {
    pub fn title(self, expected: &str) -> Self {
        assert_eq!(self.diagram.title.as_deref(), Some(expected), "diagram title");
        self
    }

    pub fn no_title(self) -> Self {
        assert_eq!(self.diagram.title, None, "diagram should have no title");
        self
    }

    pub fn actor_count(self, expected: usize) -> Self {
        assert_eq!(self.diagram.actors.len(), expected, "actor count");
        self
    }

    /// Assert the actor at drawing position `index` has reference name `name`.
    pub fn actor(self, index: usize, name: &str) -> Self {
        let actor = self
            .diagram
            .actors
            .get(index)
            .unwrap_or_else(|| panic!("no actor at index {}", index));
        assert_eq!(actor.name, name, "actor name at index {}", index);
        self
    }

    pub fn actor_label(self, index: usize, label: &str) -> Self {
        let actor = self
            .diagram
            .actors
            .get(index)
            .unwrap_or_else(|| panic!("no actor at index {}", index));
        assert_eq!(actor.label, label, "actor label at index {}", index);
        self
    }

    pub fn statement_count(self, expected: usize) -> Self {
        assert_eq!(self.diagram.statements.len(), expected, "statement count");
        self
    }

    /// Assert statement `index` is a signal and run nested assertions on it.
    pub fn signal(self, index: usize, check: impl FnOnce(SignalAssert<'_>)) -> Self {
        match self.diagram.statements.get(index) {
            Some(Statement::Signal(signal)) => check(SignalAssert {
                diagram: self.diagram,
                signal,
            }),
            Some(other) => panic!("statement {} is not a signal: {:?}", index, other),
            None => panic!("no statement at index {}", index),
        }
        self
    }

    /// Assert statement `index` is a note and run nested assertions on it.
    pub fn note(self, index: usize, check: impl FnOnce(NoteAssert<'_>)) -> Self {
        match self.diagram.statements.get(index) {
            Some(Statement::Note(note)) => check(NoteAssert {
                diagram: self.diagram,
                note,
            }),
            Some(other) => panic!("statement {} is not a note: {:?}", index, other),
            None => panic!("no statement at index {}", index),
        }
        self
    }
}

pub struct SignalAssert<'a> {
    diagram: &'a Diagram,
    signal: &'a Signal,
}

impl<'a> SignalAssert<'a> {
    pub fn from(self, name: &str) -> Self {
        assert_eq!(self.diagram.actor(self.signal.from).name, name, "signal from");
        self
    }

    pub fn to(self, name: &str) -> Self {
        assert_eq!(self.diagram.actor(self.signal.to).name, name, "signal to");
        self
    }

    pub fn text(self, expected: &str) -> Self {
        assert_eq!(self.signal.message.text, expected, "signal message");
        self
    }

    pub fn arrow(self, line: LineStyle, head: ArrowHead) -> Self {
        assert_eq!(self.signal.line, line, "signal line style");
        assert_eq!(self.signal.head, head, "signal arrow head");
        self
    }

    pub fn self_signal(self) -> Self {
        assert!(self.signal.is_self(), "expected a self signal");
        self
    }
}

pub struct NoteAssert<'a> {
    diagram: &'a Diagram,
    note: &'a Note,
}

impl<'a> NoteAssert<'a> {
    pub fn text(self, expected: &str) -> Self {
        assert_eq!(self.note.message.text, expected, "note message");
        self
    }

    pub fn left_of(self, name: &str) -> Self {
        match self.note.placement {
            NotePlacement::LeftOf(a) => assert_eq!(self.diagram.actor(a).name, name),
            other => panic!("expected left-of placement, got {:?}", other),
        }
        self
    }

    pub fn right_of(self, name: &str) -> Self {
        match self.note.placement {
            NotePlacement::RightOf(a) => assert_eq!(self.diagram.actor(a).name, name),
            other => panic!("expected right-of placement, got {:?}", other),
        }
        self
    }

    pub fn over_one(self, name: &str) -> Self {
        match self.note.placement {
            NotePlacement::Over(a, None) => assert_eq!(self.diagram.actor(a).name, name),
            other => panic!("expected over-one placement, got {:?}", other),
        }
        self
    }

    pub fn over_pair(self, left: &str, right: &str) -> Self {
        match self.note.placement {
            NotePlacement::Over(a, Some(b)) => {
                assert_eq!(self.diagram.actor(a).name, left, "leftmost over actor");
                assert_eq!(self.diagram.actor(b).name, right, "rightmost over actor");
            }
            other => panic!("expected over-pair placement, got {:?}", other),
        }
        self
    }
}
