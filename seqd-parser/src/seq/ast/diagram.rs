//! The diagram object model
//!
//! A [`Diagram`] is what parsing produces and what layout/rendering consume:
//! actors in left-to-right order plus statements (signals and notes) in
//! source order. The model is serde-serializable; the json output format is
//! a straight dump of these types.

use crate::seq::ast::range::Range;

/// Index of an actor within [`Diagram::actors`].
///
/// Only the diagram builder creates these, so an id taken from a parsed
/// diagram always resolves against that diagram's actor list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ActorId(usize);

impl ActorId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// A participant in the diagram.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Actor {
    /// The key used to reference this actor in signals and notes
    pub name: String,
    /// The text drawn in the actor's box (differs from `name` when declared
    /// with `participant Label as Name`)
    pub label: String,
    /// Position in left-to-right drawing order
    pub id: ActorId,
    /// Whether the actor was declared with a `participant` line
    pub explicit: bool,
    /// Where the actor first appeared
    pub location: Range,
}

/// How a signal's line is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// How a signal's arrowhead is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ArrowHead {
    Filled,
    Open,
}

/// Message text attached to a signal or note.
///
/// The literal two-character sequence `\n` splits the text into multiple
/// drawn lines.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub text: String,
}

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The drawn lines of this message. Empty messages draw no lines.
    pub fn lines(&self) -> Vec<String> {
        if self.text.is_empty() {
            return Vec::new();
        }
        self.text
            .split("\\n")
            .map(|part| part.trim().to_string())
            .collect()
    }
}

/// A message sent from one actor to another (or to itself).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Signal {
    pub from: ActorId,
    pub to: ActorId,
    pub line: LineStyle,
    pub head: ArrowHead,
    pub message: Message,
    pub location: Range,
}

impl Signal {
    /// A signal from an actor to itself, drawn as a loopback.
    pub fn is_self(&self) -> bool {
        self.from == self.to
    }

    /// The source spelling of this signal's arrow.
    pub fn arrow_spelling(&self) -> &'static str {
        match (self.line, self.head) {
            (LineStyle::Solid, ArrowHead::Filled) => "->",
            (LineStyle::Dashed, ArrowHead::Filled) => "-->",
            (LineStyle::Solid, ArrowHead::Open) => "->>",
            (LineStyle::Dashed, ArrowHead::Open) => "-->>",
        }
    }
}

/// Where a note is drawn relative to its actor(s).
///
/// `Over(a, Some(b))` is normalized so that `a` is the leftmost actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum NotePlacement {
    LeftOf(ActorId),
    RightOf(ActorId),
    Over(ActorId, Option<ActorId>),
}

impl NotePlacement {
    /// Collapse `Over(a, Some(a))` into the single-actor form so layout
    /// never has to widen a zero-width actor span.
    pub fn normalized(self) -> NotePlacement {
        match self {
            NotePlacement::Over(a, Some(b)) if a == b => NotePlacement::Over(a, None),
            other => other,
        }
    }
}

/// A free-standing note.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Note {
    pub placement: NotePlacement,
    pub message: Message,
    pub location: Range,
}

/// One drawable statement, in source order.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Statement {
    Signal(Signal),
    Note(Note),
}

/// The parsed diagram: actors in drawing order plus statements in source
/// order.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Diagram {
    pub title: Option<String>,
    pub actors: Vec<Actor>,
    pub statements: Vec<Statement>,
}

impl Diagram {
    /// Resolve an actor id produced while parsing this diagram.
    pub fn actor(&self, id: ActorId) -> &Actor {
        &self.actors[id.index()]
    }

    /// Look up an actor by reference name.
    pub fn find_actor(&self, name: &str) -> Option<ActorId> {
        self.actors.iter().find(|a| a.name == name).map(|a| a.id)
    }
}
