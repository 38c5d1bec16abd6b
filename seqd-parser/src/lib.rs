//! # seqd-parser
//!
//! A parser for the seqd sequence-diagram format.
//!
//! seqd is a line-oriented mini-language for sequence diagrams:
//!
//! ```text
//! title: Authentication
//!
//! participant "Auth Service" as S
//!
//! Alice->Bob: Hello Bob
//! Bob-->Alice: Hi Alice
//! Alice->>S: token?
//! note over Alice,Bob: greeting exchanged
//! ```
//!
//! The pipeline is the usual one for line-oriented formats: the whole source
//! is tokenized in one pass, tokens are grouped into lines, each line is
//! classified into exactly one statement shape, and each shape has its own
//! small parse routine. The output is a [`Diagram`] with actors registered in
//! order of first appearance and statements in source order.
//!
//! Every token carries its byte range, every model node carries a `Range`,
//! and every [`ParseError`] renders a source excerpt around the offending
//! line. Tooling built on top of the parser relies on this, so location
//! integrity must be preserved through every stage.

pub mod seq;

pub use seq::ast::error::ParseError;
pub use seq::ast::{
    Actor, ActorId, ArrowHead, Diagram, LineStyle, Message, Note, NotePlacement, Signal, Statement,
};
pub use seq::parsing::parse_diagram;
