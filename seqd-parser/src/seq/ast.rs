//! The seqd diagram model and its supporting types.
//!
//! - [diagram] - Diagram / Actor / Signal / Note object graph
//! - [range] - byte-span and line:column location tracking
//! - [error] - parse diagnostics with source excerpts

pub mod diagram;
pub mod error;
pub mod range;

pub use diagram::{
    Actor, ActorId, ArrowHead, Diagram, LineStyle, Message, Note, NotePlacement, Signal, Statement,
};
pub use error::{ParseError, ParseResult};
pub use range::{Position, Range, SourceLocation};
