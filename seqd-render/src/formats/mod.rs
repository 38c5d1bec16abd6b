//! Format implementations
//!
//! One module per output format. Each module exposes a unit struct
//! implementing [`Format`](crate::format::Format); rendering state lives in
//! per-call serializers, never in the format itself.

pub mod ascii;
pub mod json;
pub mod svg;
