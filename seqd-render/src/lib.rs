//! Output formats for seqd diagrams
//!
//!     This crate turns a parsed [`Diagram`](seqd_parser::Diagram) into
//!     deliverable output. It is a pure lib: it powers seqd-cli but is shell
//!     agnostic, so no code here may print, read env vars or otherwise
//!     assume a shell environment.
//!
//! Architecture
//!
//!     - Format trait: uniform interface for all output formats
//!     - FormatRegistry: centralized discovery and selection of formats
//!     - layout: the shared geometric pass (actors → columns, statements →
//!       rows) that pixel-space formats consume
//!     - Format implementations: one module per format under formats/
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── theme.rs                # colors, fonts, stroke widths
//!     ├── layout.rs               # geometric layout pass
//!     ├── formats
//!     │   ├── svg                 # primary output
//!     │   ├── ascii               # terminal preview
//!     │   └── json                # model dump for tooling
//!     └── lib.rs
//!
//! Format Selection
//!
//!     SVG is the table-stakes output: the format is a drawing language and
//!     a diagram you cannot see is useless. The ascii format exists because
//!     seqd sources are written in terminals and a preview without a
//!     browser round-trip is worth a lot. The json format is the diagram
//!     model verbatim, for anything downstream that wants structure rather
//!     than pictures.

pub mod error;
pub mod format;
pub mod formats;
pub mod layout;
pub mod registry;
pub mod theme;

pub use error::FormatError;
pub use format::{Format, RenderOptions};
pub use layout::{layout_diagram, DiagramLayout, LayoutConfig};
pub use registry::FormatRegistry;
pub use theme::Theme;

/// Build the registry with every built-in format registered.
pub fn default_registry() -> FormatRegistry {
    let mut registry = FormatRegistry::new();
    registry.register(formats::svg::SvgFormat);
    registry.register(formats::ascii::AsciiFormat);
    registry.register(formats::json::JsonFormat);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_has_builtin_formats() {
        let registry = default_registry();
        assert_eq!(registry.list_formats(), vec!["ascii", "json", "svg"]);
    }
}
