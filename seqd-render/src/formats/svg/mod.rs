//! SVG format implementation
//!
//! The primary output format. Consumes the shared layout pass and draws
//! every element with plain SVG shapes, so the output is a standalone
//! `.svg` file with no script or external resources.
//!
//! | Diagram element | SVG shapes |
//! |-----------------|------------|
//! | Title | `<text>` centered over the drawing |
//! | Actor | `<rect>` + `<text>` at top and bottom, dashed `<line>` lifeline |
//! | Signal | `<line>` with a marker arrowhead, `<text>` above |
//! | Self-signal | `<polyline>` loopback, `<text>` beside it |
//! | Note | `<rect>` + `<text>` |
//!
//! Arrowheads are `<marker>` defs referenced with `marker-end`, one filled
//! and one open, matching the `->` / `->>` head distinction.

mod serializer;

use crate::error::FormatError;
use crate::format::{Format, RenderOptions};
use seqd_parser::Diagram;

/// Standalone SVG output.
pub struct SvgFormat;

impl Format for SvgFormat {
    fn name(&self) -> &str {
        "svg"
    }

    fn description(&self) -> &str {
        "Standalone SVG drawing"
    }

    fn extension(&self) -> &str {
        "svg"
    }

    fn render(&self, diagram: &Diagram, options: &RenderOptions) -> Result<String, FormatError> {
        serializer::serialize_to_svg(diagram, options)
    }
}
