//! Format trait definition
//!
//! The core trait every output format implements. Formats are render-only:
//! seqd source is the single input format and has its own parser crate.

use crate::error::FormatError;
use crate::layout::LayoutConfig;
use crate::theme::Theme;
use seqd_parser::Diagram;

/// Options shared by every render call.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub theme: Theme,
    pub layout: LayoutConfig,
}

/// Trait for diagram output formats
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn extension(&self) -> &str {
///         "myf"
///     }
///
///     fn render(&self, diagram: &Diagram, options: &RenderOptions) -> Result<String, FormatError> {
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "svg", "ascii", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// The conventional file extension for this format's output
    fn extension(&self) -> &str;

    /// Render a diagram into this format
    fn render(&self, diagram: &Diagram, options: &RenderOptions) -> Result<String, FormatError>;
}

impl std::fmt::Debug for dyn Format + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Format").field("name", &self.name()).finish()
    }
}
