//! Format registry for format discovery and selection

use crate::error::FormatError;
use crate::format::{Format, RenderOptions};
use seqd_parser::Diagram;
use std::collections::HashMap;

/// Registry of output formats
///
/// Provides a centralized registry for all available formats. Formats can
/// be registered and retrieved by name.
///
/// # Examples
///
/// ```ignore
/// let mut registry = FormatRegistry::new();
/// registry.register(SvgFormat);
///
/// let output = registry.render(&diagram, "svg", &RenderOptions::default())?;
/// ```
#[derive(Default)]
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Render a diagram using the named format
    pub fn render(
        &self,
        diagram: &Diagram,
        format: &str,
        options: &RenderOptions,
    ) -> Result<String, FormatError> {
        self.get(format)?.render(diagram, options)
    }
}
