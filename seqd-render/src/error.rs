//! Error types for format operations

use std::fmt;

/// Errors that can occur during format selection and rendering
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Requested format is not registered
    FormatNotFound(String),
    /// Format exists but cannot perform the requested operation
    NotSupported(String),
    /// Rendering failed
    RenderFailed(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format not found: {}", name),
            FormatError::NotSupported(msg) => write!(f, "Operation not supported: {}", msg),
            FormatError::RenderFailed(msg) => write!(f, "Rendering failed: {}", msg),
        }
    }
}

impl std::error::Error for FormatError {}
