//! JSON format implementation
//!
//! The diagram model dumped verbatim for downstream tooling. Nothing
//! geometric happens here; consumers that want coordinates run their own
//! layout or read the svg output.

use crate::error::FormatError;
use crate::format::{Format, RenderOptions};
use seqd_parser::Diagram;

/// Pretty-printed JSON dump of the diagram model.
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Diagram model as JSON"
    }

    fn extension(&self) -> &str {
        "json"
    }

    fn render(&self, diagram: &Diagram, _options: &RenderOptions) -> Result<String, FormatError> {
        serde_json::to_string_pretty(diagram)
            .map_err(|err| FormatError::RenderFailed(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqd_parser::parse_diagram;

    #[test]
    fn test_json_format_name() {
        assert_eq!(JsonFormat.name(), "json");
        assert_eq!(JsonFormat.extension(), "json");
    }

    #[test]
    fn test_output_parses_back_as_json() {
        let diagram = parse_diagram("title: T\nAlice->Bob: hi").unwrap();
        let output = JsonFormat
            .render(&diagram, &RenderOptions::default())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["title"], "T");
        assert_eq!(value["actors"][0]["name"], "Alice");
        assert_eq!(value["actors"][1]["name"], "Bob");
    }

    #[test]
    fn test_round_trips_through_model() {
        let diagram = parse_diagram("A->B: x\nnote over A: n").unwrap();
        let output = JsonFormat
            .render(&diagram, &RenderOptions::default())
            .unwrap();
        let restored: Diagram = serde_json::from_str(&output).unwrap();
        assert_eq!(restored, diagram);
    }
}
