//! Visual styling shared by pixel-space formats
//!
//! A [`Theme`] is the full set of colors, fonts and stroke widths a format
//! needs. Formats that have no notion of color (ascii, json) ignore it.

/// Colors, fonts and stroke widths for drawing a diagram.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Font family for all diagram text
    pub font_family: String,
    /// Font size in pixels for signal and note text
    pub font_size: f64,
    /// Font size in pixels for the diagram title
    pub title_font_size: f64,
    /// Stroke color for lines, arrows and box borders
    pub stroke: String,
    /// Stroke width in pixels
    pub stroke_width: f64,
    /// Fill color for actor boxes
    pub actor_fill: String,
    /// Fill color for note boxes
    pub note_fill: String,
    /// Color for all diagram text
    pub text_color: String,
    /// Background color behind the whole diagram
    pub background: String,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            font_family: "Helvetica, Arial, sans-serif".to_string(),
            font_size: 14.0,
            title_font_size: 18.0,
            stroke: "#000000".to_string(),
            stroke_width: 2.0,
            actor_fill: "#ffffff".to_string(),
            note_fill: "#fff5ad".to_string(),
            text_color: "#000000".to_string(),
            background: "#ffffff".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_theme_deserializes_over_defaults() {
        let theme: Theme = serde_json::from_str(r##"{"stroke": "#333333"}"##).unwrap();
        assert_eq!(theme.stroke, "#333333");
        assert_eq!(theme.font_size, Theme::default().font_size);
    }
}
