//! Estimated text metrics
//!
//! Rendering happens without a font engine, so text extents are estimated
//! from character counts. The ratios below are tuned for the default
//! Helvetica stack and err on the wide side so text never overflows its
//! box.

/// Average glyph width as a fraction of the font size.
const WIDTH_RATIO: f64 = 0.6;

/// Line height as a fraction of the font size.
const LINE_HEIGHT_RATIO: f64 = 1.4;

/// Estimated extent of a block of text lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
}

impl TextMetrics {
    pub const ZERO: TextMetrics = TextMetrics {
        width: 0.0,
        height: 0.0,
    };
}

/// Estimate the extent of `lines` drawn at `font_size`.
///
/// An empty slice measures zero in both dimensions so empty messages take
/// no vertical space.
pub fn measure(lines: &[String], font_size: f64) -> TextMetrics {
    if lines.is_empty() {
        return TextMetrics::ZERO;
    }
    let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    TextMetrics {
        width: widest as f64 * font_size * WIDTH_RATIO,
        height: lines.len() as f64 * font_size * LINE_HEIGHT_RATIO,
    }
}

/// The height of a single text line at `font_size`.
pub fn line_height(font_size: f64) -> f64 {
    font_size * LINE_HEIGHT_RATIO
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_measures_zero() {
        assert_eq!(measure(&[], 14.0), TextMetrics::ZERO);
    }

    #[test]
    fn test_widest_line_wins() {
        let lines = vec!["ab".to_string(), "abcd".to_string()];
        let metrics = measure(&lines, 10.0);
        assert_eq!(metrics.width, 24.0);
        assert_eq!(metrics.height, 28.0);
    }

    #[test]
    fn test_width_counts_chars_not_bytes() {
        let ascii = measure(&["resume".to_string()], 10.0);
        let accented = measure(&["résumé".to_string()], 10.0);
        assert_eq!(ascii.width, accented.width);
    }
}
