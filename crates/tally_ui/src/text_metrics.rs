//! Text measurement utilities.
//!
//! Provides functions for estimating text dimensions based on font metrics.
//! These are approximations used during widget layout; actual glyph
//! rendering is done by the renderer's text pass.

use crate::constants::{CHAR_WIDTH_FACTOR, LINE_HEIGHT_FACTOR, WIDE_CHAR_WIDTH_FACTOR};
use crate::layout::Size;

/// Metrics for a specific font size.
#[derive(Debug, Clone, Copy)]
pub struct TextMetrics {
    /// Font size in pixels
    pub size: f32,
}

impl TextMetrics {
    /// Create metrics for a specific font size.
    pub fn new(size: f32) -> Self {
        Self { size }
    }

    /// Estimate the width of a single line of text.
    ///
    /// Full-width characters (CJK) count at roughly the full font size,
    /// everything else at the proportional-font average.
    pub fn line_width(&self, text: &str) -> f32 {
        text.chars()
            .map(|c| {
                if is_wide(c) {
                    self.size * WIDE_CHAR_WIDTH_FACTOR
                } else {
                    self.size * CHAR_WIDTH_FACTOR
                }
            })
            .sum()
    }

    /// Get the line height.
    pub fn line_height(&self) -> f32 {
        self.size * LINE_HEIGHT_FACTOR
    }

    /// Estimate dimensions for (possibly multi-line) text.
    pub fn measure(&self, text: &str) -> Size {
        let lines: Vec<&str> = text.lines().collect();

        // An empty string still occupies one line.
        let line_count = lines.len().max(1);

        let width = lines
            .iter()
            .map(|line| self.line_width(line))
            .fold(0.0f32, |max, w| max.max(w));

        Size::new(width, line_count as f32 * self.line_height())
    }
}

/// Whether a character occupies a full-width cell.
///
/// Covers the CJK ranges this UI actually renders; not a full Unicode
/// east-asian-width implementation.
fn is_wide(c: char) -> bool {
    matches!(c,
        '\u{1100}'..='\u{115F}' // Hangul Jamo
        | '\u{2E80}'..='\u{A4CF}' // CJK radicals, kana, CJK unified
        | '\u{AC00}'..='\u{D7A3}' // Hangul syllables
        | '\u{F900}'..='\u{FAFF}' // CJK compatibility ideographs
        | '\u{FF00}'..='\u{FF60}' // Fullwidth forms
        | '\u{FFE0}'..='\u{FFE6}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_width_ascii() {
        let m = TextMetrics::new(16.0);
        // 5 chars * 16.0 * 0.6 = 48.0
        assert!((m.line_width("hello") - 48.0).abs() < 0.01);
    }

    #[test]
    fn test_line_width_cjk() {
        let m = TextMetrics::new(16.0);
        // 3 full-width chars * 16.0 * 1.0 = 48.0
        assert!((m.line_width("へぇ満") - 48.0).abs() < 0.01);
    }

    #[test]
    fn test_line_width_mixed() {
        let m = TextMetrics::new(10.0);
        // "20" narrow (2 * 6.0) + "へぇ～" wide (3 * 10.0)
        assert!((m.line_width("20へぇ～") - 42.0).abs() < 0.01);
    }

    #[test]
    fn test_line_height() {
        let m = TextMetrics::new(16.0);
        assert!((m.line_height() - 19.2).abs() < 0.01);
    }

    #[test]
    fn test_empty_text_is_one_line() {
        let m = TextMetrics::new(16.0);
        let size = m.measure("");
        assert_eq!(size.width, 0.0);
        assert!((size.height - 19.2).abs() < 0.01);
    }

    #[test]
    fn test_multiline_measure() {
        let m = TextMetrics::new(16.0);
        let size = m.measure("hello\nworld!");
        // Width is the widest line: "world!" = 6 chars = 57.6
        assert!((size.width - 57.6).abs() < 0.01);
        assert!((size.height - 38.4).abs() < 0.01);
    }
}
