//! Text measurement for the popup label.
//!
//! The core does not rasterize text, so popup sizing works from approximate
//! font metrics. Hosts that need exact badge widths can measure with their
//! own text stack and configure matching ratios.

/// Metrics for a specific font/size combination.
#[derive(Debug, Clone, Copy)]
pub struct TextMetrics {
    /// Font size in pixels
    pub size: f32,
    /// Average glyph width as a ratio of font size
    pub char_width_ratio: f32,
    /// Line height as a ratio of font size
    pub line_height_ratio: f32,
}

impl TextMetrics {
    /// Ratios tuned for the sans fonts section labels are typically set in.
    pub const SANS: TextMetrics = TextMetrics {
        size: 32.0,
        char_width_ratio: 0.6,
        line_height_ratio: 1.2,
    };

    /// Metrics at a specific size with the default ratios.
    pub fn new(size: f32) -> Self {
        Self {
            size,
            ..Self::SANS
        }
    }

    /// Width of a single-line label, in pixels.
    pub fn label_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.size * self.char_width_ratio
    }

    /// Height of a single-line label, in pixels.
    pub fn label_height(&self) -> f32 {
        self.size * self.line_height_ratio
    }

    /// Measure a label, returning whole-pixel `(width, height)`.
    ///
    /// Section labels are single-line by contract; embedded newlines are not
    /// supported and measure as ordinary characters.
    pub fn measure(&self, text: &str) -> (i32, i32) {
        (
            self.label_width(text).round() as i32,
            self.label_height().round() as i32,
        )
    }
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self::SANS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_width_scales_with_chars() {
        let m = TextMetrics::new(10.0);
        assert_eq!(m.measure("A").0, 6);
        assert_eq!(m.measure("AB").0, 12);
    }

    #[test]
    fn test_empty_label_has_height() {
        let m = TextMetrics::new(10.0);
        let (w, h) = m.measure("");
        assert_eq!(w, 0);
        assert_eq!(h, 12);
    }
}
