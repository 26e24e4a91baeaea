//! Text geometry.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Fixed-width character approximation, in scene units. Hit-testing and
/// handle placement use this instead of real text metrics, keeping all
/// geometry independent of font rendering.
pub const CHAR_WIDTH: f64 = 8.0;
/// Line height of the fixed-width approximation.
pub const LINE_HEIGHT: f64 = 16.0;

/// A text element anchored at the baseline origin of its first line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// Anchor point (left end of the first line's baseline).
    pub origin: Point,
    /// Text content (possibly empty).
    pub content: String,
}

impl Text {
    /// Create a new text element.
    pub fn new(origin: Point, content: String) -> Self {
        Self { origin, content }
    }

    /// Approximate width: widest line times the fixed character width.
    pub fn approx_width(&self) -> f64 {
        let max_line_len = self
            .content
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        max_line_len as f64 * CHAR_WIDTH
    }

    /// Approximate height: line count times the fixed line height.
    /// Empty content still occupies one line.
    pub fn approx_height(&self) -> f64 {
        self.content.lines().count().max(1) as f64 * LINE_HEIGHT
    }

    /// Approximate bounding box. The first line extends upward from the
    /// origin, since the origin anchors the first line's baseline.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.origin.x,
            self.origin.y - LINE_HEIGHT,
            self.origin.x + self.approx_width(),
            self.origin.y - LINE_HEIGHT + self.approx_height(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_metrics() {
        let text = Text::new(Point::ZERO, "hello".to_string());
        assert!((text.approx_width() - 40.0).abs() < f64::EPSILON);
        assert!((text.approx_height() - 16.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_multiline_uses_widest_line() {
        let text = Text::new(Point::ZERO, "ab\nlonger".to_string());
        assert!((text.approx_width() - 48.0).abs() < f64::EPSILON);
        assert!((text.approx_height() - 32.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_text_occupies_one_line() {
        let text = Text::new(Point::ZERO, String::new());
        assert!((text.approx_height() - LINE_HEIGHT).abs() < f64::EPSILON);
        assert!(text.approx_width().abs() < f64::EPSILON);
    }

    #[test]
    fn test_bounds_extend_above_origin() {
        let text = Text::new(Point::new(10.0, 100.0), "hi".to_string());
        let bounds = text.bounds();
        assert!((bounds.y0 - 84.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 100.0).abs() < f64::EPSILON);
    }
}
