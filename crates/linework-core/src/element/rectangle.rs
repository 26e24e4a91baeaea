//! Rectangle geometry.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle.
///
/// Width and height may be negative while a draw gesture is in progress;
/// geometry functions normalize via min/max.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Anchor corner (the pointer-down corner of the draw gesture).
    pub origin: Point,
    /// Signed width.
    pub width: f64,
    /// Signed height.
    pub height: f64,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(origin: Point, width: f64, height: f64) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// Get the normalized (positive-extent) bounds.
    pub fn normalized(&self) -> Rect {
        let x1 = self.origin.x + self.width;
        let y1 = self.origin.y + self.height;
        Rect::new(
            self.origin.x.min(x1),
            self.origin.y.min(y1),
            self.origin.x.max(x1),
            self.origin.y.max(y1),
        )
    }

    /// Flip origin and sign so both extents are positive.
    pub fn normalize_in_place(&mut self) {
        if self.width < 0.0 {
            self.origin.x += self.width;
            self.width = -self.width;
        }
        if self.height < 0.0 {
            self.origin.y += self.height;
            self.height = -self.height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_extents_normalize() {
        let rect = Rectangle::new(Point::new(100.0, 100.0), -40.0, -30.0);
        let bounds = rect.normalized();
        assert!((bounds.x0 - 60.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 70.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 100.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_normalize_in_place() {
        let mut rect = Rectangle::new(Point::new(10.0, 10.0), -5.0, 20.0);
        rect.normalize_in_place();
        assert_eq!(rect.origin, Point::new(5.0, 10.0));
        assert!((rect.width - 5.0).abs() < f64::EPSILON);
        assert!((rect.height - 20.0).abs() < f64::EPSILON);
    }
}
