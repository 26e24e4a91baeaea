//! Freehand stroke geometry.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A freehand stroke (ordered point sequence, length >= 1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Freehand {
    /// Points in stroke order.
    pub points: Vec<Point>,
}

impl Freehand {
    /// Create a stroke seeded with its first point.
    pub fn new(first: Point) -> Self {
        Self {
            points: vec![first],
        }
    }

    /// Create from existing points.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Append a point to the stroke.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Bounding box of all points.
    pub fn bounds(&self) -> Rect {
        let (min_x, max_x) = self
            .points
            .iter()
            .fold((f64::MAX, f64::MIN), |(mn, mx), p| {
                (mn.min(p.x), mx.max(p.x))
            });
        let (min_y, max_y) = self
            .points
            .iter()
            .fold((f64::MAX, f64::MIN), |(mn, mx), p| {
                (mn.min(p.y), mx.max(p.y))
            });
        Rect::new(min_x, min_y, max_x, max_y)
    }
}
