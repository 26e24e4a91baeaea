//! Arrow geometry.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Length of the arrowhead barbs.
pub const HEAD_LENGTH: f64 = 12.0;
/// Half-angle of the arrowhead, in radians.
pub const HEAD_ANGLE: f64 = std::f64::consts::PI / 7.0;

/// An arrow: a line segment with a head at the end point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arrow {
    /// Start point (tail).
    pub start: Point,
    /// End point (head).
    pub end: Point,
}

impl Arrow {
    /// Create a new arrow.
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Both endpoints as an array.
    pub fn points(&self) -> [Point; 2] {
        [self.start, self.end]
    }

    /// Midpoint of the shaft.
    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    /// The two barb points of the arrowhead.
    pub fn head_points(&self) -> [Point; 2] {
        let angle = (self.end.y - self.start.y).atan2(self.end.x - self.start.x);
        let barb = |offset: f64| {
            Point::new(
                self.end.x - HEAD_LENGTH * (angle + offset).cos(),
                self.end.y - HEAD_LENGTH * (angle + offset).sin(),
            )
        };
        [barb(HEAD_ANGLE), barb(-HEAD_ANGLE)]
    }
}
