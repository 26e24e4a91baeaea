//! Pure geometry kernel: hit tests, bounding boxes, containment.
//!
//! All functions here are total and side-effect-free. Two behaviors are
//! load-bearing for the rest of the crate and must not change:
//!
//! - Hit tests operate in the element's unrotated local frame. Rotation
//!   affects rendering and the rotation-handle position only; the resize
//!   logic depends on this.
//! - Line/arrow hit tests measure perpendicular distance to the *infinite*
//!   line through the endpoints, not to the segment.

use crate::element::{Element, Shape, LINE_HEIGHT};
use kurbo::{Point, Rect};

/// Hit tolerance for lines, arrows and freehand strokes, in scene units.
pub const LINE_HIT_THRESHOLD: f64 = 10.0;

/// Bounding box of an element in its unrotated frame.
pub fn bounds(element: &Element) -> Rect {
    match &element.shape {
        Shape::Rectangle(r) => r.normalized(),
        Shape::Circle(c) => c.bounds(),
        Shape::Line(l) => {
            let [a, b] = l.points();
            Rect::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
        }
        Shape::Arrow(a) => {
            let [s, e] = a.points();
            Rect::new(s.x.min(e.x), s.y.min(e.y), s.x.max(e.x), s.y.max(e.y))
        }
        Shape::Text(t) => t.bounds(),
        Shape::Freehand(f) => f.bounds(),
    }
}

/// Center used as the rotation pivot and as the rotation-handle anchor.
pub fn bounding_center(element: &Element) -> Point {
    match &element.shape {
        Shape::Rectangle(r) => r.normalized().center(),
        Shape::Circle(c) => c.center,
        Shape::Line(l) => l.midpoint(),
        Shape::Arrow(a) => a.midpoint(),
        // Text centers on the first line's baseline box; multi-line text
        // keeps the single-line formula.
        Shape::Text(t) => Point::new(
            t.origin.x + t.approx_width() / 2.0,
            t.origin.y - LINE_HEIGHT / 2.0,
        ),
        Shape::Freehand(f) => f.bounds().center(),
    }
}

/// Perpendicular distance from a point to the infinite line through `a`/`b`.
/// Degenerates to point distance when `a == b`.
pub fn distance_to_infinite_line(point: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq < f64::EPSILON {
        let px = point.x - a.x;
        let py = point.y - a.y;
        return (px * px + py * py).sqrt();
    }
    ((point.x - a.x) * dy - (point.y - a.y) * dx).abs() / len_sq.sqrt()
}

/// Distance from a point to a segment (a-b).
fn distance_to_segment(point: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq < f64::EPSILON {
        let px = point.x - a.x;
        let py = point.y - a.y;
        return (px * px + py * py).sqrt();
    }
    let t = (((point.x - a.x) * dx + (point.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    let proj = Point::new(a.x + t * dx, a.y + t * dy);
    ((point.x - proj.x).powi(2) + (point.y - proj.y).powi(2)).sqrt()
}

/// Check whether a point (in scene coordinates) hits an element.
pub fn hit_test(point: Point, element: &Element) -> bool {
    match &element.shape {
        Shape::Rectangle(r) => r.normalized().contains(point),
        Shape::Circle(c) => c.contains(point),
        Shape::Text(t) => t.bounds().contains(point),
        // Infinite-line distance: a point far beyond an endpoint but within
        // the threshold of the line's extension still counts as a hit.
        Shape::Line(l) => distance_to_infinite_line(point, l.start, l.end) < LINE_HIT_THRESHOLD,
        Shape::Arrow(a) => distance_to_infinite_line(point, a.start, a.end) < LINE_HIT_THRESHOLD,
        Shape::Freehand(f) => {
            if f.points.len() < 2 {
                return f
                    .points
                    .first()
                    .is_some_and(|p| distance_to_segment(point, *p, *p) < LINE_HIT_THRESHOLD);
            }
            f.points
                .windows(2)
                .any(|w| distance_to_segment(point, w[0], w[1]) < LINE_HIT_THRESHOLD)
        }
    }
}

/// Full-containment test against a normalized selection rectangle.
///
/// Rectangles, circles, text and freehand strokes require their whole
/// bounding box inside the rect; lines and arrows require both endpoints
/// inside (not mere intersection).
pub fn element_in_box(element: &Element, rect: Rect) -> bool {
    match &element.shape {
        Shape::Line(l) => rect.contains(l.start) && rect.contains(l.end),
        Shape::Arrow(a) => rect.contains(a.start) && rect.contains(a.end),
        _ => {
            let b = bounds(element);
            b.x0 >= rect.x0 && b.y0 >= rect.y0 && b.x1 <= rect.x1 && b.y1 <= rect.y1
        }
    }
}
