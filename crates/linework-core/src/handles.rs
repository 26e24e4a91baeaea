//! Resize and rotation handle geometry.

use crate::element::{Element, Shape};
use crate::geometry::{bounding_center, bounds};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Side length of a handle's hit box, in scene units.
pub const HANDLE_SIZE: f64 = 8.0;
/// Distance from the bounding center to the rotation handle.
pub const ROTATE_HANDLE_OFFSET: f64 = 30.0;

/// Corner positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Edge positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

/// Type of selection handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleKind {
    /// Corner handle (rectangles and text).
    Corner(Corner),
    /// Edge handle (rectangle edge midpoints, circle cardinal points).
    Edge(Edge),
    /// Endpoint handle for lines/arrows (0 = start, 1 = end).
    Endpoint(usize),
    /// Rotation handle, offset from the bounding center.
    Rotate,
}

/// A handle with its nominal position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    /// Position in scene coordinates.
    pub position: Point,
    /// Handle type.
    pub kind: HandleKind,
}

impl Handle {
    pub fn new(position: Point, kind: HandleKind) -> Self {
        Self { position, kind }
    }

    /// Check a point against this handle's 8x8 hit box.
    pub fn hit_test(&self, point: Point) -> bool {
        (point.x - self.position.x).abs() <= HANDLE_SIZE / 2.0
            && (point.y - self.position.y).abs() <= HANDLE_SIZE / 2.0
    }
}

fn corner_handles(rect: Rect) -> Vec<Handle> {
    vec![
        Handle::new(Point::new(rect.x0, rect.y0), HandleKind::Corner(Corner::TopLeft)),
        Handle::new(Point::new(rect.x1, rect.y0), HandleKind::Corner(Corner::TopRight)),
        Handle::new(Point::new(rect.x0, rect.y1), HandleKind::Corner(Corner::BottomLeft)),
        Handle::new(Point::new(rect.x1, rect.y1), HandleKind::Corner(Corner::BottomRight)),
    ]
}

fn edge_handles(rect: Rect) -> Vec<Handle> {
    let center = rect.center();
    vec![
        Handle::new(Point::new(center.x, rect.y0), HandleKind::Edge(Edge::Top)),
        Handle::new(Point::new(rect.x1, center.y), HandleKind::Edge(Edge::Right)),
        Handle::new(Point::new(center.x, rect.y1), HandleKind::Edge(Edge::Bottom)),
        Handle::new(Point::new(rect.x0, center.y), HandleKind::Edge(Edge::Left)),
    ]
}

/// The rotation handle sits a fixed offset from the bounding center along the
/// element's rotated "up" axis. This is the only handle whose position
/// follows the rotation; all other handle math stays in the unrotated frame.
fn rotate_handle(element: &Element) -> Handle {
    let center = bounding_center(element);
    let theta = element.rotation_degrees.to_radians();
    Handle::new(
        Point::new(
            center.x + ROTATE_HANDLE_OFFSET * theta.sin(),
            center.y - ROTATE_HANDLE_OFFSET * theta.cos(),
        ),
        HandleKind::Rotate,
    )
}

/// Get the manipulation handles for an element.
///
/// Rectangles get 8 box handles, circles 4 cardinal handles, lines/arrows
/// their 2 endpoints, text its 4 bounding-box corners. Freehand strokes have
/// no handles (move only). Box-based elements additionally get the rotation
/// handle.
pub fn handle_positions(element: &Element) -> Vec<Handle> {
    match &element.shape {
        Shape::Rectangle(_) => {
            let rect = bounds(element);
            let mut handles = corner_handles(rect);
            handles.extend(edge_handles(rect));
            handles.push(rotate_handle(element));
            handles
        }
        Shape::Circle(_) => {
            let mut handles = edge_handles(bounds(element));
            handles.push(rotate_handle(element));
            handles
        }
        Shape::Line(_) | Shape::Arrow(_) => {
            let pts = match &element.shape {
                Shape::Line(l) => l.points(),
                Shape::Arrow(a) => a.points(),
                _ => unreachable!(),
            };
            vec![
                Handle::new(pts[0], HandleKind::Endpoint(0)),
                Handle::new(pts[1], HandleKind::Endpoint(1)),
            ]
        }
        Shape::Text(_) => {
            let mut handles = corner_handles(bounds(element));
            handles.push(rotate_handle(element));
            handles
        }
        Shape::Freehand(_) => Vec::new(),
    }
}

/// Find which handle (if any) contains the given point.
pub fn handle_at_position(point: Point, element: &Element) -> Option<HandleKind> {
    handle_positions(element)
        .into_iter()
        .find(|h| h.hit_test(point))
        .map(|h| h.kind)
}
