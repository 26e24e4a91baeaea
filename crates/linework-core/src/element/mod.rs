//! Element definitions for the scene model.

mod arrow;
mod circle;
mod freehand;
mod line;
mod rectangle;
mod text;

pub use arrow::Arrow;
pub use circle::Circle;
pub use freehand::Freehand;
pub use line::Line;
pub use rectangle::Rectangle;
pub use text::{Text, CHAR_WIDTH, LINE_HEIGHT};

use kurbo::{Point, Vec2};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for elements.
pub type ElementId = Uuid;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Minimum legal stroke width.
pub const MIN_STROKE_WIDTH: f64 = 1.0;

/// Style properties shared by every element.
///
/// `fill_color: None` is the "transparent" sentinel of the document format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementStyle {
    /// Stroke color.
    pub stroke_color: SerializableColor,
    /// Stroke width (>= 1).
    pub stroke_width: f64,
    /// Fill color (None = transparent).
    pub fill_color: Option<SerializableColor>,
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            stroke_color: SerializableColor::black(),
            stroke_width: 2.0,
            fill_color: None,
        }
    }
}

impl ElementStyle {
    /// Get the stroke color as a peniko Color.
    pub fn stroke(&self) -> Color {
        self.stroke_color.into()
    }

    /// Get the fill color as a peniko Color.
    pub fn fill(&self) -> Option<Color> {
        self.fill_color.map(|c| c.into())
    }
}

/// Discriminant for element variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Rectangle,
    Circle,
    Line,
    Arrow,
    Text,
    Freehand,
}

/// Variant-specific geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
    Line(Line),
    Arrow(Arrow),
    Text(Text),
    Freehand(Freehand),
}

impl Shape {
    pub fn kind(&self) -> ElementKind {
        match self {
            Shape::Rectangle(_) => ElementKind::Rectangle,
            Shape::Circle(_) => ElementKind::Circle,
            Shape::Line(_) => ElementKind::Line,
            Shape::Arrow(_) => ElementKind::Arrow,
            Shape::Text(_) => ElementKind::Text,
            Shape::Freehand(_) => ElementKind::Freehand,
        }
    }
}

/// One drawable scene object.
///
/// Common fields live here; per-variant geometry lives in [`Shape`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub(crate) id: ElementId,
    /// Variant geometry.
    pub shape: Shape,
    /// Stroke/fill style.
    pub style: ElementStyle,
    /// Rotation around the bounding center, in degrees.
    #[serde(default)]
    pub rotation_degrees: f64,
    /// Selection flag (part of the scene, round-trips through the document).
    #[serde(default)]
    pub selected: bool,
}

impl Element {
    /// Create a new element with a fresh id.
    pub fn new(shape: Shape, style: ElementStyle) -> Self {
        Self {
            id: Uuid::new_v4(),
            shape,
            style,
            rotation_degrees: 0.0,
            selected: false,
        }
    }

    /// Get the unique identifier.
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Get the variant discriminant.
    pub fn kind(&self) -> ElementKind {
        self.shape.kind()
    }

    /// Regenerate the element's id.
    /// Used when duplicating or pasting so copies never share an id.
    pub fn regenerate_id(&mut self) {
        self.id = Uuid::new_v4();
    }

    /// Translate the element's geometry by a delta.
    pub fn translate(&mut self, delta: Vec2) {
        match &mut self.shape {
            Shape::Rectangle(r) => r.origin += delta,
            Shape::Circle(c) => c.center += delta,
            Shape::Line(l) => {
                l.start += delta;
                l.end += delta;
            }
            Shape::Arrow(a) => {
                a.start += delta;
                a.end += delta;
            }
            Shape::Text(t) => t.origin += delta,
            Shape::Freehand(f) => {
                for p in &mut f.points {
                    *p += delta;
                }
            }
        }
    }

    /// Anchor point reported to property views (origin/center/start).
    pub fn anchor(&self) -> Point {
        match &self.shape {
            Shape::Rectangle(r) => r.origin,
            Shape::Circle(c) => c.center,
            Shape::Line(l) => l.start,
            Shape::Arrow(a) => a.start,
            Shape::Text(t) => t.origin,
            Shape::Freehand(f) => f.points.first().copied().unwrap_or(Point::ZERO),
        }
    }
}

/// A typed property edit, restricted to the (field, value) pairs that are
/// legal for at least one element kind.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyEdit {
    StrokeColor(SerializableColor),
    StrokeWidth(f64),
    FillColor(Option<SerializableColor>),
    Rotation(f64),
    Text(String),
}

impl PropertyEdit {
    /// Resolve a free-form stroke width input, substituting the minimum for
    /// anything unparseable or below it.
    pub fn stroke_width_from_input(input: &str) -> Self {
        let width = input
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|w| w.is_finite())
            .unwrap_or(MIN_STROKE_WIDTH)
            .max(MIN_STROKE_WIDTH);
        PropertyEdit::StrokeWidth(width)
    }

    /// Resolve a free-form rotation input, substituting 0 for anything
    /// unparseable.
    pub fn rotation_from_input(input: &str) -> Self {
        let degrees = input
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|d| d.is_finite())
            .unwrap_or(0.0);
        PropertyEdit::Rotation(degrees)
    }

    /// Apply the edit to an element.
    /// Returns false (leaving the element untouched) if the edit is not legal
    /// for the element's kind.
    pub fn apply(&self, element: &mut Element) -> bool {
        match self {
            PropertyEdit::StrokeColor(color) => {
                element.style.stroke_color = *color;
                true
            }
            PropertyEdit::StrokeWidth(width) => {
                element.style.stroke_width = width.max(MIN_STROKE_WIDTH);
                true
            }
            PropertyEdit::FillColor(color) => {
                element.style.fill_color = *color;
                true
            }
            PropertyEdit::Rotation(degrees) => {
                element.rotation_degrees = *degrees;
                true
            }
            PropertyEdit::Text(content) => match &mut element.shape {
                Shape::Text(text) => {
                    text.content = content.clone();
                    true
                }
                _ => false,
            },
        }
    }
}
