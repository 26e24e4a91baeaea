//! Renderer abstraction: the scene walks itself through a small primitive
//! vocabulary so backends (GPU, SVG, test recorders) stay interchangeable.

use crate::element::{Element, ElementStyle, Shape};
use crate::geometry::{bounding_center, bounds};
use crate::handles::{handle_positions, HANDLE_SIZE};
use crate::scene::Scene;
use kurbo::{Affine, Point, Rect};
use peniko::Color;

/// Selection accent color shared by outlines, handles and the marquee.
pub const SELECTION_COLOR: Color = Color::from_rgb8(0x1e, 0x90, 0xff);

/// Stroke width used for selection chrome.
pub const SELECTION_STROKE_WIDTH: f64 = 1.0;

/// Drawing primitives a backend must provide. Every call carries an affine
/// transform; element rotation arrives through it, so backends never need to
/// know about rotation themselves.
pub trait Renderer {
    fn clear(&mut self, background: Color);
    fn draw_rect(&mut self, transform: Affine, rect: Rect, style: &ElementStyle);
    fn draw_ellipse(&mut self, transform: Affine, bounds: Rect, style: &ElementStyle);
    fn draw_polyline(&mut self, transform: Affine, points: &[Point], style: &ElementStyle);
    fn draw_text(&mut self, transform: Affine, origin: Point, content: &str, style: &ElementStyle);
}

/// Rotation transform for an element: rotate about the bounding center.
pub fn element_transform(element: &Element) -> Affine {
    if element.rotation_degrees == 0.0 {
        return Affine::IDENTITY;
    }
    Affine::rotate_about(
        element.rotation_degrees.to_radians(),
        bounding_center(element),
    )
}

/// Draw a single element through the renderer primitives.
pub fn draw_element(renderer: &mut impl Renderer, element: &Element) {
    let transform = element_transform(element);
    let style = &element.style;
    match &element.shape {
        Shape::Rectangle(r) => renderer.draw_rect(transform, r.normalized(), style),
        Shape::Circle(c) => renderer.draw_ellipse(transform, c.bounds(), style),
        Shape::Line(l) => renderer.draw_polyline(transform, &l.points(), style),
        Shape::Arrow(a) => {
            renderer.draw_polyline(transform, &a.points(), style);
            let [left, right] = a.head_points();
            renderer.draw_polyline(transform, &[left, a.end, right], style);
        }
        Shape::Text(t) => renderer.draw_text(transform, t.origin, &t.content, style),
        Shape::Freehand(f) => renderer.draw_polyline(transform, &f.points, style),
    }
}

fn selection_style() -> ElementStyle {
    ElementStyle {
        stroke_color: SELECTION_COLOR.into(),
        stroke_width: SELECTION_STROKE_WIDTH,
        fill_color: None,
    }
}

/// Draw the selection chrome for one element: the bounding outline plus its
/// manipulation handles. Handles follow the element transform only via the
/// rotation handle position; their boxes are drawn axis-aligned.
pub fn draw_selection_chrome(renderer: &mut impl Renderer, element: &Element) {
    let style = selection_style();
    renderer.draw_rect(element_transform(element), bounds(element), &style);
    for handle in handle_positions(element) {
        let half = HANDLE_SIZE / 2.0;
        let rect = Rect::new(
            handle.position.x - half,
            handle.position.y - half,
            handle.position.x + half,
            handle.position.y + half,
        );
        renderer.draw_rect(Affine::IDENTITY, rect, &style);
    }
}

/// Draw the whole scene: elements in z-order, then selection chrome, then
/// the in-progress box-select marquee if one is active.
pub fn draw_scene(renderer: &mut impl Renderer, scene: &Scene, selection_box: Option<Rect>) {
    for element in &scene.elements {
        draw_element(renderer, element);
    }
    for element in scene.elements.iter().filter(|e| e.selected) {
        draw_selection_chrome(renderer, element);
    }
    if let Some(rect) = selection_box {
        renderer.draw_rect(Affine::IDENTITY, rect, &selection_style());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Arrow, ElementStyle, Rectangle, Shape};

    #[derive(Default)]
    struct RecordingRenderer {
        rects: usize,
        polylines: usize,
        texts: usize,
    }

    impl Renderer for RecordingRenderer {
        fn clear(&mut self, _background: Color) {}
        fn draw_rect(&mut self, _t: Affine, _r: Rect, _s: &ElementStyle) {
            self.rects += 1;
        }
        fn draw_ellipse(&mut self, _t: Affine, _b: Rect, _s: &ElementStyle) {}
        fn draw_polyline(&mut self, _t: Affine, _p: &[Point], _s: &ElementStyle) {
            self.polylines += 1;
        }
        fn draw_text(&mut self, _t: Affine, _o: Point, _c: &str, _s: &ElementStyle) {
            self.texts += 1;
        }
    }

    #[test]
    fn test_arrow_draws_shaft_and_head() {
        let mut renderer = RecordingRenderer::default();
        let arrow = Element::new(
            Shape::Arrow(Arrow::new(Point::ZERO, Point::new(100.0, 0.0))),
            ElementStyle::default(),
        );
        draw_element(&mut renderer, &arrow);
        assert_eq!(renderer.polylines, 2);
    }

    #[test]
    fn test_selected_rect_draws_chrome() {
        let mut rect = Element::new(
            Shape::Rectangle(Rectangle::new(Point::ZERO, 100.0, 50.0)),
            ElementStyle::default(),
        );
        rect.selected = true;
        let scene = Scene::from_elements(vec![rect]);

        let mut renderer = RecordingRenderer::default();
        draw_scene(&mut renderer, &scene, None);
        // Element + outline + 9 handles.
        assert_eq!(renderer.rects, 11);
    }

    #[test]
    fn test_marquee_drawn_when_active() {
        let mut renderer = RecordingRenderer::default();
        draw_scene(
            &mut renderer,
            &Scene::new(),
            Some(Rect::new(0.0, 0.0, 50.0, 50.0)),
        );
        assert_eq!(renderer.rects, 1);
    }

    #[test]
    fn test_unrotated_transform_is_identity() {
        let rect = Element::new(
            Shape::Rectangle(Rectangle::new(Point::ZERO, 10.0, 10.0)),
            ElementStyle::default(),
        );
        assert_eq!(element_transform(&rect), Affine::IDENTITY);
    }
}
