//! Pointer gesture handling: drawing, moving, resizing, rotating and
//! box-selecting. Every gesture mutates the present scene live and commits
//! once, against the pre-gesture snapshot, when the pointer lifts.

use crate::editor::{Editor, InteractionState};
use crate::element::{
    Arrow, Circle, Element, ElementId, ElementKind, Freehand, Line, Rectangle, Shape, Text,
};
use crate::geometry::{bounding_center, bounds, element_in_box};
use crate::handles::{handle_at_position, Corner, Edge, HandleKind};
use crate::input::PointerEvent;
use crate::scene::{deep_copy_with_new_ids, Scene};
use crate::tools::Tool;
use kurbo::{Point, Rect, Vec2};
use log::trace;

/// Minimum marquee extent (per axis) before a box-select applies.
pub const MIN_BOX_SELECT: f64 = 5.0;

/// Content given to a freshly created text element until the user edits it.
pub const TEXT_PLACEHOLDER: &str = "Text";

/// Rotation snap increment with shift held, in degrees.
const ROTATION_SNAP_DEGREES: f64 = 15.0;
/// Line/arrow angle snap increment with shift held, in radians.
const ANGLE_SNAP: f64 = std::f64::consts::FRAC_PI_4;

fn copy_sign(magnitude: f64, source: f64) -> f64 {
    if source < 0.0 {
        -magnitude
    } else {
        magnitude
    }
}

/// Snap `point` so the segment from `anchor` lies on the nearest multiple of
/// `step` radians, preserving its length.
fn snap_angle(anchor: Point, point: Point, step: f64) -> Point {
    let delta = point - anchor;
    let len = delta.hypot();
    if len < f64::EPSILON {
        return point;
    }
    let angle = (delta.y.atan2(delta.x) / step).round() * step;
    Point::new(anchor.x + len * angle.cos(), anchor.y + len * angle.sin())
}

impl Editor {
    /// Handle a pointer press. Resolution order is first-match-wins for
    /// every tool: selection handles, then elements, then empty space. Only
    /// the empty-space branch looks at the active tool.
    pub fn pointer_down(&mut self, event: PointerEvent) {
        if self.state != InteractionState::Idle {
            return;
        }
        trace!("pointer down at {:?}", event.position);
        let position = event.position;

        if let Some((id, handle)) = self.find_handle(position) {
            let element = match self.scene().get(id) {
                Some(e) => e,
                None => return,
            };
            let (anchor, base_aspect) = resize_anchor(element, handle);
            self.drag_base = Some(self.scene().clone());
            self.state = InteractionState::Resizing {
                id,
                handle,
                anchor,
                base_aspect,
            };
            return;
        }

        if let Some(hit) = self.scene().topmost_hit(position) {
            self.drag_base = Some(self.scene().clone());
            let scene = self.scene();
            let mut next = if event.modifiers.shift {
                scene.with_toggled(hit)
            } else if scene.get(hit).is_some_and(|e| e.selected) {
                // Clicking inside an existing selection keeps it, so a
                // multi-selection can be dragged as a group.
                scene.clone()
            } else {
                scene.select_only(hit)
            };
            if event.modifiers.alt {
                next = clone_selection(&next);
            }
            *self.history.present_mut() = next;
            self.state = InteractionState::Moving {
                start: position,
                applied: Vec2::ZERO,
            };
            return;
        }

        // Empty space. A plain click drops the selection as its own history
        // entry; shift keeps it so the marquee can add to it.
        if !event.modifiers.shift && self.scene().any_selected() {
            let next = self.scene().cleared_selection();
            self.commit_if_changed(next);
        }
        if self.active_tool == Tool::Selection || event.modifiers.shift {
            self.drag_base = Some(self.scene().clone());
            self.selection_box = Some(Rect::from_points(position, position));
            self.state = InteractionState::BoxSelecting {
                start: position,
                additive: event.modifiers.shift,
            };
        } else if self.active_tool == Tool::Text {
            self.create_text(position);
        } else {
            self.begin_drawing(self.active_tool, position);
        }
    }

    /// Handle pointer movement while a button is held.
    pub fn pointer_moved(&mut self, event: PointerEvent) {
        match self.state.clone() {
            InteractionState::Idle => {}
            InteractionState::Drawing { start } => self.update_drawing(start, event),
            InteractionState::Moving { start, applied } => {
                let mut desired = event.position - start;
                if event.modifiers.shift {
                    // Axis lock: keep the dominant axis of the whole drag.
                    if desired.x.abs() >= desired.y.abs() {
                        desired.y = 0.0;
                    } else {
                        desired.x = 0.0;
                    }
                }
                let delta = desired - applied;
                if delta != Vec2::ZERO {
                    let scene = self.history.present_mut();
                    for element in scene.elements.iter_mut().filter(|e| e.selected) {
                        element.translate(delta);
                    }
                }
                self.state = InteractionState::Moving {
                    start,
                    applied: desired,
                };
            }
            InteractionState::Resizing {
                id,
                handle,
                anchor,
                base_aspect,
            } => self.update_resize(id, handle, anchor, base_aspect, event),
            InteractionState::BoxSelecting { start, .. } => {
                self.selection_box = Some(Rect::from_points(start, event.position));
            }
        }
    }

    /// Handle the pointer release, committing the gesture as one undo step.
    pub fn pointer_up(&mut self, event: PointerEvent) {
        let state = std::mem::replace(&mut self.state, InteractionState::Idle);
        if let InteractionState::BoxSelecting { start, additive } = state {
            let rect = Rect::from_points(start, event.position);
            self.selection_box = None;
            self.apply_box_select(rect, additive);
        }
        self.finish_gesture();
    }

    /// The pointer left the canvas: equivalent to a release at the last
    /// known position.
    pub fn pointer_left(&mut self) {
        let state = std::mem::replace(&mut self.state, InteractionState::Idle);
        if let InteractionState::BoxSelecting { additive, .. } = state {
            if let Some(rect) = self.selection_box.take() {
                self.apply_box_select(rect, additive);
            }
        }
        self.finish_gesture();
    }

    /// Double-click opens a text edit session on text elements.
    pub fn double_click(&mut self, event: PointerEvent) {
        if self.active_tool != Tool::Selection {
            return;
        }
        let scene = self.scene();
        let Some(hit) = scene.topmost_hit(event.position) else {
            return;
        };
        if scene.get(hit).is_some_and(|e| e.kind() == ElementKind::Text) {
            let next = scene.select_only(hit);
            self.commit_if_changed(next);
            self.request_text_edit(hit);
        }
    }

    fn finish_gesture(&mut self) {
        if let Some(base) = self.drag_base.take() {
            self.history.commit_with_base(base);
        }
    }

    fn begin_drawing(&mut self, tool: Tool, position: Point) {
        self.drag_base = Some(self.scene().clone());
        let style = self.default_style.clone();
        let shape = match tool {
            Tool::Rectangle => Shape::Rectangle(Rectangle::new(position, 0.0, 0.0)),
            Tool::Circle => Shape::Circle(Circle::new(position, 0.0)),
            Tool::Line => Shape::Line(Line::new(position, position)),
            Tool::Arrow => Shape::Arrow(Arrow::new(position, position)),
            Tool::Freehand => Shape::Freehand(Freehand::new(position)),
            Tool::Selection | Tool::Text => return,
        };
        let mut next = self.scene().clone();
        next.elements.push(Element::new(shape, style));
        *self.history.present_mut() = next;
        self.state = InteractionState::Drawing { start: position };
    }

    /// Text is click-created, not dragged: one commit, then the host is asked
    /// to open an edit session on the new element.
    fn create_text(&mut self, position: Point) {
        let mut element = Element::new(
            Shape::Text(Text::new(position, TEXT_PLACEHOLDER.to_string())),
            self.default_style.clone(),
        );
        element.selected = true;
        let id = element.id();
        let mut next = self.scene().clone();
        next.primary = Some(id);
        next.elements.push(element);
        self.commit_if_changed(next);
        self.request_text_edit(id);
    }

    /// Handle search order: the primary element first, then the rest of the
    /// selection from front to back.
    fn find_handle(&self, position: Point) -> Option<(ElementId, HandleKind)> {
        let scene = self.scene();
        if let Some(primary) = scene.primary_element() {
            if let Some(handle) = handle_at_position(position, primary) {
                return Some((primary.id(), handle));
            }
        }
        let primary_id = scene.primary;
        scene
            .elements
            .iter()
            .rev()
            .filter(|e| e.selected && Some(e.id()) != primary_id)
            .find_map(|e| handle_at_position(position, e).map(|h| (e.id(), h)))
    }

    fn update_drawing(&mut self, start: Point, event: PointerEvent) {
        let position = event.position;
        let shift = event.modifiers.shift;
        let Some(element) = self.history.present_mut().last_mut() else {
            return;
        };
        match &mut element.shape {
            Shape::Rectangle(r) => {
                let mut width = position.x - start.x;
                let mut height = position.y - start.y;
                if shift {
                    // Square constraint keeps each axis direction.
                    let side = width.abs().max(height.abs());
                    width = copy_sign(side, width);
                    height = copy_sign(side, height);
                }
                r.width = width;
                r.height = height;
            }
            Shape::Circle(c) => {
                c.radius = (position - start).hypot();
            }
            Shape::Line(l) => {
                l.end = if shift {
                    snap_angle(start, position, ANGLE_SNAP)
                } else {
                    position
                };
            }
            Shape::Arrow(a) => {
                a.end = if shift {
                    snap_angle(start, position, ANGLE_SNAP)
                } else {
                    position
                };
            }
            Shape::Freehand(f) => f.add_point(position),
            Shape::Text(_) => {}
        }
    }

    fn update_resize(
        &mut self,
        id: ElementId,
        handle: HandleKind,
        anchor: Point,
        base_aspect: f64,
        event: PointerEvent,
    ) {
        let position = event.position;
        let shift = event.modifiers.shift;
        let Some(element) = self.history.present_mut().get_mut(id) else {
            return;
        };
        match handle {
            HandleKind::Rotate => {
                // `anchor` is the rotation pivot. Zero degrees points the
                // handle straight up, hence the quarter-turn offset.
                let delta = position - anchor;
                let mut degrees = delta.y.atan2(delta.x).to_degrees() + 90.0;
                if shift {
                    degrees = (degrees / ROTATION_SNAP_DEGREES).round() * ROTATION_SNAP_DEGREES;
                }
                element.rotation_degrees = degrees;
            }
            HandleKind::Endpoint(index) => {
                let snapped = if shift {
                    snap_angle(anchor, position, ANGLE_SNAP)
                } else {
                    position
                };
                match &mut element.shape {
                    Shape::Line(l) => {
                        if index == 0 {
                            l.start = snapped;
                        } else {
                            l.end = snapped;
                        }
                    }
                    Shape::Arrow(a) => {
                        if index == 0 {
                            a.start = snapped;
                        } else {
                            a.end = snapped;
                        }
                    }
                    _ => {}
                }
            }
            HandleKind::Corner(_) => match &mut element.shape {
                Shape::Rectangle(r) => {
                    // Re-root the rectangle at the fixed opposite corner,
                    // then flip origin and sign if the drag crossed it.
                    r.origin = anchor;
                    r.width = position.x - anchor.x;
                    r.height = position.y - anchor.y;
                    if shift && base_aspect > 0.0 {
                        r.height = copy_sign(r.width.abs() / base_aspect, r.height);
                    }
                    r.normalize_in_place();
                }
                Shape::Text(_) => {
                    // Text has no free resize; the grabbed corner drags the
                    // whole element.
                    let corner = corner_position(bounds(element), handle);
                    element.translate(position - corner);
                }
                _ => {}
            },
            HandleKind::Edge(edge) => match &mut element.shape {
                Shape::Rectangle(r) => {
                    match edge {
                        Edge::Left | Edge::Right => {
                            r.origin.x = anchor.x;
                            r.width = position.x - anchor.x;
                        }
                        Edge::Top | Edge::Bottom => {
                            r.origin.y = anchor.y;
                            r.height = position.y - anchor.y;
                        }
                    }
                    r.normalize_in_place();
                }
                Shape::Circle(c) => {
                    c.radius = match edge {
                        Edge::Left | Edge::Right => (position.x - c.center.x).abs(),
                        Edge::Top | Edge::Bottom => (position.y - c.center.y).abs(),
                    };
                }
                _ => {}
            },
        }
    }

    fn apply_box_select(&mut self, rect: Rect, additive: bool) {
        if rect.width() <= MIN_BOX_SELECT || rect.height() <= MIN_BOX_SELECT {
            return;
        }
        let scene = self.history.present_mut();
        if additive {
            for element in &mut scene.elements {
                if element_in_box(element, rect) {
                    element.selected = !element.selected;
                }
            }
        } else {
            for element in &mut scene.elements {
                element.selected = element_in_box(element, rect);
            }
        }
        let still_primary = scene
            .primary
            .and_then(|id| scene.get(id))
            .is_some_and(|e| e.selected);
        if !still_primary {
            scene.primary = scene.elements.iter().find(|e| e.selected).map(|e| e.id());
        }
    }
}

/// Fixed point a resize gesture is anchored to, plus the element's aspect
/// ratio at gesture start.
fn resize_anchor(element: &Element, handle: HandleKind) -> (Point, f64) {
    let rect = bounds(element);
    let aspect = if rect.height().abs() < f64::EPSILON {
        1.0
    } else {
        (rect.width() / rect.height()).abs()
    };
    let anchor = match handle {
        HandleKind::Rotate => bounding_center(element),
        HandleKind::Corner(corner) => corner_position(rect, HandleKind::Corner(opposite(corner))),
        HandleKind::Edge(edge) => match edge {
            Edge::Top => Point::new(rect.center().x, rect.y1),
            Edge::Bottom => Point::new(rect.center().x, rect.y0),
            Edge::Left => Point::new(rect.x1, rect.center().y),
            Edge::Right => Point::new(rect.x0, rect.center().y),
        },
        HandleKind::Endpoint(index) => match &element.shape {
            Shape::Line(l) => l.points()[1 - index.min(1)],
            Shape::Arrow(a) => a.points()[1 - index.min(1)],
            _ => rect.center(),
        },
    };
    (anchor, aspect)
}

fn opposite(corner: Corner) -> Corner {
    match corner {
        Corner::TopLeft => Corner::BottomRight,
        Corner::TopRight => Corner::BottomLeft,
        Corner::BottomLeft => Corner::TopRight,
        Corner::BottomRight => Corner::TopLeft,
    }
}

fn corner_position(rect: Rect, handle: HandleKind) -> Point {
    match handle {
        HandleKind::Corner(Corner::TopLeft) => Point::new(rect.x0, rect.y0),
        HandleKind::Corner(Corner::TopRight) => Point::new(rect.x1, rect.y0),
        HandleKind::Corner(Corner::BottomLeft) => Point::new(rect.x0, rect.y1),
        HandleKind::Corner(Corner::BottomRight) => Point::new(rect.x1, rect.y1),
        _ => rect.center(),
    }
}

/// Replace the selection with fresh clones for an alt-drag: the originals
/// stay put and deselect; the clones become the dragged selection.
fn clone_selection(scene: &Scene) -> Scene {
    let selected: Vec<Element> = scene
        .selected_elements()
        .into_iter()
        .cloned()
        .collect();
    if selected.is_empty() {
        return scene.clone();
    }
    let mut clones = deep_copy_with_new_ids(&selected);
    for clone in &mut clones {
        clone.selected = true;
    }
    let mut next = scene.cleared_selection();
    next.primary = clones.first().map(|e| e.id());
    next.elements.extend(clones);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementStyle;
    use crate::handles::ROTATE_HANDLE_OFFSET;
    use crate::input::Modifiers;

    fn down(editor: &mut Editor, x: f64, y: f64) {
        editor.pointer_down(PointerEvent::new(Point::new(x, y)));
    }

    fn moved(editor: &mut Editor, x: f64, y: f64) {
        editor.pointer_moved(PointerEvent::new(Point::new(x, y)));
    }

    fn up(editor: &mut Editor, x: f64, y: f64) {
        editor.pointer_up(PointerEvent::new(Point::new(x, y)));
    }

    fn down_mod(editor: &mut Editor, x: f64, y: f64, modifiers: Modifiers) {
        editor.pointer_down(PointerEvent::with_modifiers(Point::new(x, y), modifiers));
    }

    fn moved_mod(editor: &mut Editor, x: f64, y: f64, modifiers: Modifiers) {
        editor.pointer_moved(PointerEvent::with_modifiers(Point::new(x, y), modifiers));
    }

    fn editor_with_rect() -> (Editor, ElementId) {
        let rect = Element::new(
            Shape::Rectangle(Rectangle::new(Point::new(10.0, 10.0), 50.0, 30.0)),
            ElementStyle::default(),
        );
        let id = rect.id();
        (Editor::with_scene(Scene::new().with_element(rect)), id)
    }

    fn rect_shape(editor: &Editor, id: ElementId) -> Rectangle {
        match &editor.scene().get(id).unwrap().shape {
            Shape::Rectangle(r) => r.clone(),
            other => panic!("expected rectangle, got {:?}", other),
        }
    }

    #[test]
    fn test_draw_rectangle_gesture() {
        let mut editor = Editor::new();
        editor.set_tool(Tool::Rectangle);
        down(&mut editor, 10.0, 20.0);
        moved(&mut editor, 60.0, 50.0);
        up(&mut editor, 60.0, 50.0);

        assert_eq!(editor.scene().len(), 1);
        let Shape::Rectangle(r) = &editor.scene().elements[0].shape else {
            panic!("expected rectangle");
        };
        assert_eq!(r.origin, Point::new(10.0, 20.0));
        assert_eq!((r.width, r.height), (50.0, 30.0));

        // The whole gesture is one undo step.
        assert!(editor.undo());
        assert!(editor.scene().is_empty());
        assert!(!editor.can_undo());
    }

    #[test]
    fn test_shift_draws_square_preserving_direction() {
        let mut editor = Editor::new();
        editor.set_tool(Tool::Rectangle);
        down(&mut editor, 100.0, 100.0);
        moved_mod(&mut editor, 60.0, 130.0, Modifiers::SHIFT);
        up(&mut editor, 60.0, 130.0);

        let Shape::Rectangle(r) = &editor.scene().elements[0].shape else {
            panic!("expected rectangle");
        };
        assert_eq!((r.width, r.height), (-40.0, 40.0));
    }

    #[test]
    fn test_shift_snaps_line_to_45_degrees() {
        let mut editor = Editor::new();
        editor.set_tool(Tool::Line);
        down(&mut editor, 0.0, 0.0);
        moved_mod(&mut editor, 100.0, 10.0, Modifiers::SHIFT);
        up(&mut editor, 100.0, 10.0);

        let Shape::Line(l) = &editor.scene().elements[0].shape else {
            panic!("expected line");
        };
        // Snapped to horizontal, length preserved.
        assert!(l.end.y.abs() < 1e-9);
        let len = (100.0_f64 * 100.0 + 10.0 * 10.0).sqrt();
        assert!((l.end.x - len).abs() < 1e-9);
    }

    #[test]
    fn test_draw_tool_down_on_element_moves_it() {
        let (mut editor, id) = editor_with_rect();
        editor.set_tool(Tool::Rectangle);
        down(&mut editor, 30.0, 20.0);
        assert!(matches!(*editor.state(), InteractionState::Moving { .. }));

        moved(&mut editor, 50.0, 20.0);
        up(&mut editor, 50.0, 20.0);
        // No new element was created; the existing one moved.
        assert_eq!(editor.scene().len(), 1);
        let element = editor.scene().get(id).unwrap();
        assert!(element.selected);
        assert_eq!(element.anchor(), Point::new(30.0, 10.0));
    }

    #[test]
    fn test_draw_tool_down_on_handle_resizes() {
        let (mut editor, id) = editor_with_rect();
        down(&mut editor, 30.0, 20.0);
        up(&mut editor, 30.0, 20.0);

        editor.set_tool(Tool::Circle);
        down(&mut editor, 60.0, 40.0);
        assert!(matches!(*editor.state(), InteractionState::Resizing { .. }));
        moved(&mut editor, 90.0, 70.0);
        up(&mut editor, 90.0, 70.0);

        let r = rect_shape(&editor, id);
        assert_eq!((r.width, r.height), (80.0, 60.0));
        assert_eq!(editor.scene().len(), 1);
    }

    #[test]
    fn test_shift_down_with_draw_tool_box_selects() {
        let (mut editor, id) = editor_with_rect();
        editor.set_tool(Tool::Rectangle);
        down_mod(&mut editor, 100.0, 100.0, Modifiers::SHIFT);
        assert!(matches!(
            *editor.state(),
            InteractionState::BoxSelecting { additive: true, .. }
        ));

        moved(&mut editor, 0.0, 0.0);
        up(&mut editor, 0.0, 0.0);
        assert_eq!(editor.scene().len(), 1);
        assert!(editor.scene().get(id).unwrap().selected);
    }

    #[test]
    fn test_draw_on_empty_clears_selection_as_own_entry() {
        let (mut editor, id) = editor_with_rect();
        down(&mut editor, 30.0, 20.0);
        up(&mut editor, 30.0, 20.0);
        assert!(editor.scene().get(id).unwrap().selected);

        editor.set_tool(Tool::Line);
        down(&mut editor, 200.0, 200.0);
        moved(&mut editor, 250.0, 200.0);
        up(&mut editor, 250.0, 200.0);
        assert_eq!(editor.scene().len(), 2);

        // First undo removes the drawn line, the clear stays.
        assert!(editor.undo());
        assert_eq!(editor.scene().len(), 1);
        assert!(!editor.scene().any_selected());
        // Second undo restores the selection.
        assert!(editor.undo());
        assert!(editor.scene().get(id).unwrap().selected);
    }

    #[test]
    fn test_freehand_collects_points() {
        let mut editor = Editor::new();
        editor.set_tool(Tool::Freehand);
        down(&mut editor, 0.0, 0.0);
        moved(&mut editor, 5.0, 5.0);
        moved(&mut editor, 10.0, 3.0);
        up(&mut editor, 10.0, 3.0);

        let Shape::Freehand(f) = &editor.scene().elements[0].shape else {
            panic!("expected freehand");
        };
        assert_eq!(f.points.len(), 3);
    }

    #[test]
    fn test_text_tool_creates_and_requests_edit() {
        let mut editor = Editor::new();
        editor.set_tool(Tool::Text);
        down(&mut editor, 40.0, 40.0);
        up(&mut editor, 40.0, 40.0);

        assert_eq!(editor.scene().len(), 1);
        let element = &editor.scene().elements[0];
        let id = element.id();
        assert!(element.selected);
        let Shape::Text(t) = &element.shape else {
            panic!("expected text");
        };
        assert_eq!(t.content, TEXT_PLACEHOLDER);
        assert_eq!(editor.take_pending_text_edit(), Some(id));
        assert_eq!(editor.take_pending_text_edit(), None);
    }

    #[test]
    fn test_click_selects_then_drag_moves() {
        let (mut editor, id) = editor_with_rect();
        down(&mut editor, 30.0, 20.0);
        moved(&mut editor, 40.0, 35.0);
        up(&mut editor, 40.0, 35.0);

        let element = editor.scene().get(id).unwrap();
        assert!(element.selected);
        assert_eq!(element.anchor(), Point::new(20.0, 25.0));

        // Selection change and move coalesce into one undo step.
        assert!(editor.undo());
        let element = editor.scene().get(id).unwrap();
        assert!(!element.selected);
        assert_eq!(element.anchor(), Point::new(10.0, 10.0));
    }

    #[test]
    fn test_shift_move_locks_axis() {
        let (mut editor, id) = editor_with_rect();
        down(&mut editor, 30.0, 20.0);
        moved_mod(&mut editor, 70.0, 30.0, Modifiers::SHIFT);
        up(&mut editor, 70.0, 30.0);

        // Horizontal delta dominates; vertical is suppressed.
        assert_eq!(editor.scene().get(id).unwrap().anchor(), Point::new(50.0, 10.0));
    }

    #[test]
    fn test_shift_click_toggles_without_deselecting() {
        let (mut editor, id_a) = editor_with_rect();
        let other = Element::new(
            Shape::Rectangle(Rectangle::new(Point::new(200.0, 10.0), 50.0, 30.0)),
            ElementStyle::default(),
        );
        let id_b = other.id();
        let next = editor.scene().with_element(other);
        editor.commit_if_changed(next);

        down(&mut editor, 30.0, 20.0);
        up(&mut editor, 30.0, 20.0);
        down_mod(&mut editor, 220.0, 20.0, Modifiers::SHIFT);
        up(&mut editor, 220.0, 20.0);

        assert!(editor.scene().get(id_a).unwrap().selected);
        assert!(editor.scene().get(id_b).unwrap().selected);
    }

    #[test]
    fn test_empty_click_clears_as_own_history_entry() {
        let (mut editor, id) = editor_with_rect();
        down(&mut editor, 30.0, 20.0);
        up(&mut editor, 30.0, 20.0);
        assert!(editor.scene().get(id).unwrap().selected);

        down(&mut editor, 500.0, 500.0);
        up(&mut editor, 500.0, 500.0);
        assert!(!editor.scene().any_selected());

        // Undo restores the selection without moving anything.
        assert!(editor.undo());
        assert!(editor.scene().get(id).unwrap().selected);
    }

    #[test]
    fn test_alt_drag_clones() {
        let (mut editor, id) = editor_with_rect();
        down_mod(&mut editor, 30.0, 20.0, Modifiers::ALT);
        moved(&mut editor, 130.0, 20.0);
        up(&mut editor, 130.0, 20.0);

        assert_eq!(editor.scene().len(), 2);
        let original = editor.scene().get(id).unwrap();
        assert!(!original.selected);
        assert_eq!(original.anchor(), Point::new(10.0, 10.0));

        let clone = editor.scene().primary_element().unwrap();
        assert_ne!(clone.id(), id);
        assert_eq!(clone.anchor(), Point::new(110.0, 10.0));

        // One undo removes the clone entirely.
        assert!(editor.undo());
        assert_eq!(editor.scene().len(), 1);
    }

    #[test]
    fn test_corner_resize_anchors_opposite_corner() {
        let (mut editor, id) = editor_with_rect();
        down(&mut editor, 30.0, 20.0);
        up(&mut editor, 30.0, 20.0);

        // Grab the bottom-right corner handle at (60, 40).
        down(&mut editor, 60.0, 40.0);
        moved(&mut editor, 90.0, 70.0);
        up(&mut editor, 90.0, 70.0);

        let r = rect_shape(&editor, id);
        assert_eq!(r.origin, Point::new(10.0, 10.0));
        assert_eq!((r.width, r.height), (80.0, 60.0));
    }

    #[test]
    fn test_corner_resize_past_anchor_normalizes_extents() {
        let (mut editor, id) = editor_with_rect();
        down(&mut editor, 30.0, 20.0);
        up(&mut editor, 30.0, 20.0);

        down(&mut editor, 60.0, 40.0);
        moved(&mut editor, 0.0, 0.0);
        up(&mut editor, 0.0, 0.0);

        // Crossing the anchor flips origin and sign: extents stay positive.
        let r = rect_shape(&editor, id);
        assert_eq!(r.origin, Point::new(0.0, 0.0));
        assert_eq!((r.width, r.height), (10.0, 10.0));
    }

    #[test]
    fn test_edge_resize_past_anchor_normalizes_extents() {
        let (mut editor, id) = editor_with_rect();
        down(&mut editor, 30.0, 20.0);
        up(&mut editor, 30.0, 20.0);

        // Drag the right edge handle past the left edge.
        down(&mut editor, 60.0, 25.0);
        moved(&mut editor, 2.0, 25.0);
        up(&mut editor, 2.0, 25.0);

        let r = rect_shape(&editor, id);
        assert_eq!(r.origin, Point::new(2.0, 10.0));
        assert_eq!((r.width, r.height), (8.0, 30.0));
    }

    #[test]
    fn test_edge_resize_moves_one_axis() {
        let (mut editor, id) = editor_with_rect();
        down(&mut editor, 30.0, 20.0);
        up(&mut editor, 30.0, 20.0);

        // Right edge handle at (60, 25).
        down(&mut editor, 60.0, 25.0);
        moved(&mut editor, 100.0, 60.0);
        up(&mut editor, 100.0, 60.0);

        let r = rect_shape(&editor, id);
        assert_eq!((r.width, r.height), (90.0, 30.0));
        assert_eq!(r.origin.y, 10.0);
    }

    #[test]
    fn test_endpoint_drag_moves_one_end() {
        let line = Element::new(
            Shape::Line(Line::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0))),
            ElementStyle::default(),
        );
        let id = line.id();
        let mut editor = Editor::with_scene(Scene::new().with_element(line).select_only(id));

        down(&mut editor, 100.0, 0.0);
        moved(&mut editor, 100.0, 80.0);
        up(&mut editor, 100.0, 80.0);

        let Shape::Line(l) = &editor.scene().get(id).unwrap().shape else {
            panic!("expected line");
        };
        assert_eq!(l.start, Point::new(0.0, 0.0));
        assert_eq!(l.end, Point::new(100.0, 80.0));
    }

    #[test]
    fn test_rotate_handle_sets_degrees() {
        let (mut editor, id) = editor_with_rect();
        down(&mut editor, 30.0, 20.0);
        up(&mut editor, 30.0, 20.0);

        // Rotation handle sits above the center (35, 25).
        down(&mut editor, 35.0, 25.0 - ROTATE_HANDLE_OFFSET);
        // Drag to the right of the pivot: atan2 = 0, plus the quarter turn.
        moved(&mut editor, 100.0, 25.0);
        up(&mut editor, 100.0, 25.0);

        let element = editor.scene().get(id).unwrap();
        assert!((element.rotation_degrees - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_rotate_snaps_with_shift() {
        let (mut editor, id) = editor_with_rect();
        down(&mut editor, 30.0, 20.0);
        up(&mut editor, 30.0, 20.0);

        down(&mut editor, 35.0, 25.0 - ROTATE_HANDLE_OFFSET);
        // Roughly 98 degrees unsnapped.
        moved_mod(&mut editor, 100.0, 34.0, Modifiers::SHIFT);
        up(&mut editor, 100.0, 34.0);

        let degrees = editor.scene().get(id).unwrap().rotation_degrees;
        assert!((degrees % 15.0).abs() < 1e-9, "got {}", degrees);
    }

    #[test]
    fn test_box_select_requires_containment() {
        let (mut editor, id) = editor_with_rect();
        let far = Element::new(
            Shape::Rectangle(Rectangle::new(Point::new(300.0, 300.0), 20.0, 20.0)),
            ElementStyle::default(),
        );
        let far_id = far.id();
        let next = editor.scene().with_element(far);
        editor.commit_if_changed(next);

        down(&mut editor, 0.0, 0.0);
        moved(&mut editor, 100.0, 100.0);
        assert!(editor.selection_box.is_some());
        up(&mut editor, 100.0, 100.0);

        assert!(editor.selection_box.is_none());
        assert!(editor.scene().get(id).unwrap().selected);
        assert!(!editor.scene().get(far_id).unwrap().selected);
        assert_eq!(editor.scene().primary, Some(id));
    }

    #[test]
    fn test_tiny_box_select_is_ignored() {
        let (mut editor, id) = editor_with_rect();
        down(&mut editor, 100.0, 100.0);
        moved(&mut editor, 104.0, 104.0);
        up(&mut editor, 104.0, 104.0);

        assert!(!editor.scene().get(id).unwrap().selected);
        assert!(!editor.can_undo());
    }

    #[test]
    fn test_shift_box_select_adds_to_selection() {
        let (mut editor, id_a) = editor_with_rect();
        let far = Element::new(
            Shape::Rectangle(Rectangle::new(Point::new(300.0, 300.0), 20.0, 20.0)),
            ElementStyle::default(),
        );
        let id_b = far.id();
        let next = editor.scene().with_element(far).select_only(id_a);
        editor.commit_if_changed(next);

        down_mod(&mut editor, 280.0, 280.0, Modifiers::SHIFT);
        moved(&mut editor, 340.0, 340.0);
        up(&mut editor, 340.0, 340.0);

        assert!(editor.scene().get(id_a).unwrap().selected);
        assert!(editor.scene().get(id_b).unwrap().selected);
    }

    #[test]
    fn test_pointer_left_finishes_gesture() {
        let mut editor = Editor::new();
        editor.set_tool(Tool::Circle);
        down(&mut editor, 50.0, 50.0);
        moved(&mut editor, 80.0, 50.0);
        editor.pointer_left();

        assert_eq!(editor.scene().len(), 1);
        let Shape::Circle(c) = &editor.scene().elements[0].shape else {
            panic!("expected circle");
        };
        assert!((c.radius - 30.0).abs() < 1e-9);
        assert!(editor.can_undo());
        assert_eq!(*editor.state(), InteractionState::Idle);
    }

    #[test]
    fn test_double_click_text_requests_edit() {
        let text = Element::new(
            Shape::Text(Text::new(Point::new(10.0, 50.0), "hello".to_string())),
            ElementStyle::default(),
        );
        let id = text.id();
        let mut editor = Editor::with_scene(Scene::new().with_element(text));

        editor.double_click(PointerEvent::new(Point::new(20.0, 45.0)));
        assert_eq!(editor.take_pending_text_edit(), Some(id));
        assert!(editor.scene().get(id).unwrap().selected);
    }

    #[test]
    fn test_double_click_non_text_is_inert() {
        let (mut editor, _) = editor_with_rect();
        editor.double_click(PointerEvent::new(Point::new(30.0, 20.0)));
        assert_eq!(editor.take_pending_text_edit(), None);
    }

    #[test]
    fn test_zero_distance_drag_not_recorded() {
        let (mut editor, _) = editor_with_rect();
        down(&mut editor, 30.0, 20.0);
        up(&mut editor, 30.0, 20.0);
        // Selection changed, so one entry exists.
        assert!(editor.can_undo());

        down(&mut editor, 30.0, 20.0);
        up(&mut editor, 30.0, 20.0);
        // Second click changed nothing; no new entry.
        editor.undo();
        assert!(!editor.scene().any_selected());
        assert!(!editor.can_undo());
    }
}
