//! Editor state: history, clipboard, tool, view settings, and the entry
//! points the host shell calls. Pointer gesture handling lives in
//! `interaction`.

use crate::clipboard::Clipboard;
use crate::element::{Element, ElementId, ElementStyle, PropertyEdit, SerializableColor};
use crate::handles::HandleKind;
use crate::history::History;
use crate::keyboard::ShortcutAction;
use crate::scene::{deep_copy_with_new_ids, Scene};
use crate::tools::Tool;
use crate::document::{Document, DocumentError};
use kurbo::{Point, Rect, Vec2};
use log::{debug, warn};

/// Zoom limits and step.
pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 3.0;
pub const ZOOM_STEP: f64 = 0.1;

/// Background grid settings. The grid is a view-only overlay; it never
/// affects geometry and is not part of the document.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSettings {
    pub visible: bool,
    /// Grid cell size in scene units.
    pub size: f64,
    pub color: SerializableColor,
    /// Opacity in [0, 1].
    pub opacity: f64,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            visible: false,
            size: 20.0,
            color: SerializableColor::black(),
            opacity: 0.1,
        }
    }
}

/// Requests the editor cannot satisfy itself and hands to the host shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellRequest {
    ToggleTheme,
    ToggleHelp,
}

/// Current pointer gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionState {
    Idle,
    /// Creating a new element; the live element is the last in the scene.
    Drawing { start: Point },
    /// Dragging the selection. `applied` accumulates the translation already
    /// applied, so axis locking can re-derive deltas from the gesture start.
    Moving { start: Point, applied: Vec2 },
    /// Dragging a handle of one element.
    Resizing {
        id: ElementId,
        handle: HandleKind,
        /// Fixed point the resize is anchored to (opposite corner/edge).
        anchor: Point,
        /// Width/height ratio at gesture start, for aspect-preserving resize.
        base_aspect: f64,
    },
    /// Dragging a selection marquee from `start`. `additive` selections
    /// (shift) toggle instead of replace.
    BoxSelecting { start: Point, additive: bool },
}

/// The editing engine: owns the scene history, clipboard, tool and view
/// state, and exposes every operation the host UI invokes.
pub struct Editor {
    pub(crate) history: History,
    pub(crate) clipboard: Clipboard,
    pub(crate) state: InteractionState,
    /// Scene snapshot taken when a gesture began, so the whole gesture
    /// commits as one undo step.
    pub(crate) drag_base: Option<Scene>,
    /// Live marquee rectangle while box-selecting.
    pub selection_box: Option<Rect>,
    pub active_tool: Tool,
    /// Style applied to newly created elements.
    pub default_style: ElementStyle,
    zoom: f64,
    pub grid: GridSettings,
    /// Text element awaiting an edit session in the host UI. Set when a text
    /// element is created or double-clicked.
    pending_text_edit: Option<ElementId>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    pub fn new() -> Self {
        Self::with_scene(Scene::new())
    }

    pub fn with_scene(scene: Scene) -> Self {
        Self {
            history: History::new(scene),
            clipboard: Clipboard::new(),
            state: InteractionState::Idle,
            drag_base: None,
            selection_box: None,
            active_tool: Tool::default(),
            default_style: ElementStyle::default(),
            zoom: 1.0,
            grid: GridSettings::default(),
            pending_text_edit: None,
        }
    }

    pub fn scene(&self) -> &Scene {
        self.history.present()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Replace the scene wholesale (document load). Resets history.
    pub fn load_scene(&mut self, scene: Scene) {
        self.history = History::new(scene);
        self.state = InteractionState::Idle;
        self.drag_base = None;
        self.selection_box = None;
        self.pending_text_edit = None;
    }

    /// Commit a new scene if it differs from the present one.
    pub(crate) fn commit_if_changed(&mut self, next: Scene) {
        self.history.commit(next);
    }

    /// Take the pending text-edit request, if any. The host opens its text
    /// input for the returned element.
    pub fn take_pending_text_edit(&mut self) -> Option<ElementId> {
        self.pending_text_edit.take()
    }

    pub(crate) fn request_text_edit(&mut self, id: ElementId) {
        self.pending_text_edit = Some(id);
    }

    pub fn set_tool(&mut self, tool: Tool) {
        debug!("tool -> {:?}", tool);
        self.active_tool = tool;
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Delete every selected element.
    pub fn delete_selection(&mut self) {
        let next = self.scene().without_selected();
        self.commit_if_changed(next);
    }

    pub fn select_all(&mut self) {
        let next = self.scene().select_all();
        self.commit_if_changed(next);
    }

    pub fn clear_selection(&mut self) {
        let next = self.scene().cleared_selection();
        self.commit_if_changed(next);
    }

    /// Copy the selection to the clipboard. No scene change.
    pub fn copy_selection(&mut self) {
        let selected: Vec<Element> = self
            .scene()
            .selected_elements()
            .into_iter()
            .cloned()
            .collect();
        if !selected.is_empty() {
            self.clipboard.store(&selected);
        }
    }

    /// Copy the selection, then delete it.
    pub fn cut_selection(&mut self) {
        self.copy_selection();
        self.delete_selection();
    }

    /// Paste clipboard contents as the new selection.
    pub fn paste(&mut self) {
        if self.clipboard.is_empty() {
            return;
        }
        let mut next = self.scene().cleared_selection();
        let pasted = self.clipboard.pasted();
        next.primary = pasted.first().map(|e| e.id());
        next.elements.extend(pasted);
        self.commit_if_changed(next);
    }

    /// Duplicate the selection in place (offset copies become the new
    /// selection). The clipboard is not touched.
    pub fn duplicate_selection(&mut self) {
        let selected: Vec<Element> = self
            .scene()
            .selected_elements()
            .into_iter()
            .cloned()
            .collect();
        if selected.is_empty() {
            return;
        }
        let mut copies = deep_copy_with_new_ids(&selected);
        for copy in &mut copies {
            copy.translate(crate::clipboard::PASTE_OFFSET);
            copy.selected = true;
        }
        let mut next = self.scene().cleared_selection();
        next.primary = copies.first().map(|e| e.id());
        next.elements.extend(copies);
        self.commit_if_changed(next);
    }

    /// Apply a property edit to every selected element it is legal for.
    /// One committed step, however many elements changed.
    pub fn apply_property_edit(&mut self, edit: &PropertyEdit) {
        let mut next = self.scene().clone();
        for element in next.elements.iter_mut().filter(|e| e.selected) {
            if !edit.apply(element) {
                warn!("property edit {:?} rejected for {:?}", edit, element.kind());
            }
        }
        self.commit_if_changed(next);
    }

    /// Replace the scene with a document's contents, as one undoable step.
    /// A parse failure leaves scene and history untouched.
    pub fn import_json(&mut self, json: &str) -> Result<(), DocumentError> {
        let scene = Document::from_json(json)?.into_scene();
        self.commit_if_changed(scene);
        Ok(())
    }

    /// Serialize the current scene to document JSON.
    pub fn export_json(&self) -> Result<String, DocumentError> {
        Document::from_scene(self.scene()).to_json()
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    pub fn zoom_reset(&mut self) {
        self.zoom = 1.0;
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn toggle_grid(&mut self) {
        self.grid.visible = !self.grid.visible;
    }

    /// Dispatch a resolved shortcut. Actions the editor cannot handle are
    /// returned for the host shell.
    pub fn apply_shortcut(&mut self, action: ShortcutAction) -> Option<ShellRequest> {
        match action {
            ShortcutAction::SelectTool(tool) => self.set_tool(tool),
            ShortcutAction::Undo => {
                self.undo();
            }
            ShortcutAction::Redo => {
                self.redo();
            }
            ShortcutAction::SelectAll => self.select_all(),
            ShortcutAction::Copy => self.copy_selection(),
            ShortcutAction::Cut => self.cut_selection(),
            ShortcutAction::Paste => self.paste(),
            ShortcutAction::Duplicate => self.duplicate_selection(),
            ShortcutAction::DeleteSelection => self.delete_selection(),
            ShortcutAction::ClearSelection => self.clear_selection(),
            ShortcutAction::ZoomIn => self.zoom_in(),
            ShortcutAction::ZoomOut => self.zoom_out(),
            ShortcutAction::ZoomReset => self.zoom_reset(),
            ShortcutAction::ToggleGrid => self.toggle_grid(),
            ShortcutAction::ToggleTheme => return Some(ShellRequest::ToggleTheme),
            ShortcutAction::ToggleHelp => return Some(ShellRequest::ToggleHelp),
        }
        None
    }
}
