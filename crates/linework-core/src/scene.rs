//! Scene model: the ordered element list and the selection subset.

use crate::element::{Element, ElementId};
use crate::geometry;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// The ordered collection of elements. Insertion order is paint order:
/// later elements draw on top and win hit-test ties.
///
/// Selection is the subset of elements with `selected = true`, plus one
/// designated primary element shown in the properties view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Elements in z-order (back to front).
    pub elements: Vec<Element>,
    /// The primary selected element, if any.
    pub primary: Option<ElementId>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a scene from an element list, deriving the primary selection
    /// from the first selected element.
    pub fn from_elements(elements: Vec<Element>) -> Self {
        let primary = elements.iter().find(|e| e.selected).map(|e| e.id());
        Self { elements, primary }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get an element by id.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == id)
    }

    /// Get a mutable element by id (for live edits during a gesture).
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id() == id)
    }

    /// The most recently added element (the live target while drawing).
    pub fn last_mut(&mut self) -> Option<&mut Element> {
        self.elements.last_mut()
    }

    /// Topmost element containing the point: scan in reverse insertion order
    /// so the most recently drawn element wins ties.
    pub fn topmost_hit(&self, point: Point) -> Option<ElementId> {
        self.elements
            .iter()
            .rev()
            .find(|e| geometry::hit_test(point, e))
            .map(|e| e.id())
    }

    /// All selected elements in z-order.
    pub fn selected_elements(&self) -> Vec<&Element> {
        self.elements.iter().filter(|e| e.selected).collect()
    }

    /// Ids of all selected elements in z-order.
    pub fn selected_ids(&self) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|e| e.selected)
            .map(|e| e.id())
            .collect()
    }

    pub fn any_selected(&self) -> bool {
        self.elements.iter().any(|e| e.selected)
    }

    /// The primary selected element, if it is still selected.
    pub fn primary_element(&self) -> Option<&Element> {
        self.primary
            .and_then(|id| self.get(id))
            .filter(|e| e.selected)
    }

    /// Append an element. Does not touch selection; callers set `selected`
    /// on the element beforehand if they want it selected.
    pub fn with_element(&self, element: Element) -> Scene {
        let mut next = self.clone();
        next.elements.push(element);
        next
    }

    /// Apply `transform` to every element satisfying `predicate`, identity
    /// elsewhere. The building block for move/resize/rotate/property edits.
    pub fn update_elements(
        &self,
        predicate: impl Fn(&Element) -> bool,
        transform: impl Fn(&mut Element),
    ) -> Scene {
        let mut next = self.clone();
        for element in next.elements.iter_mut().filter(|e| predicate(e)) {
            transform(element);
        }
        next
    }

    /// Drop every selected element.
    pub fn without_selected(&self) -> Scene {
        let mut next = self.clone();
        next.elements.retain(|e| !e.selected);
        if next.primary.is_some_and(|id| next.get(id).is_none()) {
            next.primary = None;
        }
        next
    }

    /// Select exactly the given element, deselecting all others.
    pub fn select_only(&self, id: ElementId) -> Scene {
        let mut next = self.update_elements(|_| true, |e| e.selected = false);
        if let Some(e) = next.get_mut(id) {
            e.selected = true;
            next.primary = Some(id);
        }
        next
    }

    /// Toggle one element's selection, leaving all others unchanged.
    /// A newly selected element becomes primary; deselecting the primary
    /// clears the primary designation.
    pub fn with_toggled(&self, id: ElementId) -> Scene {
        let mut next = self.clone();
        let Some(e) = next.get_mut(id) else {
            return next;
        };
        e.selected = !e.selected;
        if e.selected {
            next.primary = Some(id);
        } else if next.primary == Some(id) {
            next.primary = None;
        }
        next
    }

    /// Deselect everything.
    pub fn cleared_selection(&self) -> Scene {
        let mut next = self.update_elements(|_| true, |e| e.selected = false);
        next.primary = None;
        next
    }

    /// Select every element. Keeps the current primary if it exists,
    /// otherwise designates the first element.
    pub fn select_all(&self) -> Scene {
        let mut next = self.update_elements(|_| true, |e| e.selected = true);
        if next.primary.is_none() {
            next.primary = next.elements.first().map(|e| e.id());
        }
        next
    }
}

/// Clone elements with fresh unique ids.
/// Used by copy/cut/paste/duplicate and alt-drag cloning; ids are never
/// reused, even across delete and undo.
pub fn deep_copy_with_new_ids(elements: &[Element]) -> Vec<Element> {
    elements
        .iter()
        .map(|e| {
            let mut copy = e.clone();
            copy.regenerate_id();
            copy
        })
        .collect()
}
