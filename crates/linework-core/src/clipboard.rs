//! Internal clipboard for copy/cut/paste/duplicate.

use crate::element::Element;
use crate::scene::deep_copy_with_new_ids;
use kurbo::Vec2;

/// Offset applied to pasted and duplicated elements so copies do not land
/// exactly on their sources.
pub const PASTE_OFFSET: Vec2 = Vec2::new(20.0, 20.0);

/// Application-internal clipboard. Holds deep copies, so later edits or
/// deletion of the source elements never affect what paste produces.
#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    buffer: Vec<Element>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Replace the buffer with deep copies of the given elements. Ids are
    /// regenerated at copy time (and again at every paste), so buffered
    /// elements never share an id with anything in the scene.
    pub fn store(&mut self, elements: &[Element]) {
        let mut copies = deep_copy_with_new_ids(elements);
        for copy in &mut copies {
            copy.selected = false;
        }
        self.buffer = copies;
    }

    /// Produce paste-ready elements: fresh ids, offset position, selected.
    /// The buffer itself is untouched, so repeated pastes all offset from
    /// the original copy position.
    pub fn pasted(&self) -> Vec<Element> {
        let mut copies = deep_copy_with_new_ids(&self.buffer);
        for element in &mut copies {
            element.translate(PASTE_OFFSET);
            element.selected = true;
        }
        copies
    }
}
