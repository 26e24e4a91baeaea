//! Tool palette.

use crate::element::ElementKind;
use serde::{Deserialize, Serialize};

/// The active editing tool. Selection manipulates existing elements;
/// every other tool creates an element of the matching kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Selection,
    Rectangle,
    Circle,
    Line,
    Arrow,
    Text,
    Freehand,
}

impl Tool {
    /// Element kind created by this tool, if it is a drawing tool.
    pub fn element_kind(self) -> Option<ElementKind> {
        match self {
            Tool::Selection => None,
            Tool::Rectangle => Some(ElementKind::Rectangle),
            Tool::Circle => Some(ElementKind::Circle),
            Tool::Line => Some(ElementKind::Line),
            Tool::Arrow => Some(ElementKind::Arrow),
            Tool::Text => Some(ElementKind::Text),
            Tool::Freehand => Some(ElementKind::Freehand),
        }
    }

    pub fn is_drawing_tool(self) -> bool {
        self != Tool::Selection
    }
}
