//! Pointer and modifier input types, independent of any windowing toolkit.

use kurbo::Point;

/// Keyboard modifier state accompanying pointer and key events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const ALT: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: true,
        meta: false,
    };

    /// Platform command key: ctrl on Linux/Windows, command (meta) on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// A pointer event in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Position in scene coordinates (already unprojected from the view).
    pub position: Point,
    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn new(position: Point) -> Self {
        Self {
            position,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_modifiers(position: Point, modifiers: Modifiers) -> Self {
        Self {
            position,
            modifiers,
        }
    }
}
