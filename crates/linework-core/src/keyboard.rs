//! Keyboard shortcut resolution.

use crate::input::Modifiers;
use crate::tools::Tool;

/// A key press as delivered by the host shell: the logical key (lowercased
/// character, or a named key) plus modifier state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Character(char),
    Delete,
    Backspace,
    Escape,
}

/// Editor action resolved from a key press.
///
/// Theme and help toggles are surfaced as actions for the host shell; the
/// editor core has no theme or help state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    SelectTool(Tool),
    Undo,
    Redo,
    SelectAll,
    Copy,
    Cut,
    Paste,
    Duplicate,
    DeleteSelection,
    ClearSelection,
    ZoomIn,
    ZoomOut,
    ZoomReset,
    ToggleGrid,
    ToggleTheme,
    ToggleHelp,
}

/// Resolve a key press to an action, or None if the key is unbound.
///
/// Single letters switch tools and toggle panels; the command modifier
/// (ctrl, or meta on macOS) selects the edit operations. Shortcuts are
/// suppressed by the host while a text field has focus, so plain letters
/// are safe bindings here.
pub fn resolve(key: &Key, modifiers: Modifiers) -> Option<ShortcutAction> {
    match key {
        Key::Delete | Key::Backspace => return Some(ShortcutAction::DeleteSelection),
        Key::Escape => return Some(ShortcutAction::ClearSelection),
        Key::Character(_) => {}
    }
    let Key::Character(c) = key else {
        return None;
    };
    let c = c.to_ascii_lowercase();

    if modifiers.command() {
        return match c {
            'z' if modifiers.shift => Some(ShortcutAction::Redo),
            'z' => Some(ShortcutAction::Undo),
            'y' => Some(ShortcutAction::Redo),
            'a' => Some(ShortcutAction::SelectAll),
            'c' => Some(ShortcutAction::Copy),
            'x' => Some(ShortcutAction::Cut),
            'v' => Some(ShortcutAction::Paste),
            'd' => Some(ShortcutAction::Duplicate),
            '0' => Some(ShortcutAction::ZoomReset),
            '+' | '=' => Some(ShortcutAction::ZoomIn),
            '-' => Some(ShortcutAction::ZoomOut),
            _ => None,
        };
    }

    match c {
        's' => Some(ShortcutAction::SelectTool(Tool::Selection)),
        'r' => Some(ShortcutAction::SelectTool(Tool::Rectangle)),
        'c' => Some(ShortcutAction::SelectTool(Tool::Circle)),
        'l' => Some(ShortcutAction::SelectTool(Tool::Line)),
        'a' => Some(ShortcutAction::SelectTool(Tool::Arrow)),
        't' => Some(ShortcutAction::SelectTool(Tool::Text)),
        'f' => Some(ShortcutAction::SelectTool(Tool::Freehand)),
        'g' => Some(ShortcutAction::ToggleGrid),
        'd' => Some(ShortcutAction::ToggleTheme),
        'h' => Some(ShortcutAction::ToggleHelp),
        _ => None,
    }
}
