//! Linework Core Library
//!
//! Platform-agnostic scene model and editing engine for the Linework vector
//! drawing editor: elements, geometry, selection, undo history, pointer
//! interaction, clipboard, and the document format. Rendering backends and
//! windowing live in host crates built on the [`render::Renderer`] trait.

pub mod clipboard;
pub mod document;
pub mod editor;
pub mod element;
pub mod geometry;
pub mod handles;
pub mod history;
pub mod input;
pub mod interaction;
pub mod keyboard;
pub mod render;
pub mod scene;
pub mod tools;

pub use clipboard::Clipboard;
pub use document::{Document, DocumentError, DOCUMENT_VERSION};
pub use editor::{Editor, GridSettings, InteractionState, ShellRequest};
pub use element::{
    Element, ElementId, ElementKind, ElementStyle, PropertyEdit, SerializableColor, Shape,
};
pub use handles::{Handle, HandleKind};
pub use history::{History, MAX_HISTORY};
pub use input::{Modifiers, PointerEvent};
pub use keyboard::{resolve as resolve_shortcut, Key, ShortcutAction};
pub use render::{draw_scene, Renderer};
pub use scene::Scene;
pub use tools::Tool;
