//! Document serialization: the on-disk JSON format and scene import/export.

use crate::element::{Element, ElementId};
use crate::scene::Scene;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Current document format version.
pub const DOCUMENT_VERSION: u32 = 1;

/// Errors raised while loading or saving a document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("failed to parse document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported document version {0}")]
    UnsupportedVersion(u32),
}

/// The serialized document: a version tag and the full element list.
///
/// Selection flags round-trip, so reopening a document restores the
/// selection the user saved with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Format version, for forward-compat checks on load.
    pub version: u32,
    /// Elements in z-order.
    pub elements: Vec<Element>,
}

impl Document {
    /// Snapshot a scene into a document.
    pub fn from_scene(scene: &Scene) -> Self {
        Self {
            version: DOCUMENT_VERSION,
            elements: scene.elements.clone(),
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON, rejecting documents from a newer format version.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let doc: Document = serde_json::from_str(json)?;
        if doc.version > DOCUMENT_VERSION {
            return Err(DocumentError::UnsupportedVersion(doc.version));
        }
        Ok(doc)
    }

    /// Write the document to a file.
    pub fn write_to(&self, path: &Path) -> Result<(), DocumentError> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        debug!("wrote {} elements to {}", self.elements.len(), path.display());
        Ok(())
    }

    /// Read a document from a file.
    pub fn read_from(path: &Path) -> Result<Self, DocumentError> {
        let json = std::fs::read_to_string(path)?;
        let doc = Self::from_json(&json)?;
        debug!("read {} elements from {}", doc.elements.len(), path.display());
        Ok(doc)
    }

    /// Convert into a scene. Duplicate ids (hand-edited or merged documents)
    /// are repaired by regenerating the later occurrence; the primary
    /// selection is derived from the first selected element.
    pub fn into_scene(self) -> Scene {
        let mut seen: HashSet<ElementId> = HashSet::new();
        let mut elements = self.elements;
        for element in &mut elements {
            if !seen.insert(element.id()) {
                element.regenerate_id();
                seen.insert(element.id());
            }
        }
        Scene::from_elements(elements)
    }
}
