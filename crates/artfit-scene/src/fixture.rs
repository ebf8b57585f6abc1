//! JSON description of a document.
//!
//! ```json
//! {
//!   "pages": [
//!     {
//!       "name": "Page 1",
//!       "artboards": [
//!         {
//!           "name": "Board",
//!           "rect": { "x": 0, "y": 0, "width": 100, "height": 100 },
//!           "children": [
//!             { "name": "Logo", "rect": { "x": 10, "y": 20, "width": 5, "height": 5 } },
//!             { "name": "Guide", "rect": { "x": 0, "y": 0, "width": 1, "height": 1 }, "visible": false }
//!           ]
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```

use artfit_core::{Bounds, ElementId, ElementKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tree::{Document, SceneNode};

/// Errors while loading a document description.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Invalid scene JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Current page '{0}' does not exist")]
    UnknownPage(String),
}

/// A whole document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneSpec {
    pub pages: Vec<PageSpec>,
    /// Name of the current page; defaults to the first page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_page: Option<String>,
}

/// A page with its artboards and any loose layers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageSpec {
    pub name: String,
    #[serde(default)]
    pub artboards: Vec<NodeSpec>,
    #[serde(default)]
    pub layers: Vec<NodeSpec>,
}

/// An artboard or layer and its subtree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSpec {
    pub name: String,
    pub rect: Bounds,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub children: Vec<NodeSpec>,
}

fn default_visible() -> bool {
    true
}

impl SceneSpec {
    /// Parse a description from JSON.
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the in-memory document.
    pub fn build(&self) -> Result<Document, FixtureError> {
        let mut doc = Document::new();
        let mut current = None;

        for page_spec in &self.pages {
            let page = doc.add_page(page_spec.name.clone());
            if self.current_page.as_deref() == Some(page_spec.name.as_str()) {
                current = Some(page);
            }
            for artboard in &page_spec.artboards {
                add_node(&mut doc, page, ElementKind::Container, artboard);
            }
            for layer in &page_spec.layers {
                add_node(&mut doc, page, ElementKind::Layer, layer);
            }
        }

        if let Some(name) = &self.current_page {
            let page = current.ok_or_else(|| FixtureError::UnknownPage(name.clone()))?;
            doc.set_current_page(page)
                .map_err(|_| FixtureError::UnknownPage(name.clone()))?;
        }

        Ok(doc)
    }
}

impl Document {
    /// Load a document from its JSON description.
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        SceneSpec::from_json(json)?.build()
    }
}

fn add_node(doc: &mut Document, parent: ElementId, kind: ElementKind, spec: &NodeSpec) {
    let id = doc.next_id();
    let node = SceneNode::new(id, kind)
        .with_name(spec.name.clone())
        .with_bounds(spec.rect)
        .with_visible(spec.visible);
    doc.add_child(parent, node);

    for child in &spec.children {
        add_node(doc, id, ElementKind::Layer, child);
    }
}
