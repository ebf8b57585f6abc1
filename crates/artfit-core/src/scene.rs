//! The host scene graph as seen by the fitter.
//!
//! The host application owns the document. Everything here is the narrow
//! interface the fitting commands need from it; `artfit-scene` provides an
//! in-memory implementation.

use crate::errors::SceneError;
use crate::geometry::Bounds;

/// Unique identifier for an element in the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementId(pub u64);

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What an element is, as far as fitting is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ElementKind {
    /// Top-level page holding artboards
    Page,
    /// Artboard; a direct child of a page
    Container,
    /// Any layer below an artboard (shapes, groups, text...)
    Layer,
}

/// Read/write access to the host document.
///
/// Lookups of ids the host does not know fail with
/// [`SceneError::UnknownElement`]; the commands propagate that error and abort.
pub trait SceneGraph {
    /// Kind of an element, or `None` if the id is unknown.
    fn kind(&self, id: ElementId) -> Option<ElementKind>;

    /// Parent of an element. Pages and unknown ids have none. Parent chains
    /// are expected to be acyclic.
    fn parent(&self, id: ElementId) -> Option<ElementId>;

    /// Immediate children, in document order.
    fn children(&self, id: ElementId) -> Result<Vec<ElementId>, SceneError>;

    /// Rectangle relative to the parent.
    fn rect(&self, id: ElementId) -> Result<Bounds, SceneError>;

    /// Replace an element's rectangle.
    fn set_rect(&mut self, id: ElementId, rect: Bounds) -> Result<(), SceneError>;

    /// Visibility flag.
    fn is_visible(&self, id: ElementId) -> Result<bool, SceneError>;

    /// Display name, if the element has one.
    fn name(&self, id: ElementId) -> Option<&str>;

    /// The page currently shown to the user. `None` only for a document
    /// without pages.
    fn current_page(&self) -> Option<ElementId>;

    /// All pages in document order.
    fn pages(&self) -> Vec<ElementId>;

    /// Direct container children of a page.
    fn containers(&self, page: ElementId) -> Result<Vec<ElementId>, SceneError> {
        let children = self.children(page)?;
        Ok(children
            .into_iter()
            .filter(|&id| self.is_container(id))
            .collect())
    }

    /// Whether an element is an artboard.
    fn is_container(&self, id: ElementId) -> bool {
        self.kind(id) == Some(ElementKind::Container)
    }
}

/// The user's current selection, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    items: Vec<ElementId>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// First selected element.
    pub fn first(&self) -> Option<ElementId> {
        self.items.first().copied()
    }

    /// Iterate over the selection in order.
    pub fn iter(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.items.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<ElementId> for Selection {
    fn from_iter<I: IntoIterator<Item = ElementId>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<ElementId>> for Selection {
    fn from(items: Vec<ElementId>) -> Self {
        Self { items }
    }
}
