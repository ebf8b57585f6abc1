//! Document tree data structures.
//!
//! Pages are roots, artboards hang directly off pages, and layers nest
//! arbitrarily below artboards.

use std::collections::HashMap;

use artfit_core::{Bounds, ElementId, ElementKind, SceneError, SceneGraph};
use smallvec::SmallVec;

/// A node in the document tree.
#[derive(Debug, Clone)]
pub struct SceneNode {
    /// Unique ID for this node
    pub id: ElementId,
    /// Page, artboard or layer
    pub kind: ElementKind,
    /// Display name
    pub name: Option<String>,
    /// Rectangle relative to the parent
    pub bounds: Bounds,
    /// Parent node ID (None for pages)
    pub parent: Option<ElementId>,
    /// Child node IDs in document order
    pub children: SmallVec<[ElementId; 8]>,
    /// Whether this node is visible
    pub visible: bool,
}

impl SceneNode {
    /// Create a new node.
    pub fn new(id: ElementId, kind: ElementKind) -> Self {
        Self {
            id,
            kind,
            name: None,
            bounds: Bounds::default(),
            parent: None,
            children: SmallVec::new(),
            visible: true,
        }
    }

    /// Set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the bounds.
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the visibility flag.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

/// A complete design document held in memory.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// All nodes in the tree, indexed by ID
    nodes: HashMap<ElementId, SceneNode>,
    /// Pages in document order
    pages: Vec<ElementId>,
    /// Page shown to the user
    current_page: Option<ElementId>,
    /// Counter for generating unique IDs
    next_id: u64,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a new unique node ID.
    pub fn next_id(&mut self) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add a page. The first page added becomes the current page.
    pub fn add_page(&mut self, name: impl Into<String>) -> ElementId {
        let id = self.next_id();
        let node = SceneNode::new(id, ElementKind::Page).with_name(name);
        self.nodes.insert(id, node);
        self.pages.push(id);
        self.current_page.get_or_insert(id);
        id
    }

    /// Add an artboard to a page.
    pub fn add_container(
        &mut self,
        page: ElementId,
        name: impl Into<String>,
        bounds: Bounds,
    ) -> ElementId {
        let id = self.next_id();
        let node = SceneNode::new(id, ElementKind::Container)
            .with_name(name)
            .with_bounds(bounds);
        self.add_child(page, node)
    }

    /// Add a visible layer under an artboard or another layer.
    pub fn add_layer(
        &mut self,
        parent: ElementId,
        name: impl Into<String>,
        bounds: Bounds,
    ) -> ElementId {
        let id = self.next_id();
        let node = SceneNode::new(id, ElementKind::Layer)
            .with_name(name)
            .with_bounds(bounds);
        self.add_child(parent, node)
    }

    /// Add a hidden layer under an artboard or another layer.
    pub fn add_hidden_layer(
        &mut self,
        parent: ElementId,
        name: impl Into<String>,
        bounds: Bounds,
    ) -> ElementId {
        let id = self.next_id();
        let node = SceneNode::new(id, ElementKind::Layer)
            .with_name(name)
            .with_bounds(bounds)
            .with_visible(false);
        self.add_child(parent, node)
    }

    /// Add a child node to a parent.
    pub fn add_child(&mut self, parent_id: ElementId, mut node: SceneNode) -> ElementId {
        let id = node.id;
        node.parent = Some(parent_id);

        self.nodes.insert(id, node);

        if let Some(parent) = self.nodes.get_mut(&parent_id) {
            parent.children.push(id);
        }

        id
    }

    /// Switch the page shown to the user.
    pub fn set_current_page(&mut self, page: ElementId) -> Result<(), SceneError> {
        match self.nodes.get(&page) {
            Some(node) if node.kind == ElementKind::Page => {
                self.current_page = Some(page);
                Ok(())
            }
            _ => Err(SceneError::UnknownElement(page)),
        }
    }

    /// Find the first node with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<ElementId> {
        let mut matches: Vec<_> = self
            .nodes
            .values()
            .filter(|n| n.name.as_deref() == Some(name))
            .map(|n| n.id)
            .collect();
        matches.sort();
        matches.first().copied()
    }

    /// Iterate over all nodes.
    pub fn nodes(&self) -> impl Iterator<Item = &SceneNode> {
        self.nodes.values()
    }

    fn node(&self, id: ElementId) -> Result<&SceneNode, SceneError> {
        self.nodes.get(&id).ok_or(SceneError::UnknownElement(id))
    }
}

impl SceneGraph for Document {
    fn kind(&self, id: ElementId) -> Option<ElementKind> {
        self.nodes.get(&id).map(|n| n.kind)
    }

    fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.nodes.get(&id).and_then(|n| n.parent)
    }

    fn children(&self, id: ElementId) -> Result<Vec<ElementId>, SceneError> {
        Ok(self.node(id)?.children.to_vec())
    }

    fn rect(&self, id: ElementId) -> Result<Bounds, SceneError> {
        Ok(self.node(id)?.bounds)
    }

    fn set_rect(&mut self, id: ElementId, rect: Bounds) -> Result<(), SceneError> {
        let node = self
            .nodes
            .get_mut(&id)
            .ok_or(SceneError::UnknownElement(id))?;
        node.bounds = rect;
        Ok(())
    }

    fn is_visible(&self, id: ElementId) -> Result<bool, SceneError> {
        Ok(self.node(id)?.visible)
    }

    fn name(&self, id: ElementId) -> Option<&str> {
        self.nodes.get(&id).and_then(|n| n.name.as_deref())
    }

    fn current_page(&self) -> Option<ElementId> {
        self.current_page
    }

    fn pages(&self) -> Vec<ElementId> {
        self.pages.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_tree() {
        let mut doc = Document::new();
        let page = doc.add_page("Page 1");
        let board = doc.add_container(page, "Board", Bounds::new(0.0, 0.0, 800.0, 600.0));
        let group = doc.add_layer(board, "Group", Bounds::new(10.0, 10.0, 100.0, 50.0));
        let nested = doc.add_layer(group, "Nested", Bounds::new(1.0, 1.0, 2.0, 2.0));

        assert_eq!(doc.current_page(), Some(page));
        assert_eq!(doc.children(board).unwrap(), vec![group]);
        assert_eq!(doc.parent(nested), Some(group));
        assert_eq!(doc.parent(page), None);
        assert_eq!(doc.kind(board), Some(ElementKind::Container));
        assert_eq!(doc.name(page), Some("Page 1"));
    }

    #[test]
    fn test_containers_skip_loose_layers() {
        let mut doc = Document::new();
        let page = doc.add_page("Page 1");
        let board = doc.add_container(page, "Board", Bounds::default());
        doc.add_layer(page, "Loose", Bounds::default());

        assert_eq!(doc.containers(page).unwrap(), vec![board]);
    }

    #[test]
    fn test_set_rect() {
        let mut doc = Document::new();
        let page = doc.add_page("Page 1");
        let board = doc.add_container(page, "Board", Bounds::default());

        doc.set_rect(board, Bounds::new(1.0, 2.0, 3.0, 4.0)).unwrap();
        assert_eq!(doc.rect(board).unwrap(), Bounds::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_unknown_element() {
        let mut doc = Document::new();
        let missing = ElementId(99);
        assert_eq!(doc.rect(missing), Err(SceneError::UnknownElement(missing)));
        assert_eq!(
            doc.set_rect(missing, Bounds::default()),
            Err(SceneError::UnknownElement(missing))
        );
        assert_eq!(doc.kind(missing), None);
    }

    #[test]
    fn test_hidden_layer() {
        let mut doc = Document::new();
        let page = doc.add_page("Page 1");
        let board = doc.add_container(page, "Board", Bounds::default());
        let hidden = doc.add_hidden_layer(board, "Hidden", Bounds::default());
        assert_eq!(doc.is_visible(hidden), Ok(false));
    }

    #[test]
    fn test_current_page_switch() {
        let mut doc = Document::new();
        let first = doc.add_page("First");
        let second = doc.add_page("Second");
        assert_eq!(doc.current_page(), Some(first));

        doc.set_current_page(second).unwrap();
        assert_eq!(doc.current_page(), Some(second));

        let board = doc.add_container(second, "Board", Bounds::default());
        assert!(doc.set_current_page(board).is_err());
        assert_eq!(doc.pages(), vec![first, second]);
    }

    #[test]
    fn test_find_by_name() {
        let mut doc = Document::new();
        let page = doc.add_page("Page 1");
        let board = doc.add_container(page, "Board", Bounds::default());
        assert_eq!(doc.find_by_name("Board"), Some(board));
        assert_eq!(doc.find_by_name("Missing"), None);
    }
}
