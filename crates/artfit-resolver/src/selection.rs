//! Mapping selected elements to artboards.

use artfit_core::{ElementId, ElementKind, SceneGraph, Selection};
use indexmap::IndexSet;

/// Longest parent chain followed before giving up.
pub const MAX_ANCESTOR_DEPTH: usize = 1024;

/// The artboard an element belongs to.
///
/// An artboard resolves to itself. Anything else walks up its parents until
/// it meets an artboard, or gives up at a page, a missing parent, or after
/// [`MAX_ANCESTOR_DEPTH`] steps (a host reporting a cyclic parent chain).
pub fn nearest_container<S: SceneGraph + ?Sized>(
    scene: &S,
    element: ElementId,
) -> Option<ElementId> {
    std::iter::successors(Some(element), |&id| scene.parent(id))
        .take(MAX_ANCESTOR_DEPTH)
        .take_while(|&id| scene.kind(id) != Some(ElementKind::Page))
        .find(|&id| scene.is_container(id))
}

/// The distinct artboards touched by a selection, in first-seen order.
///
/// Selected elements outside any artboard are skipped.
pub fn resolve_selection_to_containers<S: SceneGraph + ?Sized>(
    scene: &S,
    selection: &Selection,
) -> IndexSet<ElementId> {
    resolve_each(scene, selection).into_iter().collect()
}

/// One artboard per resolvable selected element, duplicates kept.
pub fn resolve_each<S: SceneGraph + ?Sized>(scene: &S, selection: &Selection) -> Vec<ElementId> {
    selection
        .iter()
        .filter_map(|element| {
            let container = nearest_container(scene, element);
            if container.is_none() {
                tracing::debug!(%element, "selected element is not inside an artboard");
            }
            container
        })
        .collect()
}
