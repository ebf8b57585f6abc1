//! Fitting an artboard to its immediate children.

use artfit_core::{Bounds, ElementId, ElementKind, SceneError, SceneGraph};
use glam::DVec2;

/// What to do when every child is hidden and hidden children are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HiddenOnlyPolicy {
    /// Leave the artboard untouched
    #[default]
    Skip,
    /// Measure all children, hidden ones included
    IncludeHidden,
}

/// Options for fitting.
#[derive(Debug, Clone)]
pub struct FitOptions {
    /// Leave hidden children out of the bounding box. They are still moved
    /// with the rest of the content.
    pub ignore_invisible: bool,
    /// Fallback when `ignore_invisible` leaves nothing to measure
    pub hidden_only: HiddenOnlyPolicy,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            ignore_invisible: true,
            hidden_only: HiddenOnlyPolicy::Skip,
        }
    }
}

impl FitOptions {
    /// Measure every child, visible or not.
    pub fn including_hidden() -> Self {
        Self {
            ignore_invisible: false,
            ..Default::default()
        }
    }

    /// Set the hidden-only fallback.
    pub fn with_hidden_only(mut self, policy: HiddenOnlyPolicy) -> Self {
        self.hidden_only = policy;
        self
    }
}

/// Result of fitting one artboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FitOutcome {
    /// The artboard was resized and its children moved.
    Fitted {
        /// Content bounding box, in the artboard's frame before the fit
        bounds: Bounds,
        /// Number of children moved
        moved: usize,
    },
    /// No children; nothing changed.
    Empty,
    /// Only hidden children under [`HiddenOnlyPolicy::Skip`]; nothing changed.
    NoVisibleContent,
}

impl FitOutcome {
    pub fn is_fitted(&self) -> bool {
        matches!(self, FitOutcome::Fitted { .. })
    }
}

enum Measure {
    Empty,
    NoVisibleContent,
    Content {
        children: Vec<ElementId>,
        bounds: Bounds,
    },
}

/// Bounding box a fit of `container` would use, without changing anything.
///
/// `None` when the artboard has no children, or only hidden ones under
/// [`HiddenOnlyPolicy::Skip`].
pub fn content_bounds<S: SceneGraph + ?Sized>(
    scene: &S,
    container: ElementId,
    options: &FitOptions,
) -> Result<Option<Bounds>, SceneError> {
    match measure(scene, container, options)? {
        Measure::Content { bounds, .. } => Ok(Some(bounds)),
        Measure::Empty | Measure::NoVisibleContent => Ok(None),
    }
}

/// Resize an artboard to its content and move the content to its origin.
///
/// The artboard keeps its position; only its size changes. Every immediate
/// child, hidden or not, is shifted by the top-left corner of the measured
/// bounding box.
pub fn fit_container<S: SceneGraph + ?Sized>(
    scene: &mut S,
    container: ElementId,
    options: &FitOptions,
) -> Result<FitOutcome, SceneError> {
    let (children, bounds) = match measure(&*scene, container, options)? {
        Measure::Empty => return Ok(FitOutcome::Empty),
        Measure::NoVisibleContent => {
            tracing::debug!(%container, "artboard has only hidden layers, skipping");
            return Ok(FitOutcome::NoVisibleContent);
        }
        Measure::Content { children, bounds } => (children, bounds),
    };

    let rect = scene.rect(container)?;
    scene.set_rect(container, rect.with_size(bounds.size()))?;

    let offset: DVec2 = -bounds.position();
    for &child in &children {
        let child_rect = scene.rect(child)?;
        scene.set_rect(child, child_rect.translate(offset))?;
    }

    tracing::debug!(
        %container,
        name = scene.name(container).unwrap_or_default(),
        ?bounds,
        moved = children.len(),
        "fitted artboard"
    );

    Ok(FitOutcome::Fitted {
        bounds,
        moved: children.len(),
    })
}

fn measure<S: SceneGraph + ?Sized>(
    scene: &S,
    container: ElementId,
    options: &FitOptions,
) -> Result<Measure, SceneError> {
    match scene.kind(container) {
        Some(ElementKind::Container) => {}
        Some(_) => return Err(SceneError::NotAContainer(container)),
        None => return Err(SceneError::UnknownElement(container)),
    }

    let children = scene.children(container)?;
    if children.is_empty() {
        return Ok(Measure::Empty);
    }

    let mut rects = Vec::with_capacity(children.len());
    let mut hidden = Vec::new();
    for &child in &children {
        let rect = scene.rect(child)?;
        if options.ignore_invisible && !scene.is_visible(child)? {
            tracing::trace!(%container, %child, "hidden layer left out of bounds");
            hidden.push(rect);
        } else {
            rects.push(rect);
        }
    }

    if rects.is_empty() {
        match options.hidden_only {
            HiddenOnlyPolicy::Skip => return Ok(Measure::NoVisibleContent),
            HiddenOnlyPolicy::IncludeHidden => rects = hidden,
        }
    }

    match Bounds::enclosing(rects) {
        Some(bounds) => Ok(Measure::Content { children, bounds }),
        None => Ok(Measure::Empty),
    }
}
