//! The resize commands.

use artfit_core::{CommandError, ElementId, SceneError, SceneGraph, Selection};
use artfit_layout::{fit_container, FitOptions, FitOutcome};
use artfit_resolver::{nearest_container, resolve_each, resolve_selection_to_containers};

use crate::config::PluginConfig;

/// What a command was invoked on.
pub struct CommandContext<'a, S: SceneGraph + ?Sized> {
    /// The user's selection at invocation time
    pub selection: &'a Selection,
    /// The host document
    pub document: &'a mut S,
}

impl<'a, S: SceneGraph + ?Sized> CommandContext<'a, S> {
    pub fn new(selection: &'a Selection, document: &'a mut S) -> Self {
        Self {
            selection,
            document,
        }
    }
}

/// Artboards a command touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FitReport {
    /// Artboards resized, in the order they were fitted
    pub fitted: Vec<ElementId>,
    /// Artboards left alone: no layers, or only hidden ones
    pub skipped: Vec<ElementId>,
}

impl FitReport {
    fn record(&mut self, container: ElementId, outcome: FitOutcome) {
        match outcome {
            FitOutcome::Fitted { .. } => self.fitted.push(container),
            FitOutcome::Empty | FitOutcome::NoVisibleContent => self.skipped.push(container),
        }
    }
}

/// Fit every artboard the selection touches.
///
/// Selected layers resolve to the artboard containing them.
#[tracing::instrument(level = "debug", skip_all, fields(selected = ctx.selection.len()))]
pub fn resize_selected<S: SceneGraph + ?Sized>(
    ctx: CommandContext<'_, S>,
    config: &PluginConfig,
) -> Result<FitReport, CommandError> {
    let containers: Vec<ElementId> = if config.dedupe_containers {
        resolve_selection_to_containers(&*ctx.document, ctx.selection)
            .into_iter()
            .collect()
    } else {
        resolve_each(&*ctx.document, ctx.selection)
    };

    if containers.is_empty() {
        return Err(CommandError::NoContainerSelected);
    }

    fit_batch(ctx.document, containers, &config.fit_options())
}

/// Fit every artboard on the current page.
#[tracing::instrument(level = "debug", skip_all)]
pub fn resize_all_on_page<S: SceneGraph + ?Sized>(
    ctx: CommandContext<'_, S>,
    config: &PluginConfig,
) -> Result<FitReport, CommandError> {
    let page = ctx.document.current_page().ok_or(SceneError::NoCurrentPage)?;
    let containers = ctx.document.containers(page)?;

    if containers.is_empty() {
        let page_name = ctx.document.name(page).unwrap_or_default().to_string();
        return Err(CommandError::NoContainersFound { page_name });
    }

    fit_batch(ctx.document, containers, &config.fit_options())
}

/// Fit the first selected element, which must itself be an artboard.
#[tracing::instrument(level = "debug", skip_all)]
pub fn resize_one_selected<S: SceneGraph + ?Sized>(
    ctx: CommandContext<'_, S>,
    config: &PluginConfig,
) -> Result<FitReport, CommandError> {
    let container = ctx
        .selection
        .first()
        .filter(|&id| ctx.document.is_container(id))
        .ok_or(CommandError::NoContainerSelected)?;

    fit_batch(ctx.document, [container], &config.fit_options())
}

/// Fit every artboard on every page.
///
/// Pages without artboards are passed over.
#[tracing::instrument(level = "debug", skip_all)]
pub fn resize_all_in_document<S: SceneGraph + ?Sized>(
    ctx: CommandContext<'_, S>,
    config: &PluginConfig,
) -> Result<FitReport, CommandError> {
    let mut containers = Vec::new();
    for page in ctx.document.pages() {
        containers.extend(ctx.document.containers(page)?);
    }

    if containers.is_empty() {
        return Err(CommandError::NoContainersInDocument);
    }

    fit_batch(ctx.document, containers, &config.fit_options())
}

/// Whether `element` would be fitted by [`resize_selected`].
pub fn is_resizable<S: SceneGraph + ?Sized>(scene: &S, element: ElementId) -> bool {
    nearest_container(scene, element).is_some()
}

fn fit_batch<S, I>(
    document: &mut S,
    containers: I,
    options: &FitOptions,
) -> Result<FitReport, CommandError>
where
    S: SceneGraph + ?Sized,
    I: IntoIterator<Item = ElementId>,
{
    let mut report = FitReport::default();
    for container in containers {
        match fit_container(&mut *document, container, options) {
            Ok(outcome) => report.record(container, outcome),
            Err(err) => {
                tracing::warn!(%container, error = %err, "fitting failed, aborting batch");
                return Err(err.into());
            }
        }
    }
    tracing::debug!(
        fitted = report.fitted.len(),
        skipped = report.skipped.len(),
        "resize finished"
    );
    Ok(report)
}
