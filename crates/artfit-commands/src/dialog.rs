//! The boundary between commands and the host UI.

use artfit_core::{CommandError, SceneGraph};

use crate::commands::{self, CommandContext, FitReport};
use crate::config::PluginConfig;

/// The host's modal alert.
pub trait Alert {
    /// Show a blocking dialog with a single acknowledge button.
    fn show_dialog(&mut self, title: &str, message: &str);
}

impl<A: Alert + ?Sized> Alert for &mut A {
    fn show_dialog(&mut self, title: &str, message: &str) {
        (**self).show_dialog(title, message)
    }
}

/// Menu-command entry points.
///
/// Each method runs one command to completion. A failed command shows its
/// error in a dialog and returns `None`; errors never reach the host.
pub struct Plugin<A: Alert> {
    alert: A,
    config: PluginConfig,
}

impl<A: Alert> Plugin<A> {
    pub fn new(alert: A, config: PluginConfig) -> Self {
        Self { alert, config }
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    /// Replace the configuration, e.g. after the user edits settings.
    pub fn set_config(&mut self, config: PluginConfig) {
        self.config = config;
    }

    /// Give back the alert, consuming the plugin.
    pub fn into_alert(self) -> A {
        self.alert
    }

    /// "Resize selected artboards".
    pub fn resize_selected<S: SceneGraph + ?Sized>(
        &mut self,
        ctx: CommandContext<'_, S>,
    ) -> Option<FitReport> {
        let result = commands::resize_selected(ctx, &self.config);
        self.present(result)
    }

    /// "Resize all artboards on page".
    pub fn resize_all_on_page<S: SceneGraph + ?Sized>(
        &mut self,
        ctx: CommandContext<'_, S>,
    ) -> Option<FitReport> {
        let result = commands::resize_all_on_page(ctx, &self.config);
        self.present(result)
    }

    /// "Resize artboard", for a single selected artboard.
    pub fn resize_one_selected<S: SceneGraph + ?Sized>(
        &mut self,
        ctx: CommandContext<'_, S>,
    ) -> Option<FitReport> {
        let result = commands::resize_one_selected(ctx, &self.config);
        self.present(result)
    }

    /// "Resize all artboards in document".
    pub fn resize_all_in_document<S: SceneGraph + ?Sized>(
        &mut self,
        ctx: CommandContext<'_, S>,
    ) -> Option<FitReport> {
        let result = commands::resize_all_in_document(ctx, &self.config);
        self.present(result)
    }

    fn present(&mut self, result: Result<FitReport, CommandError>) -> Option<FitReport> {
        match result {
            Ok(report) => Some(report),
            Err(err) => {
                tracing::info!(title = err.title(), error = %err, "command stopped");
                self.alert.show_dialog(err.title(), &err.to_string());
                None
            }
        }
    }
}
