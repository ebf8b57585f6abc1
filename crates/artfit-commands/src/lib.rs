//! Resize-artboard commands for design-tool plugins.
//!
//! The host wires its menu items to the methods of [`Plugin`], passing a
//! [`CommandContext`] with the current selection and document. Commands fit
//! artboards through `artfit-layout`; anything that goes wrong comes back as a
//! [`CommandError`](artfit_core::CommandError), which [`Plugin`] reports
//! through the host's [`Alert`] and nothing else.
//!
//! # Example
//!
//! ```
//! use artfit_commands::{Alert, CommandContext, Plugin, PluginConfig};
//! use artfit_core::{Bounds, Selection};
//! use artfit_scene::Document;
//!
//! struct Stderr;
//!
//! impl Alert for Stderr {
//!     fn show_dialog(&mut self, title: &str, message: &str) {
//!         eprintln!("{}: {}", title, message);
//!     }
//! }
//!
//! let mut doc = Document::new();
//! let page = doc.add_page("Page 1");
//! let board = doc.add_container(page, "Board", Bounds::new(0.0, 0.0, 800.0, 600.0));
//! let logo = doc.add_layer(board, "Logo", Bounds::new(10.0, 20.0, 5.0, 5.0));
//!
//! let mut plugin = Plugin::new(Stderr, PluginConfig::default());
//! let selection = Selection::from(vec![logo]);
//! let report = plugin.resize_selected(CommandContext::new(&selection, &mut doc));
//!
//! assert_eq!(report.unwrap().fitted, vec![board]);
//! ```

mod commands;
mod config;
mod dialog;

pub use commands::{
    is_resizable, resize_all_in_document, resize_all_on_page, resize_one_selected,
    resize_selected, CommandContext, FitReport,
};
pub use config::{ConfigError, PluginConfig};
pub use dialog::{Alert, Plugin};
