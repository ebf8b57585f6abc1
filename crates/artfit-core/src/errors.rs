//! Error types for artboard fitting.

use crate::scene::ElementId;
use thiserror::Error;

/// Errors raised by the host scene graph.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("Unknown element {0}")]
    UnknownElement(ElementId),

    #[error("Element {0} is not an artboard")]
    NotAContainer(ElementId),

    #[error("Document has no current page")]
    NoCurrentPage,
}

/// Errors that end a resize command.
///
/// The `Display` text is the message shown to the user; [`CommandError::title`]
/// is the dialog title.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("You need to select an artboard")]
    NoContainerSelected,

    #[error("It looks like there are no artboards on the page named {page_name}.")]
    NoContainersFound { page_name: String },

    #[error("It looks like there are no artboards in this document.")]
    NoContainersInDocument,

    #[error(transparent)]
    Scene(#[from] SceneError),
}

impl CommandError {
    /// Title of the dialog reporting this error.
    pub fn title(&self) -> &'static str {
        match self {
            CommandError::NoContainerSelected => "No artboard selected",
            CommandError::NoContainersFound { .. } | CommandError::NoContainersInDocument => {
                "No Artboards Found"
            }
            CommandError::Scene(_) => "Resize failed",
        }
    }
}
