//! Bounding-box fitting for artboards.
//!
//! Fitting an artboard resizes it to the bounding box of its immediate
//! children and moves every child so that box starts at the artboard's
//! origin.
//!
//! # Example
//!
//! ```
//! use artfit_core::{Bounds, SceneGraph};
//! use artfit_layout::{fit_container, FitOptions};
//! use artfit_scene::Document;
//!
//! let mut doc = Document::new();
//! let page = doc.add_page("Page 1");
//! let board = doc.add_container(page, "Board", Bounds::new(0.0, 0.0, 800.0, 600.0));
//! let logo = doc.add_layer(board, "Logo", Bounds::new(10.0, 20.0, 5.0, 5.0));
//!
//! fit_container(&mut doc, board, &FitOptions::default())?;
//!
//! assert_eq!(doc.rect(board)?, Bounds::new(0.0, 0.0, 5.0, 5.0));
//! assert_eq!(doc.rect(logo)?, Bounds::new(0.0, 0.0, 5.0, 5.0));
//! # Ok::<(), artfit_core::SceneError>(())
//! ```

mod fit;

pub use fit::{content_bounds, fit_container, FitOptions, FitOutcome, HiddenOnlyPolicy};
