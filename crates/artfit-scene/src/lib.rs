//! In-memory scene graph for artboard fitting.
//!
//! [`Document`] implements [`artfit_core::SceneGraph`] so the fitting commands
//! can run without a host application: in tests, benchmarks, or tools that
//! keep their own copy of a design file.
//!
//! # Example
//!
//! ```
//! use artfit_core::{Bounds, SceneGraph};
//! use artfit_scene::Document;
//!
//! let mut doc = Document::new();
//! let page = doc.add_page("Page 1");
//! let board = doc.add_container(page, "Board", Bounds::new(0.0, 0.0, 100.0, 100.0));
//! doc.add_layer(board, "Logo", Bounds::new(10.0, 20.0, 5.0, 5.0));
//!
//! assert_eq!(doc.containers(page).unwrap(), vec![board]);
//! ```

mod fixture;
mod tree;

pub use fixture::{FixtureError, NodeSpec, PageSpec, SceneSpec};
pub use tree::{Document, SceneNode};
