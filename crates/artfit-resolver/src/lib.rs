//! Selection resolution for artboard fitting.
//!
//! Users rarely select the artboard itself; they select a layer inside it.
//! This crate maps each selected element to the artboard that contains it.

mod selection;

pub use selection::{
    nearest_container, resolve_each, resolve_selection_to_containers, MAX_ANCESTOR_DEPTH,
};
