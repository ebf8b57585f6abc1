//! Core types for artboard fitting.
//!
//! This crate provides the foundational types shared by the other artfit crates:
//! - Axis-aligned [`Bounds`] and their edge helpers
//! - Element identifiers and kinds
//! - The [`SceneGraph`] trait the host application implements
//! - The user's [`Selection`]
//! - Error types

pub mod errors;
pub mod geometry;
pub mod scene;

pub use errors::*;
pub use geometry::*;
pub use scene::*;
