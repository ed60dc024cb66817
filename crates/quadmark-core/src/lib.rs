//! # Quadmark Core
//!
//! Core types shared by the Quadmark crates.
//! Provides the 2D geometry primitives, colors, shared-state aliases and
//! the error type used when parsing user supplied values.

pub mod color;
pub mod error;
pub mod geometry;
pub mod types;

pub use color::Color;
pub use error::{Error, Result};
pub use geometry::{distance, Point, Rect, Vector};
pub use types::{shared, Shared};
