//! Error handling for Quadmark core types
//!
//! Covers the failures that can occur when values arrive as text
//! (command line arguments, configuration files):
//! - Color strings that are not `#RRGGBB` / `#RRGGBBAA`
//! - Point strings that are not `x,y`
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A color string could not be parsed
    #[error("Invalid color '{value}': {reason}")]
    InvalidColor {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A point string could not be parsed
    #[error("Invalid point '{value}': expected 'x,y'")]
    InvalidPoint {
        /// The rejected input.
        value: String,
    },
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
