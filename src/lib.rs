//! # Quadmark
//!
//! Editable quadrilateral annotations for image labeling canvases.
//!
//! ## Architecture
//!
//! Quadmark is organized as a workspace with multiple crates:
//!
//! 1. **quadmark-core** - Geometry primitives, colors, errors, shared-state aliases
//! 2. **quadmark-shape** - The `Shape` annotation, painters and the court overlay
//! 3. **quadmark-settings** - Style configuration persisted as TOML or JSON
//! 4. **quadmark** - CLI that renders shapes to PNG and manages the style config

pub mod cli;
pub mod commands;

pub use quadmark_core::{distance, shared, Color, Error, Point, Rect, Result, Shared, Vector};
pub use quadmark_settings::{default_config_path, SettingsError, StyleConfig};
pub use quadmark_shape::{
    HighlightMode, PaintCommand, Painter, PixmapPainter, PointType, RecordingPainter, Shape,
    ShapeStyle, MAX_POINTS,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty formatted output on stderr, keeping stdout for command output
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
