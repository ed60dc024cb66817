//! Quadmark Settings Crate
//!
//! Persists the canvas drawing style (colors, vertex markers, label and
//! canvas defaults) as TOML or JSON and turns it into a `ShapeStyle`.

pub mod config;
pub mod error;

pub use config::{
    default_config_path, CanvasSettings, ColorSettings, ConfigFormat, LabelSettings,
    MarkerSettings, StyleConfig,
};
pub use error::{SettingsError, SettingsResult};
