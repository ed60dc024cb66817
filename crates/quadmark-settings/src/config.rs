//! Style configuration for the labeling canvas
//!
//! Holds the drawing defaults every shape on a canvas shares. Files are
//! JSON or TOML, picked by extension, and stored under the platform config
//! directory by default.
//!
//! Configuration is organized into sections:
//! - Colors (outline, fill, selection, vertex markers)
//! - Vertex markers (shape and size)
//! - Labels
//! - Canvas (zoom and render size)

use quadmark_core::Color;
use quadmark_shape::style::{
    DEFAULT_FILL_COLOR, DEFAULT_HVERTEX_FILL_COLOR, DEFAULT_LABEL_FONT_SIZE, DEFAULT_LINE_COLOR,
    DEFAULT_POINT_SIZE, DEFAULT_SELECT_FILL_COLOR, DEFAULT_SELECT_LINE_COLOR,
    DEFAULT_VERTEX_FILL_COLOR,
};
use quadmark_shape::{PointType, ShapeStyle};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{SettingsError, SettingsResult};

const APP_DIR: &str = "quadmark";
const CONFIG_FILE: &str = "style.toml";

/// On-disk format, chosen from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Outline, fill and marker colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSettings {
    pub line: Color,
    pub fill: Color,
    pub select_line: Color,
    pub select_fill: Color,
    pub vertex_fill: Color,
    /// Marker color while a vertex is highlighted
    pub highlight_vertex_fill: Color,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            line: DEFAULT_LINE_COLOR,
            fill: DEFAULT_FILL_COLOR,
            select_line: DEFAULT_SELECT_LINE_COLOR,
            select_fill: DEFAULT_SELECT_FILL_COLOR,
            vertex_fill: DEFAULT_VERTEX_FILL_COLOR,
            highlight_vertex_fill: DEFAULT_HVERTEX_FILL_COLOR,
        }
    }
}

/// Vertex marker settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerSettings {
    pub point_type: PointType,
    /// Marker diameter in screen pixels
    pub point_size: f64,
}

impl Default for MarkerSettings {
    fn default() -> Self {
        Self {
            point_type: PointType::Round,
            point_size: DEFAULT_POINT_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelSettings {
    /// Font size in points
    pub font_size: u32,
    /// Draw labels next to shapes
    pub paint_label: bool,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_LABEL_FONT_SIZE,
            paint_label: false,
        }
    }
}

/// Canvas zoom and the default render surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    pub scale: f64,
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            scale: 1.0,
            width: 640,
            height: 480,
        }
    }
}

/// Complete style configuration
///
/// Aggregates all sections and provides file I/O.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub colors: ColorSettings,
    pub markers: MarkerSettings,
    pub label: LabelSettings,
    pub canvas: CanvasSettings,
}

impl StyleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!(path = %path.display(), "loaded style config");
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to the defaults.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            warn!(path = %path.display(), "style config not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = ConfigFormat::from_path(path)?;

        let content = self.to_string_as(format)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e))
            })?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        debug!(path = %path.display(), "saved style config");
        Ok(())
    }

    /// Serialize in the given format without touching the disk.
    pub fn to_string_as(&self, format: ConfigFormat) -> SettingsResult<String> {
        Ok(match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        })
    }

    pub fn validate(&self) -> SettingsResult<()> {
        if !(self.markers.point_size > 0.0 && self.markers.point_size.is_finite()) {
            return Err(SettingsError::invalid("markers.point_size", "must be > 0"));
        }

        if !(self.canvas.scale > 0.0 && self.canvas.scale.is_finite()) {
            return Err(SettingsError::invalid("canvas.scale", "must be > 0"));
        }

        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(SettingsError::invalid(
                "canvas",
                "width and height must be > 0",
            ));
        }

        if self.label.font_size == 0 {
            return Err(SettingsError::invalid("label.font_size", "must be > 0"));
        }

        Ok(())
    }

    /// Drawing defaults to share between shapes.
    pub fn to_shape_style(&self) -> ShapeStyle {
        ShapeStyle {
            line_color: self.colors.line,
            fill_color: self.colors.fill,
            select_line_color: self.colors.select_line,
            select_fill_color: self.colors.select_fill,
            vertex_fill_color: self.colors.vertex_fill,
            highlight_vertex_fill_color: self.colors.highlight_vertex_fill,
            point_type: self.markers.point_type,
            point_size: self.markers.point_size,
            scale: self.canvas.scale,
            label_font_size: self.label.font_size,
        }
    }

    /// Capture a live style, keeping this config's label and canvas size.
    pub fn update_from_style(&mut self, style: &ShapeStyle) {
        self.colors = ColorSettings {
            line: style.line_color,
            fill: style.fill_color,
            select_line: style.select_line_color,
            select_fill: style.select_fill_color,
            vertex_fill: style.vertex_fill_color,
            highlight_vertex_fill: style.highlight_vertex_fill_color,
        };
        self.markers = MarkerSettings {
            point_type: style.point_type,
            point_size: style.point_size,
        };
        self.label.font_size = style.label_font_size;
        self.canvas.scale = style.scale;
    }
}

impl From<&ShapeStyle> for StyleConfig {
    fn from(style: &ShapeStyle) -> Self {
        let mut config = Self::default();
        config.update_from_style(style);
        config
    }
}

/// `<config dir>/quadmark/style.toml` for the current platform.
pub fn default_config_path() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
        .ok_or_else(|| {
            SettingsError::ConfigDirectory("no config directory on this platform".to_string())
        })
}
