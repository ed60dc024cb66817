//! Drawing defaults shared by every shape on a canvas
//!
//! A canvas owns one `Shared<ShapeStyle>` and hands clones of the handle to
//! each shape it creates. Changing a field through any handle changes the
//! look of every shape that has not overridden that field itself.

use quadmark_core::{shared, Color, Shared};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LINE_COLOR: Color = Color::rgba(0, 255, 0, 128);
pub const DEFAULT_FILL_COLOR: Color = Color::rgba(255, 0, 0, 128);
pub const DEFAULT_SELECT_LINE_COLOR: Color = Color::WHITE;
pub const DEFAULT_SELECT_FILL_COLOR: Color = Color::rgba(0, 128, 255, 155);
pub const DEFAULT_VERTEX_FILL_COLOR: Color = Color::rgba(0, 255, 0, 255);
pub const DEFAULT_HVERTEX_FILL_COLOR: Color = Color::rgb(255, 0, 0);

pub const DEFAULT_POINT_SIZE: f64 = 16.0;
pub const DEFAULT_LABEL_FONT_SIZE: u32 = 8;

/// Marker drawn at each vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointType {
    Square,
    #[default]
    Round,
}

impl std::fmt::Display for PointType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Square => write!(f, "square"),
            Self::Round => write!(f, "round"),
        }
    }
}

/// How the vertex under the pointer is emphasized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightMode {
    /// Vertex is being dragged
    MoveVertex,
    /// Pointer hovers close to the vertex
    #[default]
    NearVertex,
}

impl HighlightMode {
    /// Size multiplier and marker used for the highlighted vertex.
    pub fn marker(self) -> (f64, PointType) {
        match self {
            Self::NearVertex => (4.0, PointType::Round),
            Self::MoveVertex => (1.5, PointType::Square),
        }
    }
}

/// Canvas-wide drawing defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    pub line_color: Color,
    pub fill_color: Color,
    pub select_line_color: Color,
    pub select_fill_color: Color,
    pub vertex_fill_color: Color,
    pub highlight_vertex_fill_color: Color,
    pub point_type: PointType,
    /// Vertex marker diameter in screen pixels
    pub point_size: f64,
    /// Canvas zoom factor
    pub scale: f64,
    /// Label font size in points
    pub label_font_size: u32,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            line_color: DEFAULT_LINE_COLOR,
            fill_color: DEFAULT_FILL_COLOR,
            select_line_color: DEFAULT_SELECT_LINE_COLOR,
            select_fill_color: DEFAULT_SELECT_FILL_COLOR,
            vertex_fill_color: DEFAULT_VERTEX_FILL_COLOR,
            highlight_vertex_fill_color: DEFAULT_HVERTEX_FILL_COLOR,
            point_type: PointType::Round,
            point_size: DEFAULT_POINT_SIZE,
            scale: 1.0,
            label_font_size: DEFAULT_LABEL_FONT_SIZE,
        }
    }
}

impl ShapeStyle {
    /// Wrap the style in a handle that shapes can share.
    pub fn into_shared(self) -> Shared<ShapeStyle> {
        shared(self)
    }

    /// Outline width in device units, kept visually constant across zoom.
    ///
    /// Halfway values round to even, so a scale of 0.8 gives 2, not 3.
    pub fn stroke_width(&self) -> i32 {
        ((2.0 / self.scale).round_ties_even() as i32).max(1)
    }

    /// Vertex marker diameter in canvas units.
    pub fn vertex_size(&self) -> f64 {
        self.point_size / self.scale
    }

    /// Baseline offset keeping a label below the top edge of the canvas.
    pub fn min_label_y(&self) -> i32 {
        (1.25 * self.label_font_size as f64) as i32
    }
}
