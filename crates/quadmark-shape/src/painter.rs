//! Drawing surface abstraction
//!
//! `Shape::paint` only decides *what* to draw; a `Painter` decides how it
//! ends up on screen. The host canvas supplies one per redraw.

use lyon::path::Path;
use quadmark_core::Color;

/// Outline pen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    pub color: Color,
    /// Stroke width in device units
    pub width: i32,
}

impl Pen {
    pub fn new(color: Color, width: i32) -> Self {
        Self { color, width }
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self::new(Color::BLACK, 1)
    }
}

/// Text font selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    /// Size in points
    pub point_size: u32,
    pub bold: bool,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            point_size: 8,
            bold: false,
        }
    }
}

/// Drawing primitives a canvas exposes to shapes
pub trait Painter {
    /// Pen used by `draw_path` and `draw_rect`.
    fn set_pen(&mut self, pen: Pen);

    /// Stroke `path` with the current pen.
    fn draw_path(&mut self, path: &Path);

    /// Fill `path` with `color`, no outline.
    fn fill_path(&mut self, path: &Path, color: Color);

    /// Font used by `draw_text`.
    fn set_font(&mut self, font: Font);

    /// Draw `text` with its baseline starting at `(x, y)`.
    fn draw_text(&mut self, x: i32, y: i32, text: &str);

    /// Stroke an axis-aligned rectangle with the current pen.
    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32);
}

/// One recorded drawing call
#[derive(Debug, Clone)]
pub enum PaintCommand {
    SetPen(Pen),
    DrawPath(Path),
    FillPath(Path, Color),
    SetFont(Font),
    DrawText { x: i32, y: i32, text: String },
    DrawRect { x: i32, y: i32, width: i32, height: i32 },
}

/// Painter that records every call instead of drawing.
///
/// Useful for headless hosts and for asserting on paint output.
#[derive(Debug, Default)]
pub struct RecordingPainter {
    commands: Vec<PaintCommand>,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Every pen set, in order.
    pub fn pens(&self) -> Vec<Pen> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                PaintCommand::SetPen(pen) => Some(*pen),
                _ => None,
            })
            .collect()
    }

    /// Every stroked path, in order.
    pub fn stroked_paths(&self) -> Vec<&Path> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                PaintCommand::DrawPath(path) => Some(path),
                _ => None,
            })
            .collect()
    }

    /// Every fill, in order.
    pub fn fills(&self) -> Vec<(&Path, Color)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                PaintCommand::FillPath(path, color) => Some((path, *color)),
                _ => None,
            })
            .collect()
    }

    /// Every text draw as `(x, y, text)`.
    pub fn texts(&self) -> Vec<(i32, i32, &str)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                PaintCommand::DrawText { x, y, text } => Some((*x, *y, text.as_str())),
                _ => None,
            })
            .collect()
    }

    /// Every rectangle as `(x, y, width, height)`.
    pub fn rects(&self) -> Vec<(i32, i32, i32, i32)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                PaintCommand::DrawRect {
                    x,
                    y,
                    width,
                    height,
                } => Some((*x, *y, *width, *height)),
                _ => None,
            })
            .collect()
    }
}

impl Painter for RecordingPainter {
    fn set_pen(&mut self, pen: Pen) {
        self.commands.push(PaintCommand::SetPen(pen));
    }

    fn draw_path(&mut self, path: &Path) {
        self.commands.push(PaintCommand::DrawPath(path.clone()));
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        self.commands.push(PaintCommand::FillPath(path.clone(), color));
    }

    fn set_font(&mut self, font: Font) {
        self.commands.push(PaintCommand::SetFont(font));
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        self.commands.push(PaintCommand::DrawText {
            x,
            y,
            text: text.to_string(),
        });
    }

    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.commands.push(PaintCommand::DrawRect {
            x,
            y,
            width,
            height,
        });
    }
}
