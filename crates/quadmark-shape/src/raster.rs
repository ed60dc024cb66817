//! Raster painter backed by tiny-skia
//!
//! Renders shapes into an RGBA pixmap, optionally on top of the image being
//! labeled. Canvas coordinates are mapped to pixels with a zoom transform,
//! matching how the interactive canvas scales its painter.
//!
//! Features:
//! - Anti-aliased strokes and fills
//! - Label text through rusttype glyph coverage
//! - Conversion to `image::RgbaImage` for saving

use std::path::Path as FsPath;

use image::{Rgba, RgbaImage};
use lyon::path::{Event, Path};
use quadmark_core::Color;
use rusttype::{point as rt_point, Scale};
use tiny_skia::{
    ColorU8, FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform,
};
use tracing::debug;

use crate::error::{RenderError, RenderResult};
use crate::font_manager;
use crate::painter::{Font, Painter, Pen};

/// Points to pixels at 96 dpi.
const POINTS_TO_PIXELS: f32 = 96.0 / 72.0;

fn skia_color(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

/// Convert a lyon path to a tiny-skia path, `None` if it has no segments.
fn to_skia_path(path: &Path) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for event in path.iter() {
        match event {
            Event::Begin { at } => pb.move_to(at.x, at.y),
            Event::Line { to, .. } => pb.line_to(to.x, to.y),
            Event::Quadratic { ctrl, to, .. } => pb.quad_to(ctrl.x, ctrl.y, to.x, to.y),
            Event::Cubic {
                ctrl1, ctrl2, to, ..
            } => pb.cubic_to(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y),
            Event::End { close, .. } => {
                if close {
                    pb.close();
                }
            }
        }
    }
    pb.finish()
}

/// `Painter` that rasterizes into a `tiny_skia::Pixmap`
pub struct PixmapPainter {
    pixmap: Pixmap,
    transform: Transform,
    pen: Pen,
    font: Font,
}

impl PixmapPainter {
    /// Transparent surface of the given size.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(RenderError::InvalidSize { width, height })?;
        Ok(Self {
            pixmap,
            transform: Transform::identity(),
            pen: Pen::default(),
            font: Font::default(),
        })
    }

    /// Surface initialized with a copy of `background`.
    pub fn from_image(background: &RgbaImage) -> RenderResult<Self> {
        let mut painter = Self::new(background.width(), background.height())?;
        for (dst, src) in painter.pixmap.pixels_mut().iter_mut().zip(background.pixels()) {
            let Rgba([r, g, b, a]) = *src;
            *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
        }
        Ok(painter)
    }

    /// Load the image to label from disk and paint on top of it.
    pub fn from_image_file(path: &FsPath) -> RenderResult<Self> {
        let image = image::open(path)?.to_rgba8();
        debug!(path = %path.display(), width = image.width(), height = image.height(), "loaded background");
        Self::from_image(&image)
    }

    /// Scale canvas coordinates by `zoom` when drawing.
    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.transform = Transform::from_scale(zoom, zoom);
        self
    }

    pub fn fill(&mut self, color: Color) {
        self.pixmap.fill(skia_color(color));
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Straight-alpha color of a single pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::rgba(c.red(), c.green(), c.blue(), c.alpha()))
    }

    pub fn to_image(&self) -> RgbaImage {
        let width = self.pixmap.width();
        let pixels = self.pixmap.pixels();
        RgbaImage::from_fn(width, self.pixmap.height(), |x, y| {
            let c = pixels[(y * width + x) as usize].demultiply();
            Rgba([c.red(), c.green(), c.blue(), c.alpha()])
        })
    }

    /// Write the surface as PNG (format chosen from the extension).
    pub fn save(&self, path: &FsPath) -> RenderResult<()> {
        self.to_image().save(path)?;
        debug!(path = %path.display(), "saved render");
        Ok(())
    }

    fn stroke(&mut self, path: &tiny_skia::Path) {
        let mut paint = Paint::default();
        paint.set_color(skia_color(self.pen.color));
        paint.anti_alias = true;
        let stroke = Stroke {
            width: self.pen.width as f32,
            ..Default::default()
        };
        self.pixmap
            .stroke_path(path, &paint, &stroke, self.transform, None);
    }

    fn to_device(&self, x: f32, y: f32) -> (f32, f32) {
        let t = self.transform;
        (
            t.sx * x + t.kx * y + t.tx,
            t.ky * x + t.sy * y + t.ty,
        )
    }

    // Source-over blend of one glyph coverage sample.
    fn blend_pixel(&mut self, px: i32, py: i32, coverage: f32) {
        let (width, height) = (self.pixmap.width() as i32, self.pixmap.height() as i32);
        if px < 0 || py < 0 || px >= width || py >= height {
            return;
        }
        let color = self.pen.color;
        let alpha = coverage.clamp(0.0, 1.0) * color.a as f32 / 255.0;
        if alpha <= 0.0 {
            return;
        }
        let idx = ((py * width + px) * 4) as usize;
        let pixel = &mut self.pixmap.data_mut()[idx..idx + 4];
        let src = [color.r, color.g, color.b];
        for c in 0..3 {
            let s = src[c] as f32 * alpha;
            pixel[c] = (s + pixel[c] as f32 * (1.0 - alpha)).round() as u8;
        }
        pixel[3] = (alpha * 255.0 + pixel[3] as f32 * (1.0 - alpha)).round() as u8;
    }
}

impl Painter for PixmapPainter {
    fn set_pen(&mut self, pen: Pen) {
        self.pen = pen;
    }

    fn draw_path(&mut self, path: &Path) {
        if let Some(p) = to_skia_path(path) {
            self.stroke(&p);
        }
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        let Some(p) = to_skia_path(path) else {
            return;
        };
        let mut paint = Paint::default();
        paint.set_color(skia_color(color));
        paint.anti_alias = true;
        self.pixmap
            .fill_path(&p, &paint, FillRule::EvenOdd, self.transform, None);
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        if text.is_empty() {
            return;
        }
        let Some(font) = font_manager::label_font(self.font.bold) else {
            return;
        };
        let (dx, dy) = self.to_device(x as f32, y as f32);
        let size = self.font.point_size as f32 * POINTS_TO_PIXELS * self.transform.sy.abs();
        let scale = Scale::uniform(size);

        let glyphs: Vec<_> = font.layout(text, scale, rt_point(dx, dy)).collect();
        for glyph in glyphs {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, v| {
                    self.blend_pixel(gx as i32 + bb.min.x, gy as i32 + bb.min.y, v);
                });
            }
        }
    }

    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let Some(rect) = Rect::from_xywh(x as f32, y as f32, width as f32, height as f32) else {
            return;
        };
        let path = PathBuilder::from_rect(rect);
        self.stroke(&path);
    }
}
