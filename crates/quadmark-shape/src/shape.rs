//! Editable quadrilateral annotation
//!
//! A `Shape` collects up to four vertices as the user clicks, is closed
//! once the last corner is placed, and can then be dragged, rotated
//! around its center, highlighted and painted.
//!
//! Several operations carry preconditions the caller is expected to meet
//! (closing needs three vertices, rotating needs a center). They are listed
//! under `# Panics` rather than turned into recoverable errors, because
//! the canvas driving a shape already knows which state it is in.

use std::f64::consts::TAU;
use std::ops::{Index, IndexMut};
use std::rc::Rc;

use lyon::path::Path;
use quadmark_core::{distance, Color, Point, Rect, Shared, Vector};
use tracing::{debug, trace};

use crate::court::court_rects;
use crate::painter::{Font, Painter, Pen};
use crate::path::{self, PathBuilder};
use crate::style::{HighlightMode, ShapeStyle};

/// Maximum number of vertices a shape holds.
pub const MAX_POINTS: usize = 4;

/// A polygon annotation with at most four vertices
#[derive(Debug)]
pub struct Shape {
    pub label: Option<String>,
    pub fill: bool,
    pub selected: bool,
    pub difficult: bool,
    pub paint_label: bool,
    pub is_rotated: bool,

    points: Vec<Point>,
    closed: bool,
    center: Option<Point>,
    direction: f64,

    highlight_index: Option<usize>,
    highlight_mode: HighlightMode,

    line_color: Option<Color>,
    fill_color: Option<Color>,
    vertex_fill_color: Option<Color>,

    style: Shared<ShapeStyle>,
}

impl Shape {
    /// Empty, open, unselected shape drawing with the given defaults.
    pub fn new(style: Shared<ShapeStyle>) -> Self {
        trace!("created shape");
        Self {
            label: None,
            fill: false,
            selected: false,
            difficult: false,
            paint_label: false,
            is_rotated: false,
            points: Vec::with_capacity(MAX_POINTS),
            closed: false,
            center: None,
            direction: 0.0,
            highlight_index: None,
            highlight_mode: HighlightMode::NearVertex,
            line_color: None,
            fill_color: None,
            vertex_fill_color: None,
            style,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Per-shape outline color, e.g. for the line still being drawn.
    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = Some(color);
        self
    }

    pub fn with_difficult(mut self, difficult: bool) -> Self {
        self.difficult = difficult;
        self
    }

    pub fn with_paint_label(mut self, paint_label: bool) -> Self {
        self.paint_label = paint_label;
        self
    }

    pub fn with_rotated(mut self, is_rotated: bool) -> Self {
        self.is_rotated = is_rotated;
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    // ---------------------------------------------------------------------
    // Vertices
    // ---------------------------------------------------------------------

    /// Append a vertex; ignored once the shape holds `MAX_POINTS`.
    pub fn add_point(&mut self, point: Point) {
        if self.reach_max_points() {
            trace!(?point, "shape full, point ignored");
            return;
        }
        self.points.push(point);
    }

    /// Remove and return the last vertex.
    pub fn pop_point(&mut self) -> Option<Point> {
        self.points.pop()
    }

    pub fn reach_max_points(&self) -> bool {
        self.points.len() >= MAX_POINTS
    }

    /// Mark the shape closed and fix its rotation center at the midpoint of
    /// the diagonal from vertex 0 to vertex 2.
    ///
    /// The center is not updated by later moves.
    ///
    /// # Panics
    ///
    /// Panics if the shape has fewer than three vertices.
    pub fn close(&mut self) {
        let center = self.points[0].midpoint(&self.points[2]);
        debug!(?center, "closing shape");
        self.center = Some(center);
        self.closed = true;
    }

    pub fn set_open(&mut self) {
        self.closed = false;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    // ---------------------------------------------------------------------
    // Rotation
    // ---------------------------------------------------------------------

    pub fn center(&self) -> Option<Point> {
        self.center
    }

    /// Accumulated rotation in radians, in `[0, 2π)`.
    pub fn direction(&self) -> f64 {
        self.direction
    }

    /// Rotate `p` by `theta` around the shape's center. Positive angles turn
    /// clockwise on a y-down canvas.
    ///
    /// # Panics
    ///
    /// Panics if the shape has no center, i.e. `close` was never called.
    pub fn rotate_point(&self, p: Point, theta: f64) -> Point {
        let Some(center) = self.center else {
            panic!("rotate_point called on a shape without a center; close() it first");
        };
        let order = p - center;
        let (sin, cos) = theta.sin_cos();
        let rx = cos * order.x + sin * order.y;
        let ry = -sin * order.x + cos * order.y;
        Point::new(center.x + rx, center.y + ry)
    }

    /// Rotate every vertex by `theta` and record the turn in `direction`.
    ///
    /// # Panics
    ///
    /// Panics if the shape has no center.
    pub fn rotate(&mut self, theta: f64) {
        for i in 0..self.points.len() {
            self.points[i] = self.rotate_point(self.points[i], theta);
        }
        self.direction = normalize_angle(self.direction - theta);
        debug!(theta, direction = self.direction, "rotated shape");
    }

    // ---------------------------------------------------------------------
    // Hit-testing
    // ---------------------------------------------------------------------

    /// Index of the vertex closest to `point` and no further than
    /// `epsilon` away. The first vertex wins a tie.
    pub fn nearest_vertex(&self, point: Point, epsilon: f64) -> Option<usize> {
        let mut index = None;
        let mut threshold = epsilon;
        for (i, p) in self.points.iter().enumerate() {
            let dist = distance(*p - point);
            let within = match index {
                None => dist <= threshold,
                Some(_) => dist < threshold,
            };
            if within {
                index = Some(i);
                threshold = dist;
            }
        }
        index
    }

    /// Whether `point` lies inside the area enclosed by the vertices.
    pub fn contains_point(&self, point: Point) -> bool {
        path::contains(&self.points, point)
    }

    /// Path from the first vertex to the last. The closing edge is never
    /// included, whatever `is_closed` says.
    pub fn make_path(&self) -> Option<Path> {
        path::polyline(&self.points)
    }

    /// Bounds of `make_path`, `None` while the shape has no vertices.
    ///
    /// The open path visits every vertex, so its bounds are the vertex
    /// extents, taken here in full precision.
    pub fn bounding_rect(&self) -> Option<Rect> {
        Rect::from_points(&self.points)
    }

    // ---------------------------------------------------------------------
    // Mutation
    // ---------------------------------------------------------------------

    /// Translate every vertex. The rotation center stays where it was.
    pub fn move_by(&mut self, offset: Vector) {
        for p in &mut self.points {
            *p += offset;
        }
    }

    /// # Panics
    ///
    /// Panics if `i` is out of range.
    pub fn move_vertex_by(&mut self, i: usize, offset: Vector) {
        self.points[i] += offset;
    }

    pub fn highlight_vertex(&mut self, i: usize, mode: HighlightMode) {
        self.highlight_index = Some(i);
        self.highlight_mode = mode;
    }

    pub fn highlight_clear(&mut self) {
        self.highlight_index = None;
    }

    pub fn highlight_index(&self) -> Option<usize> {
        self.highlight_index
    }

    pub fn highlight_mode(&self) -> HighlightMode {
        self.highlight_mode
    }

    // ---------------------------------------------------------------------
    // Style
    // ---------------------------------------------------------------------

    pub fn style(&self) -> &Shared<ShapeStyle> {
        &self.style
    }

    pub fn line_color(&self) -> Color {
        self.line_color
            .unwrap_or_else(|| self.style.borrow().line_color)
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
            .unwrap_or_else(|| self.style.borrow().fill_color)
    }

    /// Vertex color as of the last paint, or the shared default if the
    /// shape was never painted.
    pub fn vertex_fill_color(&self) -> Color {
        self.vertex_fill_color
            .unwrap_or_else(|| self.style.borrow().vertex_fill_color)
    }

    pub fn set_line_color(&mut self, color: Option<Color>) {
        self.line_color = color;
    }

    pub fn set_fill_color(&mut self, color: Option<Color>) {
        self.fill_color = color;
    }

    // ---------------------------------------------------------------------
    // Painting
    // ---------------------------------------------------------------------

    /// Draw the outline, vertex markers, and optionally the label, the fill
    /// and the court overlay.
    ///
    /// Side effects: the vertex color is stored on the shape (the
    /// highlight color while any vertex is highlighted, otherwise the
    /// shared default), and an unset label becomes empty when painted.
    pub fn paint(&mut self, painter: &mut dyn Painter) {
        if self.points.is_empty() {
            return;
        }
        let style = self.style.borrow().clone();
        trace!(
            points = self.points.len(),
            closed = self.closed,
            highlight = ?self.highlight_index,
            "painting shape"
        );

        let color = if self.selected {
            style.select_line_color
        } else {
            self.line_color()
        };
        painter.set_pen(Pen::new(color, style.stroke_width()));

        let Some(line_path) = path::outline(&self.points, self.closed) else {
            return;
        };

        let mut vertex_builder = Path::builder();
        for i in 0..self.points.len() {
            self.draw_vertex(&mut vertex_builder, i, &style);
        }
        let vertex_path = vertex_builder.build();

        painter.draw_path(&line_path);
        painter.draw_path(&vertex_path);
        painter.fill_path(&vertex_path, self.vertex_fill_color());

        // Raw vertex bounds, used for the label and the court overlay.
        let Some(bounds) = Rect::from_points(&self.points) else {
            return;
        };

        if self.paint_label {
            self.paint_label_text(painter, &bounds, &style);
        }

        if self.fill {
            let color = if self.selected {
                style.select_fill_color
            } else {
                self.fill_color()
            };
            painter.fill_path(&line_path, color);
        }

        if let Some(center) = self.center.filter(|_| self.is_rotated) {
            let mut builder = Path::builder();
            path::add_square(&mut builder, center, style.vertex_size());
            let center_path = builder.build();
            painter.draw_path(&center_path);
            painter.fill_path(&center_path, self.vertex_fill_color());

            for r in court_rects(&bounds) {
                painter.draw_rect(r.x, r.y, r.width, r.height);
            }
        }
    }

    fn paint_label_text(&mut self, painter: &mut dyn Painter, bounds: &Rect, style: &ShapeStyle) {
        painter.set_font(Font {
            point_size: style.label_font_size,
            bold: true,
        });
        let label = self.label.get_or_insert_with(String::new);

        let min_y_label = style.min_label_y();
        let mut min_y = bounds.top();
        if min_y < min_y_label as f64 {
            min_y += min_y_label as f64;
        }
        painter.draw_text(bounds.left() as i32, min_y as i32, label);
    }

    fn draw_vertex(&mut self, builder: &mut PathBuilder, i: usize, style: &ShapeStyle) {
        let mut d = style.vertex_size();
        let mut kind = style.point_type;
        if self.highlight_index == Some(i) {
            let (size, highlight_kind) = self.highlight_mode.marker();
            d *= size;
            kind = highlight_kind;
        }
        // Any highlighted vertex tints every marker.
        self.vertex_fill_color = Some(if self.highlight_index.is_some() {
            style.highlight_vertex_fill_color
        } else {
            style.vertex_fill_color
        });
        path::add_marker(builder, self.points[i], d, kind);
    }

    // ---------------------------------------------------------------------
    // Copy
    // ---------------------------------------------------------------------

    /// Duplicate for undo snapshots and copy/paste.
    ///
    /// Vertices are copied by value. Geometry state, flags and the label
    /// come along; color overrides only if they differ from the shared
    /// defaults. Highlight state is not copied. An unset label stays
    /// `None` rather than becoming the text "None".
    pub fn copy(&self) -> Shape {
        let mut shape = Shape::new(Rc::clone(&self.style));
        shape.label = self.label.clone();
        shape.points = self.points.clone();

        shape.center = self.center;
        shape.direction = self.direction;
        shape.is_rotated = self.is_rotated;

        shape.fill = self.fill;
        shape.selected = self.selected;
        shape.closed = self.closed;

        let (default_line, default_fill) = {
            let style = self.style.borrow();
            (style.line_color, style.fill_color)
        };
        if self.line_color() != default_line {
            shape.line_color = Some(self.line_color());
        }
        if self.fill_color() != default_fill {
            shape.fill_color = Some(self.fill_color());
        }
        shape.difficult = self.difficult;
        shape
    }
}

impl Index<usize> for Shape {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.points[index]
    }
}

impl IndexMut<usize> for Shape {
    fn index_mut(&mut self, index: usize) -> &mut Point {
        &mut self.points[index]
    }
}

impl<'a> IntoIterator for &'a Shape {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Wrap an angle into `[0, 2π)`.
fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}
