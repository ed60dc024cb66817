use quadmark_core::{Color, Point, Rect};
use quadmark_shape::{
    court_rects, Font, HighlightMode, PaintCommand, Path, RecordingPainter, Shape, ShapeStyle,
};

fn square(size: f64) -> Shape {
    let mut shape = Shape::new(ShapeStyle::default().into_shared());
    for (x, y) in [(0.0, 0.0), (size, 0.0), (size, size), (0.0, size)] {
        shape.add_point(Point::new(x, y));
    }
    shape
}

fn paint(shape: &mut Shape) -> RecordingPainter {
    let mut painter = RecordingPainter::new();
    shape.paint(&mut painter);
    painter
}

fn bounds(path: &Path) -> Option<Rect> {
    path.iter().next()?;
    let bb = lyon::algorithms::aabb::bounding_box(path.iter());
    Some(Rect::from_ltrb(
        bb.min.x as f64,
        bb.min.y as f64,
        bb.max.x as f64,
        bb.max.y as f64,
    ))
}

fn line_count(path: &Path) -> usize {
    path.iter()
        .filter(|e| matches!(e, lyon::path::Event::Line { .. }))
        .count()
}

#[test]
fn test_empty_shape_draws_nothing() {
    let mut shape = Shape::new(ShapeStyle::default().into_shared());
    shape.paint_label = true;
    shape.fill = true;
    assert!(paint(&mut shape).is_empty());
}

#[test]
fn test_basic_command_sequence() {
    let mut shape = square(100.0);
    let painter = paint(&mut shape);
    let cmds = painter.commands();
    assert_eq!(cmds.len(), 4);
    assert!(matches!(cmds[0], PaintCommand::SetPen(_)));
    assert!(matches!(cmds[1], PaintCommand::DrawPath(_)));
    assert!(matches!(cmds[2], PaintCommand::DrawPath(_)));
    assert!(matches!(cmds[3], PaintCommand::FillPath(_, _)));
}

#[test]
fn test_outline_color_follows_selection() {
    let mut shape = square(10.0);
    let style = ShapeStyle::default();

    let pen = paint(&mut shape).pens()[0];
    assert_eq!(pen.color, style.line_color);
    assert_eq!(pen.width, 2);

    shape.selected = true;
    let pen = paint(&mut shape).pens()[0];
    assert_eq!(pen.color, style.select_line_color);
}

#[test]
fn test_instance_line_color_override() {
    let mut shape = square(10.0);
    shape.set_line_color(Some(Color::rgb(1, 2, 3)));
    assert_eq!(paint(&mut shape).pens()[0].color, Color::rgb(1, 2, 3));

    // Selection color still wins.
    shape.selected = true;
    assert_eq!(
        paint(&mut shape).pens()[0].color,
        ShapeStyle::default().select_line_color
    );
}

#[test]
fn test_pen_width_tracks_scale() {
    let mut shape = square(10.0);
    shape.style().borrow_mut().scale = 0.25;
    assert_eq!(paint(&mut shape).pens()[0].width, 8);

    shape.style().borrow_mut().scale = 10.0;
    assert_eq!(paint(&mut shape).pens()[0].width, 1);
}

#[test]
fn test_outline_closing_edge() {
    let mut shape = square(10.0);
    let painter = paint(&mut shape);
    let open_lines = line_count(painter.stroked_paths()[0]);

    shape.close();
    let painter = paint(&mut shape);
    let closed_lines = line_count(painter.stroked_paths()[0]);
    assert_eq!(closed_lines, open_lines + 1);
}

#[test]
fn test_vertex_markers_default_size() {
    let mut shape = square(100.0);
    let painter = paint(&mut shape);
    let vertex_path = painter.stroked_paths()[1];
    let rect = bounds(vertex_path).unwrap();
    // Round markers of diameter 16 around each corner.
    assert!((rect.left() + 8.0).abs() < 0.5);
    assert!((rect.right() - 108.0).abs() < 0.5);
    assert_eq!(painter.fills()[0].1, ShapeStyle::default().vertex_fill_color);
}

#[test]
fn test_near_vertex_highlight_enlarges_marker() {
    let mut shape = square(100.0);
    shape.highlight_vertex(0, HighlightMode::NearVertex);
    let painter = paint(&mut shape);
    let rect = bounds(painter.stroked_paths()[1]).unwrap();
    // 4x round marker on vertex 0, radius 32.
    assert!((rect.left() + 32.0).abs() < 0.5);
    assert!((rect.top() + 32.0).abs() < 0.5);
    assert!((rect.right() - 108.0).abs() < 0.5);
}

#[test]
fn test_move_vertex_highlight_uses_square() {
    let mut shape = square(100.0);
    shape.highlight_vertex(2, HighlightMode::MoveVertex);
    let painter = paint(&mut shape);
    let rect = bounds(painter.stroked_paths()[1]).unwrap();
    // 1.5x square marker on vertex 2, half side 12.
    assert_eq!(rect.right(), 112.0);
    assert_eq!(rect.bottom(), 112.0);
}

#[test]
fn test_highlight_tints_all_markers() {
    let mut shape = square(10.0);
    let style = ShapeStyle::default();

    shape.highlight_vertex(3, HighlightMode::NearVertex);
    let painter = paint(&mut shape);
    assert_eq!(painter.fills()[0].1, style.highlight_vertex_fill_color);
    assert_eq!(shape.vertex_fill_color(), style.highlight_vertex_fill_color);

    shape.highlight_clear();
    let painter = paint(&mut shape);
    assert_eq!(painter.fills()[0].1, style.vertex_fill_color);
    assert_eq!(shape.vertex_fill_color(), style.vertex_fill_color);
}

#[test]
fn test_vertex_color_is_captured_at_paint_time() {
    let mut shape = square(10.0);
    paint(&mut shape);
    shape.style().borrow_mut().vertex_fill_color = Color::rgb(7, 7, 7);
    // Not repainted yet: still the color stored by the last paint.
    assert_eq!(shape.vertex_fill_color(), ShapeStyle::default().vertex_fill_color);

    paint(&mut shape);
    assert_eq!(shape.vertex_fill_color(), Color::rgb(7, 7, 7));
}

#[test]
fn test_label_pushed_below_canvas_top() {
    let mut shape = Shape::new(ShapeStyle::default().into_shared()).with_paint_label(true);
    for (x, y) in [(3.7, 5.0), (40.0, 5.0), (40.0, 30.0), (3.7, 30.0)] {
        shape.add_point(Point::new(x, y));
    }
    assert!(shape.label.is_none());

    let painter = paint(&mut shape);
    assert_eq!(painter.texts(), vec![(3, 15, "")]);
    assert_eq!(shape.label(), Some(""));
    assert!(painter.commands().iter().any(|c| matches!(
        c,
        PaintCommand::SetFont(Font {
            point_size: 8,
            bold: true
        })
    )));
}

#[test]
fn test_label_at_top_left_of_vertices() {
    let mut shape = Shape::new(ShapeStyle::default().into_shared())
        .with_label("court")
        .with_paint_label(true);
    for (x, y) in [(20.0, 50.0), (60.0, 40.0), (70.0, 90.0)] {
        shape.add_point(Point::new(x, y));
    }
    let painter = paint(&mut shape);
    assert_eq!(painter.texts(), vec![(20, 40, "court")]);
}

#[test]
fn test_label_not_drawn_unless_enabled() {
    let mut shape = square(10.0).with_label("hidden");
    assert!(paint(&mut shape).texts().is_empty());

    shape.paint_label = true;
    shape.set_label(Some("shown".to_string()));
    assert_eq!(paint(&mut shape).texts(), vec![(0, 10, "shown")]);
}

#[test]
fn test_fill_colors() {
    let style = ShapeStyle::default();
    let mut shape = square(10.0);
    shape.fill = true;

    let painter = paint(&mut shape);
    let fills = painter.fills();
    assert_eq!(fills.len(), 2);
    assert_eq!(fills[1].1, style.fill_color);

    shape.selected = true;
    let painter = paint(&mut shape);
    assert_eq!(painter.fills()[1].1, style.select_fill_color);

    shape.selected = false;
    shape.set_fill_color(Some(Color::rgb(0, 0, 9)));
    let painter = paint(&mut shape);
    assert_eq!(painter.fills()[1].1, Color::rgb(0, 0, 9));
}

#[test]
fn test_court_overlay_requires_center_and_rotation() {
    let mut shape = square(100.0);
    shape.is_rotated = true;
    assert!(paint(&mut shape).rects().is_empty());

    shape.is_rotated = false;
    shape.close();
    assert!(paint(&mut shape).rects().is_empty());

    shape.is_rotated = true;
    let painter = paint(&mut shape);
    let expected: Vec<_> = court_rects(&Rect::new(0.0, 0.0, 100.0, 100.0))
        .iter()
        .map(|r| (r.x, r.y, r.width, r.height))
        .collect();
    assert_eq!(painter.rects(), expected);
}

#[test]
fn test_court_overlay_center_marker() {
    let mut shape = square(100.0);
    shape.close();
    shape.is_rotated = true;
    let painter = paint(&mut shape);

    // outline, vertices, center marker
    let stroked = painter.stroked_paths();
    assert_eq!(stroked.len(), 3);
    assert_eq!(
        bounds(stroked[2]),
        Some(Rect::new(42.0, 42.0, 16.0, 16.0))
    );
    let fills = painter.fills();
    assert_eq!(fills.last().map(|f| f.1), Some(shape.vertex_fill_color()));
}

#[test]
fn test_court_overlay_uses_axis_aligned_bounds_after_rotation() {
    let mut shape = square(100.0);
    shape.close();
    shape.is_rotated = true;
    shape.rotate(std::f64::consts::FRAC_PI_4);

    let raw = Rect::from_points(shape.points()).unwrap();
    let painter = paint(&mut shape);
    let outer = painter.rects()[0];
    assert_eq!(outer.0, raw.x as i32);
    assert_eq!(outer.1, raw.y as i32);
    assert_eq!(outer.2, raw.width as i32);
    assert_eq!(outer.3, raw.height as i32);
}
