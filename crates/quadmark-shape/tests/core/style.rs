use std::rc::Rc;

use quadmark_core::{Color, Point};
use quadmark_shape::{RecordingPainter, Shape, ShapeStyle};

#[test]
fn test_shared_default_changes_reach_every_shape() {
    let style = ShapeStyle::default().into_shared();
    let a = Shape::new(Rc::clone(&style));
    let b = Shape::new(Rc::clone(&style));

    style.borrow_mut().line_color = Color::rgb(10, 20, 30);
    assert_eq!(a.line_color(), Color::rgb(10, 20, 30));
    assert_eq!(b.line_color(), Color::rgb(10, 20, 30));
}

#[test]
fn test_override_shadows_default() {
    let style = ShapeStyle::default().into_shared();
    let pending = Shape::new(Rc::clone(&style)).with_line_color(Color::rgb(0, 0, 255));
    let plain = Shape::new(Rc::clone(&style));

    style.borrow_mut().line_color = Color::rgb(1, 1, 1);
    assert_eq!(pending.line_color(), Color::rgb(0, 0, 255));
    assert_eq!(plain.line_color(), Color::rgb(1, 1, 1));
}

#[test]
fn test_clearing_override_falls_back_to_default() {
    let style = ShapeStyle::default().into_shared();
    let mut shape = Shape::new(Rc::clone(&style));
    shape.set_fill_color(Some(Color::rgb(5, 5, 5)));
    assert_eq!(shape.fill_color(), Color::rgb(5, 5, 5));

    shape.set_fill_color(None);
    assert_eq!(shape.fill_color(), style.borrow().fill_color);
}

#[test]
fn test_scale_change_applies_on_next_paint() {
    let style = ShapeStyle::default().into_shared();
    let mut shape = Shape::new(Rc::clone(&style));
    shape.add_point(Point::new(0.0, 0.0));

    let mut painter = RecordingPainter::new();
    shape.paint(&mut painter);
    assert_eq!(painter.pens()[0].width, 2);

    style.borrow_mut().scale = 0.5;
    painter.clear();
    shape.paint(&mut painter);
    assert_eq!(painter.pens()[0].width, 4);
}

#[test]
fn test_copy_carries_differing_overrides() {
    let style = ShapeStyle::default().into_shared();
    let shape = Shape::new(Rc::clone(&style)).with_line_color(Color::rgb(0, 0, 255));
    let copy = shape.copy();

    style.borrow_mut().line_color = Color::rgb(1, 1, 1);
    assert_eq!(copy.line_color(), Color::rgb(0, 0, 255));
    assert_eq!(copy.fill_color(), Color::rgba(255, 0, 0, 128));
}
