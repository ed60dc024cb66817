use quadmark_core::Point;
use quadmark_shape::{Shape, ShapeStyle, MAX_POINTS};

fn new_shape() -> Shape {
    Shape::new(ShapeStyle::default().into_shared())
}

#[test]
fn test_new_shape_is_empty_and_open() {
    let shape = new_shape();
    assert!(shape.is_empty());
    assert!(!shape.is_closed());
    assert!(!shape.selected);
    assert_eq!(shape.center(), None);
    assert_eq!(shape.direction(), 0.0);
}

#[test]
fn test_add_point_up_to_four() {
    let mut shape = new_shape();
    for i in 0..MAX_POINTS {
        shape.add_point(Point::new(i as f64, 0.0));
        assert_eq!(shape.len(), i + 1);
    }
    assert!(shape.reach_max_points());
}

#[test]
fn test_fifth_point_is_ignored() {
    let mut shape = new_shape();
    for i in 0..4 {
        shape.add_point(Point::new(i as f64, i as f64));
    }
    let before = shape.points().to_vec();
    shape.add_point(Point::new(99.0, 99.0));
    assert_eq!(shape.len(), 4);
    assert_eq!(shape.points(), before.as_slice());
}

#[test]
fn test_pop_point() {
    let mut shape = new_shape();
    assert_eq!(shape.pop_point(), None);

    shape.add_point(Point::new(1.0, 2.0));
    shape.add_point(Point::new(3.0, 4.0));
    assert_eq!(shape.pop_point(), Some(Point::new(3.0, 4.0)));
    assert_eq!(shape.len(), 1);
    assert_eq!(shape.pop_point(), Some(Point::new(1.0, 2.0)));
    assert_eq!(shape.pop_point(), None);
}

#[test]
fn test_close_sets_center_from_diagonal() {
    let mut shape = new_shape();
    for (x, y) in [(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)] {
        shape.add_point(Point::new(x, y));
    }
    shape.close();
    assert!(shape.is_closed());
    assert_eq!(shape.center(), Some(Point::new(1.0, 1.0)));

    shape.set_open();
    assert!(!shape.is_closed());
    assert_eq!(shape.center(), Some(Point::new(1.0, 1.0)));
}

#[test]
fn test_close_with_three_points() {
    let mut shape = new_shape();
    for (x, y) in [(0.0, 0.0), (4.0, 0.0), (4.0, 6.0)] {
        shape.add_point(Point::new(x, y));
    }
    shape.close();
    assert_eq!(shape.center(), Some(Point::new(2.0, 3.0)));
}

#[test]
#[should_panic]
fn test_close_without_enough_points_panics() {
    let mut shape = new_shape();
    shape.add_point(Point::new(0.0, 0.0));
    shape.close();
}

#[test]
fn test_move_by_leaves_center_behind() {
    let mut shape = new_shape();
    for (x, y) in [(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)] {
        shape.add_point(Point::new(x, y));
    }
    shape.close();
    shape.move_by(Point::new(10.0, 5.0));
    assert_eq!(shape[0], Point::new(10.0, 5.0));
    assert_eq!(shape[2], Point::new(12.0, 7.0));
    assert_eq!(shape.center(), Some(Point::new(1.0, 1.0)));
}

#[test]
fn test_move_vertex_by() {
    let mut shape = new_shape();
    shape.add_point(Point::new(0.0, 0.0));
    shape.add_point(Point::new(5.0, 5.0));
    shape.move_vertex_by(1, Point::new(-1.0, 2.0));
    assert_eq!(shape[0], Point::new(0.0, 0.0));
    assert_eq!(shape[1], Point::new(4.0, 7.0));
}

#[test]
fn test_index_assignment_and_iteration() {
    let mut shape = new_shape();
    shape.add_point(Point::new(0.0, 0.0));
    shape.add_point(Point::new(1.0, 1.0));
    shape[1] = Point::new(7.0, 8.0);

    let collected: Vec<Point> = shape.iter().copied().collect();
    assert_eq!(collected, vec![Point::new(0.0, 0.0), Point::new(7.0, 8.0)]);

    let mut count = 0;
    for _ in &shape {
        count += 1;
    }
    assert_eq!(count, shape.len());
}

#[test]
fn test_copy_points_are_independent() {
    let mut shape = new_shape().with_label("court");
    for (x, y) in [(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)] {
        shape.add_point(Point::new(x, y));
    }
    let mut copy = shape.copy();
    assert_eq!(copy.points(), shape.points());

    copy[0] = Point::new(-5.0, -5.0);
    copy.move_by(Point::new(1.0, 1.0));
    copy.pop_point();
    assert_eq!(shape.len(), 4);
    assert_eq!(shape[0], Point::new(0.0, 0.0));
    assert_eq!(shape[3], Point::new(0.0, 2.0));
}
