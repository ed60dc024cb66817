use std::f64::consts::{FRAC_PI_2, PI, TAU};

use quadmark_core::Point;
use quadmark_shape::{Shape, ShapeStyle};

const EPS: f64 = 1e-9;

fn closed_square(size: f64) -> Shape {
    let mut shape = Shape::new(ShapeStyle::default().into_shared());
    for (x, y) in [(0.0, 0.0), (size, 0.0), (size, size), (0.0, size)] {
        shape.add_point(Point::new(x, y));
    }
    shape.close();
    shape
}

fn angle_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(TAU);
    d.min(TAU - d)
}

#[test]
fn test_quarter_turn_of_square() {
    let mut shape = closed_square(10.0);
    assert_eq!(shape.center(), Some(Point::new(5.0, 5.0)));

    shape.rotate(FRAC_PI_2);

    let expected = [
        Point::new(0.0, 10.0),
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
    ];
    for (actual, expected) in shape.points().iter().zip(expected.iter()) {
        assert!(
            actual.approx_eq(expected, EPS),
            "{actual:?} != {expected:?}"
        );
    }
    assert!((shape.direction() - 3.0 * FRAC_PI_2).abs() < EPS);
    assert_eq!(shape.center(), Some(Point::new(5.0, 5.0)));
}

#[test]
fn test_rotate_point_formula() {
    let shape = closed_square(2.0);
    let theta: f64 = 0.3;
    let p = Point::new(2.0, 1.5);
    let (dx, dy) = (p.x - 1.0, p.y - 1.0);
    let expected = Point::new(
        1.0 + theta.cos() * dx + theta.sin() * dy,
        1.0 - theta.sin() * dx + theta.cos() * dy,
    );
    assert!(shape.rotate_point(p, theta).approx_eq(&expected, EPS));
}

#[test]
fn test_single_rotation_sets_direction() {
    for theta in [0.1, 1.0, PI, 4.0, -0.5, 7.0] {
        let mut shape = closed_square(4.0);
        shape.rotate(theta);
        let expected = (-theta).rem_euclid(TAU);
        assert!(angle_diff(shape.direction(), expected) < EPS);
        assert!((0.0..TAU).contains(&shape.direction()));
    }
}

#[test]
fn test_rotate_back_restores_vertices() {
    let mut shape = closed_square(8.0);
    let original = shape.points().to_vec();

    shape.rotate(0.7);
    shape.rotate(-0.7);

    for (a, b) in shape.points().iter().zip(original.iter()) {
        assert!(a.approx_eq(b, EPS));
    }
    assert!(angle_diff(shape.direction(), 0.0) < EPS);
}

#[test]
fn test_full_turn_keeps_direction_in_range() {
    let mut shape = closed_square(1.0);
    for _ in 0..8 {
        shape.rotate(TAU / 8.0);
        assert!((0.0..TAU).contains(&shape.direction()));
    }
    assert!(angle_diff(shape.direction(), 0.0) < EPS);
}

#[test]
fn test_rotation_uses_stale_center_after_move() {
    let mut shape = closed_square(2.0);
    shape.move_by(Point::new(10.0, 0.0));
    shape.rotate(PI);
    // Pivot is still (1, 1): (10, 0) ends up at (-8, 2).
    assert!(shape[0].approx_eq(&Point::new(-8.0, 2.0), EPS));
}

#[test]
#[should_panic]
fn test_rotate_without_center_panics() {
    let mut shape = Shape::new(ShapeStyle::default().into_shared());
    shape.add_point(Point::new(0.0, 0.0));
    shape.rotate(1.0);
}
