//! Path construction and polygon queries
//!
//! Paths handed to painters are `lyon` paths in `f32`. Hit-testing works
//! on the `f64` vertices directly so large or fractional coordinates are
//! not rounded.

use lyon::geom::LineSegment;
use lyon::math::{point, Box2D};
use lyon::path::{Path, Winding};
use quadmark_core::Point;

use crate::style::PointType;

pub type PathBuilder = lyon::path::path::Builder;

fn to_lyon(p: Point) -> lyon::math::Point {
    point(p.x as f32, p.y as f32)
}

/// Open polyline through `points` in order.
///
/// Returns `None` for an empty slice.
pub fn polyline(points: &[Point]) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let mut builder = Path::builder();
    builder.begin(to_lyon(*first));
    for p in rest {
        builder.line_to(to_lyon(*p));
    }
    builder.end(false);
    Some(builder.build())
}

/// Outline path as painted: every vertex in order, plus the edge back to
/// the first vertex when `closed`.
pub fn outline(points: &[Point], closed: bool) -> Option<Path> {
    let (first, _) = points.split_first()?;
    let mut builder = Path::builder();
    builder.begin(to_lyon(*first));
    for p in points {
        builder.line_to(to_lyon(*p));
    }
    if closed {
        builder.line_to(to_lyon(*first));
    }
    builder.end(false);
    Some(builder.build())
}

/// Append a vertex marker of diameter `size` centered on `at`.
pub fn add_marker(builder: &mut PathBuilder, at: Point, size: f64, kind: PointType) {
    let half = size / 2.0;
    match kind {
        PointType::Square => add_square(builder, at, size),
        PointType::Round => builder.add_circle(to_lyon(at), half as f32, Winding::Positive),
    }
}

/// Append an axis-aligned square of side `size` centered on `at`.
pub fn add_square(builder: &mut PathBuilder, at: Point, size: f64) {
    let half = size / 2.0;
    let rect = Box2D::new(
        point((at.x - half) as f32, (at.y - half) as f32),
        point((at.x + half) as f32, (at.y + half) as f32),
    );
    builder.add_rectangle(&rect, Winding::Positive);
}

fn to_geom(p: Point) -> lyon::geom::Point<f64> {
    lyon::geom::point(p.x, p.y)
}

// Half-open in y so a ray through a shared vertex counts once.
fn crosses_ray(edge: &LineSegment<f64>, p: Point) -> bool {
    let (y0, y1) = (edge.from.y, edge.to.y);
    if (y0 > p.y) == (y1 > p.y) {
        return false;
    }
    let t = (p.y - y0) / (y1 - y0);
    p.x < edge.sample(t).x
}

/// Even-odd containment in the polygon through `points`. The edge from
/// the last vertex back to the first is always included.
pub fn contains(points: &[Point], p: Point) -> bool {
    let Some(&last) = points.last() else {
        return false;
    };
    let mut inside = false;
    let mut prev = last;
    for &cur in points {
        let edge = LineSegment {
            from: to_geom(prev),
            to: to_geom(cur),
        };
        if crosses_ray(&edge, p) {
            inside = !inside;
        }
        prev = cur;
    }
    inside
}
