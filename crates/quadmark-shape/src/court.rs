//! Tennis court guide overlay
//!
//! Drawn over rotated shapes so the labeler can line the court markings up
//! with the image. Proportions are fixed fractions of the shape's
//! axis-aligned bounds; the bounds are not re-oriented when the shape is
//! rotated, so the guide stays axis-aligned.

use quadmark_core::Rect;

/// Court band sizes derived from the bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourtSizes {
    pub half_court_height: f64,
    pub service_box_height: f64,
    pub no_mans_land_height: f64,
    pub alley_width: f64,
    pub service_box_width: f64,
}

impl CourtSizes {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            half_court_height: height * 0.5,
            service_box_height: height * 0.27,
            no_mans_land_height: height * 0.23,
            alley_width: width * 0.12,
            service_box_width: width * 0.38,
        }
    }
}

/// Integer rectangle as handed to `Painter::draw_rect`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourtRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl CourtRect {
    // Each component is truncated independently.
    fn truncated(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: x as i32,
            y: y as i32,
            width: width as i32,
            height: height as i32,
        }
    }
}

/// Outer court, two alleys, then the four service boxes (left/right of the
/// upper band, then left/right of the lower band).
pub fn court_rects(bounds: &Rect) -> [CourtRect; 7] {
    let (min_x, min_y) = (bounds.x, bounds.y);
    let (w, h) = (bounds.width, bounds.height);
    let s = CourtSizes::new(w, h);

    let box_top = min_y + s.no_mans_land_height;
    let box_bottom = box_top + s.service_box_height;
    let box_left = min_x + s.alley_width;
    let box_right = box_left + s.service_box_width;

    [
        CourtRect::truncated(min_x, min_y, w, h),
        CourtRect::truncated(min_x, min_y, s.alley_width, h),
        CourtRect::truncated(min_x + w - s.alley_width, min_y, s.alley_width, h),
        CourtRect::truncated(box_left, box_top, s.service_box_width, s.service_box_height),
        CourtRect::truncated(box_right, box_top, s.service_box_width, s.service_box_height),
        CourtRect::truncated(box_left, box_bottom, s.service_box_width, s.service_box_height),
        CourtRect::truncated(box_right, box_bottom, s.service_box_width, s.service_box_height),
    ]
}
