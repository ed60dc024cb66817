//! # Quadmark Shape
//!
//! The editable annotation primitive used by the labeling canvas: a polygon
//! of up to four vertices that can be closed, dragged, rotated about its
//! center, hit-tested and painted.
//!
//! ## Components
//!
//! - **Shape**: vertex lifecycle, rotation, hit-testing, copy, paint logic
//! - **Style**: canvas-wide drawing defaults shared between shapes
//! - **Painter**: drawing primitives supplied by the host canvas
//! - **Raster**: tiny-skia painter for headless rendering
//! - **Court**: proportions of the tennis court guide overlay
//!
//! ## Usage
//!
//! ```rust,ignore
//! use quadmark_shape::{Shape, ShapeStyle, RecordingPainter};
//!
//! let style = ShapeStyle::default().into_shared();
//! let mut shape = Shape::new(style.clone());
//! shape.add_point(Point::new(0.0, 0.0));
//! // ...
//! shape.close();
//! shape.paint(&mut RecordingPainter::new());
//! ```

pub mod court;
pub mod error;
pub mod font_manager;
pub mod painter;
pub mod path;
pub mod raster;
pub mod shape;
pub mod style;

pub use court::{court_rects, CourtRect, CourtSizes};
pub use error::{RenderError, RenderResult};
pub use painter::{Font, PaintCommand, Painter, Pen, RecordingPainter};
pub use raster::PixmapPainter;
pub use shape::{Shape, MAX_POINTS};
pub use style::{HighlightMode, PointType, ShapeStyle};

pub use lyon::path::Path;
