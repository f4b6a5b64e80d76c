//! The fixed CoachGuru app icon.
//!
//! Everything the renderer draws is described here in canvas pixel coordinates. There is exactly
//! one design; the type exists so the renderer and tests share the same numbers.

use kurbo::Shape as _;

use crate::foundation::core::{BezPath, Canvas, Circle, Point, Rgba8, RoundedRect};

/// Tolerance used when flattening kurbo shapes into Bezier paths.
pub const PATH_TOLERANCE: f64 = 0.1;

/// Default output file name, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "coachguru_app_icon_1024.png";

#[derive(Clone, Debug, PartialEq)]
pub struct IconDesign {
    pub canvas: Canvas,
    pub gradient_start: Rgba8,
    pub gradient_end: Rgba8,
    /// Gradient axis start and end, in canvas coordinates.
    pub gradient_axis: (Point, Point),
    pub corner_radius: f64,
    pub monogram: Monogram,
    pub accent: Rgba8,
    pub arrow: Vec<Point>,
    pub arrow_circle_center: Point,
    pub arrow_circle_radius: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Monogram {
    pub text: String,
    pub size_px: f32,
    pub bold: bool,
    pub color: Rgba8,
    /// Horizontal centre and vertical middle of the line box.
    pub anchor: Point,
}

impl IconDesign {
    pub fn coachguru() -> Self {
        let side = 1024u32;
        let extent = f64::from(side);
        Self {
            canvas: Canvas::square(side),
            gradient_start: Rgba8::opaque(0x0B, 0x2D, 0x5C),
            gradient_end: Rgba8::opaque(0x0E, 0x5F, 0xD8),
            gradient_axis: (Point::ORIGIN, Point::new(extent, extent)),
            corner_radius: 200.0,
            monogram: Monogram {
                text: "CG".to_string(),
                size_px: 200.0,
                bold: true,
                color: Rgba8::WHITE,
                anchor: Point::new(512.0, 512.0),
            },
            accent: Rgba8::opaque(0xFF, 0xB0, 0x00),
            arrow: vec![
                Point::new(700.0, 300.0),
                Point::new(800.0, 300.0),
                Point::new(780.0, 280.0),
                Point::new(820.0, 320.0),
                Point::new(780.0, 360.0),
                Point::new(800.0, 340.0),
                Point::new(700.0, 340.0),
            ],
            arrow_circle_center: Point::new(750.0, 320.0),
            arrow_circle_radius: 15.0,
        }
    }

    /// Rounded rectangle covering the whole canvas; everything outside it is transparent.
    pub fn background_shape(&self) -> RoundedRect {
        RoundedRect::new(
            0.0,
            0.0,
            f64::from(self.canvas.width),
            f64::from(self.canvas.height),
            self.corner_radius,
        )
    }

    pub fn background_path(&self) -> BezPath {
        self.background_shape().to_path(PATH_TOLERANCE)
    }

    pub fn arrow_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut points = self.arrow.iter().copied();
        if let Some(first) = points.next() {
            path.move_to(first);
            for p in points {
                path.line_to(p);
            }
            path.close_path();
        }
        path
    }

    pub fn arrow_circle(&self) -> Circle {
        Circle::new(self.arrow_circle_center, self.arrow_circle_radius)
    }

    pub fn arrow_circle_path(&self) -> BezPath {
        self.arrow_circle().to_path(PATH_TOLERANCE)
    }
}

impl Default for IconDesign {
    fn default() -> Self {
        Self::coachguru()
    }
}

#[cfg(test)]
#[path = "../tests/unit/design.rs"]
mod tests;
