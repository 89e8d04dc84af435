use std::f64::consts::{FRAC_PI_2, PI};

use imageproc::point::Point;

use super::canvas::{Canvas, FillRule};
use super::path::{CornerRadii, Path};
use super::shape::BodyShape;
use crate::common::Color;

const DOT_RADIUS: f64 = 0.4;
const ROUNDED_RADIUS: f64 = 0.25;
const STAR_OUTER_RADIUS: f64 = 0.5;
const STAR_INNER_RADIUS: f64 = 0.22;

// Body module
//------------------------------------------------------------------------------

/// Outline of one data module whose cell has its top-left corner at `(x, y)`.
pub fn body_path(shape: BodyShape, x: f64, y: f64, cell: f64) -> Path {
    let (cx, cy) = (x + cell / 2.0, y + cell / 2.0);
    let mut path = Path::new();
    match shape {
        // Full cell, so neighbouring dark modules join up
        BodyShape::Square => {
            path.rect(x, y, cell, cell);
        }
        BodyShape::Dots => {
            path.circle(cx, cy, DOT_RADIUS * cell);
        }
        BodyShape::Rounded => {
            path.rounded_rect(x, y, cell, cell, CornerRadii::uniform(ROUNDED_RADIUS * cell));
        }
        BodyShape::Diamond => {
            path.polygon(&diamond(x, y, cell));
        }
        BodyShape::Star => {
            path.polygon(&star(cx, cy, cell));
        }
    }
    path
}

pub fn draw_body_module(
    canvas: &mut Canvas,
    origin: Point<f64>,
    cell: f64,
    shape: BodyShape,
    color: Color,
) {
    draw_body_modules(canvas, std::iter::once(origin), cell, shape, color);
}

/// Draws every module in a single non-zero fill. Touching modules are one shape to the
/// rasterizer, so no seam shows between them at fractional module sizes.
pub fn draw_body_modules(
    canvas: &mut Canvas,
    origins: impl IntoIterator<Item = Point<f64>>,
    cell: f64,
    shape: BodyShape,
    color: Color,
) {
    let mut path = Path::new();
    for o in origins {
        path.append(body_path(shape, o.x, o.y, cell));
    }
    canvas.fill_path(&path, FillRule::Winding, color);
}

/// Five-pointed star centered on `(cx, cy)`, first point straight up, alternating outer and
/// inner vertices.
pub(crate) fn star(cx: f64, cy: f64, cell: f64) -> [Point<f64>; 10] {
    std::array::from_fn(|i| {
        let r = cell * if i % 2 == 0 { STAR_OUTER_RADIUS } else { STAR_INNER_RADIUS };
        let a = -FRAC_PI_2 + i as f64 * PI / 5.0;
        Point::new(cx + r * a.cos(), cy + r * a.sin())
    })
}

/// Square rotated 45 degrees, through the edge midpoints of the box.
pub(crate) fn diamond(x: f64, y: f64, side: f64) -> [Point<f64>; 4] {
    let h = side / 2.0;
    [
        Point::new(x + h, y),
        Point::new(x + side, y + h),
        Point::new(x + h, y + side),
        Point::new(x, y + h),
    ]
}
