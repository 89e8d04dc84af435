use std::f64::consts::TAU;

use imageproc::point::Point;

use super::body::diamond;
use super::canvas::{Canvas, FillRule};
use super::path::{CornerRadii, Path};
use super::shape::{EyeBallShape, EyeFrameShape};
use crate::common::Color;

// All lengths below are in modules
const FRAME_SIDE: f64 = 7.0;
const HOLE_SIDE: f64 = 5.0;
const BALL_OFFSET: f64 = 2.0;
const BALL_SIDE: f64 = 3.0;

const ROUNDED_OUTER_RADIUS: f64 = 1.5;
const ROUNDED_INNER_RADIUS: f64 = 1.0;
const LEAF_OUTER_RADIUS: f64 = 3.0;
const LEAF_INNER_RADIUS: f64 = 2.0;
const DOT_COUNT: usize = 14;
const DOT_RING_RADIUS: f64 = 3.0;
const DOT_RADIUS: f64 = 0.5;

const BALL_ROUNDED_RADIUS: f64 = 0.8;
const BALL_LEAF_RADIUS: f64 = 1.2;

// Eye frame
//------------------------------------------------------------------------------

/// Ring around a finder pattern whose 7x7 box starts at `(x, y)`, `m` being the module size.
///
/// Ring shapes are an outer and an inner contour filled even-odd, so the 5x5 interior comes
/// out hollow whatever the outer silhouette looks like.
///
/// The circle ring is filled between radii 2.5 and 3.5 modules. It is not a 1-module stroke
/// centered on the 3.5 radius, which would cover 3.0 to 4.0 and bleed half a module past the
/// 7x7 box into the separator.
pub fn frame_path(shape: EyeFrameShape, x: f64, y: f64, m: f64) -> (Path, FillRule) {
    let outer = FRAME_SIDE * m;
    let inner = HOLE_SIDE * m;
    let (cx, cy) = (x + outer / 2.0, y + outer / 2.0);
    let mut path = Path::new();

    let rule = match shape {
        EyeFrameShape::Square => {
            path.rect(x, y, outer, m)
                .rect(x, y + outer - m, outer, m)
                .rect(x, y + m, m, inner)
                .rect(x + outer - m, y + m, m, inner);
            FillRule::Winding
        }
        EyeFrameShape::Rounded => {
            let (r_out, r_in) = (ROUNDED_OUTER_RADIUS * m, ROUNDED_INNER_RADIUS * m);
            path.rounded_rect(x, y, outer, outer, CornerRadii::uniform(r_out))
                .rounded_rect(x + m, y + m, inner, inner, CornerRadii::uniform(r_in));
            FillRule::EvenOdd
        }
        EyeFrameShape::Circle => {
            path.circle(cx, cy, outer / 2.0).circle(cx, cy, inner / 2.0);
            FillRule::EvenOdd
        }
        EyeFrameShape::Leaf => {
            let (r_out, r_in) = (LEAF_OUTER_RADIUS * m, LEAF_INNER_RADIUS * m);
            path.rounded_rect(x, y, outer, outer, CornerRadii::leaf(r_out))
                .rounded_rect(x + m, y + m, inner, inner, CornerRadii::leaf(r_in));
            FillRule::EvenOdd
        }
        EyeFrameShape::Dotted => {
            // One contour per dot, nothing joins neighbouring dots
            for i in 0..DOT_COUNT {
                let a = TAU * i as f64 / DOT_COUNT as f64;
                let ring = DOT_RING_RADIUS * m;
                path.circle(cx + ring * a.cos(), cy + ring * a.sin(), DOT_RADIUS * m);
            }
            FillRule::Winding
        }
    };
    (path, rule)
}

pub fn draw_eye_frame(
    canvas: &mut Canvas,
    origin: Point<f64>,
    m: f64,
    shape: EyeFrameShape,
    color: Color,
) {
    let (path, rule) = frame_path(shape, origin.x, origin.y, m);
    canvas.fill_path(&path, rule, color);
}

// Eye ball
//------------------------------------------------------------------------------

/// Center of a finder pattern: the 3x3 block two modules in from the box at `(x, y)`.
pub fn ball_path(shape: EyeBallShape, x: f64, y: f64, m: f64) -> Path {
    let (bx, by) = (x + BALL_OFFSET * m, y + BALL_OFFSET * m);
    let side = BALL_SIDE * m;
    let mut path = Path::new();
    match shape {
        EyeBallShape::Square => {
            path.rect(bx, by, side, side);
        }
        EyeBallShape::Rounded => {
            path.rounded_rect(bx, by, side, side, CornerRadii::uniform(BALL_ROUNDED_RADIUS * m));
        }
        EyeBallShape::Circle => {
            path.circle(bx + side / 2.0, by + side / 2.0, side / 2.0);
        }
        EyeBallShape::Diamond => {
            path.polygon(&diamond(bx, by, side));
        }
        EyeBallShape::Leaf => {
            path.rounded_rect(bx, by, side, side, CornerRadii::leaf(BALL_LEAF_RADIUS * m));
        }
    }
    path
}

pub fn draw_eye_ball(
    canvas: &mut Canvas,
    origin: Point<f64>,
    m: f64,
    shape: EyeBallShape,
    color: Color,
) {
    let path = ball_path(shape, origin.x, origin.y, m);
    canvas.fill_path(&path, FillRule::Winding, color);
}
