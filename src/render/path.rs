use imageproc::point::Point;
use tiny_skia::{PathBuilder, Rect};

// Cubic control point distance for a quarter circle of radius 1
const KAPPA: f64 = 0.552_284_749_8;

// Corner radii
//------------------------------------------------------------------------------

/// Per-corner radii of a rounded rectangle, clockwise from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerRadii {
    pub tl: f64,
    pub tr: f64,
    pub br: f64,
    pub bl: f64,
}

impl CornerRadii {
    pub fn uniform(r: f64) -> Self {
        Self { tl: r, tr: r, br: r, bl: r }
    }

    /// Top-left and bottom-right rounded, the other two square.
    pub fn leaf(r: f64) -> Self {
        Self { tl: r, tr: 0.0, br: r, bl: 0.0 }
    }

    fn clamped(self, max: f64) -> Self {
        let c = |r: f64| r.clamp(0.0, max);
        Self { tl: c(self.tl), tr: c(self.tr), br: c(self.br), bl: c(self.bl) }
    }
}

// Path
//------------------------------------------------------------------------------

/// Closed contours in pixel space, collected into a [`tiny_skia::PathBuilder`].
///
/// Each shape call adds its own contour. Coordinates come in as `f64` module geometry and are
/// narrowed to the `f32` the rasterizer works in.
#[derive(Debug, Clone, Default)]
pub struct Path {
    pb: PathBuilder,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.pb.is_empty()
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.pb.move_to(x as f32, y as f32);
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.pb.line_to(x as f32, y as f32);
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.pb.close();
        self
    }

    /// Moves every contour of `other` into this path.
    pub fn append(&mut self, other: Path) -> &mut Self {
        if let Some(p) = other.pb.finish() {
            self.pb.push_path(&p);
        }
        self
    }

    pub fn polygon(&mut self, pts: &[Point<f64>]) -> &mut Self {
        if let Some((first, rest)) = pts.split_first() {
            self.move_to(first.x, first.y);
            for p in rest {
                self.line_to(p.x, p.y);
            }
            self.close();
        }
        self
    }

    /// Empty or inverted rectangles add nothing.
    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> &mut Self {
        if let Some(r) = Rect::from_xywh(x as f32, y as f32, w as f32, h as f32) {
            self.pb.push_rect(r);
        }
        self
    }

    /// Clockwise rounded rectangle. Radii larger than half the shorter side are clamped.
    pub fn rounded_rect(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        radii: CornerRadii,
    ) -> &mut Self {
        let r = radii.clamped(w.min(h) / 2.0);
        let (x1, y1) = (x + w, y + h);

        self.move_to(x + r.tl, y);
        self.line_to(x1 - r.tr, y);
        self.corner((x1 - r.tr, y), (x1, y), (x1, y + r.tr));
        self.line_to(x1, y1 - r.br);
        self.corner((x1, y1 - r.br), (x1, y1), (x1 - r.br, y1));
        self.line_to(x + r.bl, y1);
        self.corner((x + r.bl, y1), (x, y1), (x, y1 - r.bl));
        self.line_to(x, y + r.tl);
        self.corner((x, y + r.tl), (x, y), (x + r.tl, y));
        self.close()
    }

    // Quarter ellipse from `from` to `to` bending towards the box corner `at`.
    fn corner(&mut self, from: (f64, f64), at: (f64, f64), to: (f64, f64)) {
        if from == to {
            return;
        }
        let c1 = (from.0 + (at.0 - from.0) * KAPPA, from.1 + (at.1 - from.1) * KAPPA);
        let c2 = (to.0 + (at.0 - to.0) * KAPPA, to.1 + (at.1 - to.1) * KAPPA);
        self.pb.cubic_to(
            c1.0 as f32,
            c1.1 as f32,
            c2.0 as f32,
            c2.1 as f32,
            to.0 as f32,
            to.1 as f32,
        );
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64) -> &mut Self {
        self.pb.push_circle(cx as f32, cy as f32, r as f32);
        self
    }

    /// Number of contours added so far.
    pub fn contour_count(&self) -> usize {
        self.finish().map_or(0, |p| {
            p.segments().filter(|s| matches!(s, tiny_skia::PathSegment::MoveTo(_))).count()
        })
    }

    /// `(min_x, min_y, max_x, max_y)` over every point, control points included.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let b = self.finish()?.bounds();
        Some((b.left() as f64, b.top() as f64, b.right() as f64, b.bottom() as f64))
    }

    /// The path the rasterizer fills, or `None` when nothing was added.
    pub fn finish(&self) -> Option<tiny_skia::Path> {
        self.pb.clone().finish()
    }
}
