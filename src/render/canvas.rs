use image::RgbaImage;
use tiny_skia::{Paint, Pixmap, Rect, Transform};

pub use tiny_skia::FillRule;

use super::path::Path;
use crate::common::{Color, QRError, QRResult};

/// Largest side a surface may have.
pub const MAX_SURFACE_SIDE: u32 = 8192;

// Canvas
//------------------------------------------------------------------------------

/// Anti-aliased RGBA surface backed by a [`tiny_skia::Pixmap`].
///
/// Holes are cut with [`FillRule::EvenOdd`] over an outer and an inner contour, so there is no
/// blend mode to set and restore between draws. Pixels leave the surface as straight-alpha
/// [`RgbaImage`]s.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    pub fn new(w: u32, h: u32) -> QRResult<Self> {
        let unavailable = || {
            QRError::SurfaceUnavailable(format!(
                "cannot allocate a {w}x{h} surface, sides must be within 1..={MAX_SURFACE_SIDE}"
            ))
        };
        if w > MAX_SURFACE_SIDE || h > MAX_SURFACE_SIDE {
            return Err(unavailable());
        }
        let pixmap = Pixmap::new(w, h).ok_or_else(unavailable)?;
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Copies the surface out with alpha un-premultiplied.
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width(), self.height(), |x, y| self.pixel(x, y).into())
    }

    pub fn into_image(self) -> RgbaImage {
        self.to_image()
    }

    /// Straight-alpha color at `(x, y)`, transparent outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        self.pixmap.pixel(x, y).map_or(Color::rgba(0, 0, 0, 0), |p| {
            let c = p.demultiply();
            Color::rgba(c.red(), c.green(), c.blue(), c.alpha())
        })
    }

    /// Replaces every pixel with `color`, no blending.
    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a));
    }

    pub fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        if let Some(rect) = Rect::from_xywh(x as f32, y as f32, w as f32, h as f32) {
            self.pixmap.fill_rect(rect, &paint(color), Transform::identity(), None);
        }
    }

    /// Fills `path` source-over with anti-aliased edges.
    pub fn fill_path(&mut self, path: &Path, rule: FillRule, color: Color) {
        if color.a == 0 {
            return;
        }
        if let Some(path) = path.finish() {
            self.pixmap.fill_path(&path, &paint(color), rule, Transform::identity(), None);
        }
    }
}

fn paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}
