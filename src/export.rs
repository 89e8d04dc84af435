use image::RgbaImage;

use crate::common::{QRError, QRResult};

pub const MAX_SCALE: u32 = 16;

/// Nearest-neighbour enlargement by an integer factor in `1..=16`: every source pixel becomes
/// a `factor x factor` block, so no new colors appear.
pub fn upscale(img: &RgbaImage, factor: u32) -> QRResult<RgbaImage> {
    if !(1..=MAX_SCALE).contains(&factor) {
        return Err(QRError::InvalidScale(factor));
    }
    if factor == 1 {
        return Ok(img.clone());
    }

    let (w, h) = img.dimensions();
    Ok(RgbaImage::from_fn(w * factor, h * factor, |x, y| *img.get_pixel(x / factor, y / factor)))
}
