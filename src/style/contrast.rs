use std::fmt::{Display, Formatter};

use super::config::StyleConfig;
use crate::common::Color;

/// Minimum body/background contrast ratio before a warning is raised. A heuristic for optical
/// scanning, looser than WCAG AA text contrast.
pub const DEFAULT_MIN_CONTRAST: f64 = 3.0;

// Luminance
//------------------------------------------------------------------------------

/// Relative luminance in [0, 1] of the sRGB color, alpha ignored.
pub fn relative_luminance(c: Color) -> f64 {
    let lin = |v: u8| {
        let v = v as f64 / 255.0;
        if v <= 0.03928 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * lin(c.r) + 0.7152 * lin(c.g) + 0.0722 * lin(c.b)
}

/// Contrast ratio in [1, 21] of two opaque colors, independent of argument order.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let (la, lb) = (relative_luminance(a), relative_luminance(b));
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// `top` drawn source-over `bottom`, straight alpha.
pub fn composite(top: Color, bottom: Color) -> Color {
    let ta = top.a as f64 / 255.0;
    let ba = bottom.a as f64 / 255.0;
    let oa = ta + ba * (1.0 - ta);
    if oa <= 0.0 {
        return Color::rgba(0, 0, 0, 0);
    }
    let mix = |t: u8, b: u8| {
        ((t as f64 * ta + b as f64 * ba * (1.0 - ta)) / oa).round().clamp(0.0, 255.0) as u8
    };
    Color::rgba(
        mix(top.r, bottom.r),
        mix(top.g, bottom.g),
        mix(top.b, bottom.b),
        (oa * 255.0).round() as u8,
    )
}

/// Contrast as a scanner sees the printed code: background over white paper, then body over
/// that background.
pub fn effective_contrast(body: Color, background: Color) -> f64 {
    let bg = composite(background, Color::WHITE);
    contrast_ratio(composite(body, bg), bg)
}

// Validator
//------------------------------------------------------------------------------

/// Advisory only: rendering goes ahead either way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastWarning {
    pub ratio: f64,
    pub min_ratio: f64,
}

impl ContrastWarning {
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl Display for ContrastWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Body and background colors are too close (contrast {:.2}:1, want at least {:.1}:1), \
             the code may not scan reliably. Auto-fix resets them to black on white.",
            self.ratio, self.min_ratio
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastValidator {
    min_ratio: f64,
}

impl Default for ContrastValidator {
    fn default() -> Self {
        Self { min_ratio: DEFAULT_MIN_CONTRAST }
    }
}

impl ContrastValidator {
    pub fn new(min_ratio: f64) -> Self {
        Self { min_ratio: min_ratio.clamp(1.0, 21.0) }
    }

    pub fn min_ratio(&self) -> f64 {
        self.min_ratio
    }

    pub fn check_colors(&self, body: Color, background: Color) -> Option<ContrastWarning> {
        let ratio = effective_contrast(body, background);
        (ratio < self.min_ratio).then_some(ContrastWarning { ratio, min_ratio: self.min_ratio })
    }

    pub fn check(&self, style: &StyleConfig) -> Option<ContrastWarning> {
        self.check_colors(style.body_color(), style.background_color())
    }
}

/// Copy of `style` with body and background reset to black on white.
pub fn auto_fix(style: &StyleConfig) -> StyleConfig {
    style.with_body_color(Color::BLACK).with_background_color(Color::WHITE)
}
