//! Style model: the immutable [`StyleConfig`], partial overrides and presets, and the
//! body/background contrast check.

pub mod config;
pub mod contrast;
pub mod preset;

pub use config::{
    StyleConfig, StyleOverrides, DEFAULT_STYLE, MAX_MARGIN, MAX_SIZE, MIN_MARGIN, MIN_SIZE,
};
pub use contrast::{
    auto_fix, composite, contrast_ratio, effective_contrast, relative_luminance,
    ContrastValidator, ContrastWarning, DEFAULT_MIN_CONTRAST,
};
pub use preset::{apply_preset, preset, PresetTheme, PRESETS};
