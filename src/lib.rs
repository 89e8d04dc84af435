//! # qrstyler
//!
//! A Rust library for rendering styled QR codes. The module matrix comes from a standard
//! encoder; qrstyler decides how every module looks: data module shapes, finder eye shapes,
//! colors and quiet zone, with a contrast check that warns when a style may stop scanning.
//!
//! ## Features
//!
//! - **Shape Families**: Five data module shapes, five eye frame shapes and five eye ball shapes
//! - **Structural Classification**: Finder patterns are always drawn whole, data modules never leak into them
//! - **Style Presets**: Named themes merged over any base style
//! - **Contrast Validation**: WCAG luminance check between body and background, with auto-fix
//! - **Deterministic Output**: Same payload and style always give the same pixels
//! - **Style Persistence**: In-memory and JSON file stores for named user styles
//!
//! ## Quick Start
//!
//! ### Simple Styled QR Code
//!
//! ```rust,no_run
//! use qrstyler::StyledQRBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Default style: black squares on white, 200px, margin 2, error correction M
//! let qr = StyledQRBuilder::new("https://example.com").build()?;
//!
//! qr.save("simple_qr.png", 4)?; // 4x scale factor
//! # Ok(())
//! # }
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use qrstyler::{BodyShape, Color, ECLevel, EyeBallShape, EyeFrameShape, StyledQRBuilder};
//! use qrstyler::DEFAULT_STYLE;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let style = DEFAULT_STYLE
//!     .with_body_shape(BodyShape::Dots)          // Data module shape
//!     .with_eye_frame_shape(EyeFrameShape::Leaf) // Outer ring of each finder
//!     .with_eye_ball_shape(EyeBallShape::Circle) // 3x3 center of each finder
//!     .with_body_color(Color::parse("#0b3d91")?)
//!     .with_size(300)                            // Clamped to 100..=400
//!     .with_margin(4)                            // Clamped to 1..=16
//!     .with_ec_level(ECLevel::Q);
//!
//! let qr = StyledQRBuilder::new("Hello, World!").style(&style).build()?;
//! assert!(qr.contrast_warning().is_none());
//! assert_eq!(qr.image().dimensions(), (300, 300));
//! # Ok(())
//! # }
//! ```
//!
//! ### Presets and Contrast
//!
//! ```rust
//! use qrstyler::{apply_preset, auto_fix, preset, Color, StyledQRBuilder, DEFAULT_STYLE};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ocean = preset("ocean").ok_or("unknown preset")?;
//! let style = apply_preset(&DEFAULT_STYLE, ocean).with_body_color(Color::parse("#e0e0e0")?);
//!
//! let qr = StyledQRBuilder::new("hi").style(&style).build()?;
//! if let Some(warning) = qr.contrast_warning() {
//!     // Rendering still happened, the warning is advisory
//!     eprintln!("{warning}");
//!     let fixed = StyledQRBuilder::new("hi").style(&auto_fix(&style)).build()?;
//!     assert!(fixed.contrast_warning().is_none());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Rendering Order
//!
//! 1. Background fill over the whole surface, quiet zone included
//! 2. Dark data modules, each in the body shape
//! 3. Eye frames then eye balls, at the three finder positions
//!
//! Eye regions are classified from the matrix width alone, so changing shapes or colors never
//! changes which cells count as data.
//!
//! ## Error Correction Levels
//! - **L (Low)**: ~7% error correction
//! - **M (Medium)**: ~15% error correction
//! - **Q (Quartile)**: ~25% error correction
//! - **H (High)**: ~30% error correction
//!
//! Shapes that leave gaps between modules (dots, stars, diamonds) scan more reliably with a
//! higher level.

#![allow(clippy::items_after_test_module)]

pub mod builder;
pub(crate) mod common;
pub mod export;
pub mod render;
pub mod store;
pub mod style;

pub use builder::{
    draw_styled, generate_matrix, CellRole, EyePosition, Generation, Geometry, ModuleMatrix,
    RenderOutcome, RenderRequest, RenderSession, RenderState, RoleMap, StyledQR, StyledQRBuilder,
};
pub use common::{Color, ECLevel, QRError, QRResult};
pub use render::{BodyShape, Canvas, EyeBallShape, EyeFrameShape};
pub use store::{JsonStyleStore, MemoryStyleStore, SavedStyle, StyleStore};
pub use style::{
    apply_preset, auto_fix, preset, ContrastValidator, ContrastWarning, PresetTheme, StyleConfig,
    StyleOverrides, DEFAULT_STYLE, PRESETS,
};
