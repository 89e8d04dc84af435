use serde::{Deserialize, Deserializer, Serialize};

use crate::common::{Color, ECLevel};
use crate::render::{BodyShape, EyeBallShape, EyeFrameShape};

pub const MIN_SIZE: u32 = 100;
pub const MAX_SIZE: u32 = 400;
pub const MIN_MARGIN: u32 = 1;
pub const MAX_MARGIN: u32 = 16;

/// Style every partial configuration is merged over. Callers pass it in explicitly.
pub const DEFAULT_STYLE: StyleConfig = StyleConfig {
    body_shape: BodyShape::Square,
    body_color: Color::BLACK,
    background_color: Color::WHITE,
    eye_frame_color: Color::BLACK,
    eye_ball_color: Color::BLACK,
    eye_frame_shape: EyeFrameShape::Square,
    eye_ball_shape: EyeBallShape::Square,
    size: 200,
    margin: 2,
    ec_level: ECLevel::M,
};

// Style config
//------------------------------------------------------------------------------

/// Complete, immutable visual style for one render. Every `with_*` call returns a new config;
/// `size` and `margin` are clamped on the way in, including when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleConfig {
    body_shape: BodyShape,
    body_color: Color,
    background_color: Color,
    eye_frame_color: Color,
    eye_ball_color: Color,
    eye_frame_shape: EyeFrameShape,
    eye_ball_shape: EyeBallShape,
    #[serde(deserialize_with = "de_size")]
    size: u32,
    #[serde(deserialize_with = "de_margin")]
    margin: u32,
    ec_level: ECLevel,
}

fn de_size<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    Ok(u32::deserialize(d)?.clamp(MIN_SIZE, MAX_SIZE))
}

fn de_margin<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    Ok(u32::deserialize(d)?.clamp(MIN_MARGIN, MAX_MARGIN))
}

impl Default for StyleConfig {
    fn default() -> Self {
        DEFAULT_STYLE
    }
}

impl StyleConfig {
    pub fn body_shape(&self) -> BodyShape {
        self.body_shape
    }

    pub fn body_color(&self) -> Color {
        self.body_color
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }

    pub fn eye_frame_color(&self) -> Color {
        self.eye_frame_color
    }

    pub fn eye_ball_color(&self) -> Color {
        self.eye_ball_color
    }

    pub fn eye_frame_shape(&self) -> EyeFrameShape {
        self.eye_frame_shape
    }

    pub fn eye_ball_shape(&self) -> EyeBallShape {
        self.eye_ball_shape
    }

    /// Output side length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Quiet zone width in modules, never below one.
    pub fn margin(&self) -> u32 {
        self.margin
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ec_level
    }

    pub fn with_body_shape(self, body_shape: BodyShape) -> Self {
        Self { body_shape, ..self }
    }

    pub fn with_body_color(self, body_color: Color) -> Self {
        Self { body_color, ..self }
    }

    pub fn with_background_color(self, background_color: Color) -> Self {
        Self { background_color, ..self }
    }

    pub fn with_eye_frame_color(self, eye_frame_color: Color) -> Self {
        Self { eye_frame_color, ..self }
    }

    pub fn with_eye_ball_color(self, eye_ball_color: Color) -> Self {
        Self { eye_ball_color, ..self }
    }

    pub fn with_eye_frame_shape(self, eye_frame_shape: EyeFrameShape) -> Self {
        Self { eye_frame_shape, ..self }
    }

    pub fn with_eye_ball_shape(self, eye_ball_shape: EyeBallShape) -> Self {
        Self { eye_ball_shape, ..self }
    }

    pub fn with_size(self, size: u32) -> Self {
        Self { size: size.clamp(MIN_SIZE, MAX_SIZE), ..self }
    }

    pub fn with_margin(self, margin: u32) -> Self {
        Self { margin: margin.clamp(MIN_MARGIN, MAX_MARGIN), ..self }
    }

    pub fn with_ec_level(self, ec_level: ECLevel) -> Self {
        Self { ec_level, ..self }
    }

    /// Shallow merge: every field set in `overrides` replaces the one here. Shapes are atomic.
    pub fn merge(&self, overrides: &StyleOverrides) -> Self {
        let o = overrides;
        let mut res = *self;
        if let Some(v) = o.body_shape {
            res = res.with_body_shape(v);
        }
        if let Some(v) = o.body_color {
            res = res.with_body_color(v);
        }
        if let Some(v) = o.background_color {
            res = res.with_background_color(v);
        }
        if let Some(v) = o.eye_frame_color {
            res = res.with_eye_frame_color(v);
        }
        if let Some(v) = o.eye_ball_color {
            res = res.with_eye_ball_color(v);
        }
        if let Some(v) = o.eye_frame_shape {
            res = res.with_eye_frame_shape(v);
        }
        if let Some(v) = o.eye_ball_shape {
            res = res.with_eye_ball_shape(v);
        }
        if let Some(v) = o.size {
            res = res.with_size(v);
        }
        if let Some(v) = o.margin {
            res = res.with_margin(v);
        }
        if let Some(v) = o.ec_level {
            res = res.with_ec_level(v);
        }
        res
    }
}

// Partial style
//------------------------------------------------------------------------------

/// Partial style, as stored in presets or read from a user's JSON file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_shape: Option<BodyShape>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eye_frame_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eye_ball_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eye_frame_shape: Option<EyeFrameShape>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eye_ball_shape: Option<EyeBallShape>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ec_level: Option<ECLevel>,
}

impl StyleOverrides {
    pub const NONE: StyleOverrides = StyleOverrides {
        body_shape: None,
        body_color: None,
        background_color: None,
        eye_frame_color: None,
        eye_ball_color: None,
        eye_frame_shape: None,
        eye_ball_shape: None,
        size: None,
        margin: None,
        ec_level: None,
    };

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    /// Layers `top` over `self`, fields set in `top` win.
    pub fn layer(&self, top: &StyleOverrides) -> Self {
        Self {
            body_shape: top.body_shape.or(self.body_shape),
            body_color: top.body_color.or(self.body_color),
            background_color: top.background_color.or(self.background_color),
            eye_frame_color: top.eye_frame_color.or(self.eye_frame_color),
            eye_ball_color: top.eye_ball_color.or(self.eye_ball_color),
            eye_frame_shape: top.eye_frame_shape.or(self.eye_frame_shape),
            eye_ball_shape: top.eye_ball_shape.or(self.eye_ball_shape),
            size: top.size.or(self.size),
            margin: top.margin.or(self.margin),
            ec_level: top.ec_level.or(self.ec_level),
        }
    }
}
