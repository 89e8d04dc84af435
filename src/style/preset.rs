use super::config::{StyleConfig, StyleOverrides};
use crate::common::Color;
use crate::render::{BodyShape, EyeBallShape, EyeFrameShape};

/// Named partial style merged over a base config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetTheme {
    pub name: &'static str,
    pub overrides: StyleOverrides,
}

pub const PRESETS: &[PresetTheme] = &[
    PresetTheme {
        name: "classic",
        overrides: StyleOverrides {
            body_shape: Some(BodyShape::Square),
            body_color: Some(Color::BLACK),
            background_color: Some(Color::WHITE),
            eye_frame_color: Some(Color::BLACK),
            eye_ball_color: Some(Color::BLACK),
            eye_frame_shape: Some(EyeFrameShape::Square),
            eye_ball_shape: Some(EyeBallShape::Square),
            ..StyleOverrides::NONE
        },
    },
    PresetTheme {
        name: "rounded",
        overrides: StyleOverrides {
            body_shape: Some(BodyShape::Rounded),
            eye_frame_shape: Some(EyeFrameShape::Rounded),
            eye_ball_shape: Some(EyeBallShape::Rounded),
            ..StyleOverrides::NONE
        },
    },
    PresetTheme {
        name: "ocean",
        overrides: StyleOverrides {
            body_shape: Some(BodyShape::Dots),
            body_color: Some(Color::rgb(0x0b, 0x3d, 0x91)),
            background_color: Some(Color::WHITE),
            eye_frame_color: Some(Color::rgb(0x00, 0x77, 0xb6)),
            eye_ball_color: Some(Color::rgb(0x02, 0x3e, 0x8a)),
            eye_frame_shape: Some(EyeFrameShape::Circle),
            eye_ball_shape: Some(EyeBallShape::Circle),
            ..StyleOverrides::NONE
        },
    },
    PresetTheme {
        name: "sunset",
        overrides: StyleOverrides {
            body_shape: Some(BodyShape::Rounded),
            body_color: Some(Color::rgb(0x9d, 0x02, 0x08)),
            background_color: Some(Color::rgb(0xff, 0xf8, 0xf0)),
            eye_frame_color: Some(Color::rgb(0xdc, 0x2f, 0x02)),
            eye_ball_color: Some(Color::rgb(0xe8, 0x5d, 0x04)),
            eye_frame_shape: Some(EyeFrameShape::Leaf),
            eye_ball_shape: Some(EyeBallShape::Leaf),
            ..StyleOverrides::NONE
        },
    },
    PresetTheme {
        name: "forest",
        overrides: StyleOverrides {
            body_shape: Some(BodyShape::Diamond),
            body_color: Some(Color::rgb(0x1b, 0x43, 0x32)),
            background_color: Some(Color::rgb(0xf1, 0xfa, 0xee)),
            eye_frame_color: Some(Color::rgb(0x2d, 0x6a, 0x4f)),
            eye_ball_color: Some(Color::rgb(0x08, 0x1c, 0x15)),
            eye_frame_shape: Some(EyeFrameShape::Rounded),
            eye_ball_shape: Some(EyeBallShape::Diamond),
            ..StyleOverrides::NONE
        },
    },
    PresetTheme {
        name: "candy",
        overrides: StyleOverrides {
            body_shape: Some(BodyShape::Star),
            body_color: Some(Color::rgb(0xc9, 0x18, 0x4a)),
            background_color: Some(Color::rgb(0xff, 0xf0, 0xf3)),
            eye_frame_color: Some(Color::rgb(0xff, 0x4d, 0x6d)),
            eye_ball_color: Some(Color::rgb(0xa4, 0x13, 0x3c)),
            eye_frame_shape: Some(EyeFrameShape::Dotted),
            eye_ball_shape: Some(EyeBallShape::Circle),
            // Stars leave gaps between modules, lean on error correction
            ec_level: Some(crate::common::ECLevel::Q),
            ..StyleOverrides::NONE
        },
    },
    PresetTheme {
        name: "midnight",
        overrides: StyleOverrides {
            body_shape: Some(BodyShape::Rounded),
            body_color: Some(Color::rgb(0xe0, 0xe0, 0xff)),
            background_color: Some(Color::rgb(0x0d, 0x1b, 0x2a)),
            eye_frame_color: Some(Color::rgb(0xe0, 0xe0, 0xff)),
            eye_ball_color: Some(Color::rgb(0x7f, 0xdb, 0xff)),
            eye_frame_shape: Some(EyeFrameShape::Rounded),
            eye_ball_shape: Some(EyeBallShape::Rounded),
            ..StyleOverrides::NONE
        },
    },
];

/// Case-insensitive preset lookup.
pub fn preset(name: &str) -> Option<&'static PresetTheme> {
    let name = name.trim();
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

pub fn apply_preset(base: &StyleConfig, preset: &PresetTheme) -> StyleConfig {
    base.merge(&preset.overrides)
}

#[cfg(test)]
mod preset_tests {
    use super::{apply_preset, preset, PRESETS};
    use crate::common::{Color, ECLevel};
    use crate::render::{BodyShape, EyeFrameShape};
    use crate::style::{ContrastValidator, DEFAULT_STYLE};

    #[test]
    fn test_lookup() {
        assert_eq!(preset("Ocean").map(|p| p.name), Some("ocean"));
        assert!(preset("neon").is_none());
    }

    #[test]
    fn test_names_unique() {
        for (i, a) in PRESETS.iter().enumerate() {
            assert!(PRESETS[i + 1..].iter().all(|b| b.name != a.name), "{}", a.name);
        }
    }

    #[test]
    fn test_apply_keeps_unset_fields() {
        let base = DEFAULT_STYLE.with_size(320).with_margin(3).with_ec_level(ECLevel::H);
        let style = apply_preset(&base, preset("ocean").unwrap());
        assert_eq!(style.body_shape(), BodyShape::Dots);
        assert_eq!(style.eye_frame_shape(), EyeFrameShape::Circle);
        assert_eq!(style.size(), 320);
        assert_eq!(style.margin(), 3);
        assert_eq!(style.ec_level(), ECLevel::H);
    }

    #[test]
    fn test_classic_restores_defaults() {
        let styled = apply_preset(&DEFAULT_STYLE, preset("candy").unwrap());
        let back = apply_preset(&styled, preset("classic").unwrap());
        assert_eq!(back.body_color(), Color::BLACK);
        assert_eq!(back.body_shape(), BodyShape::Square);
        assert_eq!(back.ec_level(), ECLevel::Q);
    }

    #[test]
    fn test_presets_pass_contrast() {
        let v = ContrastValidator::default();
        for p in PRESETS {
            assert_eq!(v.check(&apply_preset(&DEFAULT_STYLE, p)), None, "{}", p.name);
        }
    }
}
