use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use tracing::warn;

// Shape identifiers. Every family has a `Square` variant that unknown names degrade to, so
// parsing never fails.
macro_rules! shape_enum {
    ($(#[$meta:meta])* $name:ident, $family:literal { $($variant:ident => $s:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "&'static str")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }

            /// Case-insensitive lookup, unknown names render as `Square`.
            pub fn parse(s: &str) -> Self {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($s => Self::$variant,)+
                    _ => {
                        warn!(shape = s, family = $family, "Unsupported shape, using square");
                        Self::Square
                    }
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::Square
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::parse(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::parse(&s)
            }
        }

        impl From<$name> for &'static str {
            fn from(shape: $name) -> Self {
                shape.as_str()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.pad(self.as_str())
            }
        }
    };
}

shape_enum! {
    /// Shape of a single data module.
    BodyShape, "body" {
        Square => "square",
        Dots => "dots",
        Rounded => "rounded",
        Diamond => "diamond",
        Star => "star",
    }
}

shape_enum! {
    /// Shape of the 7x7 ring of a finder pattern.
    EyeFrameShape, "eye frame" {
        Square => "square",
        Rounded => "rounded",
        Circle => "circle",
        Leaf => "leaf",
        Dotted => "dotted",
    }
}

shape_enum! {
    /// Shape of the 3x3 center of a finder pattern.
    EyeBallShape, "eye ball" {
        Square => "square",
        Rounded => "rounded",
        Circle => "circle",
        Diamond => "diamond",
        Leaf => "leaf",
    }
}
