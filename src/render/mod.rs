//! Raster surface and the three shape renderer families: data modules, eye frames and eye
//! balls. Renderers only build paths and fill them; they never touch surface state beyond the
//! pixels they cover.

pub mod body;
pub mod canvas;
pub mod eye;
pub mod path;
pub mod shape;

pub use body::{body_path, draw_body_module, draw_body_modules};
pub use canvas::{Canvas, FillRule, MAX_SURFACE_SIDE};
pub use eye::{ball_path, draw_eye_ball, draw_eye_frame, frame_path};
pub use path::{CornerRadii, Path};
pub use shape::{BodyShape, EyeBallShape, EyeFrameShape};
