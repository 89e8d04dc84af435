mod eyes;
mod matrix;
mod session;

pub use eyes::{classify, CellRole, EyePosition, RoleMap, EYE_SIZE};
pub use matrix::{generate_matrix, ModuleMatrix};
pub use session::{Generation, RenderOutcome, RenderRequest, RenderSession, RenderState};

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};
use imageproc::point::Point;
use tracing::{debug, error, warn};

use crate::common::{QRError, QRResult};
use crate::export::upscale;
use crate::render::{draw_body_modules, draw_eye_ball, draw_eye_frame, Canvas};
use crate::style::{ContrastValidator, ContrastWarning, StyleConfig, DEFAULT_STYLE};

// Geometry
//------------------------------------------------------------------------------

/// Pixel layout of a matrix on the output raster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub module_count: usize,
    pub margin: u32,
    pub size: u32,
    pub module_size: f64,
    pub pixel_offset: f64,
}

impl Geometry {
    pub fn new(module_count: usize, margin: u32, size: u32) -> Self {
        let module_size = size as f64 / (module_count as f64 + 2.0 * margin as f64);
        Self { module_count, margin, size, module_size, pixel_offset: module_size * margin as f64 }
    }

    pub fn for_style(matrix: &ModuleMatrix, style: &StyleConfig) -> Self {
        Self::new(matrix.width(), style.margin(), style.size())
    }

    /// Top-left pixel of the cell at `(r, c)`.
    pub fn cell_origin(&self, r: usize, c: usize) -> Point<f64> {
        Point::new(
            self.pixel_offset + c as f64 * self.module_size,
            self.pixel_offset + r as f64 * self.module_size,
        )
    }
}


// Drawing
//------------------------------------------------------------------------------

/// Draws `matrix` in `style` onto a caller-owned surface. The surface must be exactly
/// `style.size()` pixels square; otherwise nothing is drawn.
pub fn draw_styled(
    canvas: &mut Canvas,
    matrix: &ModuleMatrix,
    style: &StyleConfig,
) -> QRResult<Geometry> {
    let sz = style.size();
    if canvas.width() != sz || canvas.height() != sz {
        let err = QRError::SurfaceUnavailable(format!(
            "surface is {}x{}, style needs {sz}x{sz}",
            canvas.width(),
            canvas.height()
        ));
        error!(%err, "Skipping render");
        return Err(err);
    }

    let w = matrix.width();
    let geo = Geometry::for_style(matrix, style);
    debug!(modules = w, module_size = geo.module_size, "Drawing background...");
    canvas.clear(style.background_color());

    debug!(shape = %style.body_shape(), "Drawing data modules...");
    let origins = matrix
        .modules()
        .filter(|&(r, c, dark)| dark && classify(r, c, w) == CellRole::Data)
        .map(|(r, c, _)| geo.cell_origin(r, c));
    draw_body_modules(canvas, origins, geo.module_size, style.body_shape(), style.body_color());

    // Eyes are drawn whole whatever the matrix holds there
    debug!(frame = %style.eye_frame_shape(), ball = %style.eye_ball_shape(), "Drawing eyes...");
    for pos in EyePosition::ALL {
        let (r, c) = pos.origin(w);
        let origin = geo.cell_origin(r, c);
        let m = geo.module_size;
        draw_eye_frame(canvas, origin, m, style.eye_frame_shape(), style.eye_frame_color());
        draw_eye_ball(canvas, origin, m, style.eye_ball_shape(), style.eye_ball_color());
    }

    Ok(geo)
}

pub(crate) fn render_matrix(
    matrix: ModuleMatrix,
    style: &StyleConfig,
    validator: &ContrastValidator,
) -> QRResult<StyledQR> {
    let warning = validator.check(style);
    if let Some(w) = &warning {
        warn!(ratio = w.ratio, min_ratio = w.min_ratio, "Low contrast between body and background");
    }

    let mut canvas = Canvas::new(style.size(), style.size()).inspect_err(|err| {
        error!(%err, "Skipping render");
    })?;
    let geometry = draw_styled(&mut canvas, &matrix, style)?;

    Ok(StyledQR { img: canvas.into_image(), matrix, geometry, style: *style, warning })
}

// Styled QR
//------------------------------------------------------------------------------

/// Finished render: the raster plus everything that produced it.
#[derive(Debug, Clone)]
pub struct StyledQR {
    img: RgbaImage,
    matrix: ModuleMatrix,
    geometry: Geometry,
    style: StyleConfig,
    warning: Option<ContrastWarning>,
}

impl StyledQR {
    pub fn image(&self) -> &RgbaImage {
        &self.img
    }

    pub fn into_image(self) -> RgbaImage {
        self.img
    }

    pub fn matrix(&self) -> &ModuleMatrix {
        &self.matrix
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn contrast_warning(&self) -> Option<&ContrastWarning> {
        self.warning.as_ref()
    }

    /// Copy of the raster, each pixel repeated `scale` times along both axes.
    pub fn to_image(&self, scale: u32) -> QRResult<RgbaImage> {
        upscale(&self.img, scale)
    }

    pub fn to_png(&self, scale: u32) -> QRResult<Vec<u8>> {
        let img = self.to_image(scale)?;
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
        Ok(buf)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P, scale: u32) -> QRResult<()> {
        self.to_image(scale)?.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}

// Builder
//------------------------------------------------------------------------------

pub struct StyledQRBuilder<'a> {
    payload: &'a str,
    style: StyleConfig,
    validator: ContrastValidator,
}

impl<'a> StyledQRBuilder<'a> {
    pub fn new(payload: &'a str) -> Self {
        Self { payload, style: DEFAULT_STYLE, validator: ContrastValidator::default() }
    }

    pub fn payload(&mut self, payload: &'a str) -> &mut Self {
        self.payload = payload;
        self
    }

    pub fn style(&mut self, style: &StyleConfig) -> &mut Self {
        self.style = *style;
        self
    }

    pub fn validator(&mut self, validator: ContrastValidator) -> &mut Self {
        self.validator = validator;
        self
    }

    pub fn build(&self) -> QRResult<StyledQR> {
        debug!(
            size = self.style.size(),
            margin = self.style.margin(),
            ecl = %self.style.ec_level(),
            "Generating styled QR..."
        );
        let matrix = generate_matrix(self.payload, self.style.ec_level())?;
        render_matrix(matrix, &self.style, &self.validator)
    }
}

#[cfg(test)]
mod builder_tests {
    use test_case::test_case;

    use super::{draw_styled, generate_matrix, RoleMap, StyledQRBuilder};
    use crate::common::{Color, ECLevel, QRError};
    use crate::render::{BodyShape, Canvas, EyeBallShape, EyeFrameShape};
    use crate::style::DEFAULT_STYLE;

    const URL: &str = "https://example.com";

    #[test]
    fn test_example_scenario() {
        let style = DEFAULT_STYLE.with_size(200).with_margin(2).with_ec_level(ECLevel::M);
        let qr = StyledQRBuilder::new(URL).style(&style).build().unwrap();
        assert_eq!(qr.matrix().width(), 25);
        assert!((qr.geometry().module_size - 6.897).abs() < 1e-3);
        assert_eq!(qr.image().dimensions(), (200, 200));
        assert!(qr.contrast_warning().is_none());
    }

    #[test]
    fn test_render_is_deterministic() {
        let style = DEFAULT_STYLE
            .with_body_shape(BodyShape::Star)
            .with_eye_frame_shape(EyeFrameShape::Leaf)
            .with_eye_ball_shape(EyeBallShape::Circle)
            .with_body_color(Color::rgb(0x33, 0x11, 0x88));
        let a = StyledQRBuilder::new(URL).style(&style).build().unwrap();
        let b = StyledQRBuilder::new(URL).style(&style).build().unwrap();
        assert_eq!(a.image().as_raw(), b.image().as_raw());
    }

    #[test]
    fn test_unknown_body_shape_renders_as_square() {
        let unknown = DEFAULT_STYLE.with_body_shape(BodyShape::parse("hexagon"));
        let a = StyledQRBuilder::new(URL).style(&unknown).build().unwrap();
        let b = StyledQRBuilder::new(URL).style(&DEFAULT_STYLE).build().unwrap();
        assert_eq!(a.image().as_raw(), b.image().as_raw());
    }

    #[test]
    fn test_classification_independent_of_style() {
        let fancy = DEFAULT_STYLE
            .with_body_shape(BodyShape::Star)
            .with_eye_frame_shape(EyeFrameShape::Circle)
            .with_eye_ball_shape(EyeBallShape::Diamond);
        let a = StyledQRBuilder::new(URL).style(&DEFAULT_STYLE).build().unwrap();
        let b = StyledQRBuilder::new(URL).style(&fancy).build().unwrap();
        assert_eq!(a.matrix(), b.matrix());
        assert_eq!(RoleMap::classify(a.matrix()), RoleMap::classify(b.matrix()));
        assert_ne!(a.image().as_raw(), b.image().as_raw());
    }

    #[test]
    fn test_quiet_zone_is_background() {
        let style = DEFAULT_STYLE.with_background_color(Color::rgb(250, 240, 200)).with_margin(4);
        let qr = StyledQRBuilder::new(URL).style(&style).build().unwrap();
        let edge = qr.geometry().pixel_offset.floor() as u32;
        let far = style.size() - edge;
        for (x, y, p) in qr.image().enumerate_pixels() {
            if x < edge || y < edge || x >= far || y >= far {
                assert_eq!(p.0, [250, 240, 200, 255], "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_eye_colors_applied() {
        let style = DEFAULT_STYLE
            .with_size(290)
            .with_eye_frame_color(Color::rgb(255, 0, 0))
            .with_eye_ball_color(Color::rgb(0, 0, 255));
        // 25 modules + 2 * 2 margin = 29, exactly 10px per module
        let qr = StyledQRBuilder::new(URL).style(&style).build().unwrap();
        let px = |x: u32, y: u32| qr.image().get_pixel(x, y).0;
        assert_eq!(px(25, 25), [255, 0, 0, 255]);
        assert_eq!(px(55, 55), [0, 0, 255, 255]);
        assert_eq!(px(35, 35), [255, 255, 255, 255]);
        // Top-right and bottom-left eyes
        assert_eq!(px(285 - 25 - 20, 55), [0, 0, 255, 255]);
        assert_eq!(px(55, 285 - 25 - 20), [0, 0, 255, 255]);
    }

    #[test]
    fn test_low_contrast_still_renders() {
        let style = DEFAULT_STYLE.with_body_color(Color::parse("#e0e0e0").unwrap());
        let qr = StyledQRBuilder::new(URL).style(&style).build().unwrap();
        assert!(qr.contrast_warning().is_some());
        assert_eq!(qr.image().dimensions(), (200, 200));
    }

    #[test_case("", ECLevel::M, QRError::EmptyPayload)]
    #[test_case(&"x".repeat(3000), ECLevel::H, QRError::DataTooLong(ECLevel::H))]
    fn test_encoding_errors(payload: &str, ecl: ECLevel, exp: QRError) {
        let style = DEFAULT_STYLE.with_ec_level(ecl);
        let err = StyledQRBuilder::new(payload).style(&style).build().unwrap_err();
        assert_eq!(err, exp);
        assert!(err.is_encoding_error());
    }

    #[test]
    fn test_wrong_surface_left_untouched() {
        let matrix = generate_matrix(URL, ECLevel::M).unwrap();
        let mut canvas = Canvas::new(150, 150).unwrap();
        canvas.clear(Color::rgb(1, 2, 3));
        let err = draw_styled(&mut canvas, &matrix, &DEFAULT_STYLE).unwrap_err();
        assert!(matches!(err, QRError::SurfaceUnavailable(_)));
        assert!(canvas.to_image().pixels().all(|p| p.0 == [1, 2, 3, 255]));
    }

    #[test]
    fn test_png_export() {
        let qr = StyledQRBuilder::new(URL).build().unwrap();
        let png = qr.to_png(2).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (400, 400));
        assert_eq!(qr.to_png(0), Err(QRError::InvalidScale(0)));
    }
}
