#[cfg(test)]
mod styled_qr_proptests {
    use proptest::prelude::*;

    use qrstyler::*;

    pub fn body_strategy() -> BoxedStrategy<BodyShape> {
        prop::sample::select(BodyShape::ALL).boxed()
    }

    pub fn frame_strategy() -> BoxedStrategy<EyeFrameShape> {
        prop::sample::select(EyeFrameShape::ALL).boxed()
    }

    pub fn ball_strategy() -> BoxedStrategy<EyeBallShape> {
        prop::sample::select(EyeBallShape::ALL).boxed()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn proptest_module_centers(
            body in body_strategy(),
            frame in frame_strategy(),
            ball in ball_strategy(),
            data in "[a-zA-Z0-9 ]{1,40}",
        ) {
            let body_color = Color::rgb(0x20, 0x10, 0x60);
            let bg = Color::rgb(0xfa, 0xfa, 0xf0);
            let style = DEFAULT_STYLE
                .with_size(400)
                .with_body_shape(body)
                .with_eye_frame_shape(frame)
                .with_eye_ball_shape(ball)
                .with_body_color(body_color)
                .with_background_color(bg);
            let qr = StyledQRBuilder::new(&data).style(&style).build().unwrap();
            let geo = qr.geometry();
            let w = qr.matrix().width();

            for (r, c, dark) in qr.matrix().modules() {
                if CellRole::Data != qrstyler::builder::classify(r, c, w) {
                    continue;
                }
                let o = geo.cell_origin(r, c);
                let half = geo.module_size / 2.0;
                let (x, y) = ((o.x + half) as u32, (o.y + half) as u32);
                let exp = if dark { body_color } else { bg };
                prop_assert_eq!(
                    qr.image().get_pixel(x, y).0,
                    [exp.r, exp.g, exp.b, 255],
                    "cell ({}, {})", r, c
                );
            }
        }

        #[test]
        fn proptest_roles_ignore_style(
            body in body_strategy(),
            frame in frame_strategy(),
            ball in ball_strategy(),
        ) {
            let style = DEFAULT_STYLE
                .with_body_shape(body)
                .with_eye_frame_shape(frame)
                .with_eye_ball_shape(ball);
            let styled = StyledQRBuilder::new("roles").style(&style).build().unwrap();
            let plain = StyledQRBuilder::new("roles").build().unwrap();
            prop_assert_eq!(styled.matrix(), plain.matrix());
            prop_assert_eq!(RoleMap::classify(styled.matrix()), RoleMap::classify(plain.matrix()));
        }
    }
}

#[cfg(test)]
mod styled_qr_tests {
    use image::{DynamicImage, RgbaImage};
    use test_case::test_case;

    use qrstyler::*;

    fn scan(img: &RgbaImage) -> Vec<String> {
        let luma = DynamicImage::ImageRgba8(img.clone()).to_luma8();
        let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
            luma.width() as usize,
            luma.height() as usize,
            |x, y| luma.get_pixel(x as u32, y as u32).0[0],
        );
        prepared
            .detect_grids()
            .into_iter()
            .filter_map(|g| g.decode().ok())
            .map(|(_meta, content)| content)
            .collect()
    }

    #[test_case("https://example.com", ECLevel::M; "url")]
    #[test_case("Hello, world!", ECLevel::L; "text")]
    #[test_case("0123456789", ECLevel::H; "numeric")]
    fn test_default_style_scans(data: &str, ecl: ECLevel) {
        let style = DEFAULT_STYLE.with_size(400).with_margin(4).with_ec_level(ecl);
        let qr = StyledQRBuilder::new(data).style(&style).build().unwrap();
        assert_eq!(scan(qr.image()), [data]);
    }

    #[test_case("rounded", "https://example.com/rounded"; "rounded preset")]
    #[test_case("ocean", "https://example.com/ocean"; "ocean preset")]
    #[test_case("rounded", "0123456789"; "rounded numeric")]
    #[test_case("ocean", "Hello, world!"; "ocean text")]
    fn test_preset_scans(name: &str, data: &str) {
        let style = apply_preset(&DEFAULT_STYLE, preset(name).unwrap())
            .with_size(400)
            .with_margin(4)
            .with_ec_level(ECLevel::Q);
        let qr = StyledQRBuilder::new(data).style(&style).build().unwrap();
        assert!(qr.contrast_warning().is_none());
        assert_eq!(scan(qr.image()), [data], "{name}");
    }

    #[test]
    fn test_colored_eyes_scan() {
        let style = DEFAULT_STYLE
            .with_size(400)
            .with_margin(4)
            .with_body_color(Color::rgb(0x0b, 0x3d, 0x91))
            .with_eye_frame_color(Color::rgb(0x00, 0x30, 0x70))
            .with_eye_ball_color(Color::rgb(0x9d, 0x02, 0x08));
        let qr = StyledQRBuilder::new("colored eyes").style(&style).build().unwrap();
        assert_eq!(scan(qr.image()), ["colored eyes"]);
    }

    #[test]
    fn test_upscaled_export_scans() {
        let style = DEFAULT_STYLE.with_margin(4);
        let qr = StyledQRBuilder::new("scaled").style(&style).build().unwrap();
        let big = qr.to_image(3).unwrap();
        assert_eq!(big.dimensions(), (600, 600));
        assert_eq!(scan(&big), ["scaled"]);
    }

    #[test]
    fn test_caller_surface_matches_builder() {
        let style = apply_preset(&DEFAULT_STYLE, preset("sunset").unwrap());
        let qr = StyledQRBuilder::new("surface").style(&style).build().unwrap();

        let matrix = generate_matrix("surface", style.ec_level()).unwrap();
        let mut canvas = Canvas::new(style.size(), style.size()).unwrap();
        let geo = draw_styled(&mut canvas, &matrix, &style).unwrap();
        assert_eq!(geo, qr.geometry());
        assert_eq!(&canvas.to_image(), qr.image());
    }

    #[test]
    fn test_redraw_overwrites_previous() {
        let matrix = generate_matrix("redraw", ECLevel::M).unwrap();
        let mut canvas = Canvas::new(200, 200).unwrap();
        let star =
            DEFAULT_STYLE.with_body_shape(BodyShape::Star).with_body_color(Color::rgb(255, 0, 0));
        draw_styled(&mut canvas, &matrix, &star).unwrap();
        draw_styled(&mut canvas, &matrix, &DEFAULT_STYLE).unwrap();

        let fresh = StyledQRBuilder::new("redraw").build().unwrap();
        assert_eq!(&canvas.to_image(), fresh.image());
    }

    #[test]
    fn test_session_matches_builder() {
        let style = apply_preset(&DEFAULT_STYLE, preset("forest").unwrap());
        let mut session = RenderSession::new();
        let RenderOutcome::Rendered(from_session) = session.render("session", &style) else {
            panic!("expected a render");
        };
        let from_builder = StyledQRBuilder::new("session").style(&style).build().unwrap();
        assert_eq!(from_session.image(), from_builder.image());
    }

    #[test]
    fn test_stored_style_renders_identically() {
        let style = apply_preset(&DEFAULT_STYLE, preset("candy").unwrap()).with_size(256);
        let mut store = MemoryStyleStore::new();
        let saved = store.save_style("dana", "candy-256", &style).unwrap();
        let loaded = store.load_style(saved.id).unwrap();

        let a = StyledQRBuilder::new("stored").style(&style).build().unwrap();
        let b = StyledQRBuilder::new("stored").style(&loaded).build().unwrap();
        assert_eq!(a.image(), b.image());
    }

    #[test]
    fn test_style_json_round_trip() {
        let style = apply_preset(&DEFAULT_STYLE, preset("midnight").unwrap());
        let json = serde_json::to_string(&style).unwrap();
        let back: StyleConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, style);
    }
}
