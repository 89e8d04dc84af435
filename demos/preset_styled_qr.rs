use std::error::Error;

use qrstyler::{apply_preset, auto_fix, preset, Color, EyeBallShape, StyledQRBuilder, DEFAULT_STYLE};

fn main() -> Result<(), Box<dyn Error>> {
    let data = "This example renders the same payload with a preset and a manual tweak.";

    let ocean = preset("ocean").ok_or("missing preset")?;
    let style = apply_preset(&DEFAULT_STYLE, ocean)
        .with_eye_ball_shape(EyeBallShape::Diamond) // Override a single field after the preset
        .with_size(400) // Clamped to 100..=400
        .with_margin(4); // Quiet zone in modules

    let qr = StyledQRBuilder::new(data).style(&style).build()?;
    qr.save("ocean_qr.png", 2)?;
    println!("Preset QR code saved to: ocean_qr.png");

    // Too-light body: still rendered, with a warning
    let pale = style.with_body_color(Color::parse("#e0e0e0")?);
    let qr = StyledQRBuilder::new(data).style(&pale).build()?;
    if let Some(warning) = qr.contrast_warning() {
        println!("{warning}");
        let fixed = StyledQRBuilder::new(data).style(&auto_fix(&pale)).build()?;
        fixed.save("fixed_qr.png", 2)?;
        println!("Auto-fixed QR code saved to: fixed_qr.png");
    }

    Ok(())
}
