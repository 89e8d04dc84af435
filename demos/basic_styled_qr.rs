use std::error::Error;

use qrstyler::StyledQRBuilder;

fn main() -> Result<(), Box<dyn Error>> {
    // Simplest usage - provide only the payload, the default style is black squares on white
    let qr = StyledQRBuilder::new("https://example.com").build()?;

    // Upscale on export and save
    qr.save("simple_styled_qr.png", 4)?; // 4x scale factor

    println!("Styled QR code saved to: simple_styled_qr.png");
    Ok(())
}
