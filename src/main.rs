//! qrstyler - render styled QR codes from the command line

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use qrstyler::style::effective_contrast;
use qrstyler::{
    apply_preset, auto_fix, preset, BodyShape, Color, ContrastValidator, ECLevel, EyeBallShape,
    EyeFrameShape, StyleConfig, StyleOverrides, StyledQRBuilder, DEFAULT_STYLE, PRESETS,
};

/// Render styled QR codes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a payload to a PNG file
    Render(RenderArgs),
    /// List the built-in presets
    Presets,
    /// Check the contrast between a body and a background color
    Contrast {
        body: Color,
        background: Color,
        /// Minimum acceptable contrast ratio
        #[arg(long, default_value_t = qrstyler::style::DEFAULT_MIN_CONTRAST)]
        min_contrast: f64,
    },
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Text or URL to encode
    payload: String,

    /// Output PNG path
    #[arg(short, long, value_name = "FILE", default_value = "qr.png")]
    output: PathBuf,

    /// Preset applied over the default style
    #[arg(short, long)]
    preset: Option<String>,

    /// JSON file with style fields, applied after the preset
    #[arg(long, value_name = "FILE")]
    style: Option<PathBuf>,

    #[arg(long)]
    body_shape: Option<String>,
    #[arg(long)]
    frame_shape: Option<String>,
    #[arg(long)]
    ball_shape: Option<String>,
    #[arg(long)]
    body_color: Option<Color>,
    #[arg(long)]
    background: Option<Color>,
    #[arg(long)]
    frame_color: Option<Color>,
    #[arg(long)]
    ball_color: Option<Color>,

    /// Side length in pixels (100..=400)
    #[arg(long)]
    size: Option<u32>,
    /// Quiet zone in modules (1..=16)
    #[arg(long)]
    margin: Option<u32>,
    /// Error correction level: L, M, Q or H
    #[arg(long)]
    ec_level: Option<ECLevel>,

    /// Integer upscale factor applied on export (1..=16)
    #[arg(long, default_value_t = 1)]
    scale: u32,

    /// Reset body and background to black on white when contrast is too low
    #[arg(long)]
    auto_fix: bool,

    /// Minimum acceptable contrast ratio
    #[arg(long, default_value_t = qrstyler::style::DEFAULT_MIN_CONTRAST)]
    min_contrast: f64,
}

impl RenderArgs {
    fn overrides(&self) -> StyleOverrides {
        StyleOverrides {
            body_shape: self.body_shape.as_deref().map(BodyShape::parse),
            body_color: self.body_color,
            background_color: self.background,
            eye_frame_color: self.frame_color,
            eye_ball_color: self.ball_color,
            eye_frame_shape: self.frame_shape.as_deref().map(EyeFrameShape::parse),
            eye_ball_shape: self.ball_shape.as_deref().map(EyeBallShape::parse),
            size: self.size,
            margin: self.margin,
            ec_level: self.ec_level,
        }
    }

    /// Default style, then preset, then style file, then flags.
    fn resolve_style(&self) -> Result<StyleConfig> {
        let mut style = DEFAULT_STYLE;
        if let Some(name) = &self.preset {
            let Some(theme) = preset(name) else {
                let names: Vec<_> = PRESETS.iter().map(|p| p.name).collect();
                bail!("Unknown preset {name:?}, expected one of: {}", names.join(", "));
            };
            style = apply_preset(&style, theme);
        }
        if let Some(path) = &self.style {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read style file {}", path.display()))?;
            let file: StyleOverrides = serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse style file {}", path.display()))?;
            style = style.merge(&file);
        }
        Ok(style.merge(&self.overrides()))
    }
}

fn render(args: RenderArgs) -> Result<()> {
    let mut style = args.resolve_style()?;
    let validator = ContrastValidator::new(args.min_contrast);
    if args.auto_fix && validator.check(&style).is_some() {
        info!("Applying contrast auto-fix");
        style = auto_fix(&style);
    }
    debug!(?style, "Resolved style");

    let qr = StyledQRBuilder::new(&args.payload).style(&style).validator(validator).build()?;
    if let Some(warning) = qr.contrast_warning() {
        eprintln!("Warning: {warning}");
    }

    qr.save(&args.output, args.scale)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    let geo = qr.geometry();
    println!(
        "Wrote {} ({} modules, {:.2}px per module, {}x{}px)",
        args.output.display(),
        geo.module_count,
        geo.module_size * args.scale as f64,
        geo.size * args.scale,
        geo.size * args.scale
    );
    Ok(())
}

fn list_presets() {
    for p in PRESETS {
        let style = apply_preset(&DEFAULT_STYLE, p);
        println!(
            "{:<10} body={:<8} frame={:<8} ball={:<8} {} on {}",
            p.name,
            style.body_shape(),
            style.eye_frame_shape(),
            style.eye_ball_shape(),
            style.body_color(),
            style.background_color()
        );
    }
}

fn contrast(body: Color, background: Color, min_contrast: f64) {
    let ratio = effective_contrast(body, background);
    println!("Contrast {body} on {background}: {ratio:.2}:1");
    match ContrastValidator::new(min_contrast).check_colors(body, background) {
        Some(warning) => println!("{warning}"),
        None => println!("OK"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Render(args) => render(args)?,
        Command::Presets => list_presets(),
        Command::Contrast { body, background, min_contrast } => {
            contrast(body, background, min_contrast)
        }
    }
    Ok(())
}
