//! Prism - renders the demonstration scene to a PNG file.

use anyhow::{Context, Result};
use clap::Parser;
use prism_renderer::{render, Camera, RenderConfig};
use std::path::PathBuf;

mod scene;

/// Largest accepted view grid, per side.
const MAX_DIVISIONS: u32 = 16_384;

#[derive(Parser)]
#[command(name = "prism")]
#[command(about = "Recursive ray tracer for a fixed demonstration scene", long_about = None)]
struct Cli {
    /// Output image (PNG)
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,

    /// Cells per side of the view grid
    #[arg(
        short,
        long,
        default_value_t = 500,
        value_parser = clap::value_parser!(u32).range(1..=MAX_DIVISIONS as i64)
    )]
    divisions: u32,

    /// Maximum mirror bounce depth
    #[arg(long, default_value_t = 8)]
    max_depth: u32,

    /// Maximum depth through transparent primitives (default: twice --max-depth)
    #[arg(long)]
    refraction_depth: Option<u32>,

    /// Phong exponent of specular highlights
    #[arg(long, default_value_t = 50.0, value_parser = parse_shininess)]
    shininess: f32,
}

/// Parse a finite, non-negative Phong exponent.
fn parse_shininess(value: &str) -> Result<f32, String> {
    let shininess: f32 = value
        .parse()
        .map_err(|e| format!("`{value}` is not a number: {e}"))?;
    if shininess.is_finite() && shininess >= 0.0 {
        Ok(shininess)
    } else {
        Err(format!("shininess must be finite and non-negative, got {value}"))
    }
}

impl Cli {
    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            max_depth: self.max_depth,
            max_refraction_depth: self.refraction_depth.unwrap_or(2 * self.max_depth),
            shininess: self.shininess,
            ..Default::default()
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    log::info!("Starting Prism");

    let scene = scene::demo_scene().context("Failed to build the demonstration scene")?;
    let camera = Camera::new().with_divisions(cli.divisions);
    let image = render(&scene, &camera, &cli.render_config());

    image
        .save(&cli.output)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    Ok(())
}
