use clap::Parser;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dominant_color::{Extractor, Rgb};
use huespot::preview::{self, PreviewOptions};
use huespot::sampler::Sampler;
use huespot::source;

#[derive(Parser)]
#[command(name = "huespot")]
#[command(about = "Report the dominant color of images and render themed swatches")]
struct Cli {
    /// Image files to sample
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Emit one JSON array of reports instead of plain text
    #[arg(long)]
    json: bool,

    /// Include CSS gradient and glow strings in the output
    #[arg(long)]
    css: bool,

    /// Write a themed swatch PNG per image into this directory
    #[arg(long, value_name = "DIR")]
    preview_dir: Option<PathBuf>,

    /// Downscale images to at most this many pixels per side before sampling
    #[arg(long, value_name = "PIXELS")]
    max_dim: Option<u32>,

    /// Discard pixels whose quantized alpha is at or below this value
    #[arg(long, default_value_t = 40)]
    alpha_cutoff: u8,

    /// Discard pixels whose brightest channel is at or below this value
    #[arg(long, default_value_t = 40)]
    black_cutoff: u8,

    /// Discard pixels whose darkest channel is at or above this value
    #[arg(long, default_value_t = 216)]
    white_floor: u8,
}

/// Per-image result, printed as text or serialized with --json.
#[derive(Serialize)]
struct Report {
    path: String,
    dominant: Option<Rgb>,
    hex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gradient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    glow: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "huespot=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let extractor = Extractor::new()
        .alpha_cutoff(cli.alpha_cutoff)
        .black_cutoff(cli.black_cutoff)
        .white_floor(cli.white_floor);
    let mut sampler = Sampler::new().extractor(extractor);
    if let Some(limit) = cli.max_dim {
        sampler = sampler.max_dim(limit);
    }

    if let Some(dir) = &cli.preview_dir {
        std::fs::create_dir_all(dir)?;
    }

    let options = PreviewOptions::default();
    let mut reports = Vec::with_capacity(cli.inputs.len());
    for path in &cli.inputs {
        reports.push(sample_one(&mut sampler, path, &cli, &options)?);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    Ok(())
}

/// Sample one image, print the plain-text line, and write its swatch
/// when --preview-dir is set.
fn sample_one(
    sampler: &mut Sampler,
    path: &Path,
    cli: &Cli,
    options: &PreviewOptions,
) -> anyhow::Result<Report> {
    let dominant = if let Some(dir) = &cli.preview_dir {
        // Decode once; the swatch needs the pixels again after sampling.
        let img = source::open_image(path)?;
        let dominant = sampler.sample_image(&path.to_string_lossy(), &img);

        if let Some(tint) = dominant {
            let swatch = preview::render_preview(&img, tint, options);
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "image".to_string());
            let out = dir.join(format!("{stem}_swatch.png"));
            swatch.save(&out)?;
            tracing::info!(out = %out.display(), "Wrote swatch");
        } else {
            tracing::debug!(path = %path.display(), "No dominant color, skipping swatch");
        }

        dominant
    } else {
        sampler.sample_path(path)?
    };

    if !cli.json {
        match dominant {
            Some(color) => println!("{}  {}", path.display(), color.to_hex()),
            None => println!("{}  no dominant color", path.display()),
        }
        if cli.css {
            if let Some(color) = dominant {
                println!("  background: {};", preview::css_radial_gradient(color, options));
                println!("  box-shadow: {};", preview::css_inset_glow(color, options));
            }
        }
    }

    Ok(Report {
        path: path.display().to_string(),
        dominant,
        hex: dominant.map(|c| c.to_hex()),
        gradient: dominant
            .filter(|_| cli.css)
            .map(|c| preview::css_radial_gradient(c, options)),
        glow: dominant
            .filter(|_| cli.css)
            .map(|c| preview::css_inset_glow(c, options)),
    })
}
