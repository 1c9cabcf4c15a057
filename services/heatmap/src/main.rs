//! Global temperature heatmap generator.
//!
//! Fetches the monthly temperature variance dataset and writes it as:
//! - A self-contained HTML page with hover tooltips
//! - A standalone SVG document
//! - A PNG image

mod config;
mod fetch;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use config::{HeatmapConfig, DEFAULT_DATA_URL};
use fetch::{DataSource, DatasetLoader};
use renderer::page::render_html;
use renderer::raster::svg_to_png;
use renderer::{Heatmap, ThresholdScale, TooltipMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Html,
    Svg,
    Png,
}

#[derive(Parser, Debug)]
#[command(name = "heatmap")]
#[command(about = "Render global monthly temperature anomalies as a heatmap")]
struct Args {
    /// Dataset URL
    #[arg(long, env = "HEATMAP_URL", default_value = DEFAULT_DATA_URL)]
    url: String,

    /// Read the dataset from a local file (takes precedence over the URL)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file
    #[arg(short, long, default_value = "heatmap.html")]
    output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Configuration file (YAML)
    #[arg(short, long, env = "HEATMAP_CONFIG")]
    config: Option<PathBuf>,

    /// PNG scale factor (overrides the config file)
    #[arg(long)]
    scale: Option<f32>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    fmt().with_env_filter(filter).with_target(true).init();

    let mut config = HeatmapConfig::load(args.config.as_deref())?;
    if let Some(scale) = args.scale {
        config.raster.scale = scale;
        config.validate()?;
    }

    let source = match &args.input {
        Some(path) => DataSource::File(path.clone()),
        None => DataSource::Url(args.url.clone()),
    };

    info!(source = %source, format = ?args.format, "Starting heatmap render");

    let loader = DatasetLoader::new(&config.http)?;
    let dataset = loader
        .load(&source)
        .await
        .with_context(|| format!("Failed to load dataset from {}", source))?;

    let colors = ThresholdScale::new(&config.palette)?;
    let heatmap = Heatmap::new(&dataset, config.layout, colors)?;

    let bytes = match args.format {
        OutputFormat::Html => render_html(&heatmap)?.into_bytes(),
        OutputFormat::Svg => {
            let svg = heatmap.render_svg(TooltipMode::Title)?;
            format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}", svg).into_bytes()
        }
        OutputFormat::Png => {
            let svg = heatmap.render_svg(TooltipMode::None)?;
            svg_to_png(&svg, config.raster.scale)?
        }
    };

    tokio::fs::write(&args.output, &bytes)
        .await
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    let (first, last) = dataset.year_span();
    info!(
        path = %args.output.display(),
        bytes = bytes.len(),
        records = dataset.len(),
        first_year = first,
        last_year = last,
        "Heatmap written"
    );

    Ok(())
}
