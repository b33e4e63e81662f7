//! Web-map raster publisher.
//!
//! Converts `*_web.tif` rasters to colorized PNG overlays with the GDAL
//! command-line toolchain and writes bounds metadata for the map front end.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use gdal_tools::{Gdal, GdalToolchain};
use publisher::{collect_manifest, convert_directory, write_manifest, PublisherConfig};

#[derive(Parser, Debug)]
#[command(name = "publisher")]
#[command(about = "Batch raster publisher for web map overlays")]
struct Args {
    /// Directory containing *_web.tif input rasters
    #[arg(long, default_value = "public/data")]
    input_dir: PathBuf,

    /// Directory receiving PNG overlays and metadata
    #[arg(long, default_value = "public/data")]
    output_dir: PathBuf,

    /// Color ramp definition for gdaldem color-relief
    #[arg(long, default_value = "color_ramp.txt")]
    color_ramp: PathBuf,

    /// Directory holding the GDAL binaries (default: resolve via PATH)
    #[arg(long)]
    gdal_bin_dir: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let toolchain = match &args.gdal_bin_dir {
        Some(dir) => GdalToolchain::in_dir(dir),
        None => GdalToolchain::default(),
    };

    let config = PublisherConfig {
        input_dir: args.input_dir,
        output_dir: args.output_dir,
        color_ramp: args.color_ramp,
        toolchain,
        ..PublisherConfig::default()
    };
    let runner = Gdal::new(config.toolchain.clone());

    info!("Converting web rasters to PNG overlays");
    let summary = convert_directory(&config, &runner)?;
    info!(
        converted = summary.converted,
        failed = summary.failed,
        "Conversion phase complete"
    );

    info!("Extracting layer bounds");
    let manifest = collect_manifest(&config, &runner)?;
    write_manifest(&config, &manifest)?;

    info!(layers = manifest.len(), "Publish complete");
    Ok(())
}
