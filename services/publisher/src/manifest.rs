//! Bounds extraction and metadata document output.

use std::fs;

use anyhow::{Context, Result};
use tracing::{info, warn};

use gdal_tools::{raster_bounds, GdalRunner};
use raster_common::{LayerRecord, Manifest};

use crate::config::PublisherConfig;
use crate::convert::find_inputs;

/// Collect bounds for every converted layer.
///
/// A layer is recorded only when its PNG overlay exists and both report
/// corners parse; anything else drops the layer with a logged failure.
pub fn collect_manifest(config: &PublisherConfig, runner: &dyn GdalRunner) -> Result<Manifest> {
    let mut manifest = Manifest::new();

    for input in find_inputs(config)? {
        let Some(layer) = config.layer_for(&input) else {
            continue;
        };
        if !config.output_image(layer).exists() {
            continue;
        }

        info!(input = %input.display(), "Extracting bounds");
        match raster_bounds(runner, &input)? {
            Some(bounds) => {
                info!(layer = %layer, "Bounds extracted");
                manifest.insert(
                    layer,
                    LayerRecord {
                        bounds,
                        file: format!("{layer}.png"),
                    },
                );
            }
            None => warn!(layer = %layer, "Failed to extract bounds"),
        }
    }

    Ok(manifest)
}

/// Write the metadata document in one whole-content write, then echo it to
/// stdout.
pub fn write_manifest(config: &PublisherConfig, manifest: &Manifest) -> Result<()> {
    let document = manifest.to_pretty_json()?;
    let path = config.metadata_path();
    fs::write(&path, &document).with_context(|| format!("writing {}", path.display()))?;

    info!(
        path = %path.display(),
        layers = manifest.len(),
        "Metadata written"
    );
    println!("{document}");

    Ok(())
}
