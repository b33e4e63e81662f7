//! Converter phase: color-relief rendering and PNG translation.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};
use walkdir::WalkDir;

use gdal_tools::{GdalCommand, GdalRunner, ImageFormat};

use crate::config::PublisherConfig;

/// Counts returned by the conversion phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Layers with a final PNG overlay.
    pub converted: usize,
    /// Inputs skipped after a tool reported failure.
    pub failed: usize,
}

/// Discover web-export rasters in the input directory, sorted
/// lexicographically.
pub fn find_inputs(config: &PublisherConfig) -> Result<Vec<PathBuf>> {
    let mut inputs = Vec::new();

    for entry in WalkDir::new(&config.input_dir).min_depth(1).max_depth(1) {
        let entry = entry
            .with_context(|| format!("scanning input directory {}", config.input_dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if config.layer_for(entry.path()).is_some() {
            inputs.push(entry.into_path());
        }
    }

    inputs.sort();
    Ok(inputs)
}

/// Convert every matching input raster into a colorized PNG overlay.
///
/// Per input: `gdaldem color-relief` into an intermediate raster, then
/// `gdal_translate` into the final PNG, then delete the intermediate. A tool
/// reporting failure logs its stderr and skips that input; a translation
/// failure leaves the intermediate in place. Only a toolchain launch fault
/// aborts the run.
pub fn convert_directory(
    config: &PublisherConfig,
    runner: &dyn GdalRunner,
) -> Result<ConvertSummary> {
    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "creating output directory {}",
            config.output_dir.display()
        )
    })?;

    let inputs = find_inputs(config)?;
    info!(
        count = inputs.len(),
        dir = %config.input_dir.display(),
        "Found web rasters to convert"
    );

    let mut summary = ConvertSummary::default();

    for input in &inputs {
        // find_inputs only returns suffix matches.
        let Some(layer) = config.layer_for(input) else {
            continue;
        };
        let intermediate = config.intermediate(layer);
        let output = config.output_image(layer);

        info!(
            input = %input.display(),
            output = %output.display(),
            "Processing raster"
        );

        let colored = runner.run(&GdalCommand::ColorRelief {
            input: input.clone(),
            color_ramp: config.color_ramp.clone(),
            output: intermediate.clone(),
            alpha: true,
        })?;
        if !colored.success() {
            warn!(
                input = %input.display(),
                stderr = %colored.stderr.trim(),
                "color-relief failed, skipping"
            );
            summary.failed += 1;
            continue;
        }

        let translated = runner.run(&GdalCommand::Translate {
            format: ImageFormat::Png,
            input: intermediate.clone(),
            output: output.clone(),
        })?;
        if !translated.success() {
            warn!(
                input = %input.display(),
                stderr = %translated.stderr.trim(),
                "PNG translation failed, skipping"
            );
            summary.failed += 1;
            continue;
        }

        // Missing-file-safe cleanup of the intermediate.
        let _ = fs::remove_file(&intermediate);

        info!(output = %output.display(), "Converted");
        summary.converted += 1;
    }

    Ok(summary)
}
