//! Publisher configuration.

use std::path::{Path, PathBuf};

use gdal_tools::GdalToolchain;

/// Explicit configuration threaded through each pipeline phase.
#[derive(Debug, Clone)]
pub struct PublisherConfig {
    /// Directory scanned for input rasters.
    pub input_dir: PathBuf,

    /// Directory receiving the PNG overlays and the metadata document.
    pub output_dir: PathBuf,

    /// Directory for intermediate colorized rasters.
    pub work_dir: PathBuf,

    /// Color ramp definition handed to `gdaldem color-relief`.
    pub color_ramp: PathBuf,

    /// Filename suffix identifying web-export rasters.
    pub raster_suffix: String,

    /// Name of the metadata document written to `output_dir`.
    pub metadata_filename: String,

    /// GDAL binary locations.
    pub toolchain: GdalToolchain,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("public/data"),
            output_dir: PathBuf::from("public/data"),
            work_dir: PathBuf::from("."),
            color_ramp: PathBuf::from("color_ramp.txt"),
            raster_suffix: "_web.tif".to_string(),
            metadata_filename: "raster_metadata.json".to_string(),
            toolchain: GdalToolchain::default(),
        }
    }
}

impl PublisherConfig {
    /// Path of the final overlay image for a layer.
    pub fn output_image(&self, layer: &str) -> PathBuf {
        self.output_dir.join(format!("{layer}.png"))
    }

    /// Path of the intermediate colorized raster for a layer.
    pub fn intermediate(&self, layer: &str) -> PathBuf {
        self.work_dir.join(format!("temp_{layer}_colored.tif"))
    }

    /// Path of the metadata document.
    pub fn metadata_path(&self) -> PathBuf {
        self.output_dir.join(&self.metadata_filename)
    }

    /// Layer name for an input raster path, if it matches the suffix.
    pub fn layer_for<'a>(&self, input: &'a Path) -> Option<&'a str> {
        let file_name = input.file_name()?.to_str()?;
        raster_common::layer_name(file_name, &self.raster_suffix)
    }
}
