//! Batch publisher for web-map raster overlays.
//!
//! Converts georeferenced `*_web.tif` rasters into colorized PNG overlays
//! via the GDAL command-line toolchain, then writes a sidecar
//! `raster_metadata.json` describing each overlay's geographic bounds for
//! the map front end.
//!
//! The pipeline runs three strictly sequential phases over the same input
//! set: [`convert::convert_directory`], [`manifest::collect_manifest`], and
//! [`manifest::write_manifest`]. All external tool access goes through the
//! [`gdal_tools::GdalRunner`] seam so the whole pipeline is testable without
//! GDAL installed.

pub mod config;
pub mod convert;
pub mod manifest;

pub use config::PublisherConfig;
pub use convert::{convert_directory, ConvertSummary};
pub use manifest::{collect_manifest, write_manifest};
