//! Typed interface over the GDAL command-line toolchain.
//!
//! The publisher shells out to three GDAL tools (`gdaldem`, `gdal_translate`,
//! `gdalinfo`) rather than linking GDAL. Each invocation is described by a
//! [`GdalCommand`] and executed through the [`GdalRunner`] seam, so tests can
//! substitute scripted fakes for the real binaries.
//!
//! # Exit-code semantics
//!
//! A tool that launches but exits non-zero is a normal [`ToolOutput`] the
//! caller inspects; only a failure to spawn the process at all surfaces as
//! [`GdalError::Launch`].

pub mod command;
pub mod info;
pub mod runner;

use thiserror::Error;

pub use command::{GdalCommand, ImageFormat, Tool};
pub use info::{parse_corners, raster_bounds, CornerReport};
pub use runner::{Gdal, GdalRunner, GdalToolchain, ToolOutput};

/// Result type for GDAL toolchain operations.
pub type GdalResult<T> = Result<T, GdalError>;

/// Errors from driving the external toolchain.
#[derive(Error, Debug)]
pub enum GdalError {
    /// The tool binary could not be spawned (missing or not executable).
    #[error("failed to launch {tool}: {source}")]
    Launch {
        tool: String,
        #[source]
        source: std::io::Error,
    },
}
