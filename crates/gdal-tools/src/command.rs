//! Typed GDAL invocations.

use std::ffi::OsString;
use std::path::PathBuf;

/// The three GDAL binaries the publisher drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Gdaldem,
    GdalTranslate,
    GdalInfo,
}

impl Tool {
    /// Default binary name, resolved via `PATH`.
    pub fn binary_name(&self) -> &'static str {
        match self {
            Tool::Gdaldem => "gdaldem",
            Tool::GdalTranslate => "gdal_translate",
            Tool::GdalInfo => "gdalinfo",
        }
    }
}

/// Raster image formats passed to `gdal_translate -of`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
}

impl ImageFormat {
    /// GDAL driver name for this format.
    pub fn driver(&self) -> &'static str {
        match self {
            ImageFormat::Png => "PNG",
        }
    }
}

/// One fully-described toolchain invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum GdalCommand {
    /// `gdaldem color-relief <input> <color_ramp> <output> [-alpha]`
    ColorRelief {
        input: PathBuf,
        color_ramp: PathBuf,
        output: PathBuf,
        alpha: bool,
    },

    /// `gdal_translate -of <format> <input> <output>`
    Translate {
        format: ImageFormat,
        input: PathBuf,
        output: PathBuf,
    },

    /// `gdalinfo <input>`
    Info { input: PathBuf },
}

impl GdalCommand {
    /// Binary this command runs under.
    pub fn tool(&self) -> Tool {
        match self {
            GdalCommand::ColorRelief { .. } => Tool::Gdaldem,
            GdalCommand::Translate { .. } => Tool::GdalTranslate,
            GdalCommand::Info { .. } => Tool::GdalInfo,
        }
    }

    /// Arguments handed to the binary, program name excluded.
    pub fn to_args(&self) -> Vec<OsString> {
        match self {
            GdalCommand::ColorRelief {
                input,
                color_ramp,
                output,
                alpha,
            } => {
                let mut args: Vec<OsString> = vec![
                    "color-relief".into(),
                    input.clone().into(),
                    color_ramp.clone().into(),
                    output.clone().into(),
                ];
                if *alpha {
                    args.push("-alpha".into());
                }
                args
            }

            GdalCommand::Translate {
                format,
                input,
                output,
            } => vec![
                "-of".into(),
                format.driver().into(),
                input.clone().into(),
                output.clone().into(),
            ],

            GdalCommand::Info { input } => vec![input.clone().into()],
        }
    }
}
