//! Corner-coordinate scraping from `gdalinfo` reports.
//!
//! `gdalinfo` prints a human-readable report whose corner lines look like:
//!
//! ```text
//! Upper Left  ( -67.9482422,  18.5200195) ( 67d56'53.67"W, 18d31'12.07"N)
//! Lower Right ( -65.2060547,  17.8813477) ( 65d12'21.80"W, 17d52'52.85"N)
//! ```
//!
//! Only the first parenthesized pair on each line is read; it is emitted as
//! `(longitude, latitude)` and stored as a latitude-first [`CornerReading`].

use std::path::Path;

use tracing::warn;

use raster_common::{CornerReading, WebBounds};

use crate::command::GdalCommand;
use crate::runner::GdalRunner;
use crate::GdalResult;

const UPPER_LEFT_MARKER: &str = "Upper Left";
const LOWER_RIGHT_MARKER: &str = "Lower Right";

/// Corner readings scraped from one `gdalinfo` report.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CornerReport {
    pub upper_left: Option<CornerReading>,
    pub lower_right: Option<CornerReading>,
}

impl CornerReport {
    /// Bounds are derivable only when both corners were read.
    pub fn bounds(&self) -> Option<WebBounds> {
        match (self.upper_left, self.lower_right) {
            (Some(upper_left), Some(lower_right)) => {
                Some(WebBounds::from_corners(upper_left, lower_right))
            }
            _ => None,
        }
    }
}

/// Scan a report for the upper-left and lower-right corner lines.
///
/// A marker line whose coordinates fail to parse is discarded without
/// touching a reading recorded from an earlier line.
pub fn parse_corners(report: &str) -> CornerReport {
    let mut corners = CornerReport::default();

    for line in report.lines() {
        if line.contains(UPPER_LEFT_MARKER) {
            if let Some(reading) = parse_corner_line(line) {
                corners.upper_left = Some(reading);
            }
        }
        if line.contains(LOWER_RIGHT_MARKER) {
            if let Some(reading) = parse_corner_line(line) {
                corners.lower_right = Some(reading);
            }
        }
    }

    corners
}

/// Extract the `(longitude, latitude)` pair between the first `(` and the
/// first `)` on a corner line, swapped into a latitude-first reading.
fn parse_corner_line(line: &str) -> Option<CornerReading> {
    let open = line.find('(')?;
    let close = open + 1 + line[open + 1..].find(')')?;
    let (lon_token, lat_token) = line[open + 1..close].split_once(',')?;

    let lon: f64 = lon_token.trim().parse().ok()?;
    let lat: f64 = lat_token.trim().parse().ok()?;
    Some(CornerReading::new(lat, lon))
}

/// Inspect a raster with `gdalinfo` and derive its web overlay bounds.
///
/// A failed inspection (non-zero exit) or a report missing either corner
/// yields `Ok(None)`; only a launch fault is an error.
pub fn raster_bounds(runner: &dyn GdalRunner, input: &Path) -> GdalResult<Option<WebBounds>> {
    let output = runner.run(&GdalCommand::Info {
        input: input.to_path_buf(),
    })?;

    if !output.success() {
        warn!(
            input = %input.display(),
            stderr = %output.stderr.trim(),
            "gdalinfo failed"
        );
        return Ok(None);
    }

    Ok(parse_corners(&output.stdout).bounds())
}
