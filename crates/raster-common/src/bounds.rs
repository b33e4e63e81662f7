//! Geographic bounds types for web map overlays.

use serde::{Deserialize, Serialize};

/// One geographic corner of a raster extent, stored as (latitude, longitude).
///
/// `gdalinfo` prints corner pairs as `(longitude, latitude)`; readings are
/// swapped into latitude-first order at parse time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerReading {
    pub lat: f64,
    pub lon: f64,
}

impl CornerReading {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A geographic bounding box in the corner form Leaflet's `imageOverlay`
/// expects: `[[south, west], [north, east]]`, degrees in EPSG:4326.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "[[f64; 2]; 2]", from = "[[f64; 2]; 2]")]
pub struct WebBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl WebBounds {
    /// Create a new bounding box from edge coordinates.
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self {
            south,
            west,
            north,
            east,
        }
    }

    /// Derive bounds from the upper-left and lower-right corner readings
    /// of a raster extent.
    pub fn from_corners(upper_left: CornerReading, lower_right: CornerReading) -> Self {
        Self {
            south: lower_right.lat,
            west: upper_left.lon,
            north: upper_left.lat,
            east: lower_right.lon,
        }
    }

    /// Width of the bounding box in degrees.
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    /// Height of the bounding box in degrees.
    pub fn height(&self) -> f64 {
        self.north - self.south
    }
}

impl From<WebBounds> for [[f64; 2]; 2] {
    fn from(b: WebBounds) -> Self {
        [[b.south, b.west], [b.north, b.east]]
    }
}

impl From<[[f64; 2]; 2]> for WebBounds {
    fn from(corners: [[f64; 2]; 2]) -> Self {
        Self {
            south: corners[0][0],
            west: corners[0][1],
            north: corners[1][0],
            east: corners[1][1],
        }
    }
}
