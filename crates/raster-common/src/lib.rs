//! Common types shared across the raster-web workspace.

pub mod bounds;
pub mod layer;

pub use bounds::{CornerReading, WebBounds};
pub use layer::{layer_name, LayerRecord, Manifest};
