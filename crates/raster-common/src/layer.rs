//! Layer records and the output metadata manifest.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::WebBounds;

/// Derive the layer name for an input raster filename by stripping the
/// web-export suffix (e.g. `coastal_flood_web.tif` → `coastal_flood`).
///
/// Returns `None` when the filename does not carry the suffix, or when
/// stripping it would leave an empty name.
pub fn layer_name<'a>(file_name: &'a str, suffix: &str) -> Option<&'a str> {
    file_name
        .strip_suffix(suffix)
        .filter(|name| !name.is_empty())
}

/// Metadata for one published layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerRecord {
    /// Geographic bounds of the rendered overlay.
    pub bounds: WebBounds,
    /// Image filename relative to the output directory.
    pub file: String,
}

/// Ordered mapping of layer name to record, serialized as the sidecar
/// metadata document consumed by the map front end.
///
/// Inputs are processed in lexicographic order, so the sorted map's key
/// order matches discovery order and re-runs serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    layers: BTreeMap<String, LayerRecord>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successfully published layer.
    pub fn insert(&mut self, layer: impl Into<String>, record: LayerRecord) {
        self.layers.insert(layer.into(), record);
    }

    pub fn get(&self, layer: &str) -> Option<&LayerRecord> {
        self.layers.get(layer)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &LayerRecord)> {
        self.layers.iter()
    }

    /// Serialize as the pretty-printed JSON document written next to the
    /// overlays.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_name_strips_suffix() {
        assert_eq!(layer_name("CDTs_web.tif", "_web.tif"), Some("CDTs"));
        assert_eq!(
            layer_name("Centros_330_web.tif", "_web.tif"),
            Some("Centros_330")
        );
    }

    #[test]
    fn test_layer_name_rejects_non_matching() {
        assert_eq!(layer_name("CDTs.tif", "_web.tif"), None);
        assert_eq!(layer_name("CDTs_web.png", "_web.tif"), None);
        // Suffix alone would leave an empty layer name.
        assert_eq!(layer_name("_web.tif", "_web.tif"), None);
    }

    #[test]
    fn test_manifest_serializes_as_plain_mapping() {
        let mut manifest = Manifest::new();
        manifest.insert(
            "hillshade",
            LayerRecord {
                bounds: WebBounds::new(40.0, 10.0, 50.0, 20.0),
                file: "hillshade.png".to_string(),
            },
        );

        let json = serde_json::to_value(&manifest).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "hillshade": {
                    "bounds": [[40.0, 10.0], [50.0, 20.0]],
                    "file": "hillshade.png"
                }
            })
        );
    }

    #[test]
    fn test_manifest_key_order_is_sorted() {
        let record = LayerRecord {
            bounds: WebBounds::new(0.0, 0.0, 1.0, 1.0),
            file: "x.png".to_string(),
        };

        let mut manifest = Manifest::new();
        manifest.insert("zinc", record.clone());
        manifest.insert("alpha", record.clone());
        manifest.insert("mid", record);

        let keys: Vec<&String> = manifest.iter().map(|(name, _)| name).collect();
        assert_eq!(keys, ["alpha", "mid", "zinc"]);
    }
}
