//! Comprehensive tests for WebBounds and manifest serialization.

use raster_common::{layer_name, CornerReading, LayerRecord, Manifest, WebBounds};

// ============================================================================
// Bounds derivation tests
// ============================================================================

#[test]
fn test_bounds_from_corner_readings() {
    // Corner readings are (lat, lon); the south/west/north/east edges come
    // from lower-right lat, upper-left lon, upper-left lat, lower-right lon.
    let upper_left = CornerReading::new(18.5200195, -67.9482422);
    let lower_right = CornerReading::new(17.8813477, -65.2060547);

    let bounds = WebBounds::from_corners(upper_left, lower_right);
    assert_eq!(bounds.south, 17.8813477);
    assert_eq!(bounds.west, -67.9482422);
    assert_eq!(bounds.north, 18.5200195);
    assert_eq!(bounds.east, -65.2060547);
}

#[test]
fn test_bounds_corner_array_form() {
    let bounds = WebBounds::new(40.0, 10.0, 50.0, 20.0);
    let corners: [[f64; 2]; 2] = bounds.into();
    assert_eq!(corners, [[40.0, 10.0], [50.0, 20.0]]);
    assert_eq!(WebBounds::from(corners), bounds);
}

// ============================================================================
// Manifest document tests
// ============================================================================

#[test]
fn test_manifest_document_shape() {
    let mut manifest = Manifest::new();
    manifest.insert(
        "CDTs",
        LayerRecord {
            bounds: WebBounds::new(17.88, -67.95, 18.52, -65.21),
            file: "CDTs.png".to_string(),
        },
    );
    manifest.insert(
        "Centros_330",
        LayerRecord {
            bounds: WebBounds::new(17.9, -67.2, 18.5, -65.6),
            file: "Centros_330.png".to_string(),
        },
    );

    let document = manifest.to_pretty_json().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&document).unwrap();

    assert_eq!(parsed["CDTs"]["file"], "CDTs.png");
    assert_eq!(
        parsed["CDTs"]["bounds"],
        serde_json::json!([[17.88, -67.95], [18.52, -65.21]])
    );
    assert_eq!(parsed.as_object().unwrap().len(), 2);
}

#[test]
fn test_manifest_roundtrip() {
    let mut manifest = Manifest::new();
    manifest.insert(
        "slope",
        LayerRecord {
            bounds: WebBounds::new(40.0, 10.0, 50.0, 20.0),
            file: "slope.png".to_string(),
        },
    );

    let document = manifest.to_pretty_json().unwrap();
    let back: Manifest = serde_json::from_str(&document).unwrap();
    assert_eq!(manifest, back);
}

#[test]
fn test_manifest_serialization_is_deterministic() {
    let record = LayerRecord {
        bounds: WebBounds::new(0.0, 0.0, 1.0, 1.0),
        file: "a.png".to_string(),
    };

    let mut first = Manifest::new();
    first.insert("b", record.clone());
    first.insert("a", record.clone());

    let mut second = Manifest::new();
    second.insert("a", record.clone());
    second.insert("b", record);

    assert_eq!(
        first.to_pretty_json().unwrap(),
        second.to_pretty_json().unwrap()
    );
}

// ============================================================================
// Layer name tests
// ============================================================================

#[test]
fn test_layer_name_matches_web_exports_only() {
    assert_eq!(
        layer_name("coastal_flood_web.tif", "_web.tif"),
        Some("coastal_flood")
    );
    assert_eq!(layer_name("coastal_flood.tif", "_web.tif"), None);
    assert_eq!(layer_name("readme.txt", "_web.tif"), None);
}
