use measurekit_controls::{AreaControl, Feature, FeatureCollection, Geometry};
use measurekit_core::LngLat;
use serde_json::json;

#[test]
fn test_point_feature_serializes_to_geojson() {
    let feature = Feature::labeled(Geometry::point(LngLat::new(2.35, 48.85)), "1.50 km");
    let value = serde_json::to_value(&feature).unwrap();
    assert_eq!(
        value,
        json!({
            "type": "Feature",
            "geometry": { "type": "Point", "coordinates": [2.35, 48.85] },
            "properties": { "label": "1.50 km" }
        })
    );
}

#[test]
fn test_unlabeled_feature_omits_label() {
    let feature = Feature::new(Geometry::line_string(&[
        LngLat::new(0.0, 0.0),
        LngLat::new(1.0, 1.0),
    ]));
    let value = serde_json::to_value(&feature).unwrap();
    assert_eq!(value["properties"], json!({}));
    assert_eq!(value["geometry"]["type"], "LineString");
}

#[test]
fn test_feature_round_trip() {
    let original = Feature::labeled(
        Geometry::polygon(&[
            LngLat::new(0.0, 0.0),
            LngLat::new(1.0, 0.0),
            LngLat::new(1.0, 1.0),
            LngLat::new(0.0, 0.0),
        ]),
        "12 ha",
    );
    let text = serde_json::to_string(&original).unwrap();
    let parsed: Feature = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, original);
}

#[test]
fn test_feature_collection_type_tag() {
    let collection = FeatureCollection::new(vec![]);
    let value = serde_json::to_value(&collection).unwrap();
    assert_eq!(value["type"], "FeatureCollection");
    assert_eq!(value["features"], json!([]));
}

#[test]
fn test_polygon_sources_from_drawn_polygon() {
    let mut control = AreaControl::default();
    control.start_measuring();
    control.handle_click(LngLat::new(0.0, 0.0)).unwrap();
    control.handle_click(LngLat::new(0.01, 0.0)).unwrap();

    // Two vertices: outline is still a line string, no area label yet.
    let sources = control.render_sources();
    let shape = &sources.shapes[0];
    assert!(matches!(shape.ring.geometry, Geometry::LineString { .. }));
    assert!(shape.area_label.is_none());
    assert_eq!(shape.vertex_labels.features.len(), 2);
    assert_eq!(
        shape.vertex_labels.features[0].properties.label.as_deref(),
        Some("0")
    );

    // Third vertex upgrades the outline to a ring and adds the area label.
    control.handle_click(LngLat::new(0.01, 0.01)).unwrap();
    let sources = control.render_sources();
    let shape = &sources.shapes[0];
    assert!(matches!(shape.ring.geometry, Geometry::Polygon { .. }));
    let area = shape.area_label.as_ref().unwrap();
    assert!(area.properties.label.as_deref().unwrap().contains("ha"));
}

#[test]
fn test_preview_feature_is_closed_ring() {
    let mut control = AreaControl::default();
    control.start_measuring();
    control.handle_click(LngLat::new(0.0, 0.0)).unwrap();
    control.handle_click(LngLat::new(0.01, 0.0)).unwrap();
    control.handle_move(LngLat::new(0.01, 0.01));

    let sources = control.render_sources();
    let preview = sources.preview.unwrap();
    match preview.geometry {
        Geometry::Polygon { coordinates } => {
            let ring = &coordinates[0];
            assert_eq!(ring.len(), 4);
            assert_eq!(ring.first(), ring.last());
        }
        other => panic!("expected polygon preview, got {other:?}"),
    }
}
