//! GeoJSON render sources handed to the host map adapter.
//!
//! The host pushes these structures into its rendering sources verbatim;
//! they serialize to standard GeoJSON. Label text rides in the `label`
//! feature property.

use serde::{Deserialize, Serialize};

use measurekit_core::{DistanceUnit, LngLat};

use crate::model::{MeasureCircle, MeasurePolygon};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: [f64; 2] },
    LineString { coordinates: Vec<[f64; 2]> },
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
}

impl Geometry {
    pub fn point(p: LngLat) -> Self {
        Geometry::Point {
            coordinates: p.to_position(),
        }
    }

    pub fn line_string(coords: &[LngLat]) -> Self {
        Geometry::LineString {
            coordinates: coords.iter().map(|p| p.to_position()).collect(),
        }
    }

    /// Polygon with a single exterior ring.
    pub fn polygon(ring: &[LngLat]) -> Self {
        Geometry::Polygon {
            coordinates: vec![ring.iter().map(|p| p.to_position()).collect()],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub feature_type: String,
    pub geometry: Geometry,
    #[serde(default)]
    pub properties: FeatureProperties,
}

impl Feature {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            feature_type: "Feature".to_string(),
            geometry,
            properties: FeatureProperties::default(),
        }
    }

    pub fn labeled(geometry: Geometry, label: impl Into<String>) -> Self {
        Self {
            feature_type: "Feature".to_string(),
            geometry,
            properties: FeatureProperties {
                label: Some(label.into()),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub collection_type: String,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            collection_type: "FeatureCollection".to_string(),
            features,
        }
    }
}

/// Render sources for one measured polygon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolygonSources {
    pub shape_id: u64,
    /// The drawn outline: a polygon ring once 3 vertices exist, a bare line
    /// string before that.
    pub ring: Feature,
    /// One point per drawn vertex, carrying its cumulative distance label.
    pub vertex_labels: FeatureCollection,
    /// Centroid point carrying the formatted area string. Absent until the
    /// polygon has 3 vertices. The label may be the empty string for a
    /// zero-area ring; the host decides how to show it.
    pub area_label: Option<Feature>,
}

impl PolygonSources {
    pub fn from_polygon(shape_id: u64, polygon: &MeasurePolygon) -> Self {
        let ring = match polygon.ring() {
            Some(ring) => Feature::new(Geometry::polygon(&ring)),
            None => Feature::new(Geometry::line_string(polygon.points())),
        };

        let vertex_labels = FeatureCollection::new(
            polygon
                .points()
                .iter()
                .zip(polygon.labels())
                .map(|(p, label)| Feature::labeled(Geometry::point(*p), label.clone()))
                .collect(),
        );

        let area_label = polygon.centroid().and_then(|c| {
            polygon
                .area_label()
                .map(|label| Feature::labeled(Geometry::point(c), label))
        });

        Self {
            shape_id,
            ring,
            vertex_labels,
            area_label,
        }
    }
}

/// Render sources for one measured circle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircleSources {
    pub shape_id: u64,
    /// Circle outline approximated as a polygon ring.
    pub outline: Feature,
    /// Center point carrying the formatted area string.
    pub area_label: Feature,
    /// Point on the circle's edge carrying the formatted radius string.
    pub radius_label: Feature,
}

impl CircleSources {
    pub fn from_circle(
        shape_id: u64,
        circle: &MeasureCircle,
        unit: DistanceUnit,
        format: &dyn Fn(f64) -> String,
    ) -> Self {
        Self {
            shape_id,
            outline: Feature::new(Geometry::polygon(&circle.ring())),
            area_label: Feature::labeled(Geometry::point(circle.center()), circle.area_label()),
            radius_label: Feature::labeled(
                Geometry::point(circle.edge_point()),
                circle.radius_label(unit, format),
            ),
        }
    }
}

/// Everything the area control renders: one source set per stored polygon
/// plus the transient hover preview ring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AreaRenderSources {
    pub shapes: Vec<PolygonSources>,
    pub preview: Option<Feature>,
}

/// Everything the circle control renders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CircleRenderSources {
    pub shapes: Vec<CircleSources>,
}
