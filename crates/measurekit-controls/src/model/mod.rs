//! Shape model: the typed measurement shapes shared by both controls.

use serde::{Deserialize, Serialize};

mod circle;
mod polygon;

pub use circle::MeasureCircle;
pub use polygon::MeasurePolygon;

/// Behavior common to both measurement shape kinds.
pub trait MeasureShape {
    /// Whether the shape is finished (closed polygon, ended gesture).
    fn is_complete(&self) -> bool;

    /// Axis-aligned bounding box as `(min_lng, min_lat, max_lng, max_lat)`,
    /// for host fit-to-view. `None` while the shape has no extent.
    fn bounds(&self) -> Option<(f64, f64, f64, f64)>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeType {
    Polygon,
    Circle,
}

/// A measured shape held by a control's shape store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Shape {
    Polygon(MeasurePolygon),
    Circle(MeasureCircle),
}

impl MeasureShape for Shape {
    fn is_complete(&self) -> bool {
        match self {
            Shape::Polygon(s) => s.is_complete(),
            Shape::Circle(s) => s.is_complete(),
        }
    }

    fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        match self {
            Shape::Polygon(s) => s.bounds(),
            Shape::Circle(s) => s.bounds(),
        }
    }
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Polygon(_) => ShapeType::Polygon,
            Shape::Circle(_) => ShapeType::Circle,
        }
    }

    pub fn as_polygon(&self) -> Option<&MeasurePolygon> {
        match self {
            Shape::Polygon(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_circle(&self) -> Option<&MeasureCircle> {
        match self {
            Shape::Circle(c) => Some(c),
            _ => None,
        }
    }
}
