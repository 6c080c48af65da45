//! WGS84 coordinate type shared across the workspace.

use geo::{Coord, Point};
use serde::{Deserialize, Serialize};

/// A (longitude, latitude) pair in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    /// Creates a new coordinate.
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Converts to a `geo` point (x = longitude, y = latitude).
    pub fn to_point(self) -> Point<f64> {
        Point::new(self.lng, self.lat)
    }

    /// GeoJSON position array, `[lng, lat]`.
    pub fn to_position(self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

impl From<LngLat> for Coord<f64> {
    fn from(p: LngLat) -> Self {
        Coord { x: p.lng, y: p.lat }
    }
}

impl From<Point<f64>> for LngLat {
    fn from(p: Point<f64>) -> Self {
        Self::new(p.x(), p.y())
    }
}

impl From<(f64, f64)> for LngLat {
    fn from((lng, lat): (f64, f64)) -> Self {
        Self::new(lng, lat)
    }
}
