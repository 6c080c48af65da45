use serde::{Deserialize, Serialize};

use measurekit_core::{circle_area, circle_ring, destination, distance_meters, format_area};
use measurekit_core::{DistanceUnit, LngLat, CIRCLE_RING_STEPS};

use super::MeasureShape;

/// A circle being measured: a center and a radius in kilometers.
///
/// The radius mutates continuously while the drag gesture is active and is
/// final once the gesture ends. It is never negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasureCircle {
    center: LngLat,
    radius_km: f64,
    active: bool,
}

impl MeasureCircle {
    /// Starts a new gesture: zero radius, centered on the pointer-down
    /// position.
    pub fn new(center: LngLat) -> Self {
        Self {
            center,
            radius_km: 0.0,
            active: true,
        }
    }

    pub fn center(&self) -> LngLat {
        self.center
    }

    /// Radius in kilometers, `>= 0`.
    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Updates the radius to the geodesic distance from the center to the
    /// current pointer position.
    pub(crate) fn drag_to(&mut self, at: LngLat) {
        self.radius_km = (distance_meters(self.center, at) / 1000.0).max(0.0);
    }

    /// Ends the gesture, freezing the radius.
    pub(crate) fn finish(&mut self) {
        self.active = false;
    }

    /// Displayed area in square meters (`2πr²`, see
    /// `measurekit_core::circle_area`), rounded to the nearest integer.
    pub fn area_square_meters(&self) -> f64 {
        // radius_km is clamped non-negative, so the guard cannot trip.
        circle_area(self.radius_km).unwrap_or(0.0)
    }

    /// Formatted area label. Empty for a zero radius.
    pub fn area_label(&self) -> String {
        format_area(self.area_square_meters())
    }

    /// Formatted radius label in the selected unit.
    pub fn radius_label(&self, unit: DistanceUnit, format: &dyn Fn(f64) -> String) -> String {
        format(unit.from_meters(self.radius_km * 1000.0))
    }

    /// Closed ring approximating the circle outline.
    pub fn ring(&self) -> Vec<LngLat> {
        circle_ring(self.center, self.radius_km, CIRCLE_RING_STEPS)
    }

    /// Point on the circle's edge (due east of the center) where the radius
    /// label is anchored.
    pub fn edge_point(&self) -> LngLat {
        destination(self.center, 90.0, self.radius_km * 1000.0)
    }
}

impl MeasureShape for MeasureCircle {
    fn is_complete(&self) -> bool {
        !self.active
    }

    fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let ring = self.ring();
        let first = ring.first()?;
        let mut bounds = (first.lng, first.lat, first.lng, first.lat);
        for p in &ring[1..] {
            bounds.0 = bounds.0.min(p.lng);
            bounds.1 = bounds.1.min(p.lat);
            bounds.2 = bounds.2.max(p.lng);
            bounds.3 = bounds.3.max(p.lat);
        }
        Some(bounds)
    }
}
