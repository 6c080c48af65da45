use serde::{Deserialize, Serialize};

use measurekit_core::{cumulative_labels, format_area, ring_area, ring_centroid};
use measurekit_core::{DistanceUnit, LngLat};

use super::MeasureShape;

/// A polygon being measured: drawn vertices, per-vertex cumulative distance
/// labels, and a closed flag.
///
/// Invariants: `labels.len() == points.len()` at all times; once `closed`
/// the vertex list never grows again. The controls layer enforces the
/// closed-shape immutability before calling the mutators here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeasurePolygon {
    points: Vec<LngLat>,
    labels: Vec<String>,
    closed: bool,
}

impl MeasurePolygon {
    /// Creates an empty, open polygon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drawn coordinates, in insertion order. When closed, the last entry
    /// duplicates the first.
    pub fn points(&self) -> &[LngLat] {
        &self.points
    }

    /// Cumulative distance labels, one per coordinate. The first is `"0"`.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of distinct drawn vertices (the closing duplicate, if any,
    /// does not count).
    pub fn vertex_count(&self) -> usize {
        if self.closed {
            self.points.len().saturating_sub(1)
        } else {
            self.points.len()
        }
    }

    /// Appends a vertex and recomputes the label sequence.
    ///
    /// The caller has already checked that the polygon is open.
    pub(crate) fn push_vertex(
        &mut self,
        at: LngLat,
        unit: DistanceUnit,
        format: &dyn Fn(f64) -> String,
    ) {
        debug_assert!(!self.closed, "vertex pushed onto a closed polygon");
        self.points.push(at);
        self.labels = cumulative_labels(&self.points, unit, format);
    }

    /// Closes the ring by appending a duplicate of the first coordinate.
    ///
    /// The caller has already checked vertex count and close-marker wiring.
    pub(crate) fn close(&mut self, unit: DistanceUnit, format: &dyn Fn(f64) -> String) {
        debug_assert!(!self.closed, "polygon closed twice");
        debug_assert!(self.points.len() >= 3);
        self.points.push(self.points[0]);
        self.labels = cumulative_labels(&self.points, unit, format);
        self.closed = true;
    }

    /// The ring used for area and centroid computation: the stored points
    /// when closed, otherwise a temporarily closed copy (first vertex
    /// appended; the stored points are never mutated). `None` until the
    /// polygon has 3 distinct vertices.
    pub fn ring(&self) -> Option<Vec<LngLat>> {
        if self.closed {
            (self.points.len() >= 4).then(|| self.points.clone())
        } else if self.points.len() >= 3 {
            let mut ring = self.points.clone();
            ring.push(self.points[0]);
            Some(ring)
        } else {
            None
        }
    }

    /// Transient hover preview: committed vertices plus the hover position,
    /// closed back to the first vertex. Requires 2 committed vertices and an
    /// open polygon; never touches stored state.
    pub fn preview_ring(&self, hover: LngLat) -> Option<Vec<LngLat>> {
        if self.closed || self.points.len() < 2 {
            return None;
        }
        let mut ring = self.points.clone();
        ring.push(hover);
        ring.push(self.points[0]);
        Some(ring)
    }

    /// Geodesic area of the (temporarily) closed ring, in square meters.
    pub fn area_square_meters(&self) -> Option<f64> {
        self.ring().and_then(|ring| ring_area(&ring).ok())
    }

    /// Formatted area label. May be the empty string for a zero-area ring.
    pub fn area_label(&self) -> Option<String> {
        self.area_square_meters().map(format_area)
    }

    /// Centroid of the (temporarily) closed ring, where the area label is
    /// anchored.
    pub fn centroid(&self) -> Option<LngLat> {
        self.ring().and_then(|ring| ring_centroid(&ring))
    }

    /// Vertex indices whose markers are wired to close the polygon: always
    /// the first and the current-last drawn vertex. `None` once closed or
    /// while empty.
    pub fn close_markers(&self) -> Option<(usize, usize)> {
        if self.closed || self.points.is_empty() {
            return None;
        }
        Some((0, self.points.len() - 1))
    }
}

impl MeasureShape for MeasurePolygon {
    fn is_complete(&self) -> bool {
        self.closed
    }

    fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let first = self.points.first()?;
        let mut bounds = (first.lng, first.lat, first.lng, first.lat);
        for p in &self.points[1..] {
            bounds.0 = bounds.0.min(p.lng);
            bounds.1 = bounds.1.min(p.lat);
            bounds.2 = bounds.2.max(p.lng);
            bounds.3 = bounds.3.max(p.lat);
        }
        Some(bounds)
    }
}
