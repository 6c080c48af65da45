//! # MeasureKit Core
//!
//! Geodesic geometry engine and shared types for MeasureKit.
//! Provides the pure computations behind the measurement controls:
//! distances, areas, centroids, circle outlines, and label formatting.
//!
//! Everything in this crate is stateless and total over well-formed
//! coordinate input; the stateful controls live in `measurekit-controls`.

pub mod error;
pub mod format;
pub mod geodesy;
pub mod position;
pub mod units;

pub use error::{ControlError, Error, GeometryError, Result};

pub use format::{cumulative_labels, default_label_format, format_area};

pub use geodesy::{
    circle_area, circle_ring, cumulative_distances, destination, distance_meters, ring_area,
    ring_centroid, CIRCLE_RING_STEPS,
};

pub use position::LngLat;

pub use units::DistanceUnit;
