//! # MeasureKit Controls
//!
//! Interactive map-measurement controls. Two controls share one structure:
//!
//! - **Area control**: click-driven polygon drawing with per-vertex
//!   cumulative distance labels and a geodesic area label at the centroid.
//! - **Circle control**: drag-driven circle drawing with area and radius
//!   labels.
//!
//! ## Architecture
//!
//! ```text
//! Host map adapter (external)
//!   ├── PointerEvent (click / move / down / up / style reload)
//!   │         ▼
//!   ├── Control (state machine + shape store mutation)
//!   │         ▼
//!   └── RenderSources (GeoJSON features pushed back to the host)
//! ```
//!
//! The geometry itself lives in `measurekit-core`; this crate owns all
//! mutable state. Everything runs synchronously inside the host's event
//! handlers — there is no concurrency model and no persistence: shapes
//! accumulate while measuring is on and are discarded when it is toggled
//! off.
//!
//! ## Usage
//!
//! ```rust
//! use measurekit_controls::{AreaControl, ControlConfig};
//! use measurekit_core::LngLat;
//!
//! let mut control = AreaControl::new(ControlConfig::default());
//! control.start_measuring();
//! control.handle_click(LngLat::new(2.35, 48.85)).unwrap();
//! control.handle_click(LngLat::new(2.36, 48.85)).unwrap();
//! control.handle_click(LngLat::new(2.36, 48.86)).unwrap();
//! control.handle_marker_click(0).unwrap(); // close at the first marker
//! let sources = control.render_sources();
//! assert!(sources.shapes[0].area_label.is_some());
//! ```

pub mod area_control;
pub mod circle_control;
pub mod config;
pub mod events;
pub mod model;
pub mod shape_store;
pub mod sources;

pub use area_control::{AreaControl, DrawingState};
pub use circle_control::CircleControl;
pub use config::{ControlConfig, LabelFormatter};
pub use events::PointerEvent;
pub use model::{MeasureCircle, MeasurePolygon, MeasureShape, Shape, ShapeType};
pub use shape_store::{ShapeStore, StoredShape};
pub use sources::{
    AreaRenderSources, CircleRenderSources, CircleSources, Feature, FeatureCollection,
    FeatureProperties, Geometry, PolygonSources,
};
