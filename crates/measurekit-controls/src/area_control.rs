//! Area measurement control.
//!
//! Maintains the polygon drawing state machine: clicks append vertices,
//! marker clicks on the first or current-last vertex close the ring, and
//! pointer movement drives a transient closed-ring preview. Derived
//! geometry (distance labels, centroid, area string) is recomputed on every
//! mutation and pushed to the host as GeoJSON render sources.

use tracing::debug;

use measurekit_core::{ControlError, LngLat, Result};

use crate::config::ControlConfig;
use crate::events::PointerEvent;
use crate::model::{MeasurePolygon, Shape};
use crate::shape_store::ShapeStore;
use crate::sources::{AreaRenderSources, Feature, Geometry, PolygonSources};

/// Polygon control drawing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingState {
    /// Not measuring; all input ignored
    Idle,
    /// An open polygon is accepting vertices
    DrawingOpen,
    /// The active polygon was closed; the next click starts a new one
    DrawingClosed,
}

/// Interactive polygon-area measurement control.
pub struct AreaControl {
    config: ControlConfig,
    store: ShapeStore,
    state: DrawingState,
    active_id: Option<u64>,
    hover: Option<LngLat>,
    redraw_pending: bool,
}

impl AreaControl {
    pub fn new(config: ControlConfig) -> Self {
        Self {
            config,
            store: ShapeStore::new(),
            state: DrawingState::Idle,
            active_id: None,
            hover: None,
            redraw_pending: false,
        }
    }

    pub fn state(&self) -> DrawingState {
        self.state
    }

    pub fn config(&self) -> &ControlConfig {
        &self.config
    }

    pub fn is_measuring(&self) -> bool {
        self.state != DrawingState::Idle
    }

    pub fn shape_count(&self) -> usize {
        self.store.len()
    }

    /// Stored polygons with their ids, in drawing order.
    pub fn polygons(&self) -> impl Iterator<Item = (u64, &MeasurePolygon)> {
        self.store
            .iter()
            .filter_map(|s| s.shape.as_polygon().map(|p| (s.id, p)))
    }

    /// The polygon currently being drawn, if any.
    pub fn active_polygon(&self) -> Option<&MeasurePolygon> {
        let id = self.active_id?;
        self.store.get(id)?.shape.as_polygon()
    }

    /// Vertex indices of the active polygon whose markers close the ring.
    pub fn close_markers(&self) -> Option<(usize, usize)> {
        if self.state != DrawingState::DrawingOpen {
            return None;
        }
        self.active_polygon()?.close_markers()
    }

    /// Turns measuring on: creates a fresh empty polygon and starts
    /// accepting clicks.
    pub fn start_measuring(&mut self) {
        if self.state != DrawingState::Idle {
            debug!("start_measuring ignored, control is already measuring");
            return;
        }
        let id = self.store.push(Shape::Polygon(MeasurePolygon::new()));
        self.active_id = Some(id);
        self.state = DrawingState::DrawingOpen;
        self.redraw_pending = false;
        debug!(shape_id = id, "area measuring started");
    }

    /// Turns measuring off and discards every shape of the session.
    pub fn stop_measuring(&mut self) {
        self.store.clear();
        self.active_id = None;
        self.hover = None;
        self.state = DrawingState::Idle;
        debug!("area measuring stopped, shapes discarded");
    }

    /// Handles a map click at a coordinate.
    pub fn handle_click(&mut self, at: LngLat) -> Result<()> {
        match self.state {
            DrawingState::Idle => {
                debug!("click ignored, measuring is off");
                Ok(())
            }
            DrawingState::DrawingClosed => {
                // Previous polygon stays as-is; this click seeds a new one.
                let mut polygon = MeasurePolygon::new();
                let config = &self.config;
                polygon.push_vertex(at, config.unit, &|v| config.format_label(v));
                let id = self.store.push(Shape::Polygon(polygon));
                self.active_id = Some(id);
                self.state = DrawingState::DrawingOpen;
                debug!(shape_id = id, "new polygon started");
                Ok(())
            }
            DrawingState::DrawingOpen => {
                let id = self.active_id.ok_or(ControlError::NoActiveShape)?;
                let config = &self.config;
                let polygon = self
                    .store
                    .get_mut(id)
                    .and_then(|s| match &mut s.shape {
                        Shape::Polygon(p) => Some(p),
                        _ => None,
                    })
                    .ok_or(ControlError::NoActiveShape)?;
                polygon.push_vertex(at, config.unit, &|v| config.format_label(v));
                Ok(())
            }
        }
    }

    /// Handles a click on the vertex marker at `vertex_index` of the active
    /// polygon. Only the first and current-last markers close the ring.
    pub fn handle_marker_click(&mut self, vertex_index: usize) -> Result<()> {
        match self.state {
            DrawingState::Idle => {
                debug!("marker click ignored, measuring is off");
                Ok(())
            }
            DrawingState::DrawingClosed => {
                let id = self.active_id.ok_or(ControlError::NoActiveShape)?;
                Err(ControlError::ShapeClosed { id }.into())
            }
            DrawingState::DrawingOpen => {
                let id = self.active_id.ok_or(ControlError::NoActiveShape)?;
                let config = &self.config;
                let polygon = self
                    .store
                    .get_mut(id)
                    .and_then(|s| match &mut s.shape {
                        Shape::Polygon(p) => Some(p),
                        _ => None,
                    })
                    .ok_or(ControlError::NoActiveShape)?;

                let count = polygon.points().len();
                if count < 3 {
                    return Err(ControlError::NotEnoughVertices { vertices: count }.into());
                }
                if vertex_index != 0 && vertex_index != count - 1 {
                    return Err(ControlError::NotCloseable {
                        index: vertex_index,
                    }
                    .into());
                }

                polygon.close(config.unit, &|v| config.format_label(v));
                self.hover = None;
                self.state = DrawingState::DrawingClosed;
                debug!(shape_id = id, "polygon closed");
                Ok(())
            }
        }
    }

    /// Handles pointer movement. Only feeds the hover preview; stored state
    /// is never mutated.
    pub fn handle_move(&mut self, at: LngLat) {
        if self.state == DrawingState::DrawingOpen {
            self.hover = Some(at);
        }
    }

    /// The transient preview ring for the current hover position, when the
    /// active polygon has at least 2 committed vertices.
    pub fn preview_ring(&self) -> Option<Vec<LngLat>> {
        let hover = self.hover?;
        self.active_polygon()?.preview_ring(hover)
    }

    /// Notes that the host reloaded its style. Idempotent: any number of
    /// notifications results in a single rebuild on the next `redraw`.
    pub fn notify_style_reload(&mut self) {
        self.redraw_pending = true;
    }

    pub fn redraw_pending(&self) -> bool {
        self.redraw_pending
    }

    /// Rebuilds every render source from stored state if a style reload is
    /// pending, clearing the flag. Returns `None` when nothing is pending.
    pub fn redraw(&mut self) -> Option<AreaRenderSources> {
        if !self.redraw_pending {
            return None;
        }
        self.redraw_pending = false;
        Some(self.render_sources())
    }

    /// Assembles the current render sources from stored shape state.
    pub fn render_sources(&self) -> AreaRenderSources {
        AreaRenderSources {
            shapes: self
                .polygons()
                .map(|(id, p)| PolygonSources::from_polygon(id, p))
                .collect(),
            preview: self
                .preview_ring()
                .map(|ring| Feature::new(Geometry::polygon(&ring))),
        }
    }

    /// Dispatches a host pointer event to the matching handler.
    pub fn handle_event(&mut self, event: PointerEvent) -> Result<()> {
        match event {
            PointerEvent::Click(p) => self.handle_click(p),
            PointerEvent::Move(p) => {
                self.handle_move(p);
                Ok(())
            }
            PointerEvent::StyleReload => {
                self.notify_style_reload();
                Ok(())
            }
            PointerEvent::Down(_) | PointerEvent::Up(_) => {
                // The polygon control is click-driven; gestures belong to
                // the circle control.
                Ok(())
            }
        }
    }
}

impl Default for AreaControl {
    fn default() -> Self {
        Self::new(ControlConfig::default())
    }
}
