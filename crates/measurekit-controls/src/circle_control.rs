//! Circle measurement control.
//!
//! Gesture-driven rather than click-driven: pointer-down starts a circle at
//! the press position, pointer-move grows the radius to the geodesic
//! distance under the pointer, pointer-up finalizes it. There is no
//! open/close concept.

use tracing::{debug, warn};

use measurekit_core::LngLat;

use crate::config::ControlConfig;
use crate::events::PointerEvent;
use crate::model::{MeasureCircle, Shape};
use crate::shape_store::ShapeStore;
use crate::sources::{CircleRenderSources, CircleSources};

/// Interactive circle-radius measurement control.
pub struct CircleControl {
    config: ControlConfig,
    store: ShapeStore,
    measuring: bool,
    active_id: Option<u64>,
    redraw_pending: bool,
}

impl CircleControl {
    pub fn new(config: ControlConfig) -> Self {
        Self {
            config,
            store: ShapeStore::new(),
            measuring: false,
            active_id: None,
            redraw_pending: false,
        }
    }

    pub fn config(&self) -> &ControlConfig {
        &self.config
    }

    pub fn is_measuring(&self) -> bool {
        self.measuring
    }

    /// Whether a drag gesture is currently in progress.
    pub fn gesture_active(&self) -> bool {
        self.active_circle().map_or(false, |c| c.is_active())
    }

    pub fn shape_count(&self) -> usize {
        self.store.len()
    }

    /// Stored circles with their ids, in drawing order.
    pub fn circles(&self) -> impl Iterator<Item = (u64, &MeasureCircle)> {
        self.store
            .iter()
            .filter_map(|s| s.shape.as_circle().map(|c| (s.id, c)))
    }

    /// The circle of the in-progress gesture, if any.
    pub fn active_circle(&self) -> Option<&MeasureCircle> {
        let id = self.active_id?;
        self.store.get(id)?.shape.as_circle()
    }

    /// Turns measuring on.
    pub fn start_measuring(&mut self) {
        if self.measuring {
            debug!("start_measuring ignored, control is already measuring");
            return;
        }
        self.measuring = true;
        self.redraw_pending = false;
        debug!("circle measuring started");
    }

    /// Turns measuring off and discards every shape of the session.
    pub fn stop_measuring(&mut self) {
        self.store.clear();
        self.active_id = None;
        self.measuring = false;
        debug!("circle measuring stopped, shapes discarded");
    }

    /// Handles pointer-down: starts a new circle at the press position.
    pub fn handle_down(&mut self, at: LngLat) {
        if !self.measuring {
            debug!("pointer down ignored, measuring is off");
            return;
        }
        if self.gesture_active() {
            // Only one shape may be mid-gesture; end the stale one first.
            warn!("pointer down with an unfinished gesture, finalizing it");
            self.finish_active();
        }
        let id = self.store.push(Shape::Circle(MeasureCircle::new(at)));
        self.active_id = Some(id);
        debug!(shape_id = id, "circle gesture started");
    }

    /// Handles pointer movement: while a gesture is active, recomputes the
    /// radius from the center to the pointer. A no-op otherwise (hover
    /// moves arrive constantly).
    pub fn handle_move(&mut self, at: LngLat) {
        let Some(id) = self.active_id else { return };
        if let Some(circle) = self.store.get_mut(id).and_then(|s| match &mut s.shape {
            Shape::Circle(c) if c.is_active() => Some(c),
            _ => None,
        }) {
            circle.drag_to(at);
        }
    }

    /// Handles pointer-up: ends the gesture, freezing the radius.
    pub fn handle_up(&mut self, _at: LngLat) {
        if self.active_id.is_some() {
            self.finish_active();
        }
    }

    fn finish_active(&mut self) {
        if let Some(id) = self.active_id.take() {
            if let Some(circle) = self.store.get_mut(id).and_then(|s| match &mut s.shape {
                Shape::Circle(c) => Some(c),
                _ => None,
            }) {
                circle.finish();
                debug!(shape_id = id, radius_km = circle.radius_km(), "circle finalized");
            }
        }
    }

    /// Notes that the host reloaded its style. Idempotent.
    pub fn notify_style_reload(&mut self) {
        self.redraw_pending = true;
    }

    pub fn redraw_pending(&self) -> bool {
        self.redraw_pending
    }

    /// Rebuilds every render source from stored state if a style reload is
    /// pending, clearing the flag. Returns `None` when nothing is pending.
    pub fn redraw(&mut self) -> Option<CircleRenderSources> {
        if !self.redraw_pending {
            return None;
        }
        self.redraw_pending = false;
        Some(self.render_sources())
    }

    /// Assembles the current render sources from stored shape state.
    pub fn render_sources(&self) -> CircleRenderSources {
        let config = &self.config;
        CircleRenderSources {
            shapes: self
                .circles()
                .map(|(id, c)| {
                    CircleSources::from_circle(id, c, config.unit, &|v| config.format_label(v))
                })
                .collect(),
        }
    }

    /// Dispatches a host pointer event to the matching handler.
    pub fn handle_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down(p) => self.handle_down(p),
            PointerEvent::Move(p) => self.handle_move(p),
            PointerEvent::Up(p) => self.handle_up(p),
            PointerEvent::StyleReload => self.notify_style_reload(),
            PointerEvent::Click(_) => {
                // The circle control is gesture-driven; clicks belong to the
                // area control.
            }
        }
    }
}

impl Default for CircleControl {
    fn default() -> Self {
        Self::new(ControlConfig::default())
    }
}
