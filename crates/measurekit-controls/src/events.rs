//! Pointer events delivered by the host map adapter.

use std::fmt;

use measurekit_core::LngLat;

/// Input event forwarded from the host's pointer handling.
///
/// All mutation happens synchronously inside the handler for one of these;
/// the host never delivers events concurrently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Discrete click at a coordinate
    Click(LngLat),
    /// Pointer moved (hover or drag) to a coordinate
    Move(LngLat),
    /// Pointer pressed at a coordinate
    Down(LngLat),
    /// Pointer released at a coordinate
    Up(LngLat),
    /// The host reloaded its style; every render source must be rebuilt
    /// from stored shape state
    StyleReload,
}

impl fmt::Display for PointerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointerEvent::Click(p) => write!(f, "click at ({}, {})", p.lng, p.lat),
            PointerEvent::Move(p) => write!(f, "move to ({}, {})", p.lng, p.lat),
            PointerEvent::Down(p) => write!(f, "down at ({}, {})", p.lng, p.lat),
            PointerEvent::Up(p) => write!(f, "up at ({}, {})", p.lng, p.lat),
            PointerEvent::StyleReload => write!(f, "style reload"),
        }
    }
}
