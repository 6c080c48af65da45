//! Error handling for MeasureKit
//!
//! Provides error types for both layers of the library:
//! - Geometry errors (degenerate or malformed input to the geometry engine)
//! - Control errors (state machine misuse by the host)
//!
//! All error types use `thiserror` for ergonomic error handling. The
//! geometry functions themselves are total over well-formed coordinate
//! input; errors only surface when a caller skips the documented guards.

use thiserror::Error;

/// Geometry error type
///
/// Represents invalid input to the geometry engine. Callers normally guard
/// these conditions themselves (area is only requested once a polygon has
/// three vertices, radii are clamped at the gesture layer), so these
/// variants mark caller bugs rather than recoverable conditions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Ring has too few entries to enclose an area
    #[error("Degenerate ring: {vertices} entries, a closed ring needs at least 4")]
    DegenerateRing {
        /// Number of entries in the offending ring.
        vertices: usize,
    },

    /// Ring is not closed (first and last coordinates differ)
    #[error("Ring not closed: first and last coordinates differ")]
    RingNotClosed,

    /// Circle radius is negative
    #[error("Negative radius: {radius} km")]
    NegativeRadius {
        /// The offending radius in kilometers.
        radius: f64,
    },
}

/// Control error type
///
/// Represents misuse of a measurement control's state machine, such as
/// mutating a polygon that has already been closed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ControlError {
    /// Shape is closed and accepts no further vertices
    #[error("Shape {id} is closed and cannot be modified")]
    ShapeClosed {
        /// Id of the closed shape.
        id: u64,
    },

    /// Polygon cannot be closed yet
    #[error("Cannot close a polygon with {vertices} vertices, at least 3 required")]
    NotEnoughVertices {
        /// Current vertex count of the polygon.
        vertices: usize,
    },

    /// Close requested at a vertex that is not a close marker
    #[error("Vertex {index} is not a close marker, only the first and last vertices close")]
    NotCloseable {
        /// Index of the clicked vertex.
        index: usize,
    },

    /// No shape is currently being drawn
    #[error("No active shape")]
    NoActiveShape,
}

/// Main error type for MeasureKit
///
/// A unified error type that can represent any error from both layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Control error
    #[error(transparent)]
    Control(#[from] ControlError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }

    /// Check if this is a control error
    pub fn is_control_error(&self) -> bool {
        matches!(self, Error::Control(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
