//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced by `gs-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("cell ({x}, {y}) is out of bounds for a {x_size}x{y_size} grid")]
    OutOfBounds { x: i64, y: i64, x_size: u32, y_size: u32 },

    #[error("segment duration must be positive, got {0}")]
    InvalidSegment(f64),

    #[error("reservation {0:?} not found in cell ({1}, {2})")]
    ReservationNotFound(gs_core::ReservationId, u32, u32),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
