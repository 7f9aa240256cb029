//! Entity-subsystem error type.
//!
//! These are the errors named at the domain boundary: a single entity's
//! route request either succeeds, surfaces a collision as a scheduled
//! event (the normal path, not an error), or fails with one of the
//! variants below.

use thiserror::Error;

use gs_spatial::SpatialError;

#[derive(Debug, Error)]
pub enum EntityError {
    #[error("entity {0} is already in a route. Cannot set a new route until the current route is finished.")]
    AlreadyRouted(String),

    #[error("entity {0} collides with other entities and this route is set to raise an exception if there is a future collision detected.")]
    CollisionForbidden(String),

    #[error("grid cell ({x}, {y}) is out of bounds for a {x_size}x{y_size} grid")]
    OutOfBounds { x: i64, y: i64, x_size: u32, y_size: u32 },

    #[error("route segment has non-positive time_shift: {0}")]
    InvalidSegment(f64),

    #[error("route would start after the simulation horizon")]
    HorizonExceeded,

    #[error(transparent)]
    Spatial(SpatialError),
}

impl From<SpatialError> for EntityError {
    fn from(err: SpatialError) -> Self {
        match err {
            SpatialError::OutOfBounds { x, y, x_size, y_size } => {
                EntityError::OutOfBounds { x, y, x_size, y_size }
            }
            SpatialError::InvalidSegment(dt) => EntityError::InvalidSegment(dt),
            other => EntityError::Spatial(other),
        }
    }
}

pub type EntityResult<T> = Result<T, EntityError>;
