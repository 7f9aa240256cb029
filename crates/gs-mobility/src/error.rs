//! Mobility-subsystem error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("acceleration must be positive, got {0}")]
    NonPositiveAcceleration(f64),

    #[error("max_speed must be positive, got {0}")]
    NonPositiveMaxSpeed(f64),

    #[error("waypoint route needs at least one waypoint")]
    EmptyRoute,
}

pub type MobilityResult<T> = Result<T, MobilityError>;
