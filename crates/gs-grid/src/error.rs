//! Grid-subsystem error type.

use gs_core::EntityId;
use gs_entity::EntityError;
use gs_schedule::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid configuration error: {0}")]
    Config(String),

    #[error("entity {0:?} is not registered on this grid")]
    UnknownEntity(EntityId),

    #[error("entity route error: {0}")]
    Entity(#[from] EntityError),

    #[error("scheduling error: {0}")]
    Schedule(#[from] ScheduleError),
}

pub type GridResult<T> = Result<T, GridError>;
