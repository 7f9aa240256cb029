//! Schedule-subsystem error type.

use thiserror::Error;

/// Errors produced by `gs-schedule`.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("cannot schedule at time {requested}, which is before the queue's current time {current}")]
    TimeInPast { requested: f64, current: f64 },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
