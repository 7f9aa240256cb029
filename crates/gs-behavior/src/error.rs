//! Behavior-subsystem error type.
//!
//! Currently unused by `payload`, which is infallible, but kept as the
//! crate's designated error surface so a future variant (e.g. malformed
//! payload validation) has a natural home without reshaping the crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("behavior configuration error: {0}")]
    Config(String),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
