//! Framework error type.
//!
//! Sub-crates define their own error enums scoped to their layer and convert
//! lower-layer errors into their own via `#[from]`; `CoreError` is the bottom
//! of that chain, covering the handful of failure modes intrinsic to this
//! crate's own primitives (shape construction, I/O for demo harnesses).

use thiserror::Error;

/// The bottom-layer error type for `gs-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("shape must have at least 3 points, got {0}")]
    DegenerateShape(usize),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `gs-core`.
pub type CoreResult<T> = Result<T, CoreError>;
