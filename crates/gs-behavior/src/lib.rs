//! `gs-behavior` — the event payload and pending-event types the grid's
//! event loop schedules and cancels.
//!
//! # Crate layout
//!
//! | Module      | Contents                                         |
//! |-------------|---------------------------------------------------|
//! | [`payload`] | `EventPayload`, `PendingEvent`                    |
//! | [`error`]   | `BehaviorError`, `BehaviorResult<T>`              |

pub mod error;
pub mod payload;


pub use error::{BehaviorError, BehaviorResult};
pub use payload::{EventPayload, PendingEvent};
