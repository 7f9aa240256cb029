//! `gs-schedule` — the cancellable time-ordered event queue driving the
//! grid's event loop.
//!
//! # Crate layout
//!
//! | Module        | Contents                                     |
//! |---------------|-----------------------------------------------|
//! | [`time_queue`]| `TimeQueue<P>` — `add`/`cancel`/`peek_next`/`pop_next`/`drain_same_time` |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`          |
//!
//! # Ordering model
//!
//! Events are ordered by `(time, sequence)`, where `sequence` is the
//! insertion-order `EventId` — so events scheduled for the same instant fire
//! in the order they were added. Cancellation is a table removal; the heap
//! entry is skipped lazily the next time it reaches the front.

pub mod error;
pub mod time_queue;


pub use error::{ScheduleError, ScheduleResult};
pub use time_queue::TimeQueue;
