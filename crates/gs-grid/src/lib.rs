//! `gs-grid` — the grid driver: owns the entity map, the cell index, and
//! the time queue, and runs the discrete-event loop.
//!
//! # Crate layout
//!
//! | Module       | Contents                                            |
//! |--------------|------------------------------------------------------|
//! | [`grid`]     | `Grid` — `add_entity`/`add_exterior_walls`/`add_route`/`resolve_next_state`/`simulate` |
//! | [`observer`] | `GridObserver`, `NoopObserver`                      |
//! | [`config`]   | `GridConfig`, a fluent builder for `Grid`           |
//! | [`error`]    | `GridError`, `GridResult<T>`                        |
//!
//! # Event loop
//!
//! ```text
//! loop:
//!   ① peek the next event time; stop if the queue is empty or that time
//!     is past max_time (an event scheduled exactly at max_time still fires)
//!   ② drain every event scheduled for that time (in insertion order among
//!     ties) and dispatch each to its target entity:
//!       PlanRoute    → Entity::plan_route, then schedule this entity's
//!                      collision-realization and/or terminal events
//!       RealizeRoute → Entity::realize_route; if it signals a re-plan,
//!                      immediately plan an empty route for the same entity
//! ```
//!
//! Only `Grid` ever holds both the entity map and the time queue at once, so
//! cross-entity bookkeeping — cancelling a collision peer's paired event,
//! pairing both sides of a new collision — lives here rather than on
//! [`gs_entity::Entity`] itself.

pub mod config;
pub mod error;
pub mod grid;
pub mod observer;


pub use config::GridConfig;
pub use error::{GridError, GridResult};
pub use grid::Grid;
pub use observer::{GridObserver, NoopObserver};
