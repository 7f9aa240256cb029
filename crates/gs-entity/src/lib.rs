//! `gs-entity` — the entity route lifecycle: `plan_route`/`realize_route`.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|----------------------------------------------------------|
//! | [`entity`]  | `Entity`, `EntityKind`, `PlanOutcome`, `waypoints_to_deltas` |
//! | [`builder`] | `EntityBuilder` (fluent construction)                    |
//! | [`error`]   | `EntityError`, `EntityResult<T>`                         |
//!
//! # Design notes
//!
//! `Entity` never reaches across to peer entities or the time queue itself;
//! it only needs a `&mut CellIndex` to plan its own route. Cross-entity
//! orchestration — cancelling a collision peer's paired event, scheduling
//! both sides of a collision — is the grid driver's job (`gs-grid`), since
//! only the grid owns both the entities map and the time queue at once.

pub mod builder;
pub mod entity;
pub mod error;

#[cfg(test)]
mod tests;

pub use builder::EntityBuilder;
pub use entity::{waypoints_to_deltas, Entity, EntityKind, PlanOutcome};
pub use error::{EntityError, EntityResult};
