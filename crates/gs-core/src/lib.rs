//! `gs-core` — foundational types for the `gridsim` spatial simulator.
//!
//! This crate is a dependency of every other `gs-*` crate.  It intentionally
//! has no `gs-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                              |
//! |------------|--------------------------------------------------------|
//! | [`ids`]    | `EntityId`, `ReservationId`, `EventId`                |
//! | [`shape`]  | `Shape`, `Aabb`, `rectangle`/`circle` helpers          |
//! | [`route`]  | `RouteDelta`                                          |
//! | [`rng`]    | `EntityRng` (per-entity), `SimRng` (global)            |
//! | [`error`]  | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|-------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.   |

pub mod error;
pub mod ids;
pub mod rng;
pub mod route;
pub mod shape;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{EntityId, EventId, ReservationId};
pub use rng::{EntityRng, SimRng};
pub use route::RouteDelta;
pub use shape::{Aabb, Shape};
