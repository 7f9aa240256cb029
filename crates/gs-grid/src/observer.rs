//! Grid observer trait for progress reporting and data collection.
//!
//! This lineage instruments its drivers with an observer trait rather than a
//! logging crate; see [`Grid`][crate::Grid], which holds one as a field
//! (defaulting to [`NoopObserver`]) instead of threading it through every
//! call.

use gs_core::EntityId;

/// Callbacks invoked by [`Grid`][crate::Grid] at each point in the event loop
/// where an entity's route state changes.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait GridObserver {
    /// A new entity was registered on the grid.
    fn on_entity_added(&mut self, _entity: EntityId) {}

    /// `entity`'s route was (re-)planned; `route_end_time` is when it will
    /// finish uninterrupted, `collision_count` how many distinct peers it
    /// will collide with first.
    fn on_route_planned(&mut self, _entity: EntityId, _route_end_time: f64, _collision_count: usize) {}

    /// `entity`'s route was realized (committed) up to `current_time`.
    fn on_route_realized(&mut self, _entity: EntityId, _current_time: f64) {}

    /// A collision-triggered realization was scheduled for `entity` and
    /// `peer` at `time`.
    fn on_collision_scheduled(&mut self, _entity: EntityId, _peer: EntityId, _time: f64) {}

    /// A previously scheduled collision pairing between `entity` and `peer`
    /// was cancelled by a re-plan before it fired.
    fn on_collision_cancelled(&mut self, _entity: EntityId, _peer: EntityId) {}

    /// The event loop drained or reached `max_time`.
    fn on_sim_end(&mut self, _final_time: f64) {}
}

/// A [`GridObserver`] that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl GridObserver for NoopObserver {}
