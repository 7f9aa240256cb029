//! `Entity` — the per-entity route lifecycle: `plan_route`/`realize_route`.
//!
//! An `Entity` never reaches across to other entities itself; cross-entity
//! orchestration (cancelling a collision peer's paired event, scheduling the
//! peer's own `RealizeRoute`) is the grid driver's job, since only the grid
//! owns the entities map and the time queue simultaneously. `Entity` only
//! needs a `&mut CellIndex` to reserve/release/sweep its own footprint.

use std::collections::HashMap;

use gs_core::{Aabb, EntityId, EventId, ReservationId, RouteDelta, Shape};
use gs_behavior::PendingEvent;
use gs_spatial::{moving_shape_overlap_intervals, CellIndex};

use crate::{EntityError, EntityResult};

/// Distinguishes moving entities from immovable obstacles.
///
/// A [`EntityKind::Static`] entity ignores collision-triggered realizations:
/// it never moves, so there is nothing for it to commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Dynamic,
    Static,
}

/// The outcome of a successful [`Entity::plan_route`] call: when the route
/// (uninterrupted) will end, and the earliest collision time with each
/// distinct peer that overlaps this entity's planned footprint.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanOutcome {
    pub route_end_time: f64,
    pub collisions: Vec<(EntityId, f64)>,
}

impl PlanOutcome {
    pub fn has_collision(&self) -> bool {
        !self.collisions.is_empty()
    }
}

pub struct Entity {
    pub id: EntityId,
    pub name: String,
    pub shape: Shape,
    pub x: f64,
    pub y: f64,
    pub kind: EntityKind,

    route_start_time: f64,
    route_end_time: f64,
    route_deltas: Vec<RouteDelta>,
    blocked_cells: Vec<(i64, i64, ReservationId)>,
    future_events: HashMap<EventId, PendingEvent>,
    history: Vec<RouteDelta>,
}

impl Entity {
    pub(crate) fn new(id: EntityId, name: String, shape: Shape, x: f64, y: f64, kind: EntityKind) -> Self {
        Self {
            id,
            name,
            shape,
            x,
            y,
            kind,
            route_start_time: 0.0,
            route_end_time: 0.0,
            route_deltas: Vec::new(),
            blocked_cells: Vec::new(),
            future_events: HashMap::new(),
            history: Vec::new(),
        }
    }

    pub fn aabb(&self) -> Aabb {
        self.shape.aabb()
    }

    pub fn history(&self) -> &[RouteDelta] {
        &self.history
    }

    /// `true` while a previously planned route has not yet fully realized.
    pub fn in_route(&self, current_time: f64) -> bool {
        self.route_end_time > current_time
    }

    /// Drain and return this entity's pending-event bookkeeping so the grid
    /// driver can cancel the matching time-queue entries (and their collision
    /// peers) before a re-plan.
    pub fn take_future_events(&mut self) -> HashMap<EventId, PendingEvent> {
        std::mem::take(&mut self.future_events)
    }

    /// Record that `pending` has been scheduled on this entity's behalf.
    pub fn record_pending_event(&mut self, pending: PendingEvent) {
        self.future_events.insert(pending.self_id(), pending);
    }

    fn clear_blocked_cells(&mut self, cell_index: &mut CellIndex) {
        for (cx, cy, reservation) in self.blocked_cells.drain(..) {
            cell_index.release(cx, cy, reservation);
        }
    }

    /// Plan a route starting at `current_time`, appending a terminal
    /// zero-motion delta so the entity's footprint is reserved out to
    /// `max_time`, and detect collisions with already-reserved cells.
    ///
    /// On success, the route is committed and the caller (the grid driver)
    /// is responsible for scheduling the events named in the returned
    /// [`PlanOutcome`]. On failure, no committed state changes — any cell
    /// reservations made during this call are rolled back first.
    pub fn plan_route(
        &mut self,
        current_time: f64,
        max_time: f64,
        mut deltas: Vec<RouteDelta>,
        raise_on_collision: bool,
        cell_index: &mut CellIndex,
    ) -> EntityResult<PlanOutcome> {
        if self.in_route(current_time) {
            return Err(EntityError::AlreadyRouted(self.name.clone()));
        }
        if current_time > max_time {
            return Err(EntityError::HorizonExceeded);
        }
        for d in &deltas {
            if !d.is_valid() {
                return Err(EntityError::InvalidSegment(d.time_shift));
            }
        }

        self.clear_blocked_cells(cell_index);

        let total_time_shift: f64 = deltas.iter().map(|d| d.time_shift).sum();
        let route_start_time = current_time;
        let route_end_time = (current_time + total_time_shift).min(max_time);

        let terminal_time_shift = max_time - current_time - total_time_shift;
        if terminal_time_shift > 0.0 {
            deltas.push(RouteDelta::new(0.0, 0.0, terminal_time_shift));
        }

        let mut x = self.x;
        let mut y = self.y;
        let mut t = current_time;
        let mut collisions: HashMap<EntityId, f64> = HashMap::new();
        let mut new_reservations = Vec::new();

        for delta in &deltas {
            let intervals = moving_shape_overlap_intervals(
                x,
                y,
                delta.x_shift,
                delta.y_shift,
                t,
                t + delta.time_shift,
                self.aabb(),
                cell_index.x_size(),
                cell_index.y_size(),
            )?;
            for (&(cx, cy), &(t_start, t_end)) in &intervals {
                for (other_start, other_end, other_id) in cell_index.iterate(cx, cy)? {
                    if t_start < other_end && t_end > other_start {
                        let collision_time = t_start.max(other_start);
                        collisions
                            .entry(other_id)
                            .and_modify(|existing| *existing = existing.min(collision_time))
                            .or_insert(collision_time);
                    }
                }
                let reservation = cell_index.reserve(cx, cy, t_start, t_end, self.id)?;
                new_reservations.push((cx, cy, reservation));
            }
            x += delta.x_shift;
            y += delta.y_shift;
            t += delta.time_shift;
        }

        if raise_on_collision && !collisions.is_empty() {
            for (cx, cy, reservation) in new_reservations {
                cell_index.release(cx, cy, reservation);
            }
            return Err(EntityError::CollisionForbidden(self.name.clone()));
        }

        self.blocked_cells = new_reservations;
        self.route_deltas = deltas;
        self.route_start_time = route_start_time;
        self.route_end_time = route_end_time;

        Ok(PlanOutcome { route_end_time, collisions: collisions.into_iter().collect() })
    }

    /// Walk the committed route up to `current_time`, appending each applied
    /// (possibly prorated) delta to `history` and updating position.
    ///
    /// Returns `false` when a [`EntityKind::Static`] entity no-ops a
    /// collision-triggered firing — the caller should not re-plan in that
    /// case, since nothing about the entity's state changed.
    pub fn realize_route(&mut self, current_time: f64, from_collision: bool) -> bool {
        if self.kind == EntityKind::Static && from_collision {
            return false;
        }

        let mut x = self.x;
        let mut y = self.y;
        let mut t = self.route_start_time;

        for delta in &self.route_deltas {
            if t >= current_time {
                break;
            }
            let (x_shift, y_shift, time_shift) = if t + delta.time_shift > current_time {
                let fraction = (current_time - t) / delta.time_shift;
                (delta.x_shift * fraction, delta.y_shift * fraction, current_time - t)
            } else {
                (delta.x_shift, delta.y_shift, delta.time_shift)
            };
            x += x_shift;
            y += y_shift;
            t += time_shift;
            self.history.push(RouteDelta::new(x_shift, y_shift, time_shift));
        }

        self.x = x;
        self.y = y;
        self.route_end_time = current_time;
        true
    }
}

/// Convert absolute `(x, y, time_shift)` waypoints into relative
/// [`RouteDelta`]s by subtracting each waypoint from the previous one (or
/// from `(start_x, start_y)` for the first).
pub fn waypoints_to_deltas(start_x: f64, start_y: f64, waypoints: &[(f64, f64, f64)]) -> Vec<RouteDelta> {
    let mut prev_x = start_x;
    let mut prev_y = start_y;
    let mut out = Vec::with_capacity(waypoints.len());
    for &(x, y, time_shift) in waypoints {
        out.push(RouteDelta::new(x - prev_x, y - prev_y, time_shift));
        prev_x = x;
        prev_y = y;
    }
    out
}
