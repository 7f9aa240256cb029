//! `Grid` — owns the entity map, the cell reservation index, and the time
//! queue, and drives the discrete-event loop that ties them together.
//!
//! `Entity::plan_route` only ever touches its own route state and the shared
//! [`CellIndex`]; everything that requires seeing two entities or the queue
//! at once — cancelling a collision peer's paired event, scheduling both
//! halves of a collision pairing, re-planning after a realization fires —
//! happens here, since `Grid` is the only thing that owns the entity map and
//! the time queue simultaneously.

use std::collections::HashMap;

use gs_behavior::{EventPayload, PendingEvent};
use gs_core::{EntityId, EventId, RouteDelta, Shape};
use gs_entity::{Entity, EntityBuilder};
use gs_schedule::TimeQueue;
use gs_spatial::CellIndex;

use crate::{GridError, GridObserver, GridResult, NoopObserver};

/// The simulated 2D grid: a dense `x_size × y_size` array of unit cells,
/// the entities placed on it, and the event queue driving their routes.
///
/// Generic over its [`GridObserver`], defaulting to [`NoopObserver`] — the
/// observer is held as a field rather than threaded through every call, so
/// `add_entity` can report placement the same way `simulate` reports route
/// activity.
pub struct Grid<O: GridObserver = NoopObserver> {
    pub name: String,
    pub x_size: u32,
    pub y_size: u32,
    pub max_time: f64,
    entities: HashMap<EntityId, Entity>,
    cell_index: CellIndex,
    queue: TimeQueue<EventPayload>,
    next_entity_id: u64,
    observer: O,
}

impl Grid<NoopObserver> {
    pub fn new(name: impl Into<String>, x_size: u32, y_size: u32, max_time: f64) -> Self {
        Self::with_observer(name, x_size, y_size, max_time, NoopObserver)
    }
}

impl<O: GridObserver> Grid<O> {
    pub fn with_observer(name: impl Into<String>, x_size: u32, y_size: u32, max_time: f64, observer: O) -> Self {
        Self {
            name: name.into(),
            x_size,
            y_size,
            max_time,
            entities: HashMap::new(),
            cell_index: CellIndex::new(x_size, y_size),
            queue: TimeQueue::new(),
            next_entity_id: 0,
            observer,
        }
    }

    /// The event queue's current time — the time of the most recently
    /// processed event, or `0.0` before the first one.
    pub fn current_time(&self) -> f64 {
        self.queue.current_time()
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// All registered entities, in no particular order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.entities.values()
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Registers a new entity, assigning it the grid's next id, and claims
    /// its starting footprint by scheduling an immediate (empty-route) plan
    /// at `time` (the grid's start, `0.0`, if `None`).
    ///
    /// That placement always runs with collisions forbidden: if `time`
    /// overlaps another entity's existing reservation, [`Grid::simulate`]
    /// surfaces a [`GridError::Entity`] (`CollisionForbidden`) once the
    /// event loop reaches it.
    pub fn add_entity(&mut self, builder: EntityBuilder, time: Option<f64>) -> GridResult<EntityId> {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id += 1;
        self.entities.insert(id, builder.build(id));
        self.observer.on_entity_added(id);

        let time = time.unwrap_or(0.0);
        self.queue.add(time, EventPayload::PlanRoute { target: id, deltas: Vec::new(), raise_on_collision: true })?;
        Ok(id)
    }

    /// Adds the four boundary walls that keep entities inside the grid,
    /// each one unit cell thick along the grid's edge.
    ///
    /// Walls never overlap one another by construction, so placing them at
    /// `time=0.0` on an otherwise-empty grid never fails.
    pub fn add_exterior_walls(&mut self) {
        let x = self.x_size as f64;
        let y = self.y_size as f64;

        self.add_entity(
            EntityBuilder::new("Left Wall")
                .shape(Shape::new(vec![(0.0, 0.0), (0.0, y), (1.0, y), (1.0, 0.0)]).expect("wall shape is valid"))
                .position(0.0, 0.0)
                .static_entity(),
            None,
        )
        .expect("exterior walls never overlap each other");
        self.add_entity(
            EntityBuilder::new("Right Wall")
                .shape(Shape::new(vec![(0.0, 0.0), (0.0, y), (-1.0, y), (-1.0, 0.0)]).expect("wall shape is valid"))
                .position(x, 0.0)
                .static_entity(),
            None,
        )
        .expect("exterior walls never overlap each other");
        self.add_entity(
            EntityBuilder::new("Top Wall")
                .shape(
                    Shape::new(vec![(0.0, 0.0), (x - 2.0, 0.0), (x - 2.0, -1.0), (0.0, -1.0)])
                        .expect("wall shape is valid"),
                )
                .position(1.0, y)
                .static_entity(),
            None,
        )
        .expect("exterior walls never overlap each other");
        self.add_entity(
            EntityBuilder::new("Bottom Wall")
                .shape(
                    Shape::new(vec![(0.0, 0.0), (x - 2.0, 0.0), (x - 2.0, 1.0), (0.0, 1.0)])
                        .expect("wall shape is valid"),
                )
                .position(1.0, 0.0)
                .static_entity(),
            None,
        )
        .expect("exterior walls never overlap each other");
    }

    /// Schedules a `plan_route` call for `target`, at `time` (the queue's
    /// current time if `None`). Returns the id of the scheduled event.
    pub fn add_route(
        &mut self,
        target: EntityId,
        deltas: Vec<RouteDelta>,
        time: Option<f64>,
        raise_on_collision: bool,
    ) -> GridResult<EventId> {
        let time = time.unwrap_or_else(|| self.queue.current_time());
        let id = self.queue.add(time, EventPayload::PlanRoute { target, deltas, raise_on_collision })?;
        Ok(id)
    }

    /// Processes every event scheduled at the earliest remaining time,
    /// returning how many events were processed (`0` if the queue is empty).
    pub fn resolve_next_state(&mut self) -> GridResult<usize> {
        let batch = self.queue.drain_same_time();
        let n = batch.len();
        for (_event_id, payload) in batch {
            self.dispatch(payload)?;
        }
        Ok(n)
    }

    /// Runs the event loop until the queue is empty or the next event is
    /// scheduled strictly after `max_time`, reporting progress through this
    /// grid's observer.
    ///
    /// An event scheduled exactly at `max_time` is still dispatched — P5 only
    /// forbids firing *past* the horizon, not on it.
    pub fn simulate(&mut self) -> GridResult<()> {
        loop {
            match self.queue.peek_next() {
                None => break,
                Some((time, _)) if time > self.max_time => break,
                Some(_) => {}
            }
            self.resolve_next_state()?;
        }
        self.observer.on_sim_end(self.queue.current_time());
        Ok(())
    }

    fn dispatch(&mut self, payload: EventPayload) -> GridResult<()> {
        match payload {
            EventPayload::PlanRoute { target, deltas, raise_on_collision } => {
                self.do_plan_route(target, deltas, raise_on_collision)
            }
            EventPayload::RealizeRoute { target, from_collision } => self.do_realize_route(target, from_collision),
        }
    }

    /// Cancels every event this entity is still waiting on, including the
    /// paired half of any scheduled collision realization. Mirrors leaving
    /// the other side of a cancelled pairing's bookkeeping stale — cancelling
    /// an id twice, or one that already fired, is harmless.
    fn cancel_future_events(&mut self, target: EntityId) {
        let Some(entity) = self.entities.get_mut(&target) else { return };
        let pending = entity.take_future_events();
        for (event_id, pending_event) in pending {
            self.queue.cancel(event_id);
            if let PendingEvent::CollisionPair { peer_id, peer_entity, .. } = pending_event {
                self.queue.cancel(peer_id);
                self.observer.on_collision_cancelled(target, peer_entity);
            }
        }
    }

    fn do_plan_route(&mut self, target: EntityId, deltas: Vec<RouteDelta>, raise_on_collision: bool) -> GridResult<()> {
        self.cancel_future_events(target);

        let current_time = self.queue.current_time();
        let max_time = self.max_time;

        // A redirect of a still-in-route entity: realize (prorate) its
        // position and history up to `current_time` first, the same way a
        // natural `RealizeRoute` firing would, so `plan_route`'s in-route
        // precondition doesn't reject the new route out from under it.
        if let Some(entity) = self.entities.get_mut(&target) {
            if entity.in_route(current_time) {
                entity.realize_route(current_time, false);
                self.observer.on_route_realized(target, current_time);
            }
        }

        let outcome = {
            let entity = self.entities.get_mut(&target).ok_or(GridError::UnknownEntity(target))?;
            entity.plan_route(current_time, max_time, deltas, raise_on_collision, &mut self.cell_index)?
        };
        self.observer.on_route_planned(target, outcome.route_end_time, outcome.collisions.len());

        for (peer_id, collision_time) in &outcome.collisions {
            let self_event_id =
                self.queue.add(*collision_time, EventPayload::RealizeRoute { target, from_collision: true })?;
            let peer_event_id = self
                .queue
                .add(*collision_time, EventPayload::RealizeRoute { target: *peer_id, from_collision: true })?;

            if let Some(entity) = self.entities.get_mut(&target) {
                entity.record_pending_event(PendingEvent::CollisionPair {
                    self_id: self_event_id,
                    peer_id: peer_event_id,
                    peer_entity: *peer_id,
                });
            }
            if let Some(peer) = self.entities.get_mut(peer_id) {
                peer.record_pending_event(PendingEvent::CollisionPair {
                    self_id: peer_event_id,
                    peer_id: self_event_id,
                    peer_entity: target,
                });
            }
            self.observer.on_collision_scheduled(target, *peer_id, *collision_time);
        }

        if outcome.route_end_time > current_time {
            let event_id =
                self.queue.add(outcome.route_end_time, EventPayload::RealizeRoute { target, from_collision: false })?;
            if let Some(entity) = self.entities.get_mut(&target) {
                entity.record_pending_event(PendingEvent::Terminal { self_id: event_id });
            }
        }
        Ok(())
    }

    fn do_realize_route(&mut self, target: EntityId, from_collision: bool) -> GridResult<()> {
        let current_time = self.queue.current_time();
        let should_replan = match self.entities.get_mut(&target) {
            Some(entity) => entity.realize_route(current_time, from_collision),
            None => return Err(GridError::UnknownEntity(target)),
        };
        self.observer.on_route_realized(target, current_time);
        if should_replan {
            self.do_plan_route(target, vec![], false)?;
        }
        Ok(())
    }
}
