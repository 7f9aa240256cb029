//! Tagged event variants dispatched by the grid's event loop.
//!
//! The reference queue carried polymorphic event objects, each closing over
//! a method to call back into. Here the queue payload is a plain enum
//! targeting an [`EntityId`]; the grid driver resolves the id to an entity
//! and dispatches with a `match`, so the queue itself stays a trivially
//! copyable value type with no virtual dispatch.

use gs_core::{EntityId, EventId, RouteDelta};

/// What to do when this event fires, and which entity to do it to.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventPayload {
    /// Re-plan `target`'s route starting from its current state.
    ///
    /// `deltas` is empty when this is the re-reservation call a route
    /// realization makes to extend its footprint back out to the horizon.
    PlanRoute {
        target: EntityId,
        deltas: Vec<RouteDelta>,
        raise_on_collision: bool,
    },

    /// Realize `target`'s route up to the current time.
    ///
    /// `from_collision` is `true` when this firing was triggered by a
    /// collision pairing rather than reaching its own unpaired terminal
    /// delta; `StaticEntity` uses this to no-op instead of moving.
    RealizeRoute {
        target: EntityId,
        from_collision: bool,
    },
}

impl EventPayload {
    /// The entity this event is destined for.
    pub fn target(&self) -> EntityId {
        match self {
            EventPayload::PlanRoute { target, .. } => *target,
            EventPayload::RealizeRoute { target, .. } => *target,
        }
    }
}

/// Bookkeeping an entity keeps per future event it has scheduled, so a
/// later re-plan can cancel exactly what it needs to.
///
/// A collision schedules two `RealizeRoute` events, one per entity,
/// that must cancel together: clearing one without the other would leave
/// a stale paired event that fires as if the collision still happened.
/// This is an explicit sum type over that pairing rather than mutual
/// ownership, since the peer entity's lifetime belongs to the grid, not
/// to this entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PendingEvent {
    /// An unpaired event — typically the terminal zero-motion delta's
    /// realization. Cancelling it requires nothing beyond removing it from
    /// the time queue.
    Terminal { self_id: EventId },

    /// One half of a collision pairing. Cancelling `self_id` must also
    /// cancel `peer_id` on `peer_entity`.
    CollisionPair {
        self_id: EventId,
        peer_id: EventId,
        peer_entity: EntityId,
    },
}

impl PendingEvent {
    /// The event id this entity scheduled for itself.
    pub fn self_id(&self) -> EventId {
        match self {
            PendingEvent::Terminal { self_id } => *self_id,
            PendingEvent::CollisionPair { self_id, .. } => *self_id,
        }
    }
}
