//! `GridCsvObserver<W>` — bridges [`gs_grid::GridObserver`] to an
//! [`OutputWriter`].

use gs_core::EntityId;
use gs_grid::GridObserver;

use crate::row::{GridEventKind, GridEventRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`GridObserver`] that writes one [`GridEventRow`] per hook firing to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `GridObserver`
/// methods have no return value. After `grid.simulate()` returns, check for
/// errors with [`take_error`][Self::take_error].
///
/// Unlike the teacher's snapshot observer, this one does not call
/// `writer.finish()` from `on_sim_end`: entity history is only available
/// after `simulate` returns (see [`crate::write_entity_histories`]), so the
/// caller is responsible for writing it and calling `finish()` once both
/// files are complete.
pub struct GridCsvObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> GridCsvObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `grid.simulate()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Borrow the inner writer, e.g. to hand it to
    /// [`crate::write_entity_histories`] once `grid.simulate()` has returned.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    fn emit(&mut self, kind: GridEventKind, entity_id: EntityId, peer_id: Option<EntityId>, time: f64, collision_count: usize) {
        let row = GridEventRow { kind, entity_id, peer_id, time, collision_count };
        let result = self.writer.write_event(&row);
        // Keep only the first error.
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> GridObserver for GridCsvObserver<W> {
    fn on_entity_added(&mut self, entity: EntityId) {
        self.emit(GridEventKind::EntityAdded, entity, None, 0.0, 0);
    }

    fn on_route_planned(&mut self, entity: EntityId, route_end_time: f64, collision_count: usize) {
        self.emit(GridEventKind::RoutePlanned, entity, None, route_end_time, collision_count);
    }

    fn on_route_realized(&mut self, entity: EntityId, current_time: f64) {
        self.emit(GridEventKind::RouteRealized, entity, None, current_time, 0);
    }

    fn on_collision_scheduled(&mut self, entity: EntityId, peer: EntityId, time: f64) {
        self.emit(GridEventKind::CollisionScheduled, entity, Some(peer), time, 0);
    }

    fn on_collision_cancelled(&mut self, entity: EntityId, peer: EntityId) {
        self.emit(GridEventKind::CollisionCancelled, entity, Some(peer), 0.0, 0);
    }
}
