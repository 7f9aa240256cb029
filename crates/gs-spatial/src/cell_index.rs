//! `CellIndex` — the grid's 2D array of per-cell reservation maps.
//!
//! Each cell holds a map from [`ReservationId`] to `(t_start, t_end, owner)`.
//! There is no locking: the engine is single-threaded and all mutation is
//! driven serially by the `Grid`'s event loop.

use gs_core::{EntityId, ReservationId};

use crate::{SpatialError, SpatialResult};

#[cfg(feature = "fast-hash")]
type CellMap = rustc_hash::FxHashMap<ReservationId, (f64, f64, EntityId)>;
#[cfg(not(feature = "fast-hash"))]
type CellMap = std::collections::HashMap<ReservationId, (f64, f64, EntityId)>;

/// A dense `y_size × x_size` array of cells, each a reservation map.
pub struct CellIndex {
    x_size: u32,
    y_size: u32,
    cells: Vec<Vec<CellMap>>,
    next_reservation_id: u64,
}

impl CellIndex {
    /// Build an empty index over a grid of `x_size × y_size` unit cells.
    pub fn new(x_size: u32, y_size: u32) -> Self {
        let row = || (0..x_size).map(|_| CellMap::default()).collect();
        Self {
            x_size,
            y_size,
            cells: (0..y_size).map(|_| row()).collect(),
            next_reservation_id: 0,
        }
    }

    pub fn x_size(&self) -> u32 {
        self.x_size
    }

    pub fn y_size(&self) -> u32 {
        self.y_size
    }

    fn check_bounds(&self, cx: i64, cy: i64) -> SpatialResult<(usize, usize)> {
        if cx < 0 || cy < 0 || cx >= self.x_size as i64 || cy >= self.y_size as i64 {
            return Err(SpatialError::OutOfBounds {
                x: cx,
                y: cy,
                x_size: self.x_size,
                y_size: self.y_size,
            });
        }
        Ok((cx as usize, cy as usize))
    }

    /// Reserve cell `(cx, cy)` for `owner` during `[t_s, t_e]`, returning the
    /// new reservation's id.
    pub fn reserve(
        &mut self,
        cx: i64,
        cy: i64,
        t_s: f64,
        t_e: f64,
        owner: EntityId,
    ) -> SpatialResult<ReservationId> {
        let (cx, cy) = self.check_bounds(cx, cy)?;
        let id = ReservationId(self.next_reservation_id);
        self.next_reservation_id += 1;
        self.cells[cy][cx].insert(id, (t_s, t_e, owner));
        Ok(id)
    }

    /// Release a previously made reservation. A missing id is not an error —
    /// it may already have been released by a prior `plan_route`'s clear.
    pub fn release(&mut self, cx: i64, cy: i64, reservation: ReservationId) {
        if let Ok((cx, cy)) = self.check_bounds(cx, cy) {
            self.cells[cy][cx].remove(&reservation);
        }
    }

    /// Iterate the live reservations in cell `(cx, cy)`.
    pub fn iterate(&self, cx: i64, cy: i64) -> SpatialResult<impl Iterator<Item = (f64, f64, EntityId)> + '_> {
        let (cx, cy) = self.check_bounds(cx, cy)?;
        Ok(self.cells[cy][cx].values().copied())
    }
}
