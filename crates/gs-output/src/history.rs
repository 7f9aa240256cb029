//! Post-hoc export of entity route history.
//!
//! `Grid`'s observer hooks only ever pass scalars, so they can't carry an
//! entity's full realized history as it accumulates. This walks
//! [`Grid::entities`] once `simulate` has returned and dumps each entity's
//! `history()` instead.

use gs_grid::{Grid, GridObserver};

use crate::row::EntityHistoryRow;
use crate::writer::OutputWriter;
use crate::OutputResult;

/// Collect every entity's realized route history into rows (in entity-id
/// order, then step order), without touching any writer.
///
/// Split out from [`write_entity_histories`] so callers whose writer lives
/// behind a mutable borrow of `grid` itself (e.g. a [`crate::GridCsvObserver`]
/// attached as the grid's own observer) can collect these rows first, drop
/// the immutable borrow of `grid`, and only then borrow the writer mutably.
pub fn collect_entity_histories<O: GridObserver>(grid: &Grid<O>) -> Vec<EntityHistoryRow> {
    let mut entities: Vec<_> = grid.entities().collect();
    entities.sort_by_key(|e| e.id);

    entities
        .into_iter()
        .flat_map(|entity| {
            entity.history().iter().enumerate().map(move |(step, delta)| EntityHistoryRow {
                entity_id: entity.id,
                name: entity.name.clone(),
                step,
                x_shift: delta.x_shift,
                y_shift: delta.y_shift,
                time_shift: delta.time_shift,
            })
        })
        .collect()
}

/// Write every entity's realized route history through `writer`.
pub fn write_entity_histories<O: GridObserver>(grid: &Grid<O>, writer: &mut impl OutputWriter) -> OutputResult<()> {
    let rows = collect_entity_histories(grid);
    if !rows.is_empty() {
        writer.write_history(&rows)?;
    }
    Ok(())
}
