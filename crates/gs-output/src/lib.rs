//! `gs-output` — CSV export of entity route history and grid-driver events.
//!
//! Writes two files to a configured output directory:
//!
//! | File                | Contents                                          |
//! |---------------------|----------------------------------------------------|
//! | `entity_history.csv`| one row per realized route segment, per entity     |
//! | `grid_events.csv`    | one row per [`gs_grid::GridObserver`] hook firing   |
//!
//! The two files come from two different mechanisms: route history only
//! exists after the fact (as `Entity::history()`), so it's dumped post-hoc
//! with [`write_entity_histories`]; grid events are streamed live by
//! attaching a [`GridCsvObserver`] before calling `Grid::simulate`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use gs_output::{collect_entity_histories, CsvWriter, GridCsvObserver};
//!
//! let events = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut grid = GridConfig::new("demo").build_with_observer(GridCsvObserver::new(events));
//! // ... add_entity / add_route ...
//! grid.simulate().unwrap();
//!
//! let history_rows = collect_entity_histories(&grid);
//! let obs = grid.observer_mut();
//! obs.writer_mut().write_history(&history_rows).unwrap();
//! obs.writer_mut().finish().unwrap();
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod history;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use history::{collect_entity_histories, write_entity_histories};
pub use observer::GridCsvObserver;
pub use row::{EntityHistoryRow, GridEventKind, GridEventRow};
pub use writer::OutputWriter;
