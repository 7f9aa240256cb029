//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `entity_history.csv` — one row per realized route segment
//! - `grid_events.csv` — one row per [`gs_grid::GridObserver`] hook firing

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EntityHistoryRow, GridEventRow, OutputResult};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    history: Writer<File>,
    events:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut history = Writer::from_path(dir.join("entity_history.csv"))?;
        history.write_record(["entity_id", "name", "step", "x_shift", "y_shift", "time_shift"])?;

        let mut events = Writer::from_path(dir.join("grid_events.csv"))?;
        events.write_record(["kind", "entity_id", "peer_id", "time", "collision_count"])?;

        Ok(Self { history, events, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_history(&mut self, rows: &[EntityHistoryRow]) -> OutputResult<()> {
        for row in rows {
            self.history.write_record(&[
                row.entity_id.to_string(),
                row.name.clone(),
                row.step.to_string(),
                row.x_shift.to_string(),
                row.y_shift.to_string(),
                row.time_shift.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_event(&mut self, row: &GridEventRow) -> OutputResult<()> {
        self.events.write_record(&[
            row.kind.as_str().to_string(),
            row.entity_id.to_string(),
            row.peer_id.map(|p| p.to_string()).unwrap_or_default(),
            row.time.to_string(),
            row.collision_count.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.history.flush()?;
        self.events.flush()?;
        Ok(())
    }
}
